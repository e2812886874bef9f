//! Top navigation bar: brand, section links, theme toggle.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::Theme;

pub const BRAND: &str = "TechInsights";
const LINKS: [&str; 3] = ["Archive", "About", "Subscribe"];

/// Render the bar and return the rect of the theme toggle glyph.
pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) -> Rect {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(BRAND, theme.accent_bold()),
        Span::raw("   "),
    ];
    for (i, link) in LINKS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*link, theme.muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);

    let glyph = app.theme_mode.toggle_glyph();
    let toggle = Line::from(vec![
        Span::styled("[t] ", theme.muted()),
        Span::styled(glyph, theme.accent_bold()),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), area);

    // Glyph sits one column in from the right edge.
    Rect::new(area.x + area.width.saturating_sub(2), area.y, 1, 1)
}
