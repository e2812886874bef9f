//! Overlay widgets: help, share menu, subscribe form.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use techbrief_core::share::SharePlatform;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Keyboard shortcuts overlay.
pub fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Keyboard Shortcuts [Esc]close ")
        .title_style(theme.accent_bold())
        .style(theme.base());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, theme, "Breakdown");
    key(&mut lines, theme, "j / k", "Move to next / previous point");
    key(&mut lines, theme, "Enter / Space", "Expand or collapse the point");
    key(&mut lines, theme, "c", "Copy the point text");
    key(&mut lines, theme, "1 / 2 / 3", "Details / Metadata / Links tab");
    key(&mut lines, theme, "h / l, Tab", "Previous / next tab");
    key(&mut lines, theme, "n / p", "Next / previous related link");
    key(&mut lines, theme, "y", "Copy the selected link URL");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Page");
    key(&mut lines, theme, "s", "Share the article");
    key(&mut lines, theme, "u", "Subscribe to the newsletter");
    key(&mut lines, theme, "t", "Toggle light / dark theme");
    key(&mut lines, theme, "r", "Reload the article from disk");
    key(&mut lines, theme, "PgUp / PgDn", "Scroll the page");
    key(&mut lines, theme, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Mouse");
    key(&mut lines, theme, "Click point", "Expand or collapse");
    key(&mut lines, theme, "Click ⧉", "Copy without expanding");
    key(&mut lines, theme, "Click tab", "Switch detail view");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

/// Share menu overlay.
pub fn render_share(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let popup = centered_rect(50, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Share [Esc]cancel ")
        .title_style(theme.accent_bold())
        .style(theme.base());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(app.article.title.as_str(), theme.heading())),
        Line::from(""),
        share_option(theme, "x", SharePlatform::Twitter.label()),
        share_option(theme, "i", SharePlatform::LinkedIn.label()),
        share_option(theme, "y", "Copy link"),
        Line::from(""),
        Line::from(Span::styled(app.page_url.as_str(), theme.muted())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Subscribe form overlay.
pub fn render_subscribe(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(" Subscribe [Enter]submit [Esc]cancel ")
        .title_style(theme.accent_bold())
        .style(theme.base());

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled("Enter your email:", theme.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme.accent()),
            Span::styled(app.subscribe.input.as_str(), theme.accent_bold()),
            Span::styled("_", theme.accent()),
        ]),
    ];
    if let Some(err) = &app.subscribe.error {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(err.as_str(), theme.negative())));
    }

    let para = Paragraph::new(text).block(block);
    f.render_widget(para, popup);
}

fn share_option<'a>(theme: &Theme, key: &'static str, label: &'static str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  [{key}] "), theme.accent()),
        Span::styled(label, theme.body()),
    ])
}

fn section(lines: &mut Vec<Line<'_>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>14}  ", keys), theme.accent()),
        Span::styled(desc.to_string(), theme.muted()),
    ]));
}
