//! Article page: header, title, brief, breakdown list, importance,
//! subscribe call-to-action, author card and footer, laid out as one
//! scrollable column of lines.

use ratatui::text::{Line, Span};

use techbrief_core::breakdown::BadgeKind;
use techbrief_core::content::Article;

use super::breakdown::BreakdownItemWidget;
use super::text::{display_width, wrap_text};
use crate::app::AppState;
use crate::theme::Theme;

pub const FOOTER: &str = "© 2025 TechInsights. All rights reserved.";

/// Where one breakdown item landed on the page (absolute line indices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpan {
    pub position: usize,
    pub start: usize,
    pub summary_rows: usize,
    pub tab_row: Option<usize>,
    pub end: usize,
}

pub struct PageLayout<'a> {
    pub lines: Vec<Line<'a>>,
    pub items: Vec<ItemSpan>,
}

impl PageLayout<'_> {
    /// Clamp a free scroll offset so the page never scrolls past its end.
    pub fn clamp_scroll(&self, current: u16, height: u16) -> u16 {
        let max_scroll = self.lines.len().saturating_sub(usize::from(height));
        u16::try_from(usize::from(current).min(max_scroll)).unwrap_or(u16::MAX)
    }

    /// Scroll offset that keeps the focused item's summary on screen.
    pub fn scroll_for(&self, focused: usize, current: u16, height: u16) -> u16 {
        let max_scroll = self.lines.len().saturating_sub(usize::from(height));
        let mut scroll = usize::from(current).min(max_scroll);
        if let Some(span) = self.items.iter().find(|s| s.position == focused) {
            let height = usize::from(height).max(1);
            if span.start < scroll {
                scroll = span.start;
            } else if span.start + span.summary_rows > scroll + height {
                scroll = (span.start + span.summary_rows).saturating_sub(height);
            }
        }
        u16::try_from(scroll).unwrap_or(u16::MAX)
    }
}

fn heading<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, text: &str) {
    lines.push(Line::from(Span::styled(text.to_string(), theme.heading())));
}

fn paragraph<'a>(
    lines: &mut Vec<Line<'a>>,
    theme: &Theme,
    text: &str,
    width: usize,
    prefix: &'static str,
) {
    let prefix_width = display_width(prefix);
    for chunk in wrap_text(text, width.saturating_sub(prefix_width)) {
        lines.push(Line::from(vec![
            Span::styled(prefix, theme.accent()),
            Span::styled(chunk, theme.body()),
        ]));
    }
}

fn header_lines<'a>(article: &Article, theme: &Theme, width: usize) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let date = if article.publish_time.is_empty() {
        article.publish_date.clone()
    } else {
        format!("{} · {}", article.publish_date, article.publish_time)
    };
    lines.push(Line::from(vec![
        Span::styled(date, theme.muted()),
        Span::raw("   "),
        Span::styled("[s] Share", theme.accent()),
    ]));
    lines.push(Line::from(""));

    let number = format!("{}  ", article.number);
    let number_width = display_width(&number);
    let title_width = width.saturating_sub(number_width);
    for (i, chunk) in wrap_text(&article.title, title_width).into_iter().enumerate() {
        let lead = if i == 0 {
            Span::styled(number.clone(), theme.accent_bold())
        } else {
            Span::raw(" ".repeat(number_width))
        };
        lines.push(Line::from(vec![lead, Span::styled(chunk, theme.heading())]));
    }
    lines.push(Line::from(""));

    heading(&mut lines, theme, "Brief");
    paragraph(&mut lines, theme, &article.brief, width, "  ");
    lines.push(Line::from(""));
    lines
}

fn closing_lines<'a>(app: &AppState, theme: &Theme, width: usize) -> Vec<Line<'a>> {
    let article = &app.article;
    let mut lines = Vec::new();

    heading(&mut lines, theme, "Why It's Important");
    paragraph(&mut lines, theme, &article.importance.text, width, "┃ ");
    if !article.importance.sources.is_empty() {
        let mut spans = vec![Span::styled("┃ ", theme.accent())];
        for (i, source) in article.importance.sources.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {source} "),
                theme.badge(BadgeKind::Category),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Want to go beyond headlines?",
        theme.accent_bold(),
    )));
    match &app.subscribed {
        Some(email) => lines.push(Line::from(vec![
            Span::styled("Subscribed as ", theme.body()),
            Span::styled(email.to_string(), theme.accent()),
            Span::styled(" ✓", theme.accent()),
        ])),
        None => lines.push(Line::from(vec![
            Span::styled("Subscribe to my Free newsletter.  ", theme.body()),
            Span::styled("[u] Subscribe", theme.accent()),
        ])),
    }
    lines.push(Line::from(""));

    let rule = Span::styled("─".repeat(width), theme.muted());
    lines.push(Line::from(rule.clone()));
    if !article.author.name.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(format!("({}) ", article.author.initials()), theme.accent_bold()),
            Span::styled(article.author.name.clone(), theme.heading()),
            Span::raw("   "),
            Span::styled("Follow", theme.accent()),
        ]));
        if !article.author.role.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("     {}", article.author.role),
                theme.muted(),
            )));
        }
        lines.push(Line::from(rule));
    }
    lines.push(Line::from(Span::styled(FOOTER, theme.muted())));
    lines
}

/// Lay out the whole page at `width` columns.
pub fn build_page<'a>(app: &'a AppState, theme: &'a Theme, width: u16) -> PageLayout<'a> {
    let w = usize::from(width).max(10);
    let mut lines = header_lines(&app.article, theme, w);
    let mut items = Vec::with_capacity(app.breakdown.len());

    heading(&mut lines, theme, "Breakdown");
    let cursor = app.breakdown.cursor();
    for item in app.breakdown.items() {
        let focused = item.position() == cursor;
        let layout = BreakdownItemWidget::new(item.view(), focused, theme).layout(width.max(10));
        let start = lines.len();
        items.push(ItemSpan {
            position: item.position(),
            start,
            summary_rows: layout.summary_rows,
            tab_row: layout.tab_row.map(|row| start + row),
            end: start + layout.lines.len(),
        });
        lines.extend(layout.lines);
        lines.push(Line::from(""));
    }

    lines.extend(closing_lines(app, theme, w));
    PageLayout { lines, items }
}
