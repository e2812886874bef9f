//! Breakdown item widget
//!
//! Summary row:
//! - Directional indicator (▸ collapsed, ▾ expanded)
//! - Point text, wrapped
//! - Copy control in the last column (⧉ idle, ✓ copied, ✗ failed)
//!
//! Detail panel (expanded only): tab strip, then the active view.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use techbrief_core::breakdown::{DetailBody, DetailTab, DetailView, ItemView, MetadataRow};

use super::text::{display_width, pad_to, wrap_text};
use crate::theme::Theme;

/// Columns taken by the indicator prefix (`▸ `) and the copy suffix (` ⧉`).
const SUMMARY_PREFIX: usize = 2;
const SUMMARY_SUFFIX: usize = 2;
/// Detail panel gutter: `  │ `.
const DETAIL_GUTTER: &str = "  │ ";
const DETAIL_GUTTER_WIDTH: usize = 4;
const TAB_GAP: usize = 2;

/// Lines for one item plus the row offsets mouse hit-testing needs.
pub struct ItemLines<'a> {
    pub lines: Vec<Line<'a>>,
    /// Rows (from the item's first line) belonging to the summary.
    pub summary_rows: usize,
    /// Row of the tab strip, when expanded.
    pub tab_row: Option<usize>,
}

/// Column range of each tab label within the tab strip row.
pub fn tab_columns() -> [(DetailTab, Range<u16>); 3] {
    let mut col = DETAIL_GUTTER_WIDTH;
    DetailTab::ALL.map(|tab| {
        let start = col;
        let end = start + display_width(tab.label());
        col = end + TAB_GAP;
        (tab, start as u16..end as u16)
    })
}

/// Whether column `x` of the first summary row is the copy control.
pub fn is_copy_column(x: u16, width: u16) -> bool {
    x + SUMMARY_SUFFIX as u16 >= width
}

pub struct BreakdownItemWidget<'a> {
    view: ItemView<'a>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> BreakdownItemWidget<'a> {
    pub fn new(view: ItemView<'a>, focused: bool, theme: &'a Theme) -> Self {
        Self {
            view,
            focused,
            theme,
        }
    }

    pub fn layout(&self, width: u16) -> ItemLines<'a> {
        let width = usize::from(width).max(SUMMARY_PREFIX + SUMMARY_SUFFIX + 1);
        let mut lines = self.summary_lines(width);
        let summary_rows = lines.len();
        let mut tab_row = None;

        if let Some(detail) = &self.view.detail {
            tab_row = Some(lines.len());
            let surface = self.theme.surface();
            lines.extend(
                self.detail_lines(detail, width - DETAIL_GUTTER_WIDTH)
                    .into_iter()
                    .map(|line| line.style(surface)),
            );
        }

        ItemLines {
            lines,
            summary_rows,
            tab_row,
        }
    }

    fn summary_lines(&self, width: usize) -> Vec<Line<'a>> {
        let theme = self.theme;
        let text_width = width - SUMMARY_PREFIX - SUMMARY_SUFFIX;
        let text_style = if self.focused {
            theme.heading()
        } else {
            theme.body()
        };
        let indicator_style = if self.focused {
            theme.accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            theme.accent_bold()
        };

        let summary = &self.view.summary;
        wrap_text(summary.point, text_width)
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                if i == 0 {
                    Line::from(vec![
                        Span::styled(summary.indicator.glyph(), indicator_style),
                        Span::raw(" "),
                        Span::styled(pad_to(&chunk, text_width), text_style),
                        Span::raw(" "),
                        Span::styled(summary.copy.glyph(), theme.copy_feedback(summary.copy)),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw(" ".repeat(SUMMARY_PREFIX)),
                        Span::styled(chunk, text_style),
                    ])
                }
            })
            .collect()
    }

    fn gutter(&self) -> Span<'a> {
        Span::styled(DETAIL_GUTTER, self.theme.muted())
    }

    fn detail_lines(&self, detail: &DetailView<'a>, width: usize) -> Vec<Line<'a>> {
        let theme = self.theme;
        let mut lines = Vec::new();

        let mut tabs = vec![self.gutter()];
        for (i, (tab, active)) in detail.tabs().into_iter().enumerate() {
            if i > 0 {
                tabs.push(Span::raw(" ".repeat(TAB_GAP)));
            }
            tabs.push(Span::styled(tab.label(), theme.tab(active)));
        }
        lines.push(Line::from(tabs));
        lines.push(Line::from(vec![
            self.gutter(),
            Span::styled("─".repeat(width), theme.muted()),
        ]));

        match &detail.body {
            DetailBody::Details { info, badges } => {
                for chunk in wrap_text(info, width) {
                    lines.push(Line::from(vec![self.gutter(), Span::styled(chunk, theme.body())]));
                }
                let mut spans = vec![self.gutter()];
                for (i, badge) in badges.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(Span::styled(format!(" {} ", badge.text), theme.badge(badge.kind)));
                }
                lines.push(Line::from(spans));
            }
            DetailBody::Metadata { rows } => {
                for row in rows {
                    lines.push(self.metadata_line(row, width));
                }
            }
            DetailBody::Links { links, selected } => {
                if links.is_empty() {
                    lines.push(Line::from(vec![
                        self.gutter(),
                        Span::styled("No related links", theme.muted()),
                    ]));
                }
                for (i, link) in links.iter().enumerate() {
                    let is_selected = i == *selected;
                    let marker = if is_selected { "› " } else { "  " };
                    let title_style = if is_selected {
                        theme.accent_bold()
                    } else {
                        theme.body()
                    };
                    lines.push(Line::from(vec![
                        self.gutter(),
                        Span::styled(marker, theme.accent()),
                        Span::styled("↗ ", theme.accent()),
                        Span::styled(link.title.clone(), title_style),
                        Span::styled(format!("  {}", link.url), theme.muted()),
                    ]));
                }
            }
        }
        lines
    }

    fn metadata_line(&self, row: &MetadataRow, width: usize) -> Line<'a> {
        let label_len = display_width(&row.label);
        let value_len = display_width(&row.value);
        let gap = width.saturating_sub(label_len + value_len).max(1);
        Line::from(vec![
            self.gutter(),
            Span::styled(row.label.clone(), self.theme.muted()),
            Span::raw(" ".repeat(gap)),
            Span::styled(row.value.clone(), self.theme.body()),
        ])
    }
}

impl Widget for BreakdownItemWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area.width);
        Paragraph::new(layout.lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techbrief_core::breakdown::BreakdownItem;
    use techbrief_core::content::BreakdownEntry;

    fn render_to_buffer(widget: BreakdownItemWidget, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

    fn render_to_string(widget: BreakdownItemWidget, area: Rect) -> Vec<String> {
        let buf = render_to_buffer(widget, area);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn collapsed_item_renders_summary_only() {
        let theme = Theme::default();
        let item = BreakdownItem::new(0, BreakdownEntry::new("Aiming to acquire over 1.3M GPUs"));
        let widget = BreakdownItemWidget::new(item.view(), false, &theme);
        let layout = widget.layout(40);
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.summary_rows, 1);
        assert!(layout.tab_row.is_none());

        let rows = render_to_string(widget, Rect::new(0, 0, 40, 3));
        assert!(rows[0].starts_with("▸ Aiming to acquire"));
        assert!(rows[0].trim_end().ends_with('⧉'));
        assert!(rows[1].trim().is_empty());
    }

    #[test]
    fn expanded_details_view() {
        let theme = Theme::default();
        let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
        item.toggle_expand();
        let rows = render_to_string(
            BreakdownItemWidget::new(item.view(), true, &theme),
            Rect::new(0, 0, 80, 8),
        );
        let content = rows.join("\n");
        assert!(rows[0].starts_with("▾ X"));
        assert!(rows[1].contains("Details  Metadata  Links"));
        assert!(content.contains("More detailed information about this point goes here..."));
        assert!(content.contains(" Infrastructure "));
        assert!(content.contains(" High Confidence "));
    }

    #[test]
    fn metadata_view_rows() {
        let theme = Theme::default();
        let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
        item.toggle_expand();
        item.select_tab(DetailTab::Metadata);
        let rows = render_to_string(
            BreakdownItemWidget::new(item.view(), false, &theme),
            Rect::new(0, 0, 60, 8),
        );
        assert!(rows[3].contains("date Updated"));
        assert!(rows[4].contains("source") && rows[4].contains("Internal Analysis"));
        assert!(rows[5].contains("confidence") && rows[5].contains("High"));
        assert!(rows[6].contains("category") && rows[6].contains("Infrastructure"));
        assert!(!rows.join("\n").contains("related Links"));
    }

    #[test]
    fn links_view_in_order() {
        let theme = Theme::default();
        let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
        item.toggle_expand();
        item.select_tab(DetailTab::Links);
        let rows = render_to_string(
            BreakdownItemWidget::new(item.view(), false, &theme),
            Rect::new(0, 0, 60, 6),
        );
        assert!(rows[3].contains("› ↗ Related Article 1"));
        assert!(rows[4].contains("Industry Report"));
    }

    #[test]
    fn copy_glyph_tracks_feedback() {
        use std::time::Instant;
        use techbrief_core::clipboard::MemoryClipboard;
        use techbrief_core::timer::TimerQueue;

        let theme = Theme::default();
        let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
        let mut timers = TimerQueue::new();
        let mut clipboard = MemoryClipboard::new();
        item.copy_point_text(&mut clipboard, &mut timers, Instant::now())
            .unwrap();
        let rows = render_to_string(
            BreakdownItemWidget::new(item.view(), false, &theme),
            Rect::new(0, 0, 20, 1),
        );
        assert_eq!(rows[0].chars().last(), Some('✓'));
    }

    #[test]
    fn long_point_wraps_and_counts_summary_rows() {
        let theme = Theme::default();
        let item = BreakdownItem::new(
            0,
            BreakdownEntry::new(
                "Planning to deploy 1GW of compute power in 2025, with new datacenter construction",
            ),
        );
        let layout = BreakdownItemWidget::new(item.view(), false, &theme).layout(30);
        assert!(layout.summary_rows > 1);
        assert_eq!(layout.lines.len(), layout.summary_rows);
    }

    #[test]
    fn tab_columns_match_strip() {
        let cols = tab_columns();
        assert_eq!(cols[0], (DetailTab::Details, 4..11));
        assert_eq!(cols[1], (DetailTab::Metadata, 13..21));
        assert_eq!(cols[2], (DetailTab::Links, 23..28));
    }

    #[test]
    fn copy_column_is_last_two() {
        assert!(is_copy_column(39, 40));
        assert!(is_copy_column(38, 40));
        assert!(!is_copy_column(37, 40));
    }

    #[test]
    fn wide_point_keeps_copy_control_and_all_text() {
        let theme = Theme::default();
        let point = "人工智能投资计划创新高";
        let item = BreakdownItem::new(0, BreakdownEntry::new(point));
        let widget = BreakdownItemWidget::new(item.view(), false, &theme);
        let layout = widget.layout(20);
        assert!(layout.summary_rows > 1);

        let rows = render_to_string(widget, Rect::new(0, 0, 20, 3));
        assert!(rows[0].starts_with('▸'));
        assert!(rows[0].trim_end().ends_with('⧉'));
        let shown: String = rows
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '▸' | '⧉'))
            .collect();
        assert_eq!(shown, point);
    }

    #[test]
    fn wide_metadata_value_stays_right_aligned() {
        let theme = Theme::default();
        let mut entry = BreakdownEntry::new("X");
        entry.metadata.source = "内部分析".into();
        let mut item = BreakdownItem::new(0, entry);
        item.toggle_expand();
        item.select_tab(DetailTab::Metadata);
        let rows = render_to_string(
            BreakdownItemWidget::new(item.view(), false, &theme),
            Rect::new(0, 0, 30, 8),
        );
        let source_row = rows.iter().find(|row| row.contains("source")).unwrap();
        assert!(source_row.trim_end().ends_with('析'));
    }

    #[test]
    fn detail_panel_sits_on_surface() {
        let theme = Theme::dark();
        let mut item = BreakdownItem::new(0, BreakdownEntry::new("X"));
        item.toggle_expand();
        let widget = BreakdownItemWidget::new(item.view(), false, &theme);
        let tab_row = widget.layout(40).tab_row.unwrap() as u16;
        let buf = render_to_buffer(widget, Rect::new(0, 0, 40, 8));

        // Gutter and tab label cells on the tab strip, then the rule below it.
        assert_eq!(buf.cell((2, tab_row)).unwrap().bg, theme.surface);
        assert_eq!(buf.cell((4, tab_row)).unwrap().bg, theme.surface);
        assert_eq!(buf.cell((5, tab_row + 1)).unwrap().bg, theme.surface);
        assert_ne!(buf.cell((0, 0)).unwrap().bg, theme.surface);
    }
}
