//! Top-level UI layout: nav bar, scrollable article page, status bar.

pub mod article;
pub mod breakdown;
pub mod nav_bar;
pub mod overlays;
pub mod status_bar;
pub mod text;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use techbrief_core::breakdown::DetailTab;

use crate::app::{AppState, Overlay};
use article::ItemSpan;

/// Widest the article column gets.
const MAX_PAGE_WIDTH: u16 = 96;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Summary row of an item, outside the copy control.
    Summary(usize),
    /// Copy control of an item.
    CopyControl(usize),
    /// A tab label in an expanded item's tab strip.
    Tab(usize, DetailTab),
    ThemeToggle,
}

/// Geometry of the last frame, for mapping clicks back to items.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub page_area: Rect,
    pub scroll: u16,
    pub items: Vec<ItemSpan>,
    pub theme_toggle: Option<Rect>,
}

impl HitMap {
    pub fn locate(&self, x: u16, y: u16) -> Option<Hit> {
        if let Some(toggle) = self.theme_toggle {
            if contains(toggle, x, y) {
                return Some(Hit::ThemeToggle);
            }
        }
        if !contains(self.page_area, x, y) {
            return None;
        }
        let row = usize::from(y - self.page_area.y) + usize::from(self.scroll);
        let col = x - self.page_area.x;
        let span = self
            .items
            .iter()
            .find(|s| (s.start..s.end).contains(&row))?;

        if row < span.start + span.summary_rows {
            if row == span.start && breakdown::is_copy_column(col, self.page_area.width) {
                return Some(Hit::CopyControl(span.position));
            }
            return Some(Hit::Summary(span.position));
        }
        if span.tab_row == Some(row) {
            return breakdown::tab_columns()
                .into_iter()
                .find(|(_, cols)| cols.contains(&col))
                .map(|(tab, _)| Hit::Tab(span.position, tab));
        }
        None
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Center the article column inside `area`, one column of padding each side.
pub fn page_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(2).min(MAX_PAGE_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Draw the entire UI and return the click geometry of this frame.
pub fn draw(f: &mut Frame, app: &AppState) -> HitMap {
    let theme = app.theme();
    f.render_widget(Block::default().style(theme.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let theme_toggle = nav_bar::render(f, chunks[0], app, &theme);

    let page_area = page_rect(chunks[1]);
    let page = article::build_page(app, &theme, page_area.width);
    let scroll = if app.follow_cursor {
        page.scroll_for(app.breakdown.cursor(), app.scroll, page_area.height)
    } else {
        page.clamp_scroll(app.scroll, page_area.height)
    };
    let items = page.items.clone();
    f.render_widget(Paragraph::new(page.lines).scroll((scroll, 0)), page_area);

    status_bar::render(f, chunks[2], app, &theme);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[1], &theme),
        Overlay::Share => overlays::render_share(f, chunks[1], app, &theme),
        Overlay::Subscribe => overlays::render_subscribe(f, chunks[1], app, &theme),
        Overlay::None => {}
    }

    HitMap {
        page_area,
        scroll,
        items,
        theme_toggle: Some(theme_toggle),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
