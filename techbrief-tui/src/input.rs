//! Input dispatch: overlays first, then page keys; mouse clicks via the
//! last frame's hit map.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use techbrief_core::breakdown::DetailTab;
use techbrief_core::share::SharePlatform;

use crate::app::{AppState, Overlay};
use crate::ui::{Hit, HitMap};

const WHEEL_STEP: i32 = 3;
const PAGE_STEP: i32 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::Share => {
            handle_share_overlay(app, key);
            return;
        }
        Overlay::Subscribe => {
            handle_subscribe_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Page keys.
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('s') => app.overlay = Overlay::Share,
        KeyCode::Char('u') => app.open_subscribe(),
        KeyCode::Char('r') => app.reload_article(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('c') => app.copy_selected_point(),

        KeyCode::Char('1') => app.select_tab(DetailTab::Details),
        KeyCode::Char('2') => app.select_tab(DetailTab::Metadata),
        KeyCode::Char('3') => app.select_tab(DetailTab::Links),
        KeyCode::Char('l') | KeyCode::Right => app.next_tab(),
        KeyCode::Char('h') | KeyCode::Left => app.prev_tab(),
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_tab();
            } else {
                app.next_tab();
            }
        }
        KeyCode::BackTab => app.prev_tab(),

        KeyCode::Char('n') => app.next_link(),
        KeyCode::Char('p') => app.prev_link(),
        KeyCode::Char('y') => app.copy_selected_link(),

        KeyCode::PageDown => app.scroll_by(PAGE_STEP),
        KeyCode::PageUp => app.scroll_by(-PAGE_STEP),
        _ => {}
    }
}

fn handle_help_overlay(app: &mut AppState, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.overlay = Overlay::None;
    }
}

fn handle_share_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('s') => app.overlay = Overlay::None,
        KeyCode::Char('x') => app.share(SharePlatform::Twitter),
        KeyCode::Char('i') => app.share(SharePlatform::LinkedIn),
        KeyCode::Char('y') => app.copy_page_link(),
        _ => {}
    }
}

fn handle_subscribe_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.subscribe.input.clear();
            app.subscribe.error = None;
        }
        KeyCode::Enter => app.submit_subscribe(),
        KeyCode::Backspace => {
            app.subscribe.input.pop();
        }
        KeyCode::Char(c) => {
            app.subscribe.input.push(c);
            app.subscribe.error = None;
        }
        _ => {}
    }
}

/// Handle a mouse event against the geometry of the last drawn frame.
pub fn handle_mouse(app: &mut AppState, hits: &HitMap, event: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => match hits.locate(event.column, event.row) {
            Some(Hit::Summary(position)) => app.toggle_item(position),
            Some(Hit::CopyControl(position)) => app.copy_point(position),
            Some(Hit::Tab(position, tab)) => app.select_item_tab(position, tab),
            Some(Hit::ThemeToggle) => app.toggle_theme(),
            None => {}
        },
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
        _ => {}
    }
}
