//! Test helpers for building an app with injected time and clipboard.

use std::cell::RefCell;
use std::rc::Rc;

use techbrief_core::sample::sample_article;
use techbrief_core::{Clipboard, ClipboardError, ManualClock, MemoryClipboard};

use crate::app::AppState;

/// A clipboard the test keeps a handle to after boxing it into the app.
#[derive(Clone, Default)]
pub struct SharedClipboard(Rc<RefCell<MemoryClipboard>>);

impl SharedClipboard {
    pub fn contents(&self) -> Option<String> {
        self.0.borrow().contents().map(str::to_owned)
    }

    pub fn reject(&self, error: Option<ClipboardError>) {
        self.0.borrow_mut().set_rejecting(error);
    }
}

impl Clipboard for SharedClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0.borrow_mut().write_text(text)
    }
}

pub fn shared_clipboard() -> SharedClipboard {
    SharedClipboard::default()
}

/// App over the sample article with a manual clock.
pub fn app_with(clipboard: SharedClipboard) -> (AppState, ManualClock, SharedClipboard) {
    let clock = ManualClock::new();
    let app = AppState::new(
        sample_article(),
        None,
        Box::new(clipboard.clone()),
        Box::new(clock.clone()),
    );
    (app, clock, clipboard)
}
