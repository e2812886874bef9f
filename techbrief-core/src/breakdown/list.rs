//! The ordered list of breakdown items for one article.
//!
//! Items are keyed by position. The list owns the timer queue that all its
//! items schedule into, and routes expiry events back by position.

use std::time::Instant;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::content::{BreakdownEntry, RelatedLink};
use crate::timer::TimerQueue;

use super::item::{BreakdownItem, FeedbackExpired};

#[derive(Debug, Default)]
pub struct BreakdownList {
    items: Vec<BreakdownItem>,
    cursor: usize,
    timers: TimerQueue<FeedbackExpired>,
}

impl BreakdownList {
    pub fn new(entries: Vec<BreakdownEntry>) -> Self {
        Self {
            items: mount(entries),
            cursor: 0,
            timers: TimerQueue::new(),
        }
    }

    /// Unmount every current item, then mount one per new entry.
    pub fn replace_entries(&mut self, entries: Vec<BreakdownEntry>) {
        self.teardown();
        self.items = mount(entries);
        self.cursor = 0;
    }

    /// Unmount every item, cancelling all pending timers.
    pub fn teardown(&mut self) {
        for item in &mut self.items {
            item.teardown(&mut self.timers);
        }
        self.items.clear();
        self.cursor = 0;
    }

    pub fn items(&self) -> &[BreakdownItem] {
        &self.items
    }

    pub fn get(&self, position: usize) -> Option<&BreakdownItem> {
        self.items.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut BreakdownItem> {
        self.items.get_mut(position)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, position: usize) {
        if position < self.items.len() {
            self.cursor = position;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn selected(&self) -> Option<&BreakdownItem> {
        self.items.get(self.cursor)
    }

    pub fn selected_mut(&mut self) -> Option<&mut BreakdownItem> {
        self.items.get_mut(self.cursor)
    }

    /// Copy the point text of the item at `position`.
    ///
    /// Returns `Ok(false)` if no such item exists.
    pub fn copy_point(
        &mut self,
        position: usize,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<bool, ClipboardError> {
        match self.items.get_mut(position) {
            Some(item) => item
                .copy_point_text(clipboard, &mut self.timers, now)
                .map(|()| true),
            None => Ok(false),
        }
    }

    /// Copy the selected related link URL of the item at `position`.
    pub fn copy_link(
        &mut self,
        position: usize,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<Option<RelatedLink>, ClipboardError> {
        match self.items.get_mut(position) {
            Some(item) => item.copy_selected_link(clipboard, &mut self.timers, now),
            None => Ok(None),
        }
    }

    /// Fire every timer due at `now`. Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.timers.drain_due(now);
        let fired = due.len();
        for event in due {
            match self.items.get_mut(event.position) {
                Some(item) => item.on_feedback_expired(),
                None => tracing::warn!(position = event.position, "timer for unmounted item"),
            }
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

fn mount(entries: Vec<BreakdownEntry>) -> Vec<BreakdownItem> {
    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| BreakdownItem::new(position, entry))
        .collect()
}
