//! Expandable breakdown item: per-instance interaction state.
//!
//! Three independent variables: `expanded`, the copy feedback, and the
//! active tab. None blocks another. Collapsing keeps the active tab, so
//! re-expanding resumes where the reader left off.

use std::time::{Duration, Instant};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::content::{BreakdownEntry, RelatedLink};
use crate::timer::{TimerHandle, TimerQueue};

use super::tab::DetailTab;
use super::view::{
    badges, metadata_rows, CopyFeedback, DetailBody, DetailView, Indicator, ItemView, SummaryView,
};

/// How long copy feedback stays visible.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

/// Timer event: the copy feedback of the item at `position` has expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackExpired {
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct BreakdownItem {
    position: usize,
    entry: BreakdownEntry,
    expanded: bool,
    feedback: CopyFeedback,
    feedback_timer: Option<TimerHandle>,
    active_tab: DetailTab,
    selected_link: usize,
}

impl BreakdownItem {
    /// Mount an item for the entry at `position` in the parent list.
    pub fn new(position: usize, entry: BreakdownEntry) -> Self {
        Self {
            position,
            entry,
            expanded: false,
            feedback: CopyFeedback::Idle,
            feedback_timer: None,
            active_tab: DetailTab::default(),
            selected_link: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn entry(&self) -> &BreakdownEntry {
        &self.entry
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    pub fn copy_feedback(&self) -> CopyFeedback {
        self.feedback
    }

    /// True only while a successful copy's feedback window is open.
    pub fn copy_feedback_active(&self) -> bool {
        self.feedback == CopyFeedback::Copied
    }

    pub fn selected_link(&self) -> Option<&RelatedLink> {
        self.entry.metadata.related_links.get(self.selected_link)
    }

    /// Flip the expanded flag. Returns the new value.
    pub fn toggle_expand(&mut self) -> bool {
        self.expanded = !self.expanded;
        tracing::debug!(position = self.position, expanded = self.expanded, "toggle expand");
        self.expanded
    }

    /// Select a detail tab. Does not expand a collapsed item.
    pub fn select_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    pub fn select_next_link(&mut self) {
        let count = self.entry.metadata.related_links.len();
        if self.selected_link + 1 < count {
            self.selected_link += 1;
        }
    }

    pub fn select_prev_link(&mut self) {
        self.selected_link = self.selected_link.saturating_sub(1);
    }

    /// Copy the point text to the clipboard.
    ///
    /// Never touches `expanded`. On success the checkmark shows for
    /// [`COPY_FEEDBACK_WINDOW`]; on failure the failure glyph shows for the
    /// same window and the error is returned. Either way a pending reversion
    /// from an earlier copy is cancelled and the window restarts at `now`.
    pub fn copy_point_text(
        &mut self,
        clipboard: &mut dyn Clipboard,
        timers: &mut TimerQueue<FeedbackExpired>,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        let result = clipboard.write_text(&self.entry.point);
        self.start_feedback(result.is_ok(), timers, now);
        result
    }

    /// Copy the selected related link's URL. Returns the copied link, or
    /// `None` if the entry has no links.
    pub fn copy_selected_link(
        &mut self,
        clipboard: &mut dyn Clipboard,
        timers: &mut TimerQueue<FeedbackExpired>,
        now: Instant,
    ) -> Result<Option<RelatedLink>, ClipboardError> {
        let Some(link) = self.selected_link().cloned() else {
            return Ok(None);
        };
        let result = clipboard.write_text(&link.url);
        self.start_feedback(result.is_ok(), timers, now);
        result.map(|()| Some(link))
    }

    fn start_feedback(
        &mut self,
        success: bool,
        timers: &mut TimerQueue<FeedbackExpired>,
        now: Instant,
    ) {
        if let Some(handle) = self.feedback_timer.take() {
            timers.cancel(handle);
        }
        self.feedback = if success {
            CopyFeedback::Copied
        } else {
            CopyFeedback::Failed
        };
        let handle = timers.schedule(
            now + COPY_FEEDBACK_WINDOW,
            FeedbackExpired {
                position: self.position,
            },
        );
        self.feedback_timer = Some(handle);
        tracing::debug!(position = self.position, feedback = ?self.feedback, "copy feedback started");
    }

    /// Handle the expiry of this item's feedback window.
    pub fn on_feedback_expired(&mut self) {
        self.feedback = CopyFeedback::Idle;
        self.feedback_timer = None;
    }

    /// Unmount: cancel the pending feedback timer so nothing fires for an
    /// item that no longer exists.
    pub fn teardown(&mut self, timers: &mut TimerQueue<FeedbackExpired>) {
        if let Some(handle) = self.feedback_timer.take() {
            timers.cancel(handle);
        }
        self.feedback = CopyFeedback::Idle;
    }

    pub fn has_pending_timer(&self) -> bool {
        self.feedback_timer.is_some()
    }

    pub fn view(&self) -> ItemView<'_> {
        let summary = SummaryView {
            point: &self.entry.point,
            indicator: if self.expanded {
                Indicator::Expanded
            } else {
                Indicator::Collapsed
            },
            copy: self.feedback,
        };
        let detail = self.expanded.then(|| {
            let metadata = &self.entry.metadata;
            let body = match self.active_tab {
                DetailTab::Details => DetailBody::Details {
                    info: &self.entry.additional_info,
                    badges: badges(metadata),
                },
                DetailTab::Metadata => DetailBody::Metadata {
                    rows: metadata_rows(metadata),
                },
                DetailTab::Links => DetailBody::Links {
                    links: &metadata.related_links,
                    selected: self.selected_link,
                },
            };
            DetailView {
                active: self.active_tab,
                body,
            }
        });
        ItemView { summary, detail }
    }
}
