//! Expandable breakdown items
//!
//! Provides:
//! - BreakdownItem (per-entry interaction state machine)
//! - BreakdownList (ordered items, cursor, shared timer queue)
//! - ItemView (pure render model consumed by the reader and the CLI)

mod item;
mod list;
mod tab;
mod view;

pub use item::{BreakdownItem, FeedbackExpired, COPY_FEEDBACK_WINDOW};
pub use list::BreakdownList;
pub use tab::DetailTab;
pub use view::{
    badges, humanize_key, metadata_rows, Badge, BadgeKind, CopyFeedback, DetailBody, DetailView,
    Indicator, ItemView, MetadataField, MetadataRow, SummaryView,
};
