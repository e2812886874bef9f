//! TechBrief Core: newsletter content, breakdown items, timers, clipboard port.
//!
//! This crate contains everything the front ends share:
//! - Content model (article, breakdown entries, metadata, related links)
//! - Article loading from TOML, plus a built-in sample article
//! - Expandable breakdown item state machine and its render model
//! - Injectable clock and cancellable timer queue
//! - Clipboard port with system and in-memory implementations
//! - Share-link construction and subscribe-form validation

pub mod breakdown;
pub mod clipboard;
pub mod clock;
pub mod content;
pub mod loader;
pub mod sample;
pub mod share;
pub mod subscribe;
pub mod timer;

pub use breakdown::{BreakdownItem, BreakdownList, DetailTab};
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use clock::{Clock, ManualClock, SystemClock};
pub use content::{Article, BreakdownEntry, BreakdownMetadata, RelatedLink, ValidationError};
pub use loader::{load_article, parse_article, ContentError};
