//! TechBrief reader: terminal UI for a newsletter issue with expandable
//! breakdown points.
//!
//! Provides:
//! - Article page with a keyboard and mouse driven breakdown list
//! - Per-point detail panel (Details / Metadata / Links)
//! - Copy-to-clipboard with a timed confirmation glyph
//! - Light/dark theme, share links, subscribe form
//! - Preference persistence across restarts

pub mod app;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::{Theme, ThemeMode};
pub use ui::{draw, Hit, HitMap};

#[cfg(test)]
mod test_helpers;
