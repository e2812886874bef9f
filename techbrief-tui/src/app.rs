//! Application state: single-owner, main-thread only.
//!
//! All reader state lives here. The clock and clipboard are injected so the
//! whole state machine runs under test without a terminal.

use std::path::PathBuf;
use std::time::Duration;

use techbrief_core::breakdown::DetailTab;
use techbrief_core::share::{share_url, SharePlatform};
use techbrief_core::subscribe::{validate_email, EmailAddress};
use techbrief_core::{load_article, Article, BreakdownList, Clipboard, Clock};

use crate::theme::{Theme, ThemeMode};

/// Page URL used for sharing when none is configured.
pub const DEFAULT_PAGE_URL: &str = "https://techinsights.example.com/";

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Share,
    Subscribe,
}

/// Subscribe form input.
#[derive(Debug, Clone, Default)]
pub struct SubscribeForm {
    pub input: String,
    pub error: Option<String>,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,

    // Content
    pub article: Article,
    pub article_path: Option<PathBuf>,
    pub breakdown: BreakdownList,

    // Presentation
    pub theme_mode: ThemeMode,
    pub overlay: Overlay,
    pub scroll: u16,
    /// Keep the focused item on screen. Cleared by manual scrolling.
    pub follow_cursor: bool,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub page_url: String,
    pub subscribe: SubscribeForm,
    pub subscribed: Option<EmailAddress>,

    clipboard: Box<dyn Clipboard>,
    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(
        article: Article,
        article_path: Option<PathBuf>,
        clipboard: Box<dyn Clipboard>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let breakdown = BreakdownList::new(article.breakdown.clone());
        Self {
            running: true,
            article,
            article_path,
            breakdown,
            theme_mode: ThemeMode::default(),
            overlay: Overlay::None,
            scroll: 0,
            follow_cursor: true,
            status_message: None,
            page_url: DEFAULT_PAGE_URL.to_string(),
            subscribe: SubscribeForm::default(),
            subscribed: None,
            clipboard,
            clock,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_mode)
    }

    /// Fire due timers. Call once per event-loop iteration.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        self.breakdown.tick(now)
    }

    /// How long the event loop may block on input: at most `max`, less when
    /// a copy-feedback timer comes due sooner.
    pub fn poll_timeout(&self, max: Duration) -> Duration {
        match self.breakdown.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(self.clock.now())
                .min(max),
            None => max,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::debug!(mode = ?self.theme_mode, "theme toggled");
    }

    pub fn move_down(&mut self) {
        self.breakdown.move_down();
        self.follow_cursor = true;
    }

    pub fn move_up(&mut self) {
        self.breakdown.move_up();
        self.follow_cursor = true;
    }

    /// Scroll the page by `delta` lines without moving the cursor.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta).max(0);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
        self.follow_cursor = false;
    }

    pub fn toggle_item(&mut self, position: usize) {
        self.breakdown.set_cursor(position);
        self.follow_cursor = true;
        if let Some(item) = self.breakdown.get_mut(position) {
            item.toggle_expand();
        }
    }

    pub fn toggle_selected(&mut self) {
        let position = self.breakdown.cursor();
        self.toggle_item(position);
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        if let Some(item) = self.breakdown.selected_mut() {
            item.select_tab(tab);
        }
    }

    /// Select `tab` on the item at `position` and focus it.
    pub fn select_item_tab(&mut self, position: usize, tab: DetailTab) {
        self.breakdown.set_cursor(position);
        if let Some(item) = self.breakdown.get_mut(position) {
            item.select_tab(tab);
        }
    }

    pub fn next_tab(&mut self) {
        if let Some(item) = self.breakdown.selected_mut() {
            item.next_tab();
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(item) = self.breakdown.selected_mut() {
            item.prev_tab();
        }
    }

    pub fn next_link(&mut self) {
        if let Some(item) = self.breakdown.selected_mut() {
            item.select_next_link();
        }
    }

    pub fn prev_link(&mut self) {
        if let Some(item) = self.breakdown.selected_mut() {
            item.select_prev_link();
        }
    }

    /// Copy the point text of the item at `position`. Does not expand or
    /// collapse it.
    pub fn copy_point(&mut self, position: usize) {
        let now = self.clock.now();
        self.breakdown.set_cursor(position);
        match self
            .breakdown
            .copy_point(position, &mut *self.clipboard, now)
        {
            Ok(true) => self.set_status(format!("Copied point {} to clipboard", position + 1)),
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(%err, position, "copy failed");
                self.set_error(format!("Copy failed: {err}"));
            }
        }
    }

    pub fn copy_selected_point(&mut self) {
        let position = self.breakdown.cursor();
        self.copy_point(position);
    }

    /// Copy the URL of the selected related link of the selected item.
    pub fn copy_selected_link(&mut self) {
        let now = self.clock.now();
        let position = self.breakdown.cursor();
        match self
            .breakdown
            .copy_link(position, &mut *self.clipboard, now)
        {
            Ok(Some(link)) => self.set_status(format!("Copied link: {} ({})", link.title, link.url)),
            Ok(None) => self.set_warning("No related links for this point"),
            Err(err) => {
                tracing::warn!(%err, position, "link copy failed");
                self.set_error(format!("Copy failed: {err}"));
            }
        }
    }

    /// Build a share URL and put it on the clipboard. If the clipboard is
    /// unavailable the URL is still shown in the status bar.
    pub fn share(&mut self, platform: SharePlatform) {
        let url = share_url(platform, &self.article.title, &self.page_url);
        tracing::info!(platform = %platform, "share link built");
        match self.clipboard.write_text(&url) {
            Ok(()) => self.set_status(format!("{platform} share link copied: {url}")),
            Err(err) => self.set_warning(format!("{err}; share link: {url}")),
        }
        self.overlay = Overlay::None;
    }

    pub fn copy_page_link(&mut self) {
        let url = self.page_url.clone();
        match self.clipboard.write_text(&url) {
            Ok(()) => self.set_status(format!("Link copied: {url}")),
            Err(err) => self.set_error(format!("Copy failed: {err}")),
        }
        self.overlay = Overlay::None;
    }

    pub fn open_subscribe(&mut self) {
        self.subscribe = SubscribeForm::default();
        self.overlay = Overlay::Subscribe;
    }

    /// Validate the form. On success the address is kept for the session
    /// and the form closes.
    pub fn submit_subscribe(&mut self) {
        match validate_email(&self.subscribe.input) {
            Ok(email) => {
                tracing::info!("subscribed");
                self.set_status(format!("Subscribed {email} to the newsletter"));
                self.subscribed = Some(email);
                self.subscribe = SubscribeForm::default();
                self.overlay = Overlay::None;
            }
            Err(err) => self.subscribe.error = Some(err.to_string()),
        }
    }

    /// Reload the article from disk, unmounting every breakdown item first.
    /// Keeps the current article if the reload fails.
    pub fn reload_article(&mut self) {
        let Some(path) = self.article_path.clone() else {
            self.set_warning("Showing the built-in article; nothing to reload");
            return;
        };
        match load_article(&path) {
            Ok(article) => {
                self.replace_article(article);
                self.set_status(format!("Reloaded {}", path.display()));
            }
            Err(err) => {
                tracing::error!(%err, "reload failed");
                self.set_error(err.to_string());
            }
        }
    }

    pub fn replace_article(&mut self, article: Article) {
        self.breakdown.replace_entries(article.breakdown.clone());
        self.article = article;
        self.scroll = 0;
        self.follow_cursor = true;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Unmount everything. Called once on exit.
    pub fn shutdown(&mut self) {
        self.breakdown.teardown();
    }
}
