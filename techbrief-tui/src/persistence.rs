//! Reader preferences: JSON save/load across restarts.
//!
//! Only preferences persist. Which items are expanded, the active tab and
//! copy feedback always start fresh.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use techbrief_core::subscribe::validate_email;

use crate::app::{AppState, DEFAULT_PAGE_URL};
use crate::theme::ThemeMode;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub theme: ThemeMode,
    pub page_url: String,
    pub subscribed_email: Option<String>,
    pub last_article: Option<PathBuf>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            subscribed_email: None,
            last_article: None,
        }
    }
}

/// Where preferences live: `<config dir>/techbrief/state.json`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("techbrief")
        .join("state.json")
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(%err, path = %path.display(), "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        theme: app.theme_mode,
        page_url: app.page_url.clone(),
        subscribed_email: app.subscribed.as_ref().map(|e| e.as_str().to_string()),
        last_article: app.article_path.clone(),
    }
}

/// Apply persisted state to AppState. The article itself is chosen by the
/// caller; `last_article` is only a fallback for it.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.theme_mode = state.theme;
    if !state.page_url.trim().is_empty() {
        app.page_url = state.page_url;
    }
    app.subscribed = state
        .subscribed_email
        .as_deref()
        .and_then(|email| validate_email(email).ok());
}
