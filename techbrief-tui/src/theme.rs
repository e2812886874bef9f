//! Light/dark palettes for the TechBrief reader
//!
//! Both palettes share a purple accent; the dark palette sits on a near-black
//! surface, the light palette on white.
//!
//! # Color roles
//! - **Accent**: purple (brand, indicator, active tab, focus)
//! - **Positive**: green (copy succeeded)
//! - **Negative**: red (copy failed, errors)
//! - **Warning**: amber (status warnings)
//! - **Muted**: gray (hints, secondary text, borders)

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use techbrief_core::breakdown::{BadgeKind, CopyFeedback};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Glyph for the toggle control: the mode you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Page background
    pub background: Color,
    /// Raised panels (brief, expanded detail)
    pub surface: Color,
    /// Brand purple
    pub accent: Color,
    /// Copy succeeded
    pub positive: Color,
    /// Copy failed, errors
    pub negative: Color,
    /// Status warnings
    pub warning: Color,
    /// Hints, borders
    pub muted: Color,
    /// Headings and body text
    pub text_primary: Color,
    /// Secondary body text
    pub text_secondary: Color,
    /// Category badge
    pub badge_category: Color,
    /// Confidence badge
    pub badge_confidence: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(249, 250, 251),
            accent: Color::Rgb(147, 51, 234),
            positive: Color::Rgb(22, 163, 74),
            negative: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(217, 119, 6),
            muted: Color::Rgb(156, 163, 175),
            text_primary: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(75, 85, 99),
            badge_category: Color::Rgb(126, 34, 206),
            badge_confidence: Color::Rgb(29, 78, 216),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(31, 41, 55),
            accent: Color::Rgb(192, 132, 252),
            positive: Color::Rgb(74, 222, 128),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 191, 36),
            muted: Color::Rgb(107, 114, 128),
            text_primary: Color::White,
            text_secondary: Color::Rgb(209, 213, 219),
            badge_category: Color::Rgb(216, 180, 254),
            badge_confidence: Color::Rgb(147, 197, 253),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    /// Background for raised panels.
    pub fn surface(&self) -> Style {
        Style::default().bg(self.surface)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn negative(&self) -> Style {
        Style::default().fg(self.negative)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.accent()
        } else {
            self.muted()
        }
    }

    /// Style for the copy control glyph.
    pub fn copy_feedback(&self, feedback: CopyFeedback) -> Style {
        match feedback {
            CopyFeedback::Idle => self.muted(),
            CopyFeedback::Copied => Style::default().fg(self.positive),
            CopyFeedback::Failed => self.negative().add_modifier(Modifier::BOLD),
        }
    }

    pub fn badge(&self, kind: BadgeKind) -> Style {
        let color = match kind {
            BadgeKind::Category => self.badge_category,
            BadgeKind::Confidence => self.badge_confidence,
        };
        Style::default().fg(color).add_modifier(Modifier::REVERSED)
    }

    pub fn tab(&self, active: bool) -> Style {
        if active {
            self.accent_bold().add_modifier(Modifier::UNDERLINED)
        } else {
            self.muted()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.mode, ThemeMode::Light);
        assert_eq!(theme.accent, Color::Rgb(147, 51, 234));
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggle_glyph(), "☾");
    }

    #[test]
    fn test_copy_feedback_colors() {
        let theme = Theme::dark();
        assert_eq!(theme.copy_feedback(CopyFeedback::Idle).fg, Some(theme.muted));
        assert_eq!(theme.copy_feedback(CopyFeedback::Copied).fg, Some(theme.positive));
        assert_eq!(theme.copy_feedback(CopyFeedback::Failed).fg, Some(theme.negative));
    }

    #[test]
    fn test_badge_colors_differ() {
        let theme = Theme::light();
        assert_ne!(
            theme.badge(BadgeKind::Category).fg,
            theme.badge(BadgeKind::Confidence).fg
        );
    }
}
