//! Article content model.
//!
//! Everything here is immutable input: the reader and the CLI render it but
//! never mutate it. Field names serialize in camelCase so article files use
//! the same keys the metadata view displays (`dateUpdated`, `relatedLinks`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder shown in the Details view when an entry has no elaboration.
pub const DEFAULT_ADDITIONAL_INFO: &str = "More detailed information about this point goes here...";

/// A titled hyperlink attached to a breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub title: String,
    pub url: String,
}

impl RelatedLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Structured metadata for one breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownMetadata {
    pub date_updated: String,
    pub source: String,
    pub confidence: String,
    pub category: String,
    #[serde(default)]
    pub related_links: Vec<RelatedLink>,
}

impl BreakdownMetadata {
    /// Generic metadata used when the caller supplies none.
    pub fn placeholder(today: NaiveDate) -> Self {
        Self {
            date_updated: format_short_date(today),
            source: "Internal Analysis".to_string(),
            confidence: "High".to_string(),
            category: "Infrastructure".to_string(),
            related_links: vec![
                RelatedLink::new("Related Article 1", "#"),
                RelatedLink::new("Industry Report", "#"),
            ],
        }
    }
}

impl Default for BreakdownMetadata {
    fn default() -> Self {
        Self::placeholder(chrono::Local::now().date_naive())
    }
}

/// `M/D/YYYY`, the short US date form used for `dateUpdated`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn default_additional_info() -> String {
    DEFAULT_ADDITIONAL_INFO.to_string()
}

/// One bullet-point fact in an article's breakdown list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub point: String,
    #[serde(default = "default_additional_info")]
    pub additional_info: String,
    #[serde(default)]
    pub metadata: BreakdownMetadata,
}

impl BreakdownEntry {
    /// An entry with the placeholder elaboration and metadata.
    pub fn new(point: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            additional_info: default_additional_info(),
            metadata: BreakdownMetadata::default(),
        }
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = info.into();
        self
    }

    pub fn with_metadata(mut self, metadata: BreakdownMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// The "Why It's Important" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Importance {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl Author {
    /// Upper-cased first letter of each word, e.g. "Derrick Hodge" -> "DH".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A full newsletter article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub number: String,
    pub title: String,
    pub brief: String,
    pub publish_date: String,
    #[serde(default)]
    pub publish_time: String,
    pub breakdown: Vec<BreakdownEntry>,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default)]
    pub author: Author,
}

/// An article that parsed but breaks an invariant the renderers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("article title is empty")]
    EmptyTitle,

    #[error("article has no breakdown entries")]
    EmptyBreakdown,

    #[error("breakdown entry {entry} has an empty point")]
    EmptyPoint { entry: usize },

    #[error("breakdown entry {entry}: related link {link} has no title")]
    UntitledLink { entry: usize, link: usize },
}

impl Article {
    /// Check the invariants the renderers rely on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.breakdown.is_empty() {
            return Err(ValidationError::EmptyBreakdown);
        }
        for (entry, item) in self.breakdown.iter().enumerate() {
            if item.point.trim().is_empty() {
                return Err(ValidationError::EmptyPoint { entry });
            }
            if let Some(link) = item
                .metadata
                .related_links
                .iter()
                .position(|link| link.title.trim().is_empty())
            {
                return Err(ValidationError::UntitledLink { entry, link });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_metadata_matches_defaults() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let meta = BreakdownMetadata::placeholder(today);
        assert_eq!(meta.date_updated, "2/1/2025");
        assert_eq!(meta.source, "Internal Analysis");
        assert_eq!(meta.confidence, "High");
        assert_eq!(meta.category, "Infrastructure");
        let titles: Vec<&str> = meta.related_links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Related Article 1", "Industry Report"]);
    }

    #[test]
    fn new_entry_uses_placeholder_info() {
        let entry = BreakdownEntry::new("X");
        assert_eq!(entry.point, "X");
        assert_eq!(entry.additional_info, DEFAULT_ADDITIONAL_INFO);
        assert_eq!(entry.metadata.category, "Infrastructure");
    }

    #[test]
    fn author_initials() {
        let author = Author {
            name: "Derrick Hodge".into(),
            role: "AI Industry Analyst".into(),
        };
        assert_eq!(author.initials(), "DH");
        assert_eq!(Author::default().initials(), "");
    }

    #[test]
    fn validate_rejects_empty_breakdown() {
        let article = Article {
            number: "1".into(),
            title: "Title".into(),
            brief: String::new(),
            publish_date: String::new(),
            publish_time: String::new(),
            breakdown: vec![],
            importance: Importance::default(),
            author: Author::default(),
        };
        assert_eq!(article.validate(), Err(ValidationError::EmptyBreakdown));
    }

    #[test]
    fn validate_rejects_untitled_link() {
        let mut entry = BreakdownEntry::new("point");
        entry.metadata.related_links.push(RelatedLink::new("  ", "#"));
        let article = Article {
            number: "1".into(),
            title: "Title".into(),
            brief: String::new(),
            publish_date: String::new(),
            publish_time: String::new(),
            breakdown: vec![entry],
            importance: Importance::default(),
            author: Author::default(),
        };
        let err = article.validate().unwrap_err();
        assert_eq!(err, ValidationError::UntitledLink { entry: 0, link: 2 });
        assert_eq!(err.to_string(), "breakdown entry 0: related link 2 has no title");
    }
}
