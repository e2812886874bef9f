//! Render model for one breakdown item.
//!
//! Front ends draw from these values only, so the rendering contract is
//! testable without a terminal.

use crate::content::{BreakdownMetadata, RelatedLink};

use super::tab::DetailTab;

/// Directional indicator on the summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Collapsed,
    Expanded,
}

impl Indicator {
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Collapsed => "▸",
            Indicator::Expanded => "▾",
        }
    }
}

/// State of the copy-to-clipboard control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    pub fn glyph(self) -> &'static str {
        match self {
            CopyFeedback::Idle => "⧉",
            CopyFeedback::Copied => "✓",
            CopyFeedback::Failed => "✗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView<'a> {
    pub point: &'a str,
    pub indicator: Indicator,
    pub copy: CopyFeedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Category,
    Confidence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

/// The scalar metadata fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    DateUpdated,
    Source,
    Confidence,
    Category,
}

impl MetadataField {
    pub const ALL: [MetadataField; 4] = [
        MetadataField::DateUpdated,
        MetadataField::Source,
        MetadataField::Confidence,
        MetadataField::Category,
    ];

    /// Field name as it appears in article files.
    pub fn key(self) -> &'static str {
        match self {
            MetadataField::DateUpdated => "dateUpdated",
            MetadataField::Source => "source",
            MetadataField::Confidence => "confidence",
            MetadataField::Category => "category",
        }
    }

    pub fn value(self, metadata: &BreakdownMetadata) -> &str {
        match self {
            MetadataField::DateUpdated => &metadata.date_updated,
            MetadataField::Source => &metadata.source,
            MetadataField::Confidence => &metadata.confidence,
            MetadataField::Category => &metadata.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: String,
    pub value: String,
}

/// Insert a space before every upper-case letter, then trim.
///
/// `dateUpdated` -> `date Updated`, `relatedLinks` -> `related Links`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

pub fn metadata_rows(metadata: &BreakdownMetadata) -> Vec<MetadataRow> {
    MetadataField::ALL
        .iter()
        .map(|field| MetadataRow {
            label: humanize_key(field.key()),
            value: field.value(metadata).to_string(),
        })
        .collect()
}

pub fn badges(metadata: &BreakdownMetadata) -> [Badge; 2] {
    [
        Badge {
            kind: BadgeKind::Category,
            text: metadata.category.clone(),
        },
        Badge {
            kind: BadgeKind::Confidence,
            text: format!("{} Confidence", metadata.confidence),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody<'a> {
    Details { info: &'a str, badges: [Badge; 2] },
    Metadata { rows: Vec<MetadataRow> },
    Links { links: &'a [RelatedLink], selected: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub active: DetailTab,
    pub body: DetailBody<'a>,
}

impl DetailView<'_> {
    /// Tab strip entries with their active flag.
    pub fn tabs(&self) -> [(DetailTab, bool); 3] {
        DetailTab::ALL.map(|tab| (tab, tab == self.active))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub summary: SummaryView<'a>,
    pub detail: Option<DetailView<'a>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_camel_case() {
        assert_eq!(humanize_key("dateUpdated"), "date Updated");
        assert_eq!(humanize_key("relatedLinks"), "related Links");
        assert_eq!(humanize_key("source"), "source");
        assert_eq!(humanize_key("Category"), "Category");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn metadata_rows_fixed_order() {
        let metadata = BreakdownMetadata {
            date_updated: "2/1/2025".into(),
            source: "Filing".into(),
            confidence: "Low".into(),
            category: "Chips".into(),
            related_links: vec![RelatedLink::new("a", "#a")],
        };
        let rows = metadata_rows(&metadata);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["date Updated", "source", "confidence", "category"]);
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["2/1/2025", "Filing", "Low", "Chips"]);
    }

    #[test]
    fn confidence_badge_suffix() {
        let metadata = BreakdownMetadata {
            date_updated: String::new(),
            source: String::new(),
            confidence: "Medium".into(),
            category: "Energy".into(),
            related_links: vec![],
        };
        let [category, confidence] = badges(&metadata);
        assert_eq!(category.text, "Energy");
        assert_eq!(confidence.text, "Medium Confidence");
        assert_eq!(confidence.kind, BadgeKind::Confidence);
    }
}
