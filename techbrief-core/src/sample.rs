//! Built-in sample article.
//!
//! Used when no article file is given, and by tests. Breakdown entries are
//! derived from plain bullet points the same way the article page builds
//! them: each point gets generated context and metadata drawn from the
//! article's date and source list.

use crate::content::{Article, Author, BreakdownEntry, BreakdownMetadata, Importance, RelatedLink};

/// Derive full breakdown entries from plain points.
///
/// Point `i` takes its source from `sources[min(i, len - 1)]`; with no
/// sources it falls back to "Internal Analysis".
pub fn entries_from_points(
    points: &[&str],
    publish_date: &str,
    sources: &[String],
) -> Vec<BreakdownEntry> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let source = sources
                .get(i.min(sources.len().saturating_sub(1)))
                .cloned()
                .unwrap_or_else(|| "Internal Analysis".to_string());
            BreakdownEntry {
                point: point.to_string(),
                additional_info: format!("Additional context and analysis for: {point}"),
                metadata: BreakdownMetadata {
                    date_updated: publish_date.to_string(),
                    source,
                    confidence: "High".to_string(),
                    category: "AI Infrastructure".to_string(),
                    related_links: vec![
                        RelatedLink::new("Full Report", "#"),
                        RelatedLink::new("Industry Analysis", "#"),
                    ],
                },
            }
        })
        .collect()
}

pub fn sample_article() -> Article {
    let publish_date = "February 1, 2025";
    let importance = Importance {
        text: "The AI infrastructure race continues to accelerate as major players invest heavily \
               in computing resources, highlighting the critical role of scale in AI development."
            .to_string(),
        sources: vec![
            "Industry Report".to_string(),
            "Company Announcement".to_string(),
            "Market Analysis".to_string(),
        ],
    };
    let breakdown = entries_from_points(
        &[
            "Planning to deploy 1GW of compute power in 2025, with new datacenter construction",
            "Aiming to acquire over 1.3M GPUs by year-end",
            "Investment represents ~70% increase from previous year",
            "Follows industry trend of massive AI infrastructure investments",
        ],
        publish_date,
        &importance.sources,
    );

    Article {
        number: "1".to_string(),
        title: "AI Investment Plan Reaches New Heights".to_string(),
        brief: "Major tech company revealed a $60-65B investment plan for 2025, focused on AI \
                infrastructure development and model advancement."
            .to_string(),
        publish_date: publish_date.to_string(),
        publish_time: "6:14 PM EST".to_string(),
        breakdown,
        importance,
        author: Author {
            name: "Derrick Hodge".to_string(),
            role: "AI Industry Analyst".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid() {
        let article = sample_article();
        assert!(article.validate().is_ok());
        assert_eq!(article.breakdown.len(), 4);
    }

    #[test]
    fn sources_clamp_to_last() {
        let article = sample_article();
        let sources: Vec<&str> = article
            .breakdown
            .iter()
            .map(|e| e.metadata.source.as_str())
            .collect();
        assert_eq!(
            sources,
            vec![
                "Industry Report",
                "Company Announcement",
                "Market Analysis",
                "Market Analysis"
            ]
        );
    }

    #[test]
    fn no_sources_falls_back() {
        let entries = entries_from_points(&["a"], "today", &[]);
        assert_eq!(entries[0].metadata.source, "Internal Analysis");
        assert_eq!(
            entries[0].additional_info,
            "Additional context and analysis for: a"
        );
    }
}
