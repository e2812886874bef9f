//! Plain-text rendering of an article for `techbrief show`.

use std::fmt::Write;

use techbrief_core::breakdown::{DetailBody, ItemView};
use techbrief_core::{Article, BreakdownList};

const FOOTER: &str = "© 2025 TechInsights. All rights reserved.";

/// Render one breakdown item: summary line, then the active view indented.
pub fn render_item(number: usize, view: &ItemView<'_>) -> String {
    let mut out = String::new();
    let summary = &view.summary;
    let _ = writeln!(
        out,
        "{} {}. {} {}",
        summary.indicator.glyph(),
        number,
        summary.point,
        summary.copy.glyph()
    );

    let Some(detail) = &view.detail else {
        return out;
    };
    let tabs: Vec<String> = detail
        .tabs()
        .into_iter()
        .map(|(tab, active)| {
            if active {
                format!("[{tab}]")
            } else {
                tab.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "    {}", tabs.join(" "));

    match &detail.body {
        DetailBody::Details { info, badges } => {
            let _ = writeln!(out, "    {info}");
            let badges: Vec<&str> = badges.iter().map(|b| b.text.as_str()).collect();
            let _ = writeln!(out, "    ({})", badges.join(") ("));
        }
        DetailBody::Metadata { rows } => {
            let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
            for row in rows {
                let _ = writeln!(out, "    {:<width$}  {}", row.label, row.value);
            }
        }
        DetailBody::Links { links, .. } => {
            if links.is_empty() {
                let _ = writeln!(out, "    (no related links)");
            }
            for link in links.iter() {
                let _ = writeln!(out, "    ↗ {} <{}>", link.title, link.url);
            }
        }
    }
    out
}

/// Render the whole article page in reading order.
pub fn render_article(article: &Article, list: &BreakdownList) -> String {
    let mut out = String::new();
    if article.publish_time.is_empty() {
        let _ = writeln!(out, "{}", article.publish_date);
    } else {
        let _ = writeln!(out, "{} · {}", article.publish_date, article.publish_time);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}  {}", article.number, article.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "Brief");
    let _ = writeln!(out, "  {}", article.brief);
    let _ = writeln!(out);
    let _ = writeln!(out, "Breakdown");
    for item in list.items() {
        out.push_str(&render_item(item.position() + 1, &item.view()));
    }

    if !article.importance.text.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Why It's Important");
        let _ = writeln!(out, "  {}", article.importance.text);
        if !article.importance.sources.is_empty() {
            let _ = writeln!(out, "  Sources: {}", article.importance.sources.join(", "));
        }
    }

    if !article.author.name.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "({}) {}, {}",
            article.author.initials(),
            article.author.name,
            article.author.role
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{FOOTER}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use techbrief_core::sample::sample_article;
    use techbrief_core::DetailTab;

    #[test]
    fn collapsed_items_are_one_line_each() {
        let article = sample_article();
        let list = BreakdownList::new(article.breakdown.clone());
        let text = render_article(&article, &list);
        assert!(text.contains("▸ 1. Planning to deploy 1GW"));
        assert!(!text.contains("[Details]"));
        assert!(text.ends_with(&format!("{FOOTER}\n")));
    }

    #[test]
    fn expanded_metadata_view() {
        let article = sample_article();
        let mut list = BreakdownList::new(article.breakdown.clone());
        let item = list.get_mut(0).unwrap();
        item.toggle_expand();
        item.select_tab(DetailTab::Metadata);
        let text = render_item(1, &list.get(0).unwrap().view());
        assert!(text.starts_with("▾ 1. "));
        assert!(text.contains("Details [Metadata] Links"));
        assert!(text.contains("date Updated"));
        assert!(text.contains("category"));
        assert!(!text.contains("related Links"));
    }

    #[test]
    fn expanded_links_view() {
        let article = sample_article();
        let mut list = BreakdownList::new(article.breakdown.clone());
        let item = list.get_mut(1).unwrap();
        item.toggle_expand();
        item.select_tab(DetailTab::Links);
        let text = render_item(2, &list.get(1).unwrap().view());
        let full = text.find("Full Report").unwrap();
        let industry = text.find("Industry Analysis").unwrap();
        assert!(full < industry);
    }
}
