use crate::parser::FeedItem;

pub const SUMMARY_MAX_CHARS: usize = 200;
const ELLIPSIS: &str = "...";

/// A feed item that matched at least one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedArticle {
    pub title: String,
    pub link: String,
    pub date: String,
    pub summary: String,
    /// Never empty; in keyword-list order
    pub matched_keywords: Vec<String>,
}

impl MatchedArticle {
    /// Matched keywords as Obsidian tags, e.g. `#BTC #ETH`.
    pub fn keyword_tags(&self) -> String {
        self.matched_keywords
            .iter()
            .map(|k| format!("#{}", k))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Keep items whose title or description mentions any keyword, preserving feed order.
pub fn filter(items: &[FeedItem], keywords: &[String]) -> Vec<MatchedArticle> {
    items
        .iter()
        .filter_map(|item| {
            let matched_keywords = matching_keywords(item, keywords);
            if matched_keywords.is_empty() {
                return None;
            }

            Some(MatchedArticle {
                title: item.title.clone(),
                link: item.link.clone(),
                date: item.published_at.clone(),
                summary: summarize(&item.description),
                matched_keywords,
            })
        })
        .collect()
}

pub fn matching_keywords(item: &FeedItem, keywords: &[String]) -> Vec<String> {
    let haystack = format!("{} {}", item.title, item.description).to_lowercase();

    keywords
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .cloned()
        .collect()
}

/// Truncate to `SUMMARY_MAX_CHARS` characters, appending an ellipsis when cut.
pub fn summarize(description: &str) -> String {
    if description.chars().count() > SUMMARY_MAX_CHARS {
        let mut summary: String = description.chars().take(SUMMARY_MAX_CHARS).collect();
        summary.push_str(ELLIPSIS);
        summary
    } else {
        description.to_string()
    }
}
