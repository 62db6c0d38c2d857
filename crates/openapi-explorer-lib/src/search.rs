//! Case-insensitive keyword search over path names and operation text.

use serde::{Deserialize, Serialize};

use crate::document::{Document, HttpMethod};

/// Descriptions longer than this many characters are truncated in results.
pub const DESCRIPTION_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";
const DIVIDER: &str = "\n---------\n";

/// Parameters for a keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Keyword to search for (case-insensitive)
    pub keyword: String,
    /// Also match operation summaries and descriptions (default: true)
    #[serde(default = "enabled")]
    pub search_in_description: bool,
    /// Also match path names (default: true)
    #[serde(default = "enabled")]
    pub search_in_path: bool,
}

fn enabled() -> bool {
    true
}

impl SearchQuery {
    /// Query matching both path names and summaries/descriptions.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            search_in_description: true,
            search_in_path: true,
        }
    }

    pub fn in_description(mut self, enabled: bool) -> Self {
        self.search_in_description = enabled;
        self
    }

    pub fn in_path(mut self, enabled: bool) -> Self {
        self.search_in_path = enabled;
        self
    }
}

/// One matching operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub path: String,
    pub method: HttpMethod,
    pub summary: String,
    /// Description, already truncated to [`DESCRIPTION_LIMIT`] characters.
    pub description: String,
}

/// Run `query` over every operation, paths outer and methods inner, in
/// declaration order.
pub fn search(document: &Document, query: &SearchQuery) -> Vec<SearchHit> {
    let keyword = query.keyword.to_lowercase();
    let mut hits = Vec::new();

    for (path, item) in &document.paths {
        let path_match = query.search_in_path && path.to_lowercase().contains(&keyword);

        for (method, operation) in item.operations() {
            let summary = operation.summary.as_deref().unwrap_or_default();
            let description = operation.description.as_deref().unwrap_or_default();

            let desc_match = query.search_in_description
                && (summary.to_lowercase().contains(&keyword)
                    || description.to_lowercase().contains(&keyword));

            if path_match || desc_match {
                hits.push(SearchHit {
                    path: path.clone(),
                    method,
                    summary: summary.to_string(),
                    description: truncate_description(description),
                });
            }
        }
    }

    hits
}

/// Truncate to [`DESCRIPTION_LIMIT`] characters, appending `...` when cut.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &description[..cut]),
        None => description.to_string(),
    }
}

/// Render hits as the text returned to callers.
pub fn render_hits(keyword: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No APIs matched the keyword \"{keyword}\".");
    }

    let blocks = hits
        .iter()
        .map(|hit| {
            let description = if hit.description.is_empty() {
                "None"
            } else {
                hit.description.as_str()
            };
            format!(
                "Path: {}\nMethod: {}\nSummary: {}\nDescription: {}\n",
                hit.path,
                hit.method.upper(),
                hit.summary,
                description
            )
        })
        .collect::<Vec<_>>()
        .join(DIVIDER);

    format!(
        "Found {} API(s) matching the keyword \"{keyword}\":\n\n{blocks}",
        hits.len()
    )
}
