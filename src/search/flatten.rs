use std::fmt::Write;

use super::types::SearchResultItem;

/// Render search results as labelled plain-text blocks for prompt context.
///
/// Each item becomes `Title`/`Snippet`/`Link` lines followed by a blank line,
/// in the order given. An empty slice yields an empty string.
pub fn flatten_results(items: &[SearchResultItem]) -> String {
    let mut info = String::new();
    for item in items {
        let _ = write!(
            info,
            "Title: {}\nSnippet: {}\nLink: {}\n\n",
            item.title, item.snippet, item.link
        );
    }
    info
}
