use crate::report::LINE_BREAK;

/// Escape the characters that HTML treats as markup: `&`, `<`, `>`, `"`, `'`.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape report text while keeping its `<br>` markers as real line breaks.
pub(crate) fn escape_keeping_breaks(s: &str) -> String {
    s.split(LINE_BREAK)
        .map(escape_html)
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}
