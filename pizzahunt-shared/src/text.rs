//! Plain-text helpers for third-party markup and card display.

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    // Must stay last so "&amp;lt;" decodes to "&lt;", not "<".
    ("&amp;", "&"),
];

/// Tags that start a new line of text when rendered.
const BREAKING_TAGS: [&str; 13] = [
    "br", "p", "div", "li", "ol", "ul", "tr", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Removes HTML tags, decodes the common entities and collapses whitespace.
///
/// Inline tags vanish without a trace; block-level tags such as `<br>` or
/// `<li>` leave a space so that `a<br>b` reads `a b`. An unclosed `<`
/// swallows the rest of the input, the same as a browser would.
pub fn strip_html(value: &str) -> String {
    let mut text = String::with_capacity(value.len());
    let mut tag: Option<String> = None;

    for ch in value.chars() {
        match (&mut tag, ch) {
            (None, '<') => tag = Some(String::new()),
            (None, _) => text.push(ch),
            (Some(body), '>') => {
                if is_breaking_tag(body) {
                    text.push(' ');
                }
                tag = None;
            }
            (Some(body), _) => body.push(ch),
        }
    }

    let decoded = ENTITIES
        .iter()
        .fold(text, |acc, (entity, replacement)| acc.replace(entity, replacement));

    collapse_whitespace(&decoded)
}

fn is_breaking_tag(body: &str) -> bool {
    let name: String = body
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    BREAKING_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(&name))
}

/// Trims the value and folds every whitespace run into a single space.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shortens text for card titles: values longer than `limit` characters are
/// cut, trailing whitespace dropped, and `...` appended.
pub fn collapse_text(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }

    let head: String = value.chars().take(limit).collect();
    format!("{}...", head.trim_end())
}
