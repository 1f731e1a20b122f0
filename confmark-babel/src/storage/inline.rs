//! Inline span rendering (bold, italic, code, links)
//!
//! Converts the inline Markdown spans within one line of text into storage
//! markup. The reserved metacharacters are escaped before any span
//! substitution so that literal angle brackets in the source are never
//! reinterpreted, and the passes run in a fixed order: links, inline code,
//! bold, italic. Each pass rewrites all non-overlapping matches, operating on
//! the output of the previous pass.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex is valid"));
static CODE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("code span regex is valid"));
static BOLD_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold regex is valid"));
static BOLD_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__([^_]+)__").expect("bold regex is valid"));
static EMPHASIS_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("emphasis regex is valid"));
static EMPHASIS_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([^_]+)_").expect("emphasis regex is valid"));

/// Escape the markup metacharacters `&`, `<`, `>`.
///
/// `&` must be replaced first so already-produced entities are not re-escaped.
pub(crate) fn escape_markup(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the inline spans of a single line into storage markup.
///
/// The href of a link is escaped a second time inside its attribute; later
/// passes never re-scan attribute text because the delimiters they look for
/// were consumed by the link pass.
pub(crate) fn render_inline(raw: &str) -> String {
    let escaped = escape_markup(raw);
    let linked = LINK.replace_all(&escaped, |caps: &Captures| {
        format!("<a href=\"{}\">{}</a>", escape_markup(&caps[2]), &caps[1])
    });
    let coded = CODE_SPAN.replace_all(&linked, "<code>$1</code>");
    let bolded = BOLD_STAR.replace_all(&coded, "<strong>$1</strong>");
    let bolded = BOLD_UNDERSCORE.replace_all(&bolded, "<strong>$1</strong>");
    let emphasized = replace_emphasis(&bolded, &EMPHASIS_STAR, '*');
    replace_emphasis(&emphasized, &EMPHASIS_UNDERSCORE, '_')
}

/// Emphasis with negative-lookaround semantics.
///
/// The regex crate has no lookaround, so the adjacency check is done against
/// the haystack: a candidate match directly preceded or followed by the same
/// delimiter is left untouched (it belongs to a `**`/`__` run).
fn replace_emphasis(text: &str, pattern: &Regex, delimiter: char) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let whole = caps.get(0).expect("match 0 is always present");
            let before = text[..whole.start()].chars().next_back();
            let after = text[whole.end()..].chars().next();
            if before == Some(delimiter) || after == Some(delimiter) {
                whole.as_str().to_string()
            } else {
                format!("<em>{}</em>", &caps[1])
            }
        })
        .into_owned()
}
