//! Storage format → Markdown light reduction
//!
//! Direct regex substitution over the storage markup, in a fixed pass order,
//! finishing with an unconditional strip of any remaining tags. Intentionally
//! lossy: tables, blockquotes, h4-h6, and nesting are not reconstructed.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::ReduceRules;

static H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("h1 regex is valid"));
static H2: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h2[^>]*>(.*?)</h2>").expect("h2 regex is valid"));
static H3: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h3[^>]*>(.*?)</h3>").expect("h3 regex is valid"));
static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("paragraph regex is valid"));
static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("line break regex is valid"));
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<strong[^>]*>(.*?)</strong>").expect("strong regex is valid"));
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<b[^>]*>(.*?)</b>").expect("bold regex is valid"));
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<em[^>]*>(.*?)</em>").expect("emphasis regex is valid"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<i[^>]*>(.*?)</i>").expect("italic regex is valid"));
static ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<a [^>]*href="([^"]+)"[^>]*>(.*?)</a>"#).expect("anchor regex is valid")
});
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("list item regex is valid"));
static UNORDERED_WRAPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?ul[^>]*>").expect("ul wrapper regex is valid"));
static ORDERED_WRAPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?ol[^>]*>").expect("ol wrapper regex is valid"));
static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<pre[^>]*><code[^>]*>(.*?)</code></pre>").expect("code block regex is valid")
});
static CODE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<code[^>]*>(.*?)</code>").expect("code span regex is valid"));
static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]+>").expect("tag strip regex is valid"));

/// Reduce storage markup to approximate Markdown.
///
/// Not round-trip safe; see the module docs for what is lost.
pub fn reduce_to_markdown(source: &str, rules: &ReduceRules) -> String {
    let text = H1.replace_all(source, "# $1\n\n");
    let text = H2.replace_all(&text, "## $1\n\n");
    let text = H3.replace_all(&text, "### $1\n\n");
    let text = PARAGRAPH.replace_all(&text, "$1\n\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = STRONG.replace_all(&text, "**$1**");
    let text = BOLD.replace_all(&text, "**$1**");
    let text = EMPHASIS.replace_all(&text, "*$1*");
    let text = ITALIC.replace_all(&text, "*$1*");
    let text = ANCHOR.replace_all(&text, "[$2]($1)");
    let bullet = format!("{} $1\n", rules.bullet_marker);
    let text = LIST_ITEM.replace_all(&text, bullet.as_str());
    let text = UNORDERED_WRAPPER.replace_all(&text, "\n");
    let text = ORDERED_WRAPPER.replace_all(&text, "\n");
    let text = CODE_BLOCK.replace_all(&text, "```\n$1\n```");
    let text = CODE_SPAN.replace_all(&text, "`$1`");
    let text = ANY_TAG.replace_all(&text, "");
    text.trim().to_string()
}
