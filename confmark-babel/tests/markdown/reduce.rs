//! Reduction tests for the Markdown light converter (storage → Markdown).

use crate::common::{reduce, render};
use confmark_babel::{reduce_to_markdown, Converter, MarkdownLightFormat, ReduceRules};

#[test]
fn reduces_a_stored_page() {
    let page = concat!(
        "<h1>Guide</h1>",
        "<p>Read <strong>this</strong> and <a href=\"https://example.com\">that</a>.</p>",
        "<ul><li>one</li><li>two</li></ul>",
        "<pre><code>let x;</code></pre>",
    );
    assert_eq!(
        reduce(page),
        "# Guide\n\nRead **this** and [that](https://example.com).\n\n\n- one\n- two\n\n```\nlet x;\n```"
    );
}

#[test]
fn attributes_and_case_do_not_matter() {
    assert_eq!(reduce("<H2 id=\"s\">Title</H2>"), "## Title");
    assert_eq!(reduce("<EM>soft</EM>"), "*soft*");
}

#[test]
fn leftover_markup_is_stripped() {
    let output = reduce("<div><span data-x=\"1\">kept text</span></div>");
    assert_eq!(output, "kept text");
}

#[test]
fn bullet_marker_flows_through_rules() {
    let rules = ReduceRules { bullet_marker: '+' };
    assert_eq!(
        reduce_to_markdown("<ul><li>a</li><li>b</li></ul>", &rules),
        "+ a\n+ b"
    );
}

#[test]
fn converter_and_function_agree() {
    let page = "<p><b>same</b> output</p>";
    assert_eq!(MarkdownLightFormat.convert(page).unwrap(), reduce(page));
}

// The reducer is documented as lossy: structural elements do not survive a
// render-then-reduce trip, and that is fine. This test only checks that the
// trip does not panic and keeps the visible text.
#[test]
fn render_then_reduce_keeps_visible_text() {
    let md = "# Title\n\n> a quote\n\n| A | B |\n|---|---|\n| 1 | 2 |";
    let reduced = reduce(&render(md));
    assert!(reduced.contains("Title"));
    assert!(reduced.contains("a quote"));
    assert!(reduced.contains('1') && reduced.contains('2'));
}
