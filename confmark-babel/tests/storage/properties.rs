//! Structural properties of the renderer.

use confmark_babel::{render_storage, RenderRules};
use proptest::prelude::*;

const BLOCK_TAG_PAIRS: &[(&str, &str)] = &[
    ("<p>", "</p>"),
    ("<ul>", "</ul>"),
    ("<ol>", "</ol>"),
    ("<blockquote>", "</blockquote>"),
    ("<table>", "</table>"),
    ("<thead>", "</thead>"),
    ("<tbody>", "</tbody>"),
    ("<tr>", "</tr>"),
    ("<pre>", "</pre>"),
];

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn assert_balanced(output: &str) {
    for (open, close) in BLOCK_TAG_PAIRS {
        assert_eq!(
            count(output, open),
            count(output, close),
            "unbalanced {open} in output:\n{output}"
        );
    }
}

#[test]
fn balance_holds_for_truncated_documents() {
    // Every open context is closed at end of input, the fence included
    for source in [
        "text without blank line",
        "- item",
        "1. item",
        "> quote",
        "```",
        "```\ncode without closing fence",
        "| A | B |\n|---|---|\n| 1 | 2 |",
    ] {
        assert_balanced(&render_storage(source, &RenderRules::default()));
    }
}

proptest! {
    #[test]
    fn opened_block_tags_are_always_closed(
        input in r"[a-zA-Z0-9 #>|*_`\[\]().\n-]{0,400}"
    ) {
        let output = render_storage(&input, &RenderRules::default());
        for (open, close) in BLOCK_TAG_PAIRS {
            prop_assert_eq!(count(&output, open), count(&output, close));
        }
    }
}
