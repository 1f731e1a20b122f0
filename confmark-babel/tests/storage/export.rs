//! Export tests for the storage format (Markdown → storage)
//!
//! These tests exercise whole documents through the public API and check the
//! emitted markup structure, not individual line classification (the unit
//! tests beside the renderer cover that).

use crate::common::render;
use confmark_babel::{Converter, StorageFormat};
use insta::assert_snapshot;

#[test]
fn kitchensink_blocks_render_in_order() {
    let md = "# Title\n\n## Section\n\n- one\n- two\n\n1. first\n\n---\n\n```\nlet x = 1;\n```";
    assert_snapshot!(render(md), @r#"
    <h1>Title</h1>
    <h2>Section</h2>
    <ul>
    <li>one</li>
    <li>two</li>
    </ul>
    <ol>
    <li>first</li>
    </ol>
    <hr/>
    <pre><code>
    let x = 1;
    </code></pre>
    "#);
}

#[test]
fn spec_example_document() {
    let output = render("# Title\n\n- one\n- two\n\n**bold**");

    let heading = output.find("<h1>Title</h1>").expect("heading present");
    let list_open = output.find("<ul>").expect("list opened");
    let item_one = output.find("<li>one</li>").expect("first item");
    let item_two = output.find("<li>two</li>").expect("second item");
    let list_close = output.find("</ul>").expect("list closed");
    let strong = output.find("<strong>bold</strong>").expect("bold paragraph");

    assert!(heading < list_open);
    assert!(list_open < item_one && item_one < item_two && item_two < list_close);
    assert!(list_close < strong);
}

#[test]
fn fence_contents_are_markdown_opaque_but_markup_escaped() {
    let output = render("```\n**not bold** <tag> & co\n```");
    assert!(output.contains("**not bold** &lt;tag&gt; &amp; co"));
    assert!(!output.contains("<strong>"));
}

#[test]
fn blockquote_wraps_a_single_joined_paragraph() {
    let output = render("> line one\n> line two\n\nafter");
    assert_eq!(output.matches("<blockquote>").count(), 1);
    assert_eq!(output.matches("</blockquote>").count(), 1);
    // Both quote lines live in one paragraph, the trailing text in another
    assert_eq!(output.matches("<p>").count(), 2);
    assert!(output.contains("line one \nline two"));
}

#[test]
fn empty_input_renders_to_nothing() {
    assert_eq!(render(""), "");
    assert_eq!(render("\n\n\n"), "");
}

#[test]
fn converter_and_function_agree() {
    let md = "# Same\n\n- output";
    assert_eq!(StorageFormat.convert(md).unwrap(), render(md));
}
