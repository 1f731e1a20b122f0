//! Table rendering tests (header + separator detection, row consumption).

use crate::common::render;
use insta::assert_snapshot;

#[test]
fn two_row_table_renders_header_and_body() {
    let md = "| Name | Qty |\n|------|-----|\n| apple | 2 |\n| pear | 5 |";
    assert_snapshot!(render(md), @r#"
    <table>
    <thead><tr><th>Name</th><th>Qty</th></tr></thead>
    <tbody>
    <tr><td>apple</td><td>2</td></tr>
    <tr><td>pear</td><td>5</td></tr>
    </tbody>
    </table>
    "#);
}

#[test]
fn alignment_colons_are_accepted_in_the_separator() {
    let output = render("| L | C | R |\n|:---|:---:|---:|\n| a | b | c |");
    assert_eq!(output.matches("<th>").count(), 3);
    assert_eq!(output.matches("<td>").count(), 3);
}

#[test]
fn separator_needs_three_dashes_per_column() {
    // Two dashes is not a separator row, so no table is produced
    let output = render("| A | B |\n|--|--|\n| 1 | 2 |");
    assert!(!output.contains("<table>"));
    assert!(output.starts_with("<p>"));
}

#[test]
fn header_without_separator_falls_back_to_paragraph() {
    let output = render("| A | B |\njust text");
    assert!(!output.contains("<table>"));
    assert!(output.contains("| A | B |"));
}

#[test]
fn row_consumption_stops_at_non_pipe_line() {
    let output = render("| A |  B |\n|---|---|\n| 1 | 2 |\nplain tail");
    assert_eq!(output.matches("<tr>").count(), 2);
    assert!(output.contains("<p>\nplain tail"));
}

#[test]
fn row_consumption_stops_at_end_of_input() {
    let output = render("| A | B |\n|---|---|\n| 1 | 2 |");
    assert!(output.ends_with("</table>"));
}

#[test]
fn cell_text_is_inline_rendered() {
    let output = render("| **bold** | `code` |\n|-----|-----|\n| [x](u) | a&b |");
    assert!(output.contains("<th><strong>bold</strong></th>"));
    assert!(output.contains("<th><code>code</code></th>"));
    assert!(output.contains("<td><a href=\"u\">x</a></td>"));
    assert!(output.contains("<td>a&amp;b</td>"));
}

#[test]
fn table_inside_document_closes_surrounding_blocks() {
    let output = render("intro\n| A | B |\n|---|---|\n| 1 | 2 |");
    let para_close = output.find("</p>").expect("intro paragraph closed");
    let table_open = output.find("<table>").expect("table opened");
    assert!(para_close < table_open);
}
