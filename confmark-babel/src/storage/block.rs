//! Block-level rendering (Markdown → storage format)
//!
//! Scans the document line by line, classifies each line into a block
//! context, and emits open/close tags on state transitions. Classification
//! order is fixed: fence toggle, raw fence content, blank line, table
//! header + separator pair, horizontal rule, heading, blockquote, list item,
//! paragraph. Anything unclassifiable falls through to paragraph text, so
//! malformed input never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use super::inline::{escape_markup, render_inline};
use super::rules::RenderRules;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading regex is valid"));
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").expect("unordered item regex is valid"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").expect("ordered item regex is valid"));
static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|?\s*:?-{3,}:?\s*(\|\s*:?-{3,}:?\s*)+\|?\s*$")
        .expect("separator row regex is valid")
});

/// The block context the renderer is currently inside.
///
/// At most one context is open at a time. `Blockquote` covers both the
/// wrapper and the single paragraph accumulated inside it, so closing a
/// blockquote always emits `</p>` before `</blockquote>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    None,
    Paragraph,
    UnorderedList,
    OrderedList,
    Blockquote,
    Code,
}

/// Render a Markdown document body to storage format.
///
///// Pure string-to-string transform: newlines are normalized to LF, the lines
/// are scanned once, and the rendered fragments are joined with LF and
/// trimmed. Every context left open at end of input is closed, including an
/// unterminated code fence.
pub fn render_storage(source: &str, rules: &RenderRules) -> String {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let mut out: Vec<String> = Vec::new();
    let mut state = BlockState::None;
    let mut i = 0;

    while i < lines.len() {
        let raw = lines[i];
        let line = raw.trim_end();

        if state == BlockState::Code {
            if line == "```" {
                out.push("</code></pre>".to_string());
                state = BlockState::None;
            } else {
                // Fence content is escaped but never otherwise interpreted.
                out.push(escape_markup(raw));
            }
            i += 1;
            continue;
        }

        if line.starts_with("```") {
            close_block(&mut out, &mut state);
            out.push(code_open_tag(line, rules));
            state = BlockState::Code;
            i += 1;
            continue;
        }

        if line.trim().is_empty() {
            close_block(&mut out, &mut state);
            i += 1;
            continue;
        }

        // A pipe line is a table header only when the immediately following
        // line is a separator row; otherwise the pipes are plain text.
        if line.contains('|') && i + 1 < lines.len() && is_separator_row(lines[i + 1]) {
            close_block(&mut out, &mut state);
            let header = parse_cells(line);
            i += 2;
            let mut rows: Vec<Vec<&str>> = Vec::new();
            while i < lines.len()
                && lines[i].contains('|')
                && !lines[i].trim_start().starts_with('#')
            {
                rows.push(parse_cells(lines[i]));
                i += 1;
            }

            let header_cells: String = header
                .iter()
                .map(|cell| format!("<th>{}</th>", render_inline(cell)))
                .collect();
            out.push("<table>".to_string());
            out.push(format!("<thead><tr>{header_cells}</tr></thead>"));
            out.push("<tbody>".to_string());
            for row in rows {
                let cells: String = row
                    .iter()
                    .map(|cell| format!("<td>{}</td>", render_inline(cell)))
                    .collect();
                out.push(format!("<tr>{cells}</tr>"));
            }
            out.push("</tbody>".to_string());
            out.push("</table>".to_string());
            continue;
        }

        if is_horizontal_rule(line) {
            close_block(&mut out, &mut state);
            out.push("<hr/>".to_string());
            i += 1;
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            close_block(&mut out, &mut state);
            let level = caps[1].len();
            out.push(format!("<h{level}>{}</h{level}>", render_inline(&caps[2])));
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix('>') {
            if state != BlockState::Blockquote {
                close_block(&mut out, &mut state);
                out.push("<blockquote>".to_string());
                out.push("<p>".to_string());
                state = BlockState::Blockquote;
            }
            // Consecutive quote lines accumulate into one paragraph.
            let mut text = render_inline(rest.trim_start());
            text.push(' ');
            out.push(text);
            i += 1;
            continue;
        } else if state == BlockState::Blockquote {
            close_block(&mut out, &mut state);
        }

        if let Some(caps) = UNORDERED_ITEM.captures(line) {
            if state != BlockState::UnorderedList {
                close_block(&mut out, &mut state);
                out.push("<ul>".to_string());
                state = BlockState::UnorderedList;
            }
            out.push(format!("<li>{}</li>", render_inline(&caps[1])));
            i += 1;
            continue;
        }

        if let Some(caps) = ORDERED_ITEM.captures(line) {
            if state != BlockState::OrderedList {
                close_block(&mut out, &mut state);
                out.push("<ol>".to_string());
                state = BlockState::OrderedList;
            }
            out.push(format!("<li>{}</li>", render_inline(&caps[1])));
            i += 1;
            continue;
        }

        if state != BlockState::Paragraph {
            close_block(&mut out, &mut state);
            out.push("<p>".to_string());
            state = BlockState::Paragraph;
        }
        let mut text = render_inline(line);
        text.push(' ');
        out.push(text);
        i += 1;
    }

    close_block(&mut out, &mut state);
    out.join("\n").trim().to_string()
}

/// Emit the closing tags for the open context, if any.
fn close_block(out: &mut Vec<String>, state: &mut BlockState) {
    match *state {
        BlockState::None => {}
        BlockState::Paragraph => out.push("</p>".to_string()),
        BlockState::UnorderedList => out.push("</ul>".to_string()),
        BlockState::OrderedList => out.push("</ol>".to_string()),
        BlockState::Blockquote => {
            out.push("</p>".to_string());
            out.push("</blockquote>".to_string());
        }
        // Only reachable at end of input: the scan loop consumes fence
        // content before any other classification.
        BlockState::Code => out.push("</code></pre>".to_string()),
    }
    *state = BlockState::None;
}

fn code_open_tag(line: &str, rules: &RenderRules) -> String {
    if rules.code_language_class {
        let language = line.trim_start_matches('`').trim();
        if !language.is_empty() {
            return format!("<pre><code class=\"language-{}\">", escape_markup(language));
        }
    }
    "<pre><code>".to_string()
}

fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW.is_match(line.trim())
}

fn parse_cells(line: &str) -> Vec<&str> {
    line.trim()
        .trim_matches('|')
        .split('|')
        .map(str::trim)
        .collect()
}

/// Three or more of the same character among `*`, `-`, `_`, nothing else.
fn is_horizontal_rule(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.len() < 3 {
        return false;
    }
    let mut chars = trimmed.chars();
    let first = chars.next();
    matches!(first, Some('*') | Some('-') | Some('_')) && chars.all(|c| Some(c) == first)
}
