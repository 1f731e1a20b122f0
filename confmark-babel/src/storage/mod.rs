//! Storage-format rendering (Markdown → storage format)
//!
//! This module implements the one-way conversion from Markdown to the wiki
//! backend's storage format (a restricted HTML-like tag vocabulary).
//!
//! # Element Mapping Table
//!
//! | Markdown construct       | Storage markup                     | Notes                                    |
//! |--------------------------|------------------------------------|------------------------------------------|
//! | `# Heading` (1-6)        | `<h1>`-`<h6>`                      | Level from hash count                    |
//! | Paragraph                | `<p>…</p>`                         | Lines joined, trailing space per line    |
//! | `- item` / `* item`      | `<ul><li>…</li></ul>`              | Marker switch closes the previous list   |
//! | `1. item`                | `<ol><li>…</li></ol>`              | Any digits-dot prefix                    |
//! | `> quote`                | `<blockquote><p>…</p></blockquote>`| Consecutive lines join in one paragraph  |
//! | ```` ``` ```` fence      | `<pre><code>…</code></pre>`        | Contents escaped, never interpreted      |
//! | Header + separator table | `<table><thead>…<tbody>…</table>`  | Separator row required, else plain text  |
//! | `---` / `***` / `___`    | `<hr/>`                            | Whole line, one repeated character       |
//! | `**bold**` / `__bold__`  | `<strong>`                         |                                          |
//! | `*italic*` / `_italic_`  | `<em>`                             | Skipped when adjacent to same delimiter  |
//! | `` `code` ``             | `<code>`                           |                                          |
//! | `[text](url)`            | `<a href="url">text</a>`           | href escaped inside the attribute        |
//!
//! # Permissiveness
//!
//! Nothing here returns an error for malformed Markdown. A table header
//! without a separator row, a half-closed emphasis span, an unterminated
//! fence: all degrade to plain text or get closed at end of input.

pub mod block;
pub mod inline;
pub mod rules;

pub use block::render_storage;
pub use rules::RenderRules;

use crate::convert::{parse_bool_option, Converter};
use crate::error::ConvertError;
use std::collections::HashMap;

/// Converter wrapper for the Markdown → storage-format renderer
pub struct StorageFormat;

impl Converter for StorageFormat {
    fn name(&self) -> &str {
        "storage"
    }

    fn description(&self) -> &str {
        "Markdown to storage-format renderer"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn convert(&self, source: &str) -> Result<String, ConvertError> {
        Ok(render_storage(source, &RenderRules::default()))
    }

    fn convert_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        let mut rules = RenderRules::default();
        if let Some(raw) = options.get("code-language-class") {
            rules.code_language_class = parse_bool_option("code-language-class", raw)?;
        }
        Ok(render_storage(source, &rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converter_metadata() {
        assert_eq!(StorageFormat.name(), "storage");
        assert!(StorageFormat.file_extensions().contains(&"md"));
    }

    #[test]
    fn convert_uses_default_rules() {
        let output = StorageFormat.convert("```rust\nx\n```").unwrap();
        assert!(output.starts_with("<pre><code>\n"));
    }

    #[test]
    fn options_toggle_language_classes() {
        let mut options = HashMap::new();
        options.insert("code-language-class".to_string(), "true".to_string());
        let output = StorageFormat
            .convert_with_options("```rust\nx\n```", &options)
            .unwrap();
        assert!(output.starts_with("<pre><code class=\"language-rust\">"));
    }

    #[test]
    fn bad_option_value_is_rejected() {
        let mut options = HashMap::new();
        options.insert("code-language-class".to_string(), "sometimes".to_string());
        let result = StorageFormat.convert_with_options("x", &options);
        assert!(matches!(result, Err(ConvertError::InvalidOption(_))));
    }
}
