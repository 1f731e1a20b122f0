//! Markdown light reduction (storage format → Markdown)
//!
//! The inverse-direction companion to the storage renderer. It is documented
//! as a "light" converter: a chain of regex substitutions good enough to pull
//! readable Markdown out of a stored page, not a parser. Tables, blockquotes,
//! h4-h6, and nested structure are flattened or dropped, and round-tripping
//! through the storage renderer is explicitly not guaranteed.

pub mod reducer;
pub mod rules;

pub use reducer::reduce_to_markdown;
pub use rules::ReduceRules;

use crate::convert::{parse_char_option, Converter};
use crate::error::ConvertError;
use std::collections::HashMap;

/// Converter wrapper for the storage-format → Markdown reducer
pub struct MarkdownLightFormat;

impl Converter for MarkdownLightFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Lossy storage-format to Markdown reducer"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "xhtml", "storage"]
    }

    fn convert(&self, source: &str) -> Result<String, ConvertError> {
        Ok(reduce_to_markdown(source, &ReduceRules::default()))
    }

    fn convert_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ConvertError> {
        let mut rules = ReduceRules::default();
        if let Some(raw) = options.get("bullet-marker") {
            rules.bullet_marker = parse_char_option("bullet-marker", raw)?;
        }
        Ok(reduce_to_markdown(source, &rules))
    }
}
