//! Shared helpers for the conversion test suites.

use confmark_babel::{reduce_to_markdown, render_storage, ReduceRules, RenderRules};

/// Render Markdown to storage format with default rules.
pub fn render(source: &str) -> String {
    render_storage(source, &RenderRules::default())
}

/// Reduce storage markup to Markdown with default rules.
pub fn reduce(source: &str) -> String {
    reduce_to_markdown(source, &ReduceRules::default())
}
