//! Tunable knobs for the storage-format renderer.

use serde::{Deserialize, Serialize};

/// Rendering knobs consumed by [`super::render_storage`].
///
/// Kept as a plain struct so the configuration layer can deserialize it and
/// the CLI can override individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRules {
    /// Emit `<pre><code class="language-…">` when a fence carries a language
    /// token. Off by default: the plain renderer discards the token.
    pub code_language_class: bool,
}

impl Default for RenderRules {
    fn default() -> Self {
        RenderRules {
            code_language_class: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_discards_language_tokens() {
        assert!(!RenderRules::default().code_language_class);
    }
}
