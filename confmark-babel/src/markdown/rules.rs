//! Tunable knobs for the Markdown reducer.

use serde::{Deserialize, Serialize};

/// Reduction knobs consumed by [`super::reduce_to_markdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceRules {
    /// Bullet character used for reduced list items.
    pub bullet_marker: char,
}

impl Default for ReduceRules {
    fn default() -> Self {
        ReduceRules { bullet_marker: '-' }
    }
}
