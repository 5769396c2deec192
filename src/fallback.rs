//! Fallback model chains
//!
//! A chain is a cyclic mapping from each configured model to the next one,
//! built from a comma-separated ordered list. It is constructed once per
//! dispatch and read-only afterwards. A list with fewer than two entries
//! yields an empty chain: with nothing to substitute, the retry controller
//! keeps the current model.

use std::collections::HashMap;

/// Cyclic model-substitution map
#[derive(Debug, Clone, Default)]
pub struct FallbackChain {
    next: HashMap<String, String>,
}

impl FallbackChain {
    /// Build from a comma-separated model list. Entries are trimmed and
    /// empties dropped; `model[i]` maps to `model[(i + 1) % n]`.
    pub fn from_list(configuration: &str) -> Self {
        let models: Vec<&str> = configuration
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .collect();

        let mut next = HashMap::new();
        if models.len() > 1 {
            for (i, model) in models.iter().enumerate() {
                next.insert(
                    (*model).to_string(),
                    models[(i + 1) % models.len()].to_string(),
                );
            }
        }
        Self { next }
    }

    /// Substitute model for `model`, if the chain knows one
    pub fn next(&self, model: &str) -> Option<&str> {
        self.next.get(model).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    pub fn len(&self) -> usize {
        self.next.len()
    }
}
