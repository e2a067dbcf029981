//! Configuration for the query compiler.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CriteriaError, Result};

/// Configuration for [`QueryCompiler`](crate::query::QueryCompiler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Sort fragments by operation, then text, before joining.
    ///
    /// Off by default: fragment order then follows the predicate set's
    /// iteration order, which is only semantically stable.
    pub canonical_order: bool,

    /// Minimum batch size for which `compile_all` uses the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            canonical_order: false,
            parallel_threshold: 64,
        }
    }
}

impl CompilerConfig {
    /// Enable or disable canonical fragment ordering.
    pub fn with_canonical_order(mut self, canonical_order: bool) -> Self {
        self.canonical_order = canonical_order;
        self
    }

    /// Set the parallel batch threshold.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Load configuration from a JSON file. Missing keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: CompilerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for invalid values.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(CriteriaError::invalid_argument(
                "parallel_threshold must be at least 1",
            ));
        }
        Ok(())
    }
}
