//! Default selector values of the summary pages.

use serde::{Deserialize, Serialize};

/// Initial pool, benchmark and optimizer selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDefaults {
    /// Stock pool (`all` for every pool).
    #[serde(default = "default_pool")]
    pub pool: String,
    /// Benchmark index code.
    #[serde(default = "default_index")]
    pub benchmark_index: String,
    /// Optimizer index code.
    #[serde(default = "default_index")]
    pub optimizer_index: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            pool: default_pool(),
            benchmark_index: default_index(),
            optimizer_index: default_index(),
        }
    }
}

fn default_pool() -> String {
    "all".to_string()
}

fn default_index() -> String {
    "000905.SH".to_string()
}
