// crates/extract_snippet/src/config.rs

use std::env;
use std::path::PathBuf;

use marker_syntax::DEFAULT_INDENT;

/// Overrides the root used when an address names none.
pub const ROOT_ENV: &str = "SNIPPET_ROOT";
/// Overrides the indentation unit prepended to every snippet line.
pub const INDENT_ENV: &str = "SNIPPET_INDENT";
/// Documentation-source root used when neither the address nor the environment names one.
pub const DEFAULT_ROOT: &str = "test/docs";

/// Runtime configuration composed from the environment; CLI flags are applied on top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetConfig {
    pub default_root: PathBuf,
    pub indent: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            default_root: PathBuf::from(DEFAULT_ROOT),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl SnippetConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(root) = lookup(ROOT_ENV).filter(|root| !root.trim().is_empty()) {
            config.default_root = PathBuf::from(root);
        }
        // An empty indent is allowed and means "no prefix".
        if let Some(indent) = lookup(INDENT_ENV) {
            config.indent = indent;
        }
        config
    }
}
