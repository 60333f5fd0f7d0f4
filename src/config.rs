use std::env;

use anyhow::Result;

/// Default number of terms reported per category.
pub const DEFAULT_TOP_K: usize = 50;

/// Default extension for tokenized category files.
pub const DEFAULT_SEG_EXT: &str = "seg";

/// Central configuration loaded from environment variables.
///
/// CLI flags take precedence over these defaults. A .env file is loaded
/// automatically at startup via dotenvy.
pub struct Config {
    /// How many terms to report per category (SHIBBOLETH_TOP_K)
    pub top_k: usize,
    /// Extension of tokenized category files (SHIBBOLETH_SEG_EXT)
    pub seg_ext: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults for anything unset.
    pub fn load() -> Result<Self> {
        let top_k = match env::var("SHIBBOLETH_TOP_K") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("SHIBBOLETH_TOP_K must be a number, got {raw:?}"))?,
            Err(_) => DEFAULT_TOP_K,
        };

        let seg_ext =
            env::var("SHIBBOLETH_SEG_EXT").unwrap_or_else(|_| DEFAULT_SEG_EXT.to_string());
        if seg_ext.is_empty() || seg_ext.contains('.') {
            anyhow::bail!(
                "SHIBBOLETH_SEG_EXT must be a bare extension like \"seg\", got {seg_ext:?}"
            );
        }

        Ok(Self { top_k, seg_ext })
    }
}
