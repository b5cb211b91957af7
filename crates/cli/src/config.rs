//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BRAMBLE_DATA_DIR` - Directory holding the durable snapshots
//!   (default: `.bramble`)

use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory the file backend stores snapshots under.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading never fails.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("BRAMBLE_DATA_DIR")
            .map_or_else(|_| PathBuf::from(".bramble"), PathBuf::from);

        Self { data_dir }
    }
}
