mod config;
pub mod database;

pub use config::{Config, DisplayConfig, LogConfig, StorageConfig};
pub use database::{BlobStore, Database, MemoryBlobStore, STORE_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory.
///
/// `RITUALROOM_DATA_DIR` wins when set. Otherwise this is
/// `~/.config/ritualroom[-dev]/`, with the `-dev` suffix when
/// `RITUALROOM_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("RITUALROOM_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("RITUALROOM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("ritualroom-dev")
            } else {
                base_dir.join("ritualroom")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
