use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "SEARCH_QUERY_BUILDER_HOME";

const APP_DIR_NAME: &str = "search-query-builder";

/// Resolve the data directory holding `storage.json`
///
/// Precedence: explicit `--data-dir` flag, then `$SEARCH_QUERY_BUILDER_HOME`, then the
/// platform data directory:
/// - Linux: `~/.local/share/search-query-builder/`
/// - macOS: `~/Library/Application Support/search-query-builder/`
/// - Windows: `%APPDATA%\search-query-builder\`
pub fn get_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let data_base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(data_base.join(APP_DIR_NAME))
}
