use std::path::PathBuf;

use color_eyre::Result;

/// Returns `<cache dir>/<app_name>/logs/<filename>`, creating the directory.
///
/// # Errors
///
/// Returns an error if the platform cache directory cannot be determined or
/// the log directory cannot be created.
pub fn create_log_path(app_name: &str, filename: &str) -> Result<PathBuf> {
    let log_dir = dirs::cache_dir()
        .ok_or_else(|| color_eyre::eyre::eyre!("Failed to get cache directory"))?
        .join(app_name)
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;
    Ok(log_dir.join(filename))
}
