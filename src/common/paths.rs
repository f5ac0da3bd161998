use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SUNDIAL_CONFIG";

/// Environment variable overriding the static asset directory
pub const STATIC_DIR_ENV: &str = "SUNDIAL_STATIC_DIR";

/// Get the sundial config directory
pub fn sundial_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join("sundial");
    Ok(config_dir)
}

/// Path of the wizard config file, honoring `SUNDIAL_CONFIG`
pub fn wizard_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    Ok(sundial_config_dir()?.join("wizard.toml"))
}

/// Directory containing the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to get current executable path")?;
    exe.parent()
        .map(PathBuf::from)
        .context("Executable path has no parent directory")
}
