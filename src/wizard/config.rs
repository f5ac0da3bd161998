use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::common::config::DocumentedConfig;
use crate::common::paths;
use crate::documented_config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub mouse: bool,
    pub show_images: bool,
    pub static_dir: Option<String>,
    pub terminal: Option<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            show_images: true,
            static_dir: None,
            terminal: None,
        }
    }
}

documented_config!(WizardConfig {
    fields: [
        mouse, "Enable mouse clicks on the Back/Next buttons",
        show_images, "Draw placeholders for the page images",
    ],
    optional: [
        static_dir, "Directory holding the wizard images",
        terminal, "Terminal emulator used by `sundial run --gui`",
    ],
    config_path: paths::wizard_config_path,
});

impl WizardConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path()?)
    }

    pub fn static_dir(&self) -> Option<PathBuf> {
        self.static_dir
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| PathBuf::from(shellexpand::tilde(s).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_documented() {
        let text = WizardConfig::default().to_documented_string();
        assert!(text.contains("mouse = true  # Enable mouse clicks"));
        assert!(text.contains("show_images = true"));
        assert!(text.contains("# static_dir = \"\"  # Directory holding the wizard images"));
        assert!(text.contains("# terminal = \"\""));
    }

    #[test]
    fn test_documented_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("wizard.toml");

        let config = WizardConfig {
            mouse: false,
            show_images: true,
            static_dir: Some("/opt/sundial/static".to_string()),
            terminal: None,
        };
        config.save_with_documentation(&path).unwrap();

        let loaded = WizardConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = WizardConfig::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, WizardConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.toml");
        fs::write(&path, "show_images = false\n").unwrap();

        let loaded = WizardConfig::load_from_path(&path).unwrap();
        assert!(loaded.mouse);
        assert!(!loaded.show_images);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.toml");
        fs::write(&path, "mouse = \"sometimes\"\n").unwrap();

        let err = WizardConfig::load_from_path(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }

    #[test]
    fn test_static_dir_expands_home() {
        let config = WizardConfig {
            static_dir: Some("~/assets".to_string()),
            ..Default::default()
        };
        let dir = config.static_dir().unwrap();
        assert!(dir.ends_with("assets"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(dir, home.join("assets"));
        }

        let empty = WizardConfig {
            static_dir: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.static_dir(), None);
    }

    #[test]
    fn test_static_dir_bare_tilde_is_home() {
        let config = WizardConfig {
            static_dir: Some("~".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.static_dir(), Some(home));
        }
    }

    #[test]
    fn test_static_dir_absolute_path_is_kept() {
        let config = WizardConfig {
            static_dir: Some("/opt/sundial/static".to_string()),
            ..Default::default()
        };
        assert_eq!(config.static_dir(), Some(PathBuf::from("/opt/sundial/static")));
    }
}
