//! Documented configuration files
//!
//! Configs are written with one `key = value  # description` line per field.
//! Optional fields that are unset are written commented out, so the file
//! always lists every available setting.
//!
//! # Example
//!
//! ```ignore
//! documented_config!(WizardConfig {
//!     fields: [
//!         mouse, "Enable mouse support",
//!     ],
//!     optional: [
//!         static_dir, "Directory holding the wizard images",
//!     ],
//!     config_path: || Ok(paths::sundial_config_dir()?.join("wizard.toml")),
//! });
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata about a configuration field
#[derive(Debug, Clone)]
pub struct ConfigFieldMeta {
    pub name: &'static str,
    /// TOML-serialized default value, or None if serialization failed
    pub default_value: Option<String>,
    pub description: &'static str,
    pub is_optional: bool,
}

/// Trait for configs with documented defaults
///
/// Implemented by the `documented_config!` macro.
pub trait DocumentedConfig: Sized + Default + for<'de> serde::Deserialize<'de> {
    fn field_metadata() -> Vec<ConfigFieldMeta>;

    fn is_optional_field_set(&self, field_name: &str) -> bool;

    /// TOML-serialized value for a field
    fn get_field_value(&self, field_name: &str) -> String;

    /// Default location of the config file
    fn config_path() -> Result<PathBuf>;

    /// Render the documented TOML text
    fn to_documented_string(&self) -> String {
        let mut output = String::new();

        for field in Self::field_metadata() {
            if field.is_optional && !self.is_optional_field_set(field.name) {
                let Some(default_val) = &field.default_value else {
                    continue;
                };
                output.push_str(&format!(
                    "# {} = {}  # {}\n",
                    field.name, default_val, field.description
                ));
            } else {
                output.push_str(&format!(
                    "{} = {}  # {}\n",
                    field.name,
                    self.get_field_value(field.name),
                    field.description
                ));
            }
        }

        output
    }

    fn save_with_documentation(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }

        fs::write(path, self.to_documented_string())
            .with_context(|| format!("writing config to {}", path.display()))?;
        Ok(())
    }

    fn load_from_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("parsing config")
    }

    /// Load the config at `path`, or the defaults when it doesn't exist.
    fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::load_from_str(&contents)
            .with_context(|| format!("invalid config at {}", path.display()))
    }
}

/// Generate a `DocumentedConfig` implementation
///
/// Regular fields are always written; optional (`Option<T>`) fields are
/// written commented out while unset.
#[macro_export]
macro_rules! documented_config {
    (
        $config_name:ident {
            fields: [
                $($field:ident, $desc:expr),* $(,)?
            ],
            optional: [
                $($opt_field:ident, $opt_desc:expr),* $(,)?
            ],
            config_path: $path:expr $(,)?
        }
    ) => {
        impl $crate::common::config::DocumentedConfig for $config_name {
            fn field_metadata() -> Vec<$crate::common::config::ConfigFieldMeta> {
                let default_config = Self::default();
                vec![
                    $(
                        $crate::common::config::ConfigFieldMeta {
                            name: stringify!($field),
                            default_value: toml::Value::try_from(&default_config.$field)
                                .map(|v| v.to_string())
                                .ok(),
                            description: $desc,
                            is_optional: false,
                        },
                    )*
                    $(
                        $crate::common::config::ConfigFieldMeta {
                            name: stringify!($opt_field),
                            default_value: {
                                let inner_default = default_config.$opt_field.clone()
                                    .unwrap_or_default();
                                toml::Value::try_from(&inner_default)
                                    .map(|v| v.to_string())
                                    .ok()
                            },
                            description: $opt_desc,
                            is_optional: true,
                        },
                    )*
                ]
            }

            fn is_optional_field_set(&self, field_name: &str) -> bool {
                match field_name {
                    $(
                        stringify!($opt_field) => self.$opt_field.is_some(),
                    )*
                    _ => false,
                }
            }

            fn get_field_value(&self, field_name: &str) -> String {
                match field_name {
                    $(
                        stringify!($field) => {
                            toml::Value::try_from(&self.$field)
                                .map(|v| v.to_string())
                                .unwrap_or_else(|_| format!("{:?}", self.$field))
                        }
                    )*
                    $(
                        stringify!($opt_field) => match &self.$opt_field {
                            Some(v) => toml::Value::try_from(v)
                                .map(|v| v.to_string())
                                .unwrap_or_else(|_| format!("{:?}", v)),
                            None => "\"\"".to_string(),
                        },
                    )*
                    _ => String::new(),
                }
            }

            fn config_path() -> anyhow::Result<std::path::PathBuf> {
                ($path)()
            }
        }
    };
}
