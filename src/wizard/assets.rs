//! Static image lookup
//!
//! The wizard never fails because an image is missing: lookups report
//! [`AssetStatus::Missing`] and the view draws a placeholder instead.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::config::WizardConfig;
use super::pages::PageCatalog;
use crate::common::paths;
use crate::ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Found,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    pub file: String,
    pub path: PathBuf,
    pub status: AssetStatus,
}

#[derive(Debug, Clone)]
pub struct AssetResolver {
    static_dir: PathBuf,
}

impl AssetResolver {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
        }
    }

    /// Pick the static directory from config, `SUNDIAL_STATIC_DIR`, or the
    /// directories next to the executable, in that order.
    ///
    /// The first candidate that exists wins. When none exist the first
    /// candidate is used anyway and every asset reports as missing.
    pub fn discover(config: &WizardConfig) -> Self {
        let candidates = candidate_dirs(config);
        let chosen = candidates
            .iter()
            .find(|dir| dir.is_dir())
            .or_else(|| candidates.first())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("static"));
        Self::new(chosen)
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn resolve(&self, file: &str) -> PathBuf {
        self.static_dir.join(file)
    }

    pub fn check(&self, file: &str) -> AssetStatus {
        if self.resolve(file).is_file() {
            AssetStatus::Found
        } else {
            AssetStatus::Missing
        }
    }

    /// Check every image the catalog references.
    ///
    /// Missing files are reported as warnings, never as errors.
    pub fn check_all(&self, catalog: &PageCatalog) -> Vec<AssetReport> {
        catalog
            .image_files()
            .into_iter()
            .map(|file| {
                let path = self.resolve(file);
                let status = self.check(file);
                if status == AssetStatus::Missing {
                    emit(
                        Level::Warn,
                        "wizard.asset.missing",
                        &format!(
                            "{} Image {} not found at {}",
                            char::from(NerdFont::Warning),
                            file,
                            path.display()
                        ),
                        Some(serde_json::json!({
                            "asset": file,
                            "path": path.display().to_string(),
                        })),
                    );
                }
                AssetReport {
                    file: file.to_string(),
                    path,
                    status,
                }
            })
            .collect()
    }
}

fn candidate_dirs(config: &WizardConfig) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(dir) = config.static_dir() {
        dirs.push(dir);
    }

    if let Ok(dir) = std::env::var(paths::STATIC_DIR_ENV)
        && !dir.is_empty()
    {
        dirs.push(PathBuf::from(dir));
    }

    if let Ok(exe_dir) = paths::executable_dir() {
        dirs.push(exe_dir.join("static"));
        dirs.push(exe_dir.join("..").join("static"));
    }

    dirs.push(PathBuf::from("static"));
    dirs
}
