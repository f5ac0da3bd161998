use anyhow::Result;
use std::collections::HashMap;

use super::assets::{AssetResolver, AssetStatus};
use super::config::WizardConfig;
use super::pages::PageCatalog;

/// Everything the wizard needs, built once at startup and handed to the
/// navigator and the view.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: WizardConfig,
    pub catalog: PageCatalog,
    pub assets: AssetResolver,
    asset_status: HashMap<String, AssetStatus>,
}

impl AppContext {
    pub fn new(config: WizardConfig, catalog: PageCatalog, assets: AssetResolver) -> Self {
        let asset_status = catalog
            .image_files()
            .into_iter()
            .map(|file| (file.to_string(), assets.check(file)))
            .collect();
        Self {
            config,
            catalog,
            assets,
            asset_status,
        }
    }

    /// Load the user config and discover the static directory.
    pub fn load() -> Result<Self> {
        let config = WizardConfig::load()?;
        let assets = AssetResolver::discover(&config);
        Ok(Self::new(config, PageCatalog::builtin(), assets))
    }

    /// Status captured when the context was built. Files not referenced by
    /// the catalog report as missing.
    pub fn asset_status(&self, file: &str) -> AssetStatus {
        self.asset_status
            .get(file)
            .copied()
            .unwrap_or(AssetStatus::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_status_is_captured_at_build() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Sundial.svg"), b"<svg/>").unwrap();

        let ctx = AppContext::new(
            WizardConfig::default(),
            PageCatalog::builtin(),
            AssetResolver::new(dir.path()),
        );

        assert_eq!(ctx.asset_status("Sundial.svg"), AssetStatus::Found);
        assert_eq!(ctx.asset_status("unknown.png"), AssetStatus::Missing);
        assert_eq!(ctx.asset_status("Group_30501.svg"), AssetStatus::Missing);
    }
}
