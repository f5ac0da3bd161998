use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated config file and static directory for one test
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir_all(temp_dir.path().join("static"))?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config").join("wizard.toml")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.path().join("static")
    }

    /// Put placeholder image files into the static directory
    pub fn add_assets(&self, files: &[&str]) -> Result<()> {
        for file in files {
            fs::write(self.static_dir().join(file), b"<svg/>")?;
        }
        Ok(())
    }
}
