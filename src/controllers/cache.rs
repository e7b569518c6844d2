use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{config::Configs, consts::CACHE_FILE_NAME};

/// On-disk dashboard cache, one directory per project under `base_dir`.
#[derive(Debug, Clone)]
pub struct CacheStore {
    base_dir: PathBuf,
}

impl CacheStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn from_configs(configs: &Configs) -> Self {
        Self::new(&configs.base_dir)
    }

    pub fn cache_dir(&self, project_id: &str) -> PathBuf {
        self.base_dir.join(project_id)
    }

    pub fn cache_path(&self, project_id: &str) -> PathBuf {
        self.cache_dir(project_id).join(CACHE_FILE_NAME)
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn ensure_dir(path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    #[allow(dead_code)]
    pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
    }

    pub fn read(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
