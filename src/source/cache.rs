use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use crate::schema::ALL_SOURCES;

/// On-disk copies of fetched sources, one directory per base URL
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let cache_dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "skyriver")
                    .context("Could not determine cache directory")?;
                proj_dirs.cache_dir().to_path_buf()
            }
        };

        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    /// Get the cache directory path
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Directory holding the sources fetched from a base URL
    pub fn dataset_dir(&self, base_url: &str) -> PathBuf {
        self.cache_dir.join(dataset_key(base_url))
    }

    /// Check if every source for a base URL is already cached
    pub fn is_cached(&self, base_url: &str) -> bool {
        let dir = self.dataset_dir(base_url);
        dir.is_dir()
            && ALL_SOURCES
                .iter()
                .all(|s| dir.join(s.source_file).is_file())
    }

    /// Remove cached datasets other than the given one
    pub fn cleanup_other_datasets(&self, keep_url: &str) -> Result<()> {
        let keep = dataset_key(keep_url);
        for entry in fs::read_dir(&self.cache_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() && entry.file_name().to_str() != Some(keep.as_str()) {
                fs::remove_dir_all(&path).ok();
            }
        }
        Ok(())
    }
}

/// Filesystem-safe name for a base URL
fn dataset_key(base_url: &str) -> String {
    let trimmed = base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}
