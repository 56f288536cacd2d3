//! Acquisition of the nine source texts.

pub mod archive;
pub mod cache;
pub mod client;

pub use archive::*;
pub use cache::*;
pub use client::*;

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::schema::{SourceSchema, ALL_SOURCES};
use crate::ui::Ui;

/// Raw text of each source, keyed by source name. Absent sources read as
/// empty text and so produce no entities.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    texts: HashMap<&'static str, String>,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for a named source. Unknown names are ignored.
    pub fn set(&mut self, name: &str, text: impl Into<String>) {
        if let Some(schema) = ALL_SOURCES.iter().copied().find(|s| s.name == name) {
            self.insert(schema, text);
        } else {
            warn!(source = name, "Ignoring text for unknown source");
        }
    }

    pub fn insert(&mut self, schema: &'static SourceSchema, text: impl Into<String>) {
        self.texts.insert(schema.name, text.into());
    }

    pub fn text(&self, name: &str) -> &str {
        self.texts.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.texts.contains_key(name)
    }

    /// Names of the sources that are present
    pub fn present(&self) -> Vec<&'static str> {
        ALL_SOURCES
            .iter()
            .map(|s| s.name)
            .filter(|name| self.texts.contains_key(*name))
            .collect()
    }

    /// Read every source file from a directory. Missing files are skipped
    /// with a warning.
    pub fn from_dir(dir: &Path, ui: &mut impl Ui) -> Result<Self> {
        if !dir.is_dir() {
            bail!("Not a directory: {:?}", dir);
        }

        let mut sources = Self::new();
        for &schema in ALL_SOURCES {
            let path = dir.join(schema.source_file);
            if !path.exists() {
                warn!(source = schema.name, path = %path.display(), "Source file not found");
                ui.log(format!("{}: skipped (file not found)", schema.name));
                continue;
            }

            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read: {:?}", path))?;
            sources.insert(schema, text);
        }

        Ok(sources)
    }

    /// Write every present source into a directory
    pub fn write_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).context("Failed to create source directory")?;

        for schema in ALL_SOURCES {
            if let Some(text) = self.texts.get(schema.name) {
                let path = dir.join(schema.source_file);
                fs::write(&path, text).with_context(|| format!("Failed to write: {:?}", path))?;
            }
        }

        Ok(())
    }

    /// Read sources from a directory or a zip archive
    pub fn open(path: &Path, ui: &mut impl Ui) -> Result<Self> {
        if path.is_dir() {
            Self::from_dir(path, ui)
        } else if is_archive(path) {
            read_archive(path, ui)
        } else {
            bail!("Expected a directory or .zip archive: {:?}", path)
        }
    }
}

fn is_archive(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("zip"))
}

/// Fetch sources from a base URL unless they are already cached, returning
/// the directory holding them
pub fn ensure_fetched(
    base_url: &str,
    cache_dir: Option<PathBuf>,
    force: bool,
    timeout_secs: u64,
    ui: &mut impl Ui,
) -> Result<PathBuf> {
    let cache = CacheManager::new(cache_dir)?;
    let dir = cache.dataset_dir(base_url);

    if !force && cache.is_cached(base_url) {
        ui.log(format!("Using cached sources in {:?}", dir));
        return Ok(dir);
    }

    let client = SourceClient::new(timeout_secs)?;
    let sources = client.fetch_all(base_url, ui)?;
    sources.write_dir(&dir)?;
    ui.log(format!("Stored sources in {:?}", dir));

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SilentUi;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_source_is_ignored() {
        let mut sources = Sources::new();
        sources.set("nebulae", "Veil|veil");
        assert!(sources.present().is_empty());
        assert_eq!(sources.text("nebulae"), "");
    }

    #[test]
    fn test_dir_roundtrip_skips_missing_files() {
        let dir = TempDir::new().unwrap();
        let mut sources = Sources::new();
        sources.set("regions", "Core|core");
        sources.set("hyperlanes", "Spine,spine,0,1,,core");
        sources.write_dir(dir.path()).unwrap();

        let read = Sources::from_dir(dir.path(), &mut SilentUi::new()).unwrap();
        assert_eq!(read.present(), vec!["regions", "hyperlanes"]);
        assert_eq!(read.text("regions"), "Core|core");
        assert!(!read.contains("systems"));
    }

    #[test]
    fn test_open_rejects_plain_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        assert!(Sources::open(&path, &mut SilentUi::new()).is_err());
    }
}
