use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

use super::Sources;
use crate::schema::ALL_SOURCES;
use crate::ui::Ui;

/// Read source files out of a zip archive. Entries are matched by file name,
/// so files may sit in any directory inside the archive.
pub fn read_archive(zip_path: &Path, ui: &mut impl Ui) -> Result<Sources> {
    let file = File::open(zip_path).context("Failed to open zip file")?;
    let reader = BufReader::new(file);
    let mut archive = ZipArchive::new(reader).context("Failed to read zip archive")?;

    let mut sources = Sources::new();
    let total_files = archive.len();

    for i in 0..total_files {
        let mut entry = archive
            .by_index(i)
            .context("Failed to read file from archive")?;

        if entry.is_dir() {
            continue;
        }

        // Get the file name, stripping any directory prefix
        let name = entry.name().to_string();
        let file_name = Path::new(&name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&name)
            .to_string();

        let Some(schema) = ALL_SOURCES.iter().copied().find(|s| s.source_file == file_name) else {
            continue;
        };

        let mut text = String::new();
        entry
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to extract: {}", name))?;

        ui.set_progress(i as u64 + 1, total_files as u64, schema.name);
        sources.insert(schema, text);
    }

    for schema in ALL_SOURCES {
        if !sources.contains(schema.name) {
            ui.log(format!("{}: skipped (not in archive)", schema.name));
        }
    }

    ui.clear_progress();
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SilentUi;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    #[test]
    fn test_reads_nested_entries_by_file_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("galaxy.zip");

        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        writer
            .start_file("data/regions.csv", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"Core|core").unwrap();
        writer
            .start_file("README.md", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"not a source").unwrap();
        writer.finish().unwrap();

        let sources = read_archive(&path, &mut SilentUi::new()).unwrap();
        assert_eq!(sources.present(), vec!["regions"]);
        assert_eq!(sources.text("regions"), "Core|core");
    }
}
