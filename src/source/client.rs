use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

use super::Sources;
use crate::schema::{SourceSchema, ALL_SOURCES};
use crate::ui::{Phase, Ui};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent("skyriver")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch one source file relative to a base URL
    pub fn fetch(&self, base_url: &str, schema: &SourceSchema) -> Result<String> {
        let url = source_url(base_url, schema);
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?
            .error_for_status()
            .with_context(|| format!("Bad response for {}", url))?;

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }

    /// Fetch all sources at once; any failure fails the whole fetch
    pub fn fetch_all(&self, base_url: &str, ui: &mut impl Ui) -> Result<Sources> {
        ui.set_phase(Phase::Fetching);
        ui.log(format!("Fetching from {}", base_url));

        let results: Vec<(&'static SourceSchema, Result<String>)> = thread::scope(|scope| {
            let handles: Vec<_> = ALL_SOURCES
                .iter()
                .copied()
                .map(|schema| (schema, scope.spawn(move || self.fetch(base_url, schema))))
                .collect();

            handles
                .into_iter()
                .map(|(schema, handle)| {
                    let result = handle
                        .join()
                        .unwrap_or_else(|_| Err(anyhow!("Fetch of {} panicked", schema.name)));
                    (schema, result)
                })
                .collect()
        });

        let mut sources = Sources::new();
        let total = results.len() as u64;
        for (done, (schema, result)) in results.into_iter().enumerate() {
            let text = result?;
            ui.set_progress(done as u64 + 1, total, format_size(schema.name, text.len()));
            sources.insert(schema, text);
        }

        ui.log("Fetch complete");
        ui.clear_progress();
        Ok(sources)
    }
}

fn source_url(base_url: &str, schema: &SourceSchema) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), schema.source_file)
}

/// Label a source with a human-readable size
fn format_size(name: &str, bytes: usize) -> String {
    let size = if bytes >= 1_000_000 {
        format!("{:.1} MB", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1} KB", bytes as f64 / 1_000.0)
    } else {
        format!("{} B", bytes)
    };
    format!("{} ({})", name, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{HYPERLANES, REGIONS};

    #[test]
    fn test_source_url() {
        assert_eq!(source_url("http://example.com/data/", &REGIONS), "http://example.com/data/regions.csv");
        assert_eq!(source_url("http://example.com/data", &HYPERLANES), "http://example.com/data/hyperlanes.csv");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size("regions", 500), "regions (500 B)");
        assert_eq!(format_size("systems", 1500), "systems (1.5 KB)");
        assert_eq!(format_size("planets", 2_500_000), "planets (2.5 MB)");
    }
}
