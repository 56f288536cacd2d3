use crate::schema::{DependencyResolver, SourceSchema};
use anyhow::{anyhow, bail, Result};
use tracing::info;

/// Resolves which sources to load based on include/exclude filters
pub fn resolve_sources(
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
) -> Result<Vec<&'static SourceSchema>> {
    let resolver = DependencyResolver::new();

    let sources = match (include, exclude) {
        (Some(_), Some(_)) => {
            bail!("Cannot use both --include and --exclude at the same time");
        }
        (Some(include_list), None) => {
            let refs: Vec<&str> = include_list.iter().map(|s| s.as_str()).collect();
            info!(requested = ?refs, "Resolving dependencies");
            resolver.resolve_includes(&refs).map_err(|e| anyhow!(e))?
        }
        (None, Some(exclude_list)) => {
            let refs: Vec<&str> = exclude_list.iter().map(|s| s.as_str()).collect();
            info!(excluded = ?refs, "Excluding sources");
            resolver.resolve_excludes(&refs).map_err(|e| anyhow!(e))?
        }
        (None, None) => resolver.all_sources_ordered().map_err(|e| anyhow!(e))?,
    };

    info!(
        sources = ?sources.iter().map(|s| s.name).collect::<Vec<_>>(),
        "Load plan"
    );
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_and_exclude_conflict() {
        let result = resolve_sources(Some(vec!["stars".into()]), Some(vec!["moons".into()]));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_filter_loads_everything() {
        let sources = resolve_sources(None, None).unwrap();
        assert_eq!(sources.len(), 9);
        assert_eq!(sources[0].name, "regions");
        assert_eq!(sources[8].name, "hyperlanes");
    }

    #[test]
    fn test_include_hyperlanes_pulls_territory() {
        let sources = resolve_sources(Some(vec!["hyperlanes".into()]), None).unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["regions", "sectors", "systems", "hyperlanes"]);
    }
}
