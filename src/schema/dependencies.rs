use super::sources::{get_source, source_names, ALL_SOURCES};
use super::types::SourceSchema;
use std::collections::{HashMap, HashSet, VecDeque};

/// Resolves source dependencies for load ordering and filtering
pub struct DependencyResolver {
    /// Map of source name -> sources it depends on
    deps: HashMap<&'static str, HashSet<&'static str>>,
    /// Map of source name -> sources that depend on it
    reverse_deps: HashMap<&'static str, HashSet<&'static str>>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        let mut deps: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();
        let mut reverse_deps: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();

        for source in ALL_SOURCES {
            let source_deps = source.dependencies();
            deps.insert(source.name, source_deps.clone());

            for dep in source_deps {
                reverse_deps.entry(dep).or_default().insert(source.name);
            }
        }

        Self { deps, reverse_deps }
    }

    /// Given a set of requested sources, resolve all required parents.
    /// Returns sources in load order (parents before children)
    pub fn resolve_includes(
        &self,
        requested: &[&str],
    ) -> Result<Vec<&'static SourceSchema>, String> {
        let mut included: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = requested.iter().copied().collect();

        while let Some(name) = queue.pop_front() {
            if included.contains(name) {
                continue;
            }

            if get_source(name).is_none() {
                return Err(unknown_source(name));
            }

            included.insert(name);

            if let Some(source_deps) = self.deps.get(name) {
                for dep in source_deps {
                    if !included.contains(dep) {
                        queue.push_back(*dep);
                    }
                }
            }
        }

        self.topological_sort(&included)
    }

    /// Given a set of sources to exclude, return remaining sources in order.
    /// Anything that depends on an excluded source is excluded too.
    pub fn resolve_excludes(
        &self,
        excluded: &[&str],
    ) -> Result<Vec<&'static SourceSchema>, String> {
        for name in excluded {
            if get_source(name).is_none() {
                return Err(unknown_source(name));
            }
        }

        let mut dropped: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = excluded.iter().copied().collect();

        while let Some(name) = queue.pop_front() {
            if !dropped.insert(name) {
                continue;
            }
            if let Some(children) = self.reverse_deps.get(name) {
                queue.extend(children.iter().copied());
            }
        }

        let included: HashSet<&str> = ALL_SOURCES
            .iter()
            .map(|s| s.name)
            .filter(|name| !dropped.contains(*name))
            .collect();

        self.topological_sort(&included)
    }

    /// Return all sources in load order
    pub fn all_sources_ordered(&self) -> Result<Vec<&'static SourceSchema>, String> {
        let all: HashSet<&str> = ALL_SOURCES.iter().map(|s| s.name).collect();
        self.topological_sort(&all)
    }

    /// Topological sort of sources by dependencies.
    /// Independent sources keep their registry order.
    fn topological_sort(
        &self,
        included: &HashSet<&str>,
    ) -> Result<Vec<&'static SourceSchema>, String> {
        let mut result = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut temp_visited: HashSet<&str> = HashSet::new();

        for source in ALL_SOURCES {
            if included.contains(source.name) && !visited.contains(source.name) {
                self.visit(
                    source.name,
                    included,
                    &mut visited,
                    &mut temp_visited,
                    &mut result,
                )?;
            }
        }

        Ok(result)
    }

    fn visit<'a>(
        &self,
        name: &'a str,
        included: &HashSet<&'a str>,
        visited: &mut HashSet<&'a str>,
        temp_visited: &mut HashSet<&'a str>,
        result: &mut Vec<&'static SourceSchema>,
    ) -> Result<(), String> {
        if temp_visited.contains(name) {
            return Err(format!("Circular dependency detected at: {}", name));
        }
        if visited.contains(name) {
            return Ok(());
        }

        temp_visited.insert(name);

        if let Some(deps) = self.deps.get(name) {
            // Registry order keeps the walk deterministic
            for parent in ALL_SOURCES.iter().map(|s| s.name) {
                if deps.contains(parent) && parent != name && included.contains(parent) {
                    self.visit(parent, included, visited, temp_visited, result)?;
                }
            }
        }

        temp_visited.remove(name);
        visited.insert(name);

        if let Some(source) = get_source(name) {
            result.push(source);
        }

        Ok(())
    }
}

fn unknown_source(name: &str) -> String {
    format!(
        "Unknown source: {} (expected one of: {})",
        name,
        source_names().join(", ")
    )
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sources: &[&SourceSchema]) -> Vec<&'static str> {
        sources.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_full_order_is_fixed_load_order() {
        let resolver = DependencyResolver::new();
        let order = resolver.all_sources_ordered().unwrap();

        assert_eq!(
            names(&order),
            vec![
                "regions",
                "sectors",
                "systems",
                "stars",
                "planets",
                "moons",
                "asteroids",
                "space_stations",
                "hyperlanes",
            ]
        );
    }

    #[test]
    fn test_resolve_moons_includes_parents() {
        let resolver = DependencyResolver::new();
        let sources = resolver.resolve_includes(&["moons"]).unwrap();
        let names = names(&sources);

        assert_eq!(
            names,
            vec!["regions", "sectors", "systems", "planets", "moons"]
        );
    }

    #[test]
    fn test_exclude_cascades_to_children() {
        let resolver = DependencyResolver::new();
        let sources = resolver.resolve_excludes(&["planets"]).unwrap();
        let names = names(&sources);

        assert!(!names.contains(&"planets"));
        assert!(!names.contains(&"moons"));
        assert!(!names.contains(&"asteroids"));
        assert!(!names.contains(&"space_stations"));
        assert!(names.contains(&"stars"));
        assert!(names.contains(&"hyperlanes"));
    }

    #[test]
    fn test_exclude_leaf_keeps_everything_else() {
        let resolver = DependencyResolver::new();
        let sources = resolver.resolve_excludes(&["hyperlanes"]).unwrap();
        assert_eq!(sources.len(), ALL_SOURCES.len() - 1);
    }

    #[test]
    fn test_unknown_source_error() {
        let resolver = DependencyResolver::new();
        assert!(resolver.resolve_includes(&["nebulae"]).is_err());
        assert!(resolver.resolve_excludes(&["nebulae"]).is_err());
    }
}
