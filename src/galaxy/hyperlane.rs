//! Hyperlane linker: route resolution and symmetric adjacency.

use tracing::warn;

use super::registry::KeyIndex;
use crate::model::{Hyperlane, HyperlaneId, System, SystemId};

/// Resolve a route's identifiers in order, stopping at the first one that
/// does not name a system. Returns the resolved prefix and the first
/// unresolved non-empty identifier, if any.
pub fn resolve_route<'a>(
    systems: &KeyIndex<SystemId>,
    links: &[&'a str],
) -> (Vec<SystemId>, Option<&'a str>) {
    let mut route = Vec::with_capacity(links.len());
    for link in links {
        match systems.get(link) {
            Some(id) => route.push(id),
            None => {
                let missing = Some(*link).filter(|l| !l.trim().is_empty());
                return (route, missing);
            }
        }
    }
    (route, None)
}

/// Link every edge of a hyperlane's route in both directions
pub fn link_route(systems: &mut [System], id: HyperlaneId, lane: &Hyperlane) {
    for (a, b) in lane.edges() {
        link(systems, a, b, id);
    }
}

fn link(systems: &mut [System], a: SystemId, b: SystemId, lane: HyperlaneId) {
    if a == b {
        return;
    }

    let (Some(_), Some(_)) = (systems.get(a.index()), systems.get(b.index())) else {
        warn!(%a, %b, "hyperlane endpoint out of range");
        return;
    };

    systems[a.index()].hyperlanes.insert(b, lane);
    systems[b.index()].hyperlanes.insert(a, lane);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galaxy::factory;
    use crate::parser::parse_records;
    use crate::schema::SYSTEMS;

    fn systems(count: usize) -> (Vec<System>, KeyIndex<SystemId>) {
        let text: Vec<String> = (0..count).map(|i| format!("S{i}|s{i}")).collect();
        let text = text.join("\n");
        let rows = parse_records(&text, &SYSTEMS);

        let mut index = KeyIndex::new();
        let mut list = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            index.insert(row.wiki_link(), SystemId::from_index(i));
            list.push(factory::system(row, None, None));
        }
        (list, index)
    }

    fn lane(looped: bool, route: &[u32]) -> Hyperlane {
        Hyperlane {
            name: "Spine".into(),
            wiki_link: "spine".into(),
            comments: String::new(),
            looped,
            priority: None,
            systems: route.iter().copied().map(SystemId).collect(),
        }
    }

    #[test]
    fn test_route_truncates_at_first_unknown() {
        let (_, index) = systems(3);
        let (route, missing) = resolve_route(&index, &["s0", "s1", "nowhere", "s2"]);

        assert_eq!(route, vec![SystemId(0), SystemId(1)]);
        assert_eq!(missing, Some("nowhere"));
    }

    #[test]
    fn test_trailing_blank_is_not_reported() {
        let (_, index) = systems(2);
        let (route, missing) = resolve_route(&index, &["s0", "s1", ""]);

        assert_eq!(route.len(), 2);
        assert_eq!(missing, None);
    }

    #[test]
    fn test_links_are_symmetric() {
        let (mut list, _) = systems(3);
        let id = HyperlaneId(7);
        link_route(&mut list, id, &lane(false, &[0, 1, 2]));

        assert_eq!(list[0].hyperlanes.get(&SystemId(1)), Some(&id));
        assert_eq!(list[1].hyperlanes.get(&SystemId(0)), Some(&id));
        assert_eq!(list[1].hyperlanes.get(&SystemId(2)), Some(&id));
        assert_eq!(list[2].hyperlanes.get(&SystemId(1)), Some(&id));
        assert!(!list[0].hyperlanes.contains_key(&SystemId(2)));
    }

    #[test]
    fn test_loop_closes_first_and_last() {
        let (mut list, _) = systems(3);
        let id = HyperlaneId(0);
        link_route(&mut list, id, &lane(true, &[0, 1, 2]));

        assert_eq!(list[0].hyperlanes.get(&SystemId(2)), Some(&id));
        assert_eq!(list[2].hyperlanes.get(&SystemId(0)), Some(&id));
    }

    #[test]
    fn test_two_system_loop_is_idempotent() {
        let (mut list, _) = systems(2);
        let id = HyperlaneId(0);
        link_route(&mut list, id, &lane(true, &[0, 1]));

        assert_eq!(list[0].hyperlanes.len(), 1);
        assert_eq!(list[1].hyperlanes.len(), 1);
    }

    #[test]
    fn test_no_self_links() {
        let (mut list, _) = systems(1);
        link_route(&mut list, HyperlaneId(0), &lane(true, &[0, 0]));
        assert!(list[0].hyperlanes.is_empty());
    }
}
