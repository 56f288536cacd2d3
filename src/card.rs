//! Plain-text views of systems and hyperlanes for the command line.

use crate::galaxy::Galaxy;
use crate::model::{wiki_url, Entity, Hyperlane, Orbiter, System};

fn label<E: Entity + ?Sized>(entity: &E, wiki_base: Option<&str>) -> String {
    match wiki_base {
        Some(base) => format!("{} <{}>", entity.name(), wiki_url(base, entity)),
        None => format!("{} ({})", entity.name(), entity.wiki_link()),
    }
}

fn orbit_line(galaxy: &Galaxy, orbiter: Orbiter, indent: usize, wiki_base: Option<&str>) -> String {
    let body = galaxy.orbiter(orbiter);
    let slot = match body.orbit().value() {
        Some(orbit) => format!("{}:", orbit),
        None => "•".to_string(),
    };
    format!("{:indent$}{} {}", "", slot, label(body, wiki_base), indent = indent)
}

/// Describe a system the way a map popup would
pub fn system_card(galaxy: &Galaxy, system: &System, wiki_base: Option<&str>) -> Vec<String> {
    let mut lines = vec![
        label(system, wiki_base),
        system.coords.to_string(),
        format!("Grid: {}", system.grid),
    ];

    lines.push(match galaxy.sector_of(system) {
        Some(sector) => format!("Sector: {}", label(sector, wiki_base)),
        None => "Sector: none".to_string(),
    });
    lines.push(match galaxy.region_of(system) {
        Some(region) => format!("Region: {}", label(region, wiki_base)),
        None => "Region: none".to_string(),
    });

    if !system.stars.is_empty() {
        lines.push("Stars:".to_string());
        for star in &system.stars {
            lines.push(format!("  {}", label(&galaxy[*star], wiki_base)));
        }
    }

    if !system.orbits.is_empty() {
        lines.push("Orbits:".to_string());
        for orbiter in &system.orbits {
            lines.push(orbit_line(galaxy, *orbiter, 2, wiki_base));
            if let Orbiter::Planet(planet) = orbiter {
                for inner in &galaxy[*planet].orbits {
                    lines.push(orbit_line(galaxy, *inner, 4, wiki_base));
                }
            }
        }
    }

    if !system.hyperlanes.is_empty() {
        lines.push("Hyperlanes:".to_string());
        for (neighbor, lane) in galaxy.neighbors(system) {
            lines.push(format!("  {} via {}", label(neighbor, wiki_base), lane.name));
        }
    }

    lines
}

/// Describe a hyperlane's route, member by member
pub fn route_card(galaxy: &Galaxy, hyperlane: &Hyperlane) -> Vec<String> {
    let kind = if hyperlane.looped { "loop" } else { "route" };
    let mut lines = vec![format!("{} ({}, {})", hyperlane.name, hyperlane.wiki_link, kind)];

    for id in &hyperlane.systems {
        let system = &galaxy[*id];
        lines.push(format!("  {} {}", system.name, system.coords));
    }

    lines.push(format!(
        "Plottable points: {} of {}",
        galaxy.route_points(hyperlane).len(),
        hyperlane.systems.len()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Sources;

    fn galaxy() -> Galaxy {
        let mut sources = Sources::new();
        sources.set("regions", "Core|core");
        sources.set("systems", "Sol|sol||10|20|K-7||core|\nVega|vega||||||core|");
        sources.set("stars", "Sun|sun|sol|G2V|");
        sources.set("planets", "Earth|earth||sol|3\nRogue|rogue||sol|");
        sources.set("moons", "Luna|luna||earth|sol|1");
        sources.set("hyperlanes", "Spine,spine,1,,,sol,vega");
        Galaxy::from_sources(&sources)
    }

    #[test]
    fn test_system_card() {
        let galaxy = galaxy();
        let sol = galaxy.system("sol").unwrap();
        let lines = system_card(&galaxy, sol, None);

        assert_eq!(
            lines,
            vec![
                "Sol (sol)",
                "[ 10 , 20 ]",
                "Grid: K-7",
                "Sector: none",
                "Region: Core (core)",
                "Stars:",
                "  Sun (sun)",
                "Orbits:",
                "  3: Earth (earth)",
                "    1: Luna (luna)",
                "  • Rogue (rogue)",
                "Hyperlanes:",
                "  Vega (vega) via Spine",
            ]
        );
    }

    #[test]
    fn test_system_card_with_wiki_links() {
        let galaxy = galaxy();
        let sol = galaxy.system("sol").unwrap();
        let lines = system_card(&galaxy, sol, Some("http://wiki.example/wiki/"));

        assert_eq!(lines[0], "Sol <http://wiki.example/wiki/sol>");
    }

    #[test]
    fn test_route_card_counts_plottable_points() {
        let galaxy = galaxy();
        let spine = galaxy.hyperlane("spine").unwrap();
        let lines = route_card(&galaxy, spine);

        assert_eq!(lines[0], "Spine (spine, loop)");
        assert_eq!(lines[2], "  Vega [ unknown ]");
        assert_eq!(lines.last().unwrap(), "Plottable points: 1 of 2");
    }
}
