//! Source definitions for the nine Sky River record files

use super::types::*;

// =============================================================================
// Territory
// =============================================================================

pub static REGIONS: SourceSchema = SourceSchema {
    name: "regions",
    kind: SourceKind::Region,
    source_file: "regions.csv",
    delimiter: '|',
    columns: &[Column::text("name"), Column::key("wiki_link")],
    foreign_keys: &[],
    trailing_links: None,
};

pub static SECTORS: SourceSchema = SourceSchema {
    name: "sectors",
    kind: SourceKind::Sector,
    source_file: "sectors.csv",
    delimiter: '|',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::link("region"),
    ],
    foreign_keys: &[ForeignKey::new("region", "regions")],
    trailing_links: None,
};

pub static SYSTEMS: SourceSchema = SourceSchema {
    name: "systems",
    kind: SourceKind::System,
    source_file: "systems.csv",
    delimiter: '|',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::text("comments"),
        Column::number("x"),
        Column::number("y"),
        Column::text("grid"),
        Column::link("sector"),
        Column::link("region"),
        Column::number("priority"),
    ],
    foreign_keys: &[
        ForeignKey::new("sector", "sectors"),
        ForeignKey::new("region", "regions"),
    ],
    trailing_links: None,
};

// =============================================================================
// System contents
// =============================================================================

pub static STARS: SourceSchema = SourceSchema {
    name: "stars",
    kind: SourceKind::Star,
    source_file: "stars.csv",
    delimiter: '|',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::link("system"),
        Column::text("classification"),
        Column::number("diameter"),
    ],
    foreign_keys: &[ForeignKey::new("system", "systems")],
    trailing_links: None,
};

pub static PLANETS: SourceSchema = SourceSchema {
    name: "planets",
    kind: SourceKind::Planet,
    source_file: "planets.csv",
    delimiter: '|',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::text("comments"),
        Column::link("system"),
        Column::number("orbit"),
        Column::number("day"),
        Column::number("year"),
        Column::text("classification"),
        Column::number("diameter"),
        Column::text("atmosphere"),
        Column::text("climate"),
        Column::text("gravity"),
        Column::text("terrain"),
    ],
    foreign_keys: &[ForeignKey::new("system", "systems")],
    trailing_links: None,
};

pub static MOONS: SourceSchema = SourceSchema {
    name: "moons",
    kind: SourceKind::Moon,
    source_file: "moons.csv",
    delimiter: '|',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::text("comments"),
        Column::link("planet"),
        Column::link("system"),
        Column::number("orbit"),
        Column::number("day"),
        Column::number("year"),
        Column::number("diameter"),
        Column::text("atmosphere"),
        Column::text("climate"),
        Column::text("gravity"),
        Column::text("terrain"),
    ],
    foreign_keys: &[
        ForeignKey::new("planet", "planets"),
        ForeignKey::new("system", "systems"),
    ],
    trailing_links: None,
};

pub static ASTEROIDS: SourceSchema = SourceSchema {
    name: "asteroids",
    kind: SourceKind::Asteroid,
    source_file: "asteroids.csv",
    delimiter: '|',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::text("comments"),
        Column::link("body"),
        Column::link("system"),
        Column::number("orbit"),
    ],
    foreign_keys: &[
        ForeignKey::new("body", "planets"),
        ForeignKey::new("system", "systems"),
    ],
    trailing_links: None,
};

pub static SPACE_STATIONS: SourceSchema = SourceSchema {
    name: "space_stations",
    kind: SourceKind::SpaceStation,
    source_file: "spacestations.csv",
    delimiter: '|',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::text("comments"),
        Column::link("body"),
        Column::link("system"),
    ],
    foreign_keys: &[
        ForeignKey::new("body", "planets"),
        ForeignKey::new("system", "systems"),
    ],
    trailing_links: None,
};

// =============================================================================
// Routes
// =============================================================================

pub static HYPERLANES: SourceSchema = SourceSchema {
    name: "hyperlanes",
    kind: SourceKind::Hyperlane,
    source_file: "hyperlanes.csv",
    delimiter: ',',
    columns: &[
        Column::text("name"),
        Column::key("wiki_link"),
        Column::flag("loop"),
        Column::number("priority"),
        Column::unused("reserved"),
    ],
    foreign_keys: &[],
    trailing_links: Some("systems"),
};

// =============================================================================
// Source Registry
// =============================================================================

/// All sources in load order
pub static ALL_SOURCES: &[&SourceSchema] = &[
    &REGIONS,
    &SECTORS,
    &SYSTEMS,
    &STARS,
    &PLANETS,
    &MOONS,
    &ASTEROIDS,
    &SPACE_STATIONS,
    &HYPERLANES,
];

/// Get source schema by name
pub fn get_source(name: &str) -> Option<&'static SourceSchema> {
    ALL_SOURCES.iter().find(|s| s.name == name).copied()
}

/// Get all source names
pub fn source_names() -> Vec<&'static str> {
    ALL_SOURCES.iter().map(|s| s.name).collect()
}
