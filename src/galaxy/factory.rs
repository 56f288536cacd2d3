//! Entity factories: build one entity from one row plus already-resolved
//! parents. Nothing here touches the galaxy; wiring happens at registration.

use std::collections::BTreeMap;

use crate::model::{
    Asteroid, BodyInfo, Coords, Hyperlane, Moon, OrbitIndex, Planet, PlanetId, Region, RegionId,
    Sector, SectorId, SpaceStation, Star, System, SystemId,
};
use crate::parser::Record;

pub fn region(row: &Record) -> Region {
    Region::new(row.text("name"), row.wiki_link(), "")
}

pub fn sector(row: &Record, region: Option<RegionId>) -> Sector {
    Sector {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: String::new(),
        region,
        systems: Vec::new(),
    }
}

pub fn system(row: &Record, sector: Option<SectorId>, region: Option<RegionId>) -> System {
    System {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: row.text("comments").to_string(),
        coords: Coords::new(row.number("x"), row.number("y")),
        grid: row.text("grid").to_string(),
        sector,
        region,
        priority: row.number("priority"),
        stars: Vec::new(),
        orbits: Vec::new(),
        hyperlanes: BTreeMap::new(),
    }
}

pub fn star(row: &Record, system: Option<SystemId>) -> Star {
    Star {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: String::new(),
        system,
        classification: row.text("classification").to_string(),
        diameter: row.number("diameter"),
    }
}

fn body_info(row: &Record) -> BodyInfo {
    BodyInfo {
        day_length: row.number("day"),
        year_length: row.number("year"),
        diameter: row.number("diameter"),
        atmosphere: row.text("atmosphere").to_string(),
        climate: row.text("climate").to_string(),
        gravity: row.text("gravity").to_string(),
        terrain: row.text("terrain").to_string(),
    }
}

pub fn planet(row: &Record, system: Option<SystemId>) -> Planet {
    Planet {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: row.text("comments").to_string(),
        system,
        orbit: OrbitIndex::new(row.number("orbit")),
        classification: row.text("classification").to_string(),
        info: body_info(row),
        orbits: Vec::new(),
    }
}

pub fn moon(row: &Record, planet: Option<PlanetId>, system: Option<SystemId>) -> Moon {
    Moon {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: row.text("comments").to_string(),
        planet,
        system,
        orbit: OrbitIndex::new(row.number("orbit")),
        info: body_info(row),
    }
}

pub fn asteroid(row: &Record, body: Option<PlanetId>, system: Option<SystemId>) -> Asteroid {
    Asteroid {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: row.text("comments").to_string(),
        body,
        system,
        orbit: OrbitIndex::new(row.number("orbit")),
    }
}

pub fn space_station(row: &Record, body: Option<PlanetId>, system: Option<SystemId>) -> SpaceStation {
    SpaceStation {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: row.text("comments").to_string(),
        body,
        system,
        orbit: OrbitIndex::known(SpaceStation::ORBIT),
    }
}

pub fn hyperlane(row: &Record, systems: Vec<SystemId>) -> Hyperlane {
    Hyperlane {
        name: row.text("name").to_string(),
        wiki_link: row.wiki_link().to_string(),
        comments: String::new(),
        looped: row.flag("loop"),
        priority: row.number("priority"),
        systems,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_records;
    use crate::schema::{HYPERLANES, PLANETS, SPACE_STATIONS, SYSTEMS};

    #[test]
    fn test_system_with_bad_coordinates() {
        let rows = parse_records("Sol|sol|home|abc|12|K-7|||3", &SYSTEMS);
        let system = system(&rows[0], None, Some(RegionId(0)));

        assert_eq!(system.coords, Coords::new(None, Some(12.0)));
        assert!(!system.coords.is_known());
        assert_eq!(system.grid, "K-7");
        assert_eq!(system.comments, "home");
        assert_eq!(system.priority, Some(3.0));
        assert_eq!(system.region, Some(RegionId(0)));
    }

    #[test]
    fn test_planet_with_empty_orbit() {
        let rows = parse_records("Terra|terra||sol||24|365|Terrestrial|12742|Breathable|Temperate|1 G|Oceans", &PLANETS);
        let planet = planet(&rows[0], Some(SystemId(0)));

        assert!(!planet.orbit.is_known());
        assert_eq!(planet.info.day_length, Some(24.0));
        assert_eq!(planet.info.diameter, Some(12742.0));
        assert_eq!(planet.classification, "Terrestrial");
        assert_eq!(planet.info.terrain, "Oceans");
    }

    #[test]
    fn test_station_orbit_is_fixed() {
        let rows = parse_records("Hub|hub||terra|sol", &SPACE_STATIONS);
        let station = space_station(&rows[0], Some(PlanetId(0)), Some(SystemId(0)));

        assert_eq!(station.orbit, OrbitIndex::known(0.0));
        assert_eq!(station.body, Some(PlanetId(0)));
    }

    #[test]
    fn test_hyperlane_loop_flag() {
        let rows = parse_records("Spine,spine,0,5,,a,b\nRing,ring,1,,,a,b", &HYPERLANES);

        let open = hyperlane(&rows[0], Vec::new());
        assert!(!open.looped);
        assert_eq!(open.priority, Some(5.0));

        let ring = hyperlane(&rows[1], Vec::new());
        assert!(ring.looped);
        assert_eq!(ring.priority, None);
    }
}
