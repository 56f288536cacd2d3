//! The galaxy graph: per-kind entity arenas, identifier indexes, and the
//! read interface map and report consumers use.
//!
//! A galaxy is built once by [`GalaxyBuilder`] and only read afterwards.

pub mod builder;
pub mod factory;
pub mod hyperlane;
pub mod orbits;
pub mod registry;

use serde::Serialize;

use crate::model::*;
use crate::source::Sources;
use crate::ui::SilentUi;

pub use builder::{build_galaxy, GalaxyBuilder, LoadReport, SourceTally};
pub use registry::{KeyIndex, Registry};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Galaxy {
    pub(crate) regions: Vec<Region>,
    pub(crate) sectors: Vec<Sector>,
    pub(crate) systems: Vec<System>,
    pub(crate) stars: Vec<Star>,
    pub(crate) planets: Vec<Planet>,
    pub(crate) moons: Vec<Moon>,
    pub(crate) asteroids: Vec<Asteroid>,
    pub(crate) space_stations: Vec<SpaceStation>,
    pub(crate) hyperlanes: Vec<Hyperlane>,
    #[serde(skip)]
    pub(crate) index: Registry,
}

impl Galaxy {
    /// Build from every source, without progress reporting
    pub fn from_sources(sources: &Sources) -> Self {
        GalaxyBuilder::new(&mut SilentUi::new()).build_all(sources).0
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn space_stations(&self) -> &[SpaceStation] {
        &self.space_stations
    }

    pub fn hyperlanes(&self) -> &[Hyperlane] {
        &self.hyperlanes
    }

    // ========================================================================
    // Lookup by identifier
    // ========================================================================

    pub fn region_id(&self, wiki_link: &str) -> Option<RegionId> {
        self.index.regions.get(wiki_link)
    }

    pub fn sector_id(&self, wiki_link: &str) -> Option<SectorId> {
        self.index.sectors.get(wiki_link)
    }

    pub fn system_id(&self, wiki_link: &str) -> Option<SystemId> {
        self.index.systems.get(wiki_link)
    }

    pub fn planet_id(&self, wiki_link: &str) -> Option<PlanetId> {
        self.index.planets.get(wiki_link)
    }

    pub fn hyperlane_id(&self, wiki_link: &str) -> Option<HyperlaneId> {
        self.index.hyperlanes.get(wiki_link)
    }

    pub fn region(&self, wiki_link: &str) -> Option<&Region> {
        self.region_id(wiki_link).map(|id| &self[id])
    }

    pub fn sector(&self, wiki_link: &str) -> Option<&Sector> {
        self.sector_id(wiki_link).map(|id| &self[id])
    }

    pub fn system(&self, wiki_link: &str) -> Option<&System> {
        self.system_id(wiki_link).map(|id| &self[id])
    }

    pub fn planet(&self, wiki_link: &str) -> Option<&Planet> {
        self.planet_id(wiki_link).map(|id| &self[id])
    }

    pub fn hyperlane(&self, wiki_link: &str) -> Option<&Hyperlane> {
        self.hyperlane_id(wiki_link).map(|id| &self[id])
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// The entity behind an orbit-list entry
    pub fn orbiter(&self, orbiter: Orbiter) -> &dyn Orbiting {
        match orbiter {
            Orbiter::Planet(id) => &self[id],
            Orbiter::Moon(id) => &self[id],
            Orbiter::Asteroid(id) => &self[id],
            Orbiter::Station(id) => &self[id],
        }
    }

    pub fn orbit_of(&self, orbiter: Orbiter) -> OrbitIndex {
        self.orbiter(orbiter).orbit()
    }

    /// Systems that can be placed on a map
    pub fn plottable_systems(&self) -> impl Iterator<Item = &System> + '_ {
        self.systems.iter().filter(|s| s.coords.is_known())
    }

    /// Map points along a hyperlane, skipping members without coordinates
    pub fn route_points(&self, hyperlane: &Hyperlane) -> Vec<(f64, f64)> {
        hyperlane
            .systems
            .iter()
            .filter_map(|id| self[*id].coords.point())
            .collect()
    }

    /// Adjacent systems and the hyperlane reaching each
    pub fn neighbors<'a>(
        &'a self,
        system: &'a System,
    ) -> impl Iterator<Item = (&'a System, &'a Hyperlane)> + 'a {
        system
            .hyperlanes
            .iter()
            .map(move |(neighbor, lane)| (&self[*neighbor], &self[*lane]))
    }

    /// The region a system belongs to, through its sector if it has one
    pub fn region_of(&self, system: &System) -> Option<&Region> {
        system.region.map(|id| &self[id])
    }

    pub fn sector_of(&self, system: &System) -> Option<&Sector> {
        system.sector.map(|id| &self[id])
    }

    pub fn summary(&self) -> GalaxySummary {
        GalaxySummary {
            regions: self.regions.len(),
            sectors: self.sectors.len(),
            systems: self.systems.len(),
            plottable_systems: self.plottable_systems().count(),
            stars: self.stars.len(),
            planets: self.planets.len(),
            moons: self.moons.len(),
            asteroids: self.asteroids.len(),
            space_stations: self.space_stations.len(),
            hyperlanes: self.hyperlanes.len(),
            looped_hyperlanes: self.hyperlanes.iter().filter(|h| h.looped).count(),
        }
    }
}

/// Entity counts for a loaded galaxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalaxySummary {
    pub regions: usize,
    pub sectors: usize,
    pub systems: usize,
    pub plottable_systems: usize,
    pub stars: usize,
    pub planets: usize,
    pub moons: usize,
    pub asteroids: usize,
    pub space_stations: usize,
    pub hyperlanes: usize,
    pub looped_hyperlanes: usize,
}

macro_rules! arena_index {
    ($($id:ty => $ty:ty, $field:ident;)+) => {
        $(
            impl std::ops::Index<$id> for Galaxy {
                type Output = $ty;

                fn index(&self, id: $id) -> &$ty {
                    &self.$field[id.index()]
                }
            }
        )+
    };
}

arena_index! {
    RegionId => Region, regions;
    SectorId => Sector, sectors;
    SystemId => System, systems;
    StarId => Star, stars;
    PlanetId => Planet, planets;
    MoonId => Moon, moons;
    AsteroidId => Asteroid, asteroids;
    StationId => SpaceStation, space_stations;
    HyperlaneId => Hyperlane, hyperlanes;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn galaxy() -> Galaxy {
        let mut sources = Sources::new();
        sources.set("regions", "Core|core\nRim|rim");
        sources.set("sectors", "Alpha|alpha|core");
        sources.set(
            "systems",
            "Sol|sol||10|20||alpha||\nVega|vega||x|5|||rim|\nRigel|rigel||-3|4|||rim|",
        );
        sources.set("hyperlanes", "Spine,spine,0,1,,sol,vega,rigel");
        Galaxy::from_sources(&sources)
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let galaxy = galaxy();
        assert!(galaxy.region("nowhere").is_none());
        assert!(galaxy.sector("nowhere").is_none());
        assert!(galaxy.system("nowhere").is_none());
        assert!(galaxy.planet("nowhere").is_none());
        assert!(galaxy.hyperlane("nowhere").is_none());
    }

    #[test]
    fn test_plottable_systems_skip_unknown_coords() {
        let galaxy = galaxy();
        let names: Vec<&str> = galaxy.plottable_systems().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Sol", "Rigel"]);
    }

    #[test]
    fn test_route_points_skip_unknown_coords() {
        let galaxy = galaxy();
        let spine = galaxy.hyperlane("spine").unwrap();

        assert_eq!(spine.systems.len(), 3);
        assert_eq!(galaxy.route_points(spine), vec![(10.0, 20.0), (-3.0, 4.0)]);
    }

    #[test]
    fn test_neighbors() {
        let galaxy = galaxy();
        let vega = galaxy.system("vega").unwrap();
        let neighbors: Vec<&str> = galaxy
            .neighbors(vega)
            .map(|(s, _)| s.wiki_link.as_str())
            .collect();

        assert_eq!(neighbors, vec!["sol", "rigel"]);
    }

    #[test]
    fn test_region_of_follows_sector() {
        let galaxy = galaxy();
        let sol = galaxy.system("sol").unwrap();

        assert_eq!(galaxy.sector_of(sol).map(|s| s.name.as_str()), Some("Alpha"));
        assert_eq!(galaxy.region_of(sol).map(|r| r.name.as_str()), Some("Core"));
    }

    #[test]
    fn test_summary_counts() {
        let summary = galaxy().summary();
        assert_eq!(summary.regions, 2);
        assert_eq!(summary.systems, 3);
        assert_eq!(summary.plottable_systems, 2);
        assert_eq!(summary.hyperlanes, 1);
        assert_eq!(summary.looped_hyperlanes, 0);
    }
}
