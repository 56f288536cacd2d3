//! Graph builder: loads sources in dependency order, resolving each row's
//! foreign keys against entities built by earlier sources.
//!
//! Every entity goes through the same two steps: a factory builds it from
//! its row and resolved parents, then `add_*` registers it in its arena,
//! its identifier index, and its parents' child lists. Those `add_*`
//! methods are the only places the graph is mutated.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::{factory, hyperlane, orbits, Galaxy};
use crate::model::*;
use crate::parser::{parse_records, Record};
use crate::schema::{SourceKind, SourceSchema, ALL_SOURCES};
use crate::source::Sources;
use crate::ui::{Phase, Ui};

/// What happened to the rows of each source during a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Entities created
    pub loaded: BTreeMap<&'static str, usize>,
    /// Rows without an identifier
    pub skipped: BTreeMap<&'static str, usize>,
    /// Foreign keys that named nothing
    pub unresolved: BTreeMap<&'static str, usize>,
    /// Identifiers already taken by an earlier row
    pub duplicates: BTreeMap<&'static str, usize>,
}

impl LoadReport {
    pub fn loaded(&self, source: &str) -> usize {
        self.loaded.get(source).copied().unwrap_or(0)
    }

    pub fn unresolved(&self, source: &str) -> usize {
        self.unresolved.get(source).copied().unwrap_or(0)
    }

    pub fn total_loaded(&self) -> usize {
        self.loaded.values().sum()
    }

    pub fn total_unresolved(&self) -> usize {
        self.unresolved.values().sum()
    }

    pub fn total_duplicates(&self) -> usize {
        self.duplicates.values().sum()
    }

    /// No dangling references and no duplicate identifiers
    pub fn is_clean(&self) -> bool {
        self.total_unresolved() == 0 && self.total_duplicates() == 0
    }

    /// Row outcomes for one source
    pub fn tally(&self, source: &str) -> SourceTally {
        let count = |map: &BTreeMap<&'static str, usize>| map.get(source).copied().unwrap_or(0);
        SourceTally {
            loaded: count(&self.loaded),
            skipped: count(&self.skipped),
            unresolved: count(&self.unresolved),
            duplicates: count(&self.duplicates),
        }
    }
}

/// Row outcomes of a single source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceTally {
    pub loaded: usize,
    pub skipped: usize,
    pub unresolved: usize,
    pub duplicates: usize,
}

impl SourceTally {
    pub fn is_clean(&self) -> bool {
        self.unresolved == 0 && self.duplicates == 0
    }
}

impl std::ops::AddAssign for SourceTally {
    fn add_assign(&mut self, other: Self) {
        self.loaded += other.loaded;
        self.skipped += other.skipped;
        self.unresolved += other.unresolved;
        self.duplicates += other.duplicates;
    }
}

pub struct GalaxyBuilder<'u, U: Ui> {
    galaxy: Galaxy,
    report: LoadReport,
    ui: &'u mut U,
}

impl<'u, U: Ui> GalaxyBuilder<'u, U> {
    pub fn new(ui: &'u mut U) -> Self {
        Self {
            galaxy: Galaxy::default(),
            report: LoadReport::default(),
            ui,
        }
    }

    /// Load every source
    pub fn build_all(self, sources: &Sources) -> (Galaxy, LoadReport) {
        self.build(sources, ALL_SOURCES)
    }

    /// Load the given sources, which must be in dependency order
    pub fn build(
        mut self,
        sources: &Sources,
        plan: &[&'static SourceSchema],
    ) -> (Galaxy, LoadReport) {
        self.ui.set_phase(Phase::Loading);
        self.ui.plan(plan);
        let total = plan.len() as u64;

        for (step, schema) in plan.iter().enumerate() {
            if schema.kind == SourceKind::Hyperlane {
                self.ui.set_phase(Phase::Linking);
            }
            self.ui.source_started(schema.name);
            self.ui.set_progress(step as u64, total, schema.name);

            info!("Initializing {}...", schema.name);
            let rows = parse_records(sources.text(schema.name), schema);
            self.load(schema, &rows);

            self.ui.source_finished(schema.name, self.report.tally(schema.name));
        }

        self.ui.set_phase(Phase::Sorting);
        orbits::sort_orbits(&mut self.galaxy);
        self.ui.clear_progress();

        info!(
            entities = self.report.total_loaded(),
            unresolved = self.report.total_unresolved(),
            "Galaxy loaded"
        );
        (self.galaxy, self.report)
    }

    fn load(&mut self, schema: &'static SourceSchema, rows: &[Record]) {
        for row in rows {
            if row.is_blank() {
                debug!(source = schema.name, line = row.line, "Skipping row without identifier");
                *self.report.skipped.entry(schema.name).or_default() += 1;
                continue;
            }

            match schema.kind {
                SourceKind::Region => self.load_region(row),
                SourceKind::Sector => self.load_sector(row),
                SourceKind::System => self.load_system(row),
                SourceKind::Star => self.load_star(row),
                SourceKind::Planet => self.load_planet(row),
                SourceKind::Moon => self.load_moon(row),
                SourceKind::Asteroid => self.load_asteroid(row),
                SourceKind::SpaceStation => self.load_space_station(row),
                SourceKind::Hyperlane => self.load_hyperlane(row),
            }
            *self.report.loaded.entry(schema.name).or_default() += 1;
        }
    }

    // ========================================================================
    // Per-source loaders: resolve, construct, register
    // ========================================================================

    fn load_region(&mut self, row: &Record) {
        let region = factory::region(row);
        self.add_region(row, region);
    }

    fn load_sector(&mut self, row: &Record) {
        let region = self.resolve_region(row, "region");
        let sector = factory::sector(row, region);
        self.add_sector(row, sector);
    }

    fn load_system(&mut self, row: &Record) {
        let sector = self.resolve_sector(row, "sector");
        let region = match sector {
            Some(id) => self.galaxy[id].region,
            None => self.resolve_region(row, "region"),
        };
        let system = factory::system(row, sector, region);
        self.add_system(row, system);
    }

    fn load_star(&mut self, row: &Record) {
        let system = self.resolve_system(row, "system");
        let star = factory::star(row, system);
        self.add_star(row, star);
    }

    fn load_planet(&mut self, row: &Record) {
        let system = self.resolve_system(row, "system");
        let planet = factory::planet(row, system);
        self.add_planet(row, planet);
    }

    fn load_moon(&mut self, row: &Record) {
        let planet = self.resolve_planet(row, "planet");
        let system = self.resolve_system(row, "system");
        let moon = factory::moon(row, planet, system);
        self.add_moon(row, moon);
    }

    fn load_asteroid(&mut self, row: &Record) {
        let body = self.resolve_planet(row, "body");
        let system = self.resolve_system(row, "system");
        let asteroid = factory::asteroid(row, body, system);
        self.add_asteroid(row, asteroid);
    }

    fn load_space_station(&mut self, row: &Record) {
        let body = self.resolve_planet(row, "body");
        let system = self.resolve_system(row, "system");
        let station = factory::space_station(row, body, system);
        self.add_space_station(row, station);
    }

    fn load_hyperlane(&mut self, row: &Record) {
        let (route, missing) = hyperlane::resolve_route(&self.galaxy.index.systems, row.tail());
        if let Some(key) = missing {
            warn!(
                source = row.source(),
                line = row.line,
                key,
                kept = route.len(),
                "Hyperlane route truncated at unknown system"
            );
            self.count_unresolved(row);
        }
        let lane = factory::hyperlane(row, route);
        self.add_hyperlane(row, lane);
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    fn resolve_region(&mut self, row: &Record, column: &str) -> Option<RegionId> {
        let found = self.galaxy.index.regions.get(row.text(column));
        self.checked(row, column, found)
    }

    fn resolve_sector(&mut self, row: &Record, column: &str) -> Option<SectorId> {
        let found = self.galaxy.index.sectors.get(row.text(column));
        self.checked(row, column, found)
    }

    fn resolve_system(&mut self, row: &Record, column: &str) -> Option<SystemId> {
        let found = self.galaxy.index.systems.get(row.text(column));
        self.checked(row, column, found)
    }

    fn resolve_planet(&mut self, row: &Record, column: &str) -> Option<PlanetId> {
        let found = self.galaxy.index.planets.get(row.text(column));
        self.checked(row, column, found)
    }

    /// An empty link means "no relation"; a non-empty one that finds nothing
    /// is reported and also treated as no relation.
    fn checked<I>(&mut self, row: &Record, column: &str, found: Option<I>) -> Option<I> {
        let key = row.text(column);
        if found.is_none() && !key.is_empty() {
            warn!(
                source = row.source(),
                line = row.line,
                column,
                key,
                "Unresolved reference"
            );
            self.count_unresolved(row);
        }
        found
    }

    fn count_unresolved(&mut self, row: &Record) {
        *self.report.unresolved.entry(row.source()).or_default() += 1;
    }

    fn count_duplicate(&mut self, row: &Record) {
        warn!(
            source = row.source(),
            line = row.line,
            key = row.wiki_link(),
            "Duplicate identifier; lookups keep the first"
        );
        *self.report.duplicates.entry(row.source()).or_default() += 1;
    }

    // ========================================================================
    // Registration
    // ========================================================================

    fn add_region(&mut self, row: &Record, region: Region) -> RegionId {
        let id = RegionId::from_index(self.galaxy.regions.len());
        if !self.galaxy.index.regions.insert(&region.wiki_link, id) {
            self.count_duplicate(row);
        }
        self.galaxy.regions.push(region);
        id
    }

    fn add_sector(&mut self, row: &Record, sector: Sector) -> SectorId {
        let id = SectorId::from_index(self.galaxy.sectors.len());
        if !self.galaxy.index.sectors.insert(&sector.wiki_link, id) {
            self.count_duplicate(row);
        }
        if let Some(region) = sector.region {
            self.galaxy.regions[region.index()].sectors.push(id);
        }
        self.galaxy.sectors.push(sector);
        id
    }

    fn add_system(&mut self, row: &Record, system: System) -> SystemId {
        let id = SystemId::from_index(self.galaxy.systems.len());
        if !self.galaxy.index.systems.insert(&system.wiki_link, id) {
            self.count_duplicate(row);
        }
        match (system.sector, system.region) {
            (Some(sector), _) => self.galaxy.sectors[sector.index()].systems.push(id),
            (None, Some(region)) => self.galaxy.regions[region.index()].systems.push(id),
            (None, None) => {
                warn!(source = row.source(), line = row.line, "System has no sector or region")
            }
        }
        self.galaxy.systems.push(system);
        id
    }

    fn add_star(&mut self, row: &Record, star: Star) -> StarId {
        let id = StarId::from_index(self.galaxy.stars.len());
        match star.system {
            Some(system) => self.galaxy.systems[system.index()].stars.push(id),
            None => debug!(source = row.source(), line = row.line, "Star has no system"),
        }
        self.galaxy.stars.push(star);
        id
    }

    fn add_planet(&mut self, row: &Record, planet: Planet) -> PlanetId {
        let id = PlanetId::from_index(self.galaxy.planets.len());
        if !self.galaxy.index.planets.insert(&planet.wiki_link, id) {
            self.count_duplicate(row);
        }
        let system = planet.system;
        self.galaxy.planets.push(planet);
        self.attach(row, Orbiter::Planet(id), None, system);
        id
    }

    fn add_moon(&mut self, row: &Record, moon: Moon) -> MoonId {
        let id = MoonId::from_index(self.galaxy.moons.len());
        let (planet, system) = (moon.planet, moon.system);
        self.galaxy.moons.push(moon);
        self.attach(row, Orbiter::Moon(id), planet, system);
        id
    }

    fn add_asteroid(&mut self, row: &Record, asteroid: Asteroid) -> AsteroidId {
        let id = AsteroidId::from_index(self.galaxy.asteroids.len());
        let (body, system) = (asteroid.body, asteroid.system);
        self.galaxy.asteroids.push(asteroid);
        self.attach(row, Orbiter::Asteroid(id), body, system);
        id
    }

    fn add_space_station(&mut self, row: &Record, station: SpaceStation) -> StationId {
        let id = StationId::from_index(self.galaxy.space_stations.len());
        let (body, system) = (station.body, station.system);
        self.galaxy.space_stations.push(station);
        self.attach(row, Orbiter::Station(id), body, system);
        id
    }

    fn add_hyperlane(&mut self, row: &Record, lane: Hyperlane) -> HyperlaneId {
        let id = HyperlaneId::from_index(self.galaxy.hyperlanes.len());
        if !self.galaxy.index.hyperlanes.insert(&lane.wiki_link, id) {
            self.count_duplicate(row);
        }
        hyperlane::link_route(&mut self.galaxy.systems, id, &lane);
        self.galaxy.hyperlanes.push(lane);
        id
    }

    /// Put an orbiter in its body's orbit list, or its system's when it has
    /// no body.
    fn attach(
        &mut self,
        row: &Record,
        orbiter: Orbiter,
        body: Option<PlanetId>,
        system: Option<SystemId>,
    ) {
        match (body, system) {
            (Some(planet), _) => self.galaxy.planets[planet.index()].orbits.push(orbiter),
            (None, Some(system)) => self.galaxy.systems[system.index()].orbits.push(orbiter),
            (None, None) => debug!(
                source = row.source(),
                line = row.line,
                kind = orbiter.kind(),
                "Orbiter has no body or system"
            ),
        }
    }
}

/// Load the given sources in order, reporting progress to `ui`
pub fn build_galaxy(
    sources: &Sources,
    plan: &[&'static SourceSchema],
    ui: &mut impl Ui,
) -> (Galaxy, LoadReport) {
    GalaxyBuilder::new(ui).build(sources, plan)
}
