//! Orbit sorter. Systems list their orbits innermost first, planets list
//! theirs outermost first. Unknown indices go last either way, in load order.

use super::Galaxy;

pub fn sort_orbits(galaxy: &mut Galaxy) {
    for i in 0..galaxy.systems.len() {
        let mut orbits = std::mem::take(&mut galaxy.systems[i].orbits);
        orbits.sort_by(|a, b| {
            galaxy
                .orbit_of(*a)
                .cmp_ascending(&galaxy.orbit_of(*b))
        });
        galaxy.systems[i].orbits = orbits;
    }

    for i in 0..galaxy.planets.len() {
        let mut orbits = std::mem::take(&mut galaxy.planets[i].orbits);
        orbits.sort_by(|a, b| {
            galaxy
                .orbit_of(*a)
                .cmp_descending(&galaxy.orbit_of(*b))
        });
        galaxy.planets[i].orbits = orbits;
    }
}

#[cfg(test)]
mod tests {
    use crate::galaxy::Galaxy;
    use crate::model::{OrbitIndex, Orbiter};
    use crate::source::Sources;

    fn galaxy() -> Galaxy {
        let mut sources = Sources::new();
        sources.set("regions", "Core|core");
        sources.set("systems", "Sol|sol||0|0|||core|1");
        sources.set(
            "planets",
            "Mars|mars||sol|4\nVenus|venus||sol|2\nRogue|rogue||sol|\nEarth|earth||sol|3",
        );
        sources.set(
            "moons",
            "Luna|luna||earth||1\nPhobos|phobos||mars||1\nDeimos|deimos||mars||2\nLost|lost||mars||x",
        );
        sources.set("space_stations", "Gate|gate||mars|sol\nDock|dock|||sol");
        Galaxy::from_sources(&sources)
    }

    fn orbit_values(galaxy: &Galaxy, orbits: &[Orbiter]) -> Vec<OrbitIndex> {
        orbits.iter().map(|o| galaxy.orbit_of(*o)).collect()
    }

    #[test]
    fn test_system_orbits_ascend_with_unknown_last() {
        let galaxy = galaxy();
        let sol = galaxy.system("sol").unwrap();
        let names: Vec<&str> = sol.orbits.iter().map(|o| galaxy.orbiter(*o).name()).collect();

        assert_eq!(names, vec!["Dock", "Venus", "Earth", "Mars", "Rogue"]);
        assert!(!galaxy.orbit_of(sol.orbits[4]).is_known());
    }

    #[test]
    fn test_planet_orbits_descend_with_unknown_last() {
        let galaxy = galaxy();
        let mars = galaxy.planet("mars").unwrap();
        let values = orbit_values(&galaxy, &mars.orbits);

        assert_eq!(
            values,
            vec![
                OrbitIndex::known(2.0),
                OrbitIndex::known(1.0),
                OrbitIndex::known(0.0),
                OrbitIndex::UNKNOWN,
            ]
        );
    }
}
