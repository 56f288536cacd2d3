use serde::Serialize;

use super::{OrbitIndex, Orbiter, Orbiting, PlanetId, SystemId};

/// Physical description shared by planets and moons
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BodyInfo {
    pub day_length: Option<f64>,
    pub year_length: Option<f64>,
    pub diameter: Option<f64>,
    pub atmosphere: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    pub system: Option<SystemId>,
    pub orbit: OrbitIndex,
    pub classification: String,
    #[serde(flatten)]
    pub info: BodyInfo,
    /// Moons, asteroids and stations; descending by orbit index once loaded
    pub orbits: Vec<Orbiter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Moon {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    /// Absent when the moon orbits its system directly
    pub planet: Option<PlanetId>,
    pub system: Option<SystemId>,
    pub orbit: OrbitIndex,
    #[serde(flatten)]
    pub info: BodyInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asteroid {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    pub body: Option<PlanetId>,
    pub system: Option<SystemId>,
    pub orbit: OrbitIndex,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceStation {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    pub body: Option<PlanetId>,
    pub system: Option<SystemId>,
    pub orbit: OrbitIndex,
}

impl SpaceStation {
    /// Stations always sit at the innermost slot
    pub const ORBIT: f64 = 0.0;
}

macro_rules! impl_orbiting {
    ($($ty:ty),+) => {
        $(
            impl Orbiting for $ty {
                fn orbit(&self) -> OrbitIndex {
                    self.orbit
                }
            }
        )+
    };
}

impl_orbiting!(Planet, Moon, Asteroid, SpaceStation);
