use serde::Serialize;
use std::collections::BTreeMap;

use super::{HyperlaneId, Orbiter, RegionId, SectorId, StarId, SystemId};

/// Map position; either axis may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coords {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Coords {
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    /// Both axes, or nothing. Systems without a point are left off maps.
    pub fn point(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }

    pub fn is_known(&self) -> bool {
        self.point().is_some()
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.point() {
            Some((x, y)) => write!(f, "[ {} , {} ]", x, y),
            None => write!(f, "[ unknown ]"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct System {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    pub coords: Coords,
    pub grid: String,
    pub sector: Option<SectorId>,
    /// Taken from the sector when there is one
    pub region: Option<RegionId>,
    pub priority: Option<f64>,
    pub stars: Vec<StarId>,
    /// Ascending by orbit index once loading finishes
    pub orbits: Vec<Orbiter>,
    /// Neighbor -> hyperlane joining the two
    pub hyperlanes: BTreeMap<SystemId, HyperlaneId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    pub system: Option<SystemId>,
    pub classification: String,
    pub diameter: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_needs_both_axes() {
        assert_eq!(Coords::new(Some(1.0), Some(2.0)).point(), Some((1.0, 2.0)));
        assert_eq!(Coords::new(Some(1.0), None).point(), None);
        assert!(!Coords::default().is_known());
    }

    #[test]
    fn test_coords_display() {
        assert_eq!(Coords::new(Some(-1500.0), Some(30.5)).to_string(), "[ -1500 , 30.5 ]");
        assert_eq!(Coords::new(None, Some(30.5)).to_string(), "[ unknown ]");
    }
}
