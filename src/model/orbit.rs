//! Orbit ordering and the heterogeneous orbit-list entry.

use serde::Serialize;
use std::cmp::Ordering;

use super::{AsteroidId, Entity, MoonId, PlanetId, StationId};

/// Position in a parent's orbit sequence. Unknown when the source value
/// was not a number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct OrbitIndex(Option<f64>);

impl OrbitIndex {
    pub const UNKNOWN: OrbitIndex = OrbitIndex(None);

    pub fn new(value: Option<f64>) -> Self {
        Self(value.filter(|v| v.is_finite()))
    }

    pub fn known(value: f64) -> Self {
        Self::new(Some(value))
    }

    pub fn value(self) -> Option<f64> {
        self.0
    }

    pub fn is_known(self) -> bool {
        self.0.is_some()
    }

    /// Known indices low to high, unknown ones after them
    pub fn cmp_ascending(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Known indices high to low, unknown ones after them
    pub fn cmp_descending(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl std::fmt::Display for OrbitIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "?"),
        }
    }
}

/// Anything that sits in an orbit list
pub trait Orbiting: Entity {
    fn orbit(&self) -> OrbitIndex;
}

/// Entry of a system's or planet's orbit list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Orbiter {
    Planet(PlanetId),
    Moon(MoonId),
    Asteroid(AsteroidId),
    Station(StationId),
}

impl Orbiter {
    pub fn kind(&self) -> &'static str {
        match self {
            Orbiter::Planet(_) => "planet",
            Orbiter::Moon(_) => "moon",
            Orbiter::Asteroid(_) => "asteroid",
            Orbiter::Station(_) => "station",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[Option<f64>], descending: bool) -> Vec<Option<f64>> {
        let mut indices: Vec<OrbitIndex> = values.iter().map(|v| OrbitIndex::new(*v)).collect();
        if descending {
            indices.sort_by(|a, b| a.cmp_descending(b));
        } else {
            indices.sort_by(|a, b| a.cmp_ascending(b));
        }
        indices.into_iter().map(OrbitIndex::value).collect()
    }

    #[test]
    fn test_ascending_puts_unknown_last() {
        assert_eq!(
            sorted(&[Some(3.0), None, Some(1.0), Some(2.5)], false),
            vec![Some(1.0), Some(2.5), Some(3.0), None]
        );
    }

    #[test]
    fn test_descending_puts_unknown_last() {
        assert_eq!(
            sorted(&[None, Some(1.0), Some(4.0)], true),
            vec![Some(4.0), Some(1.0), None]
        );
    }

    #[test]
    fn test_nan_is_unknown() {
        assert!(!OrbitIndex::new(Some(f64::NAN)).is_known());
        assert_eq!(OrbitIndex::UNKNOWN.to_string(), "?");
        assert_eq!(OrbitIndex::known(3.0).to_string(), "3");
    }
}
