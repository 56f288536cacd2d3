use serde::Serialize;

use super::SystemId;

/// A named route through an ordered list of systems
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hyperlane {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    /// Last system connects back to the first
    #[serde(rename = "loop")]
    pub looped: bool,
    pub priority: Option<f64>,
    pub systems: Vec<SystemId>,
}

impl Hyperlane {
    /// Consecutive member pairs, plus the closing pair for loops
    pub fn edges(&self) -> Vec<(SystemId, SystemId)> {
        let mut edges: Vec<_> = self.systems.windows(2).map(|w| (w[0], w[1])).collect();
        if self.looped && self.systems.len() >= 2 {
            edges.push((self.systems[self.systems.len() - 1], self.systems[0]));
        }
        edges
    }
}
