use serde::Serialize;

use super::{RegionId, SectorId, SystemId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    pub sectors: Vec<SectorId>,
    /// Systems that belong to no sector
    pub systems: Vec<SystemId>,
}

impl Region {
    pub fn new(name: impl Into<String>, wiki_link: impl Into<String>, comments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wiki_link: wiki_link.into(),
            comments: comments.into(),
            sectors: Vec::new(),
            systems: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sector {
    pub name: String,
    pub wiki_link: String,
    pub comments: String,
    pub region: Option<RegionId>,
    pub systems: Vec<SystemId>,
}
