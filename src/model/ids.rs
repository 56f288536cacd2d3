//! Typed handles into the galaxy's per-kind entity lists.

use serde::Serialize;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub(crate) fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

handle!(RegionId);
handle!(SectorId);
handle!(
    /// Also the adjacency key between systems
    SystemId
);
handle!(StarId);
handle!(PlanetId);
handle!(MoonId);
handle!(AsteroidId);
handle!(StationId);
handle!(HyperlaneId);
