//! Galaxy entities and the handles that connect them.
//!
//! Entities own lists of child handles; parent references are plain
//! handles too, so the whole graph lives in the `Galaxy` arenas.

mod body;
mod hyperlane;
mod ids;
mod orbit;
mod system;
mod territory;

pub use body::{Asteroid, BodyInfo, Moon, Planet, SpaceStation};
pub use hyperlane::Hyperlane;
pub use ids::*;
pub use orbit::{Orbiter, Orbiting, OrbitIndex};
pub use system::{Coords, Star, System};
pub use territory::{Region, Sector};

/// Identity shared by every entity
pub trait Entity {
    fn name(&self) -> &str;
    /// Stable identifier, unique per kind
    fn wiki_link(&self) -> &str;
    fn comments(&self) -> &str;
}

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Entity for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn wiki_link(&self) -> &str {
                    &self.wiki_link
                }

                fn comments(&self) -> &str {
                    &self.comments
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.wiki_link)
                }
            }
        )+
    };
}

impl_entity!(
    Region,
    Sector,
    System,
    Star,
    Planet,
    Moon,
    Asteroid,
    SpaceStation,
    Hyperlane,
);

/// Join a presentation-supplied base URL with an entity's identifier
pub fn wiki_url<E: Entity + ?Sized>(base: &str, entity: &E) -> String {
    format!("{}/{}", base.trim_end_matches('/'), entity.wiki_link())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiki_url_joins_once() {
        let region = Region::new("Core", "core", "");
        assert_eq!(wiki_url("http://wiki.example/wiki/", &region), "http://wiki.example/wiki/core");
        assert_eq!(wiki_url("http://wiki.example/wiki", &region), "http://wiki.example/wiki/core");
    }

    #[test]
    fn test_display_is_wiki_link() {
        let region = Region::new("Core Worlds", "core", "");
        assert_eq!(region.to_string(), "core");
    }
}
