pub mod card;
pub mod cli;
pub mod filter;
pub mod galaxy;
pub mod model;
pub mod parser;
pub mod schema;
pub mod source;
pub mod ui;

pub use cli::{Cli, Commands};
pub use galaxy::{build_galaxy, Galaxy, GalaxySummary, LoadReport};
pub use source::Sources;
pub use ui::{Phase, SilentUi, Ui, UiApp};
