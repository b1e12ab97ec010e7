#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod field;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod roster;
pub mod selection;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, MapperConfig, RenderConfig, Strategy, load_config};
pub use field::{FieldMapper, IdealPoint, MarkerAnchor, RenderCoord};
pub use layout::{Layout, Placement, compute_layout};
pub use layout_dump::LayoutDump;
pub use render::render_svg;
pub use roster::{Player, PlayerId, Position, PositionGroup, Roster, TacticalPosition, load_roster};
pub use selection::FieldState;
pub use theme::Theme;
