pub mod render;
pub mod tiles;
pub mod viewport;

pub use render::{MapFrame, marker_label, render_map};
pub use tiles::{TileCoord, TileSource};
pub use viewport::{Direction, Viewport};
