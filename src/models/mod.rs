pub mod coords;
pub mod mode;
pub mod place;

pub use coords::LatLng;
pub use mode::Mode;
pub use place::{Place, PlaceDraft};
