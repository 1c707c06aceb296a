pub mod aesthetic;
pub mod coord;
pub mod polar_coord;
pub mod rect_coord;
pub mod types;

pub use aesthetic::{AestheticGroup, AestheticRecord};
pub use coord::{Coord, CoordConv};
pub use polar_coord::{PolarCoordConv, PolarCoordSpec};
pub use rect_coord::RectCoordConv;
pub use types::{Viewport, is_finite_point, validate_region};
