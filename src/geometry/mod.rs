pub mod ring;
pub mod segment;
pub mod vertex;

pub use ring::{ObstacleRing, RingSplit};
pub use segment::Segment;
pub use vertex::{PathVertex, Side};
