mod nearest;
mod point;

pub use nearest::{distance, find_nearest, origin};
pub use point::Point2D;
