//! 2D coordinates with Euclidean distance and a nearest-of-two selector.
//!
//! Everything here is a pure function of its inputs. Coordinates are plain
//! `f64` values; NaN and infinities are accepted and flow through the
//! arithmetic rather than being rejected.
//!
//! # Quick Start
//!
//! ```rust
//! use coordinates::{Point2D, find_nearest, origin};
//!
//! let a = Point2D::new(3.0, 4.0);
//! let b = Point2D::new(1.0, 1.0);
//!
//! assert_eq!(origin().distance_to(&a), 5.0);
//! assert_eq!(a.as_string(), "(3, 4)");
//! assert_eq!(find_nearest(&origin(), &a, &b), &b);
//! ```
//!
//! # Ties
//!
//! [`find_nearest`] returns its first option only when it is strictly
//! closer. On equal distances the second option wins:
//!
//! ```rust
//! use coordinates::{Point2D, find_nearest, origin};
//!
//! let east = Point2D::new(1.0, 0.0);
//! let north = Point2D::new(0.0, 1.0);
//! assert_eq!(find_nearest(&origin(), &east, &north), &north);
//! ```

mod geometry;

pub use geometry::{Point2D, distance, find_nearest, origin};
