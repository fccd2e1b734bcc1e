//! Free functions over [`Point2D`].

use super::Point2D;

/// Returns the point (0, 0).
#[inline]
pub fn origin() -> Point2D {
    Point2D::ORIGIN
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: &Point2D, b: &Point2D) -> f64 {
    a.distance_to(b)
}

/// Pick whichever of `option1` and `option2` is closer to `reference`.
///
/// `option1` is returned only when it is strictly closer. Equal distances,
/// and any comparison involving a NaN distance, resolve to `option2`.
#[inline]
pub fn find_nearest<'a>(
    reference: &Point2D,
    option1: &'a Point2D,
    option2: &'a Point2D,
) -> &'a Point2D {
    if reference.distance_to(option1) < reference.distance_to(option2) {
        option1
    } else {
        option2
    }
}
