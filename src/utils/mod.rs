extern crate nalgebra as na;
use na::{Point2, Vector2};

pub type Float = f64;
pub type P2 = Point2<Float>;
pub type V2 = Vector2<Float>;

#[cfg(test)]
pub const EPSILON: Float = 0.000_001;

#[cfg(test)]
pub fn approx_eq(a: Float, b: Float) -> bool {
    (a - b).abs() < EPSILON
}

/// `true` if `num` lies strictly outside of `[0, max]`
/// NaN is never outside
pub fn outside_range(num: Float, max: Float) -> bool {
    num < 0.0 || num > max
}
