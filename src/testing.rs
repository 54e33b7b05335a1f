// Strategies for generating points with exactly-representable coordinates.
// Keeping coordinates small means every product in the orientation predicate
// is exact in an f64 mantissa, so the property tests never trip over
// rounding.
use proptest::collection::vec;
use proptest::prelude::*;
use std::ops::Range;

use crate::data::Point;

pub fn any_coord() -> impl Strategy<Value = f64> {
  (-50i16..=50).prop_map(f64::from)
}

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (any_coord(), any_coord()).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_points(count: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(any_point(), count)
}
