use num_traits::real::Real;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// A positive signed area maps to `CounterClockWise`, a negative one to
  /// `ClockWise`, and zero to `CoLinear`. Every other part of this crate
  /// uses the same sign convention, which is all the hull construction
  /// requires of it.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use quickhull2d::data::Point;
  /// # use quickhull2d::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: Real,
  {
    let area = Orientation::signed_area(p1, p2, p3);
    if area > T::zero() {
      CounterClockWise
    } else if area < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  /// Twice the signed area of the triangle `(p1, p2, p3)`.
  ///
  /// This is the raw value behind [`Orientation::new`]. The signed distance
  /// from a baseline divides it by the baseline length, so the predicate and
  /// the distance share a single arithmetic path and cannot disagree on the
  /// sign. May lose precision for very large or nearly-collinear
  /// coordinates.
  pub fn signed_area<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> T
  where
    T: Real,
  {
    (p2[0] - p1[0]) * (p3[1] - p1[1]) - (p3[0] - p1[0]) * (p2[1] - p1[1])
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
