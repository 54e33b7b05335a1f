use num_traits::real::Real;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use crate::orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }

  /// Shorthand for [`Orientation::new`]`(self, q, r)`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: Real,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Euclidean distance to `rhs`.
  pub fn distance_to(&self, rhs: &Point<T>) -> T
  where
    T: Real,
  {
    let dx = self.array[0] - rhs.array[0];
    let dy = self.array[1] - rhs.array[1];
    dx.hypot(dy)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;
  use crate::Orientation::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn distance_unit() {
    let origin: Point<f64> = Point::new([0.0, 0.0]);
    assert_eq!(origin.distance_to(&Point::new([3.0, 4.0])), 5.0);
    assert_eq!(origin.distance_to(&origin), 0.0);
  }

  #[test]
  fn orientation_unit() {
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([1.0, 0.0]), &Point::new([2.0, 0.0])),
      CoLinear
    );
    assert_eq!(
      Point::new([0.0, 0.0]).orientation(&Point::new([1.0, 0.0]), &Point::new([2.0, 1.0])),
      CounterClockWise
    );
  }

  #[test]
  fn random_sampling() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    let mut rng = SmallRng::seed_from_u64(7);
    let pt: Point<f64> = rng.gen();
    assert!(pt.x_coord().is_finite());
    assert!(pt.y_coord().is_finite());
  }

  #[proptest]
  fn distance_symmetric(
    #[strategy(any_point())] p1: Point<f64>,
    #[strategy(any_point())] p2: Point<f64>,
  ) {
    prop_assert_eq!(p1.distance_to(&p2), p2.distance_to(&p1))
  }
}
