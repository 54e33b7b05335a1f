//! Convex hulls of 2D point sets via the quickhull algorithm.
//!
//! The entry point is [`algorithms::convex_hull()`]. It returns the hull
//! vertices in the order the recursion discovers them: the leftmost point,
//! the vertices above the leftmost→rightmost baseline, the vertices below
//! it, and finally the rightmost point. That order is an artifact of the
//! divide-and-conquer traversal and is *not* a boundary walk; use
//! [`algorithms::convex_hull::quick_hull::sort_around_centroid`] to turn it
//! into one before drawing a closed polygon.
//!
//! All algorithms are generic over [`num_traits::Float`]. Orientation tests
//! are done in plain floating-point arithmetic, so hulls of nearly-collinear
//! inputs are not guaranteed to be bit-exact. Robust predicates are out of
//! scope for this crate.

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A component requiring at least one point was given an empty set.
  EmptySet,
  /// A baseline with zero length (start equals end).
  DegenerateLine,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::EmptySet => write!(f, "Empty point set"),
      Error::DegenerateLine => write!(f, "Degenerate line: start equals end"),
    }
  }
}

#[cfg(test)]
pub mod testing;
