use num_traits::real::Real;

use super::Point;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed baseline from `src` to `dst`. Only used transiently while the
// hull is being built; never part of the output.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectedEdge<T> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T> DirectedEdge<T> {
  pub const fn new(src: Point<T>, dst: Point<T>) -> DirectedEdge<T> {
    DirectedEdge { src, dst }
  }

  /// Swap `src` and `dst`, flipping the orientation sign of every point
  /// relative to the edge.
  #[must_use]
  pub fn reverse(self) -> DirectedEdge<T> {
    DirectedEdge {
      src: self.dst,
      dst: self.src,
    }
  }

  pub fn is_degenerate(&self) -> bool
  where
    T: PartialEq,
  {
    self.src == self.dst
  }

  /// Euclidean length of the edge.
  pub fn length(&self) -> T
  where
    T: Real,
  {
    self.src.distance_to(&self.dst)
  }
}
