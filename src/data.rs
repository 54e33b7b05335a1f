mod directed_edge;
pub(crate) mod point;

pub use directed_edge::DirectedEdge;
pub use point::Point;
