use num_traits::real::Real;

use crate::data::{DirectedEdge, Point};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Quickhull

// Properties:
//    No panics.
//    All hull vertices are members of the input set.
//    No input point is outside the (angularly sorted) hull polygon.
/// $O(n \log n)$ expected, $O(n^2)$ worst case convex hull of a set of points.
///
/// [Quickhull][wiki] algorithm: fix the baseline between the leftmost and
/// rightmost input points, split the set into the points above and below it,
/// and recursively grow each half by repeatedly picking the point farthest
/// from the current baseline.
///
/// The result lists hull vertices in discovery order: leftmost, the upper
/// vertices, the lower vertices, rightmost. This order is not a boundary
/// traversal and may repeat the leftmost point; apply
/// [`sort_around_centroid`] before treating the output as a closed polygon.
/// Input points that are colinear with a hull edge may be omitted from the
/// result (they are never required for the hull shape).
///
/// # Errors
/// Returns [`Error::EmptySet`] for an empty input, and
/// [`Error::DegenerateLine`] when the input has fewer than two distinct
/// x-coordinates (the baseline between leftmost and rightmost then has zero
/// length).
///
/// # Properties
/// * All vertices in the output are from the input set.
/// * No point from the input set lies outside the hull polygon.
///
/// # Examples
///
/// ```rust
/// # use quickhull2d::algorithms::convex_hull;
/// # use quickhull2d::data::Point;
/// # use quickhull2d::Error;
/// let empty_set: Vec<Point<f64>> = vec![];
/// assert_eq!(convex_hull(&empty_set).err(), Some(Error::EmptySet));
/// ```
///
/// ```rust
/// # use quickhull2d::algorithms::convex_hull;
/// # use quickhull2d::data::Point;
/// let pts = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([4.0, 0.0]),
///   Point::new([2.0, 4.0]),
///   Point::new([2.0, 1.0]), // interior
/// ];
/// let hull = convex_hull(&pts).unwrap();
/// assert!(!hull.contains(&Point::new([2.0, 1.0])));
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Quickhull
pub fn convex_hull<T>(pts: &[Point<T>]) -> Result<Vec<Point<T>>, Error>
where
  T: Real,
{
  let (leftmost, rightmost) = extremal_points(pts)?;
  let baseline = DirectedEdge::new(leftmost, rightmost);

  // Points colinear with the baseline, the two extremes included, go in the
  // lower group.
  let (upper, lower) = partition(pts, &baseline);

  let upper_hull = find_hull(&upper, &baseline)?;
  // Reversing the baseline flips the orientation sign, so the lower points
  // become the counter-clockwise side and the same recursion handles them.
  let lower_hull = find_hull(&lower, &baseline.reverse())?;

  let mut hull = Vec::with_capacity(2 + upper_hull.len() + lower_hull.len());
  hull.push(leftmost);
  hull.extend(upper_hull);
  hull.extend(lower_hull);
  hull.push(rightmost);
  Ok(hull)
}

/// Split `pts` into the points strictly on the counter-clockwise side of
/// `edge` and everything else.
///
/// Colinear points always land in the second group. That includes the edge's
/// own endpoints when they occur in `pts`: their orientation is zero, so no
/// explicit exclusion is needed or performed. A consequence carried through
/// to [`convex_hull`] is that input points sitting exactly on a hull edge
/// never make it to the counter-clockwise side and may be left out of the
/// hull.
pub fn partition<T>(pts: &[Point<T>], edge: &DirectedEdge<T>) -> (Vec<Point<T>>, Vec<Point<T>>)
where
  T: Real,
{
  let mut ccw = Vec::new();
  let mut rest = Vec::new();
  for pt in pts {
    if Orientation::new(&edge.src, &edge.dst, pt).is_ccw() {
      ccw.push(*pt);
    } else {
      rest.push(*pt);
    }
  }
  (ccw, rest)
}

/// The points of `pts` with minimum and maximum x-coordinate, in that order.
/// Ties are broken by first occurrence in input order.
///
/// # Errors
/// Returns [`Error::EmptySet`] iff `pts` is empty.
pub fn extremal_points<T>(pts: &[Point<T>]) -> Result<(Point<T>, Point<T>), Error>
where
  T: Real,
{
  let mut iter = pts.iter();
  let first = iter.next().ok_or(Error::EmptySet)?;
  let (mut leftmost, mut rightmost) = (first, first);
  for pt in iter {
    if pt.x_coord() < leftmost.x_coord() {
      leftmost = pt;
    }
    if pt.x_coord() > rightmost.x_coord() {
      rightmost = pt;
    }
  }
  Ok((*leftmost, *rightmost))
}

/// Signed perpendicular distance from `pt` to `edge`: positive on the
/// counter-clockwise side, negative on the clockwise side, zero on the line.
///
/// The numerator is [`Orientation::signed_area`], so the sign always agrees
/// with [`Orientation::new`].
///
/// # Errors
/// Returns [`Error::DegenerateLine`] iff the edge has zero length.
pub fn signed_distance<T>(edge: &DirectedEdge<T>, pt: &Point<T>) -> Result<T, Error>
where
  T: Real,
{
  if edge.is_degenerate() {
    return Err(Error::DegenerateLine);
  }
  Ok(Orientation::signed_area(&edge.src, &edge.dst, pt) / edge.length())
}

/// The point of `pts` with the greatest signed distance from `edge`, first
/// occurrence winning ties.
///
/// The distance is signed, not absolute: callers must guarantee that every
/// candidate lies on the counter-clockwise side of `edge`. This is not
/// verified here, and with mixed-side input the result is simply the least
/// clockwise point. [`find_hull`] is the intended caller and upholds the
/// contract by only passing the counter-clockwise output of [`partition`].
///
/// # Errors
/// Returns [`Error::EmptySet`] for an empty set and
/// [`Error::DegenerateLine`] for a zero-length edge.
pub fn farthest_point<T>(pts: &[Point<T>], edge: &DirectedEdge<T>) -> Result<Point<T>, Error>
where
  T: Real,
{
  let mut iter = pts.iter();
  let mut farthest = *iter.next().ok_or(Error::EmptySet)?;
  let mut max_dist = signed_distance(edge, &farthest)?;
  for pt in iter {
    let dist = signed_distance(edge, pt)?;
    if dist > max_dist {
      max_dist = dist;
      farthest = *pt;
    }
  }
  Ok(farthest)
}

/// Hull vertices contributed by `pts`, a subset lying entirely on the
/// counter-clockwise side of `edge`.
///
/// The farthest point from the baseline is always a hull vertex. It splits
/// the subset into the points outside the triangle (src, farthest, dst) on
/// either side, and each side recurses with its triangle edge as the new
/// baseline. An empty subset contributes nothing.
///
/// Recursion depth is $O(\log n)$ for well-distributed inputs and $O(n)$ in
/// the worst case (most points on the hull).
pub fn find_hull<T>(pts: &[Point<T>], edge: &DirectedEdge<T>) -> Result<Vec<Point<T>>, Error>
where
  T: Real,
{
  if pts.is_empty() {
    return Ok(Vec::new());
  }

  let farthest = farthest_point(pts, edge)?;
  let src_side = DirectedEdge::new(edge.src, farthest);
  let dst_side = DirectedEdge::new(farthest, edge.dst);

  // `farthest` is colinear with both sub-baselines, so `partition` routes it
  // to the non-counter-clockwise group and neither recursive call sees it
  // again. This makes each call strictly smaller and the recursion finite.
  let (src_pts, _) = partition(pts, &src_side);
  let (dst_pts, _) = partition(pts, &dst_side);

  let src_hull = find_hull(&src_pts, &src_side)?;
  let dst_hull = find_hull(&dst_pts, &dst_side)?;

  let mut hull = Vec::with_capacity(1 + src_hull.len() + dst_hull.len());
  hull.push(farthest);
  hull.extend(src_hull);
  hull.extend(dst_hull);
  Ok(hull)
}

/// Reorder `pts` counter-clockwise by angle around their centroid.
///
/// [`convex_hull`] emits vertices in discovery order, which is not a valid
/// boundary traversal. Renderers apply this sort before connecting the
/// vertices into a closed polygon. Does nothing for an empty slice.
pub fn sort_around_centroid<T>(pts: &mut [Point<T>])
where
  T: Real,
{
  if pts.is_empty() {
    return;
  }
  let mut x_sum = T::zero();
  let mut y_sum = T::zero();
  let mut len = T::zero();
  for pt in pts.iter() {
    x_sum = x_sum + *pt.x_coord();
    y_sum = y_sum + *pt.y_coord();
    len = len + T::one();
  }
  let center = Point::new([x_sum / len, y_sum / len]);
  pts.sort_by(|a, b| {
    let a_angle = (*a.y_coord() - *center.y_coord()).atan2(*a.x_coord() - *center.x_coord());
    let b_angle = (*b.y_coord() - *center.y_coord()).atan2(*b.x_coord() - *center.x_coord());
    a_angle
      .partial_cmp(&b_angle)
      .unwrap_or(std::cmp::Ordering::Equal)
  });
}
