//! Plain floating-point 2D predicates. No tolerance is applied here; callers
//! that need one (the funnel) add it themselves.

use itertools::Itertools;

use crate::models::Point;
use crate::options::Winding;

/// Twice the signed area of `a, b, c` under `winding`.
///
/// Positive when the points turn counter-clockwise, negative when clockwise,
/// zero when collinear.
#[inline]
pub fn orient(a: Point, b: Point, c: Point, winding: Winding) -> f64 {
    winding.apply((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]))
}

/// Points on an edge or a vertex count as inside.
#[inline]
pub fn point_in_triangle(p: Point, tri: &[Point; 3], winding: Winding) -> bool {
    let d1 = orient(tri[0], tri[1], p, winding);
    let d2 = orient(tri[1], tri[2], p, winding);
    let d3 = orient(tri[2], tri[0], p, winding);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Signed area of a closed ring (last point connects back to the first).
pub fn signed_area(ring: &[Point], winding: Winding) -> f64 {
    if ring.len() < 3 { return 0.0; }
    let mut a = 0.0;
    for (p0, p1) in ring.iter().circular_tuple_windows() {
        a += p0[0] * p1[1] - p1[0] * p0[1];
    }
    winding.apply(0.5 * a)
}

/// Reverses `ring` in place if it is wound clockwise. Returns true when it
/// had to be reversed.
pub fn ensure_ccw(ring: &mut [Point], winding: Winding) -> bool {
    if signed_area(ring, winding) < 0.0 {
        ring.reverse();
        true
    } else {
        false
    }
}

#[inline]
pub fn centroid(tri: &[Point; 3]) -> Point {
    [
        (tri[0][0] + tri[1][0] + tri[2][0]) / 3.0,
        (tri[0][1] + tri[1][1] + tri[2][1]) / 3.0,
    ]
}

#[inline]
pub fn distance_sq(a: Point, b: Point) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    distance_sq(a, b).sqrt()
}

/// Total length of an open polyline.
pub fn path_length(points: &[Point]) -> f64 {
    points.iter().tuple_windows().map(|(a, b)| distance(*a, *b)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRI: [Point; 3] = [[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]];

    #[test]
    fn orient_signs_follow_winding() {
        assert!(orient([0.0, 0.0], [1.0, 0.0], [0.0, 1.0], Winding::YUp) > 0.0);
        assert!(orient([0.0, 0.0], [1.0, 0.0], [0.0, 1.0], Winding::YDown) < 0.0);
        assert_eq!(orient([0.0, 0.0], [1.0, 1.0], [2.0, 2.0], Winding::YUp), 0.0);
    }

    #[test]
    fn point_in_triangle_includes_edges_and_vertices() {
        assert!(point_in_triangle([0.2, 0.2], &TRI, Winding::YUp));
        assert!(point_in_triangle([1.0, 0.0], &TRI, Winding::YUp)); // on edge
        assert!(point_in_triangle([1.0, 1.0], &TRI, Winding::YUp)); // on hypotenuse
        assert!(point_in_triangle([0.0, 0.0], &TRI, Winding::YUp)); // vertex
        assert!(!point_in_triangle([1.5, 1.5], &TRI, Winding::YUp));
        assert!(!point_in_triangle([-0.1, 0.5], &TRI, Winding::YUp));
    }

    #[test]
    fn point_in_triangle_ignores_vertex_order() {
        let cw = [TRI[0], TRI[2], TRI[1]];
        for w in [Winding::YUp, Winding::YDown] {
            assert!(point_in_triangle([0.2, 0.2], &cw, w));
            assert!(!point_in_triangle([1.5, 1.5], &cw, w));
        }
    }

    #[test]
    fn ring_area_and_normalization() {
        let mut square = vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
        assert!((signed_area(&square, Winding::YUp) + 1.0).abs() < 1e-12);
        assert!(ensure_ccw(&mut square, Winding::YUp));
        assert!((signed_area(&square, Winding::YUp) - 1.0).abs() < 1e-12);
        assert!(!ensure_ccw(&mut square, Winding::YUp));
        // The same ring is clockwise on screen.
        assert!(ensure_ccw(&mut square, Winding::YDown));
        assert!(signed_area(&[[0.0, 0.0], [1.0, 1.0]], Winding::YUp) == 0.0);
    }

    #[test]
    fn centroid_and_length() {
        let c = centroid(&TRI);
        assert!((c[0] - 2.0 / 3.0).abs() < 1e-12 && (c[1] - 2.0 / 3.0).abs() < 1e-12);
        assert!((path_length(&[[0.0, 0.0], [3.0, 4.0], [3.0, 0.0]]) - 9.0).abs() < 1e-12);
        assert_eq!(path_length(&[[1.0, 1.0]]), 0.0);
    }
}
