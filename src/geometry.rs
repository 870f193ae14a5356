//! Polygon and triangulation utilities shared by the asteroid pipeline.
//!
//! Box2D-style physics backends require convex polygons with counter-clockwise
//! (CCW) winding and distinct vertices — a duplicate point crashes the convex
//! polygon constructor.  Everything here either produces CCW output directly
//! or exposes the predicates ([`has_duplicate_vertex`], [`is_ccw`]) callers
//! use to discard invalid geometry before it reaches the physics engine.

use crate::constants::HULL_DEDUP_MIN_DIST;
use bevy::prelude::*;

/// Signed polygon area via the shoelace formula.  Positive for CCW winding.
pub fn polygon_area_signed(ring: &[Vec2]) -> f32 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Absolute polygon area.
pub fn polygon_area(ring: &[Vec2]) -> f32 {
    polygon_area_signed(ring).abs()
}

/// True when the vertex ring is counter-clockwise wound.
pub fn is_ccw(ring: &[Vec2]) -> bool {
    polygon_area_signed(ring) > 0.0
}

/// Reverse the ring in place if it is clockwise wound.
pub fn ensure_ccw(ring: &mut [Vec2]) {
    if polygon_area_signed(ring) < 0.0 {
        ring.reverse();
    }
}

/// Area-weighted polygon centroid.
///
/// Falls back to the plain vertex average for degenerate (near-zero-area)
/// rings, where the weighted formula divides by ~0.
pub fn polygon_centroid(ring: &[Vec2]) -> Vec2 {
    let area = polygon_area_signed(ring);
    if ring.is_empty() {
        return Vec2::ZERO;
    }
    if area.abs() < 1e-6 {
        return ring.iter().copied().sum::<Vec2>() / ring.len() as f32;
    }
    let mut c = Vec2::ZERO;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        let cross = a.x * b.y - b.x * a.y;
        c += (a + b) * cross;
    }
    c / (6.0 * area)
}

/// True when a polygon's interior angles never turn clockwise (ring assumed CCW).
pub fn is_convex(ring: &[Vec2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let c = ring[(i + 2) % n];
        if cross(b - a, c - b) < -1e-6 {
            return false;
        }
    }
    true
}

/// True when any two of the triangle's vertices coincide exactly.
///
/// Such triangles must be discarded before reaching the physics backend:
/// duplicate points violate its convex-polygon minimum-distance assertion.
pub fn has_duplicate_vertex(tri: &[Vec2; 3]) -> bool {
    tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2]
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

// ── Convex hull ───────────────────────────────────────────────────────────────

/// Compute the convex hull of a point set via gift wrapping, returned as a
/// CCW-wound vertex ring.
///
/// Near-duplicate points (within [`HULL_DEDUP_MIN_DIST`]) are merged first so
/// the physics backend's convex hull constructor never sees a degenerate
/// input.  Returns `None` for fewer than 3 usable points.
pub fn convex_hull(points: &[Vec2]) -> Option<Vec<Vec2>> {
    let mut deduped: Vec<Vec2> = Vec::with_capacity(points.len());
    for &p in points {
        if !deduped.iter().any(|q| q.distance(p) < HULL_DEDUP_MIN_DIST) {
            deduped.push(p);
        }
    }
    if deduped.len() < 3 {
        return None;
    }
    let points = deduped.as_slice();

    // Leftmost (then lowest) point is always on the hull.
    let mut min_idx = 0;
    for i in 1..points.len() {
        if points[i].x < points[min_idx].x
            || (points[i].x == points[min_idx].x && points[i].y < points[min_idx].y)
        {
            min_idx = i;
        }
    }

    let mut hull = Vec::new();
    let mut current = min_idx;
    loop {
        hull.push(points[current]);
        let mut next = (current + 1) % points.len();
        for i in 0..points.len() {
            if cross(points[next] - points[current], points[i] - points[current]) > 0.0 {
                next = i;
            }
        }
        current = next;
        if current == min_idx {
            break;
        }
        // Collinear degenerate input can fail to close the loop.
        if hull.len() > points.len() {
            return None;
        }
    }

    if hull.len() < 3 {
        return None;
    }
    ensure_ccw(&mut hull);
    Some(hull)
}

// ── Delaunay triangulation (Bowyer–Watson) ────────────────────────────────────

/// Delaunay-triangulate a point set via incremental Bowyer–Watson insertion.
///
/// Output is a list of CCW-oriented vertex-index triples into `points`.
/// Degenerate inputs (collinear sets, < 3 points) yield an empty list rather
/// than an error — the shatter pipeline treats that as "no fragments".
pub fn triangulate_delaunay(points: &[Vec2]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    // Working copy with a super-triangle large enough to contain every point.
    let mut pts: Vec<Vec2> = points.to_vec();
    let mut min = pts[0];
    let mut max = pts[0];
    for p in &pts {
        min = min.min(*p);
        max = max.max(*p);
    }
    let span = (max - min).max_element().max(1.0);
    let mid = (min + max) / 2.0;
    pts.push(Vec2::new(mid.x - 20.0 * span, mid.y - span));
    pts.push(Vec2::new(mid.x, mid.y + 20.0 * span));
    pts.push(Vec2::new(mid.x + 20.0 * span, mid.y - span));

    let mut tris: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];

    for p in 0..n {
        // Triangles whose circumcircle contains the new point are invalid.
        let mut bad: Vec<usize> = Vec::new();
        for (i, t) in tris.iter().enumerate() {
            if in_circumcircle(pts[t[0]], pts[t[1]], pts[t[2]], pts[p]) {
                bad.push(i);
            }
        }

        // The cavity boundary is every edge owned by exactly one bad triangle.
        let mut edges: Vec<(usize, usize)> = Vec::new();
        for &i in &bad {
            let t = tris[i];
            for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                if let Some(pos) = edges
                    .iter()
                    .position(|&(ea, eb)| (ea, eb) == (b, a) || (ea, eb) == (a, b))
                {
                    edges.remove(pos);
                } else {
                    edges.push((a, b));
                }
            }
        }

        for &i in bad.iter().rev() {
            tris.swap_remove(i);
        }
        for (a, b) in edges {
            tris.push([a, b, p]);
        }
    }

    // Drop anything still attached to the super-triangle, plus zero-area
    // slivers produced by collinear input runs.
    tris.retain(|t| t.iter().all(|&i| i < n));
    tris.retain(|t| polygon_area(&[points[t[0]], points[t[1]], points[t[2]]]) > 1e-6);

    for t in &mut tris {
        orient_ccw(points, t);
    }
    tris
}

/// Circumcircle containment test, evaluated in f64 to keep the determinant
/// stable for the small coordinate magnitudes asteroids use.
fn in_circumcircle(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    let ax = (a.x - p.x) as f64;
    let ay = (a.y - p.y) as f64;
    let bx = (b.x - p.x) as f64;
    let by = (b.y - p.y) as f64;
    let cx = (c.x - p.x) as f64;
    let cy = (c.y - p.y) as f64;

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);

    // The determinant's sign convention flips with triangle orientation.
    let orient = (b.x - a.x) as f64 * (c.y - a.y) as f64 - (b.y - a.y) as f64 * (c.x - a.x) as f64;
    if orient > 0.0 {
        det > 0.0
    } else {
        det < 0.0
    }
}

fn orient_ccw(points: &[Vec2], t: &mut [usize; 3]) {
    let ab = points[t[1]] - points[t[0]];
    let ac = points[t[2]] - points[t[0]];
    if cross(ab, ac) < 0.0 {
        t.swap(1, 2);
    }
}

// ── Ear clipping ──────────────────────────────────────────────────────────────

/// Triangulate a simple polygon by ear clipping.
///
/// Accepts either winding (internally works CCW) and returns CCW-oriented
/// vertex-index triples into `ring`.  Used as the shatter fallback when
/// Delaunay insertion produces nothing usable.
pub fn triangulate_ear_clip(ring: &[Vec2]) -> Vec<[usize; 3]> {
    let n = ring.len();
    if n < 3 {
        return Vec::new();
    }

    let mut idx: Vec<usize> = (0..n).collect();
    if polygon_area_signed(ring) < 0.0 {
        idx.reverse();
    }

    let mut tris = Vec::with_capacity(n - 2);
    while idx.len() > 3 {
        let m = idx.len();
        let mut clipped = false;
        for i in 0..m {
            let prev = idx[(i + m - 1) % m];
            let cur = idx[i];
            let next = idx[(i + 1) % m];
            let (a, b, c) = (ring[prev], ring[cur], ring[next]);

            // Reflex vertices cannot be ears.
            if cross(b - a, c - b) <= 0.0 {
                continue;
            }
            // An ear must not contain any other remaining vertex.
            let blocked = idx
                .iter()
                .filter(|&&j| j != prev && j != cur && j != next)
                .any(|&j| point_in_triangle(ring[j], a, b, c));
            if blocked {
                continue;
            }

            tris.push([prev, cur, next]);
            idx.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            // Degenerate ring (collinear runs, self-touching input).  Clip
            // blindly to guarantee progress; invalid slivers are filtered by
            // the caller's duplicate/area checks.
            tris.push([idx[0], idx[1], idx[2]]);
            idx.remove(1);
        }
    }
    tris.push([idx[0], idx[1], idx[2]]);

    for t in &mut tris {
        orient_ccw(ring, t);
    }
    tris
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross(b - a, p - a);
    let d2 = cross(c - b, p - b);
    let d3 = cross(a - c, p - c);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
