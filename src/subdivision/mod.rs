// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Planedge Contributors
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Incremental Delaunay subdivision.
//!
//! The mesh starts as one triangular frame face and grows by point
//! insertion: locate the enclosing face by walking edges, fan new spokes
//! out of the site, then legalize suspect edges by the empty-circle test
//! until the cascade settles.

use ahash::AHashSet;

use crate::cancel::CancelToken;
use crate::error::{ErrInvalid, Error, Result};
use crate::geometry::{Line, Point};
use crate::kernel::predicates::{in_circle, triangle_containing, FRAME_BUFFER};
use crate::kernel::winding::Order;
use crate::numeric::compare;
use crate::quadedge::validate::{crossing_defects, validate_ring};
use crate::quadedge::{Edge, EdgePool};

/// A planar subdivision whose triangles satisfy the Delaunay empty-circle
/// property. Not safe for concurrent mutation; independent subdivisions
/// may be built in parallel.
#[derive(Debug, Clone)]
pub struct Subdivision {
    pool: EdgePool,
    order: Order,
    frame: [Point; 3],
    starting_edge: Edge,
    ptcount: usize,
}

impl Subdivision {
    /// Build the initial subdivision from three frame points: one
    /// triangular face, with the `a -> b` edge as the entry point for
    /// location.
    pub fn new(order: Order, a: Point, b: Point, c: Point) -> Result<Self> {
        for p in [a, b, c] {
            if !p.is_finite() {
                return Err(Error::invalid_input("frame point is not finite"));
            }
        }
        if order.of_points(a, b, c).is_colinear() {
            return Err(Error::DegenerateFrame);
        }

        let mut pool = EdgePool::new();
        let ea = pool.make_edge_with_endpoints(a, b);
        let eb = pool.make_edge_with_endpoints(b, c);
        let ec = pool.make_edge_with_endpoints(c, a);
        pool.splice(ea.sym(), eb);
        pool.splice(eb.sym(), ec);
        pool.splice(ec.sym(), ea);

        Ok(Self {
            pool,
            order,
            frame: [a, b, c],
            starting_edge: ea,
            ptcount: 3,
        })
    }

    /// Frame the points in a containing triangle and insert them in order.
    /// The token is polled between insertions; cancelling aborts with
    /// [`Error::Cancelled`].
    pub fn new_for_points(ctx: &CancelToken, order: Order, points: &[Point]) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_input("no points to triangulate"));
        }
        for p in points {
            if !p.is_finite() {
                return Err(Error::invalid_input("point is not finite"));
            }
        }
        let frame = triangle_containing(points, FRAME_BUFFER);
        let mut sd = Self::new(order, frame[0], frame[1], frame[2])?;
        sd.insert_points(ctx, points)?;
        Ok(sd)
    }

    /// Insert both endpoints of every segment as sites.
    ///
    /// The segments themselves are not forced into the mesh: constraint
    /// edges are an explicit, separate mode (see
    /// [`Subdivision::new_for_lines_constrained`]).
    pub fn new_for_lines(lines: &[Line], order: Order) -> Result<Self> {
        let mut points = Vec::with_capacity(lines.len() * 2);
        for l in lines {
            points.push(l.a);
            points.push(l.b);
        }
        Self::new_for_points(&CancelToken::new(), order, &points)
    }

    /// Constrained-edge construction is not wired through yet; asking for
    /// it is an explicit, reportable condition rather than a silently
    /// unconstrained result.
    pub fn new_for_lines_constrained(_lines: &[Line], _order: Order) -> Result<Self> {
        Err(Error::unsupported("constrained edge insertion"))
    }

    /// Insert `points` in order, polling the token between insertions. On
    /// cancellation the subdivision stays valid and keeps every point
    /// inserted so far.
    pub fn insert_points(&mut self, ctx: &CancelToken, points: &[Point]) -> Result<()> {
        for p in points {
            if ctx.is_cancelled() {
                return Err(Error::Cancelled);
            }
            self.insert_site(*p)?;
        }
        Ok(())
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn frame(&self) -> [Point; 3] {
        self.frame
    }

    pub fn is_frame_point(&self, p: Point) -> bool {
        self.frame.iter().any(|f| compare::point_equal(*f, p))
    }

    /// Number of vertices, frame points included.
    pub fn point_count(&self) -> usize {
        self.ptcount
    }

    pub fn starting_edge(&self) -> Edge {
        self.starting_edge
    }

    pub fn pool(&self) -> &EdgePool {
        &self.pool
    }

    /// The edge's segment, when both endpoints are set.
    pub fn line(&self, e: Edge) -> Option<Line> {
        self.pool.line(e)
    }

    /// Walk edges from the starting edge toward the face containing `x`.
    ///
    /// Returns an edge with `x` on one of its endpoints, or an edge whose
    /// left face contains `x`. Revisiting a directed edge means the walk
    /// is orbiting; that fails with [`Error::LocateCycle`] and leaves the
    /// subdivision intact for a retry from a different starting edge.
    pub fn locate(&self, x: Point) -> Result<Edge> {
        let yflip = self.order.y_positive_down;
        let mut e = self.starting_edge;
        let mut seen = AHashSet::new();

        loop {
            if !seen.insert(self.pool.id(e)) {
                log::debug!("locate ({}, {}) revisited edge {}", x.x, x.y, self.pool.id(e));
                return Err(Error::LocateCycle);
            }
            let (Some(org), Some(dst)) = (self.pool.orig(e), self.pool.dest(e)) else {
                return Err(Error::assumption("located an edge without endpoints"));
            };
            if compare::point_equal(x, org) || compare::point_equal(x, dst) {
                return Ok(e);
            }
            if self.pool.right_of(yflip, x, e) {
                e = e.sym();
            } else if !self.pool.right_of(yflip, x, self.pool.onext(e)) {
                e = self.pool.onext(e);
            } else if !self.pool.right_of(yflip, x, self.pool.dprev(e)) {
                e = self.pool.dprev(e);
            } else {
                return Ok(e);
            }
        }
    }

    /// Insert a site, keeping the subdivision Delaunay.
    ///
    /// Returns `Ok(false)` when `x` coincides with an existing vertex (the
    /// insert is idempotent), `Ok(true)` when the mesh grew.
    pub fn insert_site(&mut self, x: Point) -> Result<bool> {
        if !x.is_finite() {
            return Err(Error::invalid_input("site is not finite"));
        }
        let yflip = self.order.y_positive_down;
        let mut e = self.locate(x)?;

        let (Some(org), Some(dst)) = (self.pool.orig(e), self.pool.dest(e)) else {
            return Err(Error::assumption("located an edge without endpoints"));
        };
        if compare::point_equal(x, org) || compare::point_equal(x, dst) {
            log::trace!("insert ({}, {}): already a vertex", x.x, x.y);
            return Ok(false);
        }

        if self.pool.on_edge(x, e) {
            // the located edge's interior holds x; remove it and work from
            // the face that now spans both of its old faces
            e = self.pool.oprev(e);
            let dead = self.pool.onext(e);
            self.pool.delete(dead);
        }

        let org = self
            .pool
            .orig(e)
            .ok_or_else(|| Error::assumption("spoke origin missing"))?;
        let mut base = self.pool.make_edge_with_endpoints(org, x);
        self.pool.splice(base, e);
        self.starting_edge = base;

        // fan spokes around the face until the star closes
        loop {
            base = self
                .pool
                .connect(e, base.sym(), self.order)
                .map_err(|err| Error::assumption(format!("closing the star ring: {err}")))?;
            e = self.pool.oprev(base);
            if self.pool.lnext(e) == self.starting_edge {
                break;
            }
        }

        // legalize suspect edges radiating from the new star
        loop {
            let t = self.pool.oprev(e);
            let (Some(t_dest), Some(e_org), Some(e_dest)) =
                (self.pool.dest(t), self.pool.orig(e), self.pool.dest(e))
            else {
                return Err(Error::assumption("suspect edge missing endpoints"));
            };

            if self.pool.right_of(yflip, t_dest, e)
                && in_circle(self.order, e_org, t_dest, e_dest, x)
            {
                self.pool.swap(e);
                e = self.pool.oprev(e);
            } else if self.pool.onext(e) == self.starting_edge {
                // no more suspect edges
                self.ptcount += 1;
                log::trace!("inserted site ({}, {})", x.x, x.y);
                return Ok(true);
            } else {
                // pop to the next suspect edge
                e = self.pool.lprev(self.pool.onext(e));
            }
        }
    }

    /// Visit every reachable quad once, through whichever directed edge
    /// reaches it first. Yield order is deterministic: depth-first from the
    /// starting edge, origin ring before destination ring.
    pub fn walk_all_edges<E, F>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(Edge) -> std::result::Result<(), E>,
    {
        let mut stack = vec![self.starting_edge];
        let mut visited = AHashSet::new();
        while let Some(e) = stack.pop() {
            if !visited.insert(e.quad()) {
                continue;
            }
            f(e)?;
            stack.push(self.pool.onext(e));
            stack.push(self.pool.onext(e.sym()));
        }
        Ok(())
    }

    /// Every undirected edge as a segment.
    pub fn edges(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        let _ = self.walk_all_edges::<(), _>(|e| {
            if let Some(l) = self.pool.line(e) {
                lines.push(l);
            }
            Ok(())
        });
        lines
    }

    /// Distinct triangular faces of the subdivision. Faces touching a
    /// frame vertex are skipped unless `include_frame` is set.
    pub fn triangles(&self, include_frame: bool) -> Vec<[Point; 3]> {
        let mut seen: AHashSet<[u64; 6]> = AHashSet::new();
        let mut tris = Vec::new();
        let _ = self.walk_all_edges::<(), _>(|e| {
            for start in [e, e.sym()] {
                let e2 = self.pool.lnext(start);
                let e3 = self.pool.lnext(e2);
                if self.pool.lnext(e3) != start {
                    continue;
                }
                let (Some(a), Some(b), Some(c)) = (
                    self.pool.orig(start),
                    self.pool.orig(e2),
                    self.pool.orig(e3),
                ) else {
                    continue;
                };
                if !include_frame
                    && (self.is_frame_point(a) || self.is_frame_point(b) || self.is_frame_point(c))
                {
                    continue;
                }
                let mut key = [a, b, c].map(|p| (p.x.to_bits(), p.y.to_bits()));
                key.sort_unstable();
                let flat = [
                    key[0].0, key[0].1, key[1].0, key[1].1, key[2].0, key[2].1,
                ];
                if seen.insert(flat) {
                    tris.push([a, b, c]);
                }
            }
            Ok(())
        });
        tris
    }

    /// Audit the whole subdivision: every reachable vertex ring, plus a
    /// global certification that no two edges cross in their interiors.
    /// All defects are accumulated into one [`Error::ValidateFailed`].
    pub fn validate(&self, ctx: &CancelToken) -> Result<()> {
        let mut err = ErrInvalid::default();
        let mut lines: Vec<Line> = Vec::new();

        self.walk_all_edges(|e| {
            if ctx.is_cancelled() {
                return Err(Error::Cancelled);
            }
            for dir in [e, e.sym()] {
                if let Err(ring_err) = validate_ring(&self.pool, dir, self.order) {
                    err.reasons.extend(ring_err.reasons);
                }
            }
            if let Some(l) = self.pool.line(e) {
                lines.push(l);
            }
            Ok(())
        })?;

        crossing_defects(&lines, &mut err);

        if err.is_empty() {
            Ok(())
        } else {
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn degenerate_frame_is_rejected() {
        let order = Order::default();
        let err = Subdivision::new(order, p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)).unwrap_err();
        assert_eq!(err, Error::DegenerateFrame);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let order = Order::default();
        let err =
            Subdivision::new(order, p(f64::NAN, 0.0), p(5.0, 0.0), p(0.0, 10.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));

        let err = Subdivision::new_for_points(
            &CancelToken::new(),
            order,
            &[p(0.0, 0.0), p(f64::INFINITY, 1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn empty_point_set_is_rejected() {
        let err = Subdivision::new_for_points(&CancelToken::new(), Order::default(), &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn constrained_mode_is_gated() {
        let err = Subdivision::new_for_lines_constrained(
            &[Line::new(p(0.0, 0.0), p(1.0, 1.0))],
            Order::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
    }

    #[test]
    fn lines_insert_their_endpoints() {
        let sd = Subdivision::new_for_lines(
            &[Line::new(p(0.0, 0.0), p(0.0, -6.0))],
            Order::default(),
        )
        .unwrap();
        // two sites plus the frame
        assert_eq!(sd.point_count(), 5);
        sd.validate(&CancelToken::new()).unwrap();
    }

    #[test]
    fn interior_triangles_skip_the_frame() {
        let points = [p(0.0, 0.0), p(0.0, -6.0), p(-6.0, 6.0), p(6.0, 6.0)];
        let sd =
            Subdivision::new_for_points(&CancelToken::new(), Order::default(), &points).unwrap();

        let all = sd.triangles(true);
        let interior = sd.triangles(false);
        assert!(interior.len() < all.len());
        // (0, 0) sits inside the hull triangle of the other three sites,
        // splitting it into three interior faces
        assert_eq!(interior.len(), 3);
        for tri in interior {
            for v in tri {
                assert!(!sd.is_frame_point(v));
            }
        }
    }

    #[test]
    fn accumulated_defects_are_all_reported() {
        let mut sd = Subdivision::new(
            Order::default(),
            p(-100.0, -100.0),
            p(0.0, 100.0),
            p(100.0, -100.0),
        )
        .unwrap();

        let ea = sd.starting_edge;
        let eb = sd.pool.onext(ea.sym());
        sd.pool.clobber_vertex(ea.sym());
        sd.pool.set_next(ea, eb);

        let err = sd.validate(&CancelToken::new()).unwrap_err();
        let Error::ValidateFailed { reasons } = err else {
            panic!("expected ValidateFailed, got {err:?}");
        };
        assert!(reasons.iter().any(|r| r.contains("ring not closed")));
        assert!(reasons.iter().any(|r| r.contains("missing sym")));
        assert!(reasons.len() >= 2);
    }
}
