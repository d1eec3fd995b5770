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

//! Topological operators layered on splice.

use smallvec::SmallVec;

use crate::error::Error;
use crate::geometry::{Line, Point};
use crate::kernel::predicates::is_point_on_segment;
use crate::kernel::winding::{Order, Winding};
use crate::numeric::compare;
use crate::quadedge::edge::{Edge, EdgePool};

impl EdgePool {
    /// Add a new edge from `dest(a)` to `orig(b)` so that `a`, the new
    /// edge and `b` share a left face afterwards.
    ///
    /// `b` is first resolved to the member of its origin ring whose sector
    /// faces `dest(a)`, which disambiguates vertices with several incident
    /// edges.
    pub fn connect(&mut self, a: Edge, b: Edge, order: Order) -> Result<Edge, Error> {
        let a_dest = self
            .dest(a)
            .ok_or_else(|| Error::invalid_input("connect: edge has no destination"))?;
        let bb = self.resolve_edge(order, b, a_dest)?;
        let b_orig = self
            .orig(bb)
            .ok_or_else(|| Error::invalid_input("connect: edge has no origin"))?;

        log::trace!(
            "connect ({}, {}) -> ({}, {})",
            a_dest.x,
            a_dest.y,
            b_orig.x,
            b_orig.y
        );

        let e = self.make_edge_with_endpoints(a_dest, b_orig);
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        self.splice(e.sym(), bb);
        Ok(e)
    }

    /// Turn `e` counter-clockwise inside its enclosing quadrilateral.
    pub fn swap(&mut self, e: Edge) {
        let a = self.oprev(e);
        let b = self.oprev(e.sym());

        self.splice(e, a);
        self.splice(e.sym(), b);
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        let b_lnext = self.lnext(b);
        self.splice(e.sym(), b_lnext);

        if let (Some(ad), Some(bd)) = (self.dest(a), self.dest(b)) {
            self.set_endpoints(e, ad, bd);
        }
    }

    /// Splice `e` out of both of its vertex rings and recycle its quad.
    pub fn delete(&mut self, e: Edge) {
        let oprev = self.oprev(e);
        self.splice(e, oprev);
        let sym_oprev = self.oprev(e.sym());
        self.splice(e.sym(), sym_oprev);
        self.free(e);
    }

    /// Is `p` on the closed segment `[orig(e), dest(e)]`?
    pub fn on_edge(&self, p: Point, e: Edge) -> bool {
        match (self.orig(e), self.dest(e)) {
            (Some(org), Some(dst)) => {
                is_point_on_segment(&compare::DEFAULT, p, Line::new(org, dst))
            }
            _ => false,
        }
    }

    /// Is `p` strictly right of the directed edge `e`?
    pub fn right_of(&self, yflip: bool, p: Point, e: Edge) -> bool {
        let order = Order {
            y_positive_down: yflip,
        };
        match (self.orig(e), self.dest(e)) {
            (Some(org), Some(dst)) => order.of_points(org, dst, p).is_clockwise(),
            _ => false,
        }
    }

    /// The edge of the origin ring at `e` whose counter-clockwise sector
    /// (from it to its `onext`) contains the direction toward `target`.
    ///
    /// Fails with `InvalidInput` when `target` coincides with the ring
    /// origin or no sector matches; callers treat that as bad input, not a
    /// broken mesh.
    pub fn resolve_edge(&self, order: Order, e: Edge, target: Point) -> Result<Edge, Error> {
        let orig = self
            .orig(e)
            .ok_or_else(|| Error::invalid_input("resolve: ring edge has no origin"))?;
        if compare::point_equal(orig, target) {
            return Err(Error::invalid_input(
                "resolve: target coincides with the ring origin",
            ));
        }

        let mut ring: SmallVec<[Edge; 8]> = SmallVec::new();
        self.walk_onext(e, |ee| {
            ring.push(ee);
            true
        });
        if ring.len() == 1 {
            return Ok(e);
        }

        let forward = |dest: Point| {
            (dest.x - orig.x) * (target.x - orig.x) + (dest.y - orig.y) * (target.y - orig.y) > 0.0
        };

        for i in 0..ring.len() {
            let cur = ring[i];
            let next = ring[(i + 1) % ring.len()];
            let (Some(dc), Some(dn)) = (self.dest(cur), self.dest(next)) else {
                continue;
            };

            let wc = order.of_points(orig, dc, target);
            if wc.is_colinear() && forward(dc) {
                return Ok(cur);
            }
            let wn = order.of_points(orig, dn, target);

            // sector swept counter-clockwise from cur to next
            let contains = match order.of_points(orig, dc, dn) {
                Winding::CounterClockwise => {
                    wc.is_counter_clockwise() && wn.is_clockwise()
                }
                Winding::Clockwise => wc.is_counter_clockwise() || wn.is_clockwise(),
                Winding::Colinear => wc.is_counter_clockwise(),
            };
            if contains {
                return Ok(cur);
            }
        }

        Err(Error::invalid_input(
            "resolve: no ring sector contains the target direction",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Three spokes out of the origin toward east, north and west.
    fn spoked_pool() -> (EdgePool, [Edge; 3]) {
        let mut pool = EdgePool::new();
        let origin = p(0.0, 0.0);
        let east = pool.make_edge_with_endpoints(origin, p(10.0, 0.0));
        let north = pool.make_edge_with_endpoints(origin, p(0.0, 10.0));
        let west = pool.make_edge_with_endpoints(origin, p(-10.0, 0.0));
        pool.splice(east, north);
        pool.splice(north, west);
        (pool, [east, north, west])
    }

    #[test]
    fn resolve_picks_the_containing_sector() {
        let (pool, [east, north, west]) = spoked_pool();
        let order = Order::default();

        // between east and north
        assert_eq!(
            pool.resolve_edge(order, east, p(5.0, 5.0)).unwrap(),
            east
        );
        // between north and west
        assert_eq!(
            pool.resolve_edge(order, east, p(-5.0, 5.0)).unwrap(),
            north
        );
        // the reflex sector below spans west around to east
        assert_eq!(
            pool.resolve_edge(order, east, p(0.0, -5.0)).unwrap(),
            west
        );
        // along a spoke
        assert_eq!(
            pool.resolve_edge(order, east, p(20.0, 0.0)).unwrap(),
            east
        );
    }

    #[test]
    fn resolve_rejects_the_ring_origin() {
        let (pool, [east, _, _]) = spoked_pool();
        let err = pool
            .resolve_edge(Order::default(), east, p(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn delete_detaches_both_rings() {
        let (mut pool, [east, north, west]) = spoked_pool();
        assert_eq!(pool.ring_len(east), 3);
        pool.delete(north);
        assert_eq!(pool.ring_len(east), 2);
        assert_eq!(pool.onext(east), west);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn on_edge_and_right_of() {
        let mut pool = EdgePool::new();
        let e = pool.make_edge_with_endpoints(p(0.0, 0.0), p(10.0, 0.0));

        assert!(pool.on_edge(p(5.0, 0.0), e));
        assert!(!pool.on_edge(p(5.0, 3.0), e));

        // below the edge is to its right in math coordinates
        assert!(pool.right_of(false, p(5.0, -1.0), e));
        assert!(!pool.right_of(false, p(5.0, 1.0), e));
        // flipped under screen coordinates
        assert!(pool.right_of(true, p(5.0, 1.0), e));
        assert!(!pool.right_of(true, p(5.0, -1.0), e));
    }
}
