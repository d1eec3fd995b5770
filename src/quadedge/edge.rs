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

//! Edge handles and the arena that owns them.
//!
//! A quad record bundles the four directed edges of one undirected edge:
//! slot 0 is the canonical primal direction, slot 2 its reverse, slots 1
//! and 3 the two duals. A handle packs `(quad, slot)` into one index, so
//! `rot`, `inv_rot` and `sym` are plain arithmetic and only `onext` touches
//! storage. The arena recycles freed quads through a free list; ids come
//! from a process-wide monotonic counter and are restamped on reuse, so an
//! id never repeats.

use std::sync::atomic::{AtomicU64, Ordering};

use ahash::AHashSet;

use crate::geometry::{Line, Point};
use crate::numeric::compare;

static EDGE_ID: AtomicU64 = AtomicU64::new(0);

/// A directed edge: `(quad index << 2) | slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge(usize);

impl Edge {
    #[inline]
    pub(crate) fn pack(quad: usize, slot: usize) -> Self {
        Edge((quad << 2) | (slot & 3))
    }

    #[inline]
    pub fn quad(self) -> usize {
        self.0 >> 2
    }

    #[inline]
    pub fn slot(self) -> usize {
        self.0 & 3
    }

    /// The dual edge, directed from the right face to the left face.
    #[inline]
    pub fn rot(self) -> Edge {
        Edge((self.0 & !3) | ((self.0 + 1) & 3))
    }

    /// The dual edge, directed from the left face to the right face.
    #[inline]
    pub fn inv_rot(self) -> Edge {
        Edge((self.0 & !3) | ((self.0 + 3) & 3))
    }

    /// The reverse edge, from destination to origin.
    #[inline]
    pub fn sym(self) -> Edge {
        Edge(self.0 ^ 2)
    }
}

#[derive(Debug, Clone)]
struct Quad {
    next: [Edge; 4],
    vertex: [Option<Point>; 4],
    base_id: u64,
    live: bool,
}

/// Arena of quad records.
#[derive(Debug, Default, Clone)]
pub struct EdgePool {
    quads: Vec<Quad>,
    free: Vec<usize>,
}

impl EdgePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live quads (undirected edges).
    pub fn len(&self) -> usize {
        self.quads.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocate a fresh, unconnected quad and return its canonical edge.
    ///
    /// The primal slots start as isolated origin loops; the duals form a
    /// two-cycle, so the new edge's left and right faces are one face.
    pub fn make_edge(&mut self) -> Edge {
        let base_id = EDGE_ID.fetch_add(4, Ordering::Relaxed);
        let qi = match self.free.pop() {
            Some(qi) => qi,
            None => {
                self.quads.push(Quad {
                    next: [Edge(0); 4],
                    vertex: [None; 4],
                    base_id: 0,
                    live: false,
                });
                self.quads.len() - 1
            }
        };
        let quad = &mut self.quads[qi];
        quad.next = [
            Edge::pack(qi, 0),
            Edge::pack(qi, 3),
            Edge::pack(qi, 2),
            Edge::pack(qi, 1),
        ];
        quad.vertex = [None; 4];
        quad.base_id = base_id;
        quad.live = true;
        Edge::pack(qi, 0)
    }

    pub fn make_edge_with_endpoints(&mut self, org: Point, dest: Point) -> Edge {
        let e = self.make_edge();
        self.set_endpoints(e, org, dest);
        e
    }

    /// Detach a quad's storage and hand it to the free list. The caller is
    /// responsible for having spliced it out first.
    pub(crate) fn free(&mut self, e: Edge) {
        let qi = e.quad();
        let quad = &mut self.quads[qi];
        if !quad.live {
            return;
        }
        quad.live = false;
        quad.vertex = [None; 4];
        self.free.push(qi);
    }

    #[inline]
    pub fn onext(&self, e: Edge) -> Edge {
        self.quads[e.quad()].next[e.slot()]
    }

    #[inline]
    pub(crate) fn set_next(&mut self, e: Edge, next: Edge) {
        self.quads[e.quad()].next[e.slot()] = next;
    }

    /// Next clockwise edge out of the same origin.
    #[inline]
    pub fn oprev(&self, e: Edge) -> Edge {
        self.onext(e.rot()).rot()
    }

    /// Next counter-clockwise edge into the same destination.
    #[inline]
    pub fn dnext(&self, e: Edge) -> Edge {
        self.onext(e.sym()).sym()
    }

    /// Next clockwise edge into the same destination.
    #[inline]
    pub fn dprev(&self, e: Edge) -> Edge {
        self.onext(e.inv_rot()).inv_rot()
    }

    /// Next counter-clockwise edge around the left face.
    #[inline]
    pub fn lnext(&self, e: Edge) -> Edge {
        self.onext(e.inv_rot()).rot()
    }

    /// Previous counter-clockwise edge around the left face.
    #[inline]
    pub fn lprev(&self, e: Edge) -> Edge {
        self.onext(e).sym()
    }

    /// Next counter-clockwise edge around the right face.
    #[inline]
    pub fn rnext(&self, e: Edge) -> Edge {
        self.onext(e.rot()).inv_rot()
    }

    /// Previous counter-clockwise edge around the right face.
    #[inline]
    pub fn rprev(&self, e: Edge) -> Edge {
        self.onext(e.sym())
    }

    pub fn orig(&self, e: Edge) -> Option<Point> {
        self.quads[e.quad()].vertex[e.slot()]
    }

    pub fn dest(&self, e: Edge) -> Option<Point> {
        self.orig(e.sym())
    }

    pub fn set_endpoints(&mut self, e: Edge, org: Point, dest: Point) {
        self.quads[e.quad()].vertex[e.slot()] = Some(org);
        self.quads[e.quad()].vertex[e.sym().slot()] = Some(dest);
    }

    #[cfg(test)]
    pub(crate) fn clobber_vertex(&mut self, e: Edge) {
        self.quads[e.quad()].vertex[e.slot()] = None;
    }

    /// Unique id of this directed edge.
    pub fn id(&self, e: Edge) -> u64 {
        self.quads[e.quad()].base_id + e.slot() as u64
    }

    /// The edge's segment, when both endpoints are set.
    pub fn line(&self, e: Edge) -> Option<Line> {
        Some(Line::new(self.orig(e)?, self.dest(e)?))
    }

    /// Splice the origin rings (and, through the duals, the left-face
    /// rings) of `a` and `b`: distinct rings merge, one ring splits.
    /// Applying it twice restores the prior topology.
    pub fn splice(&mut self, a: Edge, b: Edge) {
        let alpha = self.onext(a).rot();
        let beta = self.onext(b).rot();

        let t1 = self.onext(b);
        let t2 = self.onext(a);
        let t3 = self.onext(beta);
        let t4 = self.onext(alpha);

        self.set_next(a, t1);
        self.set_next(b, t2);
        self.set_next(alpha, t3);
        self.set_next(beta, t4);
    }

    /// Walk the origin ring counter-clockwise from `e`; stop when the walk
    /// closes or `f` returns false.
    pub fn walk_onext(&self, e: Edge, mut f: impl FnMut(Edge) -> bool) {
        let mut seen = AHashSet::new();
        let mut cur = e;
        while seen.insert(self.id(cur)) {
            if !f(cur) {
                return;
            }
            cur = self.onext(cur);
        }
    }

    /// Walk the origin ring clockwise from `e`.
    pub fn walk_oprev(&self, e: Edge, mut f: impl FnMut(Edge) -> bool) {
        let mut seen = AHashSet::new();
        let mut cur = e;
        while seen.insert(self.id(cur)) {
            if !f(cur) {
                return;
            }
            cur = self.oprev(cur);
        }
    }

    /// Number of edges in the origin ring at `e`.
    pub fn ring_len(&self, e: Edge) -> usize {
        let mut n = 0;
        self.walk_onext(e, |_| {
            n += 1;
            true
        });
        n
    }

    /// The ring edge whose destination equals `dest`, if any.
    pub fn find_onext_dest(&self, e: Edge, dest: Point) -> Option<Edge> {
        let mut found = None;
        self.walk_onext(e, |ee| {
            if self
                .dest(ee)
                .is_some_and(|d| compare::point_equal(d, dest))
            {
                found = Some(ee);
                false
            } else {
                true
            }
        });
        found
    }
}
