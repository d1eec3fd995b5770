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

//! Structural and geometric audit of a vertex ring.
//!
//! Every defect found is accumulated; the audit never stops at the first
//! problem, so one pass reports the complete damage.

use ahash::AHashSet;

use crate::cancel::CancelToken;
use crate::error::ErrInvalid;
use crate::geometry::{Line, Point};
use crate::intersect::EventQueue;
use crate::kernel::winding::Order;
use crate::numeric::compare;
use crate::quadedge::edge::{Edge, EdgePool};

/// Audit the origin ring at `e`.
///
/// Checks: the `onext` orbit closes back on `e`; every ring edge has both
/// endpoints (an unset destination means the sym direction lost its
/// vertex); all ring edges share the origin; destinations are unique;
/// `onext` advances counter-clockwise and `oprev` clockwise under `order`;
/// and no two ring segments cross away from their shared endpoints.
pub fn validate_ring(pool: &EdgePool, e: Edge, order: Order) -> Result<(), ErrInvalid> {
    let mut err = ErrInvalid::default();

    let Some(orig) = pool.orig(e) else {
        err.push("expected edge to have an origin");
        return Err(err);
    };

    // Snapshot the orbit by hand so a non-closing walk is observable.
    let mut ring: Vec<Edge> = Vec::new();
    let mut seen = AHashSet::new();
    let mut cur = e;
    loop {
        if !seen.insert(pool.id(cur)) {
            if cur != e {
                err.push(format!(
                    "ring not closed: onext walk re-entered at edge {} instead of {}",
                    pool.id(cur),
                    pool.id(e),
                ));
            }
            break;
        }
        ring.push(cur);
        cur = pool.onext(cur);
    }

    let mut dests: Vec<Point> = Vec::with_capacity(ring.len());
    let mut onext_ccw_count = 0i64;
    let mut oprev_cw_count = 0i64;

    for ee in &ring {
        let ee = *ee;
        match pool.orig(ee) {
            None => err.push(format!("edge {} has no origin", pool.id(ee))),
            Some(o) if !compare::point_equal(o, orig) => err.push(format!(
                "edge {} origin ({}, {}) differs from ring origin ({}, {})",
                pool.id(ee),
                o.x,
                o.y,
                orig.x,
                orig.y,
            )),
            Some(_) => {}
        }

        let Some(dest) = pool.dest(ee) else {
            err.push(format!("edge {} missing sym endpoint", pool.id(ee)));
            continue;
        };
        if let Some(prev) = dests.iter().find(|d| compare::point_equal(**d, dest)) {
            err.push(format!(
                "destination ({}, {}) duplicates ({}, {}) in the ring",
                dest.x, dest.y, prev.x, prev.y,
            ));
        }
        dests.push(dest);

        if let Some(onext_dest) = pool.dest(pool.onext(ee)) {
            match order.of_points(orig, dest, onext_dest) {
                w if w.is_counter_clockwise() => onext_ccw_count += 1,
                w if w.is_clockwise() => onext_ccw_count -= 1,
                _ => {}
            }
        }
        if let Some(oprev_dest) = pool.dest(pool.oprev(ee)) {
            match order.of_points(orig, dest, oprev_dest) {
                w if w.is_clockwise() => oprev_cw_count += 1,
                w if w.is_counter_clockwise() => oprev_cw_count -= 1,
                _ => {}
            }
        }
    }

    if dests.len() > 2 {
        if onext_ccw_count <= 0 {
            err.push("expected onext to advance counter-clockwise around the ring");
        }
        if oprev_cw_count <= 0 {
            err.push("expected oprev to advance clockwise around the ring");
        }

        // Ring spokes may only meet at shared endpoints.
        let segs: Vec<Line> = ring.iter().filter_map(|ee| pool.line(*ee)).collect();
        crossing_defects(&segs, &mut err);
    }

    if !err.is_empty() {
        log::debug!(
            "ring at ({}, {}) failed validation: {}",
            orig.x,
            orig.y,
            err
        );
    }
    err.into_result()
}

/// Report every interior crossing among `segs` into `err`. Intersections
/// at segment endpoints are touches, not defects.
pub(crate) fn crossing_defects(segs: &[Line], err: &mut ErrInvalid) {
    let endpoint_touch = |seg: &Line, pt: Point| {
        compare::point_equal(pt, seg.a) || compare::point_equal(pt, seg.b)
    };
    let queue = EventQueue::new(segs.to_vec());
    let _ = queue.find_intersects(&CancelToken::new(), false, |src, dst, pt| {
        if endpoint_touch(&segs[src], pt) || endpoint_touch(&segs[dst], pt) {
            return Ok(());
        }
        err.push(format!(
            "segments (({}, {}), ({}, {})) and (({}, {}), ({}, {})) cross at ({}, {})",
            segs[src].a.x,
            segs[src].a.y,
            segs[src].b.x,
            segs[src].b.y,
            segs[dst].a.x,
            segs[dst].a.y,
            segs[dst].b.x,
            segs[dst].b.y,
            pt.x,
            pt.y,
        ));
        Ok(())
    });
}
