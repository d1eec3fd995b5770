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

//! Sweep-line intersection search over a batch of segments.
//!
//! Endpoint events are ordered by the tolerance-aware point comparator,
//! with left endpoints ahead of right endpoints at coincident sweep
//! positions so touching segments are examined while both are active.
//! Intersections are streamed to a callback; the caller decides whether an
//! endpoint touch counts.

use crate::cancel::CancelToken;
use crate::error::Error;
use crate::geometry::{Line, Point};
use crate::kernel::predicates::is_point_on_segment;
use crate::numeric::compare;

#[derive(Debug, Clone, Copy)]
struct Event {
    point: Point,
    seg: usize,
    is_left: bool,
}

/// Endpoint event queue over a fixed batch of segments.
#[derive(Debug, Clone)]
pub struct EventQueue {
    segments: Vec<Line>,
    events: Vec<Event>,
}

impl EventQueue {
    pub fn new(segments: Vec<Line>) -> Self {
        let mut events = Vec::with_capacity(segments.len() * 2);
        for (i, l) in segments.iter().enumerate() {
            let (left, right) = if compare::point_less(l.a, l.b) {
                (l.a, l.b)
            } else {
                (l.b, l.a)
            };
            events.push(Event {
                point: left,
                seg: i,
                is_left: true,
            });
            events.push(Event {
                point: right,
                seg: i,
                is_left: false,
            });
        }
        events.sort_by(|p, q| {
            p.point
                .x
                .total_cmp(&q.point.x)
                .then(p.point.y.total_cmp(&q.point.y))
                .then(q.is_left.cmp(&p.is_left))
        });
        Self { segments, events }
    }

    /// Sweep the events, reporting each intersecting pair `(src, dst)` and
    /// its point to `cb`. A `cb` error aborts the sweep and propagates;
    /// `stop_on_first` returns after the first report.
    pub fn find_intersects<F>(
        &self,
        ctx: &CancelToken,
        stop_on_first: bool,
        mut cb: F,
    ) -> Result<(), Error>
    where
        F: FnMut(usize, usize, Point) -> Result<(), Error>,
    {
        let mut active: Vec<usize> = Vec::new();
        for ev in &self.events {
            if ctx.is_cancelled() {
                return Err(Error::Cancelled);
            }
            if ev.is_left {
                for &other in &active {
                    if let Some(pt) =
                        segment_intersection(self.segments[other], self.segments[ev.seg])
                    {
                        cb(other, ev.seg, pt)?;
                        if stop_on_first {
                            return Ok(());
                        }
                    }
                }
                active.push(ev.seg);
            } else {
                active.retain(|&s| s != ev.seg);
            }
        }
        Ok(())
    }
}

/// Intersection point of two closed segments, if any.
///
/// Proper crossings return the crossing point; touches return the touch
/// point. Colinear overlaps report a contained endpoint. Parallel disjoint
/// segments return nothing.
pub fn segment_intersection(l1: Line, l2: Line) -> Option<Point> {
    let cmp = &*compare::DEFAULT;

    let d1x = l1.b.x - l1.a.x;
    let d1y = l1.b.y - l1.a.y;
    let d2x = l2.b.x - l2.a.x;
    let d2y = l2.b.y - l2.a.y;
    let qpx = l2.a.x - l1.a.x;
    let qpy = l2.a.y - l1.a.y;

    let denom = d1x * d2y - d1y * d2x;
    if cmp.float(denom, 0.0) {
        if !cmp.float(qpx * d1y - qpy * d1x, 0.0) {
            return None;
        }
        for pt in [l2.a, l2.b] {
            if is_point_on_segment(cmp, pt, l1) {
                return Some(pt);
            }
        }
        for pt in [l1.a, l1.b] {
            if is_point_on_segment(cmp, pt, l2) {
                return Some(pt);
            }
        }
        return None;
    }

    let t = (qpx * d2y - qpy * d2x) / denom;
    let u = (qpx * d1y - qpy * d1x) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(Point::new(l1.a.x + t * d1x, l1.a.y + t * d1y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(ax: f64, ay: f64, bx: f64, by: f64) -> Line {
        Line::new(Point::new(ax, ay), Point::new(bx, by))
    }

    fn collect(segs: Vec<Line>) -> Vec<(usize, usize, Point)> {
        let mut found = Vec::new();
        EventQueue::new(segs)
            .find_intersects(&CancelToken::new(), false, |s, d, p| {
                found.push((s, d, p));
                Ok(())
            })
            .unwrap();
        found
    }

    #[test]
    fn proper_crossing() {
        let found = collect(vec![l(0.0, 0.0, 10.0, 10.0), l(0.0, 10.0, 10.0, 0.0)]);
        assert_eq!(found.len(), 1);
        let (s, d, p) = found[0];
        assert_eq!((s.min(d), s.max(d)), (0, 1));
        assert!(compare::point_equal(p, Point::new(5.0, 5.0)));
    }

    #[test]
    fn disjoint_segments() {
        assert!(collect(vec![l(0.0, 0.0, 10.0, 0.0), l(0.0, 5.0, 10.0, 5.0)]).is_empty());
        assert!(collect(vec![l(0.0, 0.0, 1.0, 0.0), l(5.0, 0.0, 9.0, 0.0)]).is_empty());
    }

    #[test]
    fn endpoint_touch_is_reported() {
        let found = collect(vec![l(0.0, 0.0, 10.0, 0.0), l(10.0, 0.0, 20.0, 10.0)]);
        assert_eq!(found.len(), 1);
        assert!(compare::point_equal(found[0].2, Point::new(10.0, 0.0)));
    }

    #[test]
    fn t_junction_point() {
        let found = collect(vec![l(0.0, 0.0, 10.0, 0.0), l(5.0, -5.0, 5.0, 0.0)]);
        assert_eq!(found.len(), 1);
        assert!(compare::point_equal(found[0].2, Point::new(5.0, 0.0)));
    }

    #[test]
    fn stop_on_first_short_circuits() {
        let segs = vec![
            l(0.0, 0.0, 10.0, 10.0),
            l(0.0, 10.0, 10.0, 0.0),
            l(0.0, 5.0, 10.0, 5.0),
        ];
        let mut count = 0;
        EventQueue::new(segs)
            .find_intersects(&CancelToken::new(), true, |_, _, _| {
                count += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn callback_error_aborts() {
        let segs = vec![l(0.0, 0.0, 10.0, 10.0), l(0.0, 10.0, 10.0, 0.0)];
        let err = EventQueue::new(segs)
            .find_intersects(&CancelToken::new(), false, |_, _, _| {
                Err(Error::assumption("stop"))
            })
            .unwrap_err();
        assert!(matches!(err, Error::AssumptionFailed { .. }));
    }

    #[test]
    fn cancellation_wins() {
        let token = CancelToken::new();
        token.cancel();
        let err = EventQueue::new(vec![l(0.0, 0.0, 1.0, 1.0)])
            .find_intersects(&token, false, |_, _, _| Ok(()))
            .unwrap_err();
        assert_eq!(err, Error::Cancelled);
    }
}
