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

//! Geometric predicates over f64 coordinates.

use crate::geometry::{Line, Point};
use crate::kernel::winding::Order;
use crate::numeric::compare::{self, Compare};

/// Twice the signed area of triangle `abc`. Positive when `abc` is
/// counter-clockwise in the mathematical (y-up) convention.
#[inline]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Is `d` strictly inside the circle through `a`, `b`, `c`?
///
/// Lifting-map determinant: rows are `(p - d, |p - d|²)` for `p` in
/// `a, b, c`. Positive when `d` is inside and `abc` winds
/// counter-clockwise under `order`. Determinants within tolerance of zero
/// are treated as on-circle, which keeps cascades from flipping cocircular
/// quads forever.
pub fn in_circle(order: Order, a: Point, b: Point, c: Point, d: Point) -> bool {
    let adx = a.x - d.x;
    let ady = a.y - d.y;
    let bdx = b.x - d.x;
    let bdy = b.y - d.y;
    let cdx = c.x - d.x;
    let cdy = c.y - d.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    let mut det = alift * (bdx * cdy - bdy * cdx) - blift * (adx * cdy - ady * cdx)
        + clift * (adx * bdy - ady * bdx);
    if order.y_positive_down {
        det = -det;
    }
    if compare::float(det, 0.0) {
        return false;
    }
    det > 0.0
}

/// Does `p` lie on the segment `l`, within the comparator's tolerance?
///
/// Colinearity first, then a per-axis range check expanded by the
/// comparator's absolute epsilon.
pub fn is_point_on_segment(cmp: &Compare, p: Point, l: Line) -> bool {
    if !cmp.float(signed_area(l.a, l.b, p), 0.0) {
        return false;
    }
    let eps = cmp.tolerance();
    let (minx, maxx) = if l.a.x < l.b.x {
        (l.a.x, l.b.x)
    } else {
        (l.b.x, l.a.x)
    };
    let (miny, maxy) = if l.a.y < l.b.y {
        (l.a.y, l.b.y)
    } else {
        (l.b.y, l.a.y)
    };
    p.x >= minx - eps && p.x <= maxx + eps && p.y >= miny - eps && p.y <= maxy + eps
}

/// Buffer used when framing a point set in a containing triangle.
pub const FRAME_BUFFER: f64 = 10.0;

/// An isoceles triangle strictly containing `pts`: a horizontal base below
/// the extent and an apex above it, all scaled out from the extent spans so
/// no input point lands on the boundary.
///
/// Returned in (left base, apex, right base) order.
pub fn triangle_containing(pts: &[Point], buff: f64) -> [Point; 3] {
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    for p in pts {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }

    let xlen = maxx - minx;
    let ylen = maxy - miny;
    let cx = (minx + maxx) / 2.0;

    let half = (1.0 + buff) * xlen / 2.0 + buff;
    let base_y = miny - buff * (ylen + 1.0);
    let apex_y = maxy + buff * (2.0 * ylen + 1.0);

    [
        Point::new(cx - half, base_y),
        Point::new(cx, apex_y),
        Point::new(cx + half, base_y),
    ]
}
