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

//! Structural equality for geometry shells.
//!
//! Ring-valued containers normalize each ring to its leftmost point first,
//! so equality is independent of where a closed ring happens to start.

use crate::geometry::ring::rotate_to_leftmost;
use crate::geometry::{
    Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::numeric::compare;

/// Pairwise point-sequence equality after rotating both rings to their
/// leftmost point.
pub fn line_string_equal(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    let mut ca = a.to_vec();
    let mut cb = b.to_vec();
    rotate_to_leftmost(&mut ca);
    rotate_to_leftmost(&mut cb);
    ca.iter()
        .zip(cb.iter())
        .all(|(p, q)| compare::point_equal(*p, *q))
}

/// Multiset equality: order of points is irrelevant.
pub fn multi_point_equal(a: &[Point], b: &[Point]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut ca = a.to_vec();
    let mut cb = b.to_vec();
    let key = |p: &Point, q: &Point| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y));
    ca.sort_by(key);
    cb.sort_by(key);
    ca.iter()
        .zip(cb.iter())
        .all(|(p, q)| compare::point_equal(*p, *q))
}

/// Unordered matching of member line strings.
pub fn multi_line_string_equal(a: &[LineString], b: &[LineString]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    'outer: for ls in a {
        for (j, other) in b.iter().enumerate() {
            if !used[j] && line_string_equal(&ls.0, &other.0) {
                used[j] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}

/// The first ring is compared in place (it fixes the orientation); interior
/// rings match as an unordered multiset of normalized rings.
pub fn polygon_equal(a: &Polygon, b: &Polygon) -> bool {
    if a.0.len() != b.0.len() {
        return false;
    }
    if a.0.is_empty() {
        return true;
    }
    if !line_string_equal(&a.0[0], &b.0[0]) {
        return false;
    }
    let mut used = vec![false; b.0.len()];
    used[0] = true;
    'outer: for ring in &a.0[1..] {
        for (j, other) in b.0.iter().enumerate().skip(1) {
            if !used[j] && line_string_equal(ring, other) {
                used[j] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}

/// Normalize both sides by sorting polygons on (ring count, outer ring
/// length), then compare pairwise.
pub fn multi_polygon_equal(a: &MultiPolygon, b: &MultiPolygon) -> bool {
    if a.0.len() != b.0.len() {
        return false;
    }
    let key = |p: &Polygon| (p.0.len(), p.0.first().map_or(0, Vec::len));
    let mut ca: Vec<&Polygon> = a.0.iter().collect();
    let mut cb: Vec<&Polygon> = b.0.iter().collect();
    ca.sort_by_key(|p| key(p));
    cb.sort_by_key(|p| key(p));
    ca.iter().zip(cb.iter()).all(|(p, q)| polygon_equal(p, q))
}

pub fn collection_equal(a: &[Geometry], b: &[Geometry]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(g, h)| geometry_equal(g, h))
}

/// Dispatch on the concrete variant; different variants never compare equal.
pub fn geometry_equal(a: &Geometry, b: &Geometry) -> bool {
    match (a, b) {
        (Geometry::Point(p), Geometry::Point(q)) => compare::point_equal(*p, *q),
        (Geometry::MultiPoint(p), Geometry::MultiPoint(q)) => multi_point_equal(&p.0, &q.0),
        (Geometry::LineString(p), Geometry::LineString(q)) => line_string_equal(&p.0, &q.0),
        (Geometry::MultiLineString(p), Geometry::MultiLineString(q)) => {
            multi_line_string_equal(&p.0, &q.0)
        }
        (Geometry::Polygon(p), Geometry::Polygon(q)) => polygon_equal(p, q),
        (Geometry::MultiPolygon(p), Geometry::MultiPolygon(q)) => multi_polygon_equal(p, q),
        (Geometry::Collection(p), Geometry::Collection(q)) => collection_equal(p, q),
        _ => false,
    }
}
