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

use planedge::geometry::equal::{
    geometry_equal, line_string_equal, multi_line_string_equal, multi_point_equal, polygon_equal,
};
use planedge::geometry::ring::rotate_to_leftmost;
use planedge::geometry::{Geometry, LineString, MultiLineString, Polygon};
use planedge::numeric::compare::{bit_tolerance_for, float64, point_equal, point_less};
use planedge::Point;

fn pts(raw: &[[f64; 2]]) -> Vec<Point> {
    raw.iter().map(|&p| p.into()).collect()
}

#[test]
fn explicit_tolerance_comparison() {
    let bits2 = bit_tolerance_for(0.1);
    assert!(float64(0.11, 0.111, 0.01, bits2));
    assert!(float64(f64::INFINITY, f64::INFINITY, 0.01, bits2));
    assert!(!float64(f64::INFINITY, f64::NEG_INFINITY, 0.01, bits2));
    assert!(!float64(f64::NEG_INFINITY, 0.11, 0.01, bits2));
    assert!(!float64(f64::NAN, f64::NAN, 0.01, bits2));
}

#[test]
fn point_equality_and_order() {
    type Case = ([f64; 2], [f64; 2], bool);
    let cases: &[Case] = &[
        ([1.0, 2.0], [1.0, 2.0], true),
        ([1.0, 1.0], [1.0, 2.0], false),
        ([1.0, 2.0], [2.0, 2.0], false),
        ([1.0, 1.0], [2.0, 2.0], false),
    ];
    for &(p1, p2, equal) in cases {
        let (gp1, gp2): (Point, Point) = (p1.into(), p2.into());
        assert_eq!(point_equal(gp1, gp2), equal, "{p1:?} == {p2:?}");
        assert_eq!(
            geometry_equal(&Geometry::Point(gp1), &Geometry::Point(gp2)),
            equal
        );

        let raw_less = if p1[0] == p2[0] {
            p1[1] < p2[1]
        } else {
            p1[0] < p2[0]
        };
        assert_eq!(point_less(gp1, gp2), raw_less, "{p1:?} < {p2:?}");
    }
}

#[test]
fn rotation_to_leftmost_point() {
    let cases: &[(&[[f64; 2]], &[[f64; 2]])] = &[
        (
            &[[11.0, 10.0], [9.0, 8.0], [7.0, 6.0], [5.0, 4.0]],
            &[[5.0, 4.0], [11.0, 10.0], [9.0, 8.0], [7.0, 6.0]],
        ),
        (
            &[[1.0, 5.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]],
            &[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]],
        ),
        (
            &[[3.0, 100.0], [4.0, -5.0], [6.0, 90.0], [4.0, 15.0]],
            &[[3.0, 100.0], [4.0, -5.0], [6.0, 90.0], [4.0, 15.0]],
        ),
    ];
    for (input, want) in cases {
        let mut ring = pts(input);
        rotate_to_leftmost(&mut ring);
        assert_eq!(ring, pts(want), "ring {input:?}");
    }
}

#[test]
fn line_string_rotation_law() {
    let base = pts(&[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]]);
    for k in 0..base.len() {
        let mut rotated = base.clone();
        rotated.rotate_left(k);
        assert!(line_string_equal(&rotated, &base), "rotation {k}");
        assert!(line_string_equal(&base, &rotated), "rotation {k} symmetric");
    }
}

#[test]
fn multi_point_tables() {
    type Case = (&'static [[f64; 2]], &'static [[f64; 2]], bool);
    let cases: &[Case] = &[
        (
            &[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]],
            &[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]],
            true,
        ),
        (
            &[[1.0, 5.0], [1.0, 2.0], [1.0, 3.0], [1.0, 4.0]],
            &[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]],
            true,
        ),
        (&[], &[], true),
        (
            &[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]],
            &[[1.0, 5.0], [1.0, 2.0], [1.0, 4.0], [1.0, 4.0]],
            false,
        ),
        (
            &[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0], [1.0, 5.0]],
            &[[1.0, 2.0], [1.0, 3.0], [1.0, 4.0]],
            false,
        ),
    ];
    for (l1, l2, want) in cases {
        assert_eq!(multi_point_equal(&pts(l1), &pts(l2)), *want, "{l1:?} {l2:?}");
    }
}

#[test]
fn multi_line_string_membership_is_unordered() {
    let a = MultiLineString(vec![
        LineString(pts(&[[0.0, 0.0], [1.0, 0.0]])),
        LineString(pts(&[[5.0, 5.0], [6.0, 5.0]])),
    ]);
    let b = MultiLineString(vec![
        LineString(pts(&[[5.0, 5.0], [6.0, 5.0]])),
        LineString(pts(&[[0.0, 0.0], [1.0, 0.0]])),
    ]);
    assert!(multi_line_string_equal(&a.0, &b.0));
    assert!(geometry_equal(
        &Geometry::MultiLineString(a),
        &Geometry::MultiLineString(b)
    ));
}

#[test]
fn polygon_equivalence_laws() {
    let outer = pts(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
    let hole = pts(&[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0]]);

    let mut shifted_outer = outer.clone();
    shifted_outer.rotate_left(3);
    let mut shifted_hole = hole.clone();
    shifted_hole.rotate_left(1);

    let a = Polygon(vec![outer, hole]);
    let b = Polygon(vec![shifted_outer, shifted_hole]);
    let c = a.clone();

    // reflexive, symmetric, transitive over normalized forms
    assert!(polygon_equal(&a, &a));
    assert!(polygon_equal(&a, &b));
    assert!(polygon_equal(&b, &a));
    assert!(polygon_equal(&b, &c));
    assert!(polygon_equal(&a, &c));
}

#[test]
fn cross_variant_geometry_is_never_equal() {
    let p = Geometry::Point([1.0, 2.0].into());
    let mp = Geometry::MultiPoint(planedge::geometry::MultiPoint(pts(&[[1.0, 2.0]])));
    assert!(!geometry_equal(&p, &mp));

    let empty_ls = Geometry::LineString(LineString(vec![]));
    let empty_poly = Geometry::Polygon(Polygon(vec![]));
    assert!(!geometry_equal(&empty_ls, &empty_poly));
    assert!(geometry_equal(&empty_ls, &empty_ls.clone()));
}
