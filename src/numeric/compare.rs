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

//! Tolerance-aware float and point comparison.
//!
//! Two floats are considered equal when they are within an absolute epsilon
//! of each other, or when their bit patterns (mapped onto a monotonic integer
//! line) are within a bit budget. The budget for a relative tolerance `t` is
//! the bit distance between `1.0` and `1.0 + t`.

use once_cell::sync::Lazy;

use crate::geometry::{Line, Point};

/// Relative tolerance backing [`DEFAULT`]: values agreeing to roughly two
/// significant decimal digits compare equal.
pub const TOLERANCE: f64 = 0.1;

/// The comparator used throughout the engine.
pub static DEFAULT: Lazy<Compare> = Lazy::new(|| Compare::new(TOLERANCE));

/// A float comparator with an absolute epsilon and a ULP bit budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compare {
    tolerance: f64,
    bit_tolerance: i64,
}

/// Bit budget for a relative tolerance: the distance between the bit
/// patterns of `1.0` and `1.0 + tolerance`.
pub fn bit_tolerance_for(tolerance: f64) -> i64 {
    (f64::to_bits(1.0 + tolerance).wrapping_sub(f64::to_bits(1.0))) as i64
}

impl Compare {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            bit_tolerance: bit_tolerance_for(tolerance),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn bit_tolerance(&self) -> i64 {
        self.bit_tolerance
    }

    pub fn float(&self, a: f64, b: f64) -> bool {
        float64(a, b, self.tolerance, self.bit_tolerance)
    }

    pub fn point(&self, p: Point, q: Point) -> bool {
        self.float(p.x, q.x) && self.float(p.y, q.y)
    }

    /// Lexicographic order: x first, y breaks ties among x-equal points.
    pub fn point_less(&self, p: Point, q: Point) -> bool {
        if self.float(p.x, q.x) {
            p.y < q.y
        } else {
            p.x < q.x
        }
    }

    /// Undirected segment equality.
    pub fn line(&self, l1: Line, l2: Line) -> bool {
        (self.point(l1.a, l2.a) && self.point(l1.b, l2.b))
            || (self.point(l1.a, l2.b) && self.point(l1.b, l2.a))
    }
}

/// Explicit-parameter float equality.
///
/// NaN never compares equal; infinities compare equal only to the same
/// signed infinity. Finite values are equal within `tolerance` absolutely,
/// or within `bit_tolerance` ULP-ordered bits.
pub fn float64(a: f64, b: f64, tolerance: f64, bit_tolerance: i64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    if (a - b).abs() <= tolerance {
        return true;
    }
    let diff = (ordered_bits(a) as i128 - ordered_bits(b) as i128).unsigned_abs();
    diff <= bit_tolerance as u128
}

/// Float equality under [`DEFAULT`].
pub fn float(a: f64, b: f64) -> bool {
    DEFAULT.float(a, b)
}

/// Point equality under [`DEFAULT`].
pub fn point_equal(p: Point, q: Point) -> bool {
    DEFAULT.point(p, q)
}

/// Lexicographic point order under [`DEFAULT`].
pub fn point_less(p: Point, q: Point) -> bool {
    DEFAULT.point_less(p, q)
}

/// Undirected segment equality under [`DEFAULT`].
pub fn line_equal(l1: Line, l2: Line) -> bool {
    DEFAULT.line(l1, l2)
}

// Map a float's bit pattern onto a monotonically ordered integer line so
// that bit differences measure ULP distance across the sign boundary.
#[inline]
fn ordered_bits(f: f64) -> i64 {
    let i = f.to_bits() as i64;
    if i < 0 {
        i64::MIN - i
    } else {
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_tolerance_path() {
        let bits2 = bit_tolerance_for(0.1);
        assert!(float64(0.11, 0.111, 0.01, bits2));
    }

    #[test]
    fn infinities() {
        let bits2 = bit_tolerance_for(0.1);
        assert!(float64(f64::INFINITY, f64::INFINITY, 0.01, bits2));
        assert!(float64(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.01, bits2));
        assert!(!float64(f64::INFINITY, f64::NEG_INFINITY, 0.01, bits2));
        assert!(!float64(f64::INFINITY, 1.0, 0.01, bits2));
    }

    #[test]
    fn nan_is_never_equal() {
        let bits2 = bit_tolerance_for(0.1);
        assert!(!float64(f64::NAN, f64::NAN, 0.01, bits2));
        assert!(!float64(f64::NAN, 0.0, 0.01, bits2));
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert!(float(0.0, -0.0));
    }

    #[test]
    fn ulp_path_across_sign() {
        // Tiny values straddling zero are a handful of bits apart on the
        // ordered line even though their exponents differ wildly.
        assert!(float64(1e-300, -1e-300, 0.0, i64::MAX));
        assert!(!float64(1.0, -1.0, 0.5, 4));
    }

    #[test]
    fn point_order() {
        let less = |p: [f64; 2], q: [f64; 2]| point_less(p.into(), q.into());
        assert!(less([1.0, 2.0], [2.0, 2.0]));
        assert!(less([1.0, 1.0], [1.0, 2.0]));
        assert!(!less([1.0, 2.0], [1.0, 2.0]));
        assert!(!less([2.0, 2.0], [1.0, 2.0]));
    }

    #[test]
    fn undirected_line_equality() {
        let l = Line::new([0.0, 0.0].into(), [5.0, 10.0].into());
        assert!(line_equal(l, l.reversed()));
        let other = Line::new([0.0, 0.0].into(), [5.0, 11.0].into());
        assert!(!line_equal(l, other));
    }
}
