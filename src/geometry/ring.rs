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

//! Ring normalization: rotate a closed ring so its minimum point leads,
//! making ring equality independent of the start index.

use crate::geometry::Point;
use crate::numeric::compare;

/// Index of the minimum point under the lexicographic point order.
/// Returns 0 for an empty slice.
pub fn find_min_idx(pts: &[Point]) -> usize {
    let mut min = 0;
    for i in 1..pts.len() {
        if compare::point_less(pts[i], pts[min]) {
            min = i;
        }
    }
    min
}

/// Rotate the ring in place so the minimum point is first.
pub fn rotate_to_leftmost(pts: &mut [Point]) {
    if pts.is_empty() {
        return;
    }
    let idx = find_min_idx(pts);
    pts.rotate_left(idx);
}
