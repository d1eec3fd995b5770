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

//! Winding-order classification of point triples.

use crate::geometry::Point;
use crate::kernel::predicates::signed_area;
use crate::numeric::compare;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    Colinear,
}

impl Winding {
    pub fn is_clockwise(&self) -> bool {
        matches!(self, Winding::Clockwise)
    }

    pub fn is_counter_clockwise(&self) -> bool {
        matches!(self, Winding::CounterClockwise)
    }

    pub fn is_colinear(&self) -> bool {
        matches!(self, Winding::Colinear)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Winding::Clockwise => "cw",
            Winding::CounterClockwise => "ccw",
            Winding::Colinear => "col",
        }
    }
}

/// Orientation oracle. `y_positive_down` selects screen coordinates, where
/// every orientation predicate flips relative to the mathematical
/// convention. A pure function of its arguments; no hidden state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Order {
    pub y_positive_down: bool,
}

impl Order {
    pub fn of_points(&self, a: Point, b: Point, c: Point) -> Winding {
        let mut area = signed_area(a, b, c);
        if self.y_positive_down {
            area = -area;
        }
        if compare::float(area, 0.0) {
            Winding::Colinear
        } else if area > 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        }
    }
}
