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

//! Plain geometry value types consumed and emitted by the subdivision core.
//!
//! These are shells: no serialization, no spatial indexing. Points are value
//! objects and are never owned by the topology.

pub mod equal;
pub mod ring;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(v: [f64; 2]) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A directed segment. Direction matters for edge geometry; container
/// equality treats segments as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}

impl From<[[f64; 2]; 2]> for Line {
    fn from(v: [[f64; 2]; 2]) -> Self {
        Self {
            a: v[0].into(),
            b: v[1].into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPoint(pub Vec<Point>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString(pub Vec<Point>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineString(pub Vec<LineString>);

/// Closed rings; the first ring is the outer boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon(pub Vec<Vec<Point>>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon(pub Vec<Polygon>);

/// Closed set of geometry variants. Cross-variant comparison is always
/// unequal; empty values of the same variant are equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    Collection(Vec<Geometry>),
}
