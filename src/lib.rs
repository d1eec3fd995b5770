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

//! Planar Delaunay subdivisions on a quad-edge topology.
//!
//! The subdivision engine maintains a planar mesh under incremental point
//! insertion: each site is located by an edge walk, spliced into the
//! enclosing face, and legalized by empty-circle edge swaps. The
//! supporting algebra — tolerance-aware comparison, winding
//! classification, ring normalization and a segment intersector — lives in
//! the sibling modules.

pub mod cancel;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod kernel;
pub mod numeric;
pub mod quadedge;
pub mod subdivision;

pub use cancel::CancelToken;
pub use error::{ErrInvalid, Error, Result};
pub use geometry::{Line, Point};
pub use kernel::winding::{Order, Winding};
pub use quadedge::{Edge, EdgePool};
pub use subdivision::Subdivision;
