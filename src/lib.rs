// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
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

//! Ear-clipping tessellation of 2D polygons with holes.
//!
//! The input is a flat coordinate buffer plus the logical start offsets of
//! any hole rings; the output is a flat list of triangle vertex-index
//! triples. Robustness over malformed geometry is best-effort by design:
//! self-intersecting and degenerate input degrades to partial or empty
//! output rather than an error, while structural misuse of the API (bad
//! stride, out-of-range hole offsets) is rejected up front.
//!
//! ```
//! let vertices = [10.0, 0.0, 0.0, 50.0, 60.0, 60.0, 70.0, 10.0];
//! let triangles = tessel::tessellate(&vertices, &[], 2).unwrap();
//! assert_eq!(triangles, vec![1, 0, 3, 3, 2, 1]);
//! ```

pub mod geometry;
pub mod kernel;
pub mod operations;

pub use geometry::util::flatten;
pub use operations::tessellation::{Error, Tessellator, deviation, tessellate};
