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

use num_traits::Float;

/// Reshapes nested rings (`rings[ring][vertex][coordinate]`) into the flat
/// buffer layout [`crate::tessellate`] consumes.
///
/// Returns `(vertices, hole_indices, dim)`. The first ring is the outer
/// boundary; every following ring is recorded as a hole starting at its first
/// logical vertex index. `dim` is inferred from the first vertex and every
/// vertex is truncated to it, so mixed 2D/3D input keeps a uniform stride.
pub fn flatten<T: Float>(rings: &[Vec<Vec<T>>]) -> (Vec<T>, Vec<usize>, usize) {
    let dim = rings
        .first()
        .and_then(|ring| ring.first())
        .map_or(2, Vec::len);

    let mut vertices = Vec::new();
    let mut hole_indices = Vec::new();
    for (k, ring) in rings.iter().enumerate() {
        if k > 0 {
            hole_indices.push(vertices.len() / dim);
        }
        for vertex in ring {
            vertices.extend_from_slice(&vertex[..dim]);
        }
    }
    (vertices, hole_indices, dim)
}
