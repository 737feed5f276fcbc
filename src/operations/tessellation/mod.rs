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

//! Ear-clipping tessellation of a flat polygon-with-holes coordinate buffer.
//!
//! The entry point is [`Tessellator::tessellate_into`] (or the one-shot
//! [`tessellate`]). The driver builds the outer ring, merges hole rings into
//! it, optionally sets up the z-order spatial index, and hands the single
//! remaining ring to the ear-clipping engine in `earclip`.

use num_traits::Float;
use thiserror::Error as ThisError;

use crate::geometry::ring::RingArena;
use crate::kernel::predicates::signed_area;

mod earclip;
mod holes;
mod zcurve;

/// Structural caller-contract violations. Geometric malformation never
/// surfaces here; it degrades to best-effort (possibly empty) output.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("dim must be 2 or 3, got {0}")]
    UnsupportedDim(usize),
    #[error("vertex buffer length {len} is not a multiple of dim {dim}")]
    MisalignedVertices { len: usize, dim: usize },
    #[error("hole start index {index} is out of range or out of order")]
    InvalidHoleIndex { index: usize },
}

/// Spatial indexing only pays off once the ear search would otherwise scan
/// long runs of far-away vertices.
const INDEX_THRESHOLD: usize = 80;

/// Reusable tessellation state: the node arena survives between calls so
/// repeated tessellations of similarly sized polygons stop allocating.
///
/// A `Tessellator` runs one call at a time; independent values on independent
/// threads are fine since no state is shared between them.
#[derive(Debug, Default)]
pub struct Tessellator<T: Float> {
    pub(crate) ring: RingArena<T>,
}

impl<T: Float> Tessellator<T> {
    pub fn new() -> Self {
        Self {
            ring: RingArena::new(),
        }
    }

    /// Tessellates `vertices` (flat, stride `dim`, holes starting at the
    /// logical vertex offsets in `hole_indices`) into index triples appended
    /// to `out` after clearing it.
    ///
    /// Each output value is a 0-based logical vertex index (raw flat offset
    /// divided by `dim`). Empty and fully degenerate input produce an empty
    /// output, never an error; only structural contract violations do.
    pub fn tessellate_into(
        &mut self,
        vertices: &[T],
        hole_indices: &[usize],
        dim: usize,
        out: &mut Vec<usize>,
    ) -> Result<(), Error> {
        out.clear();
        validate(vertices.len(), hole_indices, dim)?;

        self.ring.reset(vertices.len() / dim * 3 / 2);

        let has_holes = !hole_indices.is_empty();
        let outer_len = if has_holes {
            hole_indices[0] * dim
        } else {
            vertices.len()
        };

        let Some(mut outer) = self.ring.build(vertices, 0, outer_len, dim, true) else {
            return Ok(());
        };
        if self.ring.nodes[outer].next == self.ring.nodes[outer].prev {
            return Ok(());
        }

        if has_holes {
            outer = self.merge_holes(vertices, hole_indices, outer, dim);
        }

        // The z-order index quantizes against the outer ring's bounding box.
        let mut min_x = T::zero();
        let mut min_y = T::zero();
        let mut inv_size = T::zero();
        if vertices.len() > INDEX_THRESHOLD * dim {
            min_x = vertices[0];
            min_y = vertices[1];
            let mut max_x = vertices[0];
            let mut max_y = vertices[1];
            let mut i = dim;
            while i < outer_len {
                min_x = min_x.min(vertices[i]);
                min_y = min_y.min(vertices[i + 1]);
                max_x = max_x.max(vertices[i]);
                max_y = max_y.max(vertices[i + 1]);
                i += dim;
            }
            inv_size = (max_x - min_x).max(max_y - min_y);
            if inv_size != T::zero() {
                inv_size = T::from(32767.0).unwrap() / inv_size;
            }
        }

        self.clip_ears(outer, out, dim, min_x, min_y, inv_size, 0);
        Ok(())
    }
}

fn validate(len: usize, hole_indices: &[usize], dim: usize) -> Result<(), Error> {
    if !(2..=3).contains(&dim) {
        return Err(Error::UnsupportedDim(dim));
    }
    if len % dim != 0 {
        return Err(Error::MisalignedVertices { len, dim });
    }
    let vertex_count = len / dim;
    let mut prev: Option<usize> = None;
    for &index in hole_indices {
        let ascending = prev.map_or(index > 0, |p| index > p);
        if !ascending || index >= vertex_count {
            return Err(Error::InvalidHoleIndex { index });
        }
        prev = Some(index);
    }
    Ok(())
}

/// One-shot tessellation; see [`Tessellator::tessellate_into`].
pub fn tessellate<T: Float>(
    vertices: &[T],
    hole_indices: &[usize],
    dim: usize,
) -> Result<Vec<usize>, Error> {
    let mut out = Vec::new();
    Tessellator::new().tessellate_into(vertices, hole_indices, dim, &mut out)?;
    Ok(out)
}

/// Relative discrepancy between the summed area of the emitted triangles and
/// the polygon's true area (outer minus holes).
///
/// Exactly zero when both areas are exactly zero. Used as an external
/// correctness oracle: near zero for well-formed simple polygons, bounded for
/// pathological ones. Triples referencing vertices outside the buffer
/// contribute no area instead of being read out of range.
pub fn deviation<T: Float>(
    vertices: &[T],
    hole_indices: &[usize],
    dim: usize,
    triangles: &[usize],
) -> T {
    let has_holes = !hole_indices.is_empty();
    let outer_len = if has_holes {
        hole_indices[0] * dim
    } else {
        vertices.len()
    };

    let mut polygon_area = signed_area(vertices, 0, outer_len, dim).abs();
    if has_holes {
        for k in 0..hole_indices.len() {
            let start = hole_indices[k] * dim;
            let end = if k < hole_indices.len() - 1 {
                hole_indices[k + 1] * dim
            } else {
                vertices.len()
            };
            polygon_area = polygon_area - signed_area(vertices, start, end, dim).abs();
        }
    }

    let mut triangles_area = T::zero();
    for tri in triangles.chunks_exact(3) {
        let a = tri[0] * dim;
        let b = tri[1] * dim;
        let c = tri[2] * dim;
        if a.max(b).max(c) + 1 >= vertices.len() {
            continue;
        }
        triangles_area = triangles_area
            + ((vertices[a] - vertices[c]) * (vertices[b + 1] - vertices[a + 1])
                - (vertices[a] - vertices[b]) * (vertices[c + 1] - vertices[a + 1]))
                .abs();
    }

    if polygon_area == T::zero() && triangles_area == T::zero() {
        T::zero()
    } else {
        ((polygon_area - triangles_area) / polygon_area).abs()
    }
}
