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

//! Pure, stateless geometric predicates shared by ring construction, hole
//! bridging and the ear-clipping engine.
//!
//! These are deliberately exact float comparisons. Degenerate inputs are
//! resolved by the tie-break conventions encoded here (inclusive half-plane
//! tests, sign-based intersection), not by epsilon fuzzing.

use num_traits::Float;

use crate::geometry::ring::Node;

#[inline]
pub(crate) fn sign<T: Float>(v: T) -> i32 {
    if v > T::zero() {
        1
    } else if v < T::zero() {
        -1
    } else {
        0
    }
}

/// Twice the signed area of triangle `pqr`.
///
/// Negative means a convex turn under the ring winding produced by the
/// builder; this is the ear test's primary criterion.
#[inline]
pub(crate) fn corner_area<T: Float>(p: &Node<T>, q: &Node<T>, r: &Node<T>) -> T {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

#[inline]
pub(crate) fn coincident<T: Float>(p: &Node<T>, q: &Node<T>) -> bool {
    p.x == q.x && p.y == q.y
}

/// Inclusive point-in-triangle test; boundary points count as inside. The
/// half-plane orientation matches [`corner_area`]'s sign convention.
#[inline]
#[allow(clippy::too_many_arguments)]
pub(crate) fn point_in_triangle<T: Float>(
    ax: T,
    ay: T,
    bx: T,
    by: T,
    cx: T,
    cy: T,
    px: T,
    py: T,
) -> bool {
    (cx - px) * (ay - py) >= (ax - px) * (cy - py)
        && (ax - px) * (by - py) >= (bx - px) * (ay - py)
        && (bx - px) * (cy - py) >= (cx - px) * (by - py)
}

/// For collinear `p`, `q`, `r`: does `q` lie on segment `pr`?
#[inline]
fn on_segment<T: Float>(p: &Node<T>, q: &Node<T>, r: &Node<T>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Proper or touching intersection of segments `p1q1` and `p2q2`.
///
/// The general case compares the four orientation signs; collinear touching
/// is handled explicitly through [`on_segment`].
pub(crate) fn segments_cross<T: Float>(
    p1: &Node<T>,
    q1: &Node<T>,
    p2: &Node<T>,
    q2: &Node<T>,
) -> bool {
    let o1 = sign(corner_area(p1, q1, p2));
    let o2 = sign(corner_area(p1, q1, q2));
    let o3 = sign(corner_area(p2, q2, p1));
    let o4 = sign(corner_area(p2, q2, q1));

    (o1 != o2 && o3 != o4)
        || (o1 == 0 && on_segment(p1, p2, q1))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
}

/// Shoelace sum over `data[start..end]` stepped by `dim`. Positive for one
/// winding, negative for the other, zero for degenerate rings.
pub fn signed_area<T: Float>(data: &[T], start: usize, end: usize, dim: usize) -> T {
    if end <= start {
        return T::zero();
    }
    let mut sum = T::zero();
    let mut j = end - dim;
    let mut i = start;
    while i < end {
        sum = sum + (data[j] - data[i]) * (data[i + 1] + data[j + 1]);
        j = i;
        i += dim;
    }
    sum
}
