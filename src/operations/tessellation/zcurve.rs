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

//! The spatial locality index: every vertex gets a z-order (Morton) code and
//! a secondary doubly linked ordering sorted by that code, letting the ear
//! test confine its interior-point scan to a code range.

use num_traits::Float;

use super::Tessellator;
use crate::geometry::ring::NodeId;

/// Interleaves the bits of the quantized, scaled coordinates into a single
/// code. Coordinates are mapped into the non-negative 15-bit integer range
/// first, so the interleaved result fits 30 bits.
pub(super) fn z_order<T: Float>(x: T, y: T, min_x: T, min_y: T, inv_size: T) -> u32 {
    let mut x = ((x - min_x) * inv_size).to_u32().unwrap_or(0);
    let mut y = ((y - min_y) * inv_size).to_u32().unwrap_or(0);

    x = (x | (x << 8)) & 0x00FF00FF;
    x = (x | (x << 4)) & 0x0F0F0F0F;
    x = (x | (x << 2)) & 0x33333333;
    x = (x | (x << 1)) & 0x55555555;

    y = (y | (y << 8)) & 0x00FF00FF;
    y = (y | (y << 4)) & 0x0F0F0F0F;
    y = (y | (y << 2)) & 0x33333333;
    y = (y | (y << 1)) & 0x55555555;

    x | (y << 1)
}

impl<T: Float> Tessellator<T> {
    /// Assigns locality codes lazily, seeds the secondary links from the ring
    /// order, cuts the cycle open and sorts it by code.
    pub(super) fn index_ring(&mut self, start: NodeId, min_x: T, min_y: T, inv_size: T) {
        let mut p = start;
        loop {
            let node = &mut self.ring.nodes[p];
            if node.z.is_none() {
                node.z = Some(z_order(node.x, node.y, min_x, min_y, inv_size));
            }
            node.prev_z = Some(node.prev);
            node.next_z = Some(node.next);
            p = node.next;
            if p == start {
                break;
            }
        }

        let last = self.ring.nodes[start].prev_z.unwrap();
        self.ring.nodes[last].next_z = None;
        self.ring.nodes[start].prev_z = None;

        self.sort_by_code(start);
    }

    /// Bottom-up linked-list merge sort over the secondary links (Simon
    /// Tatham's algorithm): the merge width doubles each full pass and the
    /// sort finishes when a pass performs at most one merge. Stable, O(n log
    /// n), relinks in place without allocating.
    fn sort_by_code(&mut self, head: NodeId) {
        let nodes = &mut self.ring.nodes;
        let mut merge_width = 1usize;
        let mut list = Some(head);

        loop {
            let mut p = list;
            list = None;
            let mut tail: Option<NodeId> = None;
            let mut merges = 0usize;

            while p.is_some() {
                merges += 1;

                // Carve off a run of `merge_width` nodes starting at p.
                let mut q = p;
                let mut p_size = 0usize;
                for _ in 0..merge_width {
                    p_size += 1;
                    q = nodes[q.unwrap()].next_z;
                    if q.is_none() {
                        break;
                    }
                }
                let mut q_size = merge_width;

                while p_size > 0 || (q_size > 0 && q.is_some()) {
                    let from_p = p_size != 0
                        && (q_size == 0
                            || q.is_none()
                            || nodes[p.unwrap()].z <= nodes[q.unwrap()].z);

                    let e = if from_p {
                        let e = p.unwrap();
                        p = nodes[e].next_z;
                        p_size -= 1;
                        e
                    } else {
                        let e = q.unwrap();
                        q = nodes[e].next_z;
                        q_size -= 1;
                        e
                    };

                    match tail {
                        Some(t) => nodes[t].next_z = Some(e),
                        None => list = Some(e),
                    }
                    nodes[e].prev_z = tail;
                    tail = Some(e);
                }

                p = q;
            }

            nodes[tail.unwrap()].next_z = None;
            merge_width *= 2;

            if merges <= 1 {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::z_order;

    #[test]
    fn z_order_interleaves_bits() {
        // x = 0b11, y = 0b01 -> code 0b0111.
        assert_eq!(z_order(3.0, 1.0, 0.0, 0.0, 1.0), 0b0111);
        assert_eq!(z_order(0.0, 0.0, 0.0, 0.0, 1.0), 0);
    }

    #[test]
    fn z_order_orders_by_locality() {
        // Nearby points quantize to nearby codes.
        let near = z_order(1.0, 1.0, 0.0, 0.0, 1.0);
        let far = z_order(16000.0, 16000.0, 0.0, 0.0, 1.0);
        assert!(near < far);
    }
}
