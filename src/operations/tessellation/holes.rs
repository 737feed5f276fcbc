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

//! Hole elimination via Eberly's bridging: each hole ring is connected to the
//! outer ring through a bridge diagonal found by casting a leftward ray from
//! the hole's leftmost vertex, producing a single hole-free ring.

use std::cmp::Ordering;

use log::debug;
use num_traits::Float;

use super::Tessellator;
use crate::geometry::ring::NodeId;
use crate::kernel::predicates::{corner_area, point_in_triangle};

impl<T: Float> Tessellator<T> {
    /// Builds every hole ring (opposite winding to the outer ring), then
    /// bridges them into the outer ring strictly left to right. Each splice
    /// mutates the ring the next bridge has to search, so the order matters.
    pub(super) fn merge_holes(
        &mut self,
        data: &[T],
        hole_indices: &[usize],
        mut outer: NodeId,
        dim: usize,
    ) -> NodeId {
        let mut queue = Vec::with_capacity(hole_indices.len());

        for (k, &offset) in hole_indices.iter().enumerate() {
            let start = offset * dim;
            let end = hole_indices
                .get(k + 1)
                .map_or(data.len(), |&next| next * dim);
            if let Some(head) = self.ring.build(data, start, end, dim, false) {
                if head == self.ring.nodes[head].next {
                    // Single-point hole: an interior point, not a boundary.
                    self.ring.nodes[head].steiner = true;
                }
                queue.push(self.ring.leftmost(head));
            }
        }

        queue.sort_by(|&a, &b| {
            self.ring.nodes[a]
                .x
                .partial_cmp(&self.ring.nodes[b].x)
                .unwrap_or(Ordering::Equal)
        });

        for hole in queue {
            outer = self.bridge_hole(hole, outer);
        }
        outer
    }

    /// Splices one hole into the outer ring, filtering the collinear points
    /// the splice introduces at both new ring heads. An unbridgeable hole is
    /// dropped and contributes no triangles.
    fn bridge_hole(&mut self, hole: NodeId, outer: NodeId) -> NodeId {
        let Some(bridge) = self.find_hole_bridge(hole, outer) else {
            debug!("no bridge to outer ring for hole; dropping it");
            return outer;
        };

        let mirror = self.ring.split(bridge, hole);
        let mirror_next = self.ring.nodes[mirror].next;
        self.ring.filter_points(mirror, Some(mirror_next));
        let bridge_next = self.ring.nodes[bridge].next;
        self.ring.filter_points(bridge, Some(bridge_next))
    }

    /// David Eberly's bridge search. Casts a ray from the hole's leftmost
    /// point toward negative x, keeps the closest crossing of the outer ring,
    /// and refines the crossing edge's endpoint to the visible vertex with
    /// the minimum tangent angle to the ray.
    fn find_hole_bridge(&self, hole: NodeId, outer: NodeId) -> Option<NodeId> {
        let nodes = &self.ring.nodes;
        let hx = nodes[hole].x;
        let hy = nodes[hole].y;

        let mut qx = T::neg_infinity();
        let mut candidate: Option<NodeId> = None;

        let mut p = outer;
        loop {
            let next = nodes[p].next;
            let pv = &nodes[p];
            let nv = &nodes[next];
            if hy <= pv.y && hy >= nv.y && nv.y != pv.y {
                let x = pv.x + (hy - pv.y) * (nv.x - pv.x) / (nv.y - pv.y);
                if x <= hx && x > qx {
                    qx = x;
                    candidate = Some(if pv.x < nv.x { p } else { next });
                    if x == hx {
                        // Hole touches the edge; take that endpoint as-is.
                        return candidate;
                    }
                }
            }
            p = next;
            if p == outer {
                break;
            }
        }

        let mut m = candidate?;
        let stop = m;
        let mx = nodes[m].x;
        let my = nodes[m].y;
        let mut tan_min = T::infinity();

        // The candidate may not be visible from the hole point. Among ring
        // vertices inside the triangle (hole point, ray crossing, candidate),
        // prefer the smallest tangent angle to the ray; ties go to the larger
        // x, then to the sector-containment test.
        let mut p = m;
        loop {
            let pv = &nodes[p];
            if hx >= pv.x
                && pv.x >= mx
                && hx != pv.x
                && point_in_triangle(
                    if hy < my { hx } else { qx },
                    hy,
                    mx,
                    my,
                    if hy < my { qx } else { hx },
                    hy,
                    pv.x,
                    pv.y,
                )
            {
                let tan = (hy - pv.y).abs() / (hx - pv.x);
                if self.locally_inside(p, hole)
                    && (tan < tan_min
                        || (tan == tan_min
                            && (pv.x > nodes[m].x
                                || (pv.x == nodes[m].x && self.sector_contains(m, p)))))
                {
                    m = p;
                    tan_min = tan;
                }
            }
            p = pv.next;
            if p == stop {
                break;
            }
        }

        Some(m)
    }

    /// Whether the sector at `m` fully contains the sector at `p`; used as
    /// the final tie-break between equally angled bridge candidates sitting
    /// on the same vertical.
    fn sector_contains(&self, m: NodeId, p: NodeId) -> bool {
        let nodes = &self.ring.nodes;
        corner_area(&nodes[nodes[m].prev], &nodes[m], &nodes[nodes[p].prev]) < T::zero()
            && corner_area(&nodes[nodes[p].next], &nodes[m], &nodes[nodes[m].next]) < T::zero()
    }
}
