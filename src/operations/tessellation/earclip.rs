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

//! The ear-clipping engine: repeatedly detects and removes ears from a ring,
//! escalating through point filtering, local self-intersection curing and
//! polygon splitting whenever a full lap finds no ear.
//!
//! Every escalation strictly shrinks the ring (a triangle is emitted, points
//! are removed, or the ring splits in two), so the recursion terminates for
//! any finite input. Fragments that survive all passes untriangulated are
//! abandoned silently.

use log::debug;
use num_traits::Float;

use super::{Tessellator, zcurve};
use crate::geometry::ring::NodeId;
use crate::kernel::predicates::{coincident, corner_area, point_in_triangle, segments_cross};

impl<T: Float> Tessellator<T> {
    /// Main clipping loop over one ring. `pass` tracks the escalation stage:
    /// 0 = plain clipping, 1 = after filtering, 2 = after curing.
    #[allow(clippy::too_many_arguments)]
    pub(super) fn clip_ears(
        &mut self,
        mut ear: NodeId,
        out: &mut Vec<usize>,
        dim: usize,
        min_x: T,
        min_y: T,
        inv_size: T,
        pass: u32,
    ) {
        if pass == 0 && inv_size != T::zero() {
            self.index_ring(ear, min_x, min_y, inv_size);
        }

        let mut stop = ear;
        while self.ring.nodes[ear].prev != self.ring.nodes[ear].next {
            let prev = self.ring.nodes[ear].prev;
            let next = self.ring.nodes[ear].next;

            let is_ear = if inv_size != T::zero() {
                self.is_ear_indexed(ear, min_x, min_y, inv_size)
            } else {
                self.is_ear(ear)
            };

            if is_ear {
                out.push(self.ring.nodes[prev].i / dim);
                out.push(self.ring.nodes[ear].i / dim);
                out.push(self.ring.nodes[next].i / dim);

                self.ring.remove(ear);

                // Skipping the next vertex keeps slivers out of the fan.
                let next_next = self.ring.nodes[next].next;
                ear = next_next;
                stop = next_next;
                continue;
            }

            ear = next;

            if ear == stop {
                match pass {
                    0 => {
                        let head = self.ring.filter_points(ear, None);
                        self.clip_ears(head, out, dim, min_x, min_y, inv_size, 1);
                    }
                    1 => {
                        let head = self.ring.filter_points(ear, None);
                        let head = self.cure_local_intersections(head, out, dim);
                        self.clip_ears(head, out, dim, min_x, min_y, inv_size, 2);
                    }
                    _ => {
                        self.split_and_clip(ear, out, dim, min_x, min_y, inv_size);
                    }
                }
                break;
            }
        }
    }

    /// Plain ear test: the corner is convex and no other ring vertex that is
    /// itself reflex lies inside the candidate triangle.
    fn is_ear(&self, ear: NodeId) -> bool {
        let nodes = &self.ring.nodes;
        let b = nodes[ear];
        let a = nodes[b.prev];
        let c = nodes[b.next];

        if corner_area(&a, &b, &c) >= T::zero() {
            return false;
        }

        let x0 = a.x.min(b.x).min(c.x);
        let y0 = a.y.min(b.y).min(c.y);
        let x1 = a.x.max(b.x).max(c.x);
        let y1 = a.y.max(b.y).max(c.y);

        let mut p = c.next;
        while p != b.prev {
            let n = nodes[p];
            if (n.x >= x0 && n.x <= x1 && n.y >= y0 && n.y <= y1)
                && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, n.x, n.y)
                && corner_area(&nodes[n.prev], &n, &nodes[n.next]) >= T::zero()
            {
                return false;
            }
            p = n.next;
        }
        true
    }

    /// Accelerated ear test: walks the z-order index outward from the ear in
    /// both directions, confined to the code range of the triangle's bounding
    /// box, then finishes whichever tail remains.
    fn is_ear_indexed(&self, ear: NodeId, min_x: T, min_y: T, inv_size: T) -> bool {
        let nodes = &self.ring.nodes;
        let b = nodes[ear];
        let a = nodes[b.prev];
        let c = nodes[b.next];

        if corner_area(&a, &b, &c) >= T::zero() {
            return false;
        }

        let x0 = a.x.min(b.x).min(c.x);
        let y0 = a.y.min(b.y).min(c.y);
        let x1 = a.x.max(b.x).max(c.x);
        let y1 = a.y.max(b.y).max(c.y);

        let min_z = zcurve::z_order(x0, y0, min_x, min_y, inv_size);
        let max_z = zcurve::z_order(x1, y1, min_x, min_y, inv_size);

        let mut p = b.prev_z;
        let mut n = b.next_z;

        let blocks = |id: NodeId| -> bool {
            let v = nodes[id];
            id != b.prev
                && id != b.next
                && (v.x >= x0 && v.x <= x1 && v.y >= y0 && v.y <= y1)
                && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, v.x, v.y)
                && corner_area(&nodes[v.prev], &v, &nodes[v.next]) >= T::zero()
        };

        while let (Some(pi), Some(ni)) = (p, n) {
            if nodes[pi].z < Some(min_z) || nodes[ni].z > Some(max_z) {
                break;
            }
            if blocks(pi) {
                return false;
            }
            p = nodes[pi].prev_z;

            if blocks(ni) {
                return false;
            }
            n = nodes[ni].next_z;
        }

        while let Some(pi) = p {
            if nodes[pi].z < Some(min_z) {
                break;
            }
            if pi != b.prev
                && pi != b.next
                && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, nodes[pi].x, nodes[pi].y)
                && corner_area(&nodes[nodes[pi].prev], &nodes[pi], &nodes[nodes[pi].next])
                    >= T::zero()
            {
                return false;
            }
            p = nodes[pi].prev_z;
        }

        while let Some(ni) = n {
            if nodes[ni].z > Some(max_z) {
                break;
            }
            if ni != b.prev
                && ni != b.next
                && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, nodes[ni].x, nodes[ni].y)
                && corner_area(&nodes[nodes[ni].prev], &nodes[ni], &nodes[nodes[ni].next])
                    >= T::zero()
            {
                return false;
            }
            n = nodes[ni].next_z;
        }

        true
    }

    /// Pass 2: resolves small local self-intersections, where the segment
    /// before a vertex crosses the segment after its successor, by emitting
    /// the bridging triangle and dropping the two crossing points.
    pub(super) fn cure_local_intersections(
        &mut self,
        mut start: NodeId,
        out: &mut Vec<usize>,
        dim: usize,
    ) -> NodeId {
        let mut p = start;
        loop {
            let a = self.ring.nodes[p].prev;
            let p_next = self.ring.nodes[p].next;
            let b = self.ring.nodes[p_next].next;

            let crossing = {
                let nodes = &self.ring.nodes;
                !coincident(&nodes[a], &nodes[b])
                    && segments_cross(&nodes[a], &nodes[p], &nodes[p_next], &nodes[b])
                    && self.locally_inside(a, b)
                    && self.locally_inside(b, a)
            };

            if crossing {
                out.push(self.ring.nodes[a].i / dim);
                out.push(self.ring.nodes[p].i / dim);
                out.push(self.ring.nodes[b].i / dim);

                self.ring.remove(p);
                self.ring.remove(p_next);

                p = b;
                start = b;
            }

            p = self.ring.nodes[p].next;
            if p == start {
                break;
            }
        }
        self.ring.filter_points(p, None)
    }

    /// Pass 3, terminal: finds the first valid diagonal between non-adjacent
    /// vertices, splits the ring there and restarts the full engine on both
    /// halves. A fragment with no valid diagonal is left untriangulated.
    fn split_and_clip(
        &mut self,
        start: NodeId,
        out: &mut Vec<usize>,
        dim: usize,
        min_x: T,
        min_y: T,
        inv_size: T,
    ) {
        let mut a = start;
        loop {
            let a_prev = self.ring.nodes[a].prev;
            let mut b = self.ring.nodes[self.ring.nodes[a].next].next;

            while b != a_prev {
                if self.ring.nodes[a].i != self.ring.nodes[b].i && self.valid_diagonal(a, b) {
                    let second = self.ring.split(a, b);

                    let a_next = self.ring.nodes[a].next;
                    let first = self.ring.filter_points(a, Some(a_next));
                    let second_next = self.ring.nodes[second].next;
                    let second = self.ring.filter_points(second, Some(second_next));

                    self.clip_ears(first, out, dim, min_x, min_y, inv_size, 0);
                    self.clip_ears(second, out, dim, min_x, min_y, inv_size, 0);
                    return;
                }
                b = self.ring.nodes[b].next;
            }

            a = self.ring.nodes[a].next;
            if a == start {
                break;
            }
        }
        debug!("no valid diagonal in remaining fragment; abandoning it");
    }

    /// A diagonal `a -> b` may be used to split the ring when it stays inside
    /// the polygon and crosses no ring edge. Self-touching rings get a
    /// special case for zero-length diagonals between coincident vertices.
    fn valid_diagonal(&self, a: NodeId, b: NodeId) -> bool {
        let nodes = &self.ring.nodes;
        let a_next = nodes[a].next;
        let a_prev = nodes[a].prev;
        let b_next = nodes[b].next;
        let b_prev = nodes[b].prev;

        // Adjacency is judged by source vertex, not node identity: a split
        // may have duplicated either endpoint.
        if nodes[a_next].i == nodes[b].i || nodes[a_prev].i == nodes[b].i {
            return false;
        }
        if self.crosses_ring_edge(a, b) {
            return false;
        }

        let interior = self.locally_inside(a, b)
            && self.locally_inside(b, a)
            && self.midpoint_inside(a, b)
            // Does not connect opposite-facing sectors.
            && (corner_area(&nodes[a_prev], &nodes[a], &nodes[b_prev]) != T::zero()
                || corner_area(&nodes[a], &nodes[b_prev], &nodes[b]) != T::zero());

        let zero_length = coincident(&nodes[a], &nodes[b])
            && corner_area(&nodes[a_prev], &nodes[a], &nodes[a_next]) > T::zero()
            && corner_area(&nodes[b_prev], &nodes[b], &nodes[b_next]) > T::zero();

        interior || zero_length
    }

    /// Does the segment `a -> b` cross any ring edge not incident to either
    /// endpoint's source vertex?
    fn crosses_ring_edge(&self, a: NodeId, b: NodeId) -> bool {
        let nodes = &self.ring.nodes;
        let mut p = a;
        loop {
            let p_next = nodes[p].next;
            if nodes[p].i != nodes[a].i
                && nodes[p_next].i != nodes[a].i
                && nodes[p].i != nodes[b].i
                && nodes[p_next].i != nodes[b].i
                && segments_cross(&nodes[p], &nodes[p_next], &nodes[a], &nodes[b])
            {
                return true;
            }
            p = p_next;
            if p == a {
                break;
            }
        }
        false
    }

    /// Does the diagonal `a -> b` depart into the polygon's interior at `a`?
    /// Branches on whether the corner at `a` is convex or reflex.
    pub(super) fn locally_inside(&self, a: NodeId, b: NodeId) -> bool {
        let nodes = &self.ring.nodes;
        let a_prev = &nodes[nodes[a].prev];
        let a_next = &nodes[nodes[a].next];
        let av = &nodes[a];
        let bv = &nodes[b];

        if corner_area(a_prev, av, a_next) < T::zero() {
            corner_area(av, bv, a_next) >= T::zero() && corner_area(av, a_prev, bv) >= T::zero()
        } else {
            corner_area(av, bv, a_prev) < T::zero() || corner_area(av, a_next, bv) < T::zero()
        }
    }

    /// Ray-casting point-in-polygon test on the diagonal's midpoint.
    fn midpoint_inside(&self, a: NodeId, b: NodeId) -> bool {
        let nodes = &self.ring.nodes;
        let two = T::from(2.0).unwrap();
        let px = (nodes[a].x + nodes[b].x) / two;
        let py = (nodes[a].y + nodes[b].y) / two;

        let mut inside = false;
        let mut p = a;
        loop {
            let next = nodes[p].next;
            let pv = &nodes[p];
            let nv = &nodes[next];
            if ((pv.y > py) != (nv.y > py))
                && nv.y != pv.y
                && px < (nv.x - pv.x) * (py - pv.y) / (nv.y - pv.y) + pv.x
            {
                inside = !inside;
            }
            p = next;
            if p == a {
                break;
            }
        }
        inside
    }
}
