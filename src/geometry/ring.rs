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

use crate::kernel::predicates::{coincident, corner_area, signed_area};

/// Stable handle into a [`RingArena`]. Links between nodes are stored as ids,
/// never as references, so rings can be rewired freely without lifetime
/// gymnastics and the arena can drop everything at once when a call ends.
pub(crate) type NodeId = usize;

/// One occurrence of a polygon vertex in a circular ring.
///
/// `i` is the raw offset into the source coordinate buffer; it is what ends
/// up in the output (divided by `dim`), and the same source vertex may appear
/// in several nodes after splits. `prev`/`next` are always valid ring links
/// (a freshly allocated node links to itself). `prev_z`/`next_z` form the
/// secondary z-order index and only exist while that index is live.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node<T: Float> {
    pub i: usize,
    pub x: T,
    pub y: T,
    /// Lazily assigned z-order locality code.
    pub z: Option<u32>,
    /// Single-point hole, kept even when it forms a zero-area corner.
    pub steiner: bool,
    pub prev: NodeId,
    pub next: NodeId,
    pub prev_z: Option<NodeId>,
    pub next_z: Option<NodeId>,
}

/// Owns every node created during one tessellation call.
///
/// Nodes are never freed individually; removal just unlinks them. `reset`
/// releases the whole generation, which bounds peak memory to O(n) per call.
#[derive(Debug, Default)]
pub(crate) struct RingArena<T: Float> {
    pub nodes: Vec<Node<T>>,
}

impl<T: Float> RingArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn reset(&mut self, capacity: usize) {
        self.nodes.clear();
        self.nodes.reserve(capacity);
    }

    fn alloc(&mut self, i: usize, x: T, y: T) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            i,
            x,
            y,
            z: None,
            steiner: false,
            prev: id,
            next: id,
            prev_z: None,
            next_z: None,
        });
        id
    }

    /// Inserts a new node after `last`, or starts a new single-node ring.
    fn insert(&mut self, i: usize, x: T, y: T, last: Option<NodeId>) -> NodeId {
        let id = self.alloc(i, x, y);
        if let Some(last) = last {
            let next = self.nodes[last].next;
            self.nodes[id].next = next;
            self.nodes[id].prev = last;
            self.nodes[next].prev = id;
            self.nodes[last].next = id;
        }
        id
    }

    /// Unlinks `id` from its ring and from the z-order index. The node stays
    /// allocated until the arena is reset.
    pub fn remove(&mut self, id: NodeId) {
        let Node {
            prev,
            next,
            prev_z,
            next_z,
            ..
        } = self.nodes[id];
        self.nodes[next].prev = prev;
        self.nodes[prev].next = next;
        if let Some(pz) = prev_z {
            self.nodes[pz].next_z = next_z;
        }
        if let Some(nz) = next_z {
            self.nodes[nz].prev_z = prev_z;
        }
    }

    /// Builds a circular ring from `data[start..end]` stepped by `dim`, with
    /// the requested winding regardless of the input's own orientation.
    ///
    /// A duplicated closing point is dropped. Returns a representative node,
    /// or `None` for an empty slice.
    pub fn build(
        &mut self,
        data: &[T],
        start: usize,
        end: usize,
        dim: usize,
        clockwise: bool,
    ) -> Option<NodeId> {
        if end <= start {
            return None;
        }

        let mut last: Option<NodeId> = None;
        if clockwise == (signed_area(data, start, end, dim) > T::zero()) {
            let mut i = start;
            while i < end {
                last = Some(self.insert(i, data[i], data[i + 1], last));
                i += dim;
            }
        } else {
            let mut i = end - dim;
            loop {
                last = Some(self.insert(i, data[i], data[i + 1], last));
                if i == start {
                    break;
                }
                i -= dim;
            }
        }

        if let Some(li) = last {
            let next = self.nodes[li].next;
            if coincident(&self.nodes[li], &self.nodes[next]) {
                self.remove(li);
                last = Some(next);
            }
        }
        last
    }

    /// Removes coincident and zero-area (collinear) vertices from the ring,
    /// except steiner points. Returns a node still on the ring.
    pub fn filter_points(&mut self, start: NodeId, end: Option<NodeId>) -> NodeId {
        let mut end = end.unwrap_or(start);
        let mut p = start;
        loop {
            let node = self.nodes[p];
            let again = if !node.steiner
                && (coincident(&node, &self.nodes[node.next])
                    || corner_area(&self.nodes[node.prev], &node, &self.nodes[node.next])
                        == T::zero())
            {
                self.remove(p);
                p = node.prev;
                end = node.prev;
                if p == self.nodes[p].next {
                    break;
                }
                true
            } else {
                p = node.next;
                false
            };
            if !again && p == end {
                break;
            }
        }
        end
    }

    /// Splits the ring at the diagonal `a -> b` into two independent rings,
    /// duplicating both endpoints. Returns the duplicate of `b`, which sits
    /// on the second ring. No existing node is removed.
    pub fn split(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let a2 = {
            let n = self.nodes[a];
            self.alloc(n.i, n.x, n.y)
        };
        let b2 = {
            let n = self.nodes[b];
            self.alloc(n.i, n.x, n.y)
        };
        let an = self.nodes[a].next;
        let bp = self.nodes[b].prev;

        self.nodes[a].next = b;
        self.nodes[b].prev = a;

        self.nodes[a2].next = an;
        self.nodes[an].prev = a2;

        self.nodes[b2].next = a2;
        self.nodes[a2].prev = b2;

        self.nodes[bp].next = b2;
        self.nodes[b2].prev = bp;

        b2
    }

    /// Leftmost node of a ring; ties on x broken by smaller y.
    pub fn leftmost(&self, start: NodeId) -> NodeId {
        let mut p = start;
        let mut best = start;
        loop {
            let node = &self.nodes[p];
            let leader = &self.nodes[best];
            if node.x < leader.x || (node.x == leader.x && node.y < leader.y) {
                best = p;
            }
            p = node.next;
            if p == start {
                break;
            }
        }
        best
    }
}
