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

//! Malformed and degenerate fixtures. None of these may error or hang; the
//! contract is best-effort output with every index in range.

use tessel::{deviation, tessellate};

fn assert_well_formed(triangles: &[usize], vertex_count: usize) {
    assert_eq!(triangles.len() % 3, 0);
    assert!(triangles.iter().all(|&i| i < vertex_count));
}

#[test]
fn all_collinear_yields_nothing() {
    let vertices = [0.0, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0];
    let triangles = tessellate(&vertices, &[], 2).unwrap();
    assert!(triangles.is_empty());
}

#[test]
fn zero_area_triangle_yields_nothing() {
    let vertices = [0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    let triangles = tessellate(&vertices, &[], 2).unwrap();
    assert!(triangles.is_empty());
}

#[test]
fn fewer_than_three_vertices_yields_nothing() {
    assert!(tessellate(&[5.0, 5.0], &[], 2).unwrap().is_empty());
    assert!(tessellate(&[0.0, 0.0, 1.0, 1.0], &[], 2).unwrap().is_empty());
}

#[test]
fn duplicate_consecutive_vertices_are_absorbed() {
    let vertices = [0.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0];
    let triangles = tessellate(&vertices, &[], 2).unwrap();
    assert_well_formed(&triangles, 5);
    let dev = deviation(&vertices, &[], 2, &triangles);
    assert!(dev < 1e-12, "deviation {dev} too large");
}

#[test]
fn explicit_closing_point_is_dropped() {
    // First vertex repeated at the end, GeoJSON style. Dropping the duplicate
    // may rotate where the ear scan starts, so the fan can be a rotation of
    // the open polygon's; only count, index range and coverage are stable.
    let closed = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0, 0.0, 0.0];
    let open = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    for vertices in [&closed[..], &open[..]] {
        let triangles = tessellate(vertices, &[], 2).unwrap();
        assert_eq!(triangles.len(), 2 * 3);
        assert!(triangles.iter().all(|&i| i < 4));
        let dev = deviation(vertices, &[], 2, &triangles);
        assert!(dev < 1e-12, "deviation {dev} too large");
    }
}

#[test]
fn self_intersecting_bowtie_terminates() {
    let vertices = [0.0, 0.0, 2.0, 2.0, 2.0, 0.0, 0.0, 2.0];
    let triangles = tessellate(&vertices, &[], 2).unwrap();
    assert_well_formed(&triangles, 4);
}

#[test]
fn self_touching_boundary_terminates() {
    // Pinched octagon: the waist vertex appears twice.
    let vertices = [
        0.0, 0.0, 4.0, 0.0, 4.0, 2.0, 2.0, 2.0, 4.0, 2.0, 4.0, 4.0, 0.0, 4.0, 2.0, 2.0,
    ];
    let triangles = tessellate(&vertices, &[], 2).unwrap();
    assert_well_formed(&triangles, 8);
    assert!(!triangles.is_empty());
}

#[test]
fn hole_touching_outer_boundary() {
    let vertices = [
        0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0, // outer
        100.0, 50.0, 60.0, 40.0, 60.0, 60.0, // hole tangent to the right edge
    ];
    let triangles = tessellate(&vertices, &[4], 2).unwrap();
    assert_well_formed(&triangles, 7);
    assert!(!triangles.is_empty());
    let dev = deviation(&vertices, &[4], 2, &triangles);
    assert!(dev < 1e-12, "deviation {dev} too large");
}

#[test]
fn steiner_point_hole() {
    // A single-vertex "hole" is an interior point the tessellation must pass
    // through; it bounds no area, so the covered area is the full square.
    let vertices = [
        0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0, // outer
        50.0, 50.0, // interior point
    ];
    let triangles = tessellate(&vertices, &[4], 2).unwrap();
    assert_well_formed(&triangles, 5);
    assert!(!triangles.is_empty());
    assert!(triangles.contains(&4), "interior point unused");
    let dev = deviation(&vertices, &[4], 2, &triangles);
    assert!(dev < 1e-12, "deviation {dev} too large");
}

#[test]
fn degenerate_hole_collapsed_to_segment() {
    let vertices = [
        0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0, // outer
        40.0, 50.0, 60.0, 50.0, // zero-area hole
    ];
    let triangles = tessellate(&vertices, &[4], 2).unwrap();
    assert_well_formed(&triangles, 6);
    assert!(!triangles.is_empty());
    let dev = deviation(&vertices, &[4], 2, &triangles);
    assert!(dev < 1e-12, "deviation {dev} too large");
}

#[test]
fn spike_polygon_terminates() {
    // Zero-width spike into the interior.
    let vertices = [
        0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 5.0, 10.0, 5.0, 4.0, 5.0, 10.0, 0.0, 10.0,
    ];
    let triangles = tessellate(&vertices, &[], 2).unwrap();
    assert_well_formed(&triangles, 7);
    assert!(!triangles.is_empty());
}
