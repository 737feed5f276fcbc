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

//! Randomized stress tests with fixed seeds. Star polygons are simple by
//! construction, so exact triangle counts and near-zero deviation are hard
//! requirements; arbitrary point clouds only have to terminate with every
//! index in range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tessel::{deviation, tessellate};

/// Radially sorted vertices at random radii: always a simple polygon.
fn random_star(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let mut vertices = Vec::with_capacity(n * 2);
    for k in 0..n {
        let angle = std::f64::consts::TAU * k as f64 / n as f64;
        let radius: f64 = rng.random_range(50.0..100.0);
        vertices.push(radius * angle.cos());
        vertices.push(radius * angle.sin());
    }
    vertices
}

#[test]
fn random_stars_below_index_threshold() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let n = rng.random_range(3..=60);
        let vertices = random_star(&mut rng, n);
        let triangles = tessellate(&vertices, &[], 2).unwrap();
        assert_eq!(triangles.len(), (n - 2) * 3, "n = {n}");
        let dev = deviation(&vertices, &[], 2, &triangles);
        assert!(dev < 1e-9, "n = {n}, deviation {dev} too large");
    }
}

#[test]
fn random_stars_above_index_threshold() {
    // Enough vertices to force the z-order indexed path; results must agree
    // with the unindexed invariants.
    let mut rng = StdRng::seed_from_u64(0xacce1);
    for _ in 0..10 {
        let n = rng.random_range(200..=500);
        let vertices = random_star(&mut rng, n);
        let triangles = tessellate(&vertices, &[], 2).unwrap();
        assert_eq!(triangles.len(), (n - 2) * 3, "n = {n}");
        let dev = deviation(&vertices, &[], 2, &triangles);
        assert!(dev < 1e-9, "n = {n}, deviation {dev} too large");
    }
}

#[test]
fn random_point_clouds_terminate() {
    // Almost surely self-intersecting; only the structural guarantees hold.
    let mut rng = StdRng::seed_from_u64(0xc10d);
    for _ in 0..25 {
        let n = rng.random_range(3..=100);
        let mut vertices = Vec::with_capacity(n * 2);
        for _ in 0..n {
            vertices.push(rng.random_range(0.0..100.0));
            vertices.push(rng.random_range(0.0..100.0));
        }
        let triangles = tessellate(&vertices, &[], 2).unwrap();
        assert_eq!(triangles.len() % 3, 0);
        assert!(triangles.iter().all(|&i| i < n));
    }
}

#[test]
fn random_squares_with_random_grid_holes() {
    let mut rng = StdRng::seed_from_u64(0xf00d);
    for _ in 0..20 {
        let mut vertices = vec![0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
        let mut holes = Vec::new();
        // Disjoint holes, one per grid cell.
        for cell_x in 0..3 {
            for cell_y in 0..3 {
                if rng.random_range(0..2) == 0 {
                    continue;
                }
                let x0 = cell_x as f64 * 30.0 + rng.random_range(5.0..10.0);
                let y0 = cell_y as f64 * 30.0 + rng.random_range(5.0..10.0);
                let w = rng.random_range(5.0..15.0);
                let h = rng.random_range(5.0..15.0);
                holes.push(vertices.len() / 2);
                vertices.extend_from_slice(&[x0, y0, x0 + w, y0, x0 + w, y0 + h, x0, y0 + h]);
            }
        }
        let triangles = tessellate(&vertices, &holes, 2).unwrap();
        let vertex_count = vertices.len() / 2;
        assert!(triangles.iter().all(|&i| i < vertex_count));
        let dev = deviation(&vertices, &holes, 2, &triangles);
        assert!(dev < 1e-9, "deviation {dev} too large");
    }
}
