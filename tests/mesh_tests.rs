// Host-side tests for the pure geometry builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/mesh.rs"]
mod mesh;

use mesh::*;

#[test]
fn torus_knot_has_expected_vertex_and_index_counts() {
    let m = torus_knot(3.0, 1.0, 200, 32, 2, 3);
    assert_eq!(m.positions.len(), 201 * 33);
    assert_eq!(m.normals.len(), m.positions.len());
    assert_eq!(m.indices.len(), 200 * 32 * 6);

    let max = *m.indices.iter().max().unwrap() as usize;
    assert!(max < m.positions.len());
}

#[test]
fn torus_knot_normals_are_unit_length() {
    let m = torus_knot(3.0, 1.0, 64, 12, 2, 3);
    for n in &m.normals {
        assert!((n.length() - 1.0).abs() < 1e-3, "normal length {}", n.length());
    }
}

#[test]
fn torus_knot_stays_within_its_bounding_radius() {
    let m = torus_knot(3.0, 1.0, 200, 32, 2, 3);
    // Center curve never exceeds radius * 1.5; add the tube radius.
    let bound = 3.0 * 1.5 + 1.0 + 0.1;
    for p in &m.positions {
        assert!(p.length() <= bound, "vertex {} outside {}", p.length(), bound);
    }
}

#[test]
fn torus_knot_triangles_are_nondegenerate() {
    let m = torus_knot(3.0, 1.0, 32, 8, 2, 3);
    for tri in m.indices.chunks(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        assert!(a != b && b != c && a != c);
    }
}

#[test]
fn box_edges_form_twelve_axis_aligned_segments() {
    let edges = box_edges(2.0, 2.0, 0.1);
    assert_eq!(edges.len(), 24);

    for pair in edges.chunks(2) {
        let delta = pair[1] - pair[0];
        // Each edge runs along exactly one axis.
        let moving = [delta.x, delta.y, delta.z]
            .iter()
            .filter(|d| d.abs() > 1e-6)
            .count();
        assert_eq!(moving, 1);
    }

    for v in &edges {
        assert!((v.x.abs() - 1.0).abs() < 1e-6);
        assert!((v.y.abs() - 1.0).abs() < 1e-6);
        assert!((v.z.abs() - 0.05).abs() < 1e-6);
    }
}
