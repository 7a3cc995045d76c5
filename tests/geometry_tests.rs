// Host-side tests for icosphere wireframe generation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;

fn expected_counts(detail: u32) -> (usize, usize, usize) {
    let n = ((detail + 1) * (detail + 1)) as usize;
    (10 * n + 2, 30 * n, 20 * n)
}

fn assert_counts(detail: u32) {
    let mesh = icosphere_wireframe(4.0, detail);
    let (v, e, f) = expected_counts(detail);
    assert_eq!(mesh.vertices.len(), v, "vertices at detail {}", detail);
    assert_eq!(mesh.edge_count(), e, "edges at detail {}", detail);
    assert_eq!(mesh.triangle_count, f, "faces at detail {}", detail);
    // closed sphere
    assert_eq!(v as i64 - e as i64 + f as i64, 2);
}

#[test]
fn base_icosahedron_counts() {
    assert_counts(0);
    let mesh = icosphere_wireframe(1.0, 0);
    assert_eq!(mesh.vertices.len(), 12);
    assert_eq!(mesh.edge_count(), 30);
}

#[test]
fn subdivided_counts() {
    for detail in [1, 2, 3, 7] {
        assert_counts(detail);
    }
}

#[test]
fn full_detail_mesh_counts() {
    let mesh = icosphere_wireframe(4.0, 100);
    assert_eq!(mesh.vertices.len(), 102_012);
    assert_eq!(mesh.edge_count(), 306_030);
    assert_eq!(mesh.triangle_count, 204_020);
}

#[test]
fn vertices_lie_on_sphere_with_unit_normals() {
    let radius = 4.0;
    let mesh = icosphere_wireframe(radius, 5);
    for v in &mesh.vertices {
        let p = glam::Vec3::from_array(v.position);
        let n = glam::Vec3::from_array(v.normal);
        assert!((p.length() - radius).abs() < 1e-4);
        assert!((n.length() - 1.0).abs() < 1e-5);
        // normals point outward along the position
        assert!((p.normalize().dot(n) - 1.0).abs() < 1e-5);
    }
}

#[test]
fn line_indices_are_valid_and_unique() {
    let mesh = icosphere_wireframe(2.0, 3);
    let count = mesh.vertices.len() as u32;
    assert_eq!(mesh.line_indices.len() % 2, 0);
    let mut seen = std::collections::HashSet::new();
    for pair in mesh.line_indices.chunks(2) {
        assert!(pair[0] < count && pair[1] < count);
        assert_ne!(pair[0], pair[1]);
        let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        assert!(seen.insert(key), "duplicate edge {:?}", key);
    }
}

#[test]
fn every_vertex_has_icosphere_valence() {
    let mesh = icosphere_wireframe(1.0, 2);
    let mut valence = vec![0u32; mesh.vertices.len()];
    for &i in &mesh.line_indices {
        valence[i as usize] += 1;
    }
    let fives = valence.iter().filter(|&&d| d == 5).count();
    assert_eq!(fives, 12);
    assert!(valence.iter().all(|&d| d == 5 || d == 6));
}
