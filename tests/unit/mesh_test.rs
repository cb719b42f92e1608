//! Tests for mesh topology

use mesh_inspector::mesh::{MeshError, PolyMesh, lamina_faces, uv_shell_count};

use crate::common::fixtures::MeshBuilder;

#[test]
fn strip_triangle_count() {
    assert_eq!(MeshBuilder::triangle_strip(7).build().triangle_count(), 7);
}

#[test]
fn pentagon_counts_three_triangles() {
    let mesh = PolyMesh::new(vec![[0.0; 3]; 5], vec![vec![0, 1, 2, 3, 4]]);
    assert_eq!(mesh.triangle_count(), 3);
}

#[test]
fn lamina_groups_of_three() {
    let faces = vec![vec![0, 1, 2], vec![5, 6, 7], vec![2, 1, 0], vec![1, 2, 0]];
    assert_eq!(lamina_faces(&faces), vec![0, 2, 3]);
}

#[test]
fn shared_edge_is_not_lamina() {
    let faces = vec![vec![0, 1, 2], vec![2, 1, 3]];
    assert!(lamina_faces(&faces).is_empty());
}

#[test]
fn two_islands_two_shells() {
    let face_uvs = vec![vec![0, 1, 2], vec![3, 4, 5], vec![2, 1, 6]];
    assert_eq!(uv_shell_count(&face_uvs, 7), 2);
}

#[test]
fn mapped_builder_has_one_shell() {
    let mesh = MeshBuilder::triangle_strip(10).mapped().build();
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.uv_shell_count(), 1);
}

#[test]
fn uv_face_count_mismatch_rejected() {
    let mesh = MeshBuilder::triangle_strip(2).build().with_uvs(vec![[0.0, 0.0]; 4], vec![vec![0, 1, 2]]);
    assert_eq!(mesh.validate(), Err(MeshError::UvFaceCount { faces: 2, uv_faces: 1 }));
}

#[test]
fn uv_index_out_of_range_rejected() {
    let mesh = MeshBuilder::quad().build().with_uvs(vec![[0.0, 0.0]; 3], vec![vec![0, 1, 2, 3]]);
    assert!(matches!(mesh.validate(), Err(MeshError::UvOutOfRange { face: 0, index: 3, .. })));
}
