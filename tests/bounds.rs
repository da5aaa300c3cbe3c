use nalgebra::{Matrix4, Point3, Vector3};
use rigwidget::core::{Mesh, Vertex};
use rigwidget::rig::{BoneSpaceProjector, group_bounds};

fn identity_projector() -> BoneSpaceProjector {
    BoneSpaceProjector::new(
        &Matrix4::identity(),
        &Matrix4::identity(),
        &Matrix4::identity(),
    )
    .expect("identity transforms are invertible")
}

fn skinned_mesh(group: &str, positions: &[(f32, f32, f32)]) -> Mesh {
    let mut mesh = Mesh::new();
    let index = mesh.add_group(group);
    for &(x, y, z) in positions {
        mesh.add_vertex(Vertex::with_weights(
            Point3::new(x, y, z),
            [(index, 1.0)],
        ));
    }
    mesh
}

#[test]
fn projection_composes_mesh_and_bone_transforms() {
    let mesh_world = Matrix4::new_translation(&Vector3::new(1.0, 0.0, 0.0));
    let armature_world = Matrix4::new_translation(&Vector3::new(0.0, 2.0, 0.0));
    let bone_local = Matrix4::new_translation(&Vector3::new(0.0, 0.0, 3.0));

    let projector = BoneSpaceProjector::new(&mesh_world, &armature_world, &bone_local)
        .expect("transforms are invertible");

    // world = vertex + (1, 0, 0); bone world origin sits at (0, 2, 3).
    let projected = projector.project(&Point3::new(0.0, 0.0, 0.0));
    assert!((projected - Point3::new(1.0, -2.0, -3.0)).norm() < 1e-6);
}

#[test]
fn singular_bone_world_transform_is_rejected() {
    let squashed = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 0.0, 1.0));
    let result = BoneSpaceProjector::new(&Matrix4::identity(), &Matrix4::identity(), &squashed);
    assert!(result.is_err());
}

#[test]
fn every_qualifying_vertex_lies_within_the_bounds() {
    let positions = [
        (0.5, -1.5, 2.0),
        (-3.0, 0.0, 0.25),
        (1.0, 4.0, -2.0),
        (0.0, 0.0, 0.0),
    ];
    let mesh = skinned_mesh("Bone", &positions);
    let projector = identity_projector();

    let bounds = group_bounds(&mesh, 0, &projector).unwrap();
    for &(x, y, z) in &positions {
        let projected = projector.project(&Point3::new(x, y, z));
        assert!(bounds.contains(&projected));
    }
}

#[test]
fn center_and_dimensions_derive_from_min_and_max() {
    let mesh = skinned_mesh("Bone", &[(-1.0, -2.0, -3.0), (3.0, 2.0, 1.0)]);
    let bounds = group_bounds(&mesh, 0, &identity_projector()).unwrap();

    assert_eq!(bounds.min, Point3::new(-1.0, -2.0, -3.0));
    assert_eq!(bounds.max, Point3::new(3.0, 2.0, 1.0));
    assert_eq!(bounds.center(), Point3::new(1.0, 0.0, -1.0));
    assert_eq!(bounds.dimensions(), Vector3::new(4.0, 4.0, 4.0));

    let dims = bounds.dimensions();
    assert!(dims.x >= 0.0 && dims.y >= 0.0 && dims.z >= 0.0);
}

#[test]
fn zero_weights_do_not_contribute() {
    let mut mesh = Mesh::new();
    let group = mesh.add_group("Bone");
    mesh.add_vertex(Vertex::with_weights(Point3::new(9.0, 9.0, 9.0), [(group, 0.0)]));
    mesh.add_vertex(Vertex::with_weights(Point3::new(1.0, 1.0, 1.0), [(group, 0.4)]));

    let bounds = group_bounds(&mesh, group, &identity_projector()).unwrap();
    assert_eq!(bounds.min, Point3::new(1.0, 1.0, 1.0));
    assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));
}

#[test]
fn first_nonzero_group_membership_wins() {
    let mut mesh = Mesh::new();
    let first = mesh.add_group("First");
    let second = mesh.add_group("Second");

    // Zero-weight entry is skipped; the vertex belongs to whichever group
    // carries its first nonzero weight.
    mesh.add_vertex(Vertex::with_weights(
        Point3::new(2.0, 0.0, 0.0),
        [(first, 0.0), (second, 0.5), (first, 0.5)],
    ));

    let projector = identity_projector();
    assert!(group_bounds(&mesh, first, &projector).is_none());

    let bounds = group_bounds(&mesh, second, &projector).unwrap();
    assert_eq!(bounds.min, Point3::new(2.0, 0.0, 0.0));
}

#[test]
fn group_with_no_qualifying_vertices_has_no_bounds() {
    let mut mesh = Mesh::new();
    let group = mesh.add_group("Bone");
    mesh.add_vertex(Vertex::new(Point3::new(1.0, 2.0, 3.0)));

    assert!(group_bounds(&mesh, group, &identity_projector()).is_none());
}
