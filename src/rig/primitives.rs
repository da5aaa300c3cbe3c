//! Procedural primitive geometry for the widget shapes.

use crate::core::WidgetGeometry;
use nalgebra::{Point3, Rotation3, Vector3};
use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;

/// Flat 2x2 quad rotated 90° about its local X axis so its face lies in
/// the plane orthogonal to the default orientation.
pub fn root_plane() -> WidgetGeometry {
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2);
    let vertices = [
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(-1.0, 1.0, 0.0),
    ]
    .iter()
    .map(|p| rotation * p)
    .collect();

    WidgetGeometry::Mesh {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Cube with half-extent 1 (vertices at ±1), so scaling by half of a
/// bounds' dimensions yields a box of exactly those dimensions.
pub fn unit_cube() -> WidgetGeometry {
    let vertices = vec![
        Point3::new(-1.0, -1.0, -1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(1.0, 1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
        Point3::new(1.0, -1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-1.0, 1.0, 1.0),
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 2, 1, 0, 3, 2, // -z
        4, 5, 6, 4, 6, 7, // +z
        0, 1, 5, 0, 5, 4, // -y
        3, 7, 6, 3, 6, 2, // +y
        0, 4, 7, 0, 7, 3, // -x
        1, 2, 6, 1, 6, 5, // +x
    ];

    WidgetGeometry::Mesh { vertices, indices }
}

/// Unit-radius icosphere at one subdivision level (42 vertices, 80 faces).
pub fn icosphere() -> WidgetGeometry {
    // Icosahedron: three orthogonal golden-ratio rectangles.
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut vertices: Vec<Point3<f32>> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| normalized(Point3::new(x, y, z)))
    .collect();

    #[rustfmt::skip]
    let faces: [[u32; 3]; 20] = [
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    let mut indices = Vec::with_capacity(faces.len() * 4 * 3);
    for [a, b, c] in faces {
        let ab = midpoint(&mut vertices, &mut midpoints, a, b);
        let bc = midpoint(&mut vertices, &mut midpoints, b, c);
        let ca = midpoint(&mut vertices, &mut midpoints, c, a);
        indices.extend([a, ab, ca, b, bc, ab, c, ca, bc, ab, bc, ca]);
    }

    WidgetGeometry::Mesh { vertices, indices }
}

fn midpoint(
    vertices: &mut Vec<Point3<f32>>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = (a.min(b), a.max(b));
    if let Some(&index) = cache.get(&key) {
        return index;
    }

    let mid = nalgebra::center(&vertices[a as usize], &vertices[b as usize]);
    let index = vertices.len() as u32;
    vertices.push(normalized(mid));
    cache.insert(key, index);
    index
}

fn normalized(point: Point3<f32>) -> Point3<f32> {
    Point3::from(point.coords.normalize())
}
