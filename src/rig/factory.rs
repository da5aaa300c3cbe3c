use crate::core::{BoundsBox, Widget, WidgetGeometry, WidgetShape};
use crate::rig::primitives;
use nalgebra::{Point3, Vector3};

/// Produces the proxy geometry for one bone.
///
/// Shape selection is evaluated once per bone and is mutually exclusive:
/// roots get a flat plane, bones with usable skin bounds get a fitted box,
/// attachment bones without bounds get a sphere, and everything else gets
/// a non-renderable arrows marker. Every widget comes out hidden from
/// viewport and render.
pub fn build_widget(
    bone_name: &str,
    has_parent: bool,
    has_skin_group: bool,
    bounds: Option<&BoundsBox>,
    color: Vector3<f32>,
) -> Widget {
    let (shape, geometry) = if !has_parent {
        (WidgetShape::Root, primitives::root_plane())
    } else if let (true, Some(bounds)) = (has_skin_group, bounds) {
        (WidgetShape::Box, fitted_box(bounds))
    } else if bone_name.to_ascii_lowercase().contains("attachment") {
        (WidgetShape::Sphere, primitives::icosphere())
    } else {
        (WidgetShape::Marker, WidgetGeometry::Arrows)
    };

    Widget {
        name: Widget::name_for_bone(bone_name),
        shape,
        geometry,
        color,
        hide_viewport: true,
        hide_render: true,
    }
}

/// Unit cube scaled by half the bounds' dimensions per axis and translated
/// onto its center, all in bone-local space.
fn fitted_box(bounds: &BoundsBox) -> WidgetGeometry {
    let half = bounds.dimensions() / 2.0;
    let center = bounds.center();

    match primitives::unit_cube() {
        WidgetGeometry::Mesh { vertices, indices } => WidgetGeometry::Mesh {
            vertices: vertices
                .into_iter()
                .map(|p| Point3::from(p.coords.component_mul(&half) + center.coords))
                .collect(),
            indices,
        },
        marker => marker,
    }
}
