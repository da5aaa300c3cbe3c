use nalgebra::{Point3, Vector3};

/// Name prefix shared by every generated widget object.
pub const WIDGET_PREFIX: &str = "WGT-";

/// The proxy shape kind selected for a bone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetShape {
    /// Flat quad for hierarchy roots.
    Root,
    /// Cube fitted to the bone's skinned vertex bounds.
    Box,
    /// Icosphere for attachment bones without usable bounds.
    Sphere,
    /// Directional-arrows marker for everything else without bounds.
    Marker,
}

impl WidgetShape {
    /// Whether the display shape scales with the bone's length. Box widgets
    /// are fitted in absolute bone-local units and must not.
    pub fn scales_with_bone_length(self) -> bool {
        !matches!(self, WidgetShape::Box)
    }
}

#[derive(Debug, Clone)]
pub enum WidgetGeometry {
    Mesh {
        vertices: Vec<Point3<f32>>,
        indices: Vec<u32>,
    },
    /// Non-renderable directional-arrows marker; carries no mesh data.
    Arrows,
}

/// A display-only proxy object generated for one bone.
///
/// Widgets are owned by the collection they are linked into; pose bones
/// hold non-owning handles back to them. A widget is created once per bone
/// during a synthesis pass and never mutated afterward.
#[derive(Debug, Clone)]
pub struct Widget {
    pub name: String,
    pub shape: WidgetShape,
    pub geometry: WidgetGeometry,
    pub color: Vector3<f32>,
    pub hide_viewport: bool,
    pub hide_render: bool,
}

impl Widget {
    /// Derives the widget object name for a bone. Uniqueness is inherited
    /// from bone-name uniqueness.
    pub fn name_for_bone(bone: &str) -> String {
        format!("{WIDGET_PREFIX}{bone}")
    }
}
