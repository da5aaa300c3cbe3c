//! Minimal host scene graph: the objects the synthesis pass consumes
//! (mesh, armature) and the containers it produces into (collections of
//! widgets, pose bone display state). Everything is passed explicitly;
//! there is no ambient registry.

use crate::core::{Mesh, Skeleton, Widget};
use nalgebra::{Matrix4, Vector3};
use snafu::Snafu;
use std::fmt;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum SelectObjectError {
    #[snafu(display("No {kind} object in the scene"))]
    Missing { kind: ObjectKind },
    #[snafu(display("Expected exactly one {kind} object, the scene has {count}"))]
    Ambiguous { kind: ObjectKind, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Mesh,
    Armature,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Mesh => write!(f, "mesh"),
            ObjectKind::Armature => write!(f, "armature"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ObjectData {
    Mesh(Mesh),
    Armature(Armature),
}

impl ObjectData {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectData::Mesh(_) => ObjectKind::Mesh,
            ObjectData::Armature(_) => ObjectKind::Armature,
        }
    }
}

/// A named scene object carrying its world transform.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub world_transform: Matrix4<f32>,
    pub data: ObjectData,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, world_transform: Matrix4<f32>, data: ObjectData) -> Self {
        SceneObject {
            name: name.into(),
            world_transform,
            data,
        }
    }
}

/// A skeleton paired with its per-bone pose display state, index-aligned
/// with the skeleton's bones.
#[derive(Debug, Clone)]
pub struct Armature {
    pub skeleton: Skeleton,
    pub pose: Vec<PoseBone>,
}

impl Armature {
    pub fn new(skeleton: Skeleton) -> Self {
        let pose = vec![PoseBone::default(); skeleton.len()];
        Armature { skeleton, pose }
    }
}

/// Per-bone display state written by the synthesis pass.
#[derive(Debug, Clone)]
pub struct PoseBone {
    /// Non-owning link to the bone's custom display shape.
    pub custom_shape: Option<WidgetHandle>,
    pub scale_with_bone_length: bool,
    pub custom_shape_scale: Vector3<f32>,
    pub wire_width: f32,
    pub color: Option<Vector3<f32>>,
    pub show_wire: bool,
}

impl Default for PoseBone {
    fn default() -> Self {
        PoseBone {
            custom_shape: None,
            scale_with_bone_length: true,
            custom_shape_scale: Vector3::new(1.0, 1.0, 1.0),
            wire_width: 1.0,
            color: None,
            show_wire: false,
        }
    }
}

/// Handle to a widget inside a collection. Collections are append-only
/// during a synthesis pass, so handles stay valid for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetHandle(u32);

/// A visual grouping construct owning the widgets linked into it.
#[derive(Debug, Clone)]
pub struct Collection {
    pub name: String,
    pub hidden: bool,
    widgets: Vec<Widget>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Collection {
            name: name.into(),
            hidden: false,
            widgets: Vec::new(),
        }
    }

    pub fn add(&mut self, widget: Widget) -> WidgetHandle {
        let handle = WidgetHandle(self.widgets.len() as u32);
        self.widgets.push(widget);
        handle
    }

    pub fn get(&self, handle: WidgetHandle) -> Option<&Widget> {
        self.widgets.get(handle.0 as usize)
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// The scene handed to the synthesis pass by the host.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub collections: Vec<Collection>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Selects the single object of `kind`, failing explicitly for both
    /// the zero and the multiple case.
    pub fn single(&self, kind: ObjectKind) -> Result<usize, SelectObjectError> {
        let matches: Vec<usize> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| obj.data.kind() == kind)
            .map(|(i, _)| i)
            .collect();
        match matches.as_slice() {
            [] => MissingErr { kind }.fail(),
            [index] => Ok(*index),
            many => AmbiguousErr {
                kind,
                count: many.len(),
            }
            .fail(),
        }
    }

    pub fn mesh(&self, index: usize) -> Option<(&Mesh, &Matrix4<f32>)> {
        let object = self.objects.get(index)?;
        match &object.data {
            ObjectData::Mesh(mesh) => Some((mesh, &object.world_transform)),
            ObjectData::Armature(_) => None,
        }
    }

    pub fn armature(&self, index: usize) -> Option<(&Armature, &Matrix4<f32>)> {
        let object = self.objects.get(index)?;
        match &object.data {
            ObjectData::Armature(armature) => Some((armature, &object.world_transform)),
            ObjectData::Mesh(_) => None,
        }
    }

    pub fn armature_mut(&mut self, index: usize) -> Option<&mut Armature> {
        let object = self.objects.get_mut(index)?;
        match &mut object.data {
            ObjectData::Armature(armature) => Some(armature),
            ObjectData::Mesh(_) => None,
        }
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn collection_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.iter_mut().find(|c| c.name == name)
    }

    /// Returns the named collection, creating it first if absent.
    pub fn ensure_collection(&mut self, name: &str) -> &mut Collection {
        if let Some(index) = self.collections.iter().position(|c| c.name == name) {
            return &mut self.collections[index];
        }
        self.collections.push(Collection::new(name));
        let last = self.collections.len() - 1;
        &mut self.collections[last]
    }

    /// Removes the named collection and everything it owns. Returns whether
    /// it was present.
    pub fn remove_collection(&mut self, name: &str) -> bool {
        let before = self.collections.len();
        self.collections.retain(|c| c.name != name);
        self.collections.len() != before
    }
}
