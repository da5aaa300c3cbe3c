#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
//! Bone widget synthesis for skinned rigs.
//!
//! Given a scene holding one skinned mesh and one armature, the
//! [`RigDecorator`] derives a proxy shape ("widget") for every bone. The
//! widget's geometry encodes the extent of the bone's skinned vertices and
//! its color encodes the bone's semantic role (side, body region, hierarchy
//! position). Widgets end up in a hidden collection and are installed on
//! each pose bone as its custom display shape.

pub mod core;
pub mod rig;
pub mod utils;

pub use crate::core::{
    Armature, BoundsBox, Collection, Mesh, ObjectKind, Scene, SceneObject, Skeleton, Widget,
    WidgetGeometry, WidgetShape,
};
pub use crate::rig::{
    BoneCategory, Classification, DecorationReport, DecoratorStyle, RigDecorator, classify,
};
