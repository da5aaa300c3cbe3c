//! The per-bone synthesis pass over a scene.

use crate::core::{ObjectKind, Scene, Widget, scene::MissingErr, scene::SelectObjectError};
use crate::rig::{BoneSpaceProjector, build_widget, classify, group_bounds};
use itertools::Itertools;
use log::{debug, info, warn};
use nalgebra::Vector3;

/// Knobs for a synthesis pass. Defaults mirror the conventions of glTF
/// character imports.
#[derive(Debug, Clone)]
pub struct DecoratorStyle {
    /// Collection receiving every generated widget; created if absent and
    /// always forced hidden.
    pub widget_collection: String,
    /// Transient import collection removed in the pre-pass cleanup.
    pub transient_collection: String,
    /// Outline width written onto each decorated pose bone.
    pub wire_width: f32,
}

impl Default for DecoratorStyle {
    fn default() -> Self {
        DecoratorStyle {
            widget_collection: "Widgets".to_string(),
            transient_collection: "glTF_not_exported".to_string(),
            wire_width: 2.0,
        }
    }
}

/// Outcome of a completed pass.
#[derive(Debug, Default, Clone)]
pub struct DecorationReport {
    /// Number of bones that received a widget.
    pub decorated: usize,
    /// Bones skipped because their world transform was degenerate.
    pub skipped: Vec<String>,
}

struct PlannedWidget {
    bone: usize,
    widget: Widget,
    color: Vector3<f32>,
}

/// Orchestrates widget synthesis for every bone of the scene's armature.
///
/// The pass is single-threaded and deterministic; bones are processed one
/// at a time in the skeleton's native order, and no bone's widget depends
/// on another's. A degenerate transform skips only the bone it belongs to.
/// Re-running the pass recreates equivalently-specified widgets; widgets
/// from earlier runs are not cleaned up.
#[derive(Debug, Default)]
pub struct RigDecorator {
    style: DecoratorStyle,
}

impl RigDecorator {
    pub fn new(style: DecoratorStyle) -> Self {
        RigDecorator { style }
    }

    /// Runs the full pass: pre-pass cleanup, mesh/armature selection, then
    /// per-bone classification, shape synthesis, and pose wiring.
    ///
    /// Selection failure aborts before any widget is created; the pre-pass
    /// cleanup is the only mutation that has happened at that point.
    pub fn run(&self, scene: &mut Scene) -> Result<DecorationReport, SelectObjectError> {
        self.cleanup(scene);

        let mesh_index = scene.single(ObjectKind::Mesh)?;
        let armature_index = scene.single(ObjectKind::Armature)?;

        let (planned, skipped) = self.plan(scene, mesh_index, armature_index)?;
        let decorated = planned.len();
        self.apply(scene, armature_index, planned)?;

        if skipped.is_empty() {
            info!("Decorated {decorated} bones");
        } else {
            warn!(
                "Decorated {decorated} bones, skipped: {}",
                skipped.iter().join(", ")
            );
        }
        Ok(DecorationReport { decorated, skipped })
    }

    fn cleanup(&self, scene: &mut Scene) {
        if scene.remove_collection(&self.style.transient_collection) {
            debug!(
                "Removed transient collection '{}'",
                self.style.transient_collection
            );
        }
        scene.ensure_collection(&self.style.widget_collection).hidden = true;
    }

    /// Read-only phase: compute every bone's widget and color.
    fn plan(
        &self,
        scene: &Scene,
        mesh_index: usize,
        armature_index: usize,
    ) -> Result<(Vec<PlannedWidget>, Vec<String>), SelectObjectError> {
        let Some((mesh, mesh_world)) = scene.mesh(mesh_index) else {
            return MissingErr {
                kind: ObjectKind::Mesh,
            }
            .fail();
        };
        let Some((armature, armature_world)) = scene.armature(armature_index) else {
            return MissingErr {
                kind: ObjectKind::Armature,
            }
            .fail();
        };

        let skeleton = &armature.skeleton;
        let mut planned = Vec::with_capacity(skeleton.len());
        let mut skipped = Vec::new();

        for bone in 0..skeleton.len() {
            let name = skeleton.name(bone);
            let has_parent = skeleton.has_parent(bone);
            let class = classify(name, has_parent);

            let group = mesh.group_index(name);
            let bounds = match group {
                Some(group) => {
                    let projector = match BoneSpaceProjector::new(
                        mesh_world,
                        armature_world,
                        skeleton.local(bone),
                    ) {
                        Ok(projector) => projector,
                        Err(err) => {
                            warn!("Skipping bone '{name}': {err}");
                            skipped.push(name.to_string());
                            continue;
                        }
                    };
                    let bounds = group_bounds(mesh, group, &projector);
                    if bounds.is_none() {
                        debug!("No weighted vertices in skin group for bone '{name}'");
                    }
                    bounds
                }
                None => {
                    debug!("No skin group for bone '{name}'");
                    None
                }
            };

            planned.push(PlannedWidget {
                bone,
                widget: build_widget(name, has_parent, group.is_some(), bounds.as_ref(), class.color),
                color: class.color,
            });
        }

        Ok((planned, skipped))
    }

    /// Mutation phase: link widgets into the collection and wire up pose
    /// bone display state.
    fn apply(
        &self,
        scene: &mut Scene,
        armature_index: usize,
        planned: Vec<PlannedWidget>,
    ) -> Result<(), SelectObjectError> {
        let collection = scene.ensure_collection(&self.style.widget_collection);
        let assignments: Vec<_> = planned
            .into_iter()
            .map(|p| {
                let scales = p.widget.shape.scales_with_bone_length();
                (p.bone, collection.add(p.widget), scales, p.color)
            })
            .collect();

        let Some(armature) = scene.armature_mut(armature_index) else {
            return MissingErr {
                kind: ObjectKind::Armature,
            }
            .fail();
        };
        for (bone, handle, scales_with_bone_length, color) in assignments {
            let Some(pose) = armature.pose.get_mut(bone) else {
                warn!("No pose data for bone index {bone}");
                continue;
            };
            pose.custom_shape = Some(handle);
            pose.scale_with_bone_length = scales_with_bone_length;
            pose.custom_shape_scale = Vector3::new(1.0, 1.0, 1.0);
            pose.wire_width = self.style.wire_width;
            pose.color = Some(color);
            pose.show_wire = true;
        }
        Ok(())
    }
}
