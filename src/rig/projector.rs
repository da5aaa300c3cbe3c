use nalgebra::{Matrix4, Point3};
use snafu::{OptionExt, Snafu};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
#[snafu(display("Bone world transform is singular and cannot be inverted"))]
pub struct DegenerateTransformError;

/// Transforms mesh-local vertex positions into a bone's local frame.
///
/// The bone's world transform is inverted once up front; a singular matrix
/// is rejected explicitly since silently carrying a bogus inverse would
/// corrupt every bound computed from it.
#[derive(Debug, Clone)]
pub struct BoneSpaceProjector {
    mesh_world: Matrix4<f32>,
    bone_world_inv: Matrix4<f32>,
}

impl BoneSpaceProjector {
    pub fn new(
        mesh_world: &Matrix4<f32>,
        armature_world: &Matrix4<f32>,
        bone_local: &Matrix4<f32>,
    ) -> Result<Self, DegenerateTransformError> {
        let bone_world = armature_world * bone_local;
        let bone_world_inv = bone_world.try_inverse().context(DegenerateTransformErr)?;
        Ok(BoneSpaceProjector {
            mesh_world: *mesh_world,
            bone_world_inv,
        })
    }

    /// Mesh-local position → world → bone-local.
    pub fn project(&self, position: &Point3<f32>) -> Point3<f32> {
        let world = self.mesh_world.transform_point(position);
        self.bone_world_inv.transform_point(&world)
    }
}
