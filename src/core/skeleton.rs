use nalgebra::Matrix4;
use snafu::{Snafu, ensure};
use std::collections::HashMap;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum SkeletonError {
    #[snafu(display("Skeleton already has a bone named '{name}'"))]
    DuplicateBone { name: String },
    #[snafu(display("Parent bone index {index} is out of range"))]
    InvalidParent { index: usize },
}

/// A forest of named bones, stored index-aligned.
///
/// Bone names are unique within the skeleton. `local` holds each bone's
/// local-to-armature-space rest transform. Iteration order is insertion
/// order, which is the host's native bone ordering and is not guaranteed
/// to be hierarchical.
#[derive(Debug, Default, Clone)]
pub struct Skeleton {
    /// Index-aligned bone names.
    names: Vec<String>,
    /// Parent bone index; None for roots.
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    local: Vec<Matrix4<f32>>,
    /// Fast lookup from name to index.
    index_of: HashMap<String, usize>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn add_bone(
        &mut self,
        name: impl Into<String>,
        parent: Option<usize>,
        local: Matrix4<f32>,
    ) -> Result<usize, SkeletonError> {
        let name = name.into();
        ensure!(
            !self.index_of.contains_key(&name),
            DuplicateBoneErr { name }
        );
        if let Some(parent) = parent {
            ensure!(parent < self.len(), InvalidParentErr { index: parent });
        }

        let index = self.names.len();
        self.index_of.insert(name.clone(), index);
        self.names.push(name);
        self.parents.push(parent);
        self.children.push(Vec::new());
        self.local.push(local);
        match parent {
            Some(parent) => self.children[parent].push(index),
            None => self.roots.push(index),
        }
        Ok(index)
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        self.index_of.get(name).copied()
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.parents[index]
    }

    pub fn has_parent(&self, index: usize) -> bool {
        self.parents[index].is_some()
    }

    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn local(&self, index: usize) -> &Matrix4<f32> {
        &self.local[index]
    }
}
