use crate::core::Vertex;
use std::collections::HashMap;

/// A named subset of vertices, expected (not guaranteed) to match a bone
/// name. The index is stable and is what vertex weights refer to.
#[derive(Debug, Clone)]
pub struct SkinGroup {
    pub name: String,
    pub index: u32,
}

/// An ordered sequence of vertices plus the skin groups they weight to.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    groups: Vec<SkinGroup>,
    group_index_of: HashMap<String, u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a skin group, returning its stable index. Re-registering
    /// an existing name returns the original index.
    pub fn add_group(&mut self, name: impl Into<String>) -> u32 {
        let name = name.into();
        if let Some(index) = self.group_index_of.get(&name) {
            return *index;
        }
        let index = self.groups.len() as u32;
        self.group_index_of.insert(name.clone(), index);
        self.groups.push(SkinGroup { name, index });
        index
    }

    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn groups(&self) -> &[SkinGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&SkinGroup> {
        self.group_index(name).map(|i| &self.groups[i as usize])
    }

    pub fn group_index(&self, name: &str) -> Option<u32> {
        self.group_index_of.get(name).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
