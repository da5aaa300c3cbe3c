use nalgebra::Point3;
use smallvec::SmallVec;

/// A single skin-group influence on a vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexWeight {
    pub group: u32,
    pub weight: f32,
}

/// A mesh vertex: a position in mesh-local space plus its skin-group
/// influences. The influence order is the host's enumeration order and is
/// semantically relevant: when attributing a vertex to a group's bounds,
/// the first nonzero-weight entry wins.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub weights: SmallVec<[VertexWeight; 4]>,
}

impl Vertex {
    pub fn new(position: Point3<f32>) -> Self {
        Vertex {
            position,
            weights: SmallVec::new(),
        }
    }

    pub fn with_weights(
        position: Point3<f32>,
        weights: impl IntoIterator<Item = (u32, f32)>,
    ) -> Self {
        Vertex {
            position,
            weights: weights
                .into_iter()
                .map(|(group, weight)| VertexWeight { group, weight })
                .collect(),
        }
    }
}
