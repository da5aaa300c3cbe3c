use crate::core::{BoundsBox, Mesh};
use crate::rig::BoneSpaceProjector;

/// Aggregates the bone-space positions of every vertex attributed to one
/// skin group into an axis-aligned bounding box.
///
/// A vertex is attributed to `group` only when the first nonzero-weight
/// entry in its influence list names that group; a vertex with several
/// nonzero weights contributes to whichever group its host enumerates
/// first. Returns `None` when no vertex qualifies.
pub fn group_bounds(
    mesh: &Mesh,
    group: u32,
    projector: &BoneSpaceProjector,
) -> Option<BoundsBox> {
    let mut bounds: Option<BoundsBox> = None;
    for vertex in mesh.vertices() {
        let qualifies = vertex
            .weights
            .iter()
            .find(|w| w.weight > 0.0)
            .is_some_and(|w| w.group == group);
        if !qualifies {
            continue;
        }

        let projected = projector.project(&vertex.position);
        match &mut bounds {
            Some(bounds) => bounds.grow(&projected),
            None => bounds = Some(BoundsBox::from_point(projected)),
        }
    }
    bounds
}
