//! The bone-widget synthesis pipeline.
//!
//! Data flows one way per bone: mesh + skeleton → [`BoneSpaceProjector`] →
//! [`group_bounds`] → [`build_widget`]; independently the bone name runs
//! through [`classify`] for its display color. [`RigDecorator`] composes
//! both streams for every bone in the scene.

pub mod classifier;
pub mod decorator;
pub mod factory;
pub mod group_bounds;
pub mod primitives;
pub mod projector;

pub use classifier::*;
pub use decorator::*;
pub use factory::*;
pub use group_bounds::*;
pub use projector::*;
