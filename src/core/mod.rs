pub mod bounds;
pub mod mesh;
pub mod scene;
pub mod skeleton;
pub mod vertex;
pub mod widget;

pub use bounds::*;
pub use mesh::*;
pub use scene::*;
pub use skeleton::*;
pub use vertex::*;
pub use widget::*;
