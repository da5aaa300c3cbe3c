use nalgebra::Vector3;

pub const WHITE: Vector3<f32> = Vector3::new(1.0, 1.0, 1.0);
pub const BLACK: Vector3<f32> = Vector3::new(0.0, 0.0, 0.0);
pub const YELLOW: Vector3<f32> = Vector3::new(1.0, 1.0, 0.0);
pub const GREEN: Vector3<f32> = Vector3::new(0.0, 1.0, 0.0);
pub const PURPLE: Vector3<f32> = Vector3::new(0.5, 0.0, 0.5);

pub const RED: Vector3<f32> = Vector3::new(1.0, 0.0, 0.0);
pub const DARK_RED: Vector3<f32> = Vector3::new(0.5, 0.0, 0.0);
pub const LIGHT_RED: Vector3<f32> = Vector3::new(1.0, 0.5, 0.5);

pub const BLUE: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);
pub const DARK_BLUE: Vector3<f32> = Vector3::new(0.0, 0.0, 0.5);
pub const LIGHT_BLUE: Vector3<f32> = Vector3::new(0.5, 0.5, 1.0);
