use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box in bone-local space.
///
/// Invariant: `min <= max` componentwise. Absence of bounds (no contributing
/// points) is expressed as `Option<BoundsBox>`, never as a degenerate box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundsBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BoundsBox {
    pub fn from_point(point: Point3<f32>) -> Self {
        BoundsBox {
            min: point,
            max: point,
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = Point3<f32>>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bounds = BoundsBox::from_point(points.next()?);
        for point in points {
            bounds.grow(&point);
        }
        Some(bounds)
    }

    pub fn grow(&mut self, point: &Point3<f32>) {
        self.min = self.min.coords.inf(&point.coords).into();
        self.max = self.max.coords.sup(&point.coords).into();
    }

    pub fn center(&self) -> Point3<f32> {
        ((self.min.coords + self.max.coords) / 2.0).into()
    }

    /// Componentwise extent, always >= 0.
    pub fn dimensions(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Closed-bounds containment test, componentwise.
    pub fn contains(&self, point: &Point3<f32>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z
    }
}
