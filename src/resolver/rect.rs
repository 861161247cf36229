//! Oriented rectangle geometry for beam volumes
//!
//! A beam volume is a rectangle anchored at its source: it extends `length`
//! along the firing direction and `half_width` to either side. Containment is
//! edge-inclusive, so a source's own anchor point counts as inside.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::unit_from_angle;

/// A rotated rectangle anchored at its firing source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamRect {
    /// Source position the beam fires from
    pub origin: Vec2,
    /// Firing direction (radians)
    pub direction: f32,
    /// Forward extent from the origin
    pub length: f32,
    /// Extent to either side of the centerline
    pub half_width: f32,
}

impl BeamRect {
    pub fn new(origin: Vec2, direction: f32, length: f32, half_width: f32) -> Self {
        Self {
            origin,
            direction,
            length,
            half_width,
        }
    }

    /// Forward unit vector
    #[inline]
    pub fn forward(&self) -> Vec2 {
        unit_from_angle(self.direction)
    }

    /// Right-hand unit vector (perpendicular to forward)
    #[inline]
    pub fn side(&self) -> Vec2 {
        let f = self.forward();
        Vec2::new(f.y, -f.x)
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let rel = point - self.origin;
        let along = rel.dot(self.forward());
        let across = rel.dot(self.side());
        along >= 0.0 && along <= self.length && across.abs() <= self.half_width
    }

    /// Corner points in draw order, origin edge first
    pub fn corners(&self) -> [Vec2; 4] {
        let f = self.forward() * self.length;
        let s = self.side() * self.half_width;
        [
            self.origin - s,
            self.origin + s,
            self.origin + f + s,
            self.origin + f - s,
        ]
    }
}
