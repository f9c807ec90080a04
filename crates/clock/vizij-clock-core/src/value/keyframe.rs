use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::interp::functions::lerp_f32;
use crate::interp::Lerp;
use crate::value::color::Color;
use crate::value::transform::Transform;
use crate::value::vector::Vec2;

/// Indexed snapshot of a puppet part: transform, pivot and tint.
///
/// Keyframes are ordered by `index` (see [`Keyframe::cmp_index`]); the other
/// fields are free-form animatable data.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub index: i32,
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
    /// Pivot offset.
    pub origin: Vec2,
    pub tint: Color,
}

impl Default for Keyframe {
    fn default() -> Self {
        Self {
            index: 0,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            origin: Vec2::ZERO,
            tint: Color::WHITE,
        }
    }
}

impl Keyframe {
    pub fn new(index: i32, transform: Transform, origin: Vec2, tint: Color) -> Self {
        Self {
            index,
            position: transform.position,
            rotation: transform.rotation,
            scale: transform.scale,
            origin,
            tint,
        }
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation, self.scale)
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.position = transform.position;
        self.rotation = transform.rotation;
        self.scale = transform.scale;
    }

    /// Ascending order by index.
    #[inline]
    pub fn cmp_index(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl Lerp for Keyframe {
    /// The blended keyframe keeps `from.index`.
    fn lerp(from: &Self, to: &Self, amount: f32) -> Self {
        Self {
            index: from.index,
            position: Vec2::lerp(&from.position, &to.position, amount),
            rotation: lerp_f32(from.rotation, to.rotation, amount),
            scale: Vec2::lerp(&from.scale, &to.scale, amount),
            origin: Vec2::lerp(&from.origin, &to.origin, amount),
            tint: Color::lerp(&from.tint, &to.tint, amount),
        }
    }
}
