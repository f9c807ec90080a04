use serde::{Deserialize, Serialize};

use crate::interp::functions::lerp_f32;
use crate::interp::Lerp;
use crate::value::vector::Vec2;

/// 2D transform: position, rotation angle (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    pub fn new(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Lerp for Transform {
    fn lerp(from: &Self, to: &Self, amount: f32) -> Self {
        Self {
            position: Vec2::lerp(&from.position, &to.position, amount),
            // Single-axis rotation blends as a plain angle.
            rotation: lerp_f32(from.rotation, to.rotation, amount),
            scale: Vec2::lerp(&from.scale, &to.scale, amount),
        }
    }
}
