use serde::{Deserialize, Serialize};

use crate::interp::functions::{lerp_truncate, lerp_vec2};
use crate::interp::Lerp;

/// 2D vector (positions, scales, origins).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(v: [f32; 2]) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(from: &Self, to: &Self, amount: f32) -> Self {
        lerp_vec2(from.to_array(), to.to_array(), amount).into()
    }
}

/// Integer rectangle (e.g. a source region in a sprite sheet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Lerp for Rect {
    fn lerp(from: &Self, to: &Self, amount: f32) -> Self {
        let blend = |a: i32, b: i32| lerp_truncate(f64::from(a), f64::from(b), amount) as i32;
        Self {
            x: blend(from.x, to.x),
            y: blend(from.y, to.y),
            width: blend(from.width, to.width),
            height: blend(from.height, to.height),
        }
    }
}
