//! Animatable value leaves.

pub mod color;
pub mod keyframe;
pub mod transform;
pub mod vector;

pub use color::Color;
pub use keyframe::Keyframe;
pub use transform::Transform;
pub use vector::{Rect, Vec2};
