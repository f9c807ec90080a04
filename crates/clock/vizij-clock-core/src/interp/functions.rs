//! Interpolation helpers:
//! - lerp_f32 (exact scalar blend)
//! - lerp_truncate (integral blend, truncated toward zero by the caller's cast)
//! - lerp_vec2 / lerp_rgba (component-wise)

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend integral endpoints in f64; `as` casts of the result truncate.
#[inline]
pub fn lerp_truncate(a: f64, b: f64, t: f32) -> f64 {
    a + (b - a) * f64::from(t)
}

#[inline]
pub fn lerp_vec2(a: [f32; 2], b: [f32; 2], t: f32) -> [f32; 2] {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_rgba(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (i, o) in out.iter_mut().enumerate() {
        *o = lerp_truncate(f64::from(a[i]), f64::from(b[i]), t) as u8;
    }
    out
}
