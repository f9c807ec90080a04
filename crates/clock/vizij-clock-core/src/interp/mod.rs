//! Interpolation trait and helpers.
//!
//! Every animatable type supplies a `Lerp`. Animations do not call the trait
//! directly; they store a [`LerpFn`] bound at construction so types without a
//! `Lerp` impl (or with an unusual blend) can still be animated.

pub mod functions;

/// Linear interpolation between two values at `amount` (usually in [0,1]).
pub trait Lerp: Sized {
    fn lerp(from: &Self, to: &Self, amount: f32) -> Self;
}

/// Interpolation function value stored by animations.
pub type LerpFn<T> = fn(&T, &T, f32) -> T;

/// Convenience to obtain a type's default [`LerpFn`].
#[inline]
pub fn lerp_fn<T: Lerp>() -> LerpFn<T> {
    T::lerp
}

impl Lerp for f32 {
    #[inline]
    fn lerp(from: &Self, to: &Self, amount: f32) -> Self {
        functions::lerp_f32(*from, *to, amount)
    }
}

impl Lerp for f64 {
    #[inline]
    fn lerp(from: &Self, to: &Self, amount: f32) -> Self {
        from + (to - from) * f64::from(amount)
    }
}

// Integral values interpolate in f64 and truncate toward zero.
macro_rules! impl_integral_lerp {
    ($($t:ty),* $(,)?) => {
        $(
            impl Lerp for $t {
                #[inline]
                fn lerp(from: &Self, to: &Self, amount: f32) -> Self {
                    functions::lerp_truncate(*from as f64, *to as f64, amount) as $t
                }
            }
        )*
    };
}

impl_integral_lerp!(i8, i16, i32, i64, u8, u16, u32, u64);
