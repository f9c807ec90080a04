//! Error types for clock and animation configuration

use serde::{Deserialize, Serialize};

/// Errors reported synchronously by configuration calls.
///
/// Runtime ticking never fails: invariant violations panic and missing
/// lookups return `None`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClockError {
    /// A keyframe already exists at this index
    #[error("Keyframe at index {index} already exists")]
    DuplicateKeyframe { index: i32 },
}

impl ClockError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::DuplicateKeyframe { .. } => "keyframes",
        }
    }
}
