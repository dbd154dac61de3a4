use thiserror::Error;

/// Errors raised at the data boundaries of the engine (parsing rigs, clips and config).
///
/// Per-frame operations never fail: missing pose entries, unreachable IK
/// targets and out-of-range query times all have defined fallbacks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrideError {
    /// Malformed JSON or a shape mismatch.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Clip duration must be strictly positive.
    #[error("Clip duration must be > 0, got {0}")]
    InvalidDuration(f32),
    /// A bone length is zero, negative or not finite.
    #[error("Bone length '{name}' must be > 0, got {value}")]
    InvalidBoneLength { name: &'static str, value: f32 },
    /// Two parts in one rig share a name.
    #[error("Duplicate rig part name '{0}'")]
    DuplicatePart(String),
    /// A rig document with no root part.
    #[error("Rig hierarchy is empty")]
    EmptyRig,
    /// Any other configuration value out of range.
    #[error("Invalid gait config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StrideError>;
