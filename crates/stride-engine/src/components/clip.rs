//! Keyframed animation clips.

use serde::{Deserialize, Serialize};

use crate::components::pose::Pose;
use crate::error::{Result, StrideError};
use crate::extensions::easing::Easing;
use crate::systems::interpolate::interpolate;

/// A pose subset authored at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Seconds from clip start (>= 0).
    pub time: f32,
    /// Parts keyed at this time. Parts not listed are not keyed.
    #[serde(default)]
    pub poses: Pose,
}

impl Keyframe {
    pub fn new(time: f32, poses: Pose) -> Self {
        Self { time, poses }
    }
}

/// A looping clip: duration plus keyframes ordered by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Cycle length in seconds (> 0).
    pub duration: f32,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
    /// Curve used between keyframes.
    #[serde(default)]
    pub easing: Easing,
}

impl AnimationClip {
    /// Build a clip, rejecting a non-positive duration.
    pub fn new(duration: f32, keyframes: Vec<Keyframe>) -> Result<Self> {
        let clip = Self {
            duration,
            keyframes,
            easing: Easing::default(),
        };
        clip.validate()?;
        Ok(clip)
    }

    /// Parse a clip from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let clip: Self = serde_json::from_str(json)?;
        clip.validate()?;
        log::debug!(
            "loaded clip: duration={} keyframes={} easing={:?}",
            clip.duration,
            clip.keyframes.len(),
            clip.easing
        );
        Ok(clip)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(StrideError::InvalidDuration(self.duration));
        }
        if !self.is_sorted() {
            log::warn!("clip keyframes are not in time order; bracketing may pick the wrong pair");
        }
        Ok(())
    }

    /// Whether keyframe times are non-decreasing.
    pub fn is_sorted(&self) -> bool {
        self.keyframes.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Blended base pose at `time`, clamped to the keyed range.
    pub fn sample(&self, time: f32) -> Pose {
        interpolate(&self.keyframes, time, self.easing)
    }
}
