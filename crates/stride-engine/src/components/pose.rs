//! Per-part local transforms.
//!
//! A [`Pose`] is rebuilt every frame and never persisted. Parts absent from a
//! pose behave as the identity transform.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Local transform of one rig part relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalTransform {
    /// Rotation in degrees, added to the parent's accumulated rotation.
    #[serde(default)]
    pub rotation: f32,
    /// Translation applied in world axes (not rotated by the parent).
    #[serde(default)]
    pub translate_x: f32,
    #[serde(default)]
    pub translate_y: f32,
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotated(rotation: f32) -> Self {
        Self { rotation, ..Self::default() }
    }

    pub fn with_translation(mut self, x: f32, y: f32) -> Self {
        self.translate_x = x;
        self.translate_y = y;
        self
    }
}

/// Mapping from part name to local transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pose {
    parts: HashMap<String, LocalTransform>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parts: HashMap::with_capacity(capacity),
        }
    }

    /// Builder form of [`Pose::set`].
    pub fn with(mut self, name: impl Into<String>, local: LocalTransform) -> Self {
        self.set(name, local);
        self
    }

    /// Insert or overwrite a part's transform.
    pub fn set(&mut self, name: impl Into<String>, local: LocalTransform) {
        self.parts.insert(name.into(), local);
    }

    /// Overwrite just the rotation, leaving no translation.
    pub fn set_rotation(&mut self, name: impl Into<String>, rotation: f32) {
        self.set(name, LocalTransform::rotated(rotation));
    }

    pub fn get(&self, name: &str) -> Option<&LocalTransform> {
        self.parts.get(name)
    }

    /// Transform for a part, identity when absent.
    pub fn local(&self, name: &str) -> LocalTransform {
        self.parts.get(name).copied().unwrap_or_default()
    }

    /// Rotation for a part, 0 when absent.
    pub fn rotation(&self, name: &str) -> f32 {
        self.local(name).rotation
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocalTransform)> {
        self.parts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, LocalTransform)> for Pose {
    fn from_iter<I: IntoIterator<Item = (S, LocalTransform)>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
