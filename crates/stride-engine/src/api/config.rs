use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::LimbSide;
use crate::error::{Result, StrideError};

/// Damping applied to the sinusoidal arm drive, per joint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointDamping {
    pub shoulder: f32,
    pub elbow: f32,
}

impl Default for JointDamping {
    fn default() -> Self {
        Self {
            shoulder: 0.6,
            elbow: 0.4,
        }
    }
}

/// Knee flex multiplier for each gait phase.
///
/// A stylistic exaggeration knob applied to the solver's joint flex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexMultipliers {
    pub stance: f32,
    pub lift: f32,
    pub pass: f32,
}

impl Default for FlexMultipliers {
    fn default() -> Self {
        Self {
            stance: 0.15,
            lift: 0.4,
            pass: 0.7,
        }
    }
}

/// Immutable tuning for the gait engine. Built once, read every frame.
///
/// All distances are rig-local pixels, all angles degrees. Any field left out
/// of a JSON document takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaitConfig {
    /// Hip to knee.
    pub thigh_length: f32,
    /// Knee to ankle.
    pub shin_length: f32,
    /// Peak foot clearance during swing.
    pub step_height: f32,
    /// Vertical distance from hip to ground while a foot is planted.
    pub ground_y: f32,
    /// Peak upward pelvis displacement.
    pub pelvis_bob: f32,
    /// Lateral distance between the two hip sockets.
    pub hip_separation: f32,
    /// Shoulder swing amplitude before damping.
    pub arm_swing: f32,
    /// Elbow bend as a fraction of the current shoulder swing.
    pub elbow_bend: f32,
    /// Hand counter-rotation as a fraction of the elbow bend.
    pub hand_counter: f32,
    /// Peak foot tilt during swing.
    pub foot_tilt: f32,
    /// Extra clearance per degree of keyframed thigh rotation.
    pub intent_lift: f32,
    pub damping: JointDamping,
    pub flex: FlexMultipliers,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            thigh_length: 50.0,
            shin_length: 40.0,
            step_height: 28.0,
            ground_y: 105.0,
            pelvis_bob: 4.0,
            hip_separation: 9.0,
            arm_swing: 8.0,
            elbow_bend: 0.4,
            hand_counter: 0.3,
            foot_tilt: 2.5,
            intent_lift: 0.4,
            damping: JointDamping::default(),
            flex: FlexMultipliers::default(),
        }
    }
}

impl GaitConfig {
    /// Parse a (possibly partial) config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_step_height(mut self, step_height: f32) -> Self {
        self.step_height = step_height;
        self
    }

    pub fn with_ground_y(mut self, ground_y: f32) -> Self {
        self.ground_y = ground_y;
        self
    }

    pub fn with_pelvis_bob(mut self, pelvis_bob: f32) -> Self {
        self.pelvis_bob = pelvis_bob;
        self
    }

    pub fn with_intent_lift(mut self, intent_lift: f32) -> Self {
        self.intent_lift = intent_lift;
        self
    }

    /// Check the invariants the per-frame code relies on.
    ///
    /// Bone lengths and ground height must be strictly positive so the IK
    /// solver never sees a zero-length limb or a zero-distance stance target.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("thigh_length", self.thigh_length), ("shin_length", self.shin_length)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(StrideError::InvalidBoneLength { name, value });
            }
        }
        if !(self.ground_y.is_finite() && self.ground_y > 0.0) {
            return Err(StrideError::InvalidConfig(format!(
                "ground_y must be > 0, got {}",
                self.ground_y
            )));
        }

        let scalars = [
            ("step_height", self.step_height),
            ("pelvis_bob", self.pelvis_bob),
            ("hip_separation", self.hip_separation),
            ("arm_swing", self.arm_swing),
            ("elbow_bend", self.elbow_bend),
            ("hand_counter", self.hand_counter),
            ("foot_tilt", self.foot_tilt),
            ("intent_lift", self.intent_lift),
            ("damping.shoulder", self.damping.shoulder),
            ("damping.elbow", self.damping.elbow),
            ("flex.stance", self.flex.stance),
            ("flex.lift", self.flex.lift),
            ("flex.pass", self.flex.pass),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(StrideError::InvalidConfig(format!("{name} is not finite ({value})")));
        }
        Ok(())
    }

    /// Hip socket offset from the pelvis pivot for one side.
    ///
    /// Left sits at negative x. Rig suppliers use this to place thigh attach points.
    pub fn hip_socket(&self, side: LimbSide) -> Vec2 {
        Vec2::new(-side.mirror() * self.hip_separation / 2.0, 0.0)
    }
}

/// Named locomotion presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GaitPreset {
    #[default]
    HumanBalanced,
}

impl GaitPreset {
    pub const ALL: [GaitPreset; 1] = [GaitPreset::HumanBalanced];

    pub fn name(self) -> &'static str {
        match self {
            GaitPreset::HumanBalanced => "human_balanced",
        }
    }

    /// Look a preset up by name. Unknown names fall back to the default preset.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .unwrap_or_else(|| {
                log::warn!("unknown gait preset '{}', using '{}'", name, GaitPreset::default().name());
                GaitPreset::default()
            })
    }

    pub fn config(self) -> GaitConfig {
        match self {
            GaitPreset::HumanBalanced => GaitConfig::default()
                .with_step_height(28.0)
                .with_ground_y(105.0)
                .with_pelvis_bob(4.0),
        }
    }
}
