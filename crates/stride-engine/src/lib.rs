pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod extensions;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::{GaitConfig, GaitPreset, JointDamping, FlexMultipliers};
pub use api::types::LimbSide;
pub use components::clip::{AnimationClip, Keyframe};
pub use components::layer::{DrawBand, draw_order};
pub use components::pose::{LocalTransform, Pose};
pub use components::rig::{Rig, RigPart};
pub use crate::core::gait::{GaitEngine, GaitPhase, LimbTarget, LegPose};
pub use crate::core::ik::{TwoBoneIk, IkSolution, REACH_FRACTION};
pub use crate::core::time::{cycle_phase, wrap_phase, FrameSampler, Playback};
pub use error::{StrideError, Result};
pub use renderer::instance::{PartInstance, FrameBuffer};
pub use systems::animation::{Animator, Frame, FramePose};
pub use systems::compose::{compose, compose_into, WorldTransform};
pub use systems::interpolate::{interpolate, bracket};
pub use extensions::{Easing, lerp, ease};

pub use glam::Vec2;
