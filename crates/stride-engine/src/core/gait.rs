// core/gait.rs
//
// Gait phase engine: drives legs through IK from a normalized cycle clock,
// swings arms as a damped pendulum, and bobs the pelvis.
//
// Stateless per frame: every output is a pure function of
// (base pose, time, duration, config).

use std::f32::consts::{PI, TAU};
use glam::Vec2;

use crate::api::config::GaitConfig;
use crate::api::types::{LimbSide, HIP, TORSO};
use crate::components::pose::{LocalTransform, Pose};
use crate::core::ik::TwoBoneIk;
use crate::core::time::{cycle_phase, wrap_phase};

/// Sub-phase of one leg's contact cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaitPhase {
    /// Foot planted: `s < 0.5`.
    Stance,
    /// Foot rising: `0.5 <= s < 0.7`.
    Lift,
    /// Foot swinging through: `s >= 0.7`.
    Pass,
}

impl GaitPhase {
    /// Classify a limb phase in `[0, 1)`. No hysteresis.
    pub fn from_limb_phase(s_phase: f32) -> Self {
        if s_phase < 0.5 {
            GaitPhase::Stance
        } else if s_phase < 0.7 {
            GaitPhase::Lift
        } else {
            GaitPhase::Pass
        }
    }

    pub fn is_stance(self) -> bool {
        self == GaitPhase::Stance
    }

    pub fn label(self) -> &'static str {
        match self {
            GaitPhase::Stance => "STANCE",
            GaitPhase::Lift => "LIFT",
            GaitPhase::Pass => "PASS",
        }
    }
}

/// Where one leg is aiming this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbTarget {
    pub side: LimbSide,
    /// Limb phase in `[0, 1)`, after the side's stride offset.
    pub s_phase: f32,
    pub phase: GaitPhase,
    /// End-effector target relative to the hip socket. `x` is always 0.
    pub target: Vec2,
    /// Foot tilt in degrees, 0 during stance.
    pub foot_tilt: f32,
}

/// Final joint rotations for one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegPose {
    pub thigh: f32,
    pub shin: f32,
    pub foot: f32,
}

/// Procedural locomotion layer over a keyframed base pose.
#[derive(Debug, Clone)]
pub struct GaitEngine {
    config: GaitConfig,
    leg: TwoBoneIk,
}

impl GaitEngine {
    /// `config` is expected to pass [`GaitConfig::validate`]; `from_json` and
    /// the presets guarantee that.
    pub fn new(config: GaitConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid gait config: {config:?}");
        let leg = TwoBoneIk::new(config.thigh_length, config.shin_length);
        Self { config, leg }
    }

    pub fn config(&self) -> &GaitConfig {
        &self.config
    }

    pub fn leg_solver(&self) -> &TwoBoneIk {
        &self.leg
    }

    /// Leg target for `side` at master cycle position `phase`.
    ///
    /// `intent_rotation` is the thigh rotation authored upstream; its magnitude
    /// adds foot clearance during swing.
    pub fn limb_target(&self, side: LimbSide, phase: f32, intent_rotation: f32) -> LimbTarget {
        let s_phase = wrap_phase(phase + side.phase_offset());
        let gait_phase = GaitPhase::from_limb_phase(s_phase);
        let cfg = &self.config;

        // x stays locked at 0 so planted feet never drift or cross.
        let (target_y, foot_tilt) = if gait_phase.is_stance() {
            (cfg.ground_y, 0.0)
        } else {
            let swing = ((s_phase - 0.5) / 0.5 * PI).sin();
            let intent_lift = intent_rotation.abs() * cfg.intent_lift;
            (cfg.ground_y - (swing * cfg.step_height + intent_lift), swing * cfg.foot_tilt)
        };

        LimbTarget {
            side,
            s_phase,
            phase: gait_phase,
            target: Vec2::new(0.0, target_y),
            foot_tilt,
        }
    }

    /// Knee flex multiplier for a phase.
    pub fn flex_multiplier(&self, phase: GaitPhase) -> f32 {
        match phase {
            GaitPhase::Stance => self.config.flex.stance,
            GaitPhase::Lift => self.config.flex.lift,
            GaitPhase::Pass => self.config.flex.pass,
        }
    }

    /// Solve a leg target into thigh/shin/foot rotations.
    ///
    /// The foot cancels the accumulated leg rotation to stay level, then tilts.
    pub fn solve_leg(&self, target: &LimbTarget) -> LegPose {
        let solution = self.leg.solve(target.target);
        let shin = solution.joint_flex.abs() * self.flex_multiplier(target.phase);
        LegPose {
            thigh: solution.root_angle,
            shin,
            foot: -(solution.root_angle + shin) + target.foot_tilt,
        }
    }

    /// Upward pelvis displacement at master phase `phase`, as a negative y.
    ///
    /// Double frequency: peaks at both foot strikes in one cycle.
    pub fn pelvis_offset(&self, phase: f32) -> f32 {
        -((phase * TAU * 2.0).sin() * self.config.pelvis_bob).abs()
    }

    /// Overwrite legs, arms, torso and hip of `base` with the procedural drive.
    ///
    /// Returns a new pose; parts the engine does not govern pass through.
    pub fn apply(&self, base: &Pose, time: f32, duration: f32) -> Pose {
        let p = cycle_phase(time, duration);
        let cfg = &self.config;
        let mut pose = base.clone();

        pose.set(TORSO, LocalTransform::new().with_translation(0.0, self.pelvis_offset(p)));
        pose.set(HIP, LocalTransform::new());

        for side in LimbSide::BOTH {
            let target = self.limb_target(side, p, base.rotation(side.thigh()));
            let leg = self.solve_leg(&target);
            log::debug!(
                "gait {:5} | phase={:.2} {:6} | thigh={:5.1} knee={:4.1}",
                side.as_str(),
                target.s_phase,
                target.phase.label(),
                leg.thigh,
                leg.shin
            );
            pose.set_rotation(side.thigh(), leg.thigh);
            pose.set_rotation(side.shin(), leg.shin);
            pose.set_rotation(side.foot(), leg.foot);
        }

        // Arms run half a cycle against the legs.
        let shoulder_swing = (wrap_phase(p + 0.5) * TAU).sin() * cfg.arm_swing;
        for side in LimbSide::BOTH {
            let swing = shoulder_swing * side.mirror();
            let elbow = -swing.abs() * cfg.elbow_bend;
            pose.set_rotation(side.arm(), swing * cfg.damping.shoulder);
            pose.set_rotation(side.wrist(), elbow * cfg.damping.elbow);
            pose.set_rotation(side.hand(), -elbow * cfg.hand_counter);
        }

        pose
    }
}
