//! Per-frame pipeline: keyframes -> base pose -> gait constraints -> world transforms.

use glam::Vec2;

use crate::api::config::GaitConfig;
use crate::components::clip::AnimationClip;
use crate::components::pose::Pose;
use crate::components::rig::Rig;
use crate::core::gait::GaitEngine;
use crate::core::time::FrameSampler;
use crate::systems::compose::{compose, WorldTransform};

/// Both pipeline stages for one time, kept apart so the override is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePose {
    pub time: f32,
    /// Keyframed pose straight from the clip.
    pub base: Pose,
    /// Base pose after the gait engine has overwritten the parts it drives.
    pub constrained: Pose,
}

/// One composed frame ready for the rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u32,
    pub time: f32,
    pub transforms: Vec<WorldTransform>,
}

/// Drives a clip through the gait engine.
///
/// Holds no per-frame state, so any time can be evaluated in any order.
#[derive(Debug, Clone)]
pub struct Animator {
    clip: AnimationClip,
    gait: GaitEngine,
}

impl Animator {
    pub fn new(clip: AnimationClip, config: GaitConfig) -> Self {
        Self {
            clip,
            gait: GaitEngine::new(config),
        }
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    pub fn gait(&self) -> &GaitEngine {
        &self.gait
    }

    pub fn duration(&self) -> f32 {
        self.clip.duration
    }

    /// Keyframed pose at `time`.
    pub fn base_pose(&self, time: f32) -> Pose {
        self.clip.sample(time)
    }

    /// Gait-constrained pose derived from `base`.
    pub fn constrained_pose(&self, base: &Pose, time: f32) -> Pose {
        self.gait.apply(base, time, self.clip.duration)
    }

    pub fn pose_at(&self, time: f32) -> FramePose {
        let base = self.base_pose(time);
        let constrained = self.constrained_pose(&base, time);
        FramePose { time, base, constrained }
    }

    /// World transforms for the rig at `time`, rooted at `origin`.
    pub fn frame(&self, rig: &Rig, time: f32, origin: Vec2) -> Vec<WorldTransform> {
        let FramePose { constrained, .. } = self.pose_at(time);
        compose(rig.root(), &constrained, origin)
    }

    /// Every frame of a sprite-sheet run.
    pub fn frames<'a>(
        &'a self,
        rig: &'a Rig,
        sampler: FrameSampler,
        origin: Vec2,
    ) -> impl Iterator<Item = Frame> + 'a {
        (0..sampler.frames()).map(move |index| {
            let time = sampler.time_at(index);
            Frame {
                index,
                time,
                transforms: self.frame(rig, time, origin),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::clip::Keyframe;
    use crate::components::pose::LocalTransform;
    use crate::components::rig::RigPart;

    fn clip() -> AnimationClip {
        AnimationClip::new(
            1.0,
            vec![
                Keyframe::new(0.0, Pose::new().with("head", LocalTransform::rotated(-6.0))),
                Keyframe::new(0.5, Pose::new().with("head", LocalTransform::rotated(6.0)).with("left_thigh", LocalTransform::rotated(20.0))),
                Keyframe::new(1.0, Pose::new().with("head", LocalTransform::rotated(-6.0))),
            ],
        )
        .unwrap()
    }

    fn biped() -> Rig {
        let leg = |side: &str, x: f32| {
            RigPart::new(format!("{side}_thigh"), Vec2::new(6.0, 2.0))
                .with_attach(Vec2::new(x, 12.0))
                .with_child(
                    RigPart::new(format!("{side}_shin"), Vec2::new(5.0, 2.0))
                        .with_attach(Vec2::new(6.0, 50.0))
                        .with_child(RigPart::new(format!("{side}_foot"), Vec2::new(4.0, 2.0)).with_attach(Vec2::new(5.0, 40.0))),
                )
        };
        let arm = |side: &str, x: f32| {
            RigPart::new(format!("{side}_arm"), Vec2::new(4.0, 2.0))
                .with_attach(Vec2::new(x, 6.0))
                .with_child(
                    RigPart::new(format!("{side}_wrist"), Vec2::new(3.0, 2.0))
                        .with_attach(Vec2::new(4.0, 30.0))
                        .with_child(RigPart::new(format!("{side}_hand"), Vec2::new(3.0, 2.0)).with_attach(Vec2::new(3.0, 26.0))),
                )
        };
        let torso = RigPart::new("torso", Vec2::new(16.0, 40.0))
            .with_attach(Vec2::new(16.0, 4.0))
            .with_child(RigPart::new("head", Vec2::new(12.0, 24.0)).with_attach(Vec2::new(16.0, 0.0)))
            .with_child(arm("left", 2.0))
            .with_child(arm("right", 30.0));
        let hip = RigPart::new("hip", Vec2::new(16.0, 8.0))
            .with_child(torso)
            .with_child(leg("left", 11.5))
            .with_child(leg("right", 20.5));
        Rig::new(hip).unwrap()
    }

    #[test]
    fn base_and_constrained_are_separate_stages() {
        let animator = Animator::new(clip(), GaitConfig::default());
        let frame = animator.pose_at(0.5);
        assert_eq!(frame.base.rotation("left_thigh"), 20.0);
        assert_ne!(frame.constrained.rotation("left_thigh"), 20.0);
        assert_eq!(frame.constrained.rotation("head"), 6.0);
    }

    #[test]
    fn keyframed_thigh_lifts_the_swinging_foot() {
        let config = GaitConfig::default();
        let animator = Animator::new(clip(), config.clone());
        // At t=0.6 the left leg is mid-lift and the clip still carries thigh intent.
        let t = 0.6;
        let base = animator.base_pose(t);
        let intent = base.rotation("left_thigh");
        assert!(intent > 0.0);

        let gait = animator.gait();
        let with_intent = gait.limb_target(crate::api::types::LimbSide::Left, t, intent);
        let without = gait.limb_target(crate::api::types::LimbSide::Left, t, 0.0);
        assert!(with_intent.target.y < without.target.y);
    }

    #[test]
    fn frame_covers_every_part_root_first() {
        let rig = biped();
        let animator = Animator::new(clip(), GaitConfig::default());
        let frame = animator.frame(&rig, 0.25, Vec2::new(256.0, 256.0));
        assert_eq!(frame.len(), rig.len());
        assert_eq!(frame[0].name, "hip");
        assert_eq!(frame[0].position, Vec2::new(256.0, 256.0));
        assert!(frame.iter().all(|t| t.position.is_finite() && t.rotation.is_finite()));
    }

    #[test]
    fn planted_foot_stays_level() {
        let rig = biped();
        let animator = Animator::new(clip(), GaitConfig::default());
        // left leg is in stance for the first half of the cycle
        for time in [0.0, 0.1, 0.2, 0.3, 0.4] {
            let frame = animator.frame(&rig, time, Vec2::ZERO);
            let foot = frame.iter().find(|t| t.name == "left_foot").unwrap();
            assert!(foot.rotation.abs() < 1e-3, "t={time} foot rotation {}", foot.rotation);
        }
    }

    #[test]
    fn frames_follow_sampler() {
        let rig = biped();
        let animator = Animator::new(clip(), GaitConfig::default());
        let frames: Vec<Frame> = animator.frames(&rig, FrameSampler::new(4, animator.duration()), Vec2::ZERO).collect();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].time, 0.0);
        assert_eq!(frames[3].time, 1.0);
        assert_eq!(frames[2].index, 2);
        // first and last sample are the same point in the cycle
        assert_eq!(frames[0].transforms, frames[3].transforms);
    }
}
