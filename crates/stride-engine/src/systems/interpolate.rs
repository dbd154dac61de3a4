//! Keyframe interpolation: blends the two keyframes bracketing a query time.

use crate::components::clip::Keyframe;
use crate::components::pose::{LocalTransform, Pose};
use crate::extensions::easing::{ease, Easing};

/// Find the keyframes surrounding `time`.
///
/// `before` is the last keyframe with `time <= query`, `after` the first with
/// `time >= query`. Queries outside the keyed range fall back to the first or
/// last keyframe. Assumes keyframes are in non-decreasing time order.
pub fn bracket(keyframes: &[Keyframe], time: f32) -> Option<(&Keyframe, &Keyframe)> {
    let first = keyframes.first()?;
    let last = keyframes.last()?;

    let before = keyframes.iter().filter(|kf| kf.time <= time).last().unwrap_or(first);
    let after = keyframes.iter().find(|kf| kf.time >= time).unwrap_or(last);
    Some((before, after))
}

/// Blended pose at `time`.
///
/// An exact hit (or a degenerate bracket) returns that keyframe's pose as-is,
/// translations included. Otherwise only rotations are blended; a part keyed
/// on one side only blends against 0, not against its other-side value.
pub fn interpolate(keyframes: &[Keyframe], time: f32, easing: Easing) -> Pose {
    let Some((before, after)) = bracket(keyframes, time) else {
        return Pose::new();
    };
    if before.time == after.time {
        return before.poses.clone();
    }

    let t = (time - before.time) / (after.time - before.time);

    let mut pose = Pose::with_capacity(before.poses.len().max(after.poses.len()));
    for name in before.poses.names().chain(after.poses.names()) {
        if pose.contains(name) {
            continue;
        }
        let rotation = ease(before.poses.rotation(name), after.poses.rotation(name), t, easing);
        pose.set(name, LocalTransform::rotated(rotation));
    }
    pose
}
