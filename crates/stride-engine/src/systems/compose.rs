// systems/compose.rs
//
// Forward kinematics over the rig tree.
//
// Walks root to leaf with an explicit worklist, accumulating rotation and
// position. A child's attach point is rotated by the parent's accumulated
// rotation; a part's own translation is not.

use glam::Vec2;

use crate::components::pose::Pose;
use crate::components::rig::RigPart;

/// World placement of one part for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldTransform {
    pub name: String,
    /// World position of the part's pivot.
    pub position: Vec2,
    /// Accumulated rotation in degrees.
    pub rotation: f32,
}

/// Rotate `v` by `degrees` (positive turns +x toward +y).
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Compose world transforms for every part, root first, depth-first pre-order.
pub fn compose(root: &RigPart, pose: &Pose, origin: Vec2) -> Vec<WorldTransform> {
    let mut out = Vec::new();
    compose_into(root, pose, origin, &mut out);
    out
}

/// Same as [`compose`] but reuses `out`'s allocation. `out` is cleared first.
pub fn compose_into(root: &RigPart, pose: &Pose, origin: Vec2, out: &mut Vec<WorldTransform>) {
    out.clear();

    // (part, inherited position, parent's accumulated rotation)
    let mut stack: Vec<(&RigPart, Vec2, f32)> = vec![(root, origin, 0.0)];

    while let Some((part, inherited, parent_rot)) = stack.pop() {
        let local = pose.local(&part.name);
        let rotation = parent_rot + local.rotation;
        let position = inherited + Vec2::new(local.translate_x, local.translate_y);

        out.push(WorldTransform {
            name: part.name.clone(),
            position,
            rotation,
        });

        // Reverse so the first child is popped (and emitted) first.
        for child in part.children.iter().rev() {
            let mount = match child.attach {
                Some(attach) => position + rotate_deg(attach - part.pivot, rotation),
                None => position,
            };
            stack.push((child, mount, rotation));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::components::pose::LocalTransform;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn attach_offset_at_zero_rotation() {
        let rig = RigPart::new("root", Vec2::ZERO).with_child(
            RigPart::new("thigh", Vec2::ZERO)
                .with_child(RigPart::new("shin", Vec2::ZERO).with_attach(Vec2::new(0.0, 20.0))),
        );
        let pose = Pose::new().with("thigh", LocalTransform::rotated(0.0));

        let frame = compose(&rig, &pose, Vec2::ZERO);
        let names: Vec<&str> = frame.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["root", "thigh", "shin"]);

        let (thigh, shin) = (&frame[1], &frame[2]);
        assert_eq!(shin.rotation, 0.0);
        assert!(approx(shin.position - thigh.position, Vec2::new(0.0, 20.0)));
    }

    #[test]
    fn attach_swings_with_parent_rotation() {
        let rig = RigPart::new("arm", Vec2::new(4.0, 0.0))
            .with_child(RigPart::new("forearm", Vec2::ZERO).with_attach(Vec2::new(4.0, 30.0)));
        let pose = Pose::new()
            .with("arm", LocalTransform::rotated(90.0))
            .with("forearm", LocalTransform::rotated(10.0));

        let frame = compose(&rig, &pose, Vec2::new(100.0, 100.0));
        // (0, 30) turned 90 degrees lands on (-30, 0)
        assert!(approx(frame[1].position, Vec2::new(70.0, 100.0)), "{:?}", frame[1].position);
        assert!((frame[1].rotation - 100.0).abs() < 1e-4);
    }

    #[test]
    fn translation_is_not_rotated() {
        let rig = RigPart::new("hip", Vec2::ZERO)
            .with_child(RigPart::new("torso", Vec2::ZERO).with_attach(Vec2::new(0.0, -10.0)));
        let pose = Pose::new()
            .with("hip", LocalTransform::rotated(90.0))
            .with("torso", LocalTransform::new().with_translation(0.0, -3.0));

        let frame = compose(&rig, &pose, Vec2::ZERO);
        // attach (0,-10) rotated 90 -> (10, 0); translation added as-is
        assert!(approx(frame[1].position, Vec2::new(10.0, -3.0)), "{:?}", frame[1].position);
    }

    #[test]
    fn children_without_attach_share_parent_position() {
        let rig = RigPart::new("hip", Vec2::new(3.0, 3.0)).with_child(RigPart::new("torso", Vec2::ZERO));
        let pose = Pose::new().with("hip", LocalTransform::rotated(45.0));
        let frame = compose(&rig, &pose, Vec2::new(5.0, 6.0));
        assert_eq!(frame[1].position, Vec2::new(5.0, 6.0));
        assert_eq!(frame[1].rotation, 45.0);
    }

    #[test]
    fn pre_order_emits_whole_subtree_before_sibling() {
        let rig = RigPart::new("hip", Vec2::ZERO)
            .with_child(RigPart::new("a", Vec2::ZERO).with_child(RigPart::new("a1", Vec2::ZERO)))
            .with_child(RigPart::new("b", Vec2::ZERO));
        let names: Vec<String> = compose(&rig, &Pose::new(), Vec2::ZERO).into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["hip", "a", "a1", "b"]);
    }

    #[test]
    fn sibling_order_does_not_change_transforms() {
        let left = RigPart::new("left_thigh", Vec2::new(6.0, 2.0))
            .with_attach(Vec2::new(10.0, 12.0))
            .with_child(RigPart::new("left_shin", Vec2::new(5.0, 2.0)).with_attach(Vec2::new(6.0, 50.0)));
        let right = RigPart::new("right_thigh", Vec2::new(6.0, 2.0))
            .with_attach(Vec2::new(22.0, 12.0))
            .with_child(RigPart::new("right_shin", Vec2::new(5.0, 2.0)).with_attach(Vec2::new(6.0, 50.0)));
        let torso = RigPart::new("torso", Vec2::new(16.0, 40.0)).with_attach(Vec2::new(16.0, 4.0));

        let forward = RigPart::new("hip", Vec2::new(16.0, 8.0))
            .with_child(left.clone())
            .with_child(torso.clone())
            .with_child(right.clone());
        let shuffled = RigPart::new("hip", Vec2::new(16.0, 8.0))
            .with_child(right)
            .with_child(left)
            .with_child(torso);

        let pose = Pose::new()
            .with("hip", LocalTransform::rotated(-7.0))
            .with("left_thigh", LocalTransform::rotated(25.0))
            .with("right_shin", LocalTransform::rotated(-40.0))
            .with("torso", LocalTransform::new().with_translation(0.0, -2.0));

        let by_name = |root: &RigPart| -> HashMap<String, (Vec2, f32)> {
            compose(root, &pose, Vec2::new(256.0, 256.0))
                .into_iter()
                .map(|t| (t.name, (t.position, t.rotation)))
                .collect()
        };
        assert_eq!(by_name(&forward), by_name(&shuffled));
    }

    #[test]
    fn compose_into_reuses_buffer() {
        let rig = RigPart::new("hip", Vec2::ZERO);
        let mut out = vec![WorldTransform { name: "stale".into(), position: Vec2::ONE, rotation: 1.0 }];
        compose_into(&rig, &Pose::new(), Vec2::ZERO, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "hip");
    }
}
