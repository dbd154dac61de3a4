// core/ik.rs
//
// Analytic two-bone inverse kinematics in the rig's local 2D frame.
//
// Angle 0 points along +y ("down" in rig space), positive angles turn
// toward +x. All returned angles are degrees.

use glam::Vec2;

/// Fraction of full extension the solver will reach for.
/// Keeps the middle joint visibly bent instead of locking straight.
pub const REACH_FRACTION: f32 = 0.98;

/// Joint angles produced by [`TwoBoneIk::solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IkSolution {
    /// Rotation of the first segment away from rest (+y).
    pub root_angle: f32,
    /// Bend at the middle joint, as deviation from a straight 180° limb.
    pub joint_flex: f32,
}

/// Two-segment limb with fixed lengths, rooted at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoBoneIk {
    upper: f32,
    lower: f32,
}

impl TwoBoneIk {
    /// `upper` runs root to middle joint, `lower` middle joint to end effector.
    pub fn new(upper: f32, lower: f32) -> Self {
        Self { upper, lower }
    }

    pub fn upper(&self) -> f32 {
        self.upper
    }

    pub fn lower(&self) -> f32 {
        self.lower
    }

    /// Longest distance the solver will aim for.
    pub fn max_reach(&self) -> f32 {
        (self.upper + self.lower) * REACH_FRACTION
    }

    /// Pull a target back onto the reach circle if it lies beyond it.
    /// Direction is preserved.
    pub fn clamp_target(&self, target: Vec2) -> Vec2 {
        let dist = target.length();
        let max_reach = self.max_reach();
        if dist > max_reach {
            target * (max_reach / dist)
        } else {
            target
        }
    }

    /// Solve for the joint angles that put the end effector at `target`.
    ///
    /// Unreachable targets are softened onto the reach circle. A zero-length
    /// target has no defined direction; it yields the fully folded pose
    /// (`root_angle = 0`, `joint_flex = 180`).
    pub fn solve(&self, target: Vec2) -> IkSolution {
        let target = self.clamp_target(target);
        let dist = target.length();
        if dist < f32::EPSILON {
            log::warn!("two-bone IK: zero-distance target, returning folded limb");
            return IkSolution {
                root_angle: 0.0,
                joint_flex: 180.0,
            };
        }

        let (a, b) = (self.upper, self.lower);

        let cos_joint = (a * a + b * b - dist * dist) / (2.0 * a * b);
        let joint_rad = cos_joint.clamp(-1.0, 1.0).acos();

        // x/y swapped so that 0 lies along +y.
        let base_rad = target.x.atan2(target.y);

        let cos_root = (a * a + dist * dist - b * b) / (2.0 * a * dist);
        let root_rad = cos_root.clamp(-1.0, 1.0).acos();

        IkSolution {
            root_angle: (base_rad - root_rad).to_degrees(),
            joint_flex: 180.0 - joint_rad.to_degrees(),
        }
    }

    /// Forward kinematics for a solution: where the end effector lands.
    pub fn end_effector(&self, solution: IkSolution) -> Vec2 {
        let root = solution.root_angle.to_radians();
        let tip = (solution.root_angle + solution.joint_flex).to_radians();
        Vec2::new(root.sin(), root.cos()) * self.upper + Vec2::new(tip.sin(), tip.cos()) * self.lower
    }
}
