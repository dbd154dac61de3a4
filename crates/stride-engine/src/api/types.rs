/// Which side of the body a limb belongs to.
///
/// Part names for limbs are derived from the side prefix, e.g. `left_thigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimbSide {
    Left,
    Right,
}

impl LimbSide {
    /// Both sides in evaluation order.
    pub const BOTH: [LimbSide; 2] = [LimbSide::Left, LimbSide::Right];

    /// Stride offset into the gait cycle. Right trails left by half a cycle.
    pub fn phase_offset(self) -> f32 {
        match self {
            LimbSide::Left => 0.0,
            LimbSide::Right => 0.5,
        }
    }

    /// Mirror sign for the arm pendulum.
    pub fn mirror(self) -> f32 {
        match self {
            LimbSide::Left => 1.0,
            LimbSide::Right => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LimbSide::Left => "left",
            LimbSide::Right => "right",
        }
    }

    pub fn thigh(self) -> &'static str {
        match self {
            LimbSide::Left => "left_thigh",
            LimbSide::Right => "right_thigh",
        }
    }

    pub fn shin(self) -> &'static str {
        match self {
            LimbSide::Left => "left_shin",
            LimbSide::Right => "right_shin",
        }
    }

    pub fn foot(self) -> &'static str {
        match self {
            LimbSide::Left => "left_foot",
            LimbSide::Right => "right_foot",
        }
    }

    /// Upper arm.
    pub fn arm(self) -> &'static str {
        match self {
            LimbSide::Left => "left_arm",
            LimbSide::Right => "right_arm",
        }
    }

    /// Forearm (the elbow joint drives it).
    pub fn wrist(self) -> &'static str {
        match self {
            LimbSide::Left => "left_wrist",
            LimbSide::Right => "right_wrist",
        }
    }

    pub fn hand(self) -> &'static str {
        match self {
            LimbSide::Left => "left_hand",
            LimbSide::Right => "right_hand",
        }
    }
}

/// Part driven by the pelvis bob.
pub const TORSO: &str = "torso";
/// Pelvis part, reset to identity each frame.
pub const HIP: &str = "hip";
