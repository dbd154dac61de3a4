use crate::systems::compose::WorldTransform;

/// Draw band for a rig part. Controls compositing order for the rasterizer.
///
/// Bands are drawn back-to-front: Back first, Front last.
/// Within a band, parts keep the order the composer emitted them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DrawBand {
    Back = 0,
    Middle = 1,
    Front = 2,
}

impl DrawBand {
    /// Total number of draw bands.
    pub const COUNT: usize = 3;

    /// Back-to-front.
    pub const ORDER: [DrawBand; 3] = [DrawBand::Back, DrawBand::Middle, DrawBand::Front];

    /// Band for a biped part name. Returns None for parts that are not drawn.
    pub fn for_part(name: &str) -> Option<Self> {
        match name {
            "left_thigh" | "right_thigh" => Some(Self::Back),
            "head" | "left_arm" | "right_arm" | "left_hand" | "right_hand" | "hip" | "left_shin"
            | "right_shin" => Some(Self::Middle),
            "torso" | "left_wrist" | "right_wrist" | "left_foot" | "right_foot" => Some(Self::Front),
            _ => None,
        }
    }

    /// Convert to u8 for the render handoff.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Banded parts of one frame in paint order.
pub fn draw_order(transforms: &[WorldTransform]) -> Vec<&WorldTransform> {
    DrawBand::ORDER
        .iter()
        .flat_map(|&band| {
            transforms
                .iter()
                .filter(move |t| DrawBand::for_part(&t.name) == Some(band))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn at(name: &str) -> WorldTransform {
        WorldTransform {
            name: name.to_string(),
            position: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(DrawBand::Back < DrawBand::Middle);
        assert!(DrawBand::Middle < DrawBand::Front);
    }

    #[test]
    fn thighs_behind_shins_behind_feet() {
        assert_eq!(DrawBand::for_part("left_thigh"), Some(DrawBand::Back));
        assert_eq!(DrawBand::for_part("left_shin"), Some(DrawBand::Middle));
        assert_eq!(DrawBand::for_part("left_foot"), Some(DrawBand::Front));
        assert_eq!(DrawBand::for_part("cape"), None);
    }

    #[test]
    fn band_codes_follow_order() {
        for (i, band) in DrawBand::ORDER.iter().enumerate() {
            assert_eq!(band.as_u8() as usize, i);
        }
        assert_eq!(DrawBand::ORDER.len(), DrawBand::COUNT);
    }

    #[test]
    fn draw_order_groups_bands_and_skips_unknown() {
        let frame = vec![at("hip"), at("torso"), at("head"), at("left_thigh"), at("left_foot"), at("cape")];
        let names: Vec<&str> = draw_order(&frame).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["left_thigh", "hip", "head", "torso", "left_foot"]);
    }
}
