// extensions/mod.rs
//
// Pure-math helpers with no knowledge of rigs or poses.

pub mod easing;

pub use easing::{Easing, lerp, ease};
