pub mod animation;
pub mod compose;
pub mod interpolate;
