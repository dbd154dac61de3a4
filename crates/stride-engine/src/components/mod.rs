pub mod clip;
pub mod layer;
pub mod pose;
pub mod rig;
