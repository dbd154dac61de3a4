pub mod gait;
pub mod ik;
pub mod time;
