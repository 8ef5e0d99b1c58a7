pub mod reframe;
pub mod rig;
