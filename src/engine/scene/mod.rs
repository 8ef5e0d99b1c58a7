pub mod ground;
pub mod layout;
