pub mod hit;
pub mod layout;
pub mod render;
pub mod validate;
