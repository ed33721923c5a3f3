pub mod constants;
pub mod layout;
pub mod render;

pub use render::render;
