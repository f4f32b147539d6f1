pub mod ai;
pub mod render;
