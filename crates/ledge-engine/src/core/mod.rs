pub mod physics;
pub mod time;
pub mod world;
