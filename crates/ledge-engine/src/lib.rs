pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::GameEvent;
pub use components::entity::{Entity, EntityKind, Contacts, Ai, AiKind, AiState, JUMP_SPEED};
pub use components::map::{TileMap, Tile, Penetration};
pub use components::sprite::{SpriteComponent, AtlasId};
pub use crate::core::physics::{Axis, ResolutionEffects, overlaps, touches, resolve, resolve_pass, resolve_map};
pub use crate::core::time::FixedTimestep;
pub use crate::core::world::World;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::Camera2D;
pub use input::queue::{InputEvent, InputQueue};
pub use input::keyboard::KeyboardState;
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::ai::{AGGRO_RADIUS, WALK_SPEED};
