use glam::Vec2;

use crate::components::sprite::SpriteComponent;

/// Vertical launch speed applied by [`Entity::jump`] when grounded.
pub const JUMP_SPEED: f32 = 5.0;

/// Which AI routine drives an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiKind {
    /// Waits until the player comes close, then walks toward them.
    Walker,
}

/// Walker behavior state. There is no transition back to `Idle`:
/// once an enemy aggros it pursues for the rest of the mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    Walking,
}

/// AI data carried by enemy entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ai {
    pub kind: AiKind,
    pub state: AiState,
}

impl Ai {
    pub fn new(kind: AiKind) -> Self {
        Self {
            kind,
            state: AiState::Idle,
        }
    }
}

/// Role tag for an entity. Selects which collision response rules apply
/// and whether the entity is static: platforms never move and are never
/// displaced, players and enemies are dynamic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Player,
    Platform,
    Enemy(Ai),
}

/// Per-tick contact flags, one per AABB face.
/// Reset at the start of every update; a set flag means that face was
/// pushed against something during this tick's resolution passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Contacts {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A rigid axis-aligned rectangular game object.
/// One struct covers players, platforms and enemies; the kind tag selects
/// the applicable behavior subset.
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    /// Soft-delete flag: inactive entities are skipped by collision and rendering.
    pub active: bool,
    /// Terminal flag: a lost player failed the mission, a lost enemy is defeated.
    pub lost: bool,
    /// AABB center in world space (Y up).
    pub pos: Vec2,
    pub vel: Vec2,
    pub accel: Vec2,
    /// AABB extents, centered on `pos`.
    pub size: Vec2,
    pub contacts: Contacts,
    /// Sprite component (optional; entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            kind: EntityKind::Platform,
            active: true,
            lost: false,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
            size: Vec2::ONE,
            contacts: Contacts::default(),
            sprite: None,
        }
    }
}

impl Entity {
    /// A static 1x1 platform at the origin (the default entity).
    pub fn platform() -> Self {
        Self::default()
    }

    pub fn player() -> Self {
        Self {
            kind: EntityKind::Player,
            ..Self::default()
        }
    }

    pub fn enemy(ai: AiKind) -> Self {
        Self {
            kind: EntityKind::Enemy(Ai::new(ai)),
            ..Self::default()
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_accel(mut self, accel: Vec2) -> Self {
        self.accel = accel;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    // -- Kind predicates --

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player)
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy(_))
    }

    /// Static entities are only ever the other side of a collision.
    pub fn is_static(&self) -> bool {
        matches!(self.kind, EntityKind::Platform)
    }

    /// Launch upward if grounded this tick, otherwise do nothing.
    /// No jump buffering and no double jump.
    pub fn jump(&mut self) {
        if self.contacts.bottom {
            self.vel.y = JUMP_SPEED;
        }
    }
}
