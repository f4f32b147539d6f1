use bytemuck::{Pod, Zeroable};

/// A game event communicated from Rust to the host via shared memory.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// An event carrying a kind and no payload.
    pub fn new(kind: f32) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}
