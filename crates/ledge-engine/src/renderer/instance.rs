use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the host renderer from WASM memory.
/// Must match the host protocol: 5 floats = 20 bytes stride.
///
/// Every instance is a unit quad (1x1 world units) centered at (x, y);
/// there is no per-instance scale or rotation.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Atlas row.
    pub atlas_row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Fixed-capacity instance buffer rebuilt every frame.
/// The host reads at most `max_instances` records, so pushes past the
/// capacity are dropped rather than written out of bounds.
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
    max_instances: usize,
}

impl RenderBuffer {
    pub fn new(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            max_instances,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        if self.instances.len() < self.max_instances {
            self.instances.push(instance);
        }
    }

    pub fn extend(&mut self, instances: impl IntoIterator<Item = RenderInstance>) {
        for instance in instances {
            self.push(instance);
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    pub fn capacity(&self) -> usize {
        self.max_instances
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_5_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 20);
        assert_eq!(RenderInstance::FLOATS, 5);
    }

    #[test]
    fn push_and_count() {
        let mut buf = RenderBuffer::new(8);
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn pushes_past_capacity_are_dropped() {
        let mut buf = RenderBuffer::new(3);
        for _ in 0..10 {
            buf.push(RenderInstance::default());
        }
        assert_eq!(buf.instance_count(), 3);
    }
}
