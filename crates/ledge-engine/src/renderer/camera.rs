use glam::Vec2;

/// Orthographic camera for 2D rendering.
/// The host renderer builds its projection from the center and viewport
/// size published in the protocol header; engine-side the camera drives
/// follow behavior and visibility culling.
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center position in world space.
    pub center: Vec2,
    /// Optional world-space bounds (min, max) the viewport may not leave.
    pub bounds: Option<(Vec2, Vec2)>,
    /// Smoothing factor for camera follow (0.0 = instant, 1.0 = never moves).
    pub smoothing: f32,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::ZERO,
            bounds: None,
            smoothing: 0.0,
        }
    }

    /// Set world bounds for camera clamping.
    pub fn set_bounds(&mut self, min: Vec2, max: Vec2) {
        self.bounds = Some((min, max));
    }

    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// 0.0 = instant snap, 0.9 = very smooth/slow.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 0.99);
    }

    /// Move the camera center to the target, applying bounds.
    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    /// Move toward the target, honoring the smoothing factor.
    /// Call every frame with the tracked position.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        if self.smoothing <= 0.0 {
            self.look_at(target);
        } else {
            let lerp_factor = 1.0 - self.smoothing.powf(dt * 60.0);
            self.center += (target - self.center) * lerp_factor;
            self.clamp_to_bounds();
        }
    }

    fn clamp_to_bounds(&mut self) {
        if let Some((min, max)) = self.bounds {
            let half = Vec2::new(self.width, self.height) / 2.0;
            self.center = self.center.clamp(min + half, max - half);
            // A viewport larger than the bounds centers on them instead.
            if self.width >= max.x - min.x {
                self.center.x = (min.x + max.x) / 2.0;
            }
            if self.height >= max.y - min.y {
                self.center.y = (min.y + max.y) / 2.0;
            }
        }
    }

    /// Check if a world-space rectangle overlaps the viewport.
    pub fn is_rect_visible(&self, rect_center: Vec2, rect_half_size: Vec2) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let rect_min = rect_center - rect_half_size;
        let rect_max = rect_center + rect_half_size;
        rect_max.x >= self.center.x - half_w
            && rect_min.x <= self.center.x + half_w
            && rect_max.y >= self.center.y - half_h
            && rect_min.y <= self.center.y + half_h
    }
}
