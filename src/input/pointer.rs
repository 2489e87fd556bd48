use glam::Vec2;

/// Remembers last frame's pointer position so each frame can turn an
/// absolute position into a delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    previous: Vec2,
}

impl PointerTracker {
    /// Tracker with its baseline at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: Vec2::ZERO,
        }
    }

    /// `(current − previous) × sensitivity`. Does not move the baseline.
    #[must_use]
    pub fn delta(&self, current: Vec2, sensitivity: f32) -> Vec2 {
        (current - self.previous) * sensitivity
    }

    /// Make `current` the baseline for the next frame.
    pub fn advance(&mut self, current: Vec2) {
        self.previous = current;
    }

    /// The current baseline.
    #[must_use]
    pub const fn previous(&self) -> Vec2 {
        self.previous
    }
}
