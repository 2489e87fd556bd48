use glam::{Vec2, Vec3};

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button. Strafes while held.
    Primary,
    /// Secondary (right) mouse button. Rolls the frame while held.
    Secondary,
}

impl MouseButton {
    /// Lowercase name used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[cfg(feature = "winit")]
impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = winit::event::MouseButton;

    fn try_from(button: winit::event::MouseButton) -> Result<Self, Self::Error> {
        match button {
            winit::event::MouseButton::Left => Ok(Self::Primary),
            winit::event::MouseButton::Right => Ok(Self::Secondary),
            other => Err(other),
        }
    }
}

/// Everything [`OrbitCamera::update`](crate::camera::OrbitCamera::update)
/// consumes for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position. Only differences between frames matter, so any
    /// unit works as long as it stays the same from frame to frame.
    pub pointer: Vec2,
    /// Primary button currently down.
    pub primary: bool,
    /// Secondary button currently down.
    pub secondary: bool,
    /// Camera-local translation: x lateral, y vertical, z forward/back
    /// along the orbit axis.
    pub translation_delta: Vec3,
}

impl FrameInput {
    /// Input with the pointer at `pointer` and nothing else going on.
    #[must_use]
    pub fn at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    /// Set the button states.
    #[must_use]
    pub const fn with_buttons(mut self, primary: bool, secondary: bool) -> Self {
        self.primary = primary;
        self.secondary = secondary;
        self
    }

    /// Set the camera-local translation delta.
    #[must_use]
    pub const fn with_translation(mut self, delta: Vec3) -> Self {
        self.translation_delta = delta;
        self
    }
}

/// Map a pixel position into viewport-normalized units, where moving
/// across the full viewport width changes `x` by `1.0`.
///
/// Rotation in the camera is `π` per normalized unit, so dragging across
/// the whole viewport rolls the frame half a turn. A zero-sized viewport
/// leaves the position untouched.
#[must_use]
pub fn normalize_pointer(pixels: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return pixels;
    }
    pixels / viewport
}
