use super::event::MouseButton;

/// A transition reported by [`ButtonLatch::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    /// Went from up to down.
    Pressed,
    /// Went from down to up.
    Released,
}

/// Edge detector for one button.
///
/// Each physical press and release is reported exactly once, no matter
/// how many frames the button stays in either state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLatch {
    button: MouseButton,
    down: bool,
}

impl ButtonLatch {
    /// Latch for `button`, starting released.
    #[must_use]
    pub const fn new(button: MouseButton) -> Self {
        Self { button, down: false }
    }

    /// Feed this frame's raw state, returning the edge if one occurred.
    pub fn update(&mut self, down: bool) -> Option<ButtonEdge> {
        let edge = match (self.down, down) {
            (false, true) => ButtonEdge::Pressed,
            (true, false) => ButtonEdge::Released,
            _ => return None,
        };
        self.down = down;
        log::debug!(
            "{} button {}",
            self.button.name(),
            match edge {
                ButtonEdge::Pressed => "pressed",
                ButtonEdge::Released => "released",
            }
        );
        Some(edge)
    }

    /// Whether the button is currently held.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        self.down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_edge_once() {
        let mut latch = ButtonLatch::new(MouseButton::Primary);
        assert_eq!(latch.update(false), None);
        assert_eq!(latch.update(true), Some(ButtonEdge::Pressed));
        assert_eq!(latch.update(true), None);
        assert_eq!(latch.update(true), None);
        assert!(latch.is_down());
        assert_eq!(latch.update(false), Some(ButtonEdge::Released));
        assert_eq!(latch.update(false), None);
        assert!(!latch.is_down());
    }

    #[test]
    fn latches_are_independent() {
        let mut primary = ButtonLatch::new(MouseButton::Primary);
        let mut secondary = ButtonLatch::new(MouseButton::Secondary);
        assert_eq!(primary.update(true), Some(ButtonEdge::Pressed));
        assert_eq!(secondary.update(false), None);
        assert!(primary.is_down());
        assert!(!secondary.is_down());
    }
}
