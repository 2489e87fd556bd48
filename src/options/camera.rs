use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera control parameters.
pub struct CameraOptions {
    /// Multiplier applied to the per-frame pointer delta.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 4.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Subtract (rather than add) the vertical pointer delta when
    /// strafing, for screen coordinates where Y grows downward.
    #[schemars(title = "Invert Y")]
    pub invert_y: bool,
    /// Orbit distance after construction or reset.
    #[schemars(title = "Initial Distance", range(min = 0.1, max = 1000.0), extend("step" = 0.1))]
    pub initial_orbit_distance: f32,
    /// Lower bound for the orbit distance.
    #[schemars(skip)]
    pub min_orbit_distance: f32,
    /// Empirical gain on the pointer delta while strafing with the
    /// primary button held.
    #[schemars(title = "Strafe Gain", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub strafe_gain: f32,
}

impl CameraOptions {
    /// The subset of options that can be swapped at runtime through
    /// [`crate::camera::OrbitCamera::set_control_config`].
    #[must_use]
    pub fn control_config(&self) -> ControlConfig {
        ControlConfig {
            invert_y: self.invert_y,
        }
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.23,
            invert_y: true,
            initial_orbit_distance: 10.0,
            min_orbit_distance: 1e-3,
            strafe_gain: 1.0,
        }
    }
}

/// Pointer-axis conventions applied during strafing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ControlConfig {
    /// See [`CameraOptions::invert_y`].
    pub invert_y: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self { invert_y: true }
    }
}
