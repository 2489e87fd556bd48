use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::camera::frame::OrbitFrame;
use crate::camera::uniform::ViewUniform;
use crate::error::OrbitCamError;
use crate::input::{ButtonLatch, FrameInput, MouseButton, PointerTracker};
use crate::math::ViewMatrix;
use crate::options::{CameraOptions, ControlConfig};

/// Outcome of [`OrbitCamera::update`]. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UpdateStatus {
    /// The frame was integrated and the view matrix recomputed.
    Applied,
    /// The camera is inactive; nothing changed, not even the pointer
    /// baseline.
    Inactive,
}

/// Orbit camera driven by per-frame pointer motion, two buttons and a
/// camera-local translation delta.
///
/// The orientation is kept as an explicit orthonormal basis that is
/// rotated incrementally and re-orthonormalized every frame. The
/// published view matrix is
/// `T(pan) · T(+target pivot) · R · T(−target pivot)`, where `R` is the
/// orbit view around the live pivot. Changing the target pivot therefore
/// makes the image jump rather than blend.
///
/// The live pivot is pinned to the world origin at the start of every
/// update. [`set_orbit_pivot_ws`](Self::set_orbit_pivot_ws) only moves the
/// target pivot used in the composition above.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    view: ViewMatrix,
    frame: OrbitFrame,
    orbit_distance: f32,
    camera_position: Vec3,
    live_pivot: Vec3,
    target_pivot: Vec3,
    pan_offset: Vec3,

    primary: ButtonLatch,
    secondary: ButtonLatch,
    pointer: PointerTracker,

    mouse_sensitivity: f32,
    control: ControlConfig,
    strafe_gain: f32,
    initial_orbit_distance: f32,
    min_orbit_distance: f32,
    active: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Camera with default [`CameraOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&CameraOptions::default())
    }

    /// Camera configured from `options`, in its canonical reset state.
    #[must_use]
    pub fn with_options(options: &CameraOptions) -> Self {
        let mut camera = Self {
            view: ViewMatrix::IDENTITY,
            frame: OrbitFrame::IDENTITY,
            orbit_distance: 0.0,
            camera_position: Vec3::ZERO,
            live_pivot: Vec3::ZERO,
            target_pivot: Vec3::ZERO,
            pan_offset: Vec3::ZERO,
            primary: ButtonLatch::new(MouseButton::Primary),
            secondary: ButtonLatch::new(MouseButton::Secondary),
            pointer: PointerTracker::new(),
            mouse_sensitivity: 0.0,
            control: ControlConfig::default(),
            strafe_gain: 1.0,
            initial_orbit_distance: 0.0,
            min_orbit_distance: 0.0,
            active: true,
        };
        camera.apply_options(options);
        camera.reset_trafos();
        camera
    }

    /// Adopt every setting in `options` without touching the camera's
    /// orientation. The initial distance takes effect on the next reset;
    /// a raised minimum distance applies immediately.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.mouse_sensitivity = options.mouse_sensitivity;
        self.control = options.control_config();
        self.strafe_gain = options.strafe_gain;
        self.min_orbit_distance = options.min_orbit_distance.max(0.0);
        self.initial_orbit_distance = options.initial_orbit_distance;

        let previous = self.orbit_distance;
        self.set_distance_clamped(previous);
        if self.orbit_distance > previous {
            self.camera_position =
                self.live_pivot + self.frame.z * self.orbit_distance;
        }
    }

    /// Advance the camera by one frame.
    ///
    /// The frame time is accepted for time-based damping but not used yet.
    /// While the primary button is held the pointer strafes the camera
    /// around the pivot; while the secondary button is held horizontal
    /// pointer motion rolls the frame by `π` per unit of
    /// (sensitivity-scaled) delta.
    pub fn update(&mut self, _dt: f32, input: &FrameInput) -> UpdateStatus {
        if !self.active {
            return UpdateStatus::Inactive;
        }

        let delta = self.pointer.delta(input.pointer, self.mouse_sensitivity);
        let _ = self.primary.update(input.primary);
        let _ = self.secondary.update(input.secondary);

        self.live_pivot = Vec3::ZERO;
        self.set_distance_clamped(
            self.orbit_distance + input.translation_delta.z,
        );

        let start = self.frame;
        let mut position = self.live_pivot + start.z * self.orbit_distance;

        let mut strafe = input.translation_delta.truncate();
        if self.primary.is_down() {
            strafe += self.pointer_strafe(delta);
        }
        position += start.x * strafe.x + start.y * strafe.y;

        let mut frame = start;
        if self.secondary.is_down() {
            frame.rotate_in_plane(PI * -delta.x);
        }

        // Pull z towards the displaced camera; that is what turns a strafe
        // into an orbit. A degenerate basis keeps last frame's axes.
        self.frame = frame
            .reorthonormalized(position - self.live_pivot)
            .unwrap_or_else(|| {
                log::warn!("degenerate orbit frame, keeping previous axes");
                start
            });

        self.camera_position =
            self.live_pivot + self.frame.z * self.orbit_distance;
        self.view = self.compose_view();

        self.pointer.advance(input.pointer);
        UpdateStatus::Applied
    }

    /// Strafe contribution of the pointer while the primary button is held.
    fn pointer_strafe(&self, delta: Vec2) -> Vec2 {
        let vertical = if self.control.invert_y { -delta.y } else { delta.y };
        Vec2::new(delta.x, vertical) * self.strafe_gain
    }

    fn compose_view(&self) -> ViewMatrix {
        let orbit = self.frame.view_matrix(self.camera_position);
        ViewMatrix::from_translation(self.pan_offset)
            * ViewMatrix::from_translation(self.target_pivot)
            * orbit
            * ViewMatrix::from_translation(-self.target_pivot)
    }

    fn set_distance_clamped(&mut self, distance: f32) {
        self.orbit_distance = distance.max(self.min_orbit_distance);
    }

    /// The last computed view matrix.
    #[must_use]
    pub const fn view_matrix(&self) -> &ViewMatrix {
        &self.view
    }

    /// Reset, then seed orientation and orbit distance from `view`.
    ///
    /// The matrix is published as-is until the next
    /// [`update`](Self::update). The orientation frame is seeded from its
    /// rotation rows with scale and skew removed. The orbit distance
    /// becomes the distance from the live pivot to the camera position
    /// encoded by `view`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitCamError::SingularMatrix`] if `view` cannot be
    /// inverted or its rotation rows do not span a basis. The camera is
    /// left untouched in that case.
    pub fn set_view_matrix(
        &mut self,
        view: &ViewMatrix,
    ) -> Result<(), OrbitCamError> {
        let inverse = view
            .try_inverse()
            .inspect_err(|e| log::warn!("rejecting view matrix: {e}"))?;
        let position = inverse.w_axis.truncate();
        let frame =
            OrbitFrame::from_view(view).orthonormalized().ok_or_else(|| {
                log::warn!("rejecting view matrix: degenerate rotation rows");
                OrbitCamError::SingularMatrix {
                    determinant: view.to_mat4().determinant(),
                }
            })?;

        self.reset_trafos();
        self.view = *view;
        self.frame = frame;
        self.camera_position = position;
        self.target_pivot = Vec3::ZERO;
        self.set_distance_clamped(self.live_pivot.distance(position));
        Ok(())
    }

    /// Set the target pivot used to re-center the view.
    pub fn set_orbit_pivot_ws(&mut self, pivot: Vec3) {
        self.target_pivot = pivot;
    }

    /// Set the orbit distance directly. Clamped like every other distance
    /// change; visible after the next update.
    pub fn set_orbit_distance(&mut self, distance: f32) {
        self.set_distance_clamped(distance);
    }

    /// Accumulate into the pan offset. Visible after the next update.
    pub fn add_pan_delta(&mut self, delta: Vec3) {
        self.pan_offset += delta;
    }

    /// Set the pointer delta multiplier.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Set the pointer-axis conventions.
    pub fn set_control_config(&mut self, config: ControlConfig) {
        self.control = config;
    }

    /// Enable or disable the camera. Inactive cameras ignore updates.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Return to the canonical state: identity frame and view, zero pivot
    /// and pan, initial orbit distance, pointer baseline at the origin.
    ///
    /// Settings, the active flag and held buttons are kept.
    pub fn reset_trafos(&mut self) {
        self.view = ViewMatrix::IDENTITY;
        self.frame = OrbitFrame::IDENTITY;
        self.live_pivot = Vec3::ZERO;
        self.target_pivot = Vec3::ZERO;
        self.pan_offset = Vec3::ZERO;
        self.set_distance_clamped(self.initial_orbit_distance);
        self.camera_position = self.frame.z * self.orbit_distance;
        self.pointer = PointerTracker::new();
    }

    /// GPU-ready copy of the current view.
    #[must_use]
    pub fn uniform(&self) -> ViewUniform {
        let mut uniform = ViewUniform::new();
        uniform.update_from(self);
        uniform
    }

    /// Current orientation frame.
    #[must_use]
    pub const fn frame(&self) -> &OrbitFrame {
        &self.frame
    }

    /// Distance from the live pivot to the camera.
    #[must_use]
    pub const fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    /// Camera position around the live pivot, before the pivot and pan
    /// re-centering.
    #[must_use]
    pub const fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Pivot the orbit math actually uses (always the origin).
    #[must_use]
    pub const fn live_pivot(&self) -> Vec3 {
        self.live_pivot
    }

    /// Pivot last passed to [`set_orbit_pivot_ws`](Self::set_orbit_pivot_ws).
    #[must_use]
    pub const fn target_pivot(&self) -> Vec3 {
        self.target_pivot
    }

    /// Accumulated pan offset.
    #[must_use]
    pub const fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }

    /// Pointer delta multiplier.
    #[must_use]
    pub const fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Pointer-axis conventions.
    #[must_use]
    pub const fn control_config(&self) -> ControlConfig {
        self.control
    }

    /// Whether updates are applied.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Primary button held as of the last applied update.
    #[must_use]
    pub const fn primary_held(&self) -> bool {
        self.primary.is_down()
    }

    /// Secondary button held as of the last applied update.
    #[must_use]
    pub const fn secondary_held(&self) -> bool {
        self.secondary.is_down()
    }

    /// Pointer position the next delta is measured from.
    #[must_use]
    pub const fn previous_pointer(&self) -> Vec2 {
        self.pointer.previous()
    }
}
