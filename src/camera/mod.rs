//! Orbit camera: orientation frame, per-frame controller, and the GPU
//! packing of its output.

/// Orbit camera state machine.
pub mod controller;
/// Orthonormal orientation frame.
pub mod frame;
/// GPU uniform packing of the view matrix.
pub mod uniform;

pub use controller::{OrbitCamera, UpdateStatus};
pub use frame::OrbitFrame;
pub use uniform::ViewUniform;
