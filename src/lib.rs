// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive orbit camera controller.
//!
//! Feed [`camera::OrbitCamera::update`] one [`input::FrameInput`] per
//! rendered frame (pointer position, two button states and a camera-local
//! translation delta) and read back an affine [`math::ViewMatrix`].
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - the per-frame state machine
//! - [`camera::ViewUniform`] - the view packed for a GPU uniform buffer
//! - [`options::Options`] - control settings with TOML preset support
//!
//! # Behavior
//!
//! Orientation is an explicit orthonormal basis, rotated incrementally and
//! re-orthonormalized at the end of every update so floating-point error
//! cannot accumulate. Holding the primary button strafes the camera around
//! the pivot; holding the secondary button rolls it about the view axis.
//! The orbit math always runs around the world origin; a separately set
//! target pivot re-centers the finished view, which jumps rather than
//! blends when the target moves.
//!
//! The crate only logs through the [`log`] facade (button edges at `debug`,
//! rejected input at `warn`); installing a logger is up to the host.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;

pub use camera::{OrbitCamera, OrbitFrame, UpdateStatus, ViewUniform};
pub use error::OrbitCamError;
pub use input::FrameInput;
pub use math::ViewMatrix;
