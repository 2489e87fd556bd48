//! Per-frame input plumbing: the frame input record, button edge
//! detection, and pointer-delta tracking.

/// Frame input record and button identifiers.
pub mod event;
/// Button edge detection.
pub mod latch;
/// Pointer delta tracking.
pub mod pointer;

pub use event::{normalize_pointer, FrameInput, MouseButton};
pub use latch::{ButtonEdge, ButtonLatch};
pub use pointer::PointerTracker;
