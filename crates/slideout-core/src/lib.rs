//! Single-threaded frame-callback runtime.
//!
//! Everything animated in Slideout is driven by one external loop: the host
//! calls [`RuntimeHandle::drain_frame_callbacks`] with the current frame time
//! before each repaint, and components re-register a callback whenever they
//! still have work left. No wall clock is read anywhere; time is always
//! injected, which keeps animation code synchronous and testable.

mod frame_clock;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{DefaultScheduler, FrameCallbackId, Runtime, RuntimeHandle, RuntimeScheduler};
