//! Input plumbing shared by the gesture code: geometric primitives, the raw
//! pointer-event type, a 1-D velocity tracker and the gesture thresholds.

mod geometry;
mod gesture_constants;
mod pointer;
mod velocity_tracker;

pub use geometry::{Point, Rect, Size};
pub use gesture_constants::{DEFAULT_BEZEL_SIZE, MAX_FLING_VELOCITY, TOUCH_SLOP};
pub use pointer::{PointerEvent, PointerPhase};
pub use velocity_tracker::{VelocityTracker, ASSUME_STOPPED_MS};
