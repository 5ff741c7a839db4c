//! Pure animation math: easing curves and the [`PositionScroller`] timeline.
//!
//! Nothing in this crate reads a clock. Timelines are advanced by handing them
//! the current time in milliseconds, so they behave identically under a real
//! frame loop and under tests that step time by hand.

mod easing;
mod scroller;

pub use easing::Easing;
pub use scroller::PositionScroller;
