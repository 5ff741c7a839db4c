//! Navigation-drawer engine: a menu panel is revealed from one screen edge by
//! dragging the content panel, with animated open/close, a repeatable "peek"
//! hint and an animated active-item indicator.
//!
//! The engine is painting-agnostic. It consumes raw pointer events and layout
//! sizes, and reports integer offset changes plus state transitions; turning
//! those into pixels is the renderer's job. All animation is driven by the
//! host's frame loop through [`slideout_core::RuntimeHandle`].

mod config;
mod content;
mod drawer;
mod error;
mod indicator;
mod position;

pub use config::{DrawerConfig, DrawerKind, TouchMode, DEFAULT_ANIMATION_DURATION_MS};
pub use content::ContentNode;
pub use drawer::{DrawerSavedState, DrawerState, MenuDrawer};
pub use error::DrawerError;
pub use indicator::{IndicatorAnimator, INDICATOR_ANIM_DURATION_MS};
pub use position::{Axis, AxisPolicy, DrawerFrames, Position};
