//! Shared gesture thresholds, in logical pixels.

/// Minimum pointer travel before a press is reclassified as a drag. Large
/// enough to ignore finger jitter, small enough to feel responsive; matches
/// the common platform convention of ~8dp.
pub const TOUCH_SLOP: f32 = 8.0;

/// Default width of the edge strip that accepts drag-starts in bezel touch
/// mode (24dp at baseline density).
pub const DEFAULT_BEZEL_SIZE: f32 = 24.0;

/// Cap applied to tracked fling velocities, in pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
