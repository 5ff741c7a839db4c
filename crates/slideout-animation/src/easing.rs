use std::f32::consts::FRAC_PI_2;

/// Easing functions used by the drawer timelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease-out quintic. Fast start, long settle; the open/close curve.
    Smooth,
    /// Quadratic ease-in, used when stretching the active-item indicator.
    Accelerate,
    /// Out-and-back hint curve: a half-sine ease out over the first third,
    /// hold at full value through the middle third, half-sine ease back over
    /// the last third. Returns to zero at `fraction == 1`.
    Peek,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Smooth => {
                let t = t - 1.0;
                t * t * t * t * t + 1.0
            }
            Easing::Accelerate => t * t,
            Easing::Peek => {
                half_sine((t * 3.0).min(1.0)) - half_sine((t * 3.0 - 2.0).max(0.0))
            }
        }
    }
}

fn half_sine(t: f32) -> f32 {
    (t * FRAC_PI_2).sin()
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
