//! 1-D pointer velocity tracking using the impulse strategy: the velocity is
//! derived from the kinetic energy the gesture imparted, which is robust
//! against uneven event timing.

/// Ring buffer capacity for movement samples.
const HISTORY_SIZE: usize = 20;

/// Samples older than this are ignored when computing velocity.
const HORIZON_MS: u64 = 100;

/// A gap this long between samples means the pointer stopped moving.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: u64,
    position: f32,
}

/// Tracks absolute positions along one axis and produces a release velocity
/// in pixels per second. One tracker lives for exactly one drag session.
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records a movement sample. `position` is the pointer position along
    /// the tracked axis at `time_ms`.
    pub fn add_movement(&mut self, time_ms: u64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Computes the velocity in pixels per second. Returns 0.0 when fewer
    /// than two usable samples exist or the pointer had already stopped.
    pub fn velocity(&self) -> f32 {
        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        // Walk backwards through the ring collecting the recent window:
        // stop at the horizon or at the first stale gap between samples.
        let mut window: [Sample; HISTORY_SIZE] = [newest; HISTORY_SIZE];
        let mut count = 0;
        let mut cursor = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous.time_ms.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            window[count] = sample;
            previous = sample;
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
            cursor = if cursor == 0 { HISTORY_SIZE - 1 } else { cursor - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        // window[0] is the newest sample; integrate oldest to newest.
        let mut work = 0.0f32;
        for pair in (1..count).rev() {
            let older = window[pair];
            let newer = window[pair - 1];
            let dt = newer.time_ms.saturating_sub(older.time_ms) as f32;
            if dt == 0.0 {
                continue;
            }
            let v_curr = (newer.position - older.position) / dt;
            let v_prev = kinetic_energy_to_velocity(work);
            work += (v_curr - v_prev) * v_curr.abs();
            if pair == count - 1 {
                work *= 0.5;
            }
        }

        // Samples carry millisecond timestamps; scale to per-second.
        kinetic_energy_to_velocity(work) * 1000.0
    }

    /// Velocity clamped to `[-max_velocity, max_velocity]`.
    pub fn velocity_capped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// E = ½·m·v² with unit mass, inverted while keeping the sign of the energy.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
