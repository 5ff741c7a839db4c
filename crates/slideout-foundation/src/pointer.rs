use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer sample as delivered by the host, with an injected timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Point, time_ms: u64) -> Self {
        Self {
            phase,
            position,
            time_ms,
        }
    }

    pub fn down(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(PointerPhase::Down, Point::new(x, y), time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y), time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(PointerPhase::Up, Point::new(x, y), time_ms)
    }

    pub fn cancel(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(PointerPhase::Cancel, Point::new(x, y), time_ms)
    }
}
