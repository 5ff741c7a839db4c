use super::*;

#[test]
fn empty_tracker_reports_zero() {
    let tracker = VelocityTracker::new();
    assert_eq!(tracker.velocity(), 0.0);
}

#[test]
fn single_sample_reports_zero() {
    let mut tracker = VelocityTracker::new();
    tracker.add_movement(0, 42.0);
    assert_eq!(tracker.velocity(), 0.0);
}

#[test]
fn constant_motion_recovers_exact_velocity() {
    let mut tracker = VelocityTracker::new();
    // 100 px every 10 ms = 10_000 px/s.
    for step in 0..4 {
        tracker.add_movement(step * 10, step as f32 * 100.0);
    }
    let velocity = tracker.velocity();
    assert!(
        (velocity - 10_000.0).abs() < 1.0,
        "expected ~10000, got {velocity}"
    );
}

#[test]
fn backwards_motion_is_negative() {
    let mut tracker = VelocityTracker::new();
    tracker.add_movement(0, 300.0);
    tracker.add_movement(10, 200.0);
    tracker.add_movement(20, 100.0);
    assert!(tracker.velocity() < 0.0);
}

#[test]
fn capped_velocity_clamps_both_signs() {
    let mut tracker = VelocityTracker::new();
    tracker.add_movement(0, 0.0);
    tracker.add_movement(1, 10_000.0);
    assert_eq!(tracker.velocity_capped(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_movement(0, 10_000.0);
    tracker.add_movement(1, 0.0);
    assert_eq!(tracker.velocity_capped(8_000.0), -8_000.0);
}

#[test]
fn stale_gap_means_the_pointer_stopped() {
    let mut tracker = VelocityTracker::new();
    tracker.add_movement(0, 0.0);
    tracker.add_movement(ASSUME_STOPPED_MS + 1, 100.0);
    assert_eq!(tracker.velocity(), 0.0);
}

#[test]
fn samples_beyond_horizon_are_ignored() {
    let mut tracker = VelocityTracker::new();
    tracker.add_movement(0, 500.0); // stale outlier
    tracker.add_movement(150, 100.0);
    tracker.add_movement(160, 200.0);
    tracker.add_movement(170, 300.0);
    let velocity = tracker.velocity();
    // Only the recent rising samples count, so the velocity is positive.
    assert!(velocity > 0.0, "got {velocity}");
}

#[test]
fn reset_discards_history() {
    let mut tracker = VelocityTracker::new();
    tracker.add_movement(0, 0.0);
    tracker.add_movement(10, 100.0);
    tracker.reset();
    assert_eq!(tracker.velocity(), 0.0);
}
