use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn runtime() -> Runtime {
    Runtime::new(Arc::new(DefaultScheduler))
}

#[test]
fn drain_runs_callbacks_with_frame_time() {
    let runtime = runtime();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    for _ in 0..3 {
        let seen = Rc::clone(&seen);
        handle.register_frame_callback(move |time| seen.borrow_mut().push(time));
    }

    assert!(handle.needs_frame());
    handle.drain_frame_callbacks(16_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000; 3]);
    assert!(!handle.has_frame_callbacks());
    assert!(!handle.needs_frame());
}

#[test]
fn callback_registered_during_drain_runs_next_frame() {
    let runtime = runtime();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    {
        let handle = handle.clone();
        let seen = Rc::clone(&seen);
        handle.clone().register_frame_callback(move |time| {
            seen.borrow_mut().push(time);
            let seen = Rc::clone(&seen);
            handle.register_frame_callback(move |time| seen.borrow_mut().push(time));
        });
    }

    handle.drain_frame_callbacks(1);
    assert_eq!(seen.borrow().as_slice(), &[1]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(2);
    assert_eq!(seen.borrow().as_slice(), &[1, 2]);
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = runtime();
    let handle = runtime.handle();
    let clock = runtime.frame_clock();
    let fired = Rc::new(RefCell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        clock.with_frame_nanos(move |_| *fired.borrow_mut() = true)
    };
    drop(registration);

    handle.drain_frame_callbacks(0);
    assert!(!*fired.borrow());
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn cancel_of_already_drained_callback_is_a_no_op() {
    let runtime = runtime();
    let handle = runtime.handle();
    let clock = runtime.frame_clock();

    let registration = clock.with_frame_nanos(|_| {});
    handle.drain_frame_callbacks(0);
    // The callback already ran; cancelling afterwards must not disturb others.
    registration.cancel();
    handle.register_frame_callback(|_| {});
    assert!(handle.has_frame_callbacks());
}

#[test]
fn frame_millis_converts_from_nanos() {
    let runtime = runtime();
    let handle = runtime.handle();
    let clock = runtime.frame_clock();
    let seen = Rc::new(RefCell::new(0u64));

    let _registration = {
        let seen = Rc::clone(&seen);
        clock.with_frame_millis(move |millis| *seen.borrow_mut() = millis)
    };
    handle.drain_frame_callbacks(32_500_000);
    assert_eq!(*seen.borrow(), 32);
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let handle = {
        let runtime = runtime();
        runtime.handle()
    };
    assert!(handle.register_frame_callback(|_| {}).is_none());
    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(0);
}
