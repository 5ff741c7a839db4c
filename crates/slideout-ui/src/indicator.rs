//! Animates the active-item indicator between menu anchors. Standalone from
//! the drawer so a host can reuse it for any marker that slides between
//! positions.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slideout_animation::{Easing, PositionScroller};
use slideout_core::{FrameCallbackRegistration, RuntimeHandle};

/// How long the indicator takes to slide between anchors.
pub const INDICATOR_ANIM_DURATION_MS: u64 = 800;

struct IndicatorInner {
    weak_self: Weak<RefCell<IndicatorInner>>,
    runtime: RuntimeHandle,
    /// Animates raw progress 0..1; the position easing is layered on top in
    /// `current_position`.
    scroller: PositionScroller,
    start: f32,
    target: f32,
    progress: f32,
    animating: bool,
    has_anchor: bool,
    registration: Option<FrameCallbackRegistration>,
    on_position_changed: Option<Box<dyn FnMut(f32)>>,
}

#[derive(Clone)]
pub struct IndicatorAnimator {
    inner: Rc<RefCell<IndicatorInner>>,
}

impl IndicatorAnimator {
    pub fn new(runtime: RuntimeHandle) -> Self {
        let inner = Rc::new(RefCell::new(IndicatorInner {
            weak_self: Weak::new(),
            runtime,
            scroller: PositionScroller::new(Easing::Smooth),
            start: 0.0,
            target: 0.0,
            progress: 1.0,
            animating: false,
            has_anchor: false,
            registration: None,
            on_position_changed: None,
        }));
        inner.borrow_mut().weak_self = Rc::downgrade(&inner);
        Self { inner }
    }

    pub fn set_on_position_changed(&self, listener: impl FnMut(f32) + 'static) {
        self.inner.borrow_mut().on_position_changed = Some(Box::new(listener));
    }

    /// Moves the indicator to `anchor`. The first anchor is always applied
    /// without animation; later changes animate when `animate` is set.
    pub fn set_anchor(&self, anchor: f32, animate: bool) {
        let first = !self.inner.borrow().has_anchor;
        if animate && !first {
            self.animate_to(anchor);
        } else {
            self.jump_to(anchor);
        }
    }

    pub fn jump_to(&self, anchor: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.registration = None;
            inner.scroller.abort_animation();
            inner.start = anchor;
            inner.target = anchor;
            inner.progress = 1.0;
            inner.animating = false;
            inner.has_anchor = true;
        }
        notify(&self.inner);
    }

    /// Starts an 800 ms slide toward `anchor`. Restarting mid-flight departs
    /// from the current interpolated position, never snapping.
    pub fn animate_to(&self, anchor: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            let current = inner.current_position();
            inner.start = current;
            inner.target = anchor;
            inner.progress = 0.0;
            inner.animating = true;
            inner.has_anchor = true;
            inner
                .scroller
                .start_scroll(0.0, 1.0, INDICATOR_ANIM_DURATION_MS);
            inner.schedule_frame();
        }
        notify(&self.inner);
    }

    /// Finishes a running animation immediately.
    pub fn complete(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.animating {
                return;
            }
            inner.registration = None;
            inner.scroller.abort_animation();
            inner.progress = 1.0;
            inner.animating = false;
            inner.start = inner.target;
        }
        notify(&self.inner);
    }

    pub fn position(&self) -> f32 {
        self.inner.borrow().current_position()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().animating
    }
}

impl IndicatorInner {
    /// The rendered position: the eased timeline progress is re-shaped by an
    /// inverted accelerate curve, stretching the indicator quickly toward the
    /// new anchor and letting it ease into place.
    fn current_position(&self) -> f32 {
        if !self.animating {
            return self.target;
        }
        let stretch = 1.0 - Easing::Accelerate.transform(1.0 - self.progress);
        self.start + (self.target - self.start) * stretch
    }

    fn schedule_frame(&mut self) {
        let weak = self.weak_self.clone();
        let registration = self.runtime.frame_clock().with_frame_millis(move |now_ms| {
            if let Some(rc) = weak.upgrade() {
                frame(&rc, now_ms);
            }
        });
        self.registration = Some(registration);
    }
}

fn frame(rc: &Rc<RefCell<IndicatorInner>>, now_ms: u64) {
    {
        let mut inner = rc.borrow_mut();
        inner.registration = None;
        if !inner.scroller.compute_scroll_offset(now_ms) {
            return;
        }
        if inner.scroller.is_finished() {
            inner.progress = 1.0;
            inner.animating = false;
            inner.start = inner.target;
        } else {
            inner.progress = inner.scroller.curr();
            inner.schedule_frame();
        }
    }
    notify(rc);
}

/// Invokes the position listener with the cell released, so the listener may
/// call back into the animator.
fn notify(rc: &Rc<RefCell<IndicatorInner>>) {
    let (position, listener) = {
        let mut inner = rc.borrow_mut();
        (inner.current_position(), inner.on_position_changed.take())
    };
    if let Some(mut listener) = listener {
        listener(position);
        let mut inner = rc.borrow_mut();
        if inner.on_position_changed.is_none() {
            inner.on_position_changed = Some(listener);
        }
    }
}

#[cfg(test)]
#[path = "tests/indicator_tests.rs"]
mod tests;
