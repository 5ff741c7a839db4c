//! The drawer engine proper: offset ownership, the drag/animation state
//! machine, pointer routing and the peek hint.

use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

use slideout_animation::{Easing, PositionScroller};
use slideout_core::{FrameCallbackRegistration, RuntimeHandle};
use slideout_foundation::{
    Point, PointerEvent, PointerPhase, Size, VelocityTracker, MAX_FLING_VELOCITY, TOUCH_SLOP,
};

use crate::config::{DrawerConfig, DrawerKind, TouchMode};
use crate::content::ContentNode;
use crate::error::DrawerError;
use crate::position::{AxisPolicy, DrawerFrames};

/// Flings are scaled so that a release at `menu_size` px/s takes 4 s before
/// the cap kicks in.
const FLING_DURATION_FACTOR_MS: f32 = 4000.0;

/// Distance-based settles take up to 600 ms for a full-width travel.
const DISTANCE_DURATION_FACTOR_MS: f32 = 600.0;

/// The peek excursion runs out and back over this long.
const PEEK_DURATION_MS: u64 = 5000;

/// Delay between repeated peeks when none is given.
const DEFAULT_PEEK_DELAY_MS: u64 = 5000;

/// Menu fraction of the container when no explicit size is set.
const DRAGGABLE_MENU_FRACTION: f32 = 0.8;
const STATIC_MENU_FRACTION: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Closing,
    Dragging,
    Opening,
    Open,
}

/// The part of the drawer worth persisting across process death.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DrawerSavedState {
    pub menu_visible: bool,
}

#[derive(Default)]
struct Listeners {
    offset_changed: Option<Box<dyn FnMut(i32)>>,
    state_changed: Option<Box<dyn FnMut(DrawerState, DrawerState)>>,
    animation_hint: Option<Box<dyn FnMut(bool)>>,
}

/// Pending listener calls, queued while the inner cell is borrowed and
/// flushed once the borrow ends. Keeps listeners free to call back into the
/// drawer.
enum Notice {
    Offset(i32),
    State(DrawerState, DrawerState),
    Hint(bool),
}

struct DragSession {
    initial: Point,
    last: Point,
    /// The down landed somewhere this drawer cares about.
    allowed: bool,
    /// Slop was crossed along the drag axis and the drawer owns the gesture.
    dragging: bool,
    tracker: VelocityTracker,
}

struct DrawerInner {
    weak_self: Weak<RefCell<DrawerInner>>,
    runtime: RuntimeHandle,
    config: DrawerConfig,
    policy: AxisPolicy,

    state: DrawerState,
    offset: f32,
    last_reported_offset: i32,
    menu_size: i32,
    menu_size_set: bool,
    menu_visible: bool,
    container: Size,
    touch_size: f32,
    pending_restore_open: bool,

    scroller: PositionScroller,
    peek_scroller: PositionScroller,
    position_registration: Option<FrameCallbackRegistration>,
    peek_registration: Option<FrameCallbackRegistration>,
    peek_repeat_delay_ms: Option<u64>,
    hint_active: bool,

    drag: Option<DragSession>,
    content_root: Option<ContentNode>,

    listeners: Rc<RefCell<Listeners>>,
    notices: Vec<Notice>,
}

/// A sliding navigation drawer attached to one container edge.
///
/// Cheap to clone; all clones share one drawer. Pointer events go through
/// [`MenuDrawer::on_pointer_event`]; everything else is the programmatic API.
#[derive(Clone)]
pub struct MenuDrawer {
    inner: Rc<RefCell<DrawerInner>>,
}

/// Runs `f` against the inner cell, then flushes queued listener calls with
/// the borrow released.
fn with_inner<R>(rc: &Rc<RefCell<DrawerInner>>, f: impl FnOnce(&mut DrawerInner) -> R) -> R {
    let (result, listeners, notices) = {
        let mut inner = rc.borrow_mut();
        let result = f(&mut inner);
        let notices = mem::take(&mut inner.notices);
        (result, Rc::clone(&inner.listeners), notices)
    };
    // Each listener is taken out of the cell for the duration of its call, so
    // a listener that re-enters the drawer never sees the cell borrowed.
    for notice in notices {
        match notice {
            Notice::Offset(offset) => {
                let taken = listeners.borrow_mut().offset_changed.take();
                if let Some(mut listener) = taken {
                    listener(offset);
                    let mut slot = listeners.borrow_mut();
                    if slot.offset_changed.is_none() {
                        slot.offset_changed = Some(listener);
                    }
                }
            }
            Notice::State(old, new) => {
                let taken = listeners.borrow_mut().state_changed.take();
                if let Some(mut listener) = taken {
                    listener(old, new);
                    let mut slot = listeners.borrow_mut();
                    if slot.state_changed.is_none() {
                        slot.state_changed = Some(listener);
                    }
                }
            }
            Notice::Hint(active) => {
                let taken = listeners.borrow_mut().animation_hint.take();
                if let Some(mut listener) = taken {
                    listener(active);
                    let mut slot = listeners.borrow_mut();
                    if slot.animation_hint.is_none() {
                        slot.animation_hint = Some(listener);
                    }
                }
            }
        }
    }
    result
}

impl MenuDrawer {
    pub fn new(config: DrawerConfig, runtime: RuntimeHandle) -> Self {
        let policy = AxisPolicy::new(config.position);
        let inner = Rc::new(RefCell::new(DrawerInner {
            weak_self: Weak::new(),
            runtime,
            policy,
            state: DrawerState::Closed,
            offset: 0.0,
            last_reported_offset: 0,
            menu_size: config.menu_size.unwrap_or(0),
            menu_size_set: config.menu_size.is_some(),
            menu_visible: false,
            container: Size::ZERO,
            touch_size: config.touch_bezel_size,
            pending_restore_open: false,
            scroller: PositionScroller::new(Easing::Smooth),
            peek_scroller: PositionScroller::new(Easing::Peek),
            position_registration: None,
            peek_registration: None,
            peek_repeat_delay_ms: None,
            hint_active: false,
            drag: None,
            content_root: None,
            listeners: Rc::new(RefCell::new(Listeners::default())),
            notices: Vec::new(),
            config,
        }));
        inner.borrow_mut().weak_self = Rc::downgrade(&inner);
        Self { inner }
    }

    pub fn drawer_state(&self) -> DrawerState {
        self.inner.borrow().state
    }

    /// Current content offset in pixels, signed by edge convention.
    pub fn offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    pub fn is_menu_visible(&self) -> bool {
        self.inner.borrow().menu_visible
    }

    pub fn menu_size(&self) -> i32 {
        self.inner.borrow().menu_size
    }

    pub fn touch_mode(&self) -> TouchMode {
        self.inner.borrow().config.touch_mode
    }

    pub fn set_on_offset_changed(&self, listener: impl FnMut(i32) + 'static) {
        self.inner.borrow().listeners.borrow_mut().offset_changed = Some(Box::new(listener));
    }

    pub fn set_on_drawer_state_changed(
        &self,
        listener: impl FnMut(DrawerState, DrawerState) + 'static,
    ) {
        self.inner.borrow().listeners.borrow_mut().state_changed = Some(Box::new(listener));
    }

    /// Fires with `true` when an animation starts and `false` when it
    /// settles, so the host can promote panels to hardware layers.
    pub fn set_on_animation_hint(&self, listener: impl FnMut(bool) + 'static) {
        self.inner.borrow().listeners.borrow_mut().animation_hint = Some(Box::new(listener));
    }

    /// Installs the content hierarchy consulted in fullscreen touch mode.
    pub fn set_content_hierarchy(&self, root: Option<ContentNode>) {
        self.inner.borrow_mut().content_root = root;
    }

    pub fn set_touch_mode(&self, touch_mode: TouchMode) {
        with_inner(&self.inner, |inner| {
            inner.config.touch_mode = touch_mode;
            inner.update_touch_size();
        });
    }

    pub fn set_touch_bezel_size(&self, size: f32) {
        with_inner(&self.inner, |inner| {
            inner.config.touch_bezel_size = size;
            inner.update_touch_size();
        });
    }

    pub fn set_max_animation_duration(&self, duration_ms: u64) {
        self.inner.borrow_mut().config.max_animation_duration_ms = duration_ms;
    }

    pub fn set_offset_menu_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().config.offset_menu_enabled = enabled;
    }

    pub fn offset_menu_enabled(&self) -> bool {
        self.inner.borrow().config.offset_menu_enabled
    }

    pub fn set_menu_size(&self, size: i32) {
        with_inner(&self.inner, |inner| {
            inner.menu_size = size;
            inner.menu_size_set = true;
            if matches!(inner.state, DrawerState::Open | DrawerState::Opening) {
                let open = inner.open_rest_offset();
                inner.set_offset(open);
            }
        });
    }

    /// Reports the host container size. Derives the menu size from it unless
    /// one was set explicitly, and applies any pending state restoration.
    pub fn set_container_size(&self, size: Size) {
        with_inner(&self.inner, |inner| {
            inner.container = size;
            inner.update_touch_size();
            if !inner.menu_size_set {
                let fraction = match inner.config.kind {
                    DrawerKind::Draggable => DRAGGABLE_MENU_FRACTION,
                    DrawerKind::Static => STATIC_MENU_FRACTION,
                };
                inner.menu_size = (inner.policy.axis_extent(size) * fraction).round() as i32;
            }
            match inner.config.kind {
                DrawerKind::Static => {
                    let open = inner.open_rest_offset();
                    inner.set_offset(open);
                    inner.set_drawer_state(DrawerState::Open);
                }
                DrawerKind::Draggable => {
                    if inner.pending_restore_open {
                        inner.pending_restore_open = false;
                        let open = inner.open_rest_offset();
                        inner.animate_offset_to(open, 0.0, false);
                    } else if inner.state == DrawerState::Open {
                        // Keep a fully open drawer fully open across resizes.
                        let open = inner.open_rest_offset();
                        inner.set_offset(open);
                    }
                }
            }
        });
    }

    pub fn open_menu(&self, animate: bool) {
        with_inner(&self.inner, |inner| {
            if inner.config.kind == DrawerKind::Static {
                return;
            }
            let open = inner.open_rest_offset();
            inner.animate_offset_to(open, 0.0, animate);
        });
    }

    pub fn close_menu(&self, animate: bool) {
        with_inner(&self.inner, |inner| {
            if inner.config.kind == DrawerKind::Static {
                return;
            }
            inner.animate_offset_to(0.0, 0.0, animate);
        });
    }

    pub fn toggle_menu(&self, animate: bool) {
        with_inner(&self.inner, |inner| {
            if inner.config.kind == DrawerKind::Static {
                return;
            }
            match inner.state {
                DrawerState::Open | DrawerState::Opening => {
                    inner.animate_offset_to(0.0, 0.0, animate);
                }
                _ => {
                    let open = inner.open_rest_offset();
                    inner.animate_offset_to(open, 0.0, animate);
                }
            }
        });
    }

    /// Nudges the drawer a third of the way open and back, repeating every
    /// five seconds, to hint that it exists.
    pub fn peek_drawer(&self) {
        // Defaults cannot fail validation.
        let _ = self.peek_drawer_with(0, DEFAULT_PEEK_DELAY_MS as i64);
    }

    /// Peeks after `start_delay_ms`, then again every `delay_ms`. A repeat
    /// delay of zero peeks once.
    pub fn peek_drawer_with(&self, start_delay_ms: i64, delay_ms: i64) -> Result<(), DrawerError> {
        if start_delay_ms < 0 {
            log::warn!("rejecting peek with start delay {start_delay_ms}");
            return Err(DrawerError::NegativeStartDelay(start_delay_ms));
        }
        if delay_ms < 0 {
            log::warn!("rejecting peek with repeat delay {delay_ms}");
            return Err(DrawerError::NegativeDelay(delay_ms));
        }
        with_inner(&self.inner, |inner| {
            if inner.config.kind == DrawerKind::Static {
                return;
            }
            inner.peek_repeat_delay_ms = if delay_ms > 0 {
                Some(delay_ms as u64)
            } else {
                None
            };
            inner.arm_peek(None, start_delay_ms as u64);
        });
        Ok(())
    }

    /// Stops the peek schedule, including pending repeats.
    pub fn end_peek(&self) {
        with_inner(&self.inner, |inner| inner.end_peek_inner());
    }

    /// Freezes any running open/close animation at its current offset.
    pub fn stop_animation(&self) {
        with_inner(&self.inner, |inner| inner.stop_animation_inner());
    }

    /// Feeds one pointer event. Returns true when the drawer consumed it.
    pub fn on_pointer_event(&self, event: PointerEvent) -> bool {
        with_inner(&self.inner, |inner| {
            if inner.config.kind == DrawerKind::Static {
                return false;
            }
            match event.phase {
                PointerPhase::Down => inner.on_down(event),
                PointerPhase::Move => inner.on_move(event),
                PointerPhase::Up => inner.on_up(event),
                PointerPhase::Cancel => inner.on_cancel(),
            }
        })
    }

    pub fn save_state(&self) -> DrawerSavedState {
        DrawerSavedState {
            menu_visible: self.inner.borrow().menu_visible,
        }
    }

    /// Re-applies persisted state. An open drawer is restored without
    /// animation; when the menu size is not yet known the restore is deferred
    /// to the first [`MenuDrawer::set_container_size`].
    pub fn restore_state(&self, saved: DrawerSavedState) {
        with_inner(&self.inner, |inner| {
            if inner.config.kind == DrawerKind::Static {
                return;
            }
            if saved.menu_visible {
                if inner.menu_size > 0 {
                    let open = inner.open_rest_offset();
                    inner.animate_offset_to(open, 0.0, false);
                } else {
                    inner.pending_restore_open = true;
                }
            } else {
                inner.pending_restore_open = false;
                if inner.menu_visible {
                    inner.animate_offset_to(0.0, 0.0, false);
                }
            }
        });
    }

    /// Alpha for the fade overlay drawn across the menu, fading out as the
    /// drawer opens.
    pub fn overlay_alpha(&self, max_alpha: f32) -> f32 {
        let inner = self.inner.borrow();
        if inner.menu_size <= 0 {
            return max_alpha;
        }
        let open_ratio = (inner.offset.abs() / inner.menu_size as f32).clamp(0.0, 1.0);
        max_alpha * (1.0 - open_ratio)
    }

    /// Panel frames for the current offset.
    pub fn frames(&self) -> DrawerFrames {
        let inner = self.inner.borrow();
        inner.policy.layout(
            inner.offset,
            inner.menu_size,
            inner.container,
            inner.config.offset_menu_enabled,
        )
    }
}

impl DrawerInner {
    fn open_rest_offset(&self) -> f32 {
        self.policy.open_offset(self.menu_size)
    }

    fn update_touch_size(&mut self) {
        self.touch_size = match self.config.touch_mode {
            TouchMode::Fullscreen => self.policy.axis_extent(self.container),
            TouchMode::Bezel | TouchMode::None => self.config.touch_bezel_size,
        };
    }

    fn set_drawer_state(&mut self, new: DrawerState) {
        if new != self.state {
            let old = self.state;
            self.state = new;
            log::debug!("drawer state {:?} -> {:?}", old, new);
            self.notices.push(Notice::State(old, new));
        }
    }

    /// Clamps and stores the offset; reports it only when the value rounds
    /// to a different integer than last reported.
    fn set_offset(&mut self, value: f32) {
        let (min, max) = self.policy.offset_range(self.menu_size);
        let clamped = value.clamp(min, max);
        self.offset = clamped;
        self.menu_visible = clamped != 0.0;
        let rounded = clamped.round() as i32;
        if rounded != self.last_reported_offset {
            self.last_reported_offset = rounded;
            self.notices.push(Notice::Offset(rounded));
        }
    }

    fn set_hint(&mut self, active: bool) {
        if active != self.hint_active {
            self.hint_active = active;
            self.notices.push(Notice::Hint(active));
        }
    }

    /// Settles the drawer toward `position`. A release `velocity` of zero
    /// means the duration scales with remaining distance instead.
    fn animate_offset_to(&mut self, position: f32, velocity: f32, animate: bool) {
        self.end_peek_inner();
        self.position_registration = None;
        self.scroller.abort_animation();

        let start = self.offset;
        let delta = position - start;
        if delta == 0.0 || !animate {
            self.set_offset(position);
            self.set_drawer_state(if position == 0.0 {
                DrawerState::Closed
            } else {
                DrawerState::Open
            });
            self.set_hint(false);
            return;
        }

        self.set_drawer_state(if position == 0.0 {
            DrawerState::Closing
        } else {
            DrawerState::Opening
        });

        let duration_ms = if velocity != 0.0 {
            (FLING_DURATION_FACTOR_MS * (delta / velocity).abs()).round() as u64
        } else if self.menu_size > 0 {
            (DISTANCE_DURATION_FACTOR_MS * delta.abs() / self.menu_size as f32).round() as u64
        } else {
            0
        };
        let duration_ms = duration_ms.min(self.config.max_animation_duration_ms);

        self.scroller.start_scroll(start, delta, duration_ms);
        self.set_hint(true);
        self.schedule_position_frame();
    }

    fn schedule_position_frame(&mut self) {
        let weak = self.weak_self.clone();
        let registration = self.runtime.frame_clock().with_frame_millis(move |now_ms| {
            if let Some(rc) = weak.upgrade() {
                position_frame(&rc, now_ms);
            }
        });
        self.position_registration = Some(registration);
    }

    fn stop_animation_inner(&mut self) {
        self.position_registration = None;
        self.scroller.abort_animation();
        self.set_hint(false);
    }

    /// Registers a frame callback that fires the peek once the deadline
    /// passes. The deadline is anchored at the first frame so a stalled frame
    /// loop does not eat the start delay.
    fn arm_peek(&mut self, deadline_ms: Option<u64>, delay_ms: u64) {
        let weak = self.weak_self.clone();
        let registration = self.runtime.frame_clock().with_frame_millis(move |now_ms| {
            if let Some(rc) = weak.upgrade() {
                peek_arm_frame(&rc, now_ms, deadline_ms, delay_ms);
            }
        });
        self.peek_registration = Some(registration);
    }

    fn start_peek(&mut self) {
        if self.state != DrawerState::Closed {
            log::debug!("skipping peek, drawer is {:?}", self.state);
            return;
        }
        let excursion = self.open_rest_offset() / 3.0;
        self.peek_scroller.start_scroll(0.0, excursion, PEEK_DURATION_MS);
        self.set_hint(true);
        self.schedule_peek_frame();
    }

    fn schedule_peek_frame(&mut self) {
        let weak = self.weak_self.clone();
        let registration = self.runtime.frame_clock().with_frame_millis(move |now_ms| {
            if let Some(rc) = weak.upgrade() {
                peek_frame(&rc, now_ms);
            }
        });
        self.peek_registration = Some(registration);
    }

    fn end_peek_inner(&mut self) {
        self.peek_registration = None;
        self.peek_repeat_delay_ms = None;
        self.peek_scroller.abort_animation();
        self.set_hint(false);
    }

    fn on_down(&mut self, event: PointerEvent) -> bool {
        let allowed = (!self.menu_visible
            && self.config.touch_mode != TouchMode::None
            && self
                .policy
                .edge_contains(event.position, self.container, self.touch_size))
            || (self.menu_visible
                && self
                    .policy
                    .is_content_point(event.position, self.offset, self.container));

        let mut tracker = VelocityTracker::new();
        tracker.add_movement(event.time_ms, self.policy.axis_value(event.position));
        self.drag = Some(DragSession {
            initial: event.position,
            last: event.position,
            allowed,
            dragging: false,
            tracker,
        });

        if allowed {
            self.stop_animation_inner();
            self.end_peek_inner();
        }
        allowed
    }

    fn on_move(&mut self, event: PointerEvent) -> bool {
        let Some(mut session) = self.drag.take() else {
            return false;
        };
        session
            .tracker
            .add_movement(event.time_ms, self.policy.axis_value(event.position));

        let mut handled = false;
        if session.dragging {
            let delta =
                self.policy.axis_value(event.position) - self.policy.axis_value(session.last);
            session.last = event.position;
            let next = self.offset + delta;
            self.set_offset(next);
            handled = true;
        } else if session.allowed {
            let axis_delta =
                self.policy.axis_value(event.position) - self.policy.axis_value(session.initial);
            let cross_delta =
                self.policy.cross_value(event.position) - self.policy.cross_value(session.initial);
            if cross_delta.abs() > TOUCH_SLOP && cross_delta.abs() > axis_delta.abs() {
                // The gesture belongs to the content underneath.
                session.allowed = false;
            } else if axis_delta.abs() > TOUCH_SLOP && axis_delta.abs() > cross_delta.abs() {
                let yields = self.config.touch_mode == TouchMode::Fullscreen
                    && self.content_can_scroll(axis_delta, event.position);
                if !yields && self.move_allows_drag(axis_delta, session.initial) {
                    self.start_drag(&mut session, event.position, axis_delta);
                    handled = true;
                }
            }
        }

        self.drag = Some(session);
        handled
    }

    fn move_allows_drag(&self, axis_delta: f32, initial: Point) -> bool {
        if self.menu_visible {
            // An open drawer is draggable in both directions.
            return true;
        }
        axis_delta * self.policy.open_sign() > 0.0
            && self
                .policy
                .edge_contains(initial, self.container, self.touch_size)
    }

    fn content_can_scroll(&self, delta: f32, point: Point) -> bool {
        match &self.content_root {
            Some(root) => root.can_consume(delta, point),
            None => false,
        }
    }

    fn start_drag(&mut self, session: &mut DragSession, position: Point, axis_delta: f32) {
        self.stop_animation_inner();
        self.end_peek_inner();
        self.set_drawer_state(DrawerState::Dragging);
        session.dragging = true;

        // Re-anchor one slop from the initial point so confirming the drag
        // does not jump the content by the slop distance.
        let slop = if axis_delta > 0.0 { TOUCH_SLOP } else { -TOUCH_SLOP };
        session.last = self.policy.shift_along(session.initial, slop);
        let delta = self.policy.axis_value(position) - self.policy.axis_value(session.last);
        session.last = position;
        let next = self.offset + delta;
        self.set_offset(next);
    }

    fn on_up(&mut self, event: PointerEvent) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };

        if session.dragging {
            let velocity = session.tracker.velocity_capped(MAX_FLING_VELOCITY);
            if velocity != 0.0 {
                let target = if self.policy.velocity_opens(velocity) {
                    self.open_rest_offset()
                } else {
                    0.0
                };
                self.animate_offset_to(target, velocity, true);
            } else {
                self.settle_by_distance();
            }
            return true;
        }

        if !session.allowed {
            return false;
        }

        // An interception that froze an animation mid-flight settles by the
        // half-way rule on release even without a confirmed drag.
        let at_rest = self.offset == 0.0
            || (self.offset - self.open_rest_offset()).abs() < 0.5;
        if !at_rest {
            self.settle_by_distance();
            return true;
        }

        if self.menu_visible
            && self
                .policy
                .is_content_point(event.position, self.offset, self.container)
        {
            self.animate_offset_to(0.0, 0.0, true);
            return true;
        }
        false
    }

    fn on_cancel(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        if session.dragging {
            self.settle_by_distance();
            return true;
        }
        if !session.allowed {
            return false;
        }
        // A cancelled interception that froze an animation mid-flight must
        // still settle, same as a tap-release.
        let at_rest =
            self.offset == 0.0 || (self.offset - self.open_rest_offset()).abs() < 0.5;
        if !at_rest {
            self.settle_by_distance();
            return true;
        }
        false
    }

    /// Strictly past half-way opens; exactly half-way closes.
    fn settle_by_distance(&mut self) {
        let target = if self.offset.abs() > self.menu_size as f32 / 2.0 {
            self.open_rest_offset()
        } else {
            0.0
        };
        self.animate_offset_to(target, 0.0, true);
    }
}

fn position_frame(rc: &Rc<RefCell<DrawerInner>>, now_ms: u64) {
    with_inner(rc, |inner| {
        inner.position_registration = None;
        if !inner.scroller.compute_scroll_offset(now_ms) {
            return;
        }
        if inner.scroller.is_finished() {
            let final_value = inner.scroller.final_value();
            inner.set_offset(final_value);
            inner.set_drawer_state(if final_value.round() as i32 == 0 {
                DrawerState::Closed
            } else {
                DrawerState::Open
            });
            inner.set_hint(false);
        } else {
            let value = inner.scroller.curr();
            inner.set_offset(value);
            inner.schedule_position_frame();
        }
    });
}

fn peek_arm_frame(rc: &Rc<RefCell<DrawerInner>>, now_ms: u64, deadline_ms: Option<u64>, delay_ms: u64) {
    with_inner(rc, |inner| {
        inner.peek_registration = None;
        let deadline = deadline_ms.unwrap_or(now_ms + delay_ms);
        if now_ms >= deadline {
            inner.start_peek();
        } else {
            inner.arm_peek(Some(deadline), delay_ms);
        }
    });
}

fn peek_frame(rc: &Rc<RefCell<DrawerInner>>, now_ms: u64) {
    with_inner(rc, |inner| {
        inner.peek_registration = None;
        if !inner.peek_scroller.compute_scroll_offset(now_ms) {
            return;
        }
        if inner.peek_scroller.is_finished() {
            inner.set_offset(0.0);
            inner.set_hint(false);
            if let Some(delay) = inner.peek_repeat_delay_ms {
                inner.arm_peek(Some(now_ms + delay), delay);
            }
        } else {
            let value = inner.peek_scroller.curr();
            inner.set_offset(value);
            inner.schedule_peek_frame();
        }
    });
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
