use std::rc::Rc;

use slideout_foundation::{Point, Rect};

/// A lightweight mirror of the host's content view tree, used in fullscreen
/// touch mode to decide whether a horizontal or vertical drag belongs to a
/// scrollable widget underneath the pointer instead of the drawer.
///
/// Bounds are expressed in the parent's coordinate space; `translation` is
/// added on top (a scrolled list reports its scroll offset here).
#[derive(Clone, Default)]
pub struct ContentNode {
    bounds: Rect,
    translation: Point,
    can_scroll: Option<Rc<dyn Fn(f32) -> bool>>,
    children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            translation: Point::ZERO,
            can_scroll: None,
            children: Vec::new(),
        }
    }

    pub fn translation(mut self, translation: Point) -> Self {
        self.translation = translation;
        self
    }

    /// Marks this node scrollable along the drawer's drag axis. The closure
    /// receives the pointer delta and reports whether the widget can consume
    /// it (e.g. a list not yet at the relevant end).
    pub fn scrollable(mut self, can_scroll: impl Fn(f32) -> bool + 'static) -> Self {
        self.can_scroll = Some(Rc::new(can_scroll));
        self
    }

    pub fn child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Whether any node under `point` can consume a drag of `delta` pixels.
    /// Children are visited in reverse declaration order so the topmost,
    /// deepest node wins.
    pub fn can_consume(&self, delta: f32, point: Point) -> bool {
        let frame = self.bounds.translate(self.translation.x, self.translation.y);
        if !frame.contains(point) {
            return false;
        }
        let local = Point::new(point.x - frame.x, point.y - frame.y);
        for child in self.children.iter().rev() {
            if child.can_consume(delta, local) {
                return true;
            }
        }
        match &self.can_scroll {
            Some(can_scroll) => can_scroll(delta),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
