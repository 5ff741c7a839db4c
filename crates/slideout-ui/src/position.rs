//! Edge-dependent geometry. All drawer math is written once against an
//! abstract drag axis; [`AxisPolicy`] maps it to the concrete edge.

use slideout_foundation::{Point, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The screen edge the menu panel is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Left,
    Right,
    Top,
    Bottom,
}

/// Output of [`AxisPolicy::layout`]: where the renderer should place the two
/// panels for the current offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerFrames {
    pub menu: Rect,
    pub content: Rect,
}

/// Resolves axis, sign and hit-test questions for one drawer edge.
///
/// The offset convention follows the content translation: left/top drawers
/// move the content in the positive direction, so their offsets live in
/// `[0, menu_size]`; right/bottom drawers use `[-menu_size, 0]`. Zero is
/// always fully closed.
#[derive(Clone, Copy, Debug)]
pub struct AxisPolicy {
    position: Position,
}

impl AxisPolicy {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn axis(&self) -> Axis {
        match self.position {
            Position::Left | Position::Right => Axis::Horizontal,
            Position::Top | Position::Bottom => Axis::Vertical,
        }
    }

    /// Sign of the content translation that opens the drawer.
    pub fn open_sign(&self) -> f32 {
        match self.position {
            Position::Left | Position::Top => 1.0,
            Position::Right | Position::Bottom => -1.0,
        }
    }

    /// The offset at which the drawer rests fully open.
    pub fn open_offset(&self, menu_size: i32) -> f32 {
        self.open_sign() * menu_size as f32
    }

    /// Inclusive clamp range for the offset.
    pub fn offset_range(&self, menu_size: i32) -> (f32, f32) {
        let open = self.open_offset(menu_size);
        if open >= 0.0 {
            (0.0, open)
        } else {
            (open, 0.0)
        }
    }

    /// The point's coordinate along the drag axis.
    pub fn axis_value(&self, point: Point) -> f32 {
        match self.axis() {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// The point's coordinate across the drag axis.
    pub fn cross_value(&self, point: Point) -> f32 {
        match self.axis() {
            Axis::Horizontal => point.y,
            Axis::Vertical => point.x,
        }
    }

    /// Container extent along the drag axis.
    pub fn axis_extent(&self, size: Size) -> f32 {
        match self.axis() {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// `point` shifted by `delta` along the drag axis.
    pub fn shift_along(&self, point: Point, delta: f32) -> Point {
        match self.axis() {
            Axis::Horizontal => Point::new(point.x + delta, point.y),
            Axis::Vertical => Point::new(point.x, point.y + delta),
        }
    }

    /// Whether `point` lies inside the drag-eligible strip at the drawer edge.
    pub fn edge_contains(&self, point: Point, container: Size, touch_size: f32) -> bool {
        match self.position {
            Position::Left => point.x <= touch_size,
            Position::Right => point.x >= container.width - touch_size,
            Position::Top => point.y <= touch_size,
            Position::Bottom => point.y >= container.height - touch_size,
        }
    }

    /// Whether `point` falls on the translated content panel rather than on
    /// the exposed menu.
    pub fn is_content_point(&self, point: Point, offset: f32, container: Size) -> bool {
        match self.position {
            Position::Left => point.x > offset,
            Position::Right => point.x < container.width + offset,
            Position::Top => point.y > offset,
            Position::Bottom => point.y < container.height + offset,
        }
    }

    /// Release velocity pointing toward the open rest position?
    pub fn velocity_opens(&self, velocity: f32) -> bool {
        velocity * self.open_sign() > 0.0
    }

    /// Computes panel frames for the current offset. With `offset_menu` the
    /// menu panel is parallax-shifted a third of its remaining travel toward
    /// the edge, catching up with the content as the drawer opens.
    pub fn layout(
        &self,
        offset: f32,
        menu_size: i32,
        container: Size,
        offset_menu: bool,
    ) -> DrawerFrames {
        let menu_extent = menu_size as f32;
        let content = match self.axis() {
            Axis::Horizontal => Rect::from_size(container).translate(offset, 0.0),
            Axis::Vertical => Rect::from_size(container).translate(0.0, offset),
        };

        let parallax = if offset_menu {
            -self.open_sign() * (menu_extent - offset.abs()) / 3.0
        } else {
            0.0
        };
        let menu = match self.position {
            Position::Left => Rect::new(parallax, 0.0, menu_extent, container.height),
            Position::Right => Rect::new(
                container.width - menu_extent + parallax,
                0.0,
                menu_extent,
                container.height,
            ),
            Position::Top => Rect::new(0.0, parallax, container.width, menu_extent),
            Position::Bottom => Rect::new(
                0.0,
                container.height - menu_extent + parallax,
                container.width,
                menu_extent,
            ),
        };

        DrawerFrames { menu, content }
    }
}

#[cfg(test)]
#[path = "tests/policy_tests.rs"]
mod tests;
