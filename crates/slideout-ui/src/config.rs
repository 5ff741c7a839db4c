use slideout_foundation::DEFAULT_BEZEL_SIZE;

use crate::position::Position;

/// Default cap for open/close animations in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 600;

/// Which pointer-down locations may begin a drag while the drawer is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TouchMode {
    /// Drags never start from the closed state; programmatic open only.
    None,
    /// Drags start from a strip along the drawer edge.
    #[default]
    Bezel,
    /// Drags start anywhere, yielding to scrollable content underneath.
    Fullscreen,
}

/// Whether the drawer is user-draggable or permanently pinned open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawerKind {
    #[default]
    Draggable,
    /// Always open, ignores pointer input. Used for split layouts on large
    /// screens; defaults to a narrower menu than the draggable kind.
    Static,
}

/// Construction-time drawer settings. Everything except `position` and `kind`
/// can also be changed on a live [`crate::MenuDrawer`].
#[derive(Clone, Copy, Debug)]
pub struct DrawerConfig {
    pub position: Position,
    pub kind: DrawerKind,
    pub touch_mode: TouchMode,
    /// Width of the edge strip that accepts drags in [`TouchMode::Bezel`].
    pub touch_bezel_size: f32,
    pub max_animation_duration_ms: u64,
    /// Parallax-shift the menu panel while the drawer moves.
    pub offset_menu_enabled: bool,
    /// Explicit menu size in pixels. `None` derives the size from the
    /// container when it becomes known.
    pub menu_size: Option<i32>,
}

impl DrawerConfig {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            kind: DrawerKind::default(),
            touch_mode: TouchMode::default(),
            touch_bezel_size: DEFAULT_BEZEL_SIZE,
            max_animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            offset_menu_enabled: true,
            menu_size: None,
        }
    }

    pub fn kind(mut self, kind: DrawerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn touch_mode(mut self, touch_mode: TouchMode) -> Self {
        self.touch_mode = touch_mode;
        self
    }

    pub fn touch_bezel_size(mut self, size: f32) -> Self {
        self.touch_bezel_size = size;
        self
    }

    pub fn max_animation_duration(mut self, duration_ms: u64) -> Self {
        self.max_animation_duration_ms = duration_ms;
        self
    }

    pub fn offset_menu_enabled(mut self, enabled: bool) -> Self {
        self.offset_menu_enabled = enabled;
        self
    }

    pub fn menu_size(mut self, size: i32) -> Self {
        self.menu_size = Some(size);
        self
    }
}
