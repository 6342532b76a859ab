pub mod decorator;
pub mod dock;
pub mod gesture;
mod registry;

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::geometry::WindowRect;

pub use registry::{RegistryError, WindowPatch, WindowRegistry};

/// Stable handle for one floating panel. Ids are assigned by the
/// registry in creation order and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u32);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Which dock edge a window's minimized pill stacks on. Fixed at
/// creation; derived from the window's semantic role, not its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockSide {
    Left,
    Right,
}

/// Per-window geometry floor plus the dynamic top boundary. `min_y` is
/// owned by the canvas adapter and rewritten on every re-clamp pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub min_width: u16,
    pub min_height: u16,
    pub min_y: i32,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            min_y: 0,
        }
    }
}

impl Constraints {
    pub fn new(min_width: u16, min_height: u16) -> Self {
        Self {
            min_width: min_width.max(MIN_WINDOW_WIDTH),
            min_height: min_height.max(MIN_WINDOW_HEIGHT),
            min_y: 0,
        }
    }

    pub fn with_min_y(mut self, min_y: i32) -> Self {
        self.min_y = min_y;
        self
    }
}

/// Everything an owning view supplies when it mounts a window. Content
/// stays with the caller; the registry only tracks metadata.
#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub title: String,
    pub rect: WindowRect,
    pub constraints: Constraints,
    pub dock_side: DockSide,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, rect: WindowRect) -> Self {
        Self {
            title: title.into(),
            rect,
            constraints: Constraints::default(),
            dock_side: DockSide::Left,
        }
    }

    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn dock_side(mut self, side: DockSide) -> Self {
        self.dock_side = side;
        self
    }
}

/// One floating panel as the registry tracks it.
#[derive(Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
    pub dock_side: DockSide,
    pub constraints: Constraints,
    /// Geometry at the moment of the last minimize, so restore can put
    /// the window back without losing layout.
    pub restore_rect: Option<WindowRect>,
}

impl Window {
    fn new(id: WindowId, z_index: u32, spec: WindowSpec) -> Self {
        Self {
            id,
            title: spec.title,
            rect: spec.rect,
            z_index,
            minimized: false,
            dock_side: spec.dock_side,
            constraints: spec.constraints,
            restore_rect: None,
        }
    }
}
