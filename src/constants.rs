//! Shared crate-wide constants.

/// Distance (in cells) at which a dragged window edge locks onto a
/// viewport or top-boundary anchor.
pub const SNAP_THRESHOLD: i32 = 20;

/// Hard lower bound on window width. Callers may require more via their
/// window constraints, never less.
pub const MIN_WINDOW_WIDTH: u16 = 12;

/// Hard lower bound on window height: border ring plus header row plus
/// one content row.
pub const MIN_WINDOW_HEIGHT: u16 = 4;

/// Width of a minimized dock pill, including its bracket glyphs.
pub const PILL_WIDTH: u16 = 22;

/// Height of a minimized dock pill.
pub const PILL_HEIGHT: u16 = 1;

/// Vertical gap between stacked pills on the same dock side.
pub const PILL_GAP: u16 = 1;

/// Inset of the pill stack from the canvas bottom and side edges.
pub const DOCK_MARGIN: u16 = 1;
