//! Pointer gesture state machine.
//!
//! One continuous pointer-down → move → up interaction drives either a
//! drag or a resize, never both, and never more than one window at a
//! time. The controller is the only path from raw pointer coordinates
//! to committed geometry: it computes candidates through the geometry
//! module and commits them through the registry, so every invariant
//! check happens in exactly one place.

use crate::geometry::{Point, ResizeEdge, Viewport, WindowRect, resize_edge_at, resize_from_edge, snap_to_edges};

use super::decorator::{HeaderAction, WindowDecorator};
use super::{WindowId, WindowPatch, WindowRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Dragging {
        id: WindowId,
        /// Pointer position relative to the window origin at grab time,
        /// so the window doesn't jump under the cursor.
        grab_x: i32,
        grab_y: i32,
    },
    Resizing {
        id: WindowId,
        edge: ResizeEdge,
        start: WindowRect,
        start_col: i32,
        start_row: i32,
    },
}

/// What a pointer press resolved to. Chrome button presses are reported
/// upward instead of acted on: minimize and close belong to the dock
/// manager and the registry, not to the gesture system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerResponse {
    Ignored,
    Focused(WindowId),
    DragStarted(WindowId),
    ResizeStarted(WindowId),
    MinimizePressed(WindowId),
    ClosePressed(WindowId),
}

#[derive(Debug)]
pub struct GestureController {
    gesture: Gesture,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    /// The window owning the live gesture, if any.
    pub fn active_window(&self) -> Option<WindowId> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { id, .. } | Gesture::Resizing { id, .. } => Some(id),
        }
    }

    /// Route a pointer press. A press while a gesture is live is
    /// ignored outright: the active gesture owns the pointer until it
    /// releases.
    pub fn pointer_down(
        &mut self,
        registry: &mut WindowRegistry,
        decorator: &dyn WindowDecorator,
        col: i32,
        row: i32,
    ) -> PointerResponse {
        if !self.is_idle() {
            return PointerResponse::Ignored;
        }
        let Some(id) = registry.top_window_at(col, row) else {
            return PointerResponse::Ignored;
        };
        // Any press on a window raises it before the gesture resolves.
        registry.focus(id);
        let Some(window) = registry.get(id) else {
            return PointerResponse::Ignored;
        };
        let rect = window.rect;

        if let Some(edge) = resize_edge_at(rect, col, row) {
            self.gesture = Gesture::Resizing {
                id,
                edge,
                start: rect,
                start_col: col,
                start_row: row,
            };
            tracing::debug!(window = %id, ?edge, "resize gesture started");
            return PointerResponse::ResizeStarted(id);
        }

        match decorator.hit_test(rect, col, row) {
            HeaderAction::Minimize => PointerResponse::MinimizePressed(id),
            HeaderAction::Close => PointerResponse::ClosePressed(id),
            HeaderAction::Drag => {
                self.gesture = Gesture::Dragging {
                    id,
                    grab_x: col - rect.x,
                    grab_y: row - rect.y,
                };
                tracing::debug!(window = %id, "drag gesture started");
                PointerResponse::DragStarted(id)
            }
            HeaderAction::None => PointerResponse::Focused(id),
        }
    }

    /// Advance the live gesture to a new pointer position.
    ///
    /// Dragging clamps only the top boundary and then snaps: x may
    /// overshoot the viewport transiently, and the snap step is what
    /// pulls an edge flush when the candidate lands near an anchor.
    /// Resizing recomputes from the captured start geometry so rounding
    /// never accumulates across moves. If the window was closed
    /// mid-gesture the update is dropped silently; the registry treats
    /// the commit as a no-op too.
    pub fn pointer_move(
        &mut self,
        registry: &mut WindowRegistry,
        viewport: Viewport,
        col: i32,
        row: i32,
    ) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { id, grab_x, grab_y } => {
                let Some(window) = registry.get(id) else {
                    return;
                };
                let min_y = window.constraints.min_y;
                let size = window.rect.size();
                let candidate = Point::new(col - grab_x, (row - grab_y).max(min_y));
                let snapped = snap_to_edges(candidate, size, viewport, min_y);
                registry.update(id, WindowPatch::position(snapped));
            }
            Gesture::Resizing {
                id,
                edge,
                start,
                start_col,
                start_row,
            } => {
                let Some(window) = registry.get(id) else {
                    return;
                };
                let constraints = window.constraints;
                let resized = resize_from_edge(
                    edge,
                    start,
                    col - start_col,
                    row - start_row,
                    constraints.min_width,
                    constraints.min_height,
                );
                registry.update(id, WindowPatch::rect(resized));
            }
        }
    }

    /// Release the gesture. The last committed geometry is final; no
    /// extra clamp or snap happens here.
    pub fn pointer_up(&mut self) {
        if let Some(id) = self.active_window() {
            tracing::debug!(window = %id, "gesture released");
        }
        self.gesture = Gesture::Idle;
    }

    /// Forcibly end the gesture without a pointer release. Called on
    /// terminal focus loss, where the matching pointer-up may never
    /// arrive.
    pub fn cancel(&mut self) {
        if let Some(id) = self.active_window() {
            tracing::debug!(window = %id, "gesture cancelled");
            self.gesture = Gesture::Idle;
        }
    }
}
