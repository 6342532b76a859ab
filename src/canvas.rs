//! Viewport and top-boundary tracking.
//!
//! The canvas owns the coordinate space every window is constrained
//! against: the terminal-sized viewport and the dynamic top boundary
//! below the collapsible header panel. Whenever either changes, every
//! non-minimized window is re-clamped so none is left straddling the
//! new boundary or hanging off-screen. The pass is a strict clamp;
//! snapping is a gesture-time affordance only.

use crate::geometry::{Viewport, clamp_position};
use crate::window::{WindowPatch, WindowRegistry};

/// The collapsible header/summary region above the canvas. Its height
/// is what moves the top boundary.
#[derive(Debug, Clone, Copy)]
pub struct HeaderPanel {
    expanded: bool,
    collapsed_height: u16,
    expanded_height: u16,
}

impl HeaderPanel {
    pub fn new(collapsed_height: u16, expanded_height: u16) -> Self {
        Self {
            expanded: true,
            collapsed_height,
            expanded_height,
        }
    }

    pub fn height(&self) -> u16 {
        if self.expanded {
            self.expanded_height
        } else {
            self.collapsed_height
        }
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    viewport: Viewport,
    header: HeaderPanel,
}

impl Canvas {
    pub fn new(viewport: Viewport, header: HeaderPanel) -> Self {
        Self { viewport, header }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn header(&self) -> HeaderPanel {
        self.header
    }

    /// The top boundary: no window may rise above the header panel.
    pub fn min_y(&self) -> i32 {
        self.header.height() as i32
    }

    /// Track a terminal resize and re-clamp everything against the new
    /// space. Safe to call mid-gesture; the gesture keeps committing
    /// against the updated viewport.
    pub fn resize(&mut self, width: u16, height: u16, registry: &mut WindowRegistry) {
        let next = Viewport::new(width, height);
        if next == self.viewport {
            return;
        }
        tracing::debug!(width, height, "viewport changed");
        self.viewport = next;
        self.reclamp(registry);
    }

    /// Collapse or expand the header panel, shifting the top boundary.
    pub fn set_header_expanded(&mut self, expanded: bool, registry: &mut WindowRegistry) {
        if self.header.expanded == expanded {
            return;
        }
        self.header.expanded = expanded;
        tracing::debug!(min_y = self.min_y(), "top boundary moved");
        self.reclamp(registry);
    }

    pub fn toggle_header(&mut self, registry: &mut WindowRegistry) {
        let expanded = !self.header.expanded;
        self.set_header_expanded(expanded, registry);
    }

    /// Push every non-minimized window back inside the current bounds.
    /// Positions move; sizes are the caller's choice and stay put. The
    /// per-window `min_y` constraint is refreshed here so live gestures
    /// observe the new boundary too.
    pub fn reclamp(&self, registry: &mut WindowRegistry) {
        let min_y = self.min_y();
        let ids = registry.ids();
        for id in ids {
            let Some(window) = registry.get_mut(id) else {
                continue;
            };
            window.constraints.min_y = min_y;
            if window.minimized {
                continue;
            }
            let rect = window.rect;
            let clamped = clamp_position(rect.position(), rect.size(), self.viewport, min_y);
            if clamped != rect.position() {
                registry.update(id, WindowPatch::position(clamped));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, WindowRect};
    use crate::window::{Constraints, DockSide, WindowSpec};

    fn canvas(width: u16, height: u16, min_y: u16) -> Canvas {
        Canvas::new(
            Viewport::new(width, height),
            HeaderPanel::new(min_y, min_y),
        )
    }

    fn add_window(reg: &mut WindowRegistry, rect: WindowRect) -> crate::window::WindowId {
        reg.create(
            WindowSpec::new("w", rect)
                .constraints(Constraints::new(20, 6))
                .dock_side(DockSide::Left),
        )
        .unwrap()
    }

    #[test]
    fn boundary_shift_pushes_windows_down() {
        // min_y goes 40 -> 140 while a window sits at y=80; the pass
        // moves it to y=140 with x untouched
        let mut reg = WindowRegistry::new();
        let id = add_window(&mut reg, WindowRect::new(320, 80, 200, 100));
        let mut canvas = Canvas::new(Viewport::new(1000, 800), HeaderPanel::new(40, 140));
        canvas.set_header_expanded(false, &mut reg);
        assert_eq!(reg.get(id).unwrap().rect.position(), Point::new(320, 80));

        canvas.set_header_expanded(true, &mut reg);
        let window = reg.get(id).unwrap();
        assert_eq!(window.rect.position(), Point::new(320, 140));
        assert_eq!(window.constraints.min_y, 140);
    }

    #[test]
    fn viewport_shrink_pulls_windows_back_inside() {
        let mut reg = WindowRegistry::new();
        let id = add_window(&mut reg, WindowRect::new(700, 300, 200, 100));
        let mut canvas = canvas(1000, 800, 40);

        canvas.resize(800, 500, &mut reg);
        let rect = reg.get(id).unwrap().rect;
        assert!(rect.x + rect.width as i32 <= 800);
        assert!(rect.y + rect.height as i32 <= 500);
        assert_eq!(rect.position(), Point::new(600, 300));
    }

    #[test]
    fn reclamp_skips_minimized_windows_but_updates_their_boundary() {
        let mut reg = WindowRegistry::new();
        let id = add_window(&mut reg, WindowRect::new(100, 80, 200, 100));
        crate::window::dock::minimize(&mut reg, id);
        let mut canvas = Canvas::new(Viewport::new(1000, 800), HeaderPanel::new(40, 140));
        canvas.set_header_expanded(false, &mut reg);
        canvas.set_header_expanded(true, &mut reg);

        let window = reg.get(id).unwrap();
        // geometry untouched while minimized, boundary refreshed for
        // the eventual restore
        assert_eq!(window.rect.position(), Point::new(100, 80));
        assert_eq!(window.constraints.min_y, 140);
    }

    #[test]
    fn reclamp_is_strict_and_never_snaps() {
        // A window sitting 15 cells from the left edge is inside the
        // snap threshold, but a re-clamp pass must leave it alone.
        let mut reg = WindowRegistry::new();
        let id = add_window(&mut reg, WindowRect::new(15, 300, 200, 100));
        let mut canvas = canvas(1000, 800, 40);
        canvas.resize(999, 800, &mut reg);
        assert_eq!(reg.get(id).unwrap().rect.position(), Point::new(15, 300));
    }
}
