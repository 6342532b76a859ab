//! Pure geometry and constraint math for floating windows.
//!
//! Everything in this module is stateless: callers pass candidate
//! positions or pointer deltas in and get corrected geometry back. The
//! gesture controller and the canvas re-clamp pass both go through these
//! functions so the boundary rules live in exactly one place.

use ratatui::prelude::Rect;

use crate::constants::SNAP_THRESHOLD;

/// Signed canvas position. Origins are signed so a drag may overshoot the
/// left viewport edge transiently; extents stay unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window extent in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// The canvas coordinate space all windows are constrained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Floating window rectangle: signed origin, unsigned extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl WindowRect {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Rightmost column still inside the rect.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32 - 1
    }

    /// Bottom row still inside the rect.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32 - 1
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        col >= self.x && col <= self.right() && row >= self.y && row <= self.bottom()
    }

    /// Drop the off-screen portion and return the drawable `Rect`, or
    /// `None` when nothing is visible.
    pub fn clipped(&self, bounds: Rect) -> Option<Rect> {
        let bx0 = bounds.x as i32;
        let by0 = bounds.y as i32;
        let bx1 = bx0 + bounds.width as i32;
        let by1 = by0 + bounds.height as i32;
        let x0 = self.x.max(bx0);
        let y0 = self.y.max(by0);
        let x1 = (self.x + self.width as i32).min(bx1);
        let y1 = (self.y + self.height as i32).min(by1);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Rect {
            x: x0 as u16,
            y: y0 as u16,
            width: (x1 - x0) as u16,
            height: (y1 - y0) as u16,
        })
    }
}

/// Which border region a resize gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub fn moves_left_edge(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    pub fn moves_right_edge(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub fn moves_top_edge(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub fn moves_bottom_edge(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

/// Constrain a position so the window stays fully inside the viewport:
/// `x` in `[0, viewport.width - width]`, `y` in
/// `[min_y, viewport.height - height]`. Used by the canvas re-clamp pass;
/// gestures only apply the `min_y` half while a drag is live.
pub fn clamp_position(pos: Point, size: Size, viewport: Viewport, min_y: i32) -> Point {
    let max_x = (viewport.width as i32 - size.width as i32).max(0);
    let max_y = (viewport.height as i32 - size.height as i32).max(min_y);
    Point::new(pos.x.clamp(0, max_x), pos.y.clamp(min_y, max_y))
}

/// Replace each axis with the nearest boundary anchor when the candidate
/// lands within `threshold` cells of it; otherwise pass the axis through
/// unchanged. Anchors are the left/right viewport edges and the top
/// boundary / bottom viewport edge. Axes snap independently, so both may
/// snap at once; when the viewport is narrower than two thresholds the
/// far edge wins.
pub fn compute_snap(
    candidate: Point,
    size: Size,
    viewport: Viewport,
    min_y: i32,
    threshold: i32,
) -> Point {
    let max_x = viewport.width as i32 - size.width as i32;
    let max_y = viewport.height as i32 - size.height as i32;
    let mut snapped = candidate;
    if (candidate.x).abs() < threshold {
        snapped.x = 0;
    }
    if (candidate.x - max_x).abs() < threshold {
        snapped.x = max_x;
    }
    if (candidate.y - min_y).abs() < threshold {
        snapped.y = min_y;
    }
    if (candidate.y - max_y).abs() < threshold {
        snapped.y = max_y;
    }
    snapped
}

/// `compute_snap` with the default threshold.
pub fn snap_to_edges(candidate: Point, size: Size, viewport: Viewport, min_y: i32) -> Point {
    compute_snap(candidate, size, viewport, min_y, SNAP_THRESHOLD)
}

/// Apply a pointer delta to `start` for the grabbed `edge`.
///
/// Right/bottom edges grow the extent by the delta, floored at the
/// minimum. Left/top edges shrink from the opposite side: the extent and
/// origin move together only while the result stays at or above the
/// minimum; a violating delta leaves that axis untouched entirely (the
/// opposite edge must never creep). The axes are independent, so a
/// corner resize can be rejected horizontally and still apply
/// vertically.
pub fn resize_from_edge(
    edge: ResizeEdge,
    start: WindowRect,
    dx: i32,
    dy: i32,
    min_width: u16,
    min_height: u16,
) -> WindowRect {
    let mut rect = start;

    if edge.moves_right_edge() {
        rect.width = (start.width as i32 + dx).max(min_width as i32) as u16;
    } else if edge.moves_left_edge() {
        let next = start.width as i32 - dx;
        if next >= min_width as i32 {
            rect.width = next as u16;
            rect.x = start.x + dx;
        }
    }

    if edge.moves_bottom_edge() {
        rect.height = (start.height as i32 + dy).max(min_height as i32) as u16;
    } else if edge.moves_top_edge() {
        let next = start.height as i32 - dy;
        if next >= min_height as i32 {
            rect.height = next as u16;
            rect.y = start.y + dy;
        }
    }

    rect
}

/// Border hit test for resize handles. Corner cells win over edge
/// strips; anything inside the ring reports `None`.
pub fn resize_edge_at(rect: WindowRect, col: i32, row: i32) -> Option<ResizeEdge> {
    if !rect.contains(col, row) || rect.width < 2 || rect.height < 2 {
        return None;
    }
    let left = col == rect.x;
    let right = col == rect.right();
    let top = row == rect.y;
    let bottom = row == rect.bottom();
    match (left, right, top, bottom) {
        (true, _, true, _) => Some(ResizeEdge::TopLeft),
        (_, true, true, _) => Some(ResizeEdge::TopRight),
        (true, _, _, true) => Some(ResizeEdge::BottomLeft),
        (_, true, _, true) => Some(ResizeEdge::BottomRight),
        (true, _, _, _) => Some(ResizeEdge::Left),
        (_, true, _, _) => Some(ResizeEdge::Right),
        (_, _, true, _) => Some(ResizeEdge::Top),
        (_, _, _, true) => Some(ResizeEdge::Bottom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1000,
        height: 800,
    };

    #[test]
    fn clamp_keeps_window_inside_viewport() {
        let size = Size::new(600, 400);
        let clamped = clamp_position(Point::new(-30, 10), size, VIEWPORT, 140);
        assert_eq!(clamped, Point::new(0, 140));
        let clamped = clamp_position(Point::new(900, 700), size, VIEWPORT, 140);
        assert_eq!(clamped, Point::new(400, 400));
    }

    #[test]
    fn clamp_with_oversized_window_pins_to_origin() {
        let size = Size::new(1200, 900);
        let clamped = clamp_position(Point::new(50, 300), size, VIEWPORT, 40);
        assert_eq!(clamped, Point::new(0, 40));
    }

    #[test]
    fn snap_pulls_near_left_edge_to_zero() {
        // a candidate 15 cells from the edge is inside the 20-cell threshold
        let size = Size::new(600, 400);
        let snapped = compute_snap(Point::new(15, 300), size, VIEWPORT, 140, 20);
        assert_eq!(snapped, Point::new(0, 300));
    }

    #[test]
    fn snap_handles_both_axes_independently() {
        let size = Size::new(600, 400);
        // x near the right anchor (1000-600=400), y near min_y.
        let snapped = compute_snap(Point::new(388, 150), size, VIEWPORT, 140, 20);
        assert_eq!(snapped, Point::new(400, 140));
    }

    #[test]
    fn snap_passes_far_candidates_through() {
        let size = Size::new(600, 400);
        let candidate = Point::new(120, 300);
        assert_eq!(compute_snap(candidate, size, VIEWPORT, 140, 20), candidate);
    }

    #[test]
    fn snap_is_idempotent() {
        let size = Size::new(600, 400);
        for candidate in [
            Point::new(15, 150),
            Point::new(388, 786),
            Point::new(200, 300),
        ] {
            let once = compute_snap(candidate, size, VIEWPORT, 140, 20);
            let twice = compute_snap(once, size, VIEWPORT, 140, 20);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn resize_right_grows_and_floors_at_minimum() {
        let start = WindowRect::new(100, 100, 500, 300);
        let grown = resize_from_edge(ResizeEdge::Right, start, 40, 0, 400, 300);
        assert_eq!(grown, WindowRect::new(100, 100, 540, 300));
        let floored = resize_from_edge(ResizeEdge::Right, start, -300, 0, 400, 300);
        assert_eq!(floored, WindowRect::new(100, 100, 400, 300));
    }

    #[test]
    fn resize_left_shifts_origin_and_keeps_opposite_edge() {
        let start = WindowRect::new(100, 100, 500, 300);
        let shrunk = resize_from_edge(ResizeEdge::Left, start, 60, 0, 400, 300);
        assert_eq!(shrunk, WindowRect::new(160, 100, 440, 300));
        assert_eq!(shrunk.right(), start.right());
    }

    #[test]
    fn resize_left_below_minimum_rejects_that_axis_only() {
        let start = WindowRect::new(100, 100, 500, 300);
        // dx would take width to 380 < 400: x and width must not move,
        // but the vertical half of the corner still applies.
        let result = resize_from_edge(ResizeEdge::TopLeft, start, 120, -25, 400, 200);
        assert_eq!(result.x, start.x);
        assert_eq!(result.width, start.width);
        assert_eq!(result.y, 75);
        assert_eq!(result.height, 325);
    }

    #[test]
    fn resize_top_below_minimum_keeps_origin_and_height() {
        let start = WindowRect::new(100, 100, 500, 300);
        let result = resize_from_edge(ResizeEdge::Top, start, 0, 250, 400, 200);
        assert_eq!(result, start);
    }

    #[test]
    fn edge_hit_test_prefers_corners() {
        let rect = WindowRect::new(10, 10, 20, 10);
        assert_eq!(resize_edge_at(rect, 10, 10), Some(ResizeEdge::TopLeft));
        assert_eq!(resize_edge_at(rect, 29, 19), Some(ResizeEdge::BottomRight));
        assert_eq!(resize_edge_at(rect, 20, 10), Some(ResizeEdge::Top));
        assert_eq!(resize_edge_at(rect, 10, 15), Some(ResizeEdge::Left));
        assert_eq!(resize_edge_at(rect, 20, 15), None);
        assert_eq!(resize_edge_at(rect, 5, 5), None);
    }

    #[test]
    fn clipped_drops_offscreen_portion() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let rect = WindowRect::new(-4, 2, 10, 5);
        assert_eq!(
            rect.clipped(bounds),
            Some(Rect {
                x: 0,
                y: 2,
                width: 6,
                height: 5
            })
        );
        assert_eq!(WindowRect::new(100, 30, 10, 5).clipped(bounds), None);
    }
}
