//! Minimize/restore and dock pill layout.
//!
//! A minimized window keeps its registry entry and its z-index; only its
//! rendering collapses to a pill on the dock edge its role was assigned
//! at creation. Pills on one side stack from the bottom edge upward in
//! creation order, each a fixed pill height plus gap apart, so they can
//! never overlap regardless of how many windows share a side.

use ratatui::layout::Rect;

use crate::constants::{DOCK_MARGIN, PILL_GAP, PILL_HEIGHT, PILL_WIDTH};
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

use super::{DockSide, WindowId, WindowPatch, WindowRegistry};

/// Collapse `id` to its dock pill, remembering the current geometry for
/// the eventual restore. Already-minimized and unknown ids are no-ops.
pub fn minimize(registry: &mut WindowRegistry, id: WindowId) {
    let Some(window) = registry.get_mut(id) else {
        return;
    };
    if window.minimized {
        return;
    }
    window.restore_rect = Some(window.rect);
    window.minimized = true;
    tracing::debug!(window = %id, "minimized to dock");
}

/// Bring `id` back to the canvas at its pre-minimize geometry. Without a
/// stored rect (never minimized through this path) the window keeps the
/// rect it already has.
pub fn restore(registry: &mut WindowRegistry, id: WindowId) {
    let Some(window) = registry.get_mut(id) else {
        return;
    };
    if !window.minimized {
        return;
    }
    window.minimized = false;
    if let Some(rect) = window.restore_rect.take() {
        registry.update(id, WindowPatch::rect(rect));
    }
    tracing::debug!(window = %id, "restored from dock");
}

/// Pill rectangles for every minimized window, stacked per dock side
/// within `bounds` (the canvas area).
pub fn pill_rects(registry: &WindowRegistry, bounds: Rect) -> Vec<(WindowId, Rect)> {
    let mut pills = Vec::new();
    for side in [DockSide::Left, DockSide::Right] {
        let mut slot = 0u16;
        for id in registry.ids() {
            let Some(window) = registry.get(id) else {
                continue;
            };
            if !window.minimized || window.dock_side != side {
                continue;
            }
            let width = PILL_WIDTH.min(bounds.width);
            let x = match side {
                DockSide::Left => bounds.x.saturating_add(DOCK_MARGIN),
                DockSide::Right => bounds
                    .x
                    .saturating_add(bounds.width)
                    .saturating_sub(DOCK_MARGIN + width),
            };
            let offset = DOCK_MARGIN + PILL_HEIGHT + slot * (PILL_HEIGHT + PILL_GAP);
            let y = bounds
                .y
                .saturating_add(bounds.height)
                .saturating_sub(offset);
            pills.push((
                id,
                Rect {
                    x,
                    y,
                    width,
                    height: PILL_HEIGHT,
                },
            ));
            slot += 1;
        }
    }
    pills
}

/// The pill under the pointer, topmost-agnostic: pills never overlap.
pub fn pill_at(registry: &WindowRegistry, bounds: Rect, col: u16, row: u16) -> Option<WindowId> {
    pill_rects(registry, bounds)
        .into_iter()
        .find(|(_, rect)| {
            col >= rect.x
                && col < rect.x.saturating_add(rect.width)
                && row >= rect.y
                && row < rect.y.saturating_add(rect.height)
        })
        .map(|(id, _)| id)
}

pub fn render_pills(frame: &mut UiFrame<'_>, registry: &WindowRegistry, bounds: Rect) {
    for (id, rect) in pill_rects(registry, bounds) {
        let Some(window) = registry.get(id) else {
            continue;
        };
        let label = format!(
            "▲ {}",
            truncate_to_width(&window.title, rect.width.saturating_sub(3) as usize)
        );
        let padded = format!("{label:<width$}", width = rect.width as usize);
        frame.render_widget(
            ratatui::widgets::Paragraph::new(padded).style(theme::pill()),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WindowRect;
    use crate::window::{Constraints, WindowSpec};

    fn canvas() -> Rect {
        Rect {
            x: 0,
            y: 7,
            width: 120,
            height: 33,
        }
    }

    fn add(reg: &mut WindowRegistry, title: &str, side: DockSide) -> WindowId {
        reg.create(
            WindowSpec::new(title, WindowRect::new(4, 8, 50, 14))
                .constraints(Constraints::new(20, 6))
                .dock_side(side),
        )
        .unwrap()
    }

    #[test]
    fn minimize_restore_round_trips_geometry() {
        let mut reg = WindowRegistry::new();
        let id = add(&mut reg, "matrix", DockSide::Left);
        reg.update(id, WindowPatch::rect(WindowRect::new(12, 9, 60, 20)));
        let before = reg.get(id).unwrap().rect;

        minimize(&mut reg, id);
        assert!(reg.get(id).unwrap().minimized);

        restore(&mut reg, id);
        let window = reg.get(id).unwrap();
        assert!(!window.minimized);
        assert_eq!(window.rect, before);
        assert!(window.restore_rect.is_none());
    }

    #[test]
    fn minimize_preserves_z_index_and_registry_entry() {
        let mut reg = WindowRegistry::new();
        let a = add(&mut reg, "matrix", DockSide::Left);
        let b = add(&mut reg, "analysis", DockSide::Right);
        let z_a = reg.get(a).unwrap().z_index;

        minimize(&mut reg, a);
        assert_eq!(reg.get(a).unwrap().z_index, z_a);
        assert_eq!(reg.len(), 2);
        // repeat minimize is a no-op, restore_rect survives
        let stored = reg.get(a).unwrap().restore_rect;
        minimize(&mut reg, a);
        assert_eq!(reg.get(a).unwrap().restore_rect, stored);
        let _ = b;
    }

    #[test]
    fn same_side_pills_stack_upward_without_overlap() {
        let mut reg = WindowRegistry::new();
        let a = add(&mut reg, "matrix", DockSide::Left);
        let b = add(&mut reg, "watch", DockSide::Left);
        minimize(&mut reg, a);
        minimize(&mut reg, b);

        let pills = pill_rects(&reg, canvas());
        assert_eq!(pills.len(), 2);
        let (first, second) = (pills[0], pills[1]);
        assert_eq!(first.0, a);
        assert_eq!(second.0, b);
        // creation order stacks bottom-up: the older pill sits lower
        assert!(second.1.y < first.1.y);
        assert_eq!(first.1.y - second.1.y, PILL_HEIGHT + PILL_GAP);
        assert_eq!(first.1.x, second.1.x);
    }

    #[test]
    fn dock_sides_stack_independently() {
        let mut reg = WindowRegistry::new();
        let left = add(&mut reg, "matrix", DockSide::Left);
        let right = add(&mut reg, "analysis", DockSide::Right);
        minimize(&mut reg, left);
        minimize(&mut reg, right);

        let pills = pill_rects(&reg, canvas());
        let left_pill = pills.iter().find(|(id, _)| *id == left).unwrap().1;
        let right_pill = pills.iter().find(|(id, _)| *id == right).unwrap().1;
        // both occupy the bottom slot of their own side
        assert_eq!(left_pill.y, right_pill.y);
        assert!(left_pill.x < right_pill.x);
        assert_eq!(
            right_pill.x + right_pill.width + DOCK_MARGIN,
            canvas().x + canvas().width
        );
    }

    #[test]
    fn pill_hit_test_finds_the_slot() {
        let mut reg = WindowRegistry::new();
        let a = add(&mut reg, "matrix", DockSide::Left);
        minimize(&mut reg, a);

        let pills = pill_rects(&reg, canvas());
        let rect = pills[0].1;
        assert_eq!(pill_at(&reg, canvas(), rect.x + 1, rect.y), Some(a));
        assert_eq!(pill_at(&reg, canvas(), rect.x + 1, rect.y + 2), None);
    }
}
