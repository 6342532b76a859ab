//! Single source of truth for live windows: geometry, z-order, and
//! minimized state. All mutation funnels through here so the gesture
//! controller, the dock, and the canvas re-clamp pass never race each
//! other on ad hoc per-view state.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::geometry::{Point, Size, WindowRect};

use super::{Window, WindowId, WindowSpec};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("window size {width}x{height} is below the minimum {min_width}x{min_height}")]
    InvalidGeometry {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

/// Partial geometry/visibility change. Unset fields keep their current
/// value; the merge is a single commit so the observer fires once.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowPatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub minimized: Option<bool>,
}

impl WindowPatch {
    pub fn position(pos: Point) -> Self {
        Self {
            position: Some(pos),
            ..Self::default()
        }
    }

    pub fn rect(rect: WindowRect) -> Self {
        Self {
            position: Some(rect.position()),
            size: Some(rect.size()),
            ..Self::default()
        }
    }
}

type GeometryObserver = Box<dyn FnMut(WindowId, WindowRect)>;

pub struct WindowRegistry {
    windows: BTreeMap<WindowId, Window>,
    next_id: u32,
    next_z: u32,
    observer: Option<GeometryObserver>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            next_id: 0,
            next_z: 0,
            observer: None,
        }
    }

    /// Register a new window above everything else. Rejects specs whose
    /// default size is already below their own minimums; every later
    /// mutation preserves the floor, so checking once here is enough.
    pub fn create(&mut self, spec: WindowSpec) -> Result<WindowId, RegistryError> {
        let min = spec.constraints;
        if spec.rect.width < min.min_width || spec.rect.height < min.min_height {
            return Err(RegistryError::InvalidGeometry {
                width: spec.rect.width,
                height: spec.rect.height,
                min_width: min.min_width,
                min_height: min.min_height,
            });
        }
        let id = WindowId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let z = self.bump_z();
        tracing::debug!(window = %id, title = %spec.title, z, "opened window");
        self.windows.insert(id, Window::new(id, z, spec));
        Ok(id)
    }

    /// Merge a partial change into `id`. Unknown ids are a silent no-op:
    /// a window may be closed by its owner while a gesture against it is
    /// still in flight, and those trailing updates must simply vanish.
    pub fn update(&mut self, id: WindowId, patch: WindowPatch) {
        let Some(window) = self.windows.get_mut(&id) else {
            tracing::debug!(window = %id, "update for unknown window dropped");
            return;
        };
        let before = window.rect;
        if let Some(pos) = patch.position {
            window.rect.x = pos.x;
            window.rect.y = pos.y;
        }
        if let Some(size) = patch.size {
            window.rect.width = size.width.max(window.constraints.min_width);
            window.rect.height = size.height.max(window.constraints.min_height);
        }
        if let Some(minimized) = patch.minimized {
            window.minimized = minimized;
        }
        let after = window.rect;
        if after != before
            && let Some(observer) = self.observer.as_mut()
        {
            observer(id, after);
        }
    }

    /// Raise `id` to the top of the paint order. Only the target's
    /// z-index changes; everyone else keeps their relative order.
    pub fn focus(&mut self, id: WindowId) {
        let z = self.bump_z();
        match self.windows.get_mut(&id) {
            Some(window) => window.z_index = z,
            None => tracing::debug!(window = %id, "focus for unknown window dropped"),
        }
    }

    pub fn remove(&mut self, id: WindowId) -> Option<Window> {
        let removed = self.windows.remove(&id);
        if removed.is_some() {
            tracing::debug!(window = %id, "closed window");
        }
        removed
    }

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Read-only snapshot ordered by z-index ascending (paint order:
    /// render front to back of this list and the topmost window lands
    /// last).
    pub fn ordered(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Ids in creation order, which is what dock pill stacking wants.
    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    /// Topmost non-minimized window containing the given cell.
    pub fn top_window_at(&self, col: i32, row: i32) -> Option<WindowId> {
        self.ordered()
            .iter()
            .rev()
            .find(|w| !w.minimized && w.rect.contains(col, row))
            .map(|w| w.id)
    }

    /// Highest non-minimized window, i.e. the focus target.
    pub fn top_window(&self) -> Option<WindowId> {
        self.ordered()
            .iter()
            .rev()
            .find(|w| !w.minimized)
            .map(|w| w.id)
    }

    /// Install the geometry change notification hook. The registry calls
    /// it after every committed geometry change; layout persistence, if
    /// any, is entirely the caller's business.
    pub fn set_geometry_observer(&mut self, observer: GeometryObserver) {
        self.observer = Some(observer);
    }

    fn bump_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z = self.next_z.saturating_add(1);
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Constraints;

    fn spec(title: &str, rect: WindowRect) -> WindowSpec {
        WindowSpec::new(title, rect).constraints(Constraints::new(20, 6))
    }

    #[test]
    fn create_assigns_increasing_z() {
        let mut reg = WindowRegistry::new();
        let a = reg.create(spec("a", WindowRect::new(0, 0, 40, 10))).unwrap();
        let b = reg.create(spec("b", WindowRect::new(5, 5, 40, 10))).unwrap();
        assert!(reg.get(a).unwrap().z_index < reg.get(b).unwrap().z_index);
    }

    #[test]
    fn create_rejects_undersized_spec() {
        let mut reg = WindowRegistry::new();
        let err = reg
            .create(spec("tiny", WindowRect::new(0, 0, 10, 4)))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidGeometry { .. }));
        assert!(reg.is_empty());
    }

    #[test]
    fn focus_raises_only_the_target() {
        let mut reg = WindowRegistry::new();
        let a = reg.create(spec("a", WindowRect::new(0, 0, 40, 10))).unwrap();
        let b = reg.create(spec("b", WindowRect::new(5, 5, 40, 10))).unwrap();
        let c = reg.create(spec("c", WindowRect::new(9, 9, 40, 10))).unwrap();
        let z_b = reg.get(b).unwrap().z_index;
        let z_c = reg.get(c).unwrap().z_index;

        reg.focus(a);

        let z_a = reg.get(a).unwrap().z_index;
        assert!(z_a > z_b && z_a > z_c);
        assert_eq!(reg.get(b).unwrap().z_index, z_b);
        assert_eq!(reg.get(c).unwrap().z_index, z_c);
        let order: Vec<WindowId> = reg.ordered().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn update_unknown_window_is_a_no_op() {
        let mut reg = WindowRegistry::new();
        reg.update(WindowId(42), WindowPatch::position(Point::new(1, 1)));
        reg.focus(WindowId(42));
        assert!(reg.remove(WindowId(42)).is_none());
    }

    #[test]
    fn update_merges_partial_patch_and_enforces_minimums() {
        let mut reg = WindowRegistry::new();
        let id = reg
            .create(spec("a", WindowRect::new(10, 10, 40, 10)))
            .unwrap();
        reg.update(
            id,
            WindowPatch {
                size: Some(Size::new(5, 3)),
                ..WindowPatch::default()
            },
        );
        let w = reg.get(id).unwrap();
        // position untouched, size floored at the constraint minimums
        assert_eq!(w.rect.position(), Point::new(10, 10));
        assert_eq!(w.rect.size(), Size::new(20, 6));
    }

    #[test]
    fn observer_sees_committed_geometry() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen: Rc<RefCell<Vec<(WindowId, WindowRect)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut reg = WindowRegistry::new();
        reg.set_geometry_observer(Box::new(move |id, rect| {
            sink.borrow_mut().push((id, rect));
        }));
        let id = reg
            .create(spec("a", WindowRect::new(10, 10, 40, 10)))
            .unwrap();

        reg.update(id, WindowPatch::position(Point::new(3, 12)));
        // no geometry delta, no callback
        reg.update(id, WindowPatch::position(Point::new(3, 12)));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], (id, WindowRect::new(3, 12, 40, 10)));
    }

    #[test]
    fn top_window_at_respects_z_and_minimized() {
        let mut reg = WindowRegistry::new();
        let a = reg.create(spec("a", WindowRect::new(0, 0, 40, 10))).unwrap();
        let b = reg.create(spec("b", WindowRect::new(0, 0, 40, 10))).unwrap();
        assert_eq!(reg.top_window_at(5, 5), Some(b));
        reg.update(
            b,
            WindowPatch {
                minimized: Some(true),
                ..WindowPatch::default()
            },
        );
        assert_eq!(reg.top_window_at(5, 5), Some(a));
        assert_eq!(reg.top_window(), Some(a));
    }
}
