//! Window entity store: the ordered set of open windows and their lifecycle transitions.
//!
//! The store is a plain state container. Geometry arriving through [`WindowStore::move_to`] and
//! [`WindowStore::resize_to`] is committed verbatim; clamping belongs to [`crate::geometry`].
//! Every mutating operation tolerates stale ids and reports whether it found its target.

use crate::{
    model::{Point, Size, TaskbarItem, WindowDescriptor, WindowEntity, WindowId},
    reducer::DesktopError,
    z_order::ZOrderCounter,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowStore {
    windows: Vec<WindowEntity>,
    active_window_id: Option<WindowId>,
    z_order: ZOrderCounter,
}

/// Outcome of [`WindowStore::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new window entity was created.
    Created,
    /// An entity with the same id already existed and was restored and refocused.
    Refocused,
}

impl WindowStore {
    /// Windows in open order.
    pub fn windows(&self) -> &[WindowEntity] {
        &self.windows
    }

    pub fn get(&self, window_id: &WindowId) -> Option<&WindowEntity> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn contains(&self, window_id: &WindowId) -> bool {
        self.get(window_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Window most recently activated through open or focus, cleared when that window closes.
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active_window_id.as_ref()
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows.iter().find(|w| w.focused).map(|w| &w.id)
    }

    /// Window holding the greatest z-order, minimized or not.
    pub fn top_window_id(&self) -> Option<&WindowId> {
        self.windows.iter().max_by_key(|w| w.z_order).map(|w| &w.id)
    }

    /// Non-minimized windows, back to front.
    pub fn rendered_windows(&self) -> Vec<&WindowEntity> {
        let mut visible: Vec<&WindowEntity> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z_order);
        visible
    }

    /// Taskbar buttons for every open window, in open order.
    pub fn taskbar_items(&self) -> Vec<TaskbarItem> {
        self.windows
            .iter()
            .map(|w| TaskbarItem {
                window_id: w.id.clone(),
                title: w.title.clone(),
                icon: w.icon.clone(),
                active: self.active_window_id.as_ref() == Some(&w.id) && w.focused,
                minimized: w.minimized,
            })
            .collect()
    }

    /// Opens `descriptor`, or restores and refocuses the window already using its id.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::MissingWindowId`] when the descriptor id is blank; the store is left
    /// untouched.
    pub fn open(&mut self, descriptor: WindowDescriptor) -> Result<OpenOutcome, DesktopError> {
        let raw_id = descriptor.id.trim();
        if raw_id.is_empty() {
            return Err(DesktopError::MissingWindowId {
                title: descriptor.title,
            });
        }
        let window_id = WindowId::new(raw_id);

        if let Some(existing) = self.find_mut(&window_id) {
            existing.minimized = false;
            self.focus(&window_id);
            return Ok(OpenOutcome::Refocused);
        }

        let z_order = self.z_order.next();
        for window in &mut self.windows {
            window.focused = false;
        }
        self.windows
            .push(WindowEntity::new(window_id.clone(), descriptor, z_order));
        self.active_window_id = Some(window_id);
        Ok(OpenOutcome::Created)
    }

    /// Removes a window; the active reference is cleared rather than handed to another window.
    pub fn close(&mut self, window_id: &WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != window_id);
        if self.windows.len() == before {
            return false;
        }
        if self.active_window_id.as_ref() == Some(window_id) {
            self.active_window_id = None;
        }
        true
    }

    /// Gives `window_id` exclusive focus and raises it above every other window.
    pub fn focus(&mut self, window_id: &WindowId) -> bool {
        if !self.contains(window_id) {
            return false;
        }
        let z_order = self.z_order.next();
        for window in &mut self.windows {
            window.focused = &window.id == window_id;
            if window.focused {
                window.z_order = z_order;
            }
        }
        self.active_window_id = Some(window_id.clone());
        true
    }

    /// Raises `window_id` without moving focus away from the current holder.
    pub fn bring_to_front(&mut self, window_id: &WindowId) -> bool {
        if !self.contains(window_id) {
            return false;
        }
        let z_order = self.z_order.next();
        if let Some(window) = self.find_mut(window_id) {
            window.z_order = z_order;
        }
        true
    }

    /// Hides a window to the taskbar. Focus and stacking are untouched.
    pub fn minimize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        window.minimized = true;
        true
    }

    /// Flips the maximized flag. Stored geometry is kept so restoring is exact.
    pub fn toggle_maximize(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        window.maximized = !window.maximized;
        true
    }

    pub fn move_to(&mut self, window_id: &WindowId, position: Point) -> bool {
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        window.position = position;
        true
    }

    pub fn resize_to(&mut self, window_id: &WindowId, size: Size) -> bool {
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        window.size = size;
        true
    }

    /// Taskbar button press: restore a minimized window, then focus it.
    pub fn activate_from_taskbar(&mut self, window_id: &WindowId) -> bool {
        let Some(window) = self.find_mut(window_id) else {
            return false;
        };
        window.minimized = false;
        self.focus(window_id)
    }

    fn find_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowEntity> {
        self.windows.iter_mut().find(|w| &w.id == window_id)
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::SurfaceContent;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowKind, DEFAULT_MIN_WINDOW_SIZE};

    fn descriptor(id: &str) -> WindowDescriptor {
        WindowDescriptor::new(id, id.to_uppercase(), SurfaceContent::placeholder(id))
    }

    fn open(store: &mut WindowStore, id: &str) -> WindowId {
        store.open(descriptor(id)).expect("open window");
        WindowId::from(id)
    }

    fn window<'a>(store: &'a WindowStore, id: &WindowId) -> &'a WindowEntity {
        store.get(id).expect("window exists")
    }

    fn focused_count(store: &WindowStore) -> usize {
        store.windows().iter().filter(|w| w.focused).count()
    }

    #[test]
    fn open_uses_defaults_and_focuses() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");

        let win = window(&store, &a);
        assert_eq!(win.position, Point::new(100, 100));
        assert_eq!(win.size, Size::new(800, 600));
        assert_eq!(win.min_size, DEFAULT_MIN_WINDOW_SIZE);
        assert_eq!(win.z_order, 1);
        assert!(win.focused);
        assert!(win.resizable());
        assert!(win.draggable());
        assert_eq!(win.kind, WindowKind::Application);
        assert_eq!(store.active_window_id(), Some(&a));
    }

    #[test]
    fn open_floors_default_size_at_minimum() {
        let mut store = WindowStore::default();
        let mut desc = descriptor("term");
        desc.default_size = Some(Size::new(200, 100));
        desc.min_size = Some(Size::new(400, 300));
        store.open(desc).unwrap();

        assert_eq!(
            window(&store, &WindowId::from("term")).size,
            Size::new(400, 300)
        );
    }

    #[test]
    fn open_rejects_blank_id() {
        let mut store = WindowStore::default();
        let err = store.open(descriptor("   ")).unwrap_err();
        assert_eq!(
            err,
            DesktopError::MissingWindowId {
                title: "   ".to_string()
            }
        );
        assert!(store.is_empty());
        assert_eq!(store.top_window_id(), None);
    }

    #[test]
    fn reopening_restores_instead_of_duplicating() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        let b = open(&mut store, "b");
        store.minimize(&a);

        let outcome = store.open(descriptor("a")).unwrap();

        assert_eq!(outcome, OpenOutcome::Refocused);
        assert_eq!(store.len(), 2);
        assert_eq!(store.taskbar_items().len(), 2);
        let win = window(&store, &a);
        assert!(!win.minimized);
        assert!(win.focused);
        assert!(!window(&store, &b).focused);
        assert_eq!(store.top_window_id(), Some(&a));
    }

    #[test]
    fn focus_is_exclusive_and_raises() {
        let mut store = WindowStore::default();
        let ids: Vec<WindowId> = ["a", "b", "c"].iter().map(|id| open(&mut store, id)).collect();

        for id in ids.iter().chain(ids.iter().rev()) {
            assert!(store.focus(id));
            assert_eq!(focused_count(&store), 1);
            assert_eq!(store.focused_window_id(), Some(id));
            assert_eq!(store.top_window_id(), Some(id));
        }
    }

    #[test]
    fn last_touched_window_has_strictly_greatest_z_order() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        let b = open(&mut store, "b");
        let c = open(&mut store, "c");

        let touches = [(&b, 0), (&a, 1), (&c, 2), (&b, 1), (&a, 2)];
        for (id, op) in touches {
            match op {
                0 => store.focus(id),
                1 => store.bring_to_front(id),
                _ => store.open(descriptor(id.as_str())).is_ok(),
            };
            let top = window(&store, id).z_order;
            assert!(store
                .windows()
                .iter()
                .filter(|w| &w.id != id)
                .all(|w| w.z_order < top));
        }
    }

    #[test]
    fn bring_to_front_keeps_focus_holder() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        let b = open(&mut store, "b");

        assert!(store.bring_to_front(&a));

        assert_eq!(store.top_window_id(), Some(&a));
        assert_eq!(store.focused_window_id(), Some(&b));
        assert_eq!(store.active_window_id(), Some(&b));
    }

    #[test]
    fn minimize_keeps_focus_and_z_order() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        let before = window(&store, &a).z_order;

        assert!(store.minimize(&a));

        let win = window(&store, &a);
        assert!(win.minimized);
        assert!(win.focused);
        assert_eq!(win.z_order, before);
        assert!(store.rendered_windows().is_empty());
        assert!(store.taskbar_items()[0].minimized);
    }

    #[test]
    fn toggle_maximize_twice_restores_geometry() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        store.move_to(&a, Point::new(37, 52));
        store.resize_to(&a, Size::new(640, 480));

        store.toggle_maximize(&a);
        assert!(window(&store, &a).maximized);
        store.toggle_maximize(&a);

        let win = window(&store, &a);
        assert!(!win.maximized);
        assert_eq!(win.position, Point::new(37, 52));
        assert_eq!(win.size, Size::new(640, 480));
    }

    #[test]
    fn close_removes_window_and_taskbar_item_without_refocusing() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        let b = open(&mut store, "b");

        assert!(store.close(&b));

        assert!(!store.contains(&b));
        assert_eq!(store.active_window_id(), None);
        assert_eq!(store.focused_window_id(), None);
        let items = store.taskbar_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].window_id, a);
        assert!(!items[0].active);

        assert!(!store.focus(&b));
        assert!(!store.contains(&b));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut store = WindowStore::default();
        open(&mut store, "a");
        let before = store.clone();
        let ghost = WindowId::from("ghost");

        assert!(!store.close(&ghost));
        assert!(!store.focus(&ghost));
        assert!(!store.minimize(&ghost));
        assert!(!store.toggle_maximize(&ghost));
        assert!(!store.move_to(&ghost, Point::new(1, 1)));
        assert!(!store.resize_to(&ghost, Size::new(1, 1)));
        assert!(!store.activate_from_taskbar(&ghost));
        assert!(!store.bring_to_front(&ghost));

        assert_eq!(store, before);
    }

    #[test]
    fn store_commits_geometry_verbatim() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");

        store.move_to(&a, Point::new(-20, 5000));
        store.resize_to(&a, Size::new(10, 10));

        let win = window(&store, &a);
        assert_eq!(win.position, Point::new(-20, 5000));
        assert_eq!(win.size, Size::new(10, 10));
    }

    #[test]
    fn taskbar_activation_restores_and_focuses() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        let b = open(&mut store, "b");
        store.minimize(&a);

        assert!(store.activate_from_taskbar(&a));

        let items = store.taskbar_items();
        assert_eq!(items[0].window_id, a);
        assert!(items[0].active);
        assert!(!items[0].minimized);
        assert!(!items[1].active);
        assert_eq!(items[1].window_id, b);
    }

    #[test]
    fn activation_scenario_matches_reference_stacking() {
        let mut store = WindowStore::default();
        let a = open(&mut store, "a");
        assert_eq!(window(&store, &a).z_order, 1);

        let b = open(&mut store, "b");
        assert_eq!(window(&store, &b).z_order, 2);
        assert!(window(&store, &b).focused);
        assert!(!window(&store, &a).focused);

        store.focus(&a);
        assert_eq!(window(&store, &a).z_order, 3);
        assert!(window(&store, &a).focused);
        assert!(!window(&store, &b).focused);

        store.minimize(&a);
        assert!(window(&store, &a).minimized);
        assert_eq!(window(&store, &a).z_order, 3);
        let rendered: Vec<&WindowId> = store.rendered_windows().iter().map(|w| &w.id).collect();
        assert_eq!(rendered, vec![&b]);
    }
}
