//! Desktop widget store.
//!
//! Widgets are stacked by list position: the last widget draws on top. Visibility lives in a
//! separate map so hiding a widget never disturbs its position or stacking slot.

use std::collections::HashMap;

use crate::model::{Point, WidgetEntity, WidgetId};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetStore {
    widgets: Vec<WidgetEntity>,
    visible: HashMap<WidgetId, bool>,
}

impl WidgetStore {
    /// Adds a widget at the top of the stack, or replaces the entity sharing its id in place.
    pub fn insert(&mut self, widget: WidgetEntity, visible: bool) {
        self.visible.insert(widget.id.clone(), visible);
        match self.widgets.iter_mut().find(|w| w.id == widget.id) {
            Some(slot) => *slot = widget,
            None => self.widgets.push(widget),
        }
    }

    /// Widgets bottom to top, hidden ones included.
    pub fn widgets(&self) -> &[WidgetEntity] {
        &self.widgets
    }

    pub fn get(&self, widget_id: &WidgetId) -> Option<&WidgetEntity> {
        self.widgets.iter().find(|w| &w.id == widget_id)
    }

    pub fn is_visible(&self, widget_id: &WidgetId) -> bool {
        self.visible.get(widget_id).copied().unwrap_or(false)
    }

    /// Visible widgets bottom to top.
    pub fn visible_widgets(&self) -> impl Iterator<Item = &WidgetEntity> + '_ {
        self.widgets.iter().filter(|w| self.is_visible(&w.id))
    }

    /// Position of `widget_id` in the stack, `0` being the bottom.
    pub fn stack_index(&self, widget_id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| &w.id == widget_id)
    }

    pub fn set_visible(&mut self, widget_id: &WidgetId, visible: bool) -> bool {
        let Some(flag) = self.visible.get_mut(widget_id) else {
            return false;
        };
        *flag = visible;
        true
    }

    pub fn toggle_visible(&mut self, widget_id: &WidgetId) -> bool {
        let Some(flag) = self.visible.get_mut(widget_id) else {
            return false;
        };
        *flag = !*flag;
        true
    }

    /// Relocates a widget and promotes it to the top of the stack.
    pub fn move_to(&mut self, widget_id: &WidgetId, position: Point) -> bool {
        let Some(index) = self.stack_index(widget_id) else {
            return false;
        };
        let mut widget = self.widgets.remove(index);
        widget.position = position;
        self.widgets.push(widget);
        true
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::SurfaceContent;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Size, WidgetKind};

    fn widget(id: &str, kind: WidgetKind) -> WidgetEntity {
        WidgetEntity {
            id: WidgetId::from(id),
            kind,
            title: id.to_uppercase(),
            position: Point::new(20, 20),
            size: Size::new(200, 100),
            content: SurfaceContent::placeholder(id),
        }
    }

    fn seeded() -> WidgetStore {
        let mut store = WidgetStore::default();
        store.insert(widget("clock", WidgetKind::Clock), true);
        store.insert(widget("cpu", WidgetKind::Cpu), true);
        store.insert(widget("map", WidgetKind::Map), false);
        store
    }

    fn order(store: &WidgetStore) -> Vec<&str> {
        store.widgets().iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn move_relocates_and_promotes_to_top() {
        let mut store = seeded();
        let clock = WidgetId::from("clock");

        assert!(store.move_to(&clock, Point::new(300, 40)));

        assert_eq!(order(&store), vec!["cpu", "map", "clock"]);
        assert_eq!(store.get(&clock).unwrap().position, Point::new(300, 40));
        assert_eq!(store.stack_index(&clock), Some(2));
    }

    #[test]
    fn hiding_keeps_position_and_slot() {
        let mut store = seeded();
        let cpu = WidgetId::from("cpu");

        assert!(store.set_visible(&cpu, false));

        assert!(!store.is_visible(&cpu));
        assert_eq!(store.get(&cpu).unwrap().position, Point::new(20, 20));
        assert_eq!(store.stack_index(&cpu), Some(1));
        let visible: Vec<&str> = store.visible_widgets().map(|w| w.id.as_str()).collect();
        assert_eq!(visible, vec!["clock"]);

        assert!(store.toggle_visible(&cpu));
        assert!(store.is_visible(&cpu));
    }

    #[test]
    fn reinserting_replaces_in_place() {
        let mut store = seeded();
        let mut replacement = widget("cpu", WidgetKind::Stats);
        replacement.position = Point::new(5, 5);

        store.insert(replacement, false);

        assert_eq!(order(&store), vec!["clock", "cpu", "map"]);
        assert_eq!(store.get(&WidgetId::from("cpu")).unwrap().kind, WidgetKind::Stats);
        assert!(!store.is_visible(&WidgetId::from("cpu")));
    }

    #[test]
    fn unknown_widgets_are_ignored() {
        let mut store = seeded();
        let before = store.clone();
        let ghost = WidgetId::from("ghost");

        assert!(!store.set_visible(&ghost, true));
        assert!(!store.toggle_visible(&ghost));
        assert!(!store.move_to(&ghost, Point::new(1, 1)));
        assert!(!store.is_visible(&ghost));
        assert_eq!(store, before);
    }
}
