//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    geometry::{self, DragAnchor, ResizeAnchor, ResizeEdge},
    model::{
        DesktopState, DesktopTheme, DragSession, InteractionState, Point, PointerPosition,
        PointerSession, ResizeSession, Size, Viewport, WidgetDragSession, WidgetId,
        WindowDescriptor, WindowId,
    },
    notifications::{NotificationId, NotificationRequest},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or restore and focus the one already using the descriptor id.
    OpenWindow(WindowDescriptor),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Raise a window without moving keyboard focus.
    BringToFront {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Minimize a window to the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Flip a window between maximized and its stored geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Commit a window position verbatim.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: Point,
    },
    /// Commit a window size verbatim.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// New width in pixels.
        width: i32,
        /// New height in pixels.
        height: i32,
    },
    /// Taskbar button press for a window.
    ActivateTaskbarItem {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Begin resizing a window through one of its handles.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Begin dragging a desktop widget.
    BeginWidgetDrag {
        /// Widget being dragged.
        widget_id: WidgetId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer moved while a session may be active.
    UpdatePointer {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Work area to clamp against, when the host knows it.
        viewport: Option<Viewport>,
    },
    /// Pointer released; ends whichever session is active.
    EndPointer,
    /// Show or hide a widget.
    SetWidgetVisible {
        /// Widget to update.
        widget_id: WidgetId,
        /// Whether the widget should be drawn.
        visible: bool,
    },
    /// Flip a widget's visibility.
    ToggleWidget {
        /// Widget to update.
        widget_id: WidgetId,
    },
    /// Commit a widget position and promote it to the top of the widget layer.
    MoveWidget {
        /// Widget to move.
        widget_id: WidgetId,
        /// New top-left corner.
        position: Point,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Show a toast notification.
    PushNotification(NotificationRequest),
    /// Remove a toast notification.
    DismissNotification {
        /// Notification to remove.
        notification_id: NotificationId,
    },
    /// Switch the shell colour scheme.
    SetTheme {
        /// Theme to apply.
        theme: DesktopTheme,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised by [`reduce_desktop`] for requests that cannot be honoured.
pub enum DesktopError {
    /// A window descriptor arrived without a usable id.
    #[error("window `{title}` has no id")]
    MissingWindowId {
        /// Title of the rejected descriptor, for diagnostics.
        title: String,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Actions that reference windows or widgets which no longer exist leave the state unchanged.
///
/// # Errors
///
/// Returns [`DesktopError::MissingWindowId`] when an [`DesktopAction::OpenWindow`] descriptor has
/// a blank id.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, DesktopError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(descriptor) => {
            state.windows.open(descriptor)?;
            state.start_menu_open = false;
            if let Some(window_id) = state.windows.active_window_id().cloned() {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.windows.close(&window_id) {
                release_stale_session(state, interaction);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if state.windows.focus(&window_id) {
                state.start_menu_open = false;
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::BringToFront { window_id } => {
            state.windows.bring_to_front(&window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.windows.minimize(&window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            state.windows.toggle_maximize(&window_id);
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            state.windows.move_to(&window_id, position);
        }
        DesktopAction::ResizeWindow {
            window_id,
            width,
            height,
        } => {
            state.windows.resize_to(&window_id, Size::new(width, height));
        }
        DesktopAction::ActivateTaskbarItem { window_id } => {
            if state.windows.activate_from_taskbar(&window_id) {
                state.start_menu_open = false;
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.windows.get(&window_id) else {
                return Ok(effects);
            };
            let movable = window.draggable() && !window.maximized && !window.minimized;
            let origin = window.position;
            state.windows.focus(&window_id);
            state.start_menu_open = false;
            if movable {
                interaction.active = Some(PointerSession::MoveWindow(DragSession {
                    window_id,
                    anchor: DragAnchor::new(pointer, origin),
                }));
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.windows.get(&window_id) else {
                return Ok(effects);
            };
            if !window.resizable() || window.maximized || window.minimized {
                return Ok(effects);
            }
            let anchor = ResizeAnchor::new(pointer, window.position, window.size);
            let min_size = window.min_size;
            state.windows.focus(&window_id);
            state.start_menu_open = false;
            interaction.active = Some(PointerSession::ResizeWindow(ResizeSession {
                window_id,
                edge,
                anchor,
                min_size,
            }));
        }
        DesktopAction::BeginWidgetDrag { widget_id, pointer } => {
            let Some(origin) = state.widgets.get(&widget_id).map(|w| w.position) else {
                return Ok(effects);
            };
            state.widgets.move_to(&widget_id, origin);
            interaction.active = Some(PointerSession::MoveWidget(WidgetDragSession {
                widget_id,
                anchor: DragAnchor::new(pointer, origin),
            }));
        }
        DesktopAction::UpdatePointer { pointer, viewport } => {
            apply_pointer_update(state, interaction, pointer, viewport);
        }
        DesktopAction::EndPointer => {
            interaction.active = None;
        }
        DesktopAction::SetWidgetVisible { widget_id, visible } => {
            state.widgets.set_visible(&widget_id, visible);
        }
        DesktopAction::ToggleWidget { widget_id } => {
            state.widgets.toggle_visible(&widget_id);
        }
        DesktopAction::MoveWidget {
            widget_id,
            position,
        } => {
            state.widgets.move_to(&widget_id, position);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::PushNotification(request) => {
            state.notifications.push(request);
        }
        DesktopAction::DismissNotification { notification_id } => {
            state.notifications.dismiss(notification_id);
        }
        DesktopAction::SetTheme { theme } => {
            state.theme = theme;
        }
    }

    Ok(effects)
}

fn apply_pointer_update(
    state: &mut DesktopState,
    interaction: &InteractionState,
    pointer: PointerPosition,
    viewport: Option<Viewport>,
) {
    match &interaction.active {
        None => {}
        Some(PointerSession::MoveWindow(session)) => {
            let Some(window) = state.windows.get(&session.window_id) else {
                return;
            };
            if window.maximized || window.minimized {
                return;
            }
            let position = geometry::drag_position(session.anchor, pointer, window.size, viewport);
            state.windows.move_to(&session.window_id, position);
        }
        Some(PointerSession::ResizeWindow(session)) => {
            if !state.windows.contains(&session.window_id) {
                return;
            }
            let rect = geometry::resize_rect(
                session.anchor,
                session.edge,
                pointer,
                session.min_size,
                viewport,
            );
            state.windows.move_to(&session.window_id, rect.position());
            state.windows.resize_to(&session.window_id, rect.size());
        }
        Some(PointerSession::MoveWidget(session)) => {
            let Some(size) = state.widgets.get(&session.widget_id).map(|w| w.size) else {
                return;
            };
            let position = geometry::drag_position(session.anchor, pointer, size, viewport);
            state.widgets.move_to(&session.widget_id, position);
        }
    }
}

fn release_stale_session(state: &DesktopState, interaction: &mut InteractionState) {
    let stale = match &interaction.active {
        Some(PointerSession::MoveWindow(session)) => !state.windows.contains(&session.window_id),
        Some(PointerSession::ResizeWindow(session)) => !state.windows.contains(&session.window_id),
        Some(PointerSession::MoveWidget(_)) | None => false,
    };
    if stale {
        interaction.active = None;
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::SurfaceContent;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{Point, Size, WidgetEntity, WidgetKind, WindowEntity},
        notifications::NotificationKind,
    };

    fn descriptor(id: &str) -> WindowDescriptor {
        WindowDescriptor::new(id, id.to_uppercase(), SurfaceContent::placeholder(id))
    }

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, id: &str) -> WindowId {
        reduce(state, interaction, DesktopAction::OpenWindow(descriptor(id)));
        WindowId::from(id)
    }

    fn window<'a>(state: &'a DesktopState, id: &WindowId) -> &'a WindowEntity {
        state.windows.get(id).expect("window")
    }

    #[test]
    fn open_window_focuses_new_window_and_requests_input_focus() {
        let mut state = DesktopState {
            start_menu_open: true,
            ..DesktopState::default()
        };
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "explorer");
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(descriptor("notepad")),
        );
        let second = WindowId::from("notepad");

        assert_eq!(state.focused_window_id(), Some(&second));
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.windows.windows()[0].id, first);
        assert_eq!(window(&state, &second).z_order, 2);
        assert!(!state.start_menu_open);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(second)]);
    }

    #[test]
    fn blank_descriptor_id_is_rejected() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "terminal");
        let before = state.clone();

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(descriptor("")),
        );

        assert!(matches!(result, Err(DesktopError::MissingWindowId { .. })));
        assert_eq!(state, before);
    }

    #[test]
    fn dragging_window_follows_pointer_and_clamps_to_viewport() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "terminal");
        let viewport = Some(Viewport::new(1000, 700));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win.clone(),
                pointer: Point::new(110, 110),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdatePointer {
                pointer: Point::new(135, 95),
                viewport,
            },
        );
        assert_eq!(window(&state, &win).position, Point::new(125, 85));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdatePointer {
                pointer: Point::new(5000, -400),
                viewport,
            },
        );
        assert_eq!(window(&state, &win).position, Point::new(200, 0));

        reduce(&mut state, &mut interaction, DesktopAction::EndPointer);
        assert!(interaction.is_idle());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdatePointer {
                pointer: Point::new(10, 10),
                viewport,
            },
        );
        assert_eq!(window(&state, &win).position, Point::new(200, 0));
    }

    #[test]
    fn drag_start_raises_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: Point::new(120, 110),
            },
        );

        assert!(window(&state, &a).z_order > window(&state, &b).z_order);
        assert_eq!(state.focused_window_id(), Some(&a));
    }

    #[test]
    fn maximized_window_does_not_start_a_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "a");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                window_id: win.clone(),
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win.clone(),
                pointer: Point::new(120, 110),
            },
        );

        assert!(interaction.is_idle());
    }

    #[test]
    fn resize_from_north_west_keeps_south_east_corner_anchored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "a");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win.clone(),
                edge: ResizeEdge::NorthWest,
                pointer: Point::new(100, 100),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdatePointer {
                pointer: Point::new(2000, 2000),
                viewport: None,
            },
        );

        let entity = window(&state, &win);
        assert_eq!(entity.size, Size::new(300, 200));
        assert_eq!(entity.position, Point::new(600, 500));
        assert_eq!(entity.rect().right(), 900);
        assert_eq!(entity.rect().bottom(), 700);
    }

    #[test]
    fn non_resizable_window_ignores_resize_start() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let mut desc = descriptor("fixed");
        desc.resizable = Some(false);
        reduce(&mut state, &mut interaction, DesktopAction::OpenWindow(desc));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: WindowId::from("fixed"),
                edge: ResizeEdge::SouthEast,
                pointer: Point::new(900, 700),
            },
        );

        assert!(interaction.is_idle());
    }

    #[test]
    fn beginning_a_session_replaces_the_active_one() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a,
                pointer: Point::new(0, 0),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: b.clone(),
                pointer: Point::new(0, 0),
            },
        );

        let Some(PointerSession::MoveWindow(session)) = &interaction.active else {
            panic!("expected a move session");
        };
        assert_eq!(session.window_id, b);
    }

    #[test]
    fn closing_dragged_window_releases_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "a");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win.clone(),
                pointer: Point::new(0, 0),
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );

        assert!(interaction.is_idle());
        assert!(state.windows.is_empty());
    }

    #[test]
    fn focusing_closed_window_is_silent_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "a");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: win.clone(),
            },
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: win },
        );

        assert!(effects.is_empty());
        assert!(state.windows.is_empty());
        assert!(state.taskbar_items().is_empty());
    }

    #[test]
    fn taskbar_activation_restores_minimized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "a");
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: win.clone(),
            },
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateTaskbarItem {
                window_id: win.clone(),
            },
        );

        assert!(!window(&state, &win).minimized);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(win)]);
    }

    #[test]
    fn widget_drag_promotes_and_clamps() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for (id, kind) in [("clock", WidgetKind::Clock), ("cpu", WidgetKind::Cpu)] {
            state.widgets.insert(
                WidgetEntity {
                    id: WidgetId::from(id),
                    kind,
                    title: id.to_string(),
                    position: Point::new(20, 20),
                    size: Size::new(200, 100),
                    content: SurfaceContent::placeholder(id),
                },
                true,
            );
        }
        let clock = WidgetId::from("clock");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginWidgetDrag {
                widget_id: clock.clone(),
                pointer: Point::new(30, 30),
            },
        );
        assert_eq!(state.widgets.stack_index(&clock), Some(1));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdatePointer {
                pointer: Point::new(900, 10),
                viewport: Some(Viewport::new(800, 600)),
            },
        );

        assert_eq!(
            state.widgets.get(&clock).unwrap().position,
            Point::new(600, 0)
        );
    }

    #[test]
    fn start_menu_toggles_and_closes() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        reduce(&mut state, &mut interaction, DesktopAction::CloseStartMenu);
        assert!(!state.start_menu_open);
        reduce(&mut state, &mut interaction, DesktopAction::CloseStartMenu);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn notifications_push_and_dismiss_without_touching_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, "a");
        let windows_before = state.windows.clone();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PushNotification(NotificationRequest::new(
                NotificationKind::Success,
                "Scan complete",
                "No threats detected",
            )),
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::PushNotification(NotificationRequest::new(
                NotificationKind::Error,
                "Uplink lost",
                "Satellite offline",
            )),
        );

        assert!(effects.is_empty());
        let titles: Vec<&str> = state
            .notifications
            .entries()
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Scan complete", "Uplink lost"]);

        let first = state.notifications.entries()[0].id;
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DismissNotification {
                notification_id: first,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DismissNotification {
                notification_id: first,
            },
        );

        assert_eq!(state.notifications.len(), 1);
        assert_eq!(
            state.notifications.entries()[0].kind,
            NotificationKind::Error
        );
        assert_eq!(state.windows, windows_before);
        assert_eq!(state.focused_window_id(), Some(&win));
    }

    #[test]
    fn theme_switch_is_stored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(state.theme, DesktopTheme::Liquid);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetTheme {
                theme: DesktopTheme::Frost,
            },
        );

        assert_eq!(state.theme, DesktopTheme::Frost);
        assert_eq!(state.theme.token(), "frost");
    }
}
