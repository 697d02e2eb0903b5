//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, effect execution and the work-area
//! viewport signal. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    apps,
    catalog::{shell_catalog, ShellCatalog},
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, Viewport},
    notifications::{NotificationKind, NotificationRequest},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

const OFFLINE_TOAST_MS: u32 = 5_000;

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host helpers for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Shell catalog the desktop was booted from.
    pub catalog: &'static ShellCatalog,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer session signal.
    pub interaction: RwSignal<InteractionState>,
    /// Work area available to windows, refreshed on browser resize.
    pub viewport: RwSignal<Viewport>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Opens the catalog app `app_id`, or restores and focuses its existing window.
    pub fn open_app(&self, app_id: &str) {
        let Some(entry) = self.catalog.app(app_id) else {
            logging::warn!("no catalog app named `{app_id}`");
            return;
        };
        self.dispatch_action(DesktopAction::OpenWindow(
            entry.descriptor(apps::app_content(entry)),
        ));
        if entry.content == apps::OFFLINE_CONTENT_KEY {
            self.dispatch_action(DesktopAction::PushNotification(
                NotificationRequest::new(
                    NotificationKind::Warning,
                    format!("{} is offline", entry.title),
                    "No live feed is connected to this terminal.",
                )
                .with_duration(OFFLINE_TOAST_MS),
            ));
        }
    }
}

/// Builds the state the desktop starts in: catalog widgets plus the windows opened on boot.
///
/// Catalog entries the reducer rejects are logged and skipped.
pub fn boot_desktop_state(catalog: &ShellCatalog) -> (DesktopState, Vec<RuntimeEffect>) {
    let mut state = DesktopState {
        theme: catalog.shell.theme,
        ..DesktopState::default()
    };
    let mut interaction = InteractionState::default();
    let mut effects = Vec::new();

    for entry in &catalog.widgets {
        state
            .widgets
            .insert(entry.entity(apps::widget_content(entry.kind)), entry.visible);
    }
    for entry in catalog.boot_apps() {
        let action = DesktopAction::OpenWindow(entry.descriptor(apps::app_content(entry)));
        match reduce_desktop(&mut state, &mut interaction, action) {
            Ok(new_effects) => effects.extend(new_effects),
            Err(err) => logging::warn!("skipping boot app `{}`: {err}", entry.id),
        }
    }
    (state, effects)
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots the catalog desktop.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = shell_catalog();
    let host = DesktopHostContext::new(&catalog.shell);
    let (boot_state, boot_effects) = boot_desktop_state(catalog);

    let state = create_rw_signal(boot_state);
    let interaction = create_rw_signal(InteractionState::default());
    let viewport = create_rw_signal(host.work_area_viewport());
    let host = store_value(host);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if state.with_untracked(|current| current != &desktop) {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                host.get_value().run_runtime_effects(new_effects);
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(host.get_value().work_area_viewport());
    });
    on_cleanup(move || resize_listener.remove());

    let runtime = DesktopRuntimeContext {
        host,
        catalog,
        state,
        interaction,
        viewport,
        dispatch,
    };

    provide_context(runtime);
    host.get_value().run_runtime_effects(boot_effects);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        catalog::parse_catalog,
        model::{Point, WidgetId, WindowId},
    };

    #[test]
    fn boot_state_opens_boot_apps_and_seeds_widgets() {
        let catalog = parse_catalog(crate::catalog::SHELL_CATALOG_JSON).unwrap();

        let (state, effects) = boot_desktop_state(&catalog);

        let terminal = WindowId::from("terminal");
        assert_eq!(state.focused_window_id(), Some(&terminal));
        assert_eq!(state.windows.len(), 1);
        assert_eq!(
            state.windows.get(&terminal).unwrap().position,
            Point::new(200, 150)
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(terminal)]);
        assert_eq!(state.widgets.widgets().len(), catalog.widgets.len());
        assert!(state.widgets.is_visible(&WidgetId::from("clock-widget")));
        assert!(!state.widgets.is_visible(&WidgetId::from("map-widget")));
        assert!(!state.start_menu_open);
        assert_eq!(state.theme, catalog.shell.theme);
        assert!(state.notifications.is_empty());
    }
}
