//! Desktop shell UI composition and interaction surfaces.
//!
//! Components read [`crate::projection`] frames and dispatch [`DesktopAction`] values; they never
//! write geometry themselves.

mod notification_center;
mod settings_panel;
mod start_menu;
mod taskbar;
mod widget;
mod window;

use leptos::ev::PointerEvent;
use leptos::*;
use system_ui::{DesktopBackdrop, DesktopRoot, DesktopWidgetLayer, DesktopWindowLayer};

pub use self::settings_panel::WidgetSettingsPanel;
use self::{
    notification_center::NotificationCenter, start_menu::StartMenu, taskbar::DesktopTaskbar,
    widget::DesktopWidget, window::DesktopWindow,
};

use crate::{
    catalog::TaskbarEdge,
    model::{InteractionState, PointerPosition, WidgetId, WindowId},
    projection::{WIDGET_LAYER_Z, WINDOW_LAYER_Z},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &PointerEvent) {}

/// Primary button for mice, primary contact for touch and pen.
fn is_primary_press(ev: &PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Claims a pointer-down for a drag or resize, returning its work-area position.
fn begin_pointer_session(
    runtime: DesktopRuntimeContext,
    ev: &PointerEvent,
) -> Option<PointerPosition> {
    if !is_primary_press(ev) {
        return None;
    }
    try_set_pointer_capture(ev);
    ev.prevent_default();
    ev.stop_propagation();
    Some(pointer_in_work_area(runtime, ev))
}

fn pointer_in_work_area(runtime: DesktopRuntimeContext, ev: &PointerEvent) -> PointerPosition {
    runtime
        .host
        .get_value()
        .work_area_pointer(ev.client_x(), ev.client_y())
}

fn work_area_style(runtime: DesktopRuntimeContext) -> String {
    let host = runtime.host.get_value();
    match host.taskbar_edge() {
        TaskbarEdge::Top => format!("top:{}px;bottom:0;", host.taskbar_height()),
        TaskbarEdge::Bottom => format!("top:0;bottom:{}px;", host.taskbar_height()),
    }
}

fn taskbar_edge_token(edge: TaskbarEdge) -> &'static str {
    match edge {
        TaskbarEdge::Top => "top",
        TaskbarEdge::Bottom => "bottom",
    }
}

#[component]
/// Renders the full desktop shell: widget and window layers, taskbar, start menu and toasts.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = Callback::new(move |ev: PointerEvent| {
        if runtime.interaction.with_untracked(InteractionState::is_idle) {
            return;
        }
        runtime.dispatch_action(DesktopAction::UpdatePointer {
            pointer: pointer_in_work_area(runtime, &ev),
            viewport: Some(runtime.viewport.get_untracked()),
        });
    });
    let on_pointer_end = Callback::new(move |_: PointerEvent| {
        if !runtime.interaction.with_untracked(InteractionState::is_idle) {
            runtime.dispatch_action(DesktopAction::EndPointer);
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.with_untracked(|desktop| desktop.start_menu_open) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let widget_ids = move || {
        state.with(|desktop| {
            desktop
                .widgets
                .visible_widgets()
                .map(|widget| widget.id.clone())
                .collect::<Vec<WidgetId>>()
        })
    };
    let window_ids = move || {
        state.with(|desktop| {
            desktop
                .windows
                .windows()
                .iter()
                .map(|window| window.id.clone())
                .collect::<Vec<WindowId>>()
        })
    };

    view! {
        <DesktopRoot
            id="desktop-shell-root"
            layout_class="batcomputer"
            taskbar_edge=taskbar_edge_token(runtime.host.get_value().taskbar_edge())
            theme=Signal::derive(move || state.with(|desktop| desktop.theme.token().to_string()))
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
        >
            <DesktopBackdrop
                style=work_area_style(runtime)
                on_pointerdown=Callback::new(move |_| {
                    if state.with_untracked(|desktop| desktop.start_menu_open) {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                })
            >
                <DesktopWidgetLayer z_index=WIDGET_LAYER_Z>
                    <For each=widget_ids key=|widget_id| widget_id.clone() let:widget_id>
                        <DesktopWidget widget_id=widget_id />
                    </For>
                </DesktopWidgetLayer>
                <DesktopWindowLayer z_index=WINDOW_LAYER_Z>
                    <For each=window_ids key=|window_id| window_id.clone() let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <DesktopTaskbar />
            <StartMenu />
            <NotificationCenter />
        </DesktopRoot>
    }
}
