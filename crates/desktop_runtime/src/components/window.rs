use desktop_app_contract::ContentContext;
use leptos::ev::{MouseEvent, PointerEvent};
use system_ui::{
    ButtonVariant, Glyph, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

use super::*;
use crate::projection::{self, window_frame, HandleFrame, WindowControl};

fn control_action(control: WindowControl, window_id: WindowId) -> DesktopAction {
    match control {
        WindowControl::Minimize => DesktopAction::MinimizeWindow { window_id },
        WindowControl::Maximize => DesktopAction::ToggleMaximize { window_id },
        WindowControl::Close => DesktopAction::CloseWindow { window_id },
    }
}

fn control_glyph(control: WindowControl, maximized: bool) -> &'static str {
    match control {
        WindowControl::Minimize => "–",
        WindowControl::Maximize if maximized => "❐",
        WindowControl::Maximize => "□",
        WindowControl::Close => "×",
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let frame = create_memo({
        let window_id = window_id.clone();
        move |_| {
            let viewport = runtime.viewport.get();
            runtime.state.with(|desktop| {
                desktop
                    .windows
                    .get(&window_id)
                    .map(|window| (window_frame(window, viewport), window.minimized))
            })
        }
    });

    // Content mounts once per window; geometry changes only restyle the frame.
    let (icon, body) = runtime
        .state
        .with_untracked(|desktop| {
            desktop.windows.get(&window_id).map(|window| {
                let context = ContentContext::new(window.id.as_str());
                (window.icon.clone(), window.content.render_or_placeholder(&context))
            })
        })
        .unwrap_or_else(|| (String::new(), ().into_view()));

    let style = Signal::derive(move || {
        frame.with(|frame| {
            frame.as_ref().map_or_else(String::new, |(frame, _)| {
                format!("{}z-index:{};", frame.rect.style(), frame.z_index)
            })
        })
    });
    let title = Signal::derive(move || {
        frame.with(|frame| {
            frame
                .as_ref()
                .map(|(frame, _)| frame.title.clone())
                .unwrap_or_default()
        })
    });
    let frame_flag = move |read: fn(&projection::WindowFrame) -> bool| {
        Signal::derive(move || frame.with(|frame| frame.as_ref().is_some_and(|(f, _)| read(f))))
    };
    let focused = frame_flag(|frame| frame.focused);
    let maximized = frame_flag(|frame| frame.maximized);
    let draggable = frame_flag(|frame| frame.draggable);
    let has_maximize = frame_flag(|frame| frame.controls.contains(&WindowControl::Maximize));
    let minimized =
        Signal::derive(move || frame.with(|frame| frame.as_ref().map_or(true, |(_, min)| *min)));

    let focus = {
        let window_id = window_id.clone();
        Callback::new(move |_: PointerEvent| {
            if !focused.get_untracked() {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    window_id: window_id.clone(),
                });
            }
        })
    };
    let begin_move = {
        let window_id = window_id.clone();
        Callback::new(move |ev: PointerEvent| {
            if let Some(pointer) = begin_pointer_session(runtime, &ev) {
                runtime.dispatch_action(DesktopAction::BeginMove {
                    window_id: window_id.clone(),
                    pointer,
                });
            }
        })
    };
    let titlebar_double_click = {
        let window_id = window_id.clone();
        Callback::new(move |ev: MouseEvent| {
            ev.prevent_default();
            if has_maximize.get_untracked() {
                runtime.dispatch_action(DesktopAction::ToggleMaximize {
                    window_id: window_id.clone(),
                });
            }
        })
    };

    let controls = {
        let window_id = window_id.clone();
        move || {
            let (controls, is_maximized) = frame.with(|frame| {
                frame
                    .as_ref()
                    .map(|(frame, _)| (frame.controls.clone(), frame.maximized))
                    .unwrap_or_default()
            });
            controls
                .into_iter()
                .map(|control| {
                    let window_id = window_id.clone();
                    let label = match (control, is_maximized) {
                        (WindowControl::Maximize, true) => "Restore".to_string(),
                        _ => control.label().to_string(),
                    };
                    view! {
                        <WindowControlButton
                            aria_label=format!("{label} window")
                            variant=if control == WindowControl::Close {
                                ButtonVariant::Danger
                            } else {
                                ButtonVariant::Quiet
                            }
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(control_action(control, window_id.clone()));
                            })
                        >
                            {control_glyph(control, is_maximized)}
                        </WindowControlButton>
                    }
                })
                .collect_view()
        }
    };

    let handles = move || {
        let handles = frame.with(|frame| {
            frame
                .as_ref()
                .map(|(frame, _)| frame.handles.clone())
                .unwrap_or_default()
        });
        handles
            .into_iter()
            .map(|handle| {
                view! { <WindowResizeHandle window_id=window_id.clone() handle=handle /> }
            })
            .collect_view()
    };

    view! {
        <WindowFrame
            layout_class="desktop-window"
            style=style
            aria_label=title
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar
                draggable=draggable
                on_pointerdown=begin_move
                on_dblclick=titlebar_double_click
            >
                <WindowTitle>
                    <Glyph icon=icon />
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>{controls}</WindowControls>
            </WindowTitleBar>
            <WindowBody>{body}</WindowBody>
            {handles}
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, handle: HandleFrame) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let edge = handle.edge;

    let on_pointerdown = Callback::new(move |ev: PointerEvent| {
        if let Some(pointer) = begin_pointer_session(runtime, &ev) {
            runtime.dispatch_action(DesktopAction::BeginResize {
                window_id: window_id.clone(),
                edge,
                pointer,
            });
        }
    });

    view! {
        <ResizeHandle
            edge=edge.css_token()
            style=handle.rect.style()
            on_pointerdown=on_pointerdown
        />
    }
}
