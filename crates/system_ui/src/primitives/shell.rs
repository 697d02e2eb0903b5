use super::*;
use crate::Glyph;

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Which screen edge the taskbar docks to (`top` or `bottom`).
    #[prop(optional)]
    taskbar_edge: Option<&'static str>,
    /// Colour scheme token every surface styles against.
    #[prop(optional, into)]
    theme: MaybeSignal<String>,
    #[prop(optional)] on_pointermove: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-ui-taskbar-edge=taskbar_edge
            data-ui-theme=move || theme.get()
            on:pointermove=move |ev| call_optional(on_pointermove, ev)
            on:pointerup=move |ev| call_optional(on_pointerup, ev)
            on:pointercancel=move |ev| call_optional(on_pointerup, ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Work area host: everything except the taskbar strip.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
            on:pointerdown=move |ev| call_optional(on_pointerdown, ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Widget stack host; always stacked beneath the window layer.
pub fn DesktopWidgetLayer(
    z_index: i32,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-widget-layer", layout_class)
            style=format!("z-index:{z_index};")
            data-ui-primitive="true"
            data-ui-kind="desktop-widget-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    z_index: i32,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            style=format!("z-index:{z_index};")
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            hidden=move || minimized.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| call_optional(on_pointerdown, ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive; the drag handle for its frame.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=move || bool_token(draggable.get())
            on:pointerdown=move |ev| call_optional(on_pointerdown, ev)
            on:dblclick=move |ev| call_optional(on_dblclick, ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Shared window title group.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button. Pointer-down never reaches the titlebar, so controls never drag.
pub fn WindowControlButton(
    #[prop(default = ButtonVariant::Quiet)] variant: ButtonVariant,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            aria_label=aria_label
            ui_slot="window-control"
            variant=variant
            on_pointerdown=Callback::new(|ev: PointerEvent| ev.stop_propagation())
            on_click=Callback::new(move |ev: MouseEvent| {
                ev.stop_propagation();
                call_optional(on_click, ev);
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Window content host.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Resize hit target positioned relative to its window frame.
pub fn ResizeHandle(
    /// CSS token of the edge, e.g. `nw`.
    edge: &'static str,
    #[prop(into)] style: String,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            style=style
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| call_optional(on_pointerdown, ev)
        ></div>
    }
}

#[component]
/// Desktop widget frame; the whole body is the drag handle.
pub fn WidgetFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] widget_kind: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <aside
            class=merge_layout_class("ui-widget-frame", layout_class)
            style=move || style.get()
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="widget-frame"
            data-ui-widget=widget_kind
            on:pointerdown=move |ev| call_optional(on_pointerdown, ev)
        >
            {children()}
        </aside>
    }
}

#[component]
/// Shared taskbar root.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-taskbar", layout_class)
            style=style
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Shared taskbar section.
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-section", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared taskbar button.
pub fn TaskbarButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=aria_label
            title=title
            selected=selected
            pressed=pressed
            ui_slot=ui_slot.unwrap_or("taskbar-button")
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| call_optional(on_click, ev))
        >
            {children()}
        </Button>
    }
}

#[component]
/// Launcher (start) menu surface.
pub fn LauncherMenu(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-launcher-menu", layout_class)
            style=style
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="launcher-menu"
            on:pointerdown=|ev: PointerEvent| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Corner stack of toast notifications, drawn above every desktop layer.
pub fn ToastStack(
    z_index: i32,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-toast-stack"
            style=format!("z-index:{z_index};")
            role="status"
            aria-live="polite"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toast-stack"
        >
            {children()}
        </section>
    }
}

#[component]
/// A single toast with a severity glyph and a dismiss control.
pub fn Toast(
    /// Severity token (`info`, `success`, `warning` or `error`); also the glyph key.
    kind: &'static str,
    #[prop(into)] title: String,
    #[prop(into, default = None)] message: Option<String>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <article
            class="ui-toast"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-variant=kind
        >
            <Glyph icon=kind />
            <div data-ui-slot="copy">
                <strong data-ui-slot="title">{title}</strong>
                {message.map(|message| view! { <p data-ui-slot="message">{message}</p> })}
            </div>
            <Button
                ui_slot="toast-dismiss"
                aria_label="Dismiss notification"
                variant=ButtonVariant::Quiet
                on_click=Callback::new(move |ev: MouseEvent| call_optional(on_dismiss, ev))
            >
                "×"
            </Button>
        </article>
    }
}
