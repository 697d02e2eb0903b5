use leptos::ev::KeyboardEvent;
use system_ui::{Glyph, LauncherMenu, MenuItem, TextField};

use super::*;
use crate::projection::START_MENU_LAYER_Z;

const SEARCH_INPUT_ID: &str = "start-menu-search";

fn start_menu_style(runtime: DesktopRuntimeContext) -> String {
    let host = runtime.host.get_value();
    let anchor = match host.taskbar_edge() {
        TaskbarEdge::Top => "top",
        TaskbarEdge::Bottom => "bottom",
    };
    format!(
        "{anchor}:{}px;left:0;z-index:{};",
        host.taskbar_height(),
        START_MENU_LAYER_Z
    )
}

#[component]
/// Launcher listing catalog apps, filtered by a title/description search.
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let catalog = runtime.catalog;
    let query = create_rw_signal(String::new());
    let open = move || runtime.state.with(|desktop| desktop.start_menu_open);

    create_effect(move |_| {
        if !open() {
            query.set(String::new());
        }
    });

    let launch = move |app_id: &str| {
        runtime.open_app(app_id);
        query.set(String::new());
    };
    let on_keydown = Callback::new(move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            let first = catalog
                .search_apps(&query.get_untracked())
                .first()
                .map(|app| app.id.clone());
            if let Some(app_id) = first {
                ev.prevent_default();
                launch(&app_id);
            }
        }
        "Escape" => {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
        _ => {}
    });

    let results = move || {
        let apps = catalog.search_apps(&query.get());
        if apps.is_empty() {
            return view! { <p class="start-menu-empty">"No applications found"</p> }.into_view();
        }
        apps.into_iter()
            .map(|app| {
                let app_id = app.id.clone();
                view! {
                    <MenuItem
                        layout_class="start-menu-item"
                        aria_label=app.title.clone()
                        on_click=Callback::new(move |_| launch(&app_id))
                    >
                        <Glyph icon=app.icon.clone() />
                        <span class="start-menu-copy">
                            <span class="start-menu-title">{app.title.clone()}</span>
                            <span class="start-menu-description">{app.description.clone()}</span>
                        </span>
                    </MenuItem>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=open fallback=|| ()>
            <LauncherMenu
                layout_class="start-menu"
                style=start_menu_style(runtime)
                aria_label="Start menu"
            >
                <div class="start-menu-header">{catalog.shell.brand.clone()}</div>
                <TextField
                    id=SEARCH_INPUT_ID
                    placeholder="Search applications..."
                    aria_label="Search applications"
                    value=query
                    on_input=Callback::new(move |value: String| query.set(value))
                    on_keydown=on_keydown
                />
                <div class="start-menu-results">{results}</div>
            </LauncherMenu>
        </Show>
    }
}
