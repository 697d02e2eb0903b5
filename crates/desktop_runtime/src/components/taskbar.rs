use std::time::Duration;

use desktop_widgets::ClockSnapshot;
use system_ui::{Glyph, Taskbar, TaskbarButton, TaskbarSection};

use super::*;
use crate::{model::TaskbarItem, projection::TASKBAR_LAYER_Z};

fn taskbar_style(runtime: DesktopRuntimeContext) -> String {
    let host = runtime.host.get_value();
    let anchor = match host.taskbar_edge() {
        TaskbarEdge::Top => "top:0;",
        TaskbarEdge::Bottom => "bottom:0;",
    };
    format!(
        "{anchor}height:{}px;z-index:{};",
        host.taskbar_height(),
        TASKBAR_LAYER_Z
    )
}

fn taskbar_item_label(item: &TaskbarItem) -> String {
    if item.minimized {
        format!("{} (minimized)", item.title)
    } else {
        item.title.clone()
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let brand = runtime.catalog.shell.brand.clone();

    let clock = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let start_open = Signal::derive(move || state.with(|desktop| desktop.start_menu_open));
    let items = move || {
        state
            .with(|desktop| desktop.taskbar_items())
            .into_iter()
            .map(|item| {
                let window_id = item.window_id.clone();
                view! {
                    <TaskbarButton
                        aria_label=taskbar_item_label(&item)
                        title=item.title.clone()
                        selected=item.active
                        pressed=item.active
                        layout_class=if item.minimized { "is-minimized" } else { "" }
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::ActivateTaskbarItem {
                                window_id: window_id.clone(),
                            });
                        })
                    >
                        <Glyph icon=item.icon.clone() />
                        <span>{item.title.clone()}</span>
                    </TaskbarButton>
                }
            })
            .collect_view()
    };

    view! {
        <Taskbar
            layout_class="batcomputer-taskbar"
            style=taskbar_style(runtime)
            aria_label="Taskbar"
        >
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    ui_slot="start-button"
                    aria_label="Start menu"
                    pressed=start_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Glyph icon="bat" />
                    <span>{brand}</span>
                </TaskbarButton>
            </TaskbarSection>
            <TaskbarSection ui_slot="running" aria_label="Open windows">
                {items}
            </TaskbarSection>
            <TaskbarSection ui_slot="clock">
                <time aria-label=move || {
                    let now = clock.get();
                    format!("{}, {}", now.date_text(), now.time_text(false))
                }>
                    <span class="taskbar-clock-time">{move || clock.get().time_text(false)}</span>
                    <span class="taskbar-clock-date">{move || clock.get().date_text()}</span>
                </time>
            </TaskbarSection>
        </Taskbar>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimized_items_say_so() {
        let item = TaskbarItem {
            window_id: WindowId::new("terminal"),
            title: "Terminal".to_string(),
            icon: "terminal".to_string(),
            active: false,
            minimized: true,
        };

        assert_eq!(taskbar_item_label(&item), "Terminal (minimized)");
        assert_eq!(
            taskbar_item_label(&TaskbarItem {
                minimized: false,
                ..item
            }),
            "Terminal"
        );
    }
}
