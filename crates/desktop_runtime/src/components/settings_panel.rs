use system_ui::{Button, Switch, ToggleRow};

use super::*;
use crate::{
    model::DesktopTheme,
    notifications::{NotificationKind, NotificationRequest},
};

const THEME_TOAST_MS: u32 = 2_500;

#[component]
/// Shell settings: the colour scheme picker and one visibility switch per catalog widget.
pub fn WidgetSettingsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let rows = runtime
        .catalog
        .widgets
        .iter()
        .map(|entry| {
            let widget_id = WidgetId::new(entry.id.clone());
            let checked = Signal::derive({
                let widget_id = widget_id.clone();
                move || state.with(|desktop| desktop.widgets.is_visible(&widget_id))
            });
            view! {
                <ToggleRow title=entry.title.clone() description=entry.kind.token() checked=checked>
                    <Switch
                        aria_label=format!("Show {}", entry.title)
                        checked=checked
                        on_toggle=Callback::new(move |visible: bool| {
                            runtime.dispatch_action(DesktopAction::SetWidgetVisible {
                                widget_id: widget_id.clone(),
                                visible,
                            });
                        })
                    />
                </ToggleRow>
            }
        })
        .collect_view();

    let themes = DesktopTheme::ALL
        .into_iter()
        .map(|theme| {
            let selected = Signal::derive(move || state.with(|desktop| desktop.theme == theme));
            view! {
                <Button
                    ui_slot="theme-option"
                    selected=selected
                    aria_label=format!("{} theme", theme.label())
                    on_click=Callback::new(move |_| {
                        if state.with_untracked(|desktop| desktop.theme == theme) {
                            return;
                        }
                        runtime.dispatch_action(DesktopAction::SetTheme { theme });
                        runtime.dispatch_action(DesktopAction::PushNotification(
                            NotificationRequest::new(
                                NotificationKind::Info,
                                "Theme changed",
                                format!("{} theme applied", theme.label()),
                            )
                            .with_duration(THEME_TOAST_MS),
                        ));
                    })
                >
                    {theme.label()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="widget-settings" data-surface="settings">
            <h2 class="widget-settings-title">"Theme"</h2>
            <div class="widget-settings-themes" role="group" aria-label="Theme">{themes}</div>
            <h2 class="widget-settings-title">"Desktop Widgets"</h2>
            <div class="widget-settings-list">{rows}</div>
        </div>
    }
}
