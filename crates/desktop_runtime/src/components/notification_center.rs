use std::time::Duration;

use system_ui::{Toast, ToastStack};

use super::*;
use crate::{notifications::NotificationId, projection::NOTIFICATION_LAYER_Z};

#[component]
/// Corner stack of the queued toasts, oldest at the top.
pub(super) fn NotificationCenter() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let notification_ids = move || {
        state.with(|desktop| {
            desktop
                .notifications
                .entries()
                .iter()
                .map(|notification| notification.id)
                .collect::<Vec<NotificationId>>()
        })
    };

    view! {
        <ToastStack z_index=NOTIFICATION_LAYER_Z aria_label="Notifications">
            <For each=notification_ids key=|id| *id let:notification_id>
                <NotificationToast notification_id=notification_id />
            </For>
        </ToastStack>
    }
}

#[component]
fn NotificationToast(notification_id: NotificationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(notification) = runtime.state.with_untracked(|desktop| {
        desktop
            .notifications
            .entries()
            .iter()
            .find(|entry| entry.id == notification_id)
            .cloned()
    }) else {
        return ().into_view();
    };

    let dismiss = move || {
        runtime.dispatch_action(DesktopAction::DismissNotification { notification_id });
    };
    if let Some(duration_ms) = notification.duration_ms {
        // Dismissing an id that is already gone is a no-op in the reducer.
        set_timeout(dismiss, Duration::from_millis(u64::from(duration_ms)));
    }

    let message = (!notification.message.is_empty()).then_some(notification.message);
    view! {
        <Toast
            kind=notification.kind.token()
            title=notification.title
            message=message
            on_dismiss=Callback::new(move |_| dismiss())
        />
    }
    .into_view()
}
