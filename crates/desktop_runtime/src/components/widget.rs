use desktop_app_contract::ContentContext;
use system_ui::WidgetFrame;

use super::*;
use crate::projection::widget_frames;

#[component]
/// A draggable desktop widget. Its content mounts once; moves only restyle the frame.
pub(super) fn DesktopWidget(widget_id: WidgetId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let frame = create_memo({
        let widget_id = widget_id.clone();
        move |_| {
            runtime.state.with(|desktop| {
                widget_frames(desktop)
                    .into_iter()
                    .find(|frame| frame.id == widget_id)
            })
        }
    });

    let (title, kind, body) = runtime
        .state
        .with_untracked(|desktop| {
            desktop.widgets.get(&widget_id).map(|widget| {
                let context = ContentContext::new(widget.id.as_str());
                (
                    widget.title.clone(),
                    widget.kind.token(),
                    widget.content.render_or_placeholder(&context),
                )
            })
        })
        .unwrap_or_else(|| (String::new(), "custom", ().into_view()));

    let style = Signal::derive(move || {
        frame.with(|frame| {
            frame.as_ref().map_or_else(String::new, |frame| {
                format!("{}z-index:{};", frame.rect.style(), frame.z_index)
            })
        })
    });

    let begin_drag = Callback::new(move |ev: PointerEvent| {
        if let Some(pointer) = begin_pointer_session(runtime, &ev) {
            runtime.dispatch_action(DesktopAction::BeginWidgetDrag {
                widget_id: widget_id.clone(),
                pointer,
            });
        }
    });

    view! {
        <WidgetFrame
            layout_class="desktop-widget"
            style=style
            aria_label=title
            widget_kind=kind
            on_pointerdown=begin_drag
        >
            {body}
        </WidgetFrame>
    }
}
