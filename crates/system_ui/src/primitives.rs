//! Shared control and shell primitives.

use leptos::ev::{KeyboardEvent, MouseEvent, PointerEvent};
use leptos::*;

mod controls;
mod shell;

pub use controls::{Button, MenuItem, Switch, TextField, ToggleRow};
pub use shell::{
    DesktopBackdrop, DesktopRoot, DesktopWidgetLayer, DesktopWindowLayer, LauncherMenu,
    ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, Toast, ToastStack, WidgetFrame,
    WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet/toggle style button used inside chrome.
    Quiet,
    /// Destructive action, e.g. closing a window.
    Danger,
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn call_optional<T: 'static>(callback: Option<Callback<T>>, value: T) {
    if let Some(callback) = callback {
        callback.call(value);
    }
}
