//! Shared Leptos primitives for the desktop shell chrome.
//!
//! The crate owns the stable `data-ui-*` DOM contract the shell stylesheet targets: desktop
//! layers, window frames, widget frames, the taskbar, the launcher menu and toasts. Geometry
//! and state live in the runtime; primitives only render what they are handed.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod glyph;
mod primitives;

pub use glyph::{glyph_for, Glyph};
pub use primitives::{
    Button, ButtonVariant, DesktopBackdrop, DesktopRoot, DesktopWidgetLayer, DesktopWindowLayer,
    LauncherMenu, MenuItem, ResizeHandle, Switch, Taskbar, TaskbarButton, TaskbarSection,
    TextField, Toast, ToastStack, ToggleRow, WidgetFrame, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates composing the shell chrome.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, DesktopBackdrop, DesktopRoot, DesktopWidgetLayer,
        DesktopWindowLayer, Glyph, LauncherMenu, MenuItem, ResizeHandle, Switch, Taskbar,
        TaskbarButton, TaskbarSection, TextField, Toast, ToastStack, ToggleRow, WidgetFrame,
        WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
