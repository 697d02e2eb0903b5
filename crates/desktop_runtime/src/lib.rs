//! Window and widget manager core of the Batcomputer desktop shell.
//!
//! State changes flow through [`reduce_desktop`]; components render [`projection`] frames and
//! dispatch [`DesktopAction`] values through [`DesktopRuntimeContext`].

pub mod apps;
pub mod catalog;
pub mod components;
pub mod geometry;
pub mod host;
pub mod model;
pub mod notifications;
pub mod projection;
pub mod reducer;
pub mod runtime_context;
pub mod widgets;
pub mod window_manager;
pub mod z_order;

pub use catalog::{shell_catalog, AppEntry, ShellCatalog, ShellChrome, TaskbarEdge, WidgetEntry};
pub use components::{
    use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell, WidgetSettingsPanel,
};
pub use model::*;
pub use notifications::{Notification, NotificationId, NotificationKind, NotificationRequest};
pub use reducer::{reduce_desktop, DesktopAction, DesktopError, RuntimeEffect};
