use std::fmt;

use desktop_app_contract::SurfaceContent;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{DragAnchor, ResizeAnchor, ResizeEdge, WindowRect},
    notifications::NotificationQueue,
    widgets::WidgetStore,
    window_manager::WindowStore,
};

pub const DEFAULT_WINDOW_POSITION: Point = Point { x: 100, y: 100 };
pub const DEFAULT_WINDOW_SIZE: Size = Size {
    width: 800,
    height: 600,
};
pub const DEFAULT_MIN_WINDOW_SIZE: Size = Size {
    width: 300,
    height: 200,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub String);

impl WidgetId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Integer pixel coordinate, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pointer location in desktop work-area coordinates.
pub type PointerPosition = Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Raises each dimension to at least the matching dimension of `min`.
    pub fn floored(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Dimensions of the desktop work area supplied by the host.
///
/// Degenerate host measurements are floored at one pixel so clamping never works with an empty
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: i32,
    height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(self) -> i32 {
        self.width
    }

    pub fn height(self) -> i32 {
        self.height
    }

    pub fn rect(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width,
            h: self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    #[default]
    Application,
    Terminal,
    FileBrowser,
    WidgetHost,
}

impl WindowKind {
    pub fn token(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Terminal => "terminal",
            Self::FileBrowser => "file-browser",
            Self::WidgetHost => "widget-host",
        }
    }
}

/// Capabilities fixed when a window is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowCapabilities {
    pub resizable: bool,
    pub draggable: bool,
}

impl Default for WindowCapabilities {
    fn default() -> Self {
        Self {
            resizable: true,
            draggable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowEntity {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub kind: WindowKind,
    pub position: Point,
    pub size: Size,
    pub min_size: Size,
    pub minimized: bool,
    pub maximized: bool,
    pub focused: bool,
    pub z_order: u32,
    capabilities: WindowCapabilities,
    pub content: SurfaceContent,
}

impl WindowEntity {
    pub(crate) fn new(id: WindowId, descriptor: WindowDescriptor, z_order: u32) -> Self {
        let min_size = descriptor.min_size.unwrap_or(DEFAULT_MIN_WINDOW_SIZE);
        Self {
            id,
            title: descriptor.title,
            icon: descriptor.icon,
            kind: descriptor.kind,
            position: descriptor.default_position.unwrap_or(DEFAULT_WINDOW_POSITION),
            size: descriptor
                .default_size
                .unwrap_or(DEFAULT_WINDOW_SIZE)
                .floored(min_size),
            min_size,
            minimized: false,
            maximized: false,
            focused: true,
            z_order,
            capabilities: WindowCapabilities {
                resizable: descriptor.resizable.unwrap_or(true),
                draggable: descriptor.draggable.unwrap_or(true),
            },
            content: descriptor.content,
        }
    }

    pub fn capabilities(&self) -> WindowCapabilities {
        self.capabilities
    }

    pub fn resizable(&self) -> bool {
        self.capabilities.resizable
    }

    pub fn draggable(&self) -> bool {
        self.capabilities.draggable
    }

    pub fn rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }
}

/// Everything an opener supplies when asking for a window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDescriptor {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub kind: WindowKind,
    pub default_position: Option<Point>,
    pub default_size: Option<Size>,
    pub min_size: Option<Size>,
    pub resizable: Option<bool>,
    pub draggable: Option<bool>,
    pub content: SurfaceContent,
}

impl WindowDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: SurfaceContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: String::new(),
            kind: WindowKind::default(),
            default_position: None,
            default_size: None,
            min_size: None,
            resizable: None,
            draggable: None,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    Clock,
    Calendar,
    Cpu,
    Map,
    Console,
    Weather,
    Alert,
    Profile,
    Stats,
    Custom,
}

impl WidgetKind {
    pub fn token(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Calendar => "calendar",
            Self::Cpu => "cpu",
            Self::Map => "map",
            Self::Console => "console",
            Self::Weather => "weather",
            Self::Alert => "alert",
            Self::Profile => "profile",
            Self::Stats => "stats",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetEntity {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub content: SurfaceContent,
}

impl WidgetEntity {
    pub fn rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }
}

/// Taskbar button summary derived from an open window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarItem {
    pub window_id: WindowId,
    pub title: String,
    pub icon: String,
    pub active: bool,
    pub minimized: bool,
}

/// Shell colour scheme, read by every surface through the root `data-ui-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesktopTheme {
    /// Near-black glass.
    #[default]
    Liquid,
    /// Lighter slate glass.
    Frost,
}

impl DesktopTheme {
    pub const ALL: [DesktopTheme; 2] = [DesktopTheme::Liquid, DesktopTheme::Frost];

    pub fn token(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Frost => "frost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Liquid => "Liquid",
            Self::Frost => "Frost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    pub windows: WindowStore,
    pub widgets: WidgetStore,
    pub notifications: NotificationQueue,
    pub theme: DesktopTheme,
    pub start_menu_open: bool,
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows.focused_window_id()
    }

    pub fn taskbar_items(&self) -> Vec<TaskbarItem> {
        self.windows.taskbar_items()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub anchor: DragAnchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub anchor: ResizeAnchor,
    pub min_size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDragSession {
    pub widget_id: WidgetId,
    pub anchor: DragAnchor,
}

/// The single in-flight pointer gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerSession {
    MoveWindow(DragSession),
    ResizeWindow(ResizeSession),
    MoveWidget(WidgetDragSession),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub active: Option<PointerSession>,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }
}
