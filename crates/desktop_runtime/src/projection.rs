//! Pure projection from desktop state to the frames the shell draws.
//!
//! Components never read entity geometry directly. They render [`WindowFrame`] and
//! [`WidgetFrame`] values, which already carry the maximize override, stacking and the resize
//! hit targets.

use desktop_app_contract::SurfaceContent;

use crate::{
    geometry::{ResizeEdge, WindowRect},
    model::{DesktopState, Viewport, WidgetId, WidgetKind, WindowEntity, WindowId, WindowKind},
};

/// Thickness of the edge resize hit targets.
pub const HANDLE_EDGE_PX: i32 = 6;
/// Side length of the corner resize hit targets.
pub const HANDLE_CORNER_PX: i32 = 14;

/// Stacking of the desktop layers. Every window draws above every widget.
pub const WIDGET_LAYER_Z: i32 = 1;
pub const WINDOW_LAYER_Z: i32 = 2;
pub const TASKBAR_LAYER_Z: i32 = 3;
pub const START_MENU_LAYER_Z: i32 = 4;
pub const NOTIFICATION_LAYER_Z: i32 = 5;

/// CSS box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl FrameRect {
    pub fn style(self) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

impl From<WindowRect> for FrameRect {
    fn from(rect: WindowRect) -> Self {
        Self {
            left: rect.x,
            top: rect.y,
            width: rect.w,
            height: rect.h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    Minimize,
    Maximize,
    Close,
}

impl WindowControl {
    pub fn label(self) -> &'static str {
        match self {
            Self::Minimize => "Minimize",
            Self::Maximize => "Maximize",
            Self::Close => "Close",
        }
    }
}

/// Resize hit target, positioned relative to the window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleFrame {
    pub edge: ResizeEdge,
    pub rect: FrameRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowFrame {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub kind: WindowKind,
    pub rect: FrameRect,
    pub z_index: u32,
    pub focused: bool,
    pub maximized: bool,
    pub draggable: bool,
    pub controls: Vec<WindowControl>,
    pub handles: Vec<HandleFrame>,
    pub content: SurfaceContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetFrame {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub title: String,
    pub rect: FrameRect,
    pub z_index: u32,
    pub content: SurfaceContent,
}

/// Frame a maximized window occupies: the whole work area.
pub fn maximized_rect(viewport: Viewport) -> FrameRect {
    viewport.rect().into()
}

/// Frames for every non-minimized window, back to front.
pub fn window_frames(state: &DesktopState, viewport: Viewport) -> Vec<WindowFrame> {
    state
        .windows
        .rendered_windows()
        .into_iter()
        .map(|window| window_frame(window, viewport))
        .collect()
}

pub fn window_frame(window: &WindowEntity, viewport: Viewport) -> WindowFrame {
    let rect = if window.maximized {
        maximized_rect(viewport)
    } else {
        window.rect().into()
    };
    let handles = if window.resizable() && !window.maximized {
        resize_handles(rect.width, rect.height)
    } else {
        Vec::new()
    };
    let mut controls = vec![WindowControl::Minimize];
    if window.resizable() {
        controls.push(WindowControl::Maximize);
    }
    controls.push(WindowControl::Close);

    WindowFrame {
        id: window.id.clone(),
        title: window.title.clone(),
        icon: window.icon.clone(),
        kind: window.kind,
        rect,
        z_index: window.z_order,
        focused: window.focused,
        maximized: window.maximized,
        draggable: window.draggable() && !window.maximized,
        controls,
        handles,
        content: window.content.clone(),
    }
}

/// Frames for visible widgets, bottom to top. Stacking follows list position.
pub fn widget_frames(state: &DesktopState) -> Vec<WidgetFrame> {
    state
        .widgets
        .widgets()
        .iter()
        .enumerate()
        .filter(|(_, widget)| state.widgets.is_visible(&widget.id))
        .map(|(index, widget)| WidgetFrame {
            id: widget.id.clone(),
            kind: widget.kind,
            title: widget.title.clone(),
            rect: widget.rect().into(),
            z_index: u32::try_from(index + 1).unwrap_or(u32::MAX),
            content: widget.content.clone(),
        })
        .collect()
}

/// Eight hit targets straddling the border of a `width` x `height` frame.
///
/// Corners take precedence; edge targets span only the stretch between them.
pub fn resize_handles(width: i32, height: i32) -> Vec<HandleFrame> {
    let half = HANDLE_EDGE_PX / 2;
    let corner = HANDLE_CORNER_PX;
    let span_w = (width - 2 * corner + 2 * half).max(0);
    let span_h = (height - 2 * corner + 2 * half).max(0);
    let far_x = width - corner + half;
    let far_y = height - corner + half;

    ResizeEdge::ALL
        .into_iter()
        .map(|edge| {
            let rect = match edge {
                ResizeEdge::North => FrameRect {
                    left: corner - half,
                    top: -half,
                    width: span_w,
                    height: HANDLE_EDGE_PX,
                },
                ResizeEdge::South => FrameRect {
                    left: corner - half,
                    top: height - HANDLE_EDGE_PX + half,
                    width: span_w,
                    height: HANDLE_EDGE_PX,
                },
                ResizeEdge::West => FrameRect {
                    left: -half,
                    top: corner - half,
                    width: HANDLE_EDGE_PX,
                    height: span_h,
                },
                ResizeEdge::East => FrameRect {
                    left: width - HANDLE_EDGE_PX + half,
                    top: corner - half,
                    width: HANDLE_EDGE_PX,
                    height: span_h,
                },
                ResizeEdge::NorthWest => corner_rect(-half, -half),
                ResizeEdge::NorthEast => corner_rect(far_x, -half),
                ResizeEdge::SouthWest => corner_rect(-half, far_y),
                ResizeEdge::SouthEast => corner_rect(far_x, far_y),
            };
            HandleFrame { edge, rect }
        })
        .collect()
}

fn corner_rect(left: i32, top: i32) -> FrameRect {
    FrameRect {
        left,
        top,
        width: HANDLE_CORNER_PX,
        height: HANDLE_CORNER_PX,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Point, Size, WidgetEntity, WindowDescriptor};

    fn state_with(ids: &[&str]) -> DesktopState {
        let mut state = DesktopState::default();
        for id in ids {
            state
                .windows
                .open(WindowDescriptor::new(
                    *id,
                    id.to_uppercase(),
                    SurfaceContent::placeholder(*id),
                ))
                .expect("open");
        }
        state
    }

    fn handle(handles: &[HandleFrame], edge: ResizeEdge) -> FrameRect {
        handles
            .iter()
            .find(|h| h.edge == edge)
            .map(|h| h.rect)
            .expect("handle")
    }

    #[test]
    fn frames_skip_minimized_and_follow_z_order() {
        let mut state = state_with(&["a", "b", "c"]);
        state.windows.focus(&WindowId::from("a"));
        state.windows.minimize(&WindowId::from("b"));

        let frames = window_frames(&state, Viewport::new(1280, 720));
        let ids: Vec<&str> = frames.iter().map(|f| f.id.as_str()).collect();

        assert_eq!(ids, vec!["c", "a"]);
        assert!(frames[1].focused);
        assert!(frames[0].z_index < frames[1].z_index);
    }

    #[test]
    fn maximized_frame_fills_work_area_without_handles() {
        let mut state = state_with(&["a"]);
        let id = WindowId::from("a");
        state.windows.toggle_maximize(&id);

        let frame = &window_frames(&state, Viewport::new(1280, 672))[0];

        assert_eq!(
            frame.rect,
            FrameRect {
                left: 0,
                top: 0,
                width: 1280,
                height: 672
            }
        );
        assert!(frame.handles.is_empty());
        assert!(!frame.draggable);
        assert_eq!(state.windows.get(&id).unwrap().position, Point::new(100, 100));
    }

    #[test]
    fn restored_frame_uses_stored_geometry() {
        let state = state_with(&["a"]);
        let frame = &window_frames(&state, Viewport::new(1280, 672))[0];

        assert_eq!(
            frame.rect,
            FrameRect {
                left: 100,
                top: 100,
                width: 800,
                height: 600
            }
        );
        assert_eq!(
            frame.controls,
            vec![
                WindowControl::Minimize,
                WindowControl::Maximize,
                WindowControl::Close
            ]
        );
        assert_eq!(frame.handles.len(), 8);
    }

    #[test]
    fn fixed_size_window_has_no_handles_or_maximize() {
        let mut state = DesktopState::default();
        let mut desc = WindowDescriptor::new("info", "Info", SurfaceContent::placeholder("info"));
        desc.resizable = Some(false);
        state.windows.open(desc).unwrap();

        let frame = &window_frames(&state, Viewport::new(1280, 672))[0];

        assert!(frame.handles.is_empty());
        assert_eq!(
            frame.controls,
            vec![WindowControl::Minimize, WindowControl::Close]
        );
    }

    #[test]
    fn handles_tile_the_border_without_gaps() {
        let handles = resize_handles(400, 300);
        let nw = handle(&handles, ResizeEdge::NorthWest);
        let n = handle(&handles, ResizeEdge::North);
        let ne = handle(&handles, ResizeEdge::NorthEast);
        let e = handle(&handles, ResizeEdge::East);
        let se = handle(&handles, ResizeEdge::SouthEast);

        assert_eq!(n.left, nw.left + nw.width);
        assert_eq!(ne.left, n.left + n.width);
        assert_eq!(e.top, ne.top + ne.height);
        assert_eq!(se.top, e.top + e.height);
        assert_eq!(se.left + se.width, 400 + HANDLE_EDGE_PX / 2);
        assert_eq!(se.top + se.height, 300 + HANDLE_EDGE_PX / 2);
    }

    #[test]
    fn widget_frames_use_list_order_and_skip_hidden() {
        let mut state = DesktopState::default();
        for (id, visible) in [("clock", true), ("map", false), ("cpu", true)] {
            state.widgets.insert(
                WidgetEntity {
                    id: WidgetId::from(id),
                    kind: WidgetKind::Custom,
                    title: id.to_string(),
                    position: Point::new(20, 20),
                    size: Size::new(200, 100),
                    content: SurfaceContent::placeholder(id),
                },
                visible,
            );
        }

        let frames = widget_frames(&state);

        let summary: Vec<(&str, u32)> = frames.iter().map(|f| (f.id.as_str(), f.z_index)).collect();
        assert_eq!(summary, vec![("clock", 1), ("cpu", 3)]);
    }
}
