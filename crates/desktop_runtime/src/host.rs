//! Host-side helpers for executing reducer effects and querying browser environment state.
//!
//! Everything here touches the DOM on `wasm32` and degrades to fixed values natively so the
//! reducer pipeline stays testable off-browser.

#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    catalog::{ShellChrome, TaskbarEdge},
    model::{Point, PointerPosition, Viewport, WindowId},
    reducer::RuntimeEffect,
};

const FALLBACK_WIDTH: i32 = 1024;
const FALLBACK_HEIGHT: i32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    taskbar_height: i32,
    taskbar_edge: TaskbarEdge,
}

impl DesktopHostContext {
    pub fn new(chrome: &ShellChrome) -> Self {
        Self {
            taskbar_height: chrome.taskbar_height.max(0),
            taskbar_edge: chrome.taskbar_edge,
        }
    }

    pub fn taskbar_height(&self) -> i32 {
        self.taskbar_height
    }

    pub fn taskbar_edge(&self) -> TaskbarEdge {
        self.taskbar_edge
    }

    /// Top-left corner of the work area in browser client coordinates.
    pub fn work_area_origin(&self) -> Point {
        match self.taskbar_edge {
            TaskbarEdge::Top => Point::new(0, self.taskbar_height),
            TaskbarEdge::Bottom => Point::new(0, 0),
        }
    }

    /// Converts browser client coordinates into work-area coordinates.
    pub fn work_area_pointer(&self, client_x: i32, client_y: i32) -> PointerPosition {
        let origin = self.work_area_origin();
        Point::new(client_x - origin.x, client_y - origin.y)
    }

    /// Current desktop work area: the browser viewport minus the taskbar strip.
    pub fn work_area_viewport(&self) -> Viewport {
        let (width, height) = browser_inner_size().unwrap_or((FALLBACK_WIDTH, FALLBACK_HEIGHT));
        Viewport::new(width, height - self.taskbar_height)
    }

    /// Executes reducer-emitted effects in emission order.
    pub fn run_runtime_effects(&self, effects: impl IntoIterator<Item = RuntimeEffect>) {
        for effect in effects {
            self.run_runtime_effect(effect);
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
        }
    }

    /// Moves keyboard focus into the primary input of `window_id`, if its content rendered one.
    ///
    /// Content opts in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on its
    /// primary text field. Focus is deferred a tick so freshly mounted windows are in the DOM.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            let Some(element) =
                document.get_element_by_id(&window_primary_input_dom_id(window_id.as_str()))
            else {
                return;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            let callback = Closure::once_into_js(move || {
                let _ = element.focus();
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }
}

fn browser_inner_size() -> Option<(i32, i32)> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()? as i32;
        let height = window.inner_height().ok()?.as_f64()? as i32;
        Some((width, height))
    }
    #[cfg(not(target_arch = "wasm32"))]
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_work_area_subtracts_taskbar() {
        let host = DesktopHostContext::new(&ShellChrome::default());

        let viewport = host.work_area_viewport();

        assert_eq!(viewport.width(), 1024);
        assert_eq!(viewport.height(), 768 - 48);
    }

    #[test]
    fn oversized_taskbar_still_leaves_a_pixel() {
        let host = DesktopHostContext::new(&ShellChrome {
            taskbar_height: 5000,
            ..ShellChrome::default()
        });

        assert_eq!(host.work_area_viewport().height(), 1);
    }

    #[test]
    fn pointer_is_shifted_below_a_top_taskbar() {
        let top = DesktopHostContext::new(&ShellChrome::default());
        let bottom = DesktopHostContext::new(&ShellChrome {
            taskbar_edge: TaskbarEdge::Bottom,
            ..ShellChrome::default()
        });

        assert_eq!(top.work_area_pointer(300, 100), Point::new(300, 52));
        assert_eq!(bottom.work_area_pointer(300, 100), Point::new(300, 100));
        assert_eq!(bottom.work_area_origin(), Point::new(0, 0));
    }
}
