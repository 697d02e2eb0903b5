//! Shared contract types between the desktop window manager runtime and the content it hosts.
//!
//! The window manager never inspects what it renders inside a frame. Windows and widgets carry a
//! [`SurfaceContent`] handle built by whoever opened them; the runtime only asks it to render into
//! a [`ContentContext`] and falls back to inert placeholder markup when rendering fails.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::*;
use thiserror::Error;

/// Errors a content provider may report instead of a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The provider has nothing to show for this surface.
    #[error("content `{0}` is unavailable")]
    Unavailable(String),
    /// The provider failed while building its view.
    #[error("content failed to render: {0}")]
    Render(String),
}

/// Result of rendering a content payload.
pub type ContentResult = Result<View, ContentError>;

type RenderFn = dyn Fn(&ContentContext) -> ContentResult;

/// Per-mount information handed to a content provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentContext {
    /// Id of the window or widget hosting the content.
    pub surface_id: String,
}

impl ContentContext {
    /// Creates a mount context for `surface_id`.
    pub fn new(surface_id: impl Into<String>) -> Self {
        Self {
            surface_id: surface_id.into(),
        }
    }

    /// DOM id the content should give its primary input so the shell can focus it.
    pub fn primary_input_dom_id(&self) -> String {
        window_primary_input_dom_id(&self.surface_id)
    }
}

/// Returns the DOM id used for the primary input element of the surface `surface_id`.
pub fn window_primary_input_dom_id(surface_id: &str) -> String {
    let slug: String = surface_id
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("surface-{slug}-primary-input")
}

/// Opaque, externally owned render payload for a window or widget.
///
/// Cloning is cheap; equality is identity of the underlying render function, so state containers
/// holding content can still derive [`PartialEq`].
#[derive(Clone)]
pub struct SurfaceContent {
    label: Rc<str>,
    render: Rc<RenderFn>,
}

impl SurfaceContent {
    /// Wraps a fallible render function.
    pub fn new<F, V>(label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&ContentContext) -> Result<V, ContentError> + 'static,
        V: IntoView,
    {
        Self {
            label: Rc::from(label.into()),
            render: Rc::new(move |cx: &ContentContext| render(cx).map(IntoView::into_view)),
        }
    }

    /// Wraps a render function that cannot fail.
    pub fn from_view<F, V>(label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&ContentContext) -> V + 'static,
        V: IntoView,
    {
        Self::new(label, move |cx: &ContentContext| Ok::<V, ContentError>(render(cx)))
    }

    /// Inert content used when a provider is missing.
    pub fn placeholder(label: impl Into<String>) -> Self {
        let label = label.into();
        let text = label.clone();
        Self::from_view(label, move |_| placeholder_view(&text))
    }

    /// Content that always reports `error`; the shell renders its placeholder instead.
    pub fn failing(label: impl Into<String>, error: ContentError) -> Self {
        Self::new(label, move |_| Err::<View, ContentError>(error.clone()))
    }

    /// Human-readable label for logs and placeholders.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Renders the payload for the surface described by `cx`.
    pub fn render(&self, cx: &ContentContext) -> ContentResult {
        (self.render)(cx)
    }

    /// Renders the payload, substituting placeholder markup when the provider fails.
    pub fn render_or_placeholder(&self, cx: &ContentContext) -> View {
        match self.render(cx) {
            Ok(view) => view,
            Err(err) => {
                logging::warn!("content `{}` for `{}` failed: {err}", self.label, cx.surface_id);
                placeholder_view(&self.label)
            }
        }
    }
}

impl Default for SurfaceContent {
    fn default() -> Self {
        Self::placeholder("empty")
    }
}

impl PartialEq for SurfaceContent {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for SurfaceContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceContent")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

fn placeholder_view(label: &str) -> View {
    let label = label.to_string();
    view! {
        <div class="surface-placeholder" data-ui-kind="surface-placeholder">
            <span>{label}</span>
            <span class="surface-placeholder-note">"OFFLINE"</span>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn primary_input_dom_id_is_slugged() {
        assert_eq!(
            window_primary_input_dom_id("File Manager"),
            "surface-file-manager-primary-input"
        );
        assert_eq!(
            ContentContext::new("terminal").primary_input_dom_id(),
            "surface-terminal-primary-input"
        );
    }

    #[test]
    fn content_equality_is_identity() {
        let a = SurfaceContent::placeholder("a");
        let b = SurfaceContent::placeholder("a");
        assert_eq!(a.clone(), a);
        assert_ne!(a, b);
        assert_eq!(a.label(), "a");
    }

    #[test]
    fn failing_content_reports_its_error() {
        let content = SurfaceContent::failing(
            "broken",
            ContentError::Unavailable("video embed".to_string()),
        );
        let Err(err) = content.render(&ContentContext::new("media")) else {
            panic!("content should fail");
        };
        assert_eq!(err, ContentError::Unavailable("video embed".to_string()));
    }
}
