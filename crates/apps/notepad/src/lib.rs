//! Notepad window contents: a single in-memory text document.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::ContentContext;
use leptos::*;

/// Text a fresh notepad opens with.
pub const WELCOME_TEXT: &str = "Welcome to BatOS Notepad!\n\n\
This is a sample application running in your Batcomputer desktop environment.\n\n\
You can:\n\
- Type and edit text\n\
- Save files (coming soon)\n\
- Open files (coming soon)\n\
- Experience the full desktop environment\n\n\
Enjoy exploring your new Batcomputer!";

/// Line and character counts shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    /// Newline-separated lines; empty text still has one line.
    pub lines: usize,
    /// Unicode scalar values.
    pub chars: usize,
}

/// Counts lines and characters of `text` the way the status bar reports them.
pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        lines: text.split('\n').count(),
        chars: text.chars().count(),
    }
}

#[component]
/// Notepad window contents.
pub fn NotepadApp(
    /// Mount context supplied by the desktop shell.
    context: ContentContext,
) -> impl IntoView {
    let editor_id = context.primary_input_dom_id();
    let text = create_rw_signal(WELCOME_TEXT.to_string());
    let notice = create_rw_signal::<Option<&'static str>>(None);
    let stats = Signal::derive(move || text.with(|text| text_stats(text)));

    view! {
        <div class="app-shell app-notepad-shell">
            <div class="app-toolbar">
                <button
                    type="button"
                    on:click=move |_| {
                        text.set(String::new());
                        notice.set(None);
                    }
                >
                    "New"
                </button>
                <button type="button" on:click=move |_| notice.set(Some("Open is coming soon"))>
                    "Open"
                </button>
                <button type="button" on:click=move |_| notice.set(Some("Save is coming soon"))>
                    "Save"
                </button>
                <span class="app-notice">{move || notice.get().unwrap_or_default()}</span>
            </div>

            <textarea
                id=editor_id
                class="notepad-editor app-field"
                placeholder="Start typing..."
                spellcheck="false"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>

            <div class="app-statusbar">
                <span>{move || format!("Lines: {}", stats.get().lines)}</span>
                <span>{move || format!("Characters: {}", stats.get().chars)}</span>
                <span>"BatOS Notepad v1.0"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stats_count_lines_like_the_status_bar() {
        assert_eq!(text_stats(""), TextStats { lines: 1, chars: 0 });
        assert_eq!(text_stats("a\nb\n"), TextStats { lines: 3, chars: 4 });
        assert_eq!(text_stats("héllo").chars, 5);
    }

    #[test]
    fn welcome_text_has_expected_shape() {
        let stats = text_stats(WELCOME_TEXT);
        assert_eq!(stats.lines, 11);
        assert!(WELCOME_TEXT.starts_with("Welcome to BatOS Notepad!"));
    }
}
