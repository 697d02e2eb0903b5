//! Batcomputer terminal window contents backed by a static, read-only command table.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod commands;

pub use commands::{CommandOutcome, TerminalSession, BANNER, ROOT_DIRECTORY};

use desktop_app_contract::ContentContext;
use leptos::ev::KeyboardEvent;
use leptos::*;

const MAX_TERMINAL_ENTRIES: usize = 200;

#[derive(Debug, Clone, PartialEq)]
struct TranscriptEntry {
    id: usize,
    cwd: String,
    command: Option<String>,
    output: Vec<String>,
}

fn banner_entry(id: usize) -> TranscriptEntry {
    TranscriptEntry {
        id,
        cwd: ROOT_DIRECTORY.to_string(),
        command: None,
        output: BANNER.iter().map(|line| line.to_string()).collect(),
    }
}

fn now_text() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(
            js_sys::Date::new_0().to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "date unavailable".to_string()
    }
}

#[component]
/// Terminal window contents.
///
/// The input carries the surface's primary input id so the shell can focus it when the window
/// gains focus.
pub fn TerminalApp(
    /// Mount context supplied by the desktop shell.
    context: ContentContext,
) -> impl IntoView {
    let input_id = context.primary_input_dom_id();
    let session = store_value(TerminalSession::default());
    let cwd = create_rw_signal(ROOT_DIRECTORY.to_string());
    let input = create_rw_signal(String::new());
    let next_entry_id = store_value(1usize);
    let transcript = create_rw_signal(vec![banner_entry(0)]);

    let submit = move |line: String| {
        let prompt_cwd = cwd.get_untracked();
        let Some((outcome, new_cwd)) = session.try_update_value(|session| {
            let outcome = session.execute(&line, now_text);
            (outcome, session.cwd().to_string())
        }) else {
            return;
        };
        input.set(String::new());
        match outcome {
            CommandOutcome::Ignored => {}
            CommandOutcome::Clear => transcript.set(Vec::new()),
            CommandOutcome::Output(output) => {
                let id = next_entry_id.get_value();
                next_entry_id.set_value(id + 1);
                transcript.update(|entries| {
                    entries.push(TranscriptEntry {
                        id,
                        cwd: prompt_cwd,
                        command: Some(line.trim().to_string()),
                        output,
                    });
                    if entries.len() > MAX_TERMINAL_ENTRIES {
                        let overflow = entries.len() - MAX_TERMINAL_ENTRIES;
                        entries.drain(0..overflow);
                    }
                });
            }
        }
        cwd.set(new_cwd);
    };

    let recall = move |backwards: bool| {
        let recalled = session.try_update_value(|session| {
            let entry = if backwards {
                session.history_previous()
            } else {
                session.history_next()
            };
            entry.map(str::to_string)
        });
        input.set(recalled.flatten().unwrap_or_default());
    };

    view! {
        <div class="app-shell app-terminal-shell">
            <div class="terminal-screen" role="log" aria-live="polite">
                <For each=move || transcript.get() key=|entry| entry.id let:entry>
                    <div class="terminal-entry">
                        {entry.command.clone().map(|command| view! {
                            <div class="terminal-prompt-line">
                                <span class="terminal-user">"darkknight@batcomputer"</span>
                                <span class="terminal-cwd">{format!(":{}$", entry.cwd)}</span>
                                <span class="terminal-command">{command}</span>
                            </div>
                        })}
                        {entry
                            .output
                            .iter()
                            .map(|line| view! { <div class="terminal-line">{line.clone()}</div> })
                            .collect_view()}
                    </div>
                </For>
            </div>

            <div class="terminal-input-row">
                <label class="terminal-prompt" for=input_id.clone()>
                    {move || format!("darkknight@batcomputer:{}$", cwd.get())}
                </label>
                <input
                    id=input_id.clone()
                    class="terminal-input app-field"
                    type="text"
                    placeholder="Enter command..."
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                        "Enter" => submit(input.get_untracked()),
                        "ArrowUp" => {
                            ev.prevent_default();
                            recall(true);
                        }
                        "ArrowDown" => {
                            ev.prevent_default();
                            recall(false);
                        }
                        "l" | "L" if ev.ctrl_key() => {
                            ev.prevent_default();
                            transcript.set(Vec::new());
                        }
                        _ => {}
                    }
                />
            </div>
        </div>
    }
}
