//! File browser window contents over the canned Batcave archive.

mod archive;

pub use archive::{glyph, listing, parent, ArchiveEntry, EntryKind, HOME_PATH};

use desktop_app_contract::ContentContext;
use leptos::*;

#[component]
pub fn ExplorerApp(context: ContentContext) -> impl IntoView {
    let current_path = create_rw_signal(HOME_PATH.to_string());
    let selected = create_rw_signal::<Option<&'static str>>(None);

    let navigate = move |path: String| {
        selected.set(None);
        current_path.set(path);
    };
    let entries = move || listing(&current_path.get()).to_vec();
    let open_folder = Callback::new(move |path: String| navigate(path));

    view! {
        <div class="app-shell app-explorer-shell" data-surface=context.surface_id>
            <div class="app-toolbar">
                <button
                    type="button"
                    disabled=move || parent(&current_path.get()).is_none()
                    on:click=move |_| {
                        let up = parent(&current_path.get_untracked()).map(str::to_string);
                        if let Some(up) = up {
                            navigate(up);
                        }
                    }
                >
                    "Back"
                </button>
                <button type="button" on:click=move |_| navigate(HOME_PATH.to_string())>"Home"</button>
                <div class="pane-path">{move || current_path.get()}</div>
            </div>

            <section class="explorer-pane">
                <Show
                    when=move || !listing(&current_path.get()).is_empty()
                    fallback=|| view! { <div class="details-empty">"This folder is empty"</div> }
                >
                    <ul class="explorer-grid" role="listbox" aria-label="Folder contents">
                        <For each=entries key=|entry| entry.path let:entry>
                            <ArchiveItem entry=entry selected=selected on_open=open_folder />
                        </For>
                    </ul>
                </Show>
            </section>

            <div class="app-statusbar">
                <span>{move || format!("{} item(s)", listing(&current_path.get()).len())}</span>
                <span>
                    {move || {
                        selected
                            .get()
                            .map(|path| format!("Selected: {path}"))
                            .unwrap_or_else(|| "Ready".to_string())
                    }}
                </span>
            </div>
        </div>
    }
}

#[component]
fn ArchiveItem(
    entry: ArchiveEntry,
    selected: RwSignal<Option<&'static str>>,
    on_open: Callback<String>,
) -> impl IntoView {
    let is_selected = Signal::derive(move || selected.get() == Some(entry.path));
    let details = match (entry.size, entry.modified) {
        (Some(size), Some(modified)) => format!("{size} - {modified}"),
        _ => String::new(),
    };
    view! {
        <li
            class=move || if is_selected.get() { "explorer-item selected" } else { "explorer-item" }
            on:mousedown=move |_| selected.set(Some(entry.path))
            on:dblclick=move |_| {
                if entry.kind == EntryKind::Folder {
                    on_open.call(entry.path.to_string());
                }
            }
        >
            <span class="explorer-glyph">{glyph(&entry)}</span>
            <span class="explorer-name">{entry.name}</span>
            <span class="explorer-meta">{details}</span>
        </li>
    }
}
