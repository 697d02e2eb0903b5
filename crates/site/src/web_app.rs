use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

const SHELL_CSS: &str = include_str!("shell.css");

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Batcomputer" />
        <Meta name="description" content="Batcomputer desktop shell." />
        <Style id="batcomputer-shell">{SHELL_CSS}</Style>

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
