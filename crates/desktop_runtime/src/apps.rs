//! Content dispatch: maps catalog content keys and widget kinds onto the crates that render them.

use desktop_app_contract::{ContentError, SurfaceContent};
use desktop_app_explorer::ExplorerApp;
use desktop_app_notepad::NotepadApp;
use desktop_app_system_info::SystemInfoApp;
use desktop_app_terminal::TerminalApp;
use desktop_widgets::{
    AlertWidget, CalendarWidget, ClockWidget, ConsoleWidget, CpuWidget, ProfileWidget, StatsWidget,
};
use leptos::*;

use crate::{catalog::AppEntry, components::WidgetSettingsPanel, model::WidgetKind};

/// Content key for windows whose provider is not bundled.
pub const OFFLINE_CONTENT_KEY: &str = "offline";

/// Resolves the window content for a catalog app.
///
/// Unknown keys resolve to placeholder content so the window still opens.
pub fn app_content(entry: &AppEntry) -> SurfaceContent {
    let label = entry.content.clone();
    match entry.content.as_str() {
        "terminal" => {
            SurfaceContent::from_view(label, |cx| view! { <TerminalApp context=cx.clone() /> })
        }
        "file-manager" => {
            SurfaceContent::from_view(label, |cx| view! { <ExplorerApp context=cx.clone() /> })
        }
        "notepad" => {
            SurfaceContent::from_view(label, |cx| view! { <NotepadApp context=cx.clone() /> })
        }
        "system-info" => {
            SurfaceContent::from_view(label, |cx| view! { <SystemInfoApp context=cx.clone() /> })
        }
        "settings" => SurfaceContent::from_view(label, |_| view! { <WidgetSettingsPanel /> }),
        OFFLINE_CONTENT_KEY => SurfaceContent::failing(
            entry.title.clone(),
            ContentError::Unavailable(entry.id.clone()),
        ),
        other => {
            logging::warn!("app `{}` has unknown content key `{other}`", entry.id);
            SurfaceContent::placeholder(entry.title.clone())
        }
    }
}

/// Resolves the body for a desktop widget.
///
/// Map and weather bodies need live feeds and render as offline placeholders.
pub fn widget_content(kind: WidgetKind) -> SurfaceContent {
    let label = kind.token();
    match kind {
        WidgetKind::Clock => {
            SurfaceContent::from_view(label, |cx| view! { <ClockWidget context=cx.clone() /> })
        }
        WidgetKind::Calendar => {
            SurfaceContent::from_view(label, |cx| view! { <CalendarWidget context=cx.clone() /> })
        }
        WidgetKind::Cpu => {
            SurfaceContent::from_view(label, |cx| view! { <CpuWidget context=cx.clone() /> })
        }
        WidgetKind::Console => {
            SurfaceContent::from_view(label, |cx| view! { <ConsoleWidget context=cx.clone() /> })
        }
        WidgetKind::Alert => {
            SurfaceContent::from_view(label, |cx| view! { <AlertWidget context=cx.clone() /> })
        }
        WidgetKind::Profile => {
            SurfaceContent::from_view(label, |cx| view! { <ProfileWidget context=cx.clone() /> })
        }
        WidgetKind::Stats => {
            SurfaceContent::from_view(label, |cx| view! { <StatsWidget context=cx.clone() /> })
        }
        WidgetKind::Map | WidgetKind::Weather => {
            SurfaceContent::failing(label, ContentError::Unavailable(label.to_string()))
        }
        WidgetKind::Custom => SurfaceContent::placeholder(label),
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ContentContext;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{parse_catalog, SHELL_CATALOG_JSON};

    #[test]
    fn offline_apps_report_unavailable_content() {
        let catalog = parse_catalog(SHELL_CATALOG_JSON).unwrap();
        let media = catalog.app("media-player").unwrap();

        let content = app_content(media);

        assert_eq!(content.label(), media.title);
        let Err(err) = content.render(&ContentContext::new("media-player")) else {
            panic!("offline content should not render");
        };
        assert_eq!(err, ContentError::Unavailable("media-player".to_string()));
    }

    #[test]
    fn catalog_content_keys_are_all_known() {
        let catalog = parse_catalog(SHELL_CATALOG_JSON).unwrap();

        for entry in &catalog.apps {
            let offline = entry.content == OFFLINE_CONTENT_KEY;
            assert_eq!(app_content(entry).label() == entry.title, offline);
        }
    }

    #[test]
    fn live_feed_widgets_are_unavailable() {
        assert!(widget_content(WidgetKind::Weather)
            .render(&ContentContext::new("weather-widget"))
            .is_err());
        assert_eq!(widget_content(WidgetKind::Clock).label(), "clock");
    }
}
