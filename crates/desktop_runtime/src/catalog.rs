//! Shell catalog: launchable apps, desktop widgets and shell chrome.
//!
//! The catalog is authored in `catalog.toml`, validated by the build script and embedded as JSON.

use std::sync::OnceLock;

use desktop_app_contract::SurfaceContent;
use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    DesktopTheme, Point, Size, WidgetEntity, WidgetId, WidgetKind, WindowDescriptor, WindowKind,
};

include!(concat!(env!("OUT_DIR"), "/shell_catalog_generated.rs"));

/// Catalog schema this runtime understands.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("shell catalog is malformed: {0}")]
    Malformed(String),
    #[error("shell catalog schema mismatch: expected {expected} found {found}")]
    SchemaMismatch { expected: u32, found: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskbarEdge {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellChrome {
    pub brand: String,
    pub taskbar_height: i32,
    #[serde(default)]
    pub taskbar_edge: TaskbarEdge,
    /// Colour scheme the desktop boots with.
    #[serde(default)]
    pub theme: DesktopTheme,
}

impl Default for ShellChrome {
    fn default() -> Self {
        Self {
            brand: "BATCOMPUTER".to_string(),
            taskbar_height: 48,
            taskbar_edge: TaskbarEdge::Top,
            theme: DesktopTheme::Liquid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub kind: Option<WindowKind>,
    /// Key resolved by [`crate::apps::app_content`].
    pub content: String,
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub min_size: Option<Size>,
    #[serde(default)]
    pub resizable: Option<bool>,
    #[serde(default)]
    pub draggable: Option<bool>,
    #[serde(default)]
    pub open_on_boot: bool,
    #[serde(default)]
    pub show_in_start_menu: bool,
}

impl AppEntry {
    /// Window request for this app carrying `content`.
    pub fn descriptor(&self, content: SurfaceContent) -> WindowDescriptor {
        WindowDescriptor {
            id: self.id.clone(),
            title: self.title.clone(),
            icon: self.icon.clone(),
            kind: self.kind.unwrap_or_default(),
            default_position: self.position,
            default_size: self.size,
            min_size: self.min_size,
            resizable: self.resizable,
            draggable: self.draggable,
            content,
        }
    }

    /// Case-insensitive match against the title and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetEntry {
    pub id: String,
    pub kind: WidgetKind,
    pub title: String,
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub visible: bool,
}

impl WidgetEntry {
    pub fn entity(&self, content: SurfaceContent) -> WidgetEntity {
        WidgetEntity {
            id: WidgetId::new(self.id.clone()),
            kind: self.kind,
            title: self.title.clone(),
            position: self.position,
            size: self.size,
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellCatalog {
    pub schema_version: u32,
    pub shell: ShellChrome,
    #[serde(default)]
    pub apps: Vec<AppEntry>,
    #[serde(default)]
    pub widgets: Vec<WidgetEntry>,
}

impl Default for ShellCatalog {
    fn default() -> Self {
        Self {
            schema_version: CATALOG_SCHEMA_VERSION,
            shell: ShellChrome::default(),
            apps: Vec::new(),
            widgets: Vec::new(),
        }
    }
}

impl ShellCatalog {
    pub fn app(&self, id: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.id == id)
    }

    pub fn start_menu_apps(&self) -> impl Iterator<Item = &AppEntry> + '_ {
        self.apps.iter().filter(|app| app.show_in_start_menu)
    }

    pub fn boot_apps(&self) -> impl Iterator<Item = &AppEntry> + '_ {
        self.apps.iter().filter(|app| app.open_on_boot)
    }

    /// Start menu entries matching `query`, in catalog order.
    pub fn search_apps(&self, query: &str) -> Vec<&AppEntry> {
        self.start_menu_apps()
            .filter(|app| app.matches(query))
            .collect()
    }
}

/// Parses a catalog JSON payload.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] when the payload does not deserialize and
/// [`CatalogError::SchemaMismatch`] when it was produced for another schema version.
pub fn parse_catalog(json: &str) -> Result<ShellCatalog, CatalogError> {
    let catalog: ShellCatalog =
        serde_json::from_str(json).map_err(|err| CatalogError::Malformed(err.to_string()))?;
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(CatalogError::SchemaMismatch {
            expected: CATALOG_SCHEMA_VERSION,
            found: catalog.schema_version,
        });
    }
    Ok(catalog)
}

/// The embedded catalog, or an empty shell when the embedded payload is unusable.
pub fn shell_catalog() -> &'static ShellCatalog {
    static CATALOG: OnceLock<ShellCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        parse_catalog(SHELL_CATALOG_JSON).unwrap_or_else(|err| {
            logging::warn!("{err}; starting with an empty desktop");
            ShellCatalog::default()
        })
    })
}
