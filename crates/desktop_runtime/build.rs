use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;
const WINDOW_KINDS: [&str; 4] = ["application", "terminal", "file-browser", "widget-host"];
const WIDGET_KINDS: [&str; 10] = [
    "clock", "calendar", "cpu", "map", "console", "weather", "alert", "profile", "stats", "custom",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Size {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Shell {
    brand: String,
    taskbar_height: i32,
    taskbar_edge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct App {
    id: String,
    title: String,
    icon: String,
    description: String,
    #[serde(default)]
    kind: Option<String>,
    content: String,
    #[serde(default)]
    position: Option<Point>,
    #[serde(default)]
    size: Option<Size>,
    #[serde(default)]
    min_size: Option<Size>,
    #[serde(default)]
    resizable: Option<bool>,
    #[serde(default)]
    draggable: Option<bool>,
    #[serde(default)]
    open_on_boot: bool,
    #[serde(default)]
    show_in_start_menu: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Widget {
    id: String,
    kind: String,
    title: String,
    position: Point,
    size: Size,
    #[serde(default)]
    visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Catalog {
    schema_version: u32,
    shell: Shell,
    #[serde(default)]
    apps: Vec<App>,
    #[serde(default)]
    widgets: Vec<Widget>,
}

fn validate(catalog: &Catalog) -> Result<(), String> {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(format!(
            "schema mismatch: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        ));
    }
    if catalog.shell.taskbar_height < 0 {
        return Err("taskbar_height must not be negative".to_string());
    }
    if !matches!(catalog.shell.taskbar_edge.as_str(), "top" | "bottom") {
        return Err(format!(
            "taskbar_edge must be `top` or `bottom`, found `{}`",
            catalog.shell.taskbar_edge
        ));
    }

    if let Some(theme) = &catalog.shell.theme {
        if !matches!(theme.as_str(), "liquid" | "frost") {
            return Err(format!("theme must be `liquid` or `frost`, found `{theme}`"));
        }
    }

    let mut seen = HashSet::new();
    for app in &catalog.apps {
        if app.id.trim().is_empty() {
            return Err(format!("app `{}` has a blank id", app.title));
        }
        if !seen.insert(app.id.as_str()) {
            return Err(format!("duplicate app id `{}`", app.id));
        }
        if let Some(kind) = &app.kind {
            if !WINDOW_KINDS.contains(&kind.as_str()) {
                return Err(format!("app `{}` has unknown kind `{kind}`", app.id));
            }
        }
        for size in [app.size, app.min_size].into_iter().flatten() {
            if size.width <= 0 || size.height <= 0 {
                return Err(format!("app `{}` has a non-positive size", app.id));
            }
        }
        if let (Some(size), Some(min)) = (app.size, app.min_size) {
            if size.width < min.width || size.height < min.height {
                return Err(format!("app `{}` default size is below its minimum", app.id));
            }
        }
    }

    let mut seen = HashSet::new();
    for widget in &catalog.widgets {
        if !seen.insert(widget.id.as_str()) {
            return Err(format!("duplicate widget id `{}`", widget.id));
        }
        if !WIDGET_KINDS.contains(&widget.kind.as_str()) {
            return Err(format!(
                "widget `{}` has unknown kind `{}`",
                widget.id, widget.kind
            ));
        }
        if widget.size.width <= 0 || widget.size.height <= 0 {
            return Err(format!("widget `{}` has a non-positive size", widget.id));
        }
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: Catalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&catalog) {
        panic!("invalid shell catalog {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&catalog).expect("serialize shell catalog");
    let generated = format!(
        "/// Build-time generated shell catalog JSON.\n\
pub const SHELL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
