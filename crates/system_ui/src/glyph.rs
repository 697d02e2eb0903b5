//! Text glyphs standing in for app and widget icons.

use leptos::*;

use crate::primitives::merge_layout_class;

/// Glyph for a catalog icon key; unknown keys get a generic tile.
pub fn glyph_for(icon: &str) -> &'static str {
    match icon {
        "terminal" => ">_",
        "folder" => "▤",
        "notepad" => "✎",
        "monitor" => "▣",
        "settings" => "⚙",
        "media" => "▶",
        "assistant" => "◉",
        "bat" => "🦇",
        "info" => "ℹ",
        "success" => "✓",
        "warning" => "⚠",
        "error" => "⨯",
        _ => "◆",
    }
}

#[component]
/// Inline, decorative icon glyph.
pub fn Glyph(
    /// Catalog icon key.
    #[prop(into)]
    icon: String,
    /// Layout-only class hook.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-glyph", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="glyph"
            data-ui-icon=icon.clone()
        >
            {glyph_for(&icon)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_icons_have_distinct_glyphs() {
        let keys = [
            "terminal", "folder", "notepad", "monitor", "settings", "media", "assistant", "info",
            "success", "warning", "error",
        ];
        let mut glyphs: Vec<_> = keys.iter().map(|key| glyph_for(key)).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), keys.len());
        assert_eq!(glyph_for("unknown"), "◆");
    }
}
