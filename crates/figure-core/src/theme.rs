// File: crates/figure-core/src/theme.rs
// Summary: Document-level styling themes and explicit process defaults.

use serde::Serialize;

/// Document-level style strings applied to a figure. Colors are CSS-form
/// strings because they land directly in the serialized attribute map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background_fill: &'static str,
    pub border_fill: &'static str,
    pub outline_line_color: &'static str,
    pub title_text_color: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background_fill: "#fafafc",
            border_fill: "#fafafc",
            outline_line_color: "#e6e6eb",
            title_text_color: "#14141e",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background_fill: "#121214",
            border_fill: "#121214",
            outline_line_color: "#28282d",
            title_text_color: "#ebebf5",
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

/// Process-wide defaults, passed explicitly to figure construction
/// instead of read from ambient global state. Read-only at build time,
/// so concurrent figure builds can share one instance freely.
#[derive(Clone, Debug)]
pub struct GlobalDefaults {
    pub theme: Theme,
}

impl Default for GlobalDefaults {
    fn default() -> Self {
        Self { theme: Theme::light() }
    }
}
