// File: crates/figure-core/src/params.rs
// Summary: Extra style-parameter schema and per-key validation/coercion.

use serde_json::{Map, Value};
use thiserror::Error;

/// Expected value kind for a recognized style parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Color,
    Int,
    NumDataSpec,
    String,
    FontSize,
    LineCap,
    LineDash,
    LineJoin,
    TextAlign,
    TextBaseline,
    FontStyle,
    ToolbarLocation,
    Logo,
    Bool,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Color => "color",
            ParamKind::Int => "integer",
            ParamKind::NumDataSpec => "number or per-datum spec",
            ParamKind::String => "string",
            ParamKind::FontSize => "font size string",
            ParamKind::LineCap => "line cap",
            ParamKind::LineDash => "line dash",
            ParamKind::LineJoin => "line join",
            ParamKind::TextAlign => "text align",
            ParamKind::TextBaseline => "text baseline",
            ParamKind::FontStyle => "font style",
            ParamKind::ToolbarLocation => "toolbar location",
            ParamKind::Logo => "logo choice",
            ParamKind::Bool => "boolean",
        }
    }
}

/// Fixed schema of recognized extra style parameters. Keys not listed
/// here are dropped silently (caller kwargs filtered to style attrs).
pub const SCHEMA: &[(&str, ParamKind)] = &[
    ("background_fill", ParamKind::Color),
    ("border_fill", ParamKind::Color),
    ("outline_line_color", ParamKind::Color),
    ("title_text_color", ParamKind::Color),
    ("min_border", ParamKind::Int),
    ("min_border_bottom", ParamKind::Int),
    ("min_border_left", ParamKind::Int),
    ("min_border_right", ParamKind::Int),
    ("min_border_top", ParamKind::Int),
    ("outline_line_dash_offset", ParamKind::Int),
    ("plot_width", ParamKind::Int),
    ("outline_line_alpha", ParamKind::NumDataSpec),
    ("title_text_alpha", ParamKind::NumDataSpec),
    ("outline_line_width", ParamKind::NumDataSpec),
    ("title_text_font", ParamKind::String),
    ("title_text_font_size", ParamKind::FontSize),
    ("outline_line_cap", ParamKind::LineCap),
    ("outline_line_dash", ParamKind::LineDash),
    ("outline_line_join", ParamKind::LineJoin),
    ("title_text_align", ParamKind::TextAlign),
    ("title_text_baseline", ParamKind::TextBaseline),
    ("title_text_font_style", ParamKind::FontStyle),
    ("toolbar_location", ParamKind::ToolbarLocation),
    ("logo", ParamKind::Logo),
    ("h_symmetry", ParamKind::Bool),
    ("v_symmetry", ParamKind::Bool),
];

/// Look up the expected kind for a recognized key.
pub fn kind_of(key: &str) -> Option<ParamKind> {
    SCHEMA.iter().find(|(k, _)| *k == key).map(|(_, kind)| *kind)
}

/// A single recognized key whose value failed its kind check.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("invalid value for `{key}` (expected {expected}): {value}")]
pub struct ParamProblem {
    pub key: String,
    pub expected: &'static str,
    pub value: Value,
}

/// Result of validating a raw parameter bag: accepted entries plus one
/// problem per recognized-but-invalid entry. A bad value fails only its
/// own key; the rest of the bag still validates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validated {
    pub accepted: Map<String, Value>,
    pub problems: Vec<ParamProblem>,
}

/// Validate a raw parameter bag against the fixed schema.
pub fn validate(raw: &Map<String, Value>) -> Validated {
    let mut out = Validated::default();
    for (key, value) in raw {
        let Some(kind) = kind_of(key) else {
            tracing::debug!(key = %key, "dropping unrecognized style parameter");
            continue;
        };
        match check(kind, value) {
            Some(normalized) => {
                out.accepted.insert(key.clone(), normalized);
            }
            None => out.problems.push(ParamProblem {
                key: key.clone(),
                expected: kind.as_str(),
                value: value.clone(),
            }),
        }
    }
    out
}

/// Check `value` against `kind`, returning the normalized value when it
/// passes.
fn check(kind: ParamKind, value: &Value) -> Option<Value> {
    match kind {
        ParamKind::Color => is_color(value).then(|| value.clone()),
        ParamKind::Int => coerce_int(value),
        ParamKind::NumDataSpec => is_num_or_spec(value).then(|| value.clone()),
        ParamKind::String => value.is_string().then(|| value.clone()),
        ParamKind::FontSize => is_font_size(value).then(|| value.clone()),
        ParamKind::LineCap => one_of(value, &["butt", "round", "square"]),
        ParamKind::LineDash => check_line_dash(value),
        ParamKind::LineJoin => one_of(value, &["miter", "round", "bevel"]),
        ParamKind::TextAlign => one_of(value, &["left", "right", "center"]),
        ParamKind::TextBaseline => one_of(
            value,
            &["top", "middle", "bottom", "alphabetic", "hanging", "ideographic"],
        ),
        ParamKind::FontStyle => one_of(value, &["normal", "italic", "bold"]),
        ParamKind::ToolbarLocation => {
            one_of(value, &["above", "below", "left", "right", "none"])
        }
        ParamKind::Logo => {
            if value.is_null() {
                Some(Value::Null)
            } else {
                one_of(value, &["normal", "grey"])
            }
        }
        ParamKind::Bool => value.is_boolean().then(|| value.clone()),
    }
}

/// A color is null (meaning "no paint") or a string in named, `#rgb`,
/// `#rrggbb`, or `rgb()`/`rgba()` form.
fn is_color(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            if let Some(hex) = s.strip_prefix('#') {
                let len = hex.len();
                (len == 3 || len == 6 || len == 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
            } else if s.starts_with("rgb(") || s.starts_with("rgba(") {
                s.ends_with(')')
            } else {
                // Named colors: letters only, non-empty.
                !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
            }
        }
        _ => false,
    }
}

/// Integers pass as-is; floats with zero fraction are coerced.
fn coerce_int(value: &Value) -> Option<Value> {
    if let Some(i) = value.as_i64() {
        return Some(Value::from(i));
    }
    if let Some(f) = value.as_f64() {
        if f.fract() == 0.0 && f.is_finite() {
            return Some(Value::from(f as i64));
        }
    }
    None
}

/// A numeric value, an array of numbers, or a per-datum spec object
/// carrying a `field` or `value` entry.
fn is_num_or_spec(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::Array(items) => items.iter().all(Value::is_number),
        Value::Object(map) => map.contains_key("field") || map.contains_key("value"),
        _ => false,
    }
}

/// Font sizes look like "12pt": a number followed by pt/px/em/%.
fn is_font_size(value: &Value) -> bool {
    let Some(s) = value.as_str() else { return false };
    for unit in ["pt", "px", "em", "%"] {
        if let Some(num) = s.strip_suffix(unit) {
            return !num.is_empty() && num.parse::<f64>().is_ok();
        }
    }
    false
}

/// Enumerated string check (exact match).
fn one_of(value: &Value, allowed: &[&str]) -> Option<Value> {
    let s = value.as_str()?;
    allowed.contains(&s).then(|| value.clone())
}

/// A dash pattern is either a named style or an explicit array of
/// integer on/off lengths.
fn check_line_dash(value: &Value) -> Option<Value> {
    match value {
        Value::String(_) => one_of(
            value,
            &["solid", "dashed", "dotted", "dotdash", "dashdot"],
        ),
        Value::Array(items) => items
            .iter()
            .all(|v| v.as_i64().is_some())
            .then(|| value.clone()),
        _ => None,
    }
}
