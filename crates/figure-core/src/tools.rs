// File: crates/figure-core/src/tools.rs
// Summary: Interactive tool set and sequential attachment onto a figure.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::figure::Figure;
use crate::id::{self, IdSeed};
use crate::model::ModelNode;

/// The supported interactive tools. Dispatch is a static enum-to-fn
/// table, never runtime name-to-symbol resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    Pan,
    WheelZoom,
    BoxZoom,
    Resize,
    Crosshair,
    BoxSelect,
    LassoSelect,
    Reset,
    Save,
}

pub const ALL: [Tool; 9] = [
    Tool::Pan,
    Tool::WheelZoom,
    Tool::BoxZoom,
    Tool::Resize,
    Tool::Crosshair,
    Tool::BoxSelect,
    Tool::LassoSelect,
    Tool::Reset,
    Tool::Save,
];

/// Tools attached when the caller does not ask for a specific set.
pub const DEFAULT: [Tool; 6] = [
    Tool::Pan,
    Tool::WheelZoom,
    Tool::BoxZoom,
    Tool::Resize,
    Tool::Reset,
    Tool::Save,
];

impl Tool {
    /// The caller-facing name, as accepted in tool request lists.
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pan => "pan",
            Tool::WheelZoom => "wheel_zoom",
            Tool::BoxZoom => "box_zoom",
            Tool::Resize => "resize",
            Tool::Crosshair => "crosshair",
            Tool::BoxSelect => "box_select",
            Tool::LassoSelect => "lasso_select",
            Tool::Reset => "reset",
            Tool::Save => "save",
        }
    }

    /// The model-node type tag the renderer expects for this tool.
    pub fn model_type(&self) -> &'static str {
        match self {
            Tool::Pan => "PanTool",
            Tool::WheelZoom => "WheelZoomTool",
            Tool::BoxZoom => "BoxZoomTool",
            Tool::Resize => "ResizeTool",
            Tool::Crosshair => "CrosshairTool",
            Tool::BoxSelect => "BoxSelectTool",
            Tool::LassoSelect => "LassoSelectTool",
            Tool::Reset => "ResetTool",
            Tool::Save => "PreviewSaveTool",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        ALL.iter().copied().find(|t| t.name() == name)
    }
}

/// Default tool request as a name list (the form callers pass around).
pub fn default_names() -> Vec<String> {
    DEFAULT.iter().map(|t| t.name().to_string()).collect()
}

type AttachFn = fn(Figure) -> Figure;

/// Static dispatch table: one attachment routine per tool.
fn dispatch(tool: Tool) -> AttachFn {
    match tool {
        Tool::Pan => attach_pan,
        Tool::WheelZoom => attach_wheel_zoom,
        Tool::BoxZoom => attach_box_zoom,
        Tool::Resize => attach_resize,
        Tool::Crosshair => attach_crosshair,
        Tool::BoxSelect => attach_box_select,
        Tool::LassoSelect => attach_lasso_select,
        Tool::Reset => attach_reset,
        Tool::Save => attach_save,
    }
}

/// Attach each requested tool in order, folding the figure through the
/// per-tool routines. Later tools see toolbar entries added by earlier
/// ones, so application is strictly sequential.
///
/// Unsupported names are diagnosed and skipped; attachment of the rest
/// proceeds.
pub fn attach_tools(mut fig: Figure, requested: &[String]) -> Figure {
    let rejected: Vec<&str> = requested
        .iter()
        .map(String::as_str)
        .filter(|&name| Tool::from_name(name).is_none())
        .collect();
    if !rejected.is_empty() {
        tracing::warn!(tools = ?rejected, "ignoring unsupported tools");
    }

    for name in requested {
        if let Some(tool) = Tool::from_name(name) {
            fig = dispatch(tool)(fig);
        }
    }
    fig
}

fn attach_pan(fig: Figure) -> Figure {
    attach_node(fig, Tool::Pan, Map::new())
}

fn attach_wheel_zoom(fig: Figure) -> Figure {
    attach_node(fig, Tool::WheelZoom, Map::new())
}

fn attach_box_zoom(fig: Figure) -> Figure {
    attach_node(fig, Tool::BoxZoom, Map::new())
}

fn attach_resize(fig: Figure) -> Figure {
    attach_node(fig, Tool::Resize, Map::new())
}

fn attach_crosshair(fig: Figure) -> Figure {
    attach_node(fig, Tool::Crosshair, Map::new())
}

fn attach_box_select(fig: Figure) -> Figure {
    let mut extra = Map::new();
    extra.insert("select_every_mousemove".into(), json!(false));
    attach_node(fig, Tool::BoxSelect, extra)
}

fn attach_lasso_select(fig: Figure) -> Figure {
    let mut extra = Map::new();
    extra.insert("select_every_mousemove".into(), json!(true));
    attach_node(fig, Tool::LassoSelect, extra)
}

fn attach_reset(fig: Figure) -> Figure {
    attach_node(fig, Tool::Reset, Map::new())
}

fn attach_save(fig: Figure) -> Figure {
    attach_node(fig, Tool::Save, Map::new())
}

/// Shared attachment body: mint a node for the tool, register it in the
/// model, and append its reference to the plot's `tools` list.
fn attach_node(mut fig: Figure, tool: Tool, extra: Map<String, Value>) -> Figure {
    let seed = IdSeed {
        time_ns: fig.time.timestamp_nanos_opt().unwrap_or_default(),
        title: fig.title.as_deref(),
        width: fig.width,
        height: fig.height,
    };
    let tool_id = id::generate(&seed, tool.model_type());

    let mut attributes = Map::new();
    attributes.insert("id".into(), Value::String(tool_id.clone()));
    attributes.insert("plot".into(), fig.ref_.to_json());
    for (key, value) in extra {
        attributes.insert(key, value);
    }
    attributes.insert("tags".into(), json!([]));
    attributes.insert("doc".into(), Value::Null);

    let node = ModelNode {
        node_type: tool.model_type().to_string(),
        id: tool_id.clone(),
        subtype: None,
        attributes,
    };

    if let Some(Value::Array(list)) = fig.model.plot.attributes.get_mut("tools") {
        list.push(node.reference().to_json());
    }
    fig.model.nodes.insert(tool_id, node);
    fig.tools.push(tool);
    fig
}
