// File: crates/figure-core/src/model.rs
// Summary: Model skeleton: the nested attribute tree the renderer walks.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Type tag selecting the specialized map-plot skeleton variant.
pub const MAP_PLOT_TYPE: &str = "GMapPlot";

/// Default root type tag for an ordinary figure.
pub const PLOT_TYPE: &str = "Plot";

/// One node of the scene-graph document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelNode {
    #[serde(rename = "type")]
    pub node_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub attributes: Map<String, Value>,
}

impl ModelNode {
    /// Lightweight pointer to this node for cross-referencing.
    pub fn reference(&self) -> ModelRef {
        ModelRef {
            node_type: self.node_type.clone(),
            id: self.id.clone(),
            subtype: self.subtype.clone(),
        }
    }
}

/// {type, id, subtype} pointer record identifying a model node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelRef {
    #[serde(rename = "type")]
    pub node_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

impl ModelRef {
    /// JSON form, built by hand so callers need no fallible conversion.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::String(self.node_type.clone()));
        map.insert("id".into(), Value::String(self.id.clone()));
        if let Some(subtype) = &self.subtype {
            map.insert("subtype".into(), Value::String(subtype.clone()));
        }
        Value::Object(map)
    }
}

/// The whole model: the root plot node plus every node later added by
/// layer/tool collaborators, keyed by node id. This is the literal
/// serialization target the renderer walks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FigureModel {
    pub plot: ModelNode,
    #[serde(flatten)]
    pub nodes: BTreeMap<String, ModelNode>,
}

/// Build the default attribute tree for a plot root node.
///
/// Every collection-valued slot is present-but-empty so serialization
/// emits `[]`/`{}` rather than omitting the key. The two extra-range
/// slots are keyed maps and must stay objects even when empty.
pub fn build_skeleton(
    id: &str,
    title: Option<&str>,
    width: u32,
    height: u32,
    type_tag: &str,
) -> ModelNode {
    let subtype = if type_tag == MAP_PLOT_TYPE {
        None
    } else {
        Some("Figure".to_string())
    };

    let mut attributes = Map::new();
    attributes.insert(
        "title".into(),
        match title {
            Some(t) => Value::String(t.to_string()),
            None => Value::Null,
        },
    );
    attributes.insert("id".into(), Value::String(id.to_string()));
    attributes.insert("plot_width".into(), json!(width));
    attributes.insert("plot_height".into(), json!(height));
    for slot in ["left", "below", "right", "above"] {
        attributes.insert(slot.into(), json!([]));
    }
    attributes.insert("renderers".into(), json!([]));
    attributes.insert("tools".into(), json!([]));
    attributes.insert("tool_events".into(), json!([]));
    attributes.insert("extra_x_ranges".into(), Value::Object(Map::new()));
    attributes.insert("extra_y_ranges".into(), Value::Object(Map::new()));
    attributes.insert("tags".into(), json!([]));
    attributes.insert("doc".into(), Value::Null);

    ModelNode {
        node_type: type_tag.to_string(),
        id: id.to_string(),
        subtype,
        attributes,
    }
}
