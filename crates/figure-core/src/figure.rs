// File: crates/figure-core/src/figure.rs
// Summary: Figure handle and the spec-building pipeline (id, skeleton, params, tools).

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::id::{self, IdSeed};
use crate::model::{self, FigureModel, ModelRef, PLOT_TYPE};
use crate::params::{self, ParamProblem};
use crate::theme::{self, GlobalDefaults, Theme};
use crate::tools::{self, Tool};
use crate::types::{AxisPosition, AxisType, DataRange, HEIGHT, MIN_BORDER, PADDING_FACTOR, WIDTH};

/// Everything a caller can set when opening a figure. `Default` carries
/// the documented option table; construct with struct-update syntax.
///
/// Label semantics: `None` means "not decided yet, compute later";
/// `Some("")` means "explicitly suppressed" — the two must stay
/// distinguishable all the way through serialization.
#[derive(Clone, Debug)]
pub struct FigureOptions {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub xlab: Option<String>,
    pub ylab: Option<String>,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub padding_factor: f64,
    /// Outer bounds including borders; default to width/height when unset.
    pub plot_width: Option<u32>,
    pub plot_height: Option<u32>,
    pub xgrid: bool,
    pub ygrid: bool,
    pub xaxes: AxisPosition,
    pub yaxes: AxisPosition,
    /// Requested tool names, in attachment order. `None` disables the
    /// toolbar entirely (as does an empty list or a single "none").
    pub tools: Option<Vec<String>>,
    /// Theme name resolved against the presets; falls back to the
    /// process defaults when unset.
    pub theme: Option<String>,
    /// Open-ended bag of extra style parameters, filtered against the
    /// fixed schema at build time. The reserved key "type" overrides the
    /// root model type (specialized variants such as map plots).
    pub extra: Map<String, Value>,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            title: None,
            xlab: None,
            ylab: None,
            xlim: None,
            ylim: None,
            padding_factor: PADDING_FACTOR,
            plot_width: None,
            plot_height: None,
            xgrid: true,
            ygrid: true,
            xaxes: AxisPosition::Below,
            yaxes: AxisPosition::Left,
            tools: Some(tools::default_names()),
            theme: None,
            extra: Map::new(),
        }
    }
}

/// The chart-in-progress handle. Created once, then threaded through
/// layer/tool calls which return it updated; finally exported for the
/// renderer. Serializes as the `spec` payload of the export document.
#[derive(Clone, Debug, Serialize)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub plot_width: u32,
    pub plot_height: u32,
    pub title: Option<String>,
    pub xlab: Option<String>,
    pub ylab: Option<String>,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub padding_factor: f64,
    pub xgrid: bool,
    pub ygrid: bool,
    pub xaxes: AxisPosition,
    pub yaxes: AxisPosition,
    /// Tools actually attached, in order.
    pub tools: Vec<Tool>,
    pub theme: Theme,
    pub model: FigureModel,
    #[serde(rename = "ref")]
    pub ref_: ModelRef,
    pub id: String,
    pub elementid: String,
    pub time: DateTime<Utc>,

    // Bookkeeping populated by layer collaborators; initialized empty.
    pub layers: Map<String, Value>,
    pub data_sigs: BTreeMap<String, String>,
    pub glyph_x_ranges: BTreeMap<String, DataRange>,
    pub glyph_y_ranges: BTreeMap<String, DataRange>,
    pub x_axis_type: Option<AxisType>,
    pub y_axis_type: Option<AxisType>,
    pub has_x_axis: bool,
    pub has_y_axis: bool,
    pub has_x_range: bool,
    pub has_y_range: bool,

    #[serde(skip)]
    problems: Vec<ParamProblem>,
}

/// Exportable container crossing the boundary to the renderer.
#[derive(Clone, Debug, Serialize)]
pub struct FigureDoc {
    pub spec: Figure,
    pub elementid: String,
    pub modeltype: String,
    pub modelid: String,
}

impl Figure {
    /// Build a new figure specification. Never fails: invalid style
    /// parameters and unsupported tool names are diagnosed per entry and
    /// the build proceeds.
    pub fn new(opts: FigureOptions, defaults: &GlobalDefaults) -> Figure {
        // Root model type, overridable through the extra bag.
        let type_tag = opts
            .extra
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or(PLOT_TYPE)
            .to_string();

        let time = Utc::now();
        let seed = IdSeed {
            time_ns: time.timestamp_nanos_opt().unwrap_or_default(),
            title: opts.title.as_deref(),
            width: opts.width,
            height: opts.height,
        };
        let fig_id = id::generate(&seed, &type_tag);

        // Outer dimensions default to the intrinsic plot area.
        let plot_width = opts.plot_width.unwrap_or(opts.width);
        let plot_height = opts.plot_height.unwrap_or(opts.height);

        let mut plot = model::build_skeleton(
            &fig_id,
            opts.title.as_deref(),
            plot_width,
            plot_height,
            &type_tag,
        );
        let ref_ = plot.reference();

        let theme = match &opts.theme {
            Some(name) => theme::find(name),
            None => defaults.theme.clone(),
        };

        let toolbar_disabled = match &opts.tools {
            None => true,
            Some(names) => names.is_empty() || names.iter().all(|n| n == "none"),
        };

        // Validate the extra bag; a bad value drops only its own key.
        let validated = params::validate(&opts.extra);
        for problem in &validated.problems {
            tracing::warn!(%problem, "dropping invalid style parameter");
        }
        let mut accepted = validated.accepted;
        if accepted.is_empty() {
            accepted.insert("min_border".into(), json!(MIN_BORDER));
        }
        if toolbar_disabled {
            accepted.insert("toolbar_location".into(), json!("none"));
        }
        // Append-merge into the skeleton attributes; later keys win.
        for (key, value) in accepted {
            plot.attributes.insert(key, value);
        }

        let fig = Figure {
            width: opts.width,
            height: opts.height,
            plot_width,
            plot_height,
            title: opts.title,
            xlab: opts.xlab,
            ylab: opts.ylab,
            xlim: opts.xlim,
            ylim: opts.ylim,
            padding_factor: opts.padding_factor,
            xgrid: opts.xgrid,
            ygrid: opts.ygrid,
            xaxes: opts.xaxes,
            yaxes: opts.yaxes,
            tools: Vec::new(),
            theme,
            model: FigureModel { plot, nodes: BTreeMap::new() },
            ref_,
            id: fig_id,
            elementid: id::element_id(),
            time,
            layers: Map::new(),
            data_sigs: BTreeMap::new(),
            glyph_x_ranges: BTreeMap::new(),
            glyph_y_ranges: BTreeMap::new(),
            x_axis_type: None,
            y_axis_type: None,
            has_x_axis: false,
            has_y_axis: false,
            has_x_range: false,
            has_y_range: false,
            problems: validated.problems,
        };

        let requested = if toolbar_disabled {
            Vec::new()
        } else {
            opts.tools.unwrap_or_default()
        };
        tools::attach_tools(fig, &requested)
    }

    /// Style parameters that were recognized but failed validation.
    pub fn problems(&self) -> &[ParamProblem] {
        &self.problems
    }

    /// Package the figure for the rendering collaborator.
    pub fn export(&self) -> FigureDoc {
        FigureDoc {
            spec: self.clone(),
            elementid: self.elementid.clone(),
            modeltype: self.ref_.node_type.clone(),
            modelid: self.id.clone(),
        }
    }

    // ---- layer-collaborator bookkeeping ------------------------------

    /// Record a layer's x extent; unions with what is already tracked
    /// under the same layer id.
    pub fn update_x_range(&mut self, layer_id: &str, range: DataRange) {
        let merged = match self.glyph_x_ranges.get(layer_id) {
            Some(existing) => existing.union(&range),
            None => range,
        };
        self.glyph_x_ranges.insert(layer_id.to_string(), merged);
        self.has_x_range = true;
    }

    /// Record a layer's y extent.
    pub fn update_y_range(&mut self, layer_id: &str, range: DataRange) {
        let merged = match self.glyph_y_ranges.get(layer_id) {
            Some(existing) => existing.union(&range),
            None => range,
        };
        self.glyph_y_ranges.insert(layer_id.to_string(), merged);
        self.has_y_range = true;
    }

    /// Resolve the x axis scale kind the first time data of a known
    /// shape arrives; later layers cannot change it.
    pub fn resolve_x_axis_type(&mut self, axis_type: AxisType) {
        if self.x_axis_type.is_none() {
            self.x_axis_type = Some(axis_type);
        }
    }

    /// Resolve the y axis scale kind (first layer wins).
    pub fn resolve_y_axis_type(&mut self, axis_type: AxisType) {
        if self.y_axis_type.is_none() {
            self.y_axis_type = Some(axis_type);
        }
    }

    /// Park a glyph spec for later materialization (layers whose ranges
    /// depend on data not yet seen).
    pub fn defer_glyph(&mut self, layer_id: impl Into<String>, glyph: Value) {
        self.layers.insert(layer_id.into(), glyph);
    }

    /// Record a layer's data signature for dedup/caching. Returns false
    /// when the signature was already present (duplicate data).
    pub fn note_data_sig(&mut self, layer_id: impl Into<String>, sig: impl Into<String>) -> bool {
        let layer_id = layer_id.into();
        let sig = sig.into();
        if self.data_sigs.values().any(|s| *s == sig) {
            return false;
        }
        self.data_sigs.insert(layer_id, sig);
        true
    }

    /// Effective x limits: explicit `xlim` wins, else the padded union
    /// of accumulated layer ranges, else nothing yet.
    pub fn computed_xlim(&self) -> Option<(f64, f64)> {
        if self.xlim.is_some() {
            return self.xlim;
        }
        padded_union(self.glyph_x_ranges.values(), self.padding_factor)
    }

    /// Effective y limits (same policy as x).
    pub fn computed_ylim(&self) -> Option<(f64, f64)> {
        if self.ylim.is_some() {
            return self.ylim;
        }
        padded_union(self.glyph_y_ranges.values(), self.padding_factor)
    }
}

fn padded_union<'a>(
    ranges: impl Iterator<Item = &'a DataRange>,
    factor: f64,
) -> Option<(f64, f64)> {
    let mut acc: Option<DataRange> = None;
    for r in ranges {
        acc = Some(match acc {
            Some(existing) => existing.union(r),
            None => *r,
        });
    }
    acc.map(|r| {
        let padded = r.expand(factor);
        (padded.min, padded.max)
    })
}
