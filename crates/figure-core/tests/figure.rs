// File: crates/figure-core/tests/figure.rs
// Purpose: End-to-end figure construction: defaults, labels, params, export.

use figure_core::types::{AxisPosition, DataRange};
use figure_core::{Figure, FigureOptions, GlobalDefaults};
use serde_json::{json, Map, Value};

fn build(opts: FigureOptions) -> Figure {
    Figure::new(opts, &GlobalDefaults::default())
}

#[test]
fn option_table_defaults() {
    let opts = FigureOptions::default();
    assert_eq!(opts.width, 480);
    assert_eq!(opts.height, 520);
    assert_eq!(opts.padding_factor, 0.07);
    assert!(opts.xgrid && opts.ygrid);
    assert_eq!(opts.xaxes, AxisPosition::Below);
    assert_eq!(opts.yaxes, AxisPosition::Left);
    assert_eq!(
        opts.tools.as_deref(),
        Some(&["pan", "wheel_zoom", "box_zoom", "resize", "reset", "save"]
            .map(String::from)[..])
    );
}

#[test]
fn outer_dimensions_default_to_intrinsic() {
    let fig = build(FigureOptions { width: 300, height: 200, ..FigureOptions::default() });
    assert_eq!(fig.model.plot.attributes["plot_width"], json!(300));
    assert_eq!(fig.model.plot.attributes["plot_height"], json!(200));

    let fig = build(FigureOptions {
        width: 300,
        height: 200,
        plot_width: Some(340),
        plot_height: Some(260),
        ..FigureOptions::default()
    });
    assert_eq!(fig.model.plot.attributes["plot_width"], json!(340));
    assert_eq!(fig.model.plot.attributes["plot_height"], json!(260));
}

#[test]
fn omitted_and_suppressed_labels_stay_distinguishable() {
    let omitted = build(FigureOptions::default());
    assert_eq!(omitted.xlab, None);

    let suppressed = build(FigureOptions {
        xlab: Some(String::new()),
        ..FigureOptions::default()
    });
    assert_eq!(suppressed.xlab.as_deref(), Some(""));

    // ...and downstream, through serialization: null vs ""
    let a = serde_json::to_value(&omitted).expect("spec");
    let b = serde_json::to_value(&suppressed).expect("spec");
    assert!(a["xlab"].is_null());
    assert_eq!(b["xlab"], json!(""));
}

#[test]
fn figures_in_rapid_succession_get_distinct_identities() {
    let a = build(FigureOptions::default());
    let b = build(FigureOptions::default());
    assert_ne!(a.id, b.id);
    assert_ne!(a.elementid, b.elementid);
}

#[test]
fn unrecognized_extra_key_has_no_effect() {
    let mut extra = Map::new();
    extra.insert("not_a_real_param".into(), json!("whatever"));
    let fig = build(FigureOptions { extra, ..FigureOptions::default() });

    assert!(fig.problems().is_empty());
    assert!(fig.model.plot.attributes.get("not_a_real_param").is_none());
}

#[test]
fn empty_validated_params_inject_min_border() {
    let fig = build(FigureOptions::default());
    assert_eq!(fig.model.plot.attributes["min_border"], json!(4));

    // A surviving style parameter suppresses the injection
    let mut extra = Map::new();
    extra.insert("min_border_top".into(), json!(10));
    let fig = build(FigureOptions { extra, ..FigureOptions::default() });
    assert!(fig.model.plot.attributes.get("min_border").is_none());
    assert_eq!(fig.model.plot.attributes["min_border_top"], json!(10));
}

#[test]
fn invalid_param_fails_its_key_but_not_the_figure() {
    let mut extra = Map::new();
    extra.insert("min_border_left".into(), json!("abc"));
    let fig = build(FigureOptions {
        title: Some("still built".to_string()),
        extra,
        ..FigureOptions::default()
    });

    assert_eq!(fig.problems().len(), 1);
    assert_eq!(fig.problems()[0].key, "min_border_left");
    assert_eq!(fig.problems()[0].expected, "integer");
    // The rest of the figure is intact
    assert_eq!(fig.model.plot.attributes["title"], json!("still built"));
    assert!(fig.model.plot.attributes.get("min_border_left").is_none());
}

#[test]
fn disabled_tools_force_toolbar_location_none() {
    let mut extra = Map::new();
    extra.insert("toolbar_location".into(), json!("above"));
    let fig = build(FigureOptions { tools: None, extra, ..FigureOptions::default() });
    assert_eq!(fig.model.plot.attributes["toolbar_location"], json!("none"));
}

#[test]
fn validated_params_merge_into_plot_attributes() {
    let mut extra = Map::new();
    extra.insert("background_fill".into(), json!("#eeeeee"));
    extra.insert("title_text_font_size".into(), json!("14pt"));
    // Later keys win: plot_width from the extra bag replaces the skeleton's
    extra.insert("plot_width".into(), json!(999));
    let fig = build(FigureOptions { extra, ..FigureOptions::default() });

    let attrs = &fig.model.plot.attributes;
    assert_eq!(attrs["background_fill"], json!("#eeeeee"));
    assert_eq!(attrs["title_text_font_size"], json!("14pt"));
    assert_eq!(attrs["plot_width"], json!(999));
}

#[test]
fn map_plot_variant_resolves_through_the_type_override() {
    let mut extra = Map::new();
    extra.insert("type".into(), json!("GMapPlot"));
    let fig = build(FigureOptions { extra, ..FigureOptions::default() });

    assert_eq!(fig.ref_.node_type, "GMapPlot");
    assert_eq!(fig.ref_.subtype, None);
    assert_eq!(fig.model.plot.node_type, "GMapPlot");

    let plain = build(FigureOptions::default());
    assert_eq!(plain.ref_.node_type, "Plot");
    assert_eq!(plain.ref_.subtype.as_deref(), Some("Figure"));
}

#[test]
fn export_document_carries_the_boundary_fields() {
    let fig = build(FigureOptions { title: Some("doc".to_string()), ..FigureOptions::default() });
    let doc = serde_json::to_value(fig.export()).expect("export serializes");

    assert_eq!(doc["modeltype"], json!("Plot"));
    assert_eq!(doc["modelid"], Value::String(fig.id.clone()));
    assert_eq!(doc["elementid"], Value::String(fig.elementid.clone()));
    assert_ne!(doc["elementid"], doc["modelid"]);
    // The spec nests the full model; the root node lives under "plot"
    assert_eq!(doc["spec"]["model"]["plot"]["attributes"]["title"], json!("doc"));
    assert_eq!(doc["spec"]["ref"]["id"], Value::String(fig.id.clone()));
}

#[test]
fn fresh_figure_has_empty_bookkeeping() {
    let fig = build(FigureOptions::default());
    assert!(fig.layers.is_empty());
    assert!(fig.data_sigs.is_empty());
    assert!(fig.glyph_x_ranges.is_empty());
    assert!(fig.glyph_y_ranges.is_empty());
    assert_eq!(fig.x_axis_type, None);
    assert_eq!(fig.y_axis_type, None);
    assert!(!fig.has_x_axis && !fig.has_y_axis);
    assert!(!fig.has_x_range && !fig.has_y_range);
}

#[test]
fn limits_come_from_accumulated_ranges_with_padding() {
    let mut fig = build(FigureOptions::default());
    assert_eq!(fig.computed_xlim(), None);

    fig.update_x_range("layer1", DataRange::new(0.0, 10.0));
    fig.update_x_range("layer2", DataRange::new(-5.0, 2.0));
    assert!(fig.has_x_range);

    let (lo, hi) = fig.computed_xlim().expect("limits");
    // union is [-5, 10], padded by 0.07 of the span (15)
    assert!((lo - (-6.05)).abs() < 1e-9);
    assert!((hi - 11.05).abs() < 1e-9);

    // Explicit limits always win
    fig.xlim = Some((0.0, 1.0));
    assert_eq!(fig.computed_xlim(), Some((0.0, 1.0)));
}

#[test]
fn axis_type_resolution_is_first_wins() {
    use figure_core::types::AxisType;
    let mut fig = build(FigureOptions::default());
    fig.resolve_x_axis_type(AxisType::Categorical);
    fig.resolve_x_axis_type(AxisType::Numeric);
    assert_eq!(fig.x_axis_type, Some(AxisType::Categorical));
}

#[test]
fn data_signatures_dedup_across_layers() {
    let mut fig = build(FigureOptions::default());
    assert!(fig.note_data_sig("layer1", "sig-a"));
    assert!(!fig.note_data_sig("layer2", "sig-a"));
    assert!(fig.note_data_sig("layer2", "sig-b"));
    assert_eq!(fig.data_sigs.len(), 2);
}
