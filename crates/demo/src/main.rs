// File: crates/demo/src/main.rs
// Summary: Demo builds a styled figure with tools and prints the JSON export document.

use anyhow::{Context, Result};
use figure_core::{Figure, FigureOptions, GlobalDefaults};
use serde_json::{json, Map, Value};

fn main() -> Result<()> {
    // Optional theme name from CLI ("light"/"dark")
    let theme = std::env::args().nth(1);

    let mut extra = Map::new();
    extra.insert("background_fill".into(), json!("#fdf6e3"));
    extra.insert("title_text_font_size".into(), json!("14pt"));
    extra.insert("min_border_left".into(), json!(8));
    // Unrecognized keys are filtered out, bad values are diagnosed.
    extra.insert("not_a_real_param".into(), json!(1));
    extra.insert("logo".into(), Value::Null);

    let opts = FigureOptions {
        title: Some("Demo figure".to_string()),
        xlab: Some("time".to_string()),
        ylab: Some("value".to_string()),
        tools: Some(vec![
            "pan".to_string(),
            "wheel_zoom".to_string(),
            "box_select".to_string(),
            "reset".to_string(),
            "bogus_tool".to_string(),
        ]),
        theme,
        extra,
        ..FigureOptions::default()
    };

    let fig = Figure::new(opts, &GlobalDefaults::default());
    for problem in fig.problems() {
        eprintln!("style parameter dropped: {problem}");
    }

    let doc = fig.export();
    let rendered =
        serde_json::to_string_pretty(&doc).context("serializing export document")?;
    println!("{rendered}");
    Ok(())
}
