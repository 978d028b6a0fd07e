// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports the figure-spec builder API.

pub mod figure;
pub mod id;
pub mod model;
pub mod params;
pub mod theme;
pub mod tools;
pub mod types;

pub use figure::{Figure, FigureDoc, FigureOptions};
pub use model::{build_skeleton, FigureModel, ModelNode, ModelRef};
pub use params::{validate, ParamKind, ParamProblem, Validated};
pub use theme::{GlobalDefaults, Theme};
pub use tools::Tool;
pub use types::{AxisPosition, AxisType, DataRange};
