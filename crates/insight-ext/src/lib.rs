//! Pluggable visualizations and the reference point adaptation behind them.
//!
//! The hosting editor hands a visualization its current [`insight_model::ReferencePoint`] after
//! every bucket edit. The visualization answers with an
//! [`insight_model::ExtendedReferencePoint`]: buckets rearranged for its layout, sort items and
//! column widths that still make sense, and a `uiConfig` describing what the editor may do next.
//!
//! Invalid sort items and column widths are expected while the user rearranges buckets; they are
//! dropped silently (with a `debug` log) rather than reported as errors.

pub mod backend;
pub mod buckets;
pub mod column_widths;
pub mod derived;
mod error;
pub mod pivot_table;
pub mod settings;
pub mod sorting;
pub mod ui_config;
pub mod visualization;

pub use backend::{
    dummy_backend, AnalyticalBackend, AnalyticalWorkspace, CatalogAttribute, DataView,
    ExecutionFactory, PreparedExecution,
};
pub use error::{BackendError, VisualizationError, VisualizationResult};
pub use pivot_table::{PivotTableRenderProps, PluggablePivotTable};
pub use settings::FeatureFlags;
pub use visualization::{
    RenderedComponent, Renderer, VisCallbacks, VisConstruct, VisProps, Visualization,
    VisualizationEnvironment,
};
