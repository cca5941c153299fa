//! Contract between the hosting editor and a pluggable visualization.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use insight_model::execution::{Insight, ObjRef};
use insight_model::{BucketItem, ExtendedReferencePoint, ReferencePoint, VisualizationProperties};
use serde::{Deserialize, Serialize};

use crate::backend::{AnalyticalBackend, ExecutionFactory};
use crate::error::{VisualizationError, VisualizationResult};
use crate::pivot_table::PivotTableRenderProps;
use crate::settings::FeatureFlags;

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationEnvironment {
    #[default]
    None,
    Dashboards,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomProps {
    pub sticky_header_offset: Option<u32>,
    pub drillable_items: Vec<ObjRef>,
    pub totals_edit_allowed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    pub decimal: String,
    pub thousand: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GdcConfig {
    pub separators: Option<Separators>,
}

/// Per-render options handed to [`Visualization::update`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisProps {
    pub dimensions: Option<Dimensions>,
    pub custom: CustomProps,
    pub locale: Option<String>,
    pub config: GdcConfig,
}

/// Data a visualization pushes back to the host, e.g. properties changed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PushData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<VisualizationProperties>,
}

pub trait VisCallbacks: Send + Sync {
    fn push_data(&self, data: PushData);
    fn on_error(&self, error: &VisualizationError);
    fn on_loading_changed(&self, is_loading: bool);
    fn after_render(&self);
}

#[derive(Debug, Clone)]
pub enum RenderedComponent {
    PivotTable(PivotTableRenderProps),
}

/// Draws components into host elements, addressed by selector.
pub trait Renderer: Send + Sync {
    fn render(&self, component: RenderedComponent, element: &str);
    fn unmount(&self, element: &str);
}

/// Everything a pluggable visualization is constructed with.
#[derive(Clone)]
pub struct VisConstruct {
    pub backend: Arc<dyn AnalyticalBackend>,
    pub project_id: String,
    pub element: String,
    pub config_panel_element: Option<String>,
    pub callbacks: Arc<dyn VisCallbacks>,
    pub environment: VisualizationEnvironment,
    pub locale: Option<String>,
    pub feature_flags: FeatureFlags,
    pub visualization_properties: VisualizationProperties,
    pub renderer: Arc<dyn Renderer>,
}

impl fmt::Debug for VisConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisConstruct")
            .field("backend", &self.backend)
            .field("project_id", &self.project_id)
            .field("element", &self.element)
            .field("config_panel_element", &self.config_panel_element)
            .field("environment", &self.environment)
            .field("locale", &self.locale)
            .field("feature_flags", &self.feature_flags)
            .finish_non_exhaustive()
    }
}

#[async_trait]
pub trait Visualization: Send + Sync {
    /// Re-renders the visualization for `insight`.
    ///
    /// Nothing is returned; failures are reported through [`VisCallbacks::on_error`].
    fn update(&self, props: &VisProps, insight: &Insight, execution_factory: &dyn ExecutionFactory);

    fn unmount(&self);

    /// Inserts derived (comparison) measures next to their masters.
    async fn add_new_derived_bucket_items(
        &self,
        reference_point: &ReferencePoint,
        new_derived_bucket_items: &[BucketItem],
    ) -> VisualizationResult<ReferencePoint>;

    /// Validates `reference_point` for this visualization.
    ///
    /// `previous_reference_point` is only given when the visualization type did not change.
    async fn get_extended_reference_point(
        &self,
        reference_point: &ReferencePoint,
        previous_reference_point: Option<&ReferencePoint>,
    ) -> VisualizationResult<ExtendedReferencePoint>;
}
