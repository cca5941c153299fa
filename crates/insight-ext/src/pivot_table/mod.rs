//! The pluggable pivot table.
//!
//! Rows come from the `attribute` bucket, columns from the `columns` bucket, and measures are
//! laid out next to the column attributes. Adapting a reference point for the table:
//! - measures, rows and columns are read from whatever buckets the previous visualization used
//! - an item appears in one bucket only (measures first, then rows, then columns)
//! - sort items and column widths that no longer address the layout are dropped
//! - a default sort on the first row attribute is added when the user has no visible sort

mod config;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use insight_afm::{convert_execution, AfmExecution};
use insight_model::execution::{Dimension, Insight, ObjRef, MEASURE_GROUP_IDENTIFIER};
use insight_model::{
    Bucket, BucketFilter, BucketItem, BucketName, ColumnWidthItem, ExtendedReferencePoint,
    FiltersBucket, ReferencePoint, VisualizationProperties,
};

use crate::backend::{AnalyticalBackend, AnalyticalWorkspace, ExecutionFactory, PreparedExecution};
use crate::buckets::{
    get_column_attributes, get_measures, get_row_attributes, get_row_totals,
    remove_duplicate_bucket_items,
};
use crate::column_widths::adapt_column_widths;
use crate::derived::add_new_derived_bucket_items;
use crate::error::VisualizationResult;
use crate::settings::FeatureFlags;
use crate::sorting::{adapt_sort_items, add_default_sort, contains_item};
use crate::ui_config::pivot_table_ui_config;
use crate::visualization::{
    PushData, RenderedComponent, Renderer, VisCallbacks, VisConstruct, VisProps, Visualization,
    VisualizationEnvironment, DEFAULT_LOCALE,
};

pub use config::{
    create_pivot_table_config, ColumnSizing, DefaultColumnWidth, MenuConfig, PivotTableConfig,
};

/// Called by the table with the full list of column widths after the user resized a column.
pub type ColumnResizedCallback = Arc<dyn Fn(Vec<ColumnWidthItem>) + Send + Sync>;

/// Everything the pivot table component is rendered with.
#[derive(Clone)]
pub struct PivotTableRenderProps {
    pub execution: PreparedExecution,
    /// AFM payload the table sends to the backend for `execution`.
    pub afm: AfmExecution,
    pub drillable_items: Vec<ObjRef>,
    pub locale: String,
    pub config: PivotTableConfig,
    pub totals_edit_allowed: bool,
    pub on_column_resized: Option<ColumnResizedCallback>,
}

impl fmt::Debug for PivotTableRenderProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PivotTableRenderProps")
            .field("execution", &self.execution)
            .field("afm", &self.afm)
            .field("drillable_items", &self.drillable_items)
            .field("locale", &self.locale)
            .field("config", &self.config)
            .field("totals_edit_allowed", &self.totals_edit_allowed)
            .field("on_column_resized", &self.on_column_resized.is_some())
            .finish()
    }
}

pub struct PluggablePivotTable {
    backend: Arc<dyn AnalyticalBackend>,
    project_id: String,
    element: String,
    callbacks: Arc<dyn VisCallbacks>,
    environment: VisualizationEnvironment,
    locale: Option<String>,
    feature_flags: FeatureFlags,
    visualization_properties: VisualizationProperties,
    renderer: Arc<dyn Renderer>,
}

impl PluggablePivotTable {
    pub fn new(construct: VisConstruct) -> Self {
        Self {
            backend: construct.backend,
            project_id: construct.project_id,
            element: construct.element,
            callbacks: construct.callbacks,
            environment: construct.environment,
            locale: construct.locale,
            feature_flags: construct.feature_flags,
            visualization_properties: construct.visualization_properties,
            renderer: construct.renderer,
        }
    }

    pub fn feature_flags(&self) -> &FeatureFlags {
        &self.feature_flags
    }

    pub fn workspace(&self) -> Arc<dyn AnalyticalWorkspace> {
        self.backend.workspace(&self.project_id)
    }

    /// Synchronous core of [`Visualization::get_extended_reference_point`].
    pub fn extend_reference_point(
        &self,
        reference_point: &ReferencePoint,
        previous_reference_point: Option<&ReferencePoint>,
    ) -> ExtendedReferencePoint {
        let mut seen = HashSet::new();
        let measures = remove_duplicate_bucket_items(get_measures(&reference_point.buckets), &mut seen);
        let row_attributes =
            remove_duplicate_bucket_items(get_row_attributes(&reference_point.buckets), &mut seen);
        let column_attributes = remove_duplicate_bucket_items(
            get_column_attributes(&reference_point.buckets),
            &mut seen,
        );
        let previous_row_attributes = previous_reference_point
            .map(|previous| get_row_attributes(&previous.buckets))
            .unwrap_or_default();

        let filters = sanitize_filters(&reference_point.filters, &measures);
        let active_filters = filters.active_filters();

        let properties = reference_point.properties();
        let sort_items = add_default_sort(
            &adapt_sort_items(
                properties.sort_items(),
                &measures,
                &row_attributes,
                &column_attributes,
            ),
            &active_filters,
            &row_attributes,
            &previous_row_attributes,
        );
        let column_widths = adapt_column_widths(
            properties.column_widths(),
            &measures,
            &row_attributes,
            &column_attributes,
        );

        let ui_config = pivot_table_ui_config(row_attributes.len() == 1);
        let totals = get_row_totals(&reference_point.buckets);

        ExtendedReferencePoint {
            buckets: vec![
                Bucket::named(BucketName::Measures, measures),
                Bucket::named(BucketName::Attribute, row_attributes).with_totals(totals),
                Bucket::named(BucketName::Columns, column_attributes),
            ],
            filters,
            properties: Some(
                properties
                    .with_sort_items(sort_items)
                    .with_column_widths(column_widths),
            ),
            ui_config,
        }
    }

    /// Render props for `insight`, or `None` when there is nothing to show.
    pub fn render_props(
        &self,
        props: &VisProps,
        insight: &Insight,
        execution_factory: &dyn ExecutionFactory,
    ) -> VisualizationResult<Option<PivotTableRenderProps>> {
        if insight.has_no_measures_and_attributes() {
            log::debug!("insight `{}` has no data to render", insight.identifier);
            return Ok(None);
        }

        let execution = execution_factory
            .for_insight(insight, &[])
            .with_dimensions(pivot_table_dimensions(insight));
        let afm = convert_execution(execution.definition())?;

        let properties = if insight.properties.is_empty() {
            &self.visualization_properties
        } else {
            &insight.properties
        };
        let column_widths = properties
            .controls
            .as_ref()
            .and_then(|controls| controls.column_widths.as_deref());
        let config = create_pivot_table_config(
            &props.config,
            self.environment,
            &self.feature_flags,
            column_widths,
        );

        let on_column_resized = self
            .feature_flags
            .enable_table_columns_manual_resizing
            .then(|| self.column_resized_callback(properties.clone()));

        let locale = props
            .locale
            .clone()
            .or_else(|| self.locale.clone())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Some(PivotTableRenderProps {
            execution,
            afm,
            drillable_items: props.custom.drillable_items.clone(),
            locale,
            config,
            totals_edit_allowed: props.custom.totals_edit_allowed.unwrap_or(false),
            on_column_resized,
        }))
    }

    fn column_resized_callback(&self, properties: VisualizationProperties) -> ColumnResizedCallback {
        let callbacks = Arc::clone(&self.callbacks);
        Arc::new(move |column_widths| {
            callbacks.push_data(PushData {
                properties: Some(properties.with_column_widths(column_widths)),
            });
        })
    }
}

#[async_trait]
impl Visualization for PluggablePivotTable {
    fn update(&self, props: &VisProps, insight: &Insight, execution_factory: &dyn ExecutionFactory) {
        match self.render_props(props, insight, execution_factory) {
            Ok(Some(render_props)) => {
                self.renderer
                    .render(RenderedComponent::PivotTable(render_props), &self.element);
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("cannot render insight `{}`: {err}", insight.identifier);
                self.callbacks.on_error(&err);
            }
        }
    }

    fn unmount(&self) {
        self.renderer.unmount(&self.element);
    }

    async fn add_new_derived_bucket_items(
        &self,
        reference_point: &ReferencePoint,
        new_derived_bucket_items: &[BucketItem],
    ) -> VisualizationResult<ReferencePoint> {
        Ok(add_new_derived_bucket_items(
            reference_point,
            new_derived_bucket_items,
        ))
    }

    async fn get_extended_reference_point(
        &self,
        reference_point: &ReferencePoint,
        previous_reference_point: Option<&ReferencePoint>,
    ) -> VisualizationResult<ExtendedReferencePoint> {
        Ok(self.extend_reference_point(reference_point, previous_reference_point))
    }
}

/// Drops filter items holding measure value filters on measures that are gone.
fn sanitize_filters(filters: &FiltersBucket, measures: &[BucketItem]) -> FiltersBucket {
    let items = filters
        .items
        .iter()
        .filter(|item| {
            item.item
                .filters
                .iter()
                .filter_map(BucketFilter::as_measure_value_filter)
                .all(|filter| contains_item(measures, &filter.measure_local_identifier))
        })
        .cloned()
        .collect();

    FiltersBucket {
        items,
        ..filters.clone()
    }
}

/// Row attributes (with their totals) in the first dimension; column attributes followed by the
/// measure group in the second.
pub fn pivot_table_dimensions(insight: &Insight) -> Vec<Dimension> {
    let bucket_attributes = |name: BucketName| -> Vec<String> {
        insight
            .bucket(name.as_str())
            .map(|bucket| {
                bucket
                    .attributes()
                    .map(|attribute| attribute.local_identifier.clone())
                    .collect()
            })
            .unwrap_or_default()
    };

    let rows = Dimension {
        item_identifiers: bucket_attributes(BucketName::Attribute),
        totals: insight
            .bucket(BucketName::Attribute.as_str())
            .map(|bucket| bucket.totals.clone())
            .unwrap_or_default(),
    };

    let mut columns = bucket_attributes(BucketName::Columns);
    if !insight.measures().is_empty() {
        columns.push(MEASURE_GROUP_IDENTIFIER.to_string());
    }

    vec![rows, Dimension::new(columns)]
}
