//! The analytical backend as seen by pluggable visualizations.
//!
//! Implementations live outside this crate. The traits only describe what a visualization needs:
//! catalog lookups while adapting a reference point, and executions while rendering.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use insight_model::execution::{
    merge_filters, Dimension, ExecutionDefinition, Filter, Insight, ObjRef,
    MEASURE_GROUP_IDENTIFIER,
};
use insight_model::SortItem;
use serde::{Deserialize, Serialize};

use crate::error::BackendError;

pub trait AnalyticalBackend: fmt::Debug + Send + Sync {
    fn workspace(&self, id: &str) -> Arc<dyn AnalyticalWorkspace>;
}

#[async_trait]
pub trait AnalyticalWorkspace: fmt::Debug + Send + Sync {
    fn workspace(&self) -> &str;

    async fn catalog_attribute(&self, display_form: &ObjRef)
        -> Result<CatalogAttribute, BackendError>;

    /// Date granularities available for a date data set, e.g. `GDC.time.year`.
    async fn available_granularities(&self, data_set: &ObjRef)
        -> Result<Vec<String>, BackendError>;

    fn execution(&self) -> Arc<dyn ExecutionFactory>;
}

#[async_trait]
pub trait ExecutionFactory: fmt::Debug + Send + Sync {
    /// Describes the execution of `insight` with `filters` merged into its own filters.
    fn for_insight(&self, insight: &Insight, filters: &[Filter]) -> PreparedExecution;

    async fn execute(&self, execution: &PreparedExecution) -> Result<DataView, BackendError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAttribute {
    pub attribute: ObjRef,
    pub title: String,
    #[serde(default)]
    pub display_forms: Vec<ObjRef>,
}

/// What is going to be executed; building one never talks to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedExecution {
    definition: ExecutionDefinition,
}

impl PreparedExecution {
    pub fn new(definition: ExecutionDefinition) -> Self {
        Self { definition }
    }

    /// Default execution of an insight: all attributes in the first dimension, measures in the
    /// second.
    pub fn for_insight(workspace: &str, insight: &Insight, filters: &[Filter]) -> Self {
        let attributes: Vec<_> = insight.attributes().into_iter().cloned().collect();
        let measures: Vec<_> = insight.measures().into_iter().cloned().collect();

        let mut dimensions = vec![Dimension::new(
            attributes
                .iter()
                .map(|attribute| attribute.local_identifier.clone())
                .collect(),
        )];
        if !measures.is_empty() {
            dimensions.push(Dimension::new(vec![MEASURE_GROUP_IDENTIFIER.to_string()]));
        }

        Self::new(ExecutionDefinition {
            workspace: workspace.to_string(),
            attributes,
            measures,
            filters: merge_filters(&insight.filters, filters),
            sort_by: insight.sorts.clone(),
            dimensions,
        })
    }

    #[must_use]
    pub fn with_dimensions(self, dimensions: Vec<Dimension>) -> Self {
        Self {
            definition: ExecutionDefinition {
                dimensions,
                ..self.definition
            },
        }
    }

    #[must_use]
    pub fn with_sorting(self, sort_by: Vec<SortItem>) -> Self {
        Self {
            definition: ExecutionDefinition {
                sort_by,
                ..self.definition
            },
        }
    }

    pub fn definition(&self) -> &ExecutionDefinition {
        &self.definition
    }
}

/// Result of an execution: header names per dimension and a row-major data grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    pub definition: ExecutionDefinition,
    #[serde(default)]
    pub headers: Vec<Vec<String>>,
    #[serde(default)]
    pub data: Vec<Vec<Option<f64>>>,
}

impl DataView {
    pub fn empty(definition: ExecutionDefinition) -> Self {
        Self {
            definition,
            headers: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Vec::is_empty)
    }
}

/// A backend that knows nothing and computes nothing.
///
/// Catalog lookups fail with [`BackendError::NotFound`], granularity lookups and executions
/// succeed with empty results. Executions are still checked for convertibility so unsupported
/// definitions are reported the way a real backend would.
pub fn dummy_backend() -> Arc<dyn AnalyticalBackend> {
    Arc::new(DummyBackend)
}

#[derive(Debug)]
struct DummyBackend;

impl AnalyticalBackend for DummyBackend {
    fn workspace(&self, id: &str) -> Arc<dyn AnalyticalWorkspace> {
        Arc::new(DummyWorkspace {
            workspace: id.to_string(),
        })
    }
}

#[derive(Debug)]
struct DummyWorkspace {
    workspace: String,
}

#[async_trait]
impl AnalyticalWorkspace for DummyWorkspace {
    fn workspace(&self) -> &str {
        &self.workspace
    }

    async fn catalog_attribute(
        &self,
        display_form: &ObjRef,
    ) -> Result<CatalogAttribute, BackendError> {
        Err(BackendError::NotFound(display_form.to_string()))
    }

    async fn available_granularities(
        &self,
        _data_set: &ObjRef,
    ) -> Result<Vec<String>, BackendError> {
        Ok(Vec::new())
    }

    fn execution(&self) -> Arc<dyn ExecutionFactory> {
        Arc::new(DummyExecutionFactory {
            workspace: self.workspace.clone(),
        })
    }
}

#[derive(Debug)]
struct DummyExecutionFactory {
    workspace: String,
}

#[async_trait]
impl ExecutionFactory for DummyExecutionFactory {
    fn for_insight(&self, insight: &Insight, filters: &[Filter]) -> PreparedExecution {
        PreparedExecution::for_insight(&self.workspace, insight, filters)
    }

    async fn execute(&self, execution: &PreparedExecution) -> Result<DataView, BackendError> {
        insight_afm::convert_execution(execution.definition())
            .map_err(|err| BackendError::Validation(err.to_string()))?;
        Ok(DataView::empty(execution.definition().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_model::execution::{AttributeElements, AttributeOrMeasure, InsightBucket, Measure};
    use insight_model::execution::{Attribute, MeasureDefinition};
    use serde_json::json;

    fn insight() -> Insight {
        Insight {
            identifier: "insight".to_string(),
            buckets: vec![
                InsightBucket::new(
                    "measures",
                    vec![AttributeOrMeasure::Measure(Measure::simple(
                        "m1",
                        ObjRef::identifier("fact.amount"),
                    ))],
                ),
                InsightBucket::new(
                    "attribute",
                    vec![AttributeOrMeasure::Attribute(Attribute::new(
                        "a1",
                        ObjRef::identifier("label.region"),
                    ))],
                ),
            ],
            ..Insight::default()
        }
    }

    #[tokio::test]
    async fn dummy_backend_returns_empty_results() {
        let workspace = dummy_backend().workspace("PROJECTID");
        assert_eq!(workspace.workspace(), "PROJECTID");

        let data_set = ObjRef::identifier("dataset.created");
        assert!(workspace
            .available_granularities(&data_set)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            workspace.catalog_attribute(&data_set).await,
            Err(BackendError::NotFound("identifier:dataset.created".to_string()))
        );

        let factory = workspace.execution();
        let execution = factory.for_insight(&insight(), &[]);
        let view = factory.execute(&execution).await.unwrap();
        assert!(view.is_empty());
        assert_eq!(view.definition.workspace, "PROJECTID");
    }

    #[test]
    fn default_execution_puts_attributes_then_measure_group() {
        let added = Filter::positive_attribute(
            ObjRef::identifier("label.region"),
            AttributeElements::uris(["/e/1"]),
        );
        let execution = PreparedExecution::for_insight("ws", &insight(), &[added.clone()]);
        let definition = execution.definition();

        assert_eq!(definition.attributes.len(), 1);
        assert_eq!(definition.measures.len(), 1);
        assert_eq!(definition.filters, vec![added]);
        assert_eq!(
            definition.dimensions,
            vec![
                Dimension::new(vec!["a1".to_string()]),
                Dimension::new(vec![MEASURE_GROUP_IDENTIFIER.to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn unsupported_measure_definition_is_rejected_on_execute() {
        let mut insight = insight();
        insight.buckets[0].items = vec![AttributeOrMeasure::Measure(Measure::new(
            "m1",
            MeasureDefinition::Unsupported(json!({ "inlineDefinition": {} })),
        ))];

        let factory = dummy_backend().workspace("ws").execution();
        let execution = factory.for_insight(&insight, &[]);
        let err = factory.execute(&execution).await.unwrap_err();
        assert!(matches!(err, BackendError::Validation(_)));
    }
}
