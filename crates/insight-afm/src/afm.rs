//! AFM wire payloads.
//!
//! References to catalog objects are plain [`ObjRef`]s restricted to the `identifier`/`uri`
//! forms; only measure value filters may point at a measure of the execution by its local
//! identifier.

use insight_model::execution::{
    ArithmeticMeasureOperator, AttributeElements, Dimension, MeasureAggregation, ObjRef,
};
use insight_model::{MeasureValueCondition, SortItem};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmAttribute {
    pub local_identifier: String,
    pub display_form: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmSimpleMeasure {
    pub item: ObjRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<AfmFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<MeasureAggregation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute_ratio: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmPopMeasure {
    pub measure_identifier: String,
    pub pop_attribute: ObjRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmPreviousPeriodDateDataSet {
    pub data_set: ObjRef,
    pub periods_ago: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmPreviousPeriodMeasure {
    pub measure_identifier: String,
    pub date_data_sets: Vec<AfmPreviousPeriodDateDataSet>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmArithmeticMeasure {
    pub measure_identifiers: Vec<String>,
    pub operator: ArithmeticMeasureOperator,
}

/// `{"measure": ...}`, `{"popMeasure": ...}`, `{"previousPeriodMeasure": ...}` or
/// `{"arithmeticMeasure": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AfmMeasureDefinition {
    Measure(AfmSimpleMeasure),
    PopMeasure(AfmPopMeasure),
    PreviousPeriodMeasure(AfmPreviousPeriodMeasure),
    ArithmeticMeasure(AfmArithmeticMeasure),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmMeasure {
    pub local_identifier: String,
    pub definition: AfmMeasureDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmPositiveAttributeFilter {
    pub display_form: ObjRef,
    #[serde(rename = "in")]
    pub in_elements: AttributeElements,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmNegativeAttributeFilter {
    pub display_form: ObjRef,
    pub not_in: AttributeElements,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmAbsoluteDateFilter {
    pub data_set: ObjRef,
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmRelativeDateFilter {
    pub data_set: ObjRef,
    pub granularity: String,
    pub from: i32,
    pub to: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AfmMeasureValueFilter {
    pub measure: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<MeasureValueCondition>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AfmFilter {
    PositiveAttributeFilter(AfmPositiveAttributeFilter),
    NegativeAttributeFilter(AfmNegativeAttributeFilter),
    AbsoluteDateFilter(AfmAbsoluteDateFilter),
    RelativeDateFilter(AfmRelativeDateFilter),
    MeasureValueFilter(AfmMeasureValueFilter),
}

/// Native (backend-computed) total of one measure, rolled up over the listed attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmNativeTotal {
    pub measure_identifier: String,
    pub attribute_identifiers: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Afm {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AfmAttribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measures: Vec<AfmMeasure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<AfmFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub native_totals: Vec<AfmNativeTotal>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSpec {
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<SortItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfmExecutionBody {
    pub afm: Afm,
    pub result_spec: ResultSpec,
}

/// `{"execution": {"afm": ..., "resultSpec": ...}}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AfmExecution {
    pub execution: AfmExecutionBody,
}
