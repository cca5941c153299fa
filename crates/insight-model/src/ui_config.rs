use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of period-over-period comparison a derived measure computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverTimeComparisonType {
    SamePeriodPreviousYear,
    PreviousPeriod,
    Nothing,
}

/// What the editor may do with one bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketUiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_add_items: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_duplicate_items: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_reordering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_swapping: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_show_in_percent_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_show_in_percent_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_show_on_secondary_axis_visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_show_on_secondary_axis: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_select_chart_type: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_optional_stacking: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportUiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAsReportUiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomError {
    pub heading: String,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalStacking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_measures: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_measures_to_percent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_stack_in_percent: Option<bool>,
}

/// Capability descriptor attached to an extended reference point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Keyed by bucket `localIdentifier`.
    pub buckets: BTreeMap<String, BucketUiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_config: Option<ExportUiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_as_report: Option<OpenAsReportUiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_error: Option<CustomError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_over_time_comparison_types: Option<Vec<OverTimeComparisonType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_chart_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_stacking: Option<OptionalStacking>,
}

impl UiConfig {
    pub fn bucket(&self, name: &str) -> Option<&BucketUiConfig> {
        self.buckets.get(name)
    }

    pub fn bucket_mut(&mut self, name: &str) -> Option<&mut BucketUiConfig> {
        self.buckets.get_mut(name)
    }
}
