use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ui_config::OverTimeComparisonType;

/// One attribute element referenced by a reference point filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketFilterElement {
    pub title: String,
    pub uri: String,
}

impl BucketFilterElement {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonConditionOperator {
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    EqualTo,
    NotEqualTo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeConditionOperator {
    Between,
    NotBetween,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCondition {
    pub operator: ComparisonConditionOperator,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeCondition {
    pub operator: RangeConditionOperator,
    pub from: f64,
    pub to: f64,
}

/// Condition of a measure value filter, on the wire as `{"comparison": {...}}` or
/// `{"range": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MeasureValueCondition {
    #[serde(rename = "comparison")]
    Comparison(ComparisonCondition),
    #[serde(rename = "range")]
    Range(RangeCondition),
}

/// Element-based attribute filter ("in" / "not in" selection).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeBucketFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// `true` means the selection is an exclusion list ("not in").
    #[serde(default)]
    pub is_inverted: bool,
    pub selected_elements: Vec<BucketFilterElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_elements: Option<Vec<BucketFilterElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_modified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_time_comparison_type: Option<OverTimeComparisonType>,
}

impl AttributeBucketFilter {
    /// Inclusion filter ("in") over the given elements.
    pub fn positive(attribute: impl Into<String>, selected: Vec<BucketFilterElement>) -> Self {
        Self {
            attribute: Some(attribute.into()),
            is_inverted: false,
            selected_elements: selected,
            ..Self::default()
        }
    }

    /// Exclusion filter ("not in") over the given elements.
    pub fn negative(attribute: impl Into<String>, excluded: Vec<BucketFilterElement>) -> Self {
        Self {
            is_inverted: true,
            ..Self::positive(attribute, excluded)
        }
    }

    /// Whether rows carrying `element_uri` survive this filter.
    ///
    /// An inclusion filter with no selected elements lets nothing through; an exclusion filter
    /// with no excluded elements lets everything through.
    pub fn admits(&self, element_uri: &str) -> bool {
        let selected = self
            .selected_elements
            .iter()
            .any(|element| element.uri == element_uri);
        selected != self.is_inverted
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureValueBucketFilter {
    pub measure_local_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<MeasureValueCondition>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketFilterInterval {
    pub granularity: String,
    pub interval: Vec<String>,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBucketFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub interval: BucketFilterInterval,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_modified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_time_comparison_type: Option<OverTimeComparisonType>,
}

/// A filter attached to a reference point bucket item.
///
/// The wire format is a flat bag of optional fields; the variant is picked from its shape:
/// `measureLocalIdentifier` marks a measure value filter, `interval` a date filter and
/// `selectedElements` an element-based attribute filter. Anything else is kept verbatim as
/// [`BucketFilter::Other`] and never restricts elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketFilter {
    MeasureValue(MeasureValueBucketFilter),
    Date(DateBucketFilter),
    Attribute(AttributeBucketFilter),
    Other(JsonValue),
}

impl BucketFilter {
    pub fn as_attribute_filter(&self) -> Option<&AttributeBucketFilter> {
        match self {
            BucketFilter::Attribute(filter) => Some(filter),
            BucketFilter::MeasureValue(_) | BucketFilter::Date(_) | BucketFilter::Other(_) => None,
        }
    }

    pub fn as_measure_value_filter(&self) -> Option<&MeasureValueBucketFilter> {
        match self {
            BucketFilter::MeasureValue(filter) => Some(filter),
            BucketFilter::Attribute(_) | BucketFilter::Date(_) | BucketFilter::Other(_) => None,
        }
    }
}

impl From<AttributeBucketFilter> for BucketFilter {
    fn from(value: AttributeBucketFilter) -> Self {
        BucketFilter::Attribute(value)
    }
}

impl From<MeasureValueBucketFilter> for BucketFilter {
    fn from(value: MeasureValueBucketFilter) -> Self {
        BucketFilter::MeasureValue(value)
    }
}

impl From<DateBucketFilter> for BucketFilter {
    fn from(value: DateBucketFilter) -> Self {
        BucketFilter::Date(value)
    }
}
