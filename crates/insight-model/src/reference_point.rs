use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

use crate::bucket_names::BucketName;
use crate::column_width::ColumnWidthItem;
use crate::filters::BucketFilter;
use crate::sort::{SortDirection, SortItem};
use crate::ui_config::{OverTimeComparisonType, UiConfig};

/// Kind of analytical element placed into a bucket.
///
/// Unknown kinds are kept verbatim so they survive a round trip through the adaptation pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BucketItemType {
    Metric,
    Fact,
    Attribute,
    Date,
    Other(String),
}

impl BucketItemType {
    pub fn as_str(&self) -> &str {
        match self {
            BucketItemType::Metric => "metric",
            BucketItemType::Fact => "fact",
            BucketItemType::Attribute => "attribute",
            BucketItemType::Date => "date",
            BucketItemType::Other(other) => other,
        }
    }

    /// Attributes and dates can be placed on table rows/columns.
    pub fn is_attribute_like(&self) -> bool {
        matches!(self, BucketItemType::Attribute | BucketItemType::Date)
    }
}

impl From<String> for BucketItemType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "metric" => BucketItemType::Metric,
            "fact" => BucketItemType::Fact,
            "attribute" => BucketItemType::Attribute,
            "date" => BucketItemType::Date,
            _ => BucketItemType::Other(value),
        }
    }
}

impl From<BucketItemType> for String {
    fn from(value: BucketItemType) -> Self {
        match value {
            BucketItemType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BucketItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSort {
    pub direction: SortDirection,
}

/// One analytical element placed into a bucket.
///
/// `local_identifier` is unique across all buckets of one reference point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketItem {
    pub local_identifier: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<BucketItemType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
    #[serde(default)]
    pub filters: Vec<BucketFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_percent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_on_secondary_axis: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<ItemSort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_local_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_time_comparison_type: Option<OverTimeComparisonType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand_local_identifiers: Option<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl BucketItem {
    fn typed(
        local_identifier: impl Into<String>,
        item_type: BucketItemType,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            local_identifier: local_identifier.into(),
            item_type: Some(item_type),
            attribute: Some(attribute.into()),
            ..Self::default()
        }
    }

    pub fn metric(local_identifier: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::typed(local_identifier, BucketItemType::Metric, attribute)
    }

    pub fn attribute(local_identifier: impl Into<String>, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self {
            granularity: Some(attribute.clone()),
            ..Self::typed(local_identifier, BucketItemType::Attribute, attribute)
        }
    }

    pub fn date(
        local_identifier: impl Into<String>,
        data_set: impl Into<String>,
        granularity: impl Into<String>,
    ) -> Self {
        Self {
            granularity: Some(granularity.into()),
            ..Self::typed(local_identifier, BucketItemType::Date, data_set)
        }
    }

    /// Derived (comparison) measure computed from `master`.
    pub fn derived(
        local_identifier: impl Into<String>,
        master: &BucketItem,
        comparison: OverTimeComparisonType,
    ) -> Self {
        Self {
            local_identifier: local_identifier.into(),
            master_local_identifier: Some(master.local_identifier.clone()),
            over_time_comparison_type: Some(comparison),
            ..master.clone()
        }
    }

    pub fn with_filters(self, filters: Vec<BucketFilter>) -> Self {
        Self { filters, ..self }
    }

    pub fn with_show_in_percent(self, show_in_percent: bool) -> Self {
        Self {
            show_in_percent: Some(show_in_percent),
            ..self
        }
    }

    pub fn is_of_type(&self, item_type: &BucketItemType) -> bool {
        self.item_type.as_ref() == Some(item_type)
    }

    pub fn is_attribute_like(&self) -> bool {
        self.item_type
            .as_ref()
            .is_some_and(BucketItemType::is_attribute_like)
    }

    pub fn is_derived(&self) -> bool {
        self.master_local_identifier.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalType {
    Sum,
    Max,
    Min,
    Avg,
    Med,
    Nat,
}

/// Aggregation request (grand total / subtotal) for one measure at one attribute level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Total {
    pub measure_identifier: String,
    #[serde(rename = "type")]
    pub total_type: TotalType,
    pub attribute_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A named slot holding an ordered list of bucket items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub local_identifier: String,
    #[serde(default)]
    pub items: Vec<BucketItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totals: Option<Vec<Total>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
}

impl Bucket {
    pub fn new(local_identifier: impl Into<String>, items: Vec<BucketItem>) -> Self {
        Self {
            local_identifier: local_identifier.into(),
            items,
            totals: None,
            chart_type: None,
        }
    }

    pub fn named(name: BucketName, items: Vec<BucketItem>) -> Self {
        Self::new(name.as_str(), items)
    }

    /// Attaches totals; an empty list leaves the bucket without a `totals` key.
    pub fn with_totals(self, totals: Vec<Total>) -> Self {
        Self {
            totals: (!totals.is_empty()).then_some(totals),
            ..self
        }
    }

    pub fn name(&self) -> Option<BucketName> {
        BucketName::parse(&self.local_identifier)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersBucketItem {
    #[serde(flatten)]
    pub item: BucketItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_created: Option<bool>,
}

impl From<BucketItem> for FiltersBucketItem {
    fn from(item: BucketItem) -> Self {
        Self {
            item,
            auto_created: None,
        }
    }
}

/// The `filters` pseudo-bucket of a reference point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersBucket {
    pub local_identifier: String,
    #[serde(default)]
    pub items: Vec<FiltersBucketItem>,
}

impl Default for FiltersBucket {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FiltersBucket {
    pub fn new(items: Vec<FiltersBucketItem>) -> Self {
        Self {
            local_identifier: BucketName::Filters.as_str().to_string(),
            items,
        }
    }

    /// All filters currently applied, flattened across filter items in order.
    pub fn active_filters(&self) -> Vec<BucketFilter> {
        self.items
            .iter()
            .flat_map(|item| item.item.filters.iter().cloned())
            .collect()
    }
}

/// Persisted column sizing and other table controls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<ColumnWidthItem>>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Visualization properties. Keys this crate does not model are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_items: Option<Vec<SortItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Controls>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl VisualizationProperties {
    pub fn sort_items(&self) -> &[SortItem] {
        self.sort_items.as_deref().unwrap_or_default()
    }

    pub fn column_widths(&self) -> &[ColumnWidthItem] {
        self.controls
            .as_ref()
            .and_then(|controls| controls.column_widths.as_deref())
            .unwrap_or_default()
    }

    /// Returns a copy with `sortItems` replaced; an empty list removes the key.
    pub fn with_sort_items(&self, sort_items: Vec<SortItem>) -> Self {
        Self {
            sort_items: (!sort_items.is_empty()).then_some(sort_items),
            ..self.clone()
        }
    }

    /// Returns a copy with `controls.columnWidths` replaced; an empty list removes the key, and
    /// `controls` itself disappears once nothing else is left in it.
    pub fn with_column_widths(&self, column_widths: Vec<ColumnWidthItem>) -> Self {
        let mut controls = self.controls.clone().unwrap_or_default();
        controls.column_widths = (!column_widths.is_empty()).then_some(column_widths);
        let keep = controls.column_widths.is_some() || !controls.extra.is_empty();
        Self {
            controls: keep.then_some(controls),
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sort_items.is_none() && self.controls.is_none() && self.extra.is_empty()
    }
}

/// Editable, pre-validation bucket/filter/property state of a visualization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePoint {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
    #[serde(default)]
    pub filters: FiltersBucket,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<VisualizationProperties>,
}

impl ReferencePoint {
    pub fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.buckets
            .iter()
            .find(|bucket| bucket.local_identifier == name)
    }

    pub fn bucket_items(&self, name: &str) -> &[BucketItem] {
        self.bucket(name)
            .map(|bucket| bucket.items.as_slice())
            .unwrap_or_default()
    }

    pub fn find_item(&self, local_identifier: &str) -> Option<&BucketItem> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.items.iter())
            .find(|item| item.local_identifier == local_identifier)
    }

    pub fn properties(&self) -> VisualizationProperties {
        self.properties.clone().unwrap_or_default()
    }
}

/// A validated reference point plus the capability descriptor of the visualization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedReferencePoint {
    pub buckets: Vec<Bucket>,
    pub filters: FiltersBucket,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<VisualizationProperties>,
    pub ui_config: UiConfig,
}

impl ExtendedReferencePoint {
    pub fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.buckets
            .iter()
            .find(|bucket| bucket.local_identifier == name)
    }

    pub fn sort_items(&self) -> &[SortItem] {
        self.properties
            .as_ref()
            .map(VisualizationProperties::sort_items)
            .unwrap_or_default()
    }

    pub fn column_widths(&self) -> &[ColumnWidthItem] {
        self.properties
            .as_ref()
            .map(VisualizationProperties::column_widths)
            .unwrap_or_default()
    }
}

impl From<ExtendedReferencePoint> for ReferencePoint {
    fn from(value: ExtendedReferencePoint) -> Self {
        Self {
            buckets: value.buckets,
            filters: value.filters,
            properties: value.properties,
        }
    }
}
