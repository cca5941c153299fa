use serde::{Deserialize, Serialize};

use super::filter::Filter;
use super::measure::{Attribute, Measure};
use crate::reference_point::Total;
use crate::sort::SortItem;

/// Item identifier standing for "all measures" inside a dimension.
pub const MEASURE_GROUP_IDENTIFIER: &str = "measureGroup";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub item_identifiers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub totals: Vec<Total>,
}

impl Dimension {
    pub fn new(item_identifiers: Vec<String>) -> Self {
        Self {
            item_identifiers,
            totals: Vec::new(),
        }
    }
}

/// Everything a backend needs to compute one result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionDefinition {
    pub workspace: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub measures: Vec<Measure>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub sort_by: Vec<SortItem>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

impl ExecutionDefinition {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.measures.is_empty()
    }
}
