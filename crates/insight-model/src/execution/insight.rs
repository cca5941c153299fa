use serde::{Deserialize, Serialize};

use super::filter::Filter;
use super::measure::{Attribute, AttributeOrMeasure, Measure};
use crate::reference_point::{Total, VisualizationProperties};
use crate::sort::SortItem;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBucket {
    pub local_identifier: String,
    #[serde(default)]
    pub items: Vec<AttributeOrMeasure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub totals: Vec<Total>,
}

impl InsightBucket {
    pub fn new(local_identifier: impl Into<String>, items: Vec<AttributeOrMeasure>) -> Self {
        Self {
            local_identifier: local_identifier.into(),
            items,
            totals: Vec::new(),
        }
    }

    pub fn measures(&self) -> impl Iterator<Item = &Measure> {
        self.items.iter().filter_map(|item| match item {
            AttributeOrMeasure::Measure(measure) => Some(measure),
            AttributeOrMeasure::Attribute(_) => None,
        })
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter().filter_map(|item| match item {
            AttributeOrMeasure::Attribute(attribute) => Some(attribute),
            AttributeOrMeasure::Measure(_) => None,
        })
    }
}

/// A saved visualization: buckets, filters, sorts and properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub identifier: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub visualization_url: String,
    #[serde(default)]
    pub buckets: Vec<InsightBucket>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub sorts: Vec<SortItem>,
    #[serde(default)]
    pub properties: VisualizationProperties,
}

impl Insight {
    pub fn bucket(&self, name: &str) -> Option<&InsightBucket> {
        self.buckets
            .iter()
            .find(|bucket| bucket.local_identifier == name)
    }

    pub fn measures(&self) -> Vec<&Measure> {
        self.buckets.iter().flat_map(InsightBucket::measures).collect()
    }

    pub fn attributes(&self) -> Vec<&Attribute> {
        self.buckets
            .iter()
            .flat_map(InsightBucket::attributes)
            .collect()
    }

    pub fn has_no_measures_and_attributes(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.items.is_empty())
    }
}
