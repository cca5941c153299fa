use serde::{Deserialize, Serialize};

use super::obj_ref::ObjRef;
use crate::filters::MeasureValueCondition;

/// Attribute elements selected by an attribute filter, either by URI or by value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeElements {
    Uris { uris: Vec<String> },
    Values { values: Vec<String> },
}

impl AttributeElements {
    pub fn uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeElements::Uris {
            uris: uris.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeElements::Values {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AttributeElements::Uris { uris } => uris.is_empty(),
            AttributeElements::Values { values } => values.is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositiveAttributeFilter {
    pub display_form: ObjRef,
    #[serde(rename = "in")]
    pub in_elements: AttributeElements,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeAttributeFilter {
    pub display_form: ObjRef,
    pub not_in: AttributeElements,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteDateFilter {
    pub data_set: ObjRef,
    pub from: String,
    pub to: String,
}

/// Relative date filter. Without `granularity`/`from`/`to` it means "all time".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeDateFilter {
    pub data_set: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasureValueFilter {
    pub measure: ObjRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<MeasureValueCondition>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    PositiveAttributeFilter(PositiveAttributeFilter),
    NegativeAttributeFilter(NegativeAttributeFilter),
    AbsoluteDateFilter(AbsoluteDateFilter),
    RelativeDateFilter(RelativeDateFilter),
    MeasureValueFilter(MeasureValueFilter),
}

impl Filter {
    pub fn positive_attribute(display_form: ObjRef, in_elements: AttributeElements) -> Self {
        Filter::PositiveAttributeFilter(PositiveAttributeFilter {
            display_form,
            in_elements,
        })
    }

    pub fn negative_attribute(display_form: ObjRef, not_in: AttributeElements) -> Self {
        Filter::NegativeAttributeFilter(NegativeAttributeFilter {
            display_form,
            not_in,
        })
    }

    pub fn absolute_date(
        data_set: ObjRef,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Filter::AbsoluteDateFilter(AbsoluteDateFilter {
            data_set,
            from: from.into(),
            to: to.into(),
        })
    }

    pub fn relative_date(
        data_set: ObjRef,
        granularity: impl Into<String>,
        from: i32,
        to: i32,
    ) -> Self {
        Filter::RelativeDateFilter(RelativeDateFilter {
            data_set,
            granularity: Some(granularity.into()),
            from: Some(from),
            to: Some(to),
        })
    }

    pub fn all_time(data_set: ObjRef) -> Self {
        Filter::RelativeDateFilter(RelativeDateFilter {
            data_set,
            granularity: None,
            from: None,
            to: None,
        })
    }

    pub fn measure_value(measure: ObjRef, condition: Option<MeasureValueCondition>) -> Self {
        Filter::MeasureValueFilter(MeasureValueFilter { measure, condition })
    }

    /// Data set of a date filter.
    pub fn date_data_set(&self) -> Option<&ObjRef> {
        match self {
            Filter::AbsoluteDateFilter(filter) => Some(&filter.data_set),
            Filter::RelativeDateFilter(filter) => Some(&filter.data_set),
            Filter::PositiveAttributeFilter(_)
            | Filter::NegativeAttributeFilter(_)
            | Filter::MeasureValueFilter(_) => None,
        }
    }

    pub fn is_all_time_date_filter(&self) -> bool {
        match self {
            Filter::RelativeDateFilter(filter) => {
                filter.granularity.is_none() && filter.from.is_none() && filter.to.is_none()
            }
            _ => false,
        }
    }
}

/// Merges filters added by the host (e.g. dashboard filters) into the filters of an insight.
///
/// Attribute and measure value filters are appended. A date filter replaces the insight's date
/// filter on the same data set; an "all time" date filter removes it and is not added itself.
pub fn merge_filters(insight_filters: &[Filter], added_filters: &[Filter]) -> Vec<Filter> {
    let overridden: Vec<&ObjRef> = added_filters
        .iter()
        .filter_map(Filter::date_data_set)
        .collect();

    insight_filters
        .iter()
        .filter(|filter| {
            filter
                .date_data_set()
                .map_or(true, |data_set| !overridden.contains(&data_set))
        })
        .chain(
            added_filters
                .iter()
                .filter(|filter| !filter.is_all_time_date_filter()),
        )
        .cloned()
        .collect()
}
