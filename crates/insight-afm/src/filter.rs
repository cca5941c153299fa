use insight_model::execution::{Filter, ObjRef};

use crate::afm::{
    AfmAbsoluteDateFilter, AfmFilter, AfmMeasureValueFilter, AfmNegativeAttributeFilter,
    AfmPositiveAttributeFilter, AfmRelativeDateFilter,
};
use crate::error::{AfmError, AfmResult};

/// Restricts `obj_ref` to the forms a catalog object can be addressed by.
pub(crate) fn catalog_ref(obj_ref: &ObjRef) -> AfmResult<ObjRef> {
    match obj_ref {
        ObjRef::Identifier { .. } | ObjRef::Uri { .. } => Ok(obj_ref.clone()),
        ObjRef::LocalId { local_identifier } => {
            Err(AfmError::UnexpectedLocalReference(local_identifier.clone()))
        }
    }
}

/// Converts one execution filter.
///
/// Filters that do not restrict anything yield `Ok(None)`: attribute filters without elements
/// and "all time" relative date filters.
pub fn convert_filter(filter: &Filter) -> AfmResult<Option<AfmFilter>> {
    let converted = match filter {
        Filter::PositiveAttributeFilter(filter) => {
            if filter.in_elements.is_empty() {
                None
            } else {
                Some(AfmFilter::PositiveAttributeFilter(AfmPositiveAttributeFilter {
                    display_form: catalog_ref(&filter.display_form)?,
                    in_elements: filter.in_elements.clone(),
                }))
            }
        }
        Filter::NegativeAttributeFilter(filter) => {
            if filter.not_in.is_empty() {
                None
            } else {
                Some(AfmFilter::NegativeAttributeFilter(AfmNegativeAttributeFilter {
                    display_form: catalog_ref(&filter.display_form)?,
                    not_in: filter.not_in.clone(),
                }))
            }
        }
        Filter::AbsoluteDateFilter(filter) => {
            Some(AfmFilter::AbsoluteDateFilter(AfmAbsoluteDateFilter {
                data_set: catalog_ref(&filter.data_set)?,
                from: filter.from.clone(),
                to: filter.to.clone(),
            }))
        }
        Filter::RelativeDateFilter(filter) => match (&filter.granularity, filter.from, filter.to) {
            (Some(granularity), Some(from), Some(to)) => {
                Some(AfmFilter::RelativeDateFilter(AfmRelativeDateFilter {
                    data_set: catalog_ref(&filter.data_set)?,
                    granularity: granularity.clone(),
                    from,
                    to,
                }))
            }
            _ => None,
        },
        Filter::MeasureValueFilter(filter) => {
            Some(AfmFilter::MeasureValueFilter(AfmMeasureValueFilter {
                measure: filter.measure.clone(),
                condition: filter.condition.clone(),
            }))
        }
    };

    if converted.is_none() {
        log::debug!("filter {filter:?} restricts nothing and is left out");
    }
    Ok(converted)
}

/// Converts a filter of a simple measure; only attribute and date filters can filter a measure.
pub(crate) fn convert_measure_filter(
    measure_identifier: &str,
    filter: &Filter,
) -> AfmResult<Option<AfmFilter>> {
    match filter {
        Filter::MeasureValueFilter(_) => Err(AfmError::UnsupportedMeasureFilter {
            measure: measure_identifier.to_string(),
        }),
        _ => convert_filter(filter),
    }
}
