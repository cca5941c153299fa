use insight_model::execution::{
    ArithmeticMeasureOperator, Attribute, Measure, MeasureAggregation, MeasureDefinition,
    SimpleMeasureDefinition,
};

use crate::afm::{
    AfmArithmeticMeasure, AfmAttribute, AfmMeasure, AfmMeasureDefinition, AfmPopMeasure,
    AfmPreviousPeriodDateDataSet, AfmPreviousPeriodMeasure, AfmSimpleMeasure,
};
use crate::error::{AfmError, AfmResult};
use crate::filter::{catalog_ref, convert_measure_filter};

pub const DEFAULT_INTEGER_FORMAT: &str = "#,##0";
pub const DEFAULT_DECIMAL_FORMAT: &str = "#,##0.00";
pub const DEFAULT_PERCENTAGE_FORMAT: &str = "#,##0.00%";

/// Converts a measure; the alias falls back to the title.
pub fn convert_measure(measure: &Measure) -> AfmResult<AfmMeasure> {
    let definition = match &measure.definition {
        MeasureDefinition::Simple(definition) => {
            convert_simple_measure(&measure.local_identifier, definition)?
        }
        MeasureDefinition::PoP(definition) => AfmMeasureDefinition::PopMeasure(AfmPopMeasure {
            measure_identifier: definition.measure_identifier.clone(),
            pop_attribute: catalog_ref(&definition.pop_attribute)?,
        }),
        MeasureDefinition::PreviousPeriod(definition) => {
            let date_data_sets = definition
                .date_data_sets
                .iter()
                .map(|data_set| {
                    Ok(AfmPreviousPeriodDateDataSet {
                        data_set: catalog_ref(&data_set.data_set)?,
                        periods_ago: data_set.periods_ago,
                    })
                })
                .collect::<AfmResult<Vec<_>>>()?;
            AfmMeasureDefinition::PreviousPeriodMeasure(AfmPreviousPeriodMeasure {
                measure_identifier: definition.measure_identifier.clone(),
                date_data_sets,
            })
        }
        MeasureDefinition::Arithmetic(definition) => {
            AfmMeasureDefinition::ArithmeticMeasure(AfmArithmeticMeasure {
                measure_identifiers: definition.measure_identifiers.clone(),
                operator: definition.operator,
            })
        }
        MeasureDefinition::Unsupported(raw) => {
            return Err(AfmError::UnsupportedMeasureDefinition(raw.clone()));
        }
    };

    Ok(AfmMeasure {
        local_identifier: measure.local_identifier.clone(),
        definition,
        alias: measure
            .alias
            .clone()
            .filter(|alias| !alias.is_empty())
            .or_else(|| measure.title.clone()),
        format: measure_format(measure).map(str::to_string),
    })
}

fn convert_simple_measure(
    local_identifier: &str,
    definition: &SimpleMeasureDefinition,
) -> AfmResult<AfmMeasureDefinition> {
    let mut filters = Vec::with_capacity(definition.filters.len());
    for filter in &definition.filters {
        if let Some(filter) = convert_measure_filter(local_identifier, filter)? {
            filters.push(filter);
        }
    }

    Ok(AfmMeasureDefinition::Measure(AfmSimpleMeasure {
        item: catalog_ref(&definition.item)?,
        filters,
        aggregation: definition.aggregation,
        compute_ratio: definition.compute_ratio.filter(|ratio| *ratio),
    }))
}

/// Number format sent with a measure.
///
/// Ratio measures stored with the plain default format (integer for `count`, decimal otherwise)
/// are shown as percentages. Without an explicit format: arithmetic `change` and ratios are
/// percentages and `count` is an integer.
pub fn measure_format(measure: &Measure) -> Option<&str> {
    let format = measure.format.as_deref();
    let simple = match &measure.definition {
        MeasureDefinition::Simple(definition) => Some(definition),
        _ => None,
    };
    let is_ratio = simple.is_some_and(|definition| definition.compute_ratio == Some(true));
    let aggregation = simple.and_then(|definition| definition.aggregation);

    if is_ratio {
        let stored_default = match aggregation {
            Some(MeasureAggregation::Count) => Some(DEFAULT_INTEGER_FORMAT),
            Some(_) => Some(DEFAULT_DECIMAL_FORMAT),
            None => None,
        };
        if stored_default.is_some() && format == stored_default {
            return Some(DEFAULT_PERCENTAGE_FORMAT);
        }
    }

    if format.is_some() {
        return format;
    }

    match &measure.definition {
        MeasureDefinition::Arithmetic(definition)
            if definition.operator == ArithmeticMeasureOperator::Change =>
        {
            Some(DEFAULT_PERCENTAGE_FORMAT)
        }
        MeasureDefinition::Simple(_) if is_ratio => Some(DEFAULT_PERCENTAGE_FORMAT),
        MeasureDefinition::Simple(_) if aggregation == Some(MeasureAggregation::Count) => {
            Some(DEFAULT_INTEGER_FORMAT)
        }
        _ => None,
    }
}

pub fn convert_attribute(attribute: &Attribute) -> AfmResult<AfmAttribute> {
    Ok(AfmAttribute {
        local_identifier: attribute.local_identifier.clone(),
        display_form: catalog_ref(&attribute.display_form)?,
        alias: attribute.alias.clone(),
    })
}

#[cfg(test)]
mod tests;
