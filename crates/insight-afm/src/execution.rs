use insight_model::execution::{Dimension, ExecutionDefinition};
use insight_model::TotalType;

use crate::afm::{Afm, AfmExecution, AfmExecutionBody, AfmNativeTotal, ResultSpec};
use crate::error::AfmResult;
use crate::filter::convert_filter;
use crate::measure::{convert_attribute, convert_measure};

/// Converts a whole execution definition into the AFM execution payload.
///
/// Conversion fails on the first measure, attribute or filter that cannot be expressed.
pub fn convert_execution(definition: &ExecutionDefinition) -> AfmResult<AfmExecution> {
    let attributes = definition
        .attributes
        .iter()
        .map(convert_attribute)
        .collect::<AfmResult<Vec<_>>>()?;
    let measures = definition
        .measures
        .iter()
        .map(convert_measure)
        .collect::<AfmResult<Vec<_>>>()?;

    let mut filters = Vec::with_capacity(definition.filters.len());
    for filter in &definition.filters {
        if let Some(filter) = convert_filter(filter)? {
            filters.push(filter);
        }
    }

    Ok(AfmExecution {
        execution: AfmExecutionBody {
            afm: Afm {
                attributes,
                measures,
                filters,
                native_totals: native_totals(&definition.dimensions),
            },
            result_spec: ResultSpec {
                dimensions: definition.dimensions.clone(),
                sorts: definition.sort_by.clone(),
            },
        },
    })
}

/// Native totals roll a measure up over the attributes preceding the total's attribute in its
/// dimension.
fn native_totals(dimensions: &[Dimension]) -> Vec<AfmNativeTotal> {
    dimensions
        .iter()
        .flat_map(|dimension| {
            dimension
                .totals
                .iter()
                .filter(|total| total.total_type == TotalType::Nat)
                .map(move |total| {
                    let attribute_identifiers = dimension
                        .item_identifiers
                        .iter()
                        .take_while(|item| **item != total.attribute_identifier)
                        .cloned()
                        .collect();
                    AfmNativeTotal {
                        measure_identifier: total.measure_identifier.clone(),
                        attribute_identifiers,
                    }
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_model::execution::{Attribute, Measure, MeasureDefinition, ObjRef};
    use insight_model::Total;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn total(total_type: TotalType, attribute: &str) -> Total {
        Total {
            measure_identifier: "m1".to_string(),
            total_type,
            attribute_identifier: attribute.to_string(),
            alias: None,
        }
    }

    #[test]
    fn native_totals_cover_preceding_attributes() {
        let dimensions = vec![
            Dimension {
                item_identifiers: vec!["a1".to_string(), "a2".to_string(), "a3".to_string()],
                totals: vec![
                    total(TotalType::Nat, "a1"),
                    total(TotalType::Sum, "a1"),
                    total(TotalType::Nat, "a3"),
                ],
            },
            Dimension::new(vec!["measureGroup".to_string()]),
        ];

        assert_eq!(
            native_totals(&dimensions),
            vec![
                AfmNativeTotal {
                    measure_identifier: "m1".to_string(),
                    attribute_identifiers: Vec::new(),
                },
                AfmNativeTotal {
                    measure_identifier: "m1".to_string(),
                    attribute_identifiers: vec!["a1".to_string(), "a2".to_string()],
                },
            ]
        );
    }

    #[test]
    fn execution_wire_shape() {
        let definition = ExecutionDefinition {
            workspace: "ws".to_string(),
            attributes: vec![Attribute::new("a1", ObjRef::identifier("label.region"))],
            measures: vec![Measure::simple("m1", ObjRef::identifier("fact.amount"))],
            filters: Vec::new(),
            sort_by: Vec::new(),
            dimensions: vec![
                Dimension::new(vec!["a1".to_string()]),
                Dimension::new(vec!["measureGroup".to_string()]),
            ],
        };

        assert_eq!(
            serde_json::to_value(convert_execution(&definition).unwrap()).unwrap(),
            json!({
                "execution": {
                    "afm": {
                        "attributes": [{
                            "localIdentifier": "a1",
                            "displayForm": { "identifier": "label.region" }
                        }],
                        "measures": [{
                            "localIdentifier": "m1",
                            "definition": { "measure": { "item": { "identifier": "fact.amount" } } }
                        }]
                    },
                    "resultSpec": {
                        "dimensions": [
                            { "itemIdentifiers": ["a1"] },
                            { "itemIdentifiers": ["measureGroup"] }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn first_unsupported_measure_fails_the_execution() {
        let definition = ExecutionDefinition {
            measures: vec![
                Measure::simple("m1", ObjRef::identifier("fact.amount")),
                Measure::new("m2", MeasureDefinition::Unsupported(json!({ "unknown": {} }))),
            ],
            ..ExecutionDefinition::default()
        };
        assert!(matches!(
            convert_execution(&definition),
            Err(crate::AfmError::UnsupportedMeasureDefinition(_))
        ));
    }
}
