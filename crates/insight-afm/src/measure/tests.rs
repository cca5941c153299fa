use super::*;

use insight_model::execution::{
    ArithmeticMeasureDefinition, AttributeElements, Filter, ObjRef, PopMeasureDefinition,
    PreviousPeriodDateDataSet, PreviousPeriodMeasureDefinition,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn simple(aggregation: Option<MeasureAggregation>, compute_ratio: Option<bool>) -> Measure {
    Measure::new(
        "m1",
        MeasureDefinition::Simple(SimpleMeasureDefinition {
            item: ObjRef::identifier("fact.amount"),
            aggregation,
            filters: Vec::new(),
            compute_ratio,
        }),
    )
}

fn arithmetic(operator: ArithmeticMeasureOperator) -> Measure {
    Measure::new(
        "am1",
        MeasureDefinition::Arithmetic(ArithmeticMeasureDefinition {
            measure_identifiers: vec!["m1".to_string(), "m2".to_string()],
            operator,
        }),
    )
}

#[test]
fn ratio_with_stored_default_format_becomes_percentage() {
    let count = simple(Some(MeasureAggregation::Count), Some(true)).with_format(DEFAULT_INTEGER_FORMAT);
    assert_eq!(measure_format(&count), Some(DEFAULT_PERCENTAGE_FORMAT));

    let sum = simple(Some(MeasureAggregation::Sum), Some(true)).with_format(DEFAULT_DECIMAL_FORMAT);
    assert_eq!(measure_format(&sum), Some(DEFAULT_PERCENTAGE_FORMAT));

    // the decimal default is not the stored default of a count
    let count_decimal =
        simple(Some(MeasureAggregation::Count), Some(true)).with_format(DEFAULT_DECIMAL_FORMAT);
    assert_eq!(measure_format(&count_decimal), Some(DEFAULT_DECIMAL_FORMAT));
}

#[test]
fn explicit_format_wins_otherwise() {
    let measure = simple(Some(MeasureAggregation::Count), None).with_format("#,##0.0");
    assert_eq!(measure_format(&measure), Some("#,##0.0"));

    let change = arithmetic(ArithmeticMeasureOperator::Change).with_format("$#,##0");
    assert_eq!(measure_format(&change), Some("$#,##0"));
}

#[test]
fn default_formats() {
    assert_eq!(
        measure_format(&arithmetic(ArithmeticMeasureOperator::Change)),
        Some(DEFAULT_PERCENTAGE_FORMAT)
    );
    assert_eq!(measure_format(&arithmetic(ArithmeticMeasureOperator::Sum)), None);
    assert_eq!(
        measure_format(&simple(None, Some(true))),
        Some(DEFAULT_PERCENTAGE_FORMAT)
    );
    assert_eq!(
        measure_format(&simple(Some(MeasureAggregation::Count), None)),
        Some(DEFAULT_INTEGER_FORMAT)
    );
    assert_eq!(measure_format(&simple(Some(MeasureAggregation::Sum), None)), None);
    assert_eq!(measure_format(&simple(None, Some(false))), None);
}

#[test]
fn simple_measure_shape() {
    let measure = Measure::new(
        "m1",
        MeasureDefinition::Simple(SimpleMeasureDefinition {
            item: ObjRef::uri("/gdc/md/PROJECTID/obj/1"),
            aggregation: Some(MeasureAggregation::Sum),
            filters: vec![
                Filter::positive_attribute(
                    ObjRef::identifier("label.region"),
                    AttributeElements::uris(["/e/1"]),
                ),
                Filter::all_time(ObjRef::identifier("dataset.created")),
            ],
            compute_ratio: Some(false),
        }),
    )
    .with_title("Amount");

    assert_eq!(
        serde_json::to_value(convert_measure(&measure).unwrap()).unwrap(),
        json!({
            "localIdentifier": "m1",
            "definition": {
                "measure": {
                    "item": { "uri": "/gdc/md/PROJECTID/obj/1" },
                    "filters": [{
                        "positiveAttributeFilter": {
                            "displayForm": { "identifier": "label.region" },
                            "in": { "uris": ["/e/1"] }
                        }
                    }],
                    "aggregation": "sum"
                }
            },
            "alias": "Amount"
        })
    );
}

#[test]
fn alias_takes_precedence_over_title() {
    let measure = simple(None, None).with_title("Title").with_alias("Alias");
    assert_eq!(
        convert_measure(&measure).unwrap().alias.as_deref(),
        Some("Alias")
    );
}

#[test]
fn empty_alias_falls_back_to_title() {
    let measure = simple(None, None).with_title("Title").with_alias("");
    assert_eq!(
        convert_measure(&measure).unwrap().alias.as_deref(),
        Some("Title")
    );
}

#[test]
fn derived_measure_shapes() {
    let pop = Measure::new(
        "m1_pop",
        MeasureDefinition::PoP(PopMeasureDefinition {
            measure_identifier: "m1".to_string(),
            pop_attribute: ObjRef::identifier("date.year"),
        }),
    );
    assert_eq!(
        serde_json::to_value(convert_measure(&pop).unwrap().definition).unwrap(),
        json!({
            "popMeasure": {
                "measureIdentifier": "m1",
                "popAttribute": { "identifier": "date.year" }
            }
        })
    );

    let previous = Measure::new(
        "m1_previous",
        MeasureDefinition::PreviousPeriod(PreviousPeriodMeasureDefinition {
            measure_identifier: "m1".to_string(),
            date_data_sets: vec![PreviousPeriodDateDataSet {
                data_set: ObjRef::identifier("dataset.created"),
                periods_ago: 1,
            }],
        }),
    );
    assert_eq!(
        serde_json::to_value(convert_measure(&previous).unwrap().definition).unwrap(),
        json!({
            "previousPeriodMeasure": {
                "measureIdentifier": "m1",
                "dateDataSets": [{
                    "dataSet": { "identifier": "dataset.created" },
                    "periodsAgo": 1
                }]
            }
        })
    );

    assert_eq!(
        serde_json::to_value(
            convert_measure(&arithmetic(ArithmeticMeasureOperator::Ratio))
                .unwrap()
                .definition
        )
        .unwrap(),
        json!({
            "arithmeticMeasure": {
                "measureIdentifiers": ["m1", "m2"],
                "operator": "ratio"
            }
        })
    );
}

#[test]
fn unsupported_definition_is_rejected_with_its_payload() {
    let payload = json!({ "inlineDefinition": { "maql": "SELECT 1" } });
    let measure = Measure::new("m1", MeasureDefinition::Unsupported(payload.clone()));

    let err = convert_measure(&measure).unwrap_err();
    assert_eq!(err, AfmError::UnsupportedMeasureDefinition(payload));
    assert_eq!(
        err.to_string(),
        r#"the measure definition is not supported: {"inlineDefinition":{"maql":"SELECT 1"}}"#
    );
}

#[test]
fn measure_value_filters_cannot_filter_a_measure() {
    let mut measure = simple(None, None);
    if let MeasureDefinition::Simple(definition) = &mut measure.definition {
        definition.filters = vec![Filter::measure_value(ObjRef::local_id("m2"), None)];
    }
    assert_eq!(
        convert_measure(&measure),
        Err(AfmError::UnsupportedMeasureFilter {
            measure: "m1".to_string()
        })
    );
}

#[test]
fn attribute_shape() {
    let attribute = Attribute::new("a1", ObjRef::identifier("label.region"));
    assert_eq!(
        serde_json::to_value(convert_attribute(&attribute).unwrap()).unwrap(),
        json!({ "localIdentifier": "a1", "displayForm": { "identifier": "label.region" } })
    );
}
