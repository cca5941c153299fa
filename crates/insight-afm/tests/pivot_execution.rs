use insight_afm::{convert_execution, AfmError};
use insight_model::execution::{
    Attribute, AttributeElements, Dimension, ExecutionDefinition, Filter, Measure, ObjRef,
    MEASURE_GROUP_IDENTIFIER,
};
use insight_model::{Locator, SortDirection, SortItem, Total, TotalType};
use pretty_assertions::assert_eq;
use serde_json::json;

fn pivot_definition() -> ExecutionDefinition {
    ExecutionDefinition {
        workspace: "PROJECTID".to_string(),
        attributes: vec![
            Attribute::new("a1", ObjRef::identifier("label.region")),
            Attribute::new("a2", ObjRef::identifier("label.product")),
        ],
        measures: vec![Measure::simple("m1", ObjRef::identifier("fact.amount")).with_title("Amount")],
        filters: vec![
            Filter::negative_attribute(
                ObjRef::identifier("label.region"),
                AttributeElements::uris(["/e/9"]),
            ),
            Filter::positive_attribute(
                ObjRef::identifier("label.product"),
                AttributeElements::uris(Vec::<String>::new()),
            ),
            Filter::absolute_date(ObjRef::identifier("dataset.created"), "2020-01-01", "2020-12-31"),
        ],
        sort_by: vec![SortItem::measure(
            SortDirection::Desc,
            vec![Locator::attribute("a2", "/e/1"), Locator::measure("m1")],
        )],
        dimensions: vec![
            Dimension {
                item_identifiers: vec!["a1".to_string()],
                totals: vec![Total {
                    measure_identifier: "m1".to_string(),
                    total_type: TotalType::Sum,
                    attribute_identifier: "a1".to_string(),
                    alias: None,
                }],
            },
            Dimension::new(vec!["a2".to_string(), MEASURE_GROUP_IDENTIFIER.to_string()]),
        ],
    }
}

#[test]
fn pivot_execution_payload() {
    let payload = serde_json::to_value(convert_execution(&pivot_definition()).unwrap()).unwrap();

    assert_eq!(
        payload["execution"]["afm"]["filters"],
        json!([
            {
                "negativeAttributeFilter": {
                    "displayForm": { "identifier": "label.region" },
                    "notIn": { "uris": ["/e/9"] }
                }
            },
            {
                "absoluteDateFilter": {
                    "dataSet": { "identifier": "dataset.created" },
                    "from": "2020-01-01",
                    "to": "2020-12-31"
                }
            }
        ])
    );
    assert_eq!(payload["execution"]["afm"]["measures"][0]["alias"], json!("Amount"));
    assert_eq!(payload["execution"]["afm"].get("nativeTotals"), None);
    assert_eq!(
        payload["execution"]["resultSpec"],
        json!({
            "dimensions": [
                {
                    "itemIdentifiers": ["a1"],
                    "totals": [{
                        "measureIdentifier": "m1",
                        "type": "sum",
                        "attributeIdentifier": "a1"
                    }]
                },
                { "itemIdentifiers": ["a2", "measureGroup"] }
            ],
            "sorts": [{
                "measureSortItem": {
                    "direction": "desc",
                    "locators": [
                        { "attributeLocatorItem": { "attributeIdentifier": "a2", "element": "/e/1" } },
                        { "measureLocatorItem": { "measureIdentifier": "m1" } }
                    ]
                }
            }]
        })
    );
}

#[test]
fn local_display_form_is_rejected() {
    let mut definition = pivot_definition();
    definition.attributes[1].display_form = ObjRef::local_id("a2");

    assert_eq!(
        convert_execution(&definition),
        Err(AfmError::UnexpectedLocalReference("a2".to_string()))
    );
}
