use insight_model::execution::{merge_filters, AttributeElements, Filter, ObjRef};
use insight_model::{ComparisonCondition, ComparisonConditionOperator, MeasureValueCondition};
use pretty_assertions::assert_eq;

fn attribute_filter(display_form: &str, uris: &[&str]) -> Filter {
    Filter::positive_attribute(
        ObjRef::identifier(display_form),
        AttributeElements::uris(uris.iter().copied()),
    )
}

fn date_filter(data_set: &str, from: i32, to: i32) -> Filter {
    Filter::relative_date(ObjRef::identifier(data_set), "GDC.time.year", from, to)
}

#[test]
fn no_added_filters_keeps_insight_filters() {
    let insight = vec![attribute_filter("label.a", &["/e/1"]), date_filter("created", -1, 0)];
    assert_eq!(merge_filters(&insight, &[]), insight);
}

#[test]
fn attribute_filters_are_appended() {
    let insight = vec![attribute_filter("label.a", &["/e/1"])];
    let added = vec![
        attribute_filter("label.a", &["/e/2"]),
        Filter::negative_attribute(ObjRef::uri("/df/2"), AttributeElements::values(["x"])),
    ];

    let merged = merge_filters(&insight, &added);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0], insight[0]);
    assert_eq!(&merged[1..], added.as_slice());
}

#[test]
fn date_filter_on_same_data_set_replaces_insight_date_filter() {
    let insight = vec![date_filter("created", -3, 0), date_filter("closed", -1, 0)];
    let added = vec![Filter::absolute_date(
        ObjRef::identifier("created"),
        "2019-01-01",
        "2019-12-31",
    )];

    let merged = merge_filters(&insight, &added);
    assert_eq!(merged, vec![date_filter("closed", -1, 0), added[0].clone()]);
}

#[test]
fn all_time_filter_removes_insight_date_filter_and_is_not_added() {
    let insight = vec![date_filter("created", -3, 0), attribute_filter("label.a", &["/e/1"])];
    let added = vec![Filter::all_time(ObjRef::identifier("created"))];

    let merged = merge_filters(&insight, &added);
    assert_eq!(merged, vec![attribute_filter("label.a", &["/e/1"])]);
}

#[test]
fn date_filter_on_other_data_set_is_added_alongside() {
    let insight = vec![date_filter("created", -3, 0)];
    let added = vec![date_filter("closed", -1, 0)];

    let merged = merge_filters(&insight, &added);
    assert_eq!(merged, vec![date_filter("created", -3, 0), date_filter("closed", -1, 0)]);
}

#[test]
fn measure_value_filters_are_appended() {
    let insight = vec![attribute_filter("label.a", &["/e/1"])];
    let added = vec![Filter::measure_value(
        ObjRef::local_id("m1"),
        Some(MeasureValueCondition::Comparison(ComparisonCondition {
            operator: ComparisonConditionOperator::GreaterThan,
            value: 5.0,
        })),
    )];

    let merged = merge_filters(&insight, &added);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[1], added[0]);
}

#[test]
fn filter_wire_shape_uses_camel_case_tags() {
    let filter = attribute_filter("label.a", &["/e/1"]);
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        serde_json::json!({
            "positiveAttributeFilter": {
                "displayForm": { "identifier": "label.a" },
                "in": { "uris": ["/e/1"] }
            }
        })
    );

    let all_time = Filter::all_time(ObjRef::identifier("created"));
    assert!(all_time.is_all_time_date_filter());
    assert_eq!(
        serde_json::to_value(&all_time).unwrap(),
        serde_json::json!({ "relativeDateFilter": { "dataSet": { "identifier": "created" } } })
    );
}
