#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use insight_ext::visualization::PushData;
use insight_ext::{
    dummy_backend, FeatureFlags, PluggablePivotTable, RenderedComponent, Renderer, VisCallbacks,
    VisConstruct, VisualizationEnvironment, VisualizationError,
};
use insight_model::execution::{Attribute, AttributeOrMeasure, Insight, InsightBucket, Measure, ObjRef};
use insight_model::{
    AttributeBucketFilter, Bucket, BucketFilterElement, BucketItem, FiltersBucket,
    FiltersBucketItem, ReferencePoint, Total, TotalType, VisualizationProperties,
};

pub const ELEMENT: &str = "#pivot-table";

#[derive(Default)]
pub struct RecordingCallbacks {
    pub pushed: Mutex<Vec<PushData>>,
    pub errors: Mutex<Vec<String>>,
}

impl VisCallbacks for RecordingCallbacks {
    fn push_data(&self, data: PushData) {
        self.pushed.lock().unwrap().push(data);
    }

    fn on_error(&self, error: &VisualizationError) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    fn on_loading_changed(&self, _is_loading: bool) {}

    fn after_render(&self) {}
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub rendered: Mutex<Vec<(RenderedComponent, String)>>,
    pub unmounted: Mutex<Vec<String>>,
}

impl Renderer for RecordingRenderer {
    fn render(&self, component: RenderedComponent, element: &str) {
        self.rendered
            .lock()
            .unwrap()
            .push((component, element.to_string()));
    }

    fn unmount(&self, element: &str) {
        self.unmounted.lock().unwrap().push(element.to_string());
    }
}

pub struct Harness {
    pub table: PluggablePivotTable,
    pub callbacks: Arc<RecordingCallbacks>,
    pub renderer: Arc<RecordingRenderer>,
}

pub fn harness(feature_flags: FeatureFlags) -> Harness {
    harness_with(feature_flags, VisualizationProperties::default())
}

pub fn harness_with(
    feature_flags: FeatureFlags,
    visualization_properties: VisualizationProperties,
) -> Harness {
    let callbacks = Arc::new(RecordingCallbacks::default());
    let renderer = Arc::new(RecordingRenderer::default());
    let table = PluggablePivotTable::new(VisConstruct {
        backend: dummy_backend(),
        project_id: "PROJECTID".to_string(),
        element: ELEMENT.to_string(),
        config_panel_element: None,
        callbacks: callbacks.clone(),
        environment: VisualizationEnvironment::None,
        locale: None,
        feature_flags,
        visualization_properties,
        renderer: renderer.clone(),
    });
    Harness {
        table,
        callbacks,
        renderer,
    }
}

pub fn m(id: &str) -> BucketItem {
    BucketItem::metric(id, format!("fact.{id}"))
}

pub fn a(id: &str) -> BucketItem {
    BucketItem::attribute(id, format!("attr.{id}"))
}

pub fn reference_point(buckets: Vec<Bucket>) -> ReferencePoint {
    ReferencePoint {
        buckets,
        ..ReferencePoint::default()
    }
}

/// measures [m1], view [a1], stack [a2]
pub fn simple_stacked() -> ReferencePoint {
    reference_point(vec![
        Bucket::new("measures", vec![m("m1")]),
        Bucket::new("view", vec![a("a1")]),
        Bucket::new("stack", vec![a("a2")]),
    ])
}

/// measures [m1, m2, m3], view [a1, a2], segment [a3]
pub fn multiple_metrics_and_categories() -> ReferencePoint {
    reference_point(vec![
        Bucket::new("measures", vec![m("m1"), m("m2"), m("m3")]),
        Bucket::new("view", vec![a("a1"), a("a2")]),
        Bucket::new("segment", vec![a("a3")]),
    ])
}

/// The same attribute dropped in both view and stack.
pub fn same_category_and_stack() -> ReferencePoint {
    reference_point(vec![
        Bucket::new("measures", vec![m("m1")]),
        Bucket::new("view", vec![a("a1")]),
        Bucket::new("stack", vec![a("a1")]),
    ])
}

pub fn sum_total(measure: &str, attribute: &str) -> Total {
    Total {
        measure_identifier: measure.to_string(),
        total_type: TotalType::Sum,
        attribute_identifier: attribute.to_string(),
        alias: None,
    }
}

/// A table with a grand total and a subtotal already in place.
pub fn table_with_totals() -> ReferencePoint {
    reference_point(vec![
        Bucket::new("measures", vec![m("m1"), m("m2")]),
        Bucket::new("attribute", vec![a("a1"), a("a2")])
            .with_totals(vec![sum_total("m1", "a1"), sum_total("m2", "a2")]),
        Bucket::new("columns", Vec::new()),
    ])
}

/// A filter bucket keeping only `element_uri` of a2.
pub fn filters_keeping_element(element_uri: &str) -> FiltersBucket {
    FiltersBucket::new(vec![FiltersBucketItem::from(a("a2").with_filters(vec![
        AttributeBucketFilter::positive(
            "attr.a2",
            vec![BucketFilterElement::new("Element", element_uri)],
        )
        .into(),
    ]))])
}

pub fn measure(id: &str) -> AttributeOrMeasure {
    AttributeOrMeasure::Measure(Measure::simple(id, ObjRef::identifier(format!("fact.{id}"))))
}

pub fn attribute(id: &str) -> AttributeOrMeasure {
    AttributeOrMeasure::Attribute(Attribute::new(
        id,
        ObjRef::identifier(format!("label.{id}")),
    ))
}

/// measures [m1], attribute [a1], columns [a2]
pub fn table_insight() -> Insight {
    Insight {
        identifier: "insight".to_string(),
        buckets: vec![
            InsightBucket::new("measures", vec![measure("m1")]),
            InsightBucket::new("attribute", vec![attribute("a1")]),
            InsightBucket::new("columns", vec![attribute("a2")]),
        ],
        ..Insight::default()
    }
}
