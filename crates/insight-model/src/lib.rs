//! `insight-model` defines the data exchanged between an analytical editor and pluggable
//! visualizations.
//!
//! Everything here is plain data with a JSON-safe `serde` schema:
//! - reference points (buckets, bucket items, filters, properties) and their extended form
//! - sort items and column width items, including their locators
//! - the `uiConfig` capability descriptor
//! - the execution model (measures, attributes, filters, insights, execution definitions)
//!
//! Behavior lives in `insight-ext`; values here are never mutated in place by it.

mod bucket_names;
mod column_width;
pub mod execution;
mod filters;
mod reference_point;
mod sort;
mod ui_config;

pub use bucket_names::{bucket_role, BucketName, BucketRole};
pub use column_width::{
    AttributeColumnWidthItem, AutoWidth, ColumnWidth, ColumnWidthItem, MeasureColumnWidthItem,
    WeakMeasureColumnWidthItem, WeakMeasureLocator,
};
pub use filters::{
    AttributeBucketFilter, BucketFilter, BucketFilterElement, BucketFilterInterval,
    ComparisonCondition, ComparisonConditionOperator, DateBucketFilter, MeasureValueBucketFilter,
    MeasureValueCondition, RangeCondition, RangeConditionOperator,
};
pub use reference_point::{
    Bucket, BucketItem, BucketItemType, Controls, ExtendedReferencePoint, FiltersBucket,
    FiltersBucketItem, ItemSort, ReferencePoint, Total, TotalType, VisualizationProperties,
};
pub use sort::{
    AttributeLocatorItem, AttributeSortItem, Locator, MeasureLocatorItem, MeasureSortItem,
    SortDirection, SortItem,
};
pub use ui_config::{
    BucketUiConfig, CustomError, ExportUiConfig, OpenAsReportUiConfig, OptionalStacking,
    OverTimeComparisonType, UiConfig,
};
