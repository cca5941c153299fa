use std::collections::BTreeMap;

use insight_model::{
    BucketName, BucketUiConfig, ExportUiConfig, OpenAsReportUiConfig, OverTimeComparisonType,
    UiConfig,
};

pub const MAX_METRICS_COUNT: u32 = 20;
pub const MAX_TABLE_CATEGORIES_COUNT: u32 = 20;
pub const MAX_FILTERS_COUNT: u32 = 20;

fn accepts(types: &[&str]) -> Option<Vec<String>> {
    Some(types.iter().map(|ty| ty.to_string()).collect())
}

fn attribute_bucket(title: &str) -> BucketUiConfig {
    BucketUiConfig {
        accepts: accepts(&["attribute", "date"]),
        allows_reordering: Some(true),
        allows_swapping: Some(true),
        can_add_items: Some(true),
        enabled: Some(true),
        icon: Some(String::new()),
        is_show_in_percent_enabled: Some(false),
        items_limit: Some(MAX_TABLE_CATEGORIES_COUNT),
        title: Some(title.to_string()),
        ..BucketUiConfig::default()
    }
}

fn measures_bucket(is_show_in_percent_enabled: bool) -> BucketUiConfig {
    BucketUiConfig {
        accepts: accepts(&["metric", "fact", "attribute"]),
        allows_duplicate_items: Some(true),
        allows_reordering: Some(true),
        allows_swapping: Some(true),
        can_add_items: Some(true),
        enabled: Some(true),
        icon: Some(String::new()),
        is_show_in_percent_enabled: Some(is_show_in_percent_enabled),
        is_show_in_percent_visible: Some(true),
        items_limit: Some(MAX_METRICS_COUNT),
        title: Some("Measures".to_string()),
        ..BucketUiConfig::default()
    }
}

fn filters_bucket() -> BucketUiConfig {
    BucketUiConfig {
        accepts: accepts(&["attribute", "date"]),
        allows_reordering: Some(false),
        enabled: Some(true),
        is_show_in_percent_enabled: Some(false),
        items_limit: Some(MAX_FILTERS_COUNT),
        ..BucketUiConfig::default()
    }
}

/// Capability descriptor of the pivot table.
///
/// "Show in percent" only makes sense with exactly one row attribute, so the caller decides it.
pub fn pivot_table_ui_config(is_show_in_percent_enabled: bool) -> UiConfig {
    let buckets = BTreeMap::from([
        (
            BucketName::Measures.as_str().to_string(),
            measures_bucket(is_show_in_percent_enabled),
        ),
        (
            BucketName::Attribute.as_str().to_string(),
            attribute_bucket("Rows"),
        ),
        (
            BucketName::Columns.as_str().to_string(),
            attribute_bucket("Columns"),
        ),
        (BucketName::Filters.as_str().to_string(), filters_bucket()),
    ]);

    UiConfig {
        buckets,
        recommendations: Some(BTreeMap::new()),
        export_config: Some(ExportUiConfig {
            supported: Some(true),
        }),
        open_as_report: Some(OpenAsReportUiConfig {
            supported: Some(false),
            warning_message: None,
        }),
        supported_over_time_comparison_types: Some(vec![
            OverTimeComparisonType::SamePeriodPreviousYear,
            OverTimeComparisonType::PreviousPeriod,
        ]),
        ..UiConfig::default()
    }
}
