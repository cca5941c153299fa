//! Column width validation of the pivot table.

use std::collections::HashSet;

use insight_model::{BucketItem, ColumnWidthItem, Locator, WeakMeasureColumnWidthItem};

use crate::sorting::{contains_item, locators_match_layout};


/// Keeps the column widths that still address the current table layout.
///
/// Weak (per-measure) widths come first, in their original order and at most one per measure:
/// - weak widths whose measure is still present are kept as they are
/// - a measure width holding only a measure locator is turned into a weak width once the table
///   has column attributes, because it can no longer address a single column
///
/// Attribute widths for current row attributes and measure widths whose locators match the
/// layout follow, in their original order. Everything else is dropped without error.
pub fn adapt_column_widths(
    column_widths: &[ColumnWidthItem],
    measures: &[BucketItem],
    row_attributes: &[BucketItem],
    column_attributes: &[BucketItem],
) -> Vec<ColumnWidthItem> {
    let mut weak_measures = HashSet::new();
    let mut adapted: Vec<ColumnWidthItem> = column_widths
        .iter()
        .filter_map(|item| weak_width(item, measures, column_attributes))
        .filter(|weak| weak_measures.insert(weak.measure_identifier().to_string()))
        .map(ColumnWidthItem::WeakMeasure)
        .collect();

    for item in column_widths {
        let valid = match item {
            ColumnWidthItem::Attribute(width) => {
                contains_item(row_attributes, &width.attribute_identifier)
            }
            ColumnWidthItem::Measure(width) => {
                locators_match_layout(&width.locators, measures, column_attributes)
            }
            ColumnWidthItem::WeakMeasure(_) => continue,
        };
        if valid {
            adapted.push(item.clone());
        } else if weak_width(item, measures, column_attributes).is_none() {
            log::debug!("dropping column width {item:?}: it no longer matches the table layout");
        }
    }

    adapted
}

/// The weak width `item` stands for, if any.
fn weak_width(
    item: &ColumnWidthItem,
    measures: &[BucketItem],
    column_attributes: &[BucketItem],
) -> Option<WeakMeasureColumnWidthItem> {
    match item {
        ColumnWidthItem::WeakMeasure(weak) => {
            Some(weak.clone()).filter(|weak| contains_item(measures, weak.measure_identifier()))
        }
        ColumnWidthItem::Measure(width) if !column_attributes.is_empty() => {
            match width.locators.as_slice() {
                [Locator::Measure(locator)]
                    if contains_item(measures, &locator.measure_identifier) =>
                {
                    Some(WeakMeasureColumnWidthItem::new(
                        locator.measure_identifier.clone(),
                        width.width.clone(),
                    ))
                }
                _ => None,
            }
        }
        ColumnWidthItem::Measure(_) | ColumnWidthItem::Attribute(_) => None,
    }
}
