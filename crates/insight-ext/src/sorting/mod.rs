//! Sort item validation and the default sort policy of the pivot table.

use insight_model::{BucketFilter, BucketItem, Locator, SortDirection, SortItem};


/// Whether the column a sort item points at can still be seen under `filters`.
///
/// Attribute sorts are always visible. A measure sort is hidden as soon as one of its attribute
/// locators points at an element that some attribute filter removes. Measure value filters and
/// date filters do not hide anything.
pub fn is_sort_item_visible(sort_item: &SortItem, filters: &[BucketFilter]) -> bool {
    match sort_item {
        SortItem::Attribute(_) => true,
        SortItem::Measure(item) => {
            let attribute_filters: Vec<_> = filters
                .iter()
                .filter_map(BucketFilter::as_attribute_filter)
                .collect();
            item.locators
                .iter()
                .filter_map(Locator::as_attribute)
                .all(|locator| {
                    attribute_filters
                        .iter()
                        .all(|filter| filter.admits(&locator.element))
                })
        }
    }
}

/// Whether `locators` address one existing measure column of the table.
///
/// The shape must be one attribute locator per column attribute, in column order, followed by
/// exactly one measure locator for a current measure.
pub(crate) fn locators_match_layout(
    locators: &[Locator],
    measures: &[BucketItem],
    column_attributes: &[BucketItem],
) -> bool {
    let Some((last, attribute_locators)) = locators.split_last() else {
        return false;
    };
    if attribute_locators.len() != column_attributes.len() {
        return false;
    }

    let attributes_match = attribute_locators
        .iter()
        .zip(column_attributes)
        .all(|(locator, column)| match locator {
            Locator::Attribute(locator) => locator.attribute_identifier == column.local_identifier,
            Locator::Measure(_) => false,
        });

    let measure_matches = match last {
        Locator::Measure(locator) => contains_item(measures, &locator.measure_identifier),
        Locator::Attribute(_) => false,
    };

    attributes_match && measure_matches
}

pub(crate) fn contains_item(items: &[BucketItem], local_identifier: &str) -> bool {
    items
        .iter()
        .any(|item| item.local_identifier == local_identifier)
}

/// Keeps the sort items that still address the current table layout, in their original order.
///
/// Attribute sorts must reference a row attribute. Measure sorts must address an existing
/// measure column (see the locator rules above). Everything else is dropped without error.
pub fn adapt_sort_items(
    sort_items: &[SortItem],
    measures: &[BucketItem],
    row_attributes: &[BucketItem],
    column_attributes: &[BucketItem],
) -> Vec<SortItem> {
    sort_items
        .iter()
        .filter(|sort_item| {
            let valid = match sort_item {
                SortItem::Attribute(item) => {
                    contains_item(row_attributes, &item.attribute_identifier)
                }
                SortItem::Measure(item) => {
                    locators_match_layout(&item.locators, measures, column_attributes)
                }
            };
            if !valid {
                log::debug!("dropping sort item {sort_item:?}: it no longer matches the table layout");
            }
            valid
        })
        .cloned()
        .collect()
}

/// Like [`adapt_sort_items`], additionally dropping items hidden by `filters`.
pub fn adapt_visible_sort_items(
    sort_items: &[SortItem],
    filters: &[BucketFilter],
    measures: &[BucketItem],
    row_attributes: &[BucketItem],
    column_attributes: &[BucketItem],
) -> Vec<SortItem> {
    adapt_sort_items(sort_items, measures, row_attributes, column_attributes)
        .into_iter()
        .filter(|sort_item| is_sort_item_visible(sort_item, filters))
        .collect()
}

/// Makes sure a table with rows is always ordered deterministically.
///
/// Existing sorts are kept when at least one of them is a visible user choice: a measure sort,
/// or an attribute sort other than the ascending default on the current or the previous first
/// row. Otherwise they are replaced by an ascending sort on the first row attribute. Without rows
/// there is nothing to sort by and the result is empty.
pub fn add_default_sort(
    sort_items: &[SortItem],
    filters: &[BucketFilter],
    row_attributes: &[BucketItem],
    previous_row_attributes: &[BucketItem],
) -> Vec<SortItem> {
    let Some(first_row) = row_attributes.first() else {
        return Vec::new();
    };
    let previous_first_row = previous_row_attributes.first();

    let is_default_sort = |sort_item: &SortItem| match sort_item {
        SortItem::Attribute(item) => {
            item.direction == SortDirection::Asc
                && (item.attribute_identifier == first_row.local_identifier
                    || previous_first_row
                        .is_some_and(|previous| item.attribute_identifier == previous.local_identifier))
        }
        SortItem::Measure(_) => false,
    };

    let has_visible_custom_sort = sort_items
        .iter()
        .any(|sort_item| is_sort_item_visible(sort_item, filters) && !is_default_sort(sort_item));

    if has_visible_custom_sort {
        return sort_items.to_vec();
    }

    log::debug!(
        "using default ascending sort on first row attribute `{}`",
        first_row.local_identifier
    );
    vec![SortItem::attribute(
        first_row.local_identifier.clone(),
        SortDirection::Asc,
    )]
}
