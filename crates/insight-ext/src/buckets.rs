//! Reading measures and row/column attributes out of reference point buckets.

use std::collections::HashSet;

use insight_model::{Bucket, BucketItem, BucketName, BucketRole, Total};

/// Items of every bucket playing `role`, in bucket order then item order.
///
/// Items are deduplicated by `localIdentifier`; the first occurrence wins.
pub fn collect_items(buckets: &[Bucket], role: BucketRole) -> Vec<BucketItem> {
    let mut seen = HashSet::new();
    buckets
        .iter()
        .filter(|bucket| bucket_plays(bucket, role))
        .flat_map(|bucket| bucket.items.iter())
        .filter(|item| seen.insert(item.local_identifier.as_str()))
        .cloned()
        .collect()
}

fn bucket_plays(bucket: &Bucket, role: BucketRole) -> bool {
    match BucketName::parse(&bucket.local_identifier) {
        Some(name) => name.role() == role,
        None => {
            log::warn!("unknown bucket `{}` ignored", bucket.local_identifier);
            false
        }
    }
}

fn collect_attributes(buckets: &[Bucket], role: BucketRole) -> Vec<BucketItem> {
    collect_items(buckets, role)
        .into_iter()
        .filter(BucketItem::is_attribute_like)
        .collect()
}

/// Attribute and date items placed on table rows (`attribute`, `attributes`, `view`, `trend`).
pub fn get_row_attributes(buckets: &[Bucket]) -> Vec<BucketItem> {
    collect_attributes(buckets, BucketRole::RowAttributes)
}

/// Attribute and date items placed on table columns (`columns`, `stack`, `segment`).
pub fn get_column_attributes(buckets: &[Bucket]) -> Vec<BucketItem> {
    collect_attributes(buckets, BucketRole::ColumnAttributes)
}

pub fn get_measures(buckets: &[Bucket]) -> Vec<BucketItem> {
    collect_items(buckets, BucketRole::Measures)
}

/// Totals attached to the first row bucket that carries any.
pub fn get_row_totals(buckets: &[Bucket]) -> Vec<Total> {
    buckets
        .iter()
        .filter(|bucket| bucket_plays(bucket, BucketRole::RowAttributes))
        .find_map(|bucket| bucket.totals.clone())
        .unwrap_or_default()
}

/// Removes items whose `localIdentifier` is already in `seen`, recording the survivors.
pub fn remove_duplicate_bucket_items(
    items: Vec<BucketItem>,
    seen: &mut HashSet<String>,
) -> Vec<BucketItem> {
    items
        .into_iter()
        .filter(|item| seen.insert(item.local_identifier.clone()))
        .collect()
}
