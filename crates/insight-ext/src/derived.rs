use std::collections::HashSet;

use insight_model::{BucketItem, ReferencePoint};

/// Returns a copy of `reference_point` with derived (comparison) measures placed right before
/// their masters.
///
/// Items without a master, items whose master is not in any bucket and items whose
/// `localIdentifier` is already taken are skipped.
pub fn add_new_derived_bucket_items(
    reference_point: &ReferencePoint,
    new_derived_bucket_items: &[BucketItem],
) -> ReferencePoint {
    let mut buckets = reference_point.buckets.clone();
    let mut known: HashSet<String> = buckets
        .iter()
        .flat_map(|bucket| bucket.items.iter())
        .map(|item| item.local_identifier.clone())
        .collect();

    for derived in new_derived_bucket_items {
        let Some(master) = derived.master_local_identifier.as_deref() else {
            log::debug!("`{}` is not a derived item", derived.local_identifier);
            continue;
        };
        if known.contains(&derived.local_identifier) {
            continue;
        }

        let position = buckets.iter().enumerate().find_map(|(bucket_idx, bucket)| {
            bucket
                .items
                .iter()
                .position(|item| item.local_identifier == master)
                .map(|item_idx| (bucket_idx, item_idx))
        });
        let Some((bucket_idx, item_idx)) = position else {
            log::debug!(
                "master `{master}` of derived item `{}` not found",
                derived.local_identifier
            );
            continue;
        };

        buckets[bucket_idx].items.insert(item_idx, derived.clone());
        known.insert(derived.local_identifier.clone());
    }

    ReferencePoint {
        buckets,
        ..reference_point.clone()
    }
}
