//! Trace reconciliation: one hop per node identity, ordered by start time.

use std::collections::HashMap;

use confluence_core::models::{Hop, ShardResponse};

/// Replace `merged`'s trace with the reconciled trace across all inputs.
///
/// Every hop in `merged`'s own trace and in each shard's trace is keyed by
/// node identity; later entries overwrite earlier ones, so at most one hop
/// survives per node. The survivors are sorted ascending by start time
/// (nanosecond resolution breaks sub-second ties) and swapped in wholesale.
/// Shard responses are read-only here.
///
/// An empty shard list is not an error: the merged trace simply ends up
/// holding its own deduplicated hops (or nothing).
pub fn merge(merged: &mut ShardResponse, shards: &[ShardResponse]) {
    let mut by_identity: HashMap<(&str, &str), &Hop> = HashMap::new();
    let own = merged.trace.iter();
    let reported = shards.iter().flat_map(|shard| shard.trace.iter());
    for hop in own.chain(reported) {
        by_identity.insert(hop.identity(), hop);
    }

    let mut reconciled: Vec<Hop> = by_identity.into_values().cloned().collect();
    reconciled.sort_by_key(|hop| hop.start_time);
    merged.trace = reconciled;
}
