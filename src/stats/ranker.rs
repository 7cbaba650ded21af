use std::collections::{BTreeMap, HashMap};

use super::models::Tier;

/// Groups players by identical metric value and returns the top `limit`
/// distinct value tiers, highest value first.
///
/// Values are compared numerically. Players inside a tier are sorted by name
/// so the output is deterministic regardless of map iteration order.
pub fn top_tiers(metrics: &HashMap<String, u32>, limit: usize) -> Vec<Tier> {
    let mut grouped: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for (player, value) in metrics {
        grouped.entry(*value).or_default().push(player.clone());
    }

    grouped
        .into_iter()
        .rev()
        .take(limit)
        .map(|(value, mut players)| {
            players.sort();
            Tier { value, players }
        })
        .collect()
}
