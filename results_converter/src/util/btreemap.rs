//!
//! Ordered map helpers.
//!

use std::collections::BTreeMap;

/// Returns an iterator over the entries whose keys are present in both maps.
///
/// # Arguments
///
/// * `map1` - The map driving the iteration order.
/// * `map2` - The map matching keys are removed from.
///
/// # Returns
///
/// An iterator over tuples `(K, V1, V2)` in ascending key order, where `V1`
/// comes from `map1` and `V2` comes from `map2`.
pub fn intersect_keys<K, V1, V2>(
    map1: BTreeMap<K, V1>,
    mut map2: BTreeMap<K, V2>,
) -> impl Iterator<Item = (K, V1, V2)>
where
    K: Ord,
{
    map1.into_iter()
        .filter_map(move |(key, value1)| map2.remove(&key).map(|value2| (key, value1, value2)))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::intersect_keys;

    #[test]
    fn common_keys_only() {
        let first: BTreeMap<&str, u64> = [("deflate", 100), ("inflate", 50), ("crc32", 8)].into();
        let second: BTreeMap<&str, u64> = [("inflate", 60), ("deflate", 120)].into();
        assert_eq!(
            intersect_keys(first, second).collect::<Vec<_>>(),
            vec![("deflate", 100, 120), ("inflate", 50, 60)]
        );
    }
}
