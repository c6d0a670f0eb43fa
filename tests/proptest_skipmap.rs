extern crate ordered_skipmap;
extern crate proptest;

use ordered_skipmap::skiplist::{SkipMap, SkipMapConfig};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeMap;

proptest! {
    #[test]
    fn prop_traversal_matches_btreemap(
        pairs in vec((any::<i16>(), any::<u8>()), 0..500),
        seed in any::<u32>(),
        percent in 1u32..=100,
    ) {
        let config = SkipMapConfig::default()
            .with_max_level_count(12)
            .with_level_promotion_percent(percent)
            .with_seed([seed, 1, 2, 3]);
        let mut map = SkipMap::with_config(config).unwrap();
        let mut expected = BTreeMap::new();

        for (key, value) in &pairs {
            prop_assert_eq!(map.insert(*key, *value), expected.insert(*key, *value));
        }

        prop_assert_eq!(map.len(), expected.len());
        prop_assert_eq!(
            map.iter().collect::<Vec<_>>(),
            expected.iter().collect::<Vec<_>>(),
        );
        prop_assert!(map.levels() <= 12);
        prop_assert!(map.iter_with_levels().all(|(_, _, levels)| levels >= 1 && levels <= 12));
    }

    #[test]
    fn prop_overwrite_keeps_order(
        keys in vec(any::<i32>(), 1..200),
        value in any::<u64>(),
    ) {
        let mut map = SkipMap::new();
        for key in &keys {
            map.insert(*key, 0u64);
        }
        let before: Vec<i32> = map.iter().map(|(key, _)| *key).collect();

        for key in &keys {
            prop_assert!(map.insert(*key, value).is_some());
        }
        let after: Vec<i32> = map.iter().map(|(key, _)| *key).collect();

        prop_assert_eq!(before, after);
        prop_assert!(map.iter().all(|(_, v)| *v == value));
        prop_assert!(map.iter().zip(map.iter().skip(1)).all(|(l, r)| l.0 < r.0));
    }
}
