// HashMap / Dictionary property tests against a std::collections::HashMap model.
//
// Property 1: random insert/erase/get_or_insert_default/clear sequences.
//  - Model: std HashMap with first-insert-wins semantics.
//  - Invariant after each step: len, contains_key and at match the model;
//    capacity is a power of two; after an insert len/capacity <= 0.75;
//    after an erase capacity == 1 or len/capacity >= 0.25.
//
// Property 2: iteration yields every live entry exactly once.
//
// Property 3: Dictionary::merge is an upsert and is idempotent.
use std::collections::HashMap as Model;
use std::hash::BuildHasherDefault;

use chain_hash::Dictionary;
use chain_hash::Error;
use chain_hash::HashMap;
use proptest::prelude::*;
use siphasher::sip::SipHasher;

type Map = HashMap<u16, u32, BuildHasherDefault<SipHasher>>;
type Dict = Dictionary<BuildHasherDefault<SipHasher>>;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, u32),
    Erase(u16),
    Bump(u16),
    Clear,
}

fn op_strategy(keys: u16) -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..keys, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        4 => (0..keys).prop_map(Op::Erase),
        2 => (0..keys).prop_map(Op::Bump),
        1 => Just(Op::Clear),
    ]
}

fn assert_shape(map: &Map) -> Result<(), TestCaseError> {
    prop_assert!(map.capacity().is_power_of_two());
    prop_assert_eq!(map.iter().count(), map.len());
    Ok(())
}

proptest! {
    #[test]
    fn prop_map_matches_model(ops in proptest::collection::vec(op_strategy(64), 1..400)) {
        let mut map = Map::default();
        let mut model: Model<u16, u32> = Model::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let inserted = map.insert(k, v);
                    prop_assert_eq!(inserted, !model.contains_key(&k));
                    model.entry(k).or_insert(v);
                    prop_assert!(map.load_factor() <= 0.75);
                }
                Op::Erase(k) => {
                    let erased = map.erase(&k);
                    prop_assert_eq!(erased, model.remove(&k).is_some());
                    if erased {
                        prop_assert!(map.capacity() == 1 || map.load_factor() >= 0.25);
                    }
                }
                Op::Bump(k) => {
                    *map.get_or_insert_default(k) += 1;
                    *model.entry(k).or_default() += 1;
                    prop_assert!(map.load_factor() <= 0.75);
                }
                Op::Clear => {
                    let capacity = map.capacity();
                    map.clear();
                    model.clear();
                    prop_assert_eq!(map.capacity(), capacity);
                }
            }

            prop_assert_eq!(map.len(), model.len());
            assert_shape(&map)?;
        }

        for k in 0..64u16 {
            match model.get(&k) {
                Some(v) => {
                    prop_assert!(map.contains_key(&k));
                    prop_assert_eq!(map.at(&k), Ok(v));
                    let index = map.bucket_index(&k).unwrap();
                    prop_assert!(index < map.capacity());
                    prop_assert!(map.bucket_size(&k).unwrap() >= 1);
                }
                None => {
                    prop_assert!(!map.contains_key(&k));
                    prop_assert_eq!(map.at(&k), Err(Error::KeyNotFound));
                    prop_assert_eq!(map.bucket_index(&k), Err(Error::KeyNotFound));
                }
            }
        }
    }

    #[test]
    fn prop_iteration_is_complete(keys in proptest::collection::hash_set(any::<u16>(), 0..500)) {
        let mut map = Map::default();
        for &k in &keys {
            prop_assert!(map.insert(k, u32::from(k) * 2));
        }

        let mut seen: Vec<u16> = Vec::with_capacity(keys.len());
        for (k, v) in &map {
            prop_assert_eq!(*v, u32::from(*k) * 2);
            seen.push(*k);
        }
        prop_assert_eq!(seen.len(), keys.len());
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), keys.len());
        prop_assert!(seen.iter().all(|k| keys.contains(k)));
    }

    #[test]
    fn prop_clone_equals_source(keys in proptest::collection::vec(any::<u16>(), 0..200)) {
        let mut map = Map::default();
        for &k in &keys {
            map.insert(k, u32::from(k));
        }

        let copy = map.clone();
        prop_assert_eq!(copy.capacity(), map.capacity());
        prop_assert!(copy == map);
    }

    #[test]
    fn prop_merge_is_idempotent_upsert(
        base in proptest::collection::vec(("[a-e]{1,2}", "[0-9]{1,2}"), 0..30),
        pairs in proptest::collection::vec(("[a-e]{1,2}", "[0-9]{1,2}"), 0..30),
    ) {
        let mut dict = Dict::default();
        let mut model: Model<String, String> = Model::new();
        for (k, v) in &base {
            dict.insert(k.as_str(), v.as_str());
            model.entry(k.clone()).or_insert_with(|| v.clone());
        }

        dict.merge(pairs.iter().cloned());
        for (k, v) in &pairs {
            model.insert(k.clone(), v.clone());
        }

        prop_assert_eq!(dict.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(dict.at(k), Ok(v));
        }

        let once = dict.clone();
        dict.merge(pairs);
        prop_assert!(dict == once);
    }
}
