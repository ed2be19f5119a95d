use bst_dict::Tree;

use std::collections::{BTreeMap, HashSet};

/// The entries `Tree::from_list(pairs)` should end up with: later duplicates win.
fn model(pairs: &[(i8, i8)]) -> BTreeMap<i8, i8> {
    pairs.iter().copied().collect()
}

#[quickcheck]
fn size_counts_distinct_keys(pairs: Vec<(i8, i8)>) -> bool {
    let mut tree = Tree::new();
    let mut keys = HashSet::new();

    pairs.iter().all(|&(k, v)| {
        tree.add(k, v);
        keys.insert(k);
        tree.len() == keys.len()
    })
}

#[quickcheck]
fn search_finds_the_last_added_value(pairs: Vec<(i8, i8)>, key: i8) -> bool {
    let tree = Tree::from_list(pairs.iter().copied());
    let expected = pairs.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| v);

    tree.search(&key) == expected
}

#[quickcheck]
fn search_after_remove_is_absent(pairs: Vec<(i8, i8)>, key: i8, value: i8) -> bool {
    let mut tree = Tree::from_list(pairs);
    tree.add(key, value);
    let found = tree.search(&key) == Some(&value);

    tree.remove(&key);
    found && tree.search(&key).is_none()
}

#[quickcheck]
fn set_only_touches_existing_keys(pairs: Vec<(i8, i8)>, key: i8, value: i8) -> bool {
    let mut tree = Tree::from_list(pairs.iter().copied());
    let mut map = model(&pairs);

    let previous = tree.set(&key, value);
    let expected = map.get_mut(&key).map(|slot| std::mem::replace(slot, value));

    previous == expected && tree.len() == map.len() && tree.iter().eq(map.iter())
}

#[quickcheck]
fn to_list_is_strictly_ascending(pairs: Vec<(i8, i8)>) -> bool {
    let tree = Tree::from_list(pairs.iter().copied());
    let list = tree.to_list();

    list.windows(2).all(|w| w[0].0 < w[1].0) && list.into_iter().eq(model(&pairs).iter())
}

#[quickcheck]
fn reverse_is_to_list_reversed(pairs: Vec<(i8, i8)>) -> bool {
    let tree = Tree::from_list(pairs);
    let mut list = tree.to_list();
    list.reverse();

    tree.reverse() == list
}

#[quickcheck]
fn remove_absent_key_changes_nothing(pairs: Vec<(i8, i8)>, key: i8) -> bool {
    let mut tree = Tree::from_list(pairs.into_iter().filter(|(k, _)| *k != key));
    let before: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let len = tree.len();

    tree.remove(&key).is_none()
        && tree.len() == len
        && tree.iter().map(|(k, v)| (*k, *v)).eq(before)
}

#[quickcheck]
fn remove_present_key_removes_exactly_that_key(pairs: Vec<(i8, i8)>) -> bool {
    let Some(&(key, _)) = pairs.first() else {
        return true;
    };
    let mut tree = Tree::from_list(pairs.iter().copied());
    let mut map = model(&pairs);
    let len = tree.len();

    tree.remove(&key) == map.remove(&key) && tree.len() == len - 1 && tree.iter().eq(map.iter())
}

#[quickcheck]
fn removing_everything_empties_the_tree(pairs: Vec<(i8, i8)>, order: Vec<i8>) -> bool {
    let mut tree = Tree::from_list(pairs.iter().copied());
    for key in order.iter().chain(pairs.iter().map(|(k, _)| k)) {
        tree.remove(key);
    }

    tree.is_empty() && tree.len() == 0 && tree.iter().next().is_none()
}

#[quickcheck]
fn member_scans_current_values(pairs: Vec<(i8, i8)>, value: i8) -> bool {
    let tree = Tree::from_list(pairs.iter().copied());
    tree.member(&value) == model(&pairs).values().any(|v| *v == value)
}

#[quickcheck]
fn filter_keeps_ascending_matches(pairs: Vec<(i8, i8)>) -> bool {
    let tree = Tree::from_list(pairs);
    let even = tree.filter(|k, _| k % 2 == 0);
    let expected: Vec<_> = tree.to_list().into_iter().filter(|(k, _)| *k % 2 == 0).collect();

    even == expected
}

#[quickcheck]
fn reduce_visits_keys_in_ascending_order(pairs: Vec<(i8, i8)>) -> bool {
    let tree = Tree::from_list(pairs.iter().copied());
    let folded = tree.reduce(String::new(), |acc, k, _| format!("{}{},", acc, k));
    let expected: String = model(&pairs).keys().map(|k| format!("{},", k)).collect();

    folded == expected
}

#[quickcheck]
fn map_collisions_keep_the_larger_source_key(pairs: Vec<(i8, i8)>) -> bool {
    let tree = Tree::from_list(pairs.iter().copied());
    let mapped = tree.map(|k, v| (k / 4, (*k, *v)));

    let mut expected = BTreeMap::new();
    for (k, v) in model(&pairs) {
        expected.insert(k / 4, (k, v));
    }

    mapped.iter().eq(expected.iter())
}

#[quickcheck]
fn iter_from_matches_range(pairs: Vec<(i8, i8)>, start: i8) -> bool {
    let tree = Tree::from_list(pairs.iter().copied());
    tree.iter_from(&start).eq(model(&pairs).range(start..))
}

#[quickcheck]
fn equality_ignores_insertion_order(pairs: Vec<(i8, i8)>) -> bool {
    let map = model(&pairs);
    let ascending = Tree::from_list(map.iter().map(|(k, v)| (*k, *v)));
    let descending = Tree::from_list(map.iter().rev().map(|(k, v)| (*k, *v)));

    ascending == descending && ascending == Tree::from_list(pairs)
}
