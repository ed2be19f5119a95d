use bst_dict::{MergePolicy, Tree};

use std::collections::BTreeMap;

const POLICIES: [MergePolicy; 2] = [MergePolicy::Overwrite, MergePolicy::KeepExisting];

#[quickcheck]
fn empty_is_an_identity(pairs: Vec<(i8, i8)>) -> bool {
    let tree = Tree::from_list(pairs);

    POLICIES.iter().all(|&policy| {
        tree.clone().merge(Tree::empty(), policy) == tree
            && Tree::empty().merge(tree.clone(), policy) == tree
    })
}

#[quickcheck]
fn merge_is_associative(a: Vec<(i8, i8)>, b: Vec<(i8, i8)>, c: Vec<(i8, i8)>) -> bool {
    let (a, b, c) = (Tree::from_list(a), Tree::from_list(b), Tree::from_list(c));

    POLICIES.iter().all(|&policy| {
        let left = a.clone().merge(b.clone(), policy).merge(c.clone(), policy);
        let right = a.clone().merge(b.clone().merge(c.clone(), policy), policy);
        left == right
    })
}

#[quickcheck]
fn concat_lets_the_other_tree_win(a: Vec<(i8, i8)>, b: Vec<(i8, i8)>) -> bool {
    let mut expected: BTreeMap<_, _> = a.iter().copied().collect();
    expected.extend(b.iter().copied());

    let merged = Tree::from_list(a).concat(Tree::from_list(b));
    merged.len() == expected.len() && merged.iter().eq(expected.iter())
}

#[quickcheck]
fn concat_keep_existing_lets_this_tree_win(a: Vec<(i8, i8)>, b: Vec<(i8, i8)>) -> bool {
    let mut expected: BTreeMap<_, _> = a.iter().copied().collect();
    for (k, v) in Tree::from_list(b.iter().copied()) {
        expected.entry(k).or_insert(v);
    }

    let merged = Tree::from_list(a).concat_keep_existing(Tree::from_list(b));
    merged.len() == expected.len() && merged.iter().eq(expected.iter())
}
