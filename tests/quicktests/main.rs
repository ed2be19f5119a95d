//! Property tests for `bst_dict::Tree`, checked against `std::collections::BTreeMap` as a model.

#[macro_use]
extern crate quickcheck_macros;

mod dictionary;
mod merge;
