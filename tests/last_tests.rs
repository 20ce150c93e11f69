#![cfg(feature = "last")]
//! Unit tests for last and last_iterated.

use std::collections::{BTreeSet, HashSet, VecDeque};

use collection_util::last::{last, last_iterated};
use indexmap::IndexSet;
use rstest::rstest;
use uuid::Uuid;

// =============================================================================
// Sequence Variant
// =============================================================================

#[rstest]
fn test_last_list_happy_path() {
    let item_a = Uuid::new_v4();
    let item_b = Uuid::new_v4();
    let item_c = Uuid::new_v4();
    let list = vec![Some(item_a), Some(item_b), Some(item_c)];

    let output = last(Some(&list)).unwrap();

    assert_eq!(output, Some(&item_c));
    assert!(std::ptr::eq(output.unwrap(), list[2].as_ref().unwrap()));
}

#[rstest]
fn test_last_list_empty() {
    let list: Vec<Option<Uuid>> = Vec::new();
    assert_eq!(last(Some(&list)), Ok(None));
}

#[rstest]
fn test_last_list_null_element() {
    let list: Vec<Option<Uuid>> = vec![None];
    assert_eq!(last(Some(&list)), Ok(None));
}

#[rstest]
fn test_last_list_scenario() {
    let list = [Some(1), Some(2), Some(3)];
    assert_eq!(last(Some(&list)), Ok(Some(&3)));
}

#[rstest]
fn test_last_list_null_reference() {
    let missing: Option<&[Option<Uuid>]> = None;
    assert!(last(missing).unwrap_err().is_null_argument());
}

// =============================================================================
// General Collection Variant
// =============================================================================

#[rstest]
fn test_last_collection_happy_path() {
    let item_a = Uuid::new_v4();
    let item_b = Uuid::new_v4();
    let item_c = Uuid::new_v4();
    let mut collection: IndexSet<Option<Uuid>> = IndexSet::new();
    collection.insert(Some(item_a));
    collection.insert(Some(item_b));
    collection.insert(Some(item_c));

    assert_eq!(last_iterated(Some(&collection)), Ok(Some(&item_c)));
}

#[rstest]
fn test_last_collection_reinsert_keeps_first_position() {
    let mut collection: IndexSet<Option<i32>> = IndexSet::new();
    collection.insert(Some(1));
    collection.insert(Some(2));
    collection.insert(Some(1));

    assert_eq!(last_iterated(Some(&collection)), Ok(Some(&2)));
}

#[rstest]
fn test_last_collection_insertion_ordered_only_null() {
    let mut collection: IndexSet<Option<Uuid>> = IndexSet::new();
    collection.insert(None);
    collection.insert(None);

    assert_eq!(collection.len(), 1);
    assert_eq!(last_iterated(Some(&collection)), Ok(None));
}

#[rstest]
fn test_last_collection_insertion_ordered_trailing_null() {
    let item = Uuid::new_v4();
    let collection: IndexSet<Option<Uuid>> = [Some(item), None].into_iter().collect();
    assert_eq!(last_iterated(Some(&collection)), Ok(None));
}

#[rstest]
fn test_last_collection_empty() {
    let collection: HashSet<Option<Uuid>> = HashSet::new();
    assert_eq!(last_iterated(Some(&collection)), Ok(None));
}

#[rstest]
fn test_last_collection_null_element() {
    let mut collection: HashSet<Option<Uuid>> = HashSet::new();
    collection.insert(None);
    assert_eq!(last_iterated(Some(&collection)), Ok(None));
}

#[rstest]
#[case(vec![Some(1), Some(2), Some(3)], Some(3))]
#[case(vec![Some(1), None], None)]
#[case(vec![], None)]
fn test_last_collection_vec_deque(#[case] values: Vec<Option<i32>>, #[case] expected: Option<i32>) {
    let mut collection = VecDeque::new();
    for value in values {
        collection.push_back(value);
    }
    assert_eq!(last_iterated(Some(&collection)), Ok(expected.as_ref()));
}

#[rstest]
fn test_last_collection_b_tree_set_is_greatest() {
    let collection: BTreeSet<Option<i32>> = [Some(8), None, Some(3)].into_iter().collect();
    assert_eq!(last_iterated(Some(&collection)), Ok(Some(&8)));
}

#[rstest]
fn test_last_collection_agrees_with_last_for_vec() {
    let list = vec![Some('a'), None, Some('c')];
    assert_eq!(last_iterated(Some(&list)), last(Some(&list)));
}

#[rstest]
fn test_last_collection_null_reference() {
    let missing: Option<&BTreeSet<Option<i32>>> = None;
    let error = last_iterated(missing).unwrap_err();
    assert_eq!(
        error.to_string(),
        "last_iterated: argument `collection` must not be null"
    );
}
