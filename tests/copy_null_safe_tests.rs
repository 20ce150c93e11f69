#![cfg(feature = "copy")]
//! Unit tests for copy_null_safe.

use std::collections::HashSet;

use collection_util::copy::copy_null_safe;
use collection_util::error::{CollectionError, UnsupportedMutationError};
use collection_util::frozen::{FrozenList, FrozenSet};
use collection_util::mutation::{MutableCollection, MutableSequence};
use rstest::rstest;
use uuid::Uuid;

fn random() -> Option<Uuid> {
    Some(Uuid::new_v4())
}

// =============================================================================
// Sequence Variant
// =============================================================================

#[rstest]
fn test_copy_list_empty() {
    let expected: Vec<Option<Uuid>> = Vec::new();
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert!(output.is_empty());
}

#[rstest]
fn test_copy_list_one_null() {
    let expected: Vec<Option<Uuid>> = vec![None];
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert_eq!(output, expected);
    assert_ne!(output.as_slice().as_ptr(), expected.as_ptr());
}

#[rstest]
fn test_copy_list_one_non_null() {
    let expected = vec![random()];
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert_eq!(output, expected);
    assert_ne!(output.as_slice().as_ptr(), expected.as_ptr());
}

#[rstest]
fn test_copy_list_no_nulls() {
    let expected = vec![random(), random(), random()];
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert_eq!(output, expected);
}

#[rstest]
fn test_copy_list_only_nulls() {
    let expected: Vec<Option<Uuid>> = vec![None, None, None];
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert_eq!(output.len(), 3);
    assert_eq!(output, expected);
}

#[rstest]
fn test_copy_list_mixed() {
    let expected = vec![random(), None, random(), None, random()];
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert_eq!(output, expected);
}

#[rstest]
fn test_copy_list_scenario() {
    let source = vec![None, Some(1), None];
    let output = copy_null_safe(Some(&source)).unwrap();
    assert_eq!(output, [None, Some(1), None]);
}

#[rstest]
fn test_copy_list_modification() {
    let source = vec![random(), random()];
    let mut copy = copy_null_safe(Some(&source)).unwrap();

    let result = copy.try_add(random());

    assert_eq!(
        result,
        Err(CollectionError::UnsupportedMutation(UnsupportedMutationError {
            collection_name: "FrozenList",
            method_name: "try_add",
        }))
    );
    assert_eq!(copy, source);
}

#[rstest]
fn test_copy_list_every_write_rejected() {
    let source = vec![random(), None];
    let mut copy = copy_null_safe(Some(&source)).unwrap();

    assert!(copy.try_add(None).unwrap_err().is_unsupported_mutation());
    assert!(copy.try_remove_value(&None).unwrap_err().is_unsupported_mutation());
    assert!(copy.try_clear().unwrap_err().is_unsupported_mutation());
    assert!(copy.try_insert(0, None).unwrap_err().is_unsupported_mutation());
    assert!(copy.try_replace(0, None).unwrap_err().is_unsupported_mutation());
    assert!(copy.try_remove_at(0).unwrap_err().is_unsupported_mutation());
    assert_eq!(copy, source);
}

#[rstest]
fn test_copy_list_post_modification() {
    let value = random();
    let mut source = vec![random(), random()];
    let copy = copy_null_safe(Some(&source)).unwrap();

    source.push(value);
    source[0] = None;

    assert!(!copy.contains(&value));
    assert!(copy[0].is_some());
    assert_eq!(copy.len(), 2);
}

#[rstest]
fn test_copy_list_null_reference() {
    let missing: Option<&Vec<Option<Uuid>>> = None;
    assert!(copy_null_safe(missing).unwrap_err().is_null_argument());
}

// =============================================================================
// Set Variant
// =============================================================================

#[rstest]
fn test_copy_set_empty() {
    let expected: HashSet<Option<Uuid>> = HashSet::new();
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert!(output.is_empty());
}

#[rstest]
fn test_copy_set_no_nulls() {
    let expected: HashSet<Option<Uuid>> = [random(), random(), random()].into_iter().collect();
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert_eq!(output, expected);
}

#[rstest]
fn test_copy_set_only_nulls() {
    let mut expected: HashSet<Option<Uuid>> = HashSet::new();
    expected.insert(None);
    expected.insert(None);
    expected.insert(None);

    let output = copy_null_safe(Some(&expected)).unwrap();

    assert_eq!(output.len(), 1);
    assert_eq!(output, expected);
}

#[rstest]
fn test_copy_set_mixed() {
    let expected: HashSet<Option<Uuid>> = [random(), None, random(), None, random()]
        .into_iter()
        .collect();
    let output = copy_null_safe(Some(&expected)).unwrap();
    assert_eq!(output.len(), 4);
    assert_eq!(output, expected);
}

#[rstest]
fn test_copy_set_modification() {
    let source: HashSet<Option<Uuid>> = [random(), random()].into_iter().collect();
    let mut copy = copy_null_safe(Some(&source)).unwrap();

    let result = copy.try_add(random());

    assert_eq!(
        result,
        Err(CollectionError::UnsupportedMutation(UnsupportedMutationError {
            collection_name: "FrozenSet",
            method_name: "try_add",
        }))
    );
    assert_eq!(copy, source);
}

#[rstest]
fn test_copy_set_post_modification() {
    let value = random();
    let mut source: HashSet<Option<Uuid>> = [random(), random()].into_iter().collect();
    let copy = copy_null_safe(Some(&source)).unwrap();

    source.insert(value);

    assert!(!copy.contains(&value));
    assert_eq!(copy.len(), 2);
}

#[rstest]
fn test_copy_set_null_reference() {
    let missing: Option<&HashSet<Option<Uuid>>> = None;
    assert!(copy_null_safe(missing).unwrap_err().is_null_argument());
}

// =============================================================================
// Copies of Read-Only Containers
// =============================================================================

#[rstest]
fn test_copy_of_frozen_list_is_equal() {
    let source: FrozenList<Option<Uuid>> = vec![random(), None].into();
    let copy = copy_null_safe(Some(&source)).unwrap();
    assert_eq!(copy, source);
}

#[rstest]
fn test_copy_of_frozen_set_is_equal() {
    let source: FrozenSet<Option<Uuid>> = [random(), None].into_iter().collect();
    let copy = copy_null_safe(Some(&source)).unwrap();
    assert_eq!(copy, source);
}
