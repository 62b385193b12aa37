//! Unit tests for SparseDeque.
//!
//! These tests exercise the public deque API end to end: ordering at both
//! ends, the empty-deque error contract and cursor behaviour over long runs.

use rstest::rstest;
use sparsedeque::collections::{DequeAccess, DequeEnd, EmptyDequeError, SparseDeque};

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn test_push_back_then_pop_front_is_fifo() {
    let mut deque = SparseDeque::new();
    for element in 0..10 {
        deque.push_back(element);
    }
    let popped: Vec<i32> = (0..10).filter_map(|_| deque.pop_front().ok()).collect();
    assert_eq!(popped, (0..10).collect::<Vec<_>>());
}

#[rstest]
fn test_push_front_then_pop_back_is_fifo() {
    let mut deque = SparseDeque::new();
    for element in 0..10 {
        deque.push_front(element);
    }
    let popped: Vec<i32> = (0..10).filter_map(|_| deque.pop_back().ok()).collect();
    assert_eq!(popped, (0..10).collect::<Vec<_>>());
}

#[rstest]
fn test_push_back_then_pop_back_is_lifo() {
    let mut deque = SparseDeque::new();
    for element in 0..5 {
        deque.push_back(element);
    }
    let popped: Vec<i32> = (0..5).filter_map(|_| deque.pop_back().ok()).collect();
    assert_eq!(popped, vec![4, 3, 2, 1, 0]);
}

#[rstest]
#[case::front(true)]
#[case::back(false)]
fn test_single_push_then_pop_same_end(#[case] at_front: bool) {
    let mut deque = SparseDeque::new();
    if at_front {
        deque.push_front("x");
        assert_eq!(deque.pop_front(), Ok("x"));
    } else {
        deque.push_back("x");
        assert_eq!(deque.pop_back(), Ok("x"));
    }
    assert!(deque.is_empty());
}

// =============================================================================
// Empty-deque contract
// =============================================================================

#[rstest]
fn test_every_access_on_empty_deque_fails_without_mutation() {
    let mut deque: SparseDeque<u8> = SparseDeque::new();

    assert_eq!(
        deque.pop_front(),
        Err(EmptyDequeError::new(DequeAccess::Pop, DequeEnd::Front))
    );
    assert_eq!(
        deque.pop_back(),
        Err(EmptyDequeError::new(DequeAccess::Pop, DequeEnd::Back))
    );
    assert_eq!(
        deque.peek_front(),
        Err(EmptyDequeError::new(DequeAccess::Peek, DequeEnd::Front))
    );
    assert_eq!(
        deque.peek_back(),
        Err(EmptyDequeError::new(DequeAccess::Peek, DequeEnd::Back))
    );

    assert_eq!(deque.len(), 0);
    assert_eq!((deque.head(), deque.tail()), (0, 0));
}

#[rstest]
fn test_deque_is_usable_after_drained_to_empty() {
    let mut deque = SparseDeque::new();
    deque.push_back(1);
    assert_eq!(deque.pop_front(), Ok(1));
    assert!(deque.pop_front().is_err());

    deque.push_front(2);
    assert_eq!(deque.peek_back(), Ok(&2));
    assert_eq!(deque.len(), 1);
}

#[rstest]
fn test_error_propagates_with_question_mark() {
    fn take_both_ends(deque: &mut SparseDeque<i32>) -> Result<(i32, i32), EmptyDequeError> {
        let front = deque.pop_front()?;
        let back = deque.pop_back()?;
        Ok((front, back))
    }

    let mut deque = SparseDeque::new();
    deque.push_back(1);
    deque.push_back(2);
    assert_eq!(take_both_ends(&mut deque), Ok((1, 2)));
    assert_eq!(
        take_both_ends(&mut deque),
        Err(EmptyDequeError::new(DequeAccess::Pop, DequeEnd::Front))
    );
}

// =============================================================================
// Cursors
// =============================================================================

#[rstest]
fn test_cursors_delimit_live_range() {
    let mut deque = SparseDeque::new();
    deque.push_front('b');
    deque.push_front('a');
    deque.push_back('c');

    assert_eq!(deque.head(), -2);
    assert_eq!(deque.tail(), 1);
    assert_eq!(deque.len(), 3);
    assert_eq!(deque.to_string(), "[a, b, c]");
}

#[rstest]
fn test_sliding_window_keeps_size_constant() {
    let mut deque = SparseDeque::with_capacity(4);
    for element in 0..4 {
        deque.push_back(element);
    }
    for element in 4..10_000 {
        deque.push_back(element);
        assert_eq!(deque.pop_front(), Ok(element - 4));
        assert_eq!(deque.len(), 4);
    }
    assert_eq!(deque.head(), 9_996);
    assert_eq!(deque.peek_front(), Ok(&9_996));
    assert_eq!(deque.peek_back(), Ok(&9_999));
}

#[rstest]
fn test_draining_from_either_end_recenters_cursors() {
    let mut deque = SparseDeque::new();
    for element in 0..100 {
        deque.push_front(element);
    }
    assert_eq!(deque.head(), -100);
    while deque.pop_back().is_ok() {}
    assert_eq!((deque.head(), deque.tail()), (0, 0));
}

#[rstest]
fn test_large_deque_positional_access() {
    let mut deque = SparseDeque::new();
    for element in 0..1_000 {
        if element % 2 == 0 {
            deque.push_back(element);
        } else {
            deque.push_front(element);
        }
    }
    assert_eq!(deque.len(), 1_000);
    assert_eq!(deque.get(0), Some(&999));
    assert_eq!(deque.get(499), Some(&1));
    assert_eq!(deque.get(500), Some(&0));
    assert_eq!(deque.get(999), Some(&998));
    assert_eq!(deque.get(1_000), None);
}

#[rstest]
fn test_owned_values_are_moved_out() {
    let mut deque = SparseDeque::new();
    deque.push_back(String::from("owned"));
    let value: String = deque.pop_back().unwrap_or_default();
    assert_eq!(value, "owned");
}
