//! Double-ended queue backed by a sparse slot map.
//!
//! # Overview
//!
//! `SparseDeque` stores its elements in an [`IndexedStore`] and tracks the
//! live range with two cursors:
//!
//! - `head` is the slot of the front-most element
//! - `tail` is one past the slot of the back-most element
//!
//! so the occupied slots are exactly `head..tail`. Pushing to the front moves
//! `head` one slot to the left and fills it; pushing to the back fills `tail`
//! and moves it one slot to the right. Popping does the inverse.
//!
//! Because elements are addressed by slot number rather than by position in
//! a buffer, no element is ever shifted to make room at either end. The
//! cost of an operation does not depend on the number of stored elements:
//!
//! - O(1) amortized `push_front` and `push_back`
//! - O(1) `pop_front` and `pop_back`
//! - O(1) `peek_front`, `peek_back` and `get`
//! - O(1) `len` and `is_empty`
//!
//! A push is amortized rather than worst-case O(1) because the hash map
//! inside [`IndexedStore`] rehashes when it grows. Use
//! [`SparseDeque::with_capacity`] to size it up front.
//!
//! Cursors are signed and may drift below zero. Whenever the deque becomes
//! empty both cursors are moved back to slot `0`, which keeps slot numbers
//! bounded by the largest size the deque has held since it was last empty.
//!
//! # Examples
//!
//! ```rust
//! use sparsedeque::collections::SparseDeque;
//!
//! let mut deque = SparseDeque::new();
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(1);
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.peek_front(), Ok(&1));
//! assert_eq!(deque.peek_back(), Ok(&3));
//!
//! assert_eq!(deque.pop_back(), Ok(3));
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_front(), Ok(2));
//! assert!(deque.pop_front().is_err());
//! ```

use std::fmt;

use super::{DequeAccess, DequeEnd, EmptyDequeError, IndexedStore, Slot};

/// A double-ended queue with O(1) operations at both ends and no element
/// shifting.
///
/// See the [module documentation](self) for the slot layout.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::collections::SparseDeque;
///
/// let mut deque = SparseDeque::new();
/// deque.push_front('b');
/// deque.push_front('a');
///
/// assert_eq!(deque.head(), -2);
/// assert_eq!(deque.tail(), 0);
/// assert_eq!(deque.to_string(), "[a, b]");
/// ```
pub struct SparseDeque<T> {
    store: IndexedStore<T>,
    head: Slot,
    tail: Slot,
}

impl<T> SparseDeque<T> {
    /// Creates an empty deque with both cursors at slot `0`.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: IndexedStore::new(),
            head: 0,
            tail: 0,
        }
    }

    /// Creates an empty deque whose store can hold `capacity` elements
    /// before it first allocates.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: IndexedStore::with_capacity(capacity),
            head: 0,
            tail: 0,
        }
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert!(self.head <= self.tail);
        usize::try_from(self.tail.abs_diff(self.head)).unwrap_or(usize::MAX)
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Slot of the front-most element (equal to [`tail`](Self::tail) when
    /// empty).
    #[inline]
    #[must_use]
    pub const fn head(&self) -> Slot {
        self.head
    }

    /// Slot one past the back-most element.
    #[inline]
    #[must_use]
    pub const fn tail(&self) -> Slot {
        self.tail
    }

    /// Prepends an element to the front of the deque.
    pub fn push_front(&mut self, element: T) {
        self.head -= 1;
        let previous = self.store.insert(self.head, element);
        debug_assert!(previous.is_none(), "slot {} was already occupied", self.head);
    }

    /// Appends an element to the back of the deque.
    pub fn push_back(&mut self, element: T) {
        let previous = self.store.insert(self.tail, element);
        debug_assert!(previous.is_none(), "slot {} was already occupied", self.tail);
        self.tail += 1;
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty. The deque is not
    /// modified in that case.
    pub fn pop_front(&mut self) -> Result<T, EmptyDequeError> {
        let error = EmptyDequeError::new(DequeAccess::Pop, DequeEnd::Front);
        if self.is_empty() {
            return Err(error);
        }
        let element = self.store.remove(self.head).ok_or(error)?;
        self.head += 1;
        self.recenter_if_empty();
        Ok(element)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty. The deque is not
    /// modified in that case.
    pub fn pop_back(&mut self) -> Result<T, EmptyDequeError> {
        let error = EmptyDequeError::new(DequeAccess::Pop, DequeEnd::Back);
        if self.is_empty() {
            return Err(error);
        }
        let element = self.store.remove(self.tail - 1).ok_or(error)?;
        self.tail -= 1;
        self.recenter_if_empty();
        Ok(element)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty.
    pub fn peek_front(&self) -> Result<&T, EmptyDequeError> {
        let error = EmptyDequeError::new(DequeAccess::Peek, DequeEnd::Front);
        if self.is_empty() {
            return Err(error);
        }
        self.store.get(self.head).ok_or(error)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty.
    pub fn peek_back(&self) -> Result<&T, EmptyDequeError> {
        let error = EmptyDequeError::new(DequeAccess::Peek, DequeEnd::Back);
        if self.is_empty() {
            return Err(error);
        }
        self.store.get(self.tail - 1).ok_or(error)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty.
    pub fn peek_front_mut(&mut self) -> Result<&mut T, EmptyDequeError> {
        let error = EmptyDequeError::new(DequeAccess::Peek, DequeEnd::Front);
        if self.is_empty() {
            return Err(error);
        }
        self.store.get_mut(self.head).ok_or(error)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDequeError`] if the deque is empty.
    pub fn peek_back_mut(&mut self) -> Result<&mut T, EmptyDequeError> {
        let error = EmptyDequeError::new(DequeAccess::Peek, DequeEnd::Back);
        if self.is_empty() {
            return Err(error);
        }
        self.store.get_mut(self.tail - 1).ok_or(error)
    }

    /// Returns the element `index` positions from the front, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsedeque::collections::SparseDeque;
    ///
    /// let mut deque = SparseDeque::new();
    /// deque.push_back("middle");
    /// deque.push_front("first");
    /// deque.push_back("last");
    ///
    /// assert_eq!(deque.get(0), Some(&"first"));
    /// assert_eq!(deque.get(2), Some(&"last"));
    /// assert_eq!(deque.get(3), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        let offset = Slot::try_from(index).ok()?;
        self.store.get(self.head + offset)
    }

    /// Removes every element and moves both cursors back to slot `0`.
    pub fn clear(&mut self) {
        self.store.clear();
        self.head = 0;
        self.tail = 0;
    }

    fn recenter_if_empty(&mut self) {
        if self.head == self.tail && self.head != 0 {
            tracing::trace!(slot = self.head, "deque emptied; re-centring cursors");
            debug_assert!(self.store.is_empty());
            self.head = 0;
            self.tail = 0;
        }
    }

    fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        (self.head..self.tail).filter_map(|slot| self.store.get(slot))
    }
}

impl<T> Default for SparseDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SparseDeque<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T: PartialEq> PartialEq for SparseDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.elements().zip(other.elements()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SparseDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for SparseDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SparseDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.elements() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
