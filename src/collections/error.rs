//! Error types for the collections module.
//!
//! The only failure a deque can report is an attempt to read or remove an
//! element while it holds none. The error records which operation was
//! attempted and at which end, so callers can tell a failed `peek_back` from
//! a failed `pop_front` without extra bookkeeping.

use std::fmt;

use thiserror::Error;

/// One of the two ends of a deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeEnd {
    /// The end addressed by `push_front`, `pop_front` and `peek_front`.
    Front,
    /// The end addressed by `push_back`, `pop_back` and `peek_back`.
    Back,
}

impl fmt::Display for DequeEnd {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => formatter.write_str("front"),
            Self::Back => formatter.write_str("back"),
        }
    }
}

/// The kind of access that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeAccess {
    /// A removing access (`pop_*`).
    Pop,
    /// A non-removing access (`peek_*`, `peek_*_mut`).
    Peek,
}

impl fmt::Display for DequeAccess {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pop => formatter.write_str("pop"),
            Self::Peek => formatter.write_str("peek"),
        }
    }
}

/// Returned when an element is requested from an empty deque.
///
/// The deque is left untouched when this error is produced.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::collections::{DequeAccess, DequeEnd, EmptyDequeError, SparseDeque};
///
/// let mut deque: SparseDeque<i32> = SparseDeque::new();
/// let error = deque.pop_front().unwrap_err();
///
/// assert_eq!(error, EmptyDequeError::new(DequeAccess::Pop, DequeEnd::Front));
/// assert_eq!(error.to_string(), "cannot pop_front: the deque is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("cannot {access}_{end}: the deque is empty")]
pub struct EmptyDequeError {
    access: DequeAccess,
    end: DequeEnd,
}

impl EmptyDequeError {
    /// Creates an error for the given access at the given end.
    #[inline]
    #[must_use]
    pub const fn new(access: DequeAccess, end: DequeEnd) -> Self {
        Self { access, end }
    }

    /// The access that was attempted.
    #[inline]
    #[must_use]
    pub const fn access(&self) -> DequeAccess {
        self.access
    }

    /// The end the access was attempted on.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> DequeEnd {
        self.end
    }
}
