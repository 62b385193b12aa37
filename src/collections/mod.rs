//! Sparse-map backed collections.
//!
//! - [`SparseDeque`]: double-ended queue with O(1) push (amortized), pop and
//!   peek at both ends
//! - [`IndexedStore`]: the slot map the deque is built on
//!
//! # Why a slot map
//!
//! An array-backed deque has to either shift elements when inserting at the
//! front or grow a ring buffer, which makes individual operations O(n) even
//! when the average is O(1). `SparseDeque` instead addresses elements by a
//! signed slot number kept in an associative store. The deque only ever
//! touches the slot at one of its two ends, so no element is shifted and no
//! operation depends on the number of stored elements. The store's hash map
//! still rehashes as it grows, which makes pushes amortized O(1).
//!
//! # Hashing
//!
//! The store hashes slot numbers with the standard library's `RandomState`
//! by default. Enable the `fxhash` feature for `rustc-hash`'s `FxBuildHasher`
//! or the `ahash` feature for `ahash::RandomState`. When both are enabled,
//! `fxhash` is used.
//!
//! # Examples
//!
//! ```rust
//! use sparsedeque::collections::SparseDeque;
//!
//! let mut deque = SparseDeque::new();
//! for element in 1..=3 {
//!     deque.push_back(element);
//! }
//!
//! assert_eq!(deque.pop_front(), Ok(1));
//! assert_eq!(deque.pop_back(), Ok(3));
//! assert_eq!(deque.len(), 1);
//! ```

// =============================================================================
// Slot Type Aliases
// =============================================================================

/// Slot number used to address elements in an [`IndexedStore`].
///
/// Signed so that a deque can grow to the left of slot `0`.
pub type Slot = i64;

#[cfg(feature = "fxhash")]
pub(crate) type SlotHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type SlotHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type SlotHasher = std::collections::hash_map::RandomState;

mod deque;
mod error;
mod indexed_store;

pub use deque::SparseDeque;
pub use error::DequeAccess;
pub use error::DequeEnd;
pub use error::EmptyDequeError;
pub use indexed_store::IndexedStore;
