//! # sparsedeque
//!
//! A double-ended queue whose push, pop and peek run in O(1) time at both
//! ends (pushes amortized), and the palindrome utilities built on top of it.
//!
//! ## Overview
//!
//! - **Collections**: [`SparseDeque`](collections::SparseDeque), a deque
//!   that addresses elements by signed slot number in a sparse map instead
//!   of by position in a buffer, so no element is ever shifted
//! - **Palindromes**: an exact palindrome test driven by the deque, and a
//!   frequency counter for palindromic tokens
//!
//! ## Feature Flags
//!
//! - `deque`: the collections module
//! - `palindrome`: palindrome utilities (enables `deque`)
//! - `serde`: serialization of normalization policies and count tables
//! - `fxhash` / `ahash`: faster hashers for the slot map
//! - `full`: `deque`, `palindrome` and `serde`
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `trace` and `debug` level and never
//! installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use sparsedeque::prelude::*;
//!
//! let mut deque = SparseDeque::new();
//! deque.push_front('b');
//! deque.push_back('c');
//! deque.push_front('a');
//! assert_eq!(deque.pop_back(), Ok('c'));
//!
//! assert!(is_palindrome_str("level"));
//! assert_eq!(find_palindromes(["Level", "deque"]).get("level"), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use sparsedeque::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "deque")]
    pub use crate::collections::*;

    #[cfg(feature = "palindrome")]
    pub use crate::palindrome::*;
}

#[cfg(feature = "deque")]
pub mod collections;

#[cfg(feature = "palindrome")]
pub mod palindrome;
