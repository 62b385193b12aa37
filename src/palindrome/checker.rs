//! Palindrome test driven by a [`SparseDeque`].
//!
//! The sequence is loaded into a private deque, then units are popped from
//! both ends and compared until they meet. An input of length `n` takes at
//! most `⌈n/2⌉` rounds of two O(1) pops each.
//!
//! No normalization happens here: `"Aa"` is not a palindrome, `"a a"` is.
//! Callers that want case or punctuation insensitivity normalize first (see
//! [`NormalizationPolicy`](super::NormalizationPolicy)).

use crate::collections::SparseDeque;

/// Returns `true` if `units` reads the same forwards and backwards.
///
/// The whole sequence is loaded before any comparison is made, so `units`
/// must be finite.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::palindrome::is_palindrome;
///
/// assert!(is_palindrome([1, 2, 3, 2, 1]));
/// assert!(is_palindrome(Vec::<u8>::new()));
/// assert!(!is_palindrome([1, 2]));
/// ```
pub fn is_palindrome<I>(units: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut deque = SparseDeque::new();
    for unit in units {
        deque.push_back(unit);
    }
    loop {
        if deque.len() <= 1 {
            return true;
        }
        let (Ok(front), Ok(back)) = (deque.pop_front(), deque.pop_back()) else {
            return true;
        };
        if front != back {
            return false;
        }
    }
}

/// Returns `true` if the characters of `text` read the same forwards and
/// backwards.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::palindrome::is_palindrome_str;
///
/// assert!(is_palindrome_str("racecar"));
/// assert!(is_palindrome_str(""));
/// assert!(!is_palindrome_str("hello"));
/// assert!(!is_palindrome_str("Racecar"));
/// ```
#[inline]
pub fn is_palindrome_str(text: &str) -> bool {
    is_palindrome(text.chars())
}
