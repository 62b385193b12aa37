//! Palindrome utilities built on [`SparseDeque`](crate::collections::SparseDeque).
//!
//! - [`is_palindrome`] / [`is_palindrome_str`]: exact, unnormalized test
//! - [`NormalizationPolicy`]: how raw tokens are cleaned before testing
//! - [`PalindromeFinder`] / [`find_palindromes`]: frequency count of
//!   palindromic tokens
//! - [`PalindromeCounts`]: the resulting frequency table
//!
//! Reading and splitting text is left to the caller: the finder accepts any
//! finite sequence of tokens.
//!
//! # Examples
//!
//! ```rust
//! use sparsedeque::palindrome::{find_palindromes, is_palindrome_str};
//!
//! assert!(is_palindrome_str("racecar"));
//!
//! let text = "Madam Anna saw a kayak at noon";
//! let counts = find_palindromes(text.split_whitespace());
//!
//! let found: Vec<&str> = counts.iter().map(|(token, _)| token).collect();
//! assert_eq!(found, ["madam", "anna", "a", "kayak", "noon"]);
//! ```

mod checker;
mod counts;
mod finder;
mod normalize;

pub use checker::is_palindrome;
pub use checker::is_palindrome_str;
pub use counts::PalindromeCounts;
pub use finder::PalindromeFinder;
pub use finder::find_palindromes;
pub use normalize::CaseFolding;
pub use normalize::NormalizationPolicy;
pub use normalize::RetainedCharacters;
