//! Palindrome frequency counting over a token stream.
//!
//! The finder does not split text into tokens; callers supply an already
//! tokenized sequence. Each token is normalized with the finder's
//! [`NormalizationPolicy`], tokens that normalize to nothing are skipped, and
//! the remaining ones are tested with [`is_palindrome_str`]. Matches are
//! counted under their normalized form.

use super::{NormalizationPolicy, PalindromeCounts, is_palindrome_str};

/// Counts palindromic tokens under a fixed normalization policy.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::palindrome::{CaseFolding, NormalizationPolicy, PalindromeFinder};
///
/// let finder = PalindromeFinder::new(
///     NormalizationPolicy::default().with_case_folding(CaseFolding::Preserve),
/// );
/// let counts = finder.find(["Anna", "anna", "ABBA"]);
///
/// assert_eq!(counts.get("anna"), 1);
/// assert_eq!(counts.get("ABBA"), 1);
/// assert!(!counts.contains("Anna"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PalindromeFinder {
    policy: NormalizationPolicy,
}

impl PalindromeFinder {
    /// Creates a finder using `policy`.
    #[inline]
    #[must_use]
    pub const fn new(policy: NormalizationPolicy) -> Self {
        Self { policy }
    }

    /// The normalization policy applied to each token.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> &NormalizationPolicy {
        &self.policy
    }

    /// Processes one token, recording it in `counts` if it is a palindrome.
    ///
    /// Returns `true` if the token was recorded.
    pub fn scan_token(&self, counts: &mut PalindromeCounts, token: &str) -> bool {
        let normalized = self.policy.normalize(token);
        if normalized.is_empty() {
            tracing::trace!(token, "token normalized to nothing; skipped");
            return false;
        }
        if !is_palindrome_str(&normalized) {
            return false;
        }
        counts.record(normalized);
        true
    }

    /// Counts every palindromic token in `tokens`.
    ///
    /// The result depends only on the token sequence and the policy, so the
    /// same input always yields the same table, in the same order.
    pub fn find<I, S>(&self, tokens: I) -> PalindromeCounts
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = PalindromeCounts::new();
        let mut scanned = 0_usize;
        let mut matched = 0_usize;
        for token in tokens {
            scanned += 1;
            if self.scan_token(&mut counts, token.as_ref()) {
                matched += 1;
            }
        }
        tracing::debug!(
            scanned,
            matched,
            distinct = counts.len(),
            "palindrome scan finished"
        );
        counts
    }
}

/// Counts palindromic tokens using the default [`NormalizationPolicy`]
/// (lower-case, alphabetic characters only).
///
/// # Examples
///
/// ```rust
/// use sparsedeque::palindrome::find_palindromes;
///
/// let counts = find_palindromes(["a", "Bb", "civic", "noon", "hello"]);
///
/// assert_eq!(counts.len(), 4);
/// assert_eq!(counts.get("bb"), 1);
/// assert!(!counts.contains("hello"));
/// ```
pub fn find_palindromes<I, S>(tokens: I) -> PalindromeCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PalindromeFinder::default().find(tokens)
}
