//! Token normalization applied before palindrome testing.
//!
//! The default policy lower-cases every character and keeps only alphabetic
//! characters, so `"Civic,"`, `"civic"` and `"CIVIC!"` all normalize to
//! `"civic"`. Digits are dropped by default; select
//! [`RetainedCharacters::Alphanumeric`] to keep them.
//!
//! With the `serde` feature the policy can be loaded from any serde format.
//! Variant names are `snake_case` and missing fields take their defaults:
//!
//! ```yaml
//! case_folding: preserve
//! retain: alphanumeric
//! ```

/// How letter case is treated during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CaseFolding {
    /// Map every character to its Unicode lowercase form.
    #[default]
    Lowercase,
    /// Leave case untouched.
    Preserve,
}

/// Which characters survive normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RetainedCharacters {
    /// Keep characters for which [`char::is_alphabetic`] holds.
    #[default]
    Alphabetic,
    /// Keep characters for which [`char::is_alphanumeric`] holds.
    Alphanumeric,
    /// Keep every character.
    All,
}

impl RetainedCharacters {
    #[inline]
    fn keeps(self, character: char) -> bool {
        match self {
            Self::Alphabetic => character.is_alphabetic(),
            Self::Alphanumeric => character.is_alphanumeric(),
            Self::All => true,
        }
    }
}

/// Rules for turning a raw token into the form that is tested and counted.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::palindrome::{NormalizationPolicy, RetainedCharacters};
///
/// let policy = NormalizationPolicy::default();
/// assert_eq!(policy.normalize("Level,"), "level");
/// assert_eq!(policy.normalize("2002"), "");
///
/// let with_digits = policy.with_retained(RetainedCharacters::Alphanumeric);
/// assert_eq!(with_digits.normalize("2002!"), "2002");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizationPolicy {
    /// Case handling.
    pub case_folding: CaseFolding,
    /// Character filter, applied before case folding.
    pub retain: RetainedCharacters,
}

impl NormalizationPolicy {
    /// Creates a policy from its two parts.
    #[inline]
    #[must_use]
    pub const fn new(case_folding: CaseFolding, retain: RetainedCharacters) -> Self {
        Self {
            case_folding,
            retain,
        }
    }

    /// Returns a copy of this policy with a different case handling.
    #[inline]
    #[must_use]
    pub const fn with_case_folding(self, case_folding: CaseFolding) -> Self {
        Self {
            case_folding,
            ..self
        }
    }

    /// Returns a copy of this policy with a different character filter.
    #[inline]
    #[must_use]
    pub const fn with_retained(self, retain: RetainedCharacters) -> Self {
        Self { retain, ..self }
    }

    /// Applies the policy to `token`.
    ///
    /// The result may be empty, for example when a token consists only of
    /// punctuation.
    #[must_use]
    pub fn normalize(&self, token: &str) -> String {
        let retained = token.chars().filter(|character| self.retain.keeps(*character));
        match self.case_folding {
            CaseFolding::Lowercase => retained.flat_map(char::to_lowercase).collect(),
            CaseFolding::Preserve => retained.collect(),
        }
    }
}
