//! Frequency table of palindromic tokens.

use std::fmt;

use indexmap::IndexMap;

/// Occurrence counts of normalized palindromic tokens.
///
/// Entries are kept in the order their token was first recorded, so
/// enumerating the same input always produces the same sequence. Every entry
/// has a count of at least one. Two tables are equal only if they hold the
/// same counts in the same order.
///
/// # Examples
///
/// ```rust
/// use sparsedeque::palindrome::PalindromeCounts;
///
/// let mut counts = PalindromeCounts::new();
/// counts.record("noon".to_string());
/// counts.record("a".to_string());
/// counts.record("noon".to_string());
///
/// assert_eq!(counts.get("noon"), 2);
/// assert_eq!(counts.get("missing"), 0);
/// assert_eq!(counts.len(), 2);
/// assert_eq!(counts.total(), 3);
///
/// let order: Vec<&str> = counts.iter().map(|(token, _)| token).collect();
/// assert_eq!(order, ["noon", "a"]);
/// ```
#[derive(Clone, Default)]
pub struct PalindromeCounts {
    counts: IndexMap<String, usize>,
}

impl PalindromeCounts {
    /// Creates an empty table.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `token` and returns its updated count.
    pub fn record(&mut self, token: String) -> usize {
        let count = self.counts.entry(token).or_insert(0);
        *count += 1;
        *count
    }

    /// Number of occurrences of `token`; `0` if it was never recorded.
    #[must_use]
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns `true` if `token` has been recorded at least once.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(token, count)` pairs in first-recorded order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, usize)> + ExactSizeIterator {
        self.counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    /// The `limit` most frequent tokens, highest count first.
    ///
    /// Tokens with equal counts keep their first-recorded order.
    #[must_use]
    pub fn most_common(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|(_, left), (_, right)| right.cmp(left));
        entries.truncate(limit);
        entries
    }

    /// Consumes the table, returning the underlying ordered map.
    #[must_use]
    pub fn into_map(self) -> IndexMap<String, usize> {
        self.counts
    }
}

impl PartialEq for PalindromeCounts {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for PalindromeCounts {}

impl fmt::Debug for PalindromeCounts {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for PalindromeCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (token, count) in self.iter() {
            map.serialize_entry(token, &count)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct PalindromeCountsVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for PalindromeCountsVisitor {
    type Value = PalindromeCounts;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from token to occurrence count")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        use indexmap::map::Entry;
        use serde::de::{Error, Unexpected};

        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut counts = IndexMap::with_capacity(capacity);
        while let Some((token, count)) = access.next_entry::<String, usize>()? {
            if count == 0 {
                return Err(A::Error::invalid_value(
                    Unexpected::Unsigned(0),
                    &"an occurrence count of at least 1",
                ));
            }
            match counts.entry(token) {
                Entry::Occupied(entry) => {
                    return Err(A::Error::custom(format!(
                        "duplicate token `{}`",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(count);
                }
            }
        }
        Ok(PalindromeCounts { counts })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PalindromeCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(PalindromeCountsVisitor)
    }
}
