//! Key/value pair used by key/value sequences.

/// One key tied to its value.
///
/// Returned by [`Seq2::compare`](crate::Seq2::compare),
/// [`Map::get_compared`](crate::Map::get_compared) and the entry projections
/// of both key/value types.
///
/// # Example
///
/// ```rust
/// use steams::Entry;
///
/// let entry = Entry::new("apples", 3);
/// assert_eq!(entry.key, "apples");
/// assert_eq!(entry.into_pair(), ("apples", 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry<K, V> {
    /// The key
    pub key: K,
    /// The value associated with the key
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Create a new entry.
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    /// Split the entry into a `(key, value)` tuple.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Entry { key, value }
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_pair()
    }
}
