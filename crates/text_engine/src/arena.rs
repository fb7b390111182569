//! Append-only string arena with content-based interning
//!
//! All localized strings live in a single byte buffer as null-terminated
//! spans. A [`TextKey`] is the byte offset of a span's first character, so
//! the rest of the engine carries a 4-byte handle instead of an owned
//! string. Interning deduplicates byte-for-byte identical content: the
//! index hashes and compares spans directly against borrowed `&str` input
//! without allocating a temporary owned string.

use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashTable;
use std::hash::BuildHasher;

/// Stable handle to an interned, null-terminated string.
///
/// The zero key is the "no string" sentinel and never resolves; the arena
/// reserves offset zero so no real span can start there. Keys are never
/// invalidated for the lifetime of the loaded language data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextKey(u32);

impl TextKey {
    /// The "no string" sentinel.
    pub const NONE: Self = Self(0);

    /// Whether this key is the sentinel.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Byte offset of the span in the arena buffer.
    fn offset(self) -> usize {
        self.0 as usize
    }
}

/// Append-only buffer of null-terminated strings plus the content index
/// over it.
///
/// Mutated only while a language's text data is being loaded; read-only
/// afterwards. Strings may not contain the terminator byte.
pub struct TextArena {
    /// All spans, each followed by a terminator. Byte 0 is reserved.
    data: Vec<u8>,

    /// Content index: one entry per distinct span, hashed by span bytes.
    index: HashTable<TextKey>,

    /// Hasher shared by borrowed lookups and stored spans.
    hasher: DefaultHashBuilder,
}

impl TextArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            // Reserved byte keeps offset zero free for the sentinel.
            data: vec![0],
            index: HashTable::new(),
            hasher: DefaultHashBuilder::default(),
        }
    }

    /// Intern a string, returning the existing key when identical content
    /// (byte-for-byte, including case) is already stored.
    pub fn intern(&mut self, content: &str) -> TextKey {
        debug_assert!(
            !content.as_bytes().contains(&0),
            "interned strings may not contain the terminator byte"
        );

        let hash = self.hasher.hash_one(content.as_bytes());
        let data = &self.data;
        if let Some(&key) = self
            .index
            .find(hash, |&k| bytes_at(data, k) == content.as_bytes())
        {
            return key;
        }

        let key = TextKey(u32::try_from(self.data.len()).expect("text arena exceeds 4 GiB"));
        self.data.extend_from_slice(content.as_bytes());
        self.data.push(0);

        let data = &self.data;
        let hasher = &self.hasher;
        self.index
            .insert_unique(hash, key, |&k| hasher.hash_one(bytes_at(data, k)));
        key
    }

    /// Look up a string without inserting it.
    pub fn find(&self, content: &str) -> Option<TextKey> {
        let hash = self.hasher.hash_one(content.as_bytes());
        self.index
            .find(hash, |&k| bytes_at(&self.data, k) == content.as_bytes())
            .copied()
    }

    /// Resolve a key to its stored content in O(length).
    ///
    /// # Panics
    ///
    /// Panics if the key is the sentinel or its offset lies outside the
    /// buffer. Both indicate a loader or caller bug, not a runtime
    /// condition.
    pub fn resolve(&self, key: TextKey) -> &str {
        std::str::from_utf8(bytes_at(&self.data, key)).expect("arena spans are valid UTF-8")
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no strings have been interned yet.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Total bytes of stored text, terminators included.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

impl Default for TextArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Span bytes at `key`, scanning forward to the next terminator.
fn bytes_at(data: &[u8], key: TextKey) -> &[u8] {
    assert!(
        !key.is_none() && key.offset() < data.len(),
        "invalid text key (offset {} of {} bytes)",
        key.offset(),
        data.len()
    );
    let start = key.offset();
    let end = data[start..]
        .iter()
        .position(|&b| b == 0)
        .map_or(data.len(), |terminator| start + terminator);
    &data[start..end]
}
