//! The fixed set of characters that delimit words.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

/// Characters treated as word boundaries by [`SeparatorSet::canonical`].
///
/// Tabs and other whitespace besides the plain space are intentionally absent,
/// so `"foo\tbar"` is a single word.
pub const CANONICAL_SEPARATORS: [char; 32] = [
    ' ', ',', '/', '.', '-', '!', '?', '_', '\'', '"', '`', '*', '(', ')', '[', ']', '{', '}',
    '\\', '|', '<', '>', '~', '^', '@', '#', '$', '&', '+', '=', ';', ':',
];

/// Immutable membership set of separator characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    ascii: [bool; 128],
    other: FxHashSet<char>,
}

impl SeparatorSet {
    /// Builds a set from arbitrary characters.
    pub fn new<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut ascii = [false; 128];
        let mut other = FxHashSet::default();
        for ch in chars {
            if ch.is_ascii() {
                ascii[ch as usize] = true;
            } else {
                other.insert(ch);
            }
        }
        Self { ascii, other }
    }

    /// Returns the process-wide canonical separator set.
    #[must_use]
    pub fn canonical() -> &'static SeparatorSet {
        static CANONICAL: OnceLock<SeparatorSet> = OnceLock::new();
        CANONICAL.get_or_init(|| SeparatorSet::new(CANONICAL_SEPARATORS))
    }

    /// Returns `true` when `ch` is a separator.
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.other.contains(&ch)
        }
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::canonical().clone()
    }
}
