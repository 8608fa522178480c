//! Read access to buffer content.
//!
//! [`LineIndex`](crate::LineIndex) never owns text; queries borrow the
//! buffer through the minimal [`TextSource`] capability, so the same index
//! type works over a plain string, a rope, or any host buffer that can hand
//! out characters from an offset.

use ropey::Rope;

/// A random-access sequence of code units (Unicode scalar values).
///
/// Offsets everywhere in this crate are indices into this sequence. The only
/// scanning primitive the line index needs is forward character iteration
/// from an arbitrary offset.
pub trait TextSource {
    /// Total length of the buffer in code units.
    fn len_chars(&self) -> usize;

    /// Iterate the buffer's characters starting at `offset`.
    ///
    /// `offset == len_chars()` must yield an empty iterator.
    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_;
}

impl TextSource for str {
    /// O(n); `str` is the convenience implementation for small buffers and
    /// tests. Hosts holding large documents should prefer [`Rope`].
    fn len_chars(&self) -> usize {
        self.chars().count()
    }

    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.chars().skip(offset)
    }
}

impl TextSource for String {
    fn len_chars(&self) -> usize {
        self.as_str().len_chars()
    }

    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.as_str().chars_from(offset)
    }
}

impl TextSource for Rope {
    fn len_chars(&self) -> usize {
        Rope::len_chars(self)
    }

    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.chars_at(offset)
    }
}
