//! Incremental line index.
//!
//! Maps buffer offsets to 1-based line numbers and line boundary ranges
//! without ever rescanning the whole document. Discovered line starts are
//! cached in a sorted vector; edits drop the cached suffix at and after the
//! edit point, and later queries re-derive it by scanning forward from the
//! nearest surviving boundary.

use crate::edit::TextEdit;
use crate::line_breaks::{TerminatorPolicy, UnicodeTerminators};
use crate::range::TextRange;
use crate::text_source::TextSource;

/// A discovered line start.
///
/// Boundaries are only ever produced by scanning the buffer for terminators,
/// so for two adjacent cached boundaries the interval between them is exactly
/// one full line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBoundary {
    /// Offset of the first code unit of the line.
    pub offset: usize,
    /// 1-based number of the line starting here.
    pub line: usize,
    /// Length of the terminator that ends the previous line (the code units
    /// immediately before `offset`).
    pub terminator_len: usize,
}

/// Resolved location of one full line.
#[derive(Debug, Clone, Copy)]
struct LineSpan {
    line: usize,
    /// The full line, terminator included.
    range: TextRange,
    /// Length of the line's own terminator; 0 when the line runs to the end
    /// of the buffer unterminated.
    terminator_len: usize,
}

/// Incremental cache mapping offsets to line numbers and line ranges.
///
/// The cache is lazy and sparse: nothing is scanned until a query needs it,
/// and only the territory between the document start and the furthest query
/// so far is ever held. The index never reads buffer content except through
/// the [`TextSource`] passed to each query, and it never mutates the buffer.
///
/// The owner must report every buffer mutation via [`LineIndex::invalidate`]
/// before issuing further queries; querying against unreported content
/// returns stale results.
///
/// # Example
///
/// ```rust
/// use buffer_index::LineIndex;
///
/// let text = "dog \n\n cat \n cow \n";
/// let mut index = LineIndex::new();
/// assert_eq!(index.line_number(text, 5), 2);
/// assert_eq!(index.line_range(text, 6), (6..12).into());
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex<P: TerminatorPolicy = UnicodeTerminators> {
    /// Starts of lines 2 and up, ascending; line 1 at offset 0 is implicit.
    boundaries: Vec<LineBoundary>,
    policy: P,
}

impl LineIndex<UnicodeTerminators> {
    /// Create an empty index recognizing the Unicode mandatory-break set.
    pub fn new() -> Self {
        Self::with_policy(UnicodeTerminators)
    }
}

impl Default for LineIndex<UnicodeTerminators> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TerminatorPolicy> LineIndex<P> {
    /// Create an empty index with a custom terminator policy.
    pub fn with_policy(policy: P) -> Self {
        Self {
            boundaries: Vec::new(),
            policy,
        }
    }

    /// 1-based number of the line containing `offset`.
    ///
    /// `offset == len` answers for the (possibly empty) trailing line.
    pub fn line_number<T: TextSource + ?Sized>(&mut self, text: &T, offset: usize) -> usize {
        self.locate(text, offset).line
    }

    /// Offset of the first code unit of the line containing `offset`.
    pub fn line_start<T: TextSource + ?Sized>(&mut self, text: &T, offset: usize) -> usize {
        self.locate(text, offset).range.start
    }

    /// The full line containing `offset`, terminator included.
    ///
    /// Zero-length at the end of a buffer whose last line is unterminated
    /// only when that trailing line is empty.
    pub fn line_range<T: TextSource + ?Sized>(&mut self, text: &T, offset: usize) -> TextRange {
        self.locate(text, offset).range
    }

    /// Union of the whole lines (terminators included) intersecting `range`.
    ///
    /// An empty `range` sitting exactly on a line boundary yields the single
    /// line starting there.
    pub fn line_range_covering<T: TextSource + ?Sized>(
        &mut self,
        text: &T,
        range: TextRange,
    ) -> TextRange {
        self.check_range(text, range);
        let first = self.locate(text, range.start);
        if range.is_empty() {
            return first.range;
        }
        let last = self.locate(text, range.end - 1);
        TextRange::new(first.range.start, last.range.end)
    }

    /// Like [`LineIndex::line_range_covering`], but excluding the terminator
    /// of the last overlapped line. Interior terminators stay included, since
    /// they separate included lines.
    pub fn line_contents_range<T: TextSource + ?Sized>(
        &mut self,
        text: &T,
        range: TextRange,
    ) -> TextRange {
        self.check_range(text, range);
        let first = self.locate(text, range.start);
        let last = if range.is_empty() {
            first
        } else {
            self.locate(text, range.end - 1)
        };
        TextRange::new(first.range.start, last.range.end - last.terminator_len)
    }

    /// Drop every cached boundary at or after the edit's start offset.
    ///
    /// Must be called immediately after each buffer mutation, before any
    /// further query. Boundaries below the edit point stay valid and keep
    /// their offsets; everything at or past it is re-derived by scanning on
    /// the next query. The descriptor's delta is not used to shift surviving
    /// boundaries, so reporting an edit that changed nothing is harmless.
    pub fn invalidate(&mut self, edit: &TextEdit) {
        let cut = edit.range.start;
        let keep = self.boundaries.partition_point(|b| b.offset < cut);
        self.boundaries.truncate(keep);
    }

    /// Forget every cached boundary.
    pub fn clear(&mut self) {
        self.boundaries.clear();
    }

    /// Number of line starts currently cached.
    pub fn cached_boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    fn check_range<T: TextSource + ?Sized>(&self, text: &T, range: TextRange) {
        let len = text.len_chars();
        assert!(
            range.end <= len,
            "range {range} out of bounds for buffer of length {len}"
        );
    }

    /// Find the line containing `offset`, extending the cache as needed.
    ///
    /// Cached territory answers in O(log k). Otherwise the buffer is scanned
    /// forward from the last cached boundary, recording every line start
    /// found, until the scan passes `offset` (which also yields the covering
    /// line's end) or reaches the end of the buffer.
    fn locate<T: TextSource + ?Sized>(&mut self, text: &T, offset: usize) -> LineSpan {
        let len = text.len_chars();
        assert!(
            offset <= len,
            "offset {offset} out of bounds for buffer of length {len}"
        );

        let idx = self.boundaries.partition_point(|b| b.offset <= offset);
        if let Some(next) = self.boundaries.get(idx).copied() {
            let (start, line) = if idx == 0 {
                (0, 1)
            } else {
                (self.boundaries[idx - 1].offset, self.boundaries[idx - 1].line)
            };
            return LineSpan {
                line,
                range: TextRange::new(start, next.offset),
                terminator_len: next.terminator_len,
            };
        }

        let (mut start, mut line) = match self.boundaries.last() {
            Some(b) => (b.offset, b.line),
            None => (0, 1),
        };

        let mut pos = start;
        let mut chars = text.chars_from(start).peekable();
        while let Some(c) = chars.next() {
            let Some(term_len) = self.policy.terminator_len(c, chars.peek().copied()) else {
                pos += 1;
                continue;
            };
            for _ in 1..term_len {
                chars.next();
            }
            let term_end = pos + term_len;
            self.boundaries.push(LineBoundary {
                offset: term_end,
                line: line + 1,
                terminator_len: term_len,
            });
            if term_end > offset {
                return LineSpan {
                    line,
                    range: TextRange::new(start, term_end),
                    terminator_len: term_len,
                };
            }
            start = term_end;
            line += 1;
            pos = term_end;
        }

        LineSpan {
            line,
            range: TextRange::new(start, len),
            terminator_len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_breaks::AsciiTerminators;

    #[test]
    fn test_empty_buffer() {
        let mut index = LineIndex::new();
        assert_eq!(index.line_number("", 0), 1);
        assert_eq!(index.line_range("", 0), TextRange::empty(0));
        assert_eq!(index.cached_boundary_count(), 0);
    }

    #[test]
    fn test_single_line_no_terminator() {
        let mut index = LineIndex::new();
        let text = "hello";
        assert_eq!(index.line_number(text, 0), 1);
        assert_eq!(index.line_number(text, 5), 1);
        assert_eq!(index.line_range(text, 3), TextRange::new(0, 5));
    }

    #[test]
    fn test_trailing_terminator_makes_empty_line() {
        let mut index = LineIndex::new();
        let text = "a\n";
        assert_eq!(index.line_number(text, 0), 1);
        assert_eq!(index.line_number(text, 1), 1);
        assert_eq!(index.line_number(text, 2), 2);
        assert_eq!(index.line_range(text, 2), TextRange::empty(2));
    }

    #[test]
    fn test_terminator_belongs_to_its_line() {
        let mut index = LineIndex::new();
        let text = "ab\ncd";
        assert_eq!(index.line_range(text, 2), TextRange::new(0, 3));
        assert_eq!(index.line_start(text, 2), 0);
        assert_eq!(index.line_range(text, 3), TextRange::new(3, 5));
    }

    #[test]
    fn test_crlf_is_one_boundary_event() {
        let mut index = LineIndex::new();
        let text = "a\r\nb";
        assert_eq!(index.line_number(text, 1), 1);
        // Offset 2 points at the LF half of the CRLF: still line 1.
        assert_eq!(index.line_number(text, 2), 1);
        assert_eq!(index.line_range(text, 2), TextRange::new(0, 3));
        assert_eq!(index.line_number(text, 3), 2);
    }

    #[test]
    fn test_lazy_cache_growth_and_reuse() {
        let mut index = LineIndex::new();
        let text = "a\nb\nc\nd";
        assert_eq!(index.line_number(text, 0), 1);
        let after_first = index.cached_boundary_count();

        assert_eq!(index.line_number(text, 6), 4);
        assert_eq!(index.cached_boundary_count(), 3);
        assert!(index.cached_boundary_count() >= after_first);

        // Fully cached territory: answered without growing the cache.
        assert_eq!(index.line_number(text, 2), 2);
        assert_eq!(index.cached_boundary_count(), 3);
    }

    #[test]
    fn test_invalidate_drops_suffix_only() {
        let mut index = LineIndex::new();
        let text = "a\nb\nc\nd";
        index.line_number(text, 6);
        assert_eq!(index.cached_boundary_count(), 3);

        index.invalidate(&TextEdit::replacement(3, 1, 1));
        assert_eq!(index.cached_boundary_count(), 1);

        index.invalidate(&TextEdit::replacement(0, 1, 1));
        assert_eq!(index.cached_boundary_count(), 0);
    }

    #[test]
    fn test_covering_empty_range_at_boundary() {
        let mut index = LineIndex::new();
        let text = "ab\ncd\n";
        let covering = index.line_range_covering(text, TextRange::empty(3));
        assert_eq!(covering, TextRange::new(3, 6));
    }

    #[test]
    fn test_covering_stops_before_next_line_start() {
        let mut index = LineIndex::new();
        let text = "ab\ncd\nef";
        // [1, 3) ends exactly at line 2's start: line 2 is not included.
        let covering = index.line_range_covering(text, TextRange::new(1, 3));
        assert_eq!(covering, TextRange::new(0, 3));

        let covering = index.line_range_covering(text, TextRange::new(1, 4));
        assert_eq!(covering, TextRange::new(0, 6));
    }

    #[test]
    fn test_contents_range_strips_last_terminator_only() {
        let mut index = LineIndex::new();
        let text = "ab\ncd\nef\n";
        let contents = index.line_contents_range(text, TextRange::new(1, 5));
        assert_eq!(contents, TextRange::new(0, 5));

        // Interior terminator at 2 stays; only line 2's own terminator goes.
        let full = index.line_range_covering(text, TextRange::new(1, 5));
        assert_eq!(full, TextRange::new(0, 6));
    }

    #[test]
    fn test_contents_range_unterminated_last_line() {
        let mut index = LineIndex::new();
        let text = "ab\ncd";
        let contents = index.line_contents_range(text, TextRange::new(0, 5));
        assert_eq!(contents, TextRange::new(0, 5));
    }

    #[test]
    fn test_ascii_policy_ignores_unicode_breaks() {
        let mut unicode = LineIndex::new();
        let mut ascii = LineIndex::with_policy(AsciiTerminators);
        let text = "a\u{2028}b\nc";
        assert_eq!(unicode.line_number(text, 4), 3);
        assert_eq!(ascii.line_number(text, 4), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_offset_panics() {
        let mut index = LineIndex::new();
        index.line_number("abc", 4);
    }
}
