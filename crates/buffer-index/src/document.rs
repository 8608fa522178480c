//! Document ownership layer.
//!
//! [`Document`] is the reference composition of the crate: rope-backed
//! storage owning a [`LineIndex`] and an [`EditedRangeSet`], with every
//! mutation reported to both before the call returns. Hosts with their own
//! buffer type can treat this module as the wiring diagram — implement
//! [`TextSource`](crate::TextSource) and keep the same call order.

use ropey::Rope;

use crate::edit::TextEdit;
use crate::edited_ranges::EditedRangeSet;
use crate::line_breaks::LineEnding;
use crate::line_index::LineIndex;
use crate::range::TextRange;

/// Error type for the document's fallible edit surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// An offset argument was past the end of the document.
    OffsetOutOfBounds {
        /// The offending offset.
        offset: usize,
        /// Document length at the time of the call.
        len: usize,
    },
    /// A range argument extended past the end of the document.
    RangeOutOfBounds {
        /// The offending range.
        range: TextRange,
        /// Document length at the time of the call.
        len: usize,
    },
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::OffsetOutOfBounds { offset, len } => {
                write!(f, "offset {offset} out of bounds for document of length {len}")
            }
            DocumentError::RangeOutOfBounds { range, len } => {
                write!(f, "range {range} out of bounds for document of length {len}")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// A mutable text document with incremental line and dirty-region tracking.
///
/// Storage is a [`Rope`]; the owned [`LineIndex`] and [`EditedRangeSet`] are
/// notified of every mutation exactly once, in order, so queries issued after
/// any edit see current state. All offsets are character offsets.
///
/// # Example
///
/// ```rust
/// use buffer_index::{Document, TextRange};
///
/// let mut doc = Document::from_text("fn main() {\n}\n");
/// doc.insert(12, "    body();\n").unwrap();
/// assert_eq!(doc.line_number(13), 2);
///
/// // A re-highlighter drains the dirty spans.
/// let dirty = doc.take_edited_ranges();
/// assert_eq!(dirty, vec![TextRange::new(12, 24)]);
/// assert!(doc.edited_ranges().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    lines: LineIndex,
    edited: EditedRangeSet,
    line_ending: LineEnding,
    version: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a document from initial text.
    ///
    /// Content is stored as-is; no terminator normalization happens. The
    /// dominant line ending is detected once and kept as save-time metadata.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            lines: LineIndex::new(),
            edited: EditedRangeSet::new(),
            line_ending: LineEnding::detect_in_text(text),
            version: 0,
        }
    }

    /// Document length in characters.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` if the document holds no text.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The text within `range`.
    pub fn slice(&self, range: TextRange) -> Result<String, DocumentError> {
        if range.end > self.rope.len_chars() {
            return Err(DocumentError::RangeOutOfBounds {
                range,
                len: self.rope.len_chars(),
            });
        }
        Ok(self.rope.slice(range.start..range.end).to_string())
    }

    /// The dominant line ending detected when the document was created.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Number of edits applied since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace `range` with `text`, reporting the edit to the line index and
    /// the edited-range set.
    ///
    /// Returns the edit descriptor so hosts can forward it to further
    /// consumers (an LSP sync layer, a parser) without reconstructing it.
    pub fn replace(&mut self, range: TextRange, text: &str) -> Result<TextEdit, DocumentError> {
        let len = self.rope.len_chars();
        if range.end > len {
            return Err(DocumentError::RangeOutOfBounds { range, len });
        }

        self.rope.remove(range.start..range.end);
        self.rope.insert(range.start, text);

        let new_len = text.chars().count();
        let edit = TextEdit::replacement(range.start, range.len(), new_len);
        self.lines.invalidate(&edit);
        self.edited.record(&edit);
        self.version += 1;
        Ok(edit)
    }

    /// Insert `text` at `offset`.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<TextEdit, DocumentError> {
        if offset > self.rope.len_chars() {
            return Err(DocumentError::OffsetOutOfBounds {
                offset,
                len: self.rope.len_chars(),
            });
        }
        self.replace(TextRange::empty(offset), text)
    }

    /// Delete the text in `range`.
    pub fn delete(&mut self, range: TextRange) -> Result<TextEdit, DocumentError> {
        self.replace(range, "")
    }

    /// 1-based number of the line containing `offset`.
    pub fn line_number(&mut self, offset: usize) -> usize {
        self.lines.line_number(&self.rope, offset)
    }

    /// Offset of the first character of the line containing `offset`.
    pub fn line_start(&mut self, offset: usize) -> usize {
        self.lines.line_start(&self.rope, offset)
    }

    /// The full line containing `offset`, terminator included.
    pub fn line_range(&mut self, offset: usize) -> TextRange {
        self.lines.line_range(&self.rope, offset)
    }

    /// Union of the whole lines intersecting `range`.
    pub fn line_range_covering(&mut self, range: TextRange) -> TextRange {
        self.lines.line_range_covering(&self.rope, range)
    }

    /// Like [`Document::line_range_covering`], without the final terminator.
    pub fn line_contents_range(&mut self, range: TextRange) -> TextRange {
        self.lines.line_contents_range(&self.rope, range)
    }

    /// Total number of lines, counting the trailing empty line after a final
    /// terminator.
    pub fn line_count(&mut self) -> usize {
        let len = self.rope.len_chars();
        self.lines.line_number(&self.rope, len)
    }

    /// The dirty ranges accumulated since the last drain.
    pub fn edited_ranges(&self) -> &[TextRange] {
        self.edited.ranges()
    }

    /// Drain the accumulated dirty ranges, leaving the set empty.
    pub fn take_edited_ranges(&mut self) -> Vec<TextRange> {
        self.edited.take_ranges()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
