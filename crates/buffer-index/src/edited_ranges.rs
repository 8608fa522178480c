//! Coalesced dirty-region tracking.
//!
//! Records which spans of the buffer have been touched by edits since the
//! set was last drained, keeping every recorded range expressed in the
//! buffer's *current* coordinates. Downstream consumers (re-highlighters,
//! re-indexers) read the ranges, reprocess only those spans, and clear.
//!
//! The set never reads buffer content; it only transforms offsets under the
//! stream of [`TextEdit`] descriptors it is given.

use crate::edit::TextEdit;
use crate::range::TextRange;

/// Minimal, coalesced set of intervals touched by edits since the last drain.
///
/// Invariant: ranges are sorted by start, mutually non-overlapping, and no
/// two are adjacent — touching ranges merge immediately, so the entry count
/// is always minimal.
///
/// # Example
///
/// ```rust
/// use buffer_index::{EditedRangeSet, TextEdit, TextRange};
///
/// let mut edited = EditedRangeSet::new();
/// edited.record(&TextEdit::insertion(2, 4));
/// edited.record(&TextEdit::insertion(6, 2));
/// assert_eq!(edited.ranges(), vec![TextRange::new(2, 8)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditedRangeSet {
    ranges: Vec<TextRange>,
}

impl EditedRangeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Fold one edit into the set.
    ///
    /// Must be called for every buffer mutation, in the order the mutations
    /// occur. Ranges entirely before the replaced span are untouched; ranges
    /// entirely after it shift by the edit's delta; everything overlapping or
    /// adjacent merges with the edit's post-edit range into a single entry.
    ///
    /// A zero-length edit that replaced nothing and sits away from every
    /// tracked range records no mark. A pure deletion does leave a
    /// zero-length mark at the deletion point, so consumers still see where
    /// content vanished.
    pub fn record(&mut self, edit: &TextEdit) {
        let old_span = edit.replaced_range();
        let new_range = edit.range;

        // Both predicates are monotone over the sorted, disjoint ranges.
        let first = self.ranges.partition_point(|r| r.end < old_span.start);
        let after = self.ranges.partition_point(|r| r.start <= old_span.end);

        if first == after {
            if new_range.is_empty() && old_span.is_empty() {
                return;
            }
            self.ranges.insert(first, new_range);
        } else {
            let merged_start = old_span.start.min(self.ranges[first].start);
            let right_extra = self.ranges[after - 1].end.saturating_sub(old_span.end);
            let merged = TextRange::new(merged_start, new_range.end + right_extra);
            self.ranges.splice(first..after, [merged]);
        }
        self.shift_tail(first + 1, edit.delta);

        debug_assert!(self.is_coalesced(), "ranges must stay sorted and apart");
    }

    /// The current dirty ranges: sorted, non-overlapping, non-adjacent.
    pub fn ranges(&self) -> &[TextRange] {
        &self.ranges
    }

    /// Drain the set, returning the accumulated ranges and leaving it empty.
    pub fn take_ranges(&mut self) -> Vec<TextRange> {
        std::mem::take(&mut self.ranges)
    }

    /// Forget all recorded ranges.
    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// Number of recorded ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if nothing has been recorded since the last drain.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Translate every range from `idx` on by `delta`.
    fn shift_tail(&mut self, idx: usize, delta: isize) {
        if delta == 0 || idx >= self.ranges.len() {
            return;
        }
        for range in &mut self.ranges[idx..] {
            *range = range.shifted(delta);
        }
    }

    fn is_coalesced(&self) -> bool {
        self.ranges.windows(2).all(|pair| pair[0].end < pair[1].start)
    }
}
