#![warn(missing_docs)]
//! buffer-index - Incremental Line Indexing and Edited-Range Tracking
//!
//! # Overview
//!
//! `buffer-index` provides the two data structures a text editor needs to answer
//! line-oriented position queries and to know "what changed" across a live, repeatedly
//! mutated buffer, without rescanning the whole document on every keystroke.
//! It performs no I/O, spawns no threads, and renders nothing; the host owns the buffer
//! and calls in after every mutation.
//!
//! # Core Features
//!
//! - **Lazy Line Index**: sparse boundary cache, O(log k + m) queries, near O(1) for
//!   repeated localized access (viewport rendering, gutter numbering)
//! - **Conservative Invalidation**: a single O(log k) truncation per edit, always correct
//! - **Coalesced Dirty Regions**: minimal interval set transformed under every edit,
//!   drained by re-highlighting/re-indexing consumers
//! - **Pluggable Terminators**: Unicode mandatory-break set by default, ASCII or custom
//!   policies via a trait
//! - **Buffer Agnostic**: queries borrow content through the [`TextSource`] capability;
//!   `str`, `String`, and `ropey::Rope` work out of the box
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Document (rope storage + change reporting) │  ← Reference owner
//! ├──────────────────────┬──────────────────────┤
//! │  LineIndex           │  EditedRangeSet      │  ← The two cores
//! │  (boundary cache)    │  (dirty intervals)   │
//! ├──────────────────────┴──────────────────────┤
//! │  TextSource + TerminatorPolicy              │  ← Capability seams
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The two cores share no state: [`LineIndex`] reads buffer content (through
//! [`TextSource`]) to scan for terminators; [`EditedRangeSet`] sees only the stream of
//! [`TextEdit`] descriptors and never touches content.
//!
//! # Quick Start
//!
//! ## Standalone structures
//!
//! ```rust
//! use buffer_index::{EditedRangeSet, LineIndex, TextEdit, TextRange};
//!
//! let mut text = String::from("dog \n\n cat \n cow \n");
//! let mut lines = LineIndex::new();
//! let mut edited = EditedRangeSet::new();
//!
//! assert_eq!(lines.line_number(&text, 5), 2);
//! assert_eq!(lines.line_range(&text, 6), TextRange::new(6, 12));
//!
//! // The owner mutates the buffer, then reports the edit to both structures.
//! text.replace_range(1..3, "");
//! let edit = TextEdit::replacement(1, 2, 0);
//! lines.invalidate(&edit);
//! edited.record(&edit);
//!
//! assert_eq!(lines.line_range(&text, 1), TextRange::new(0, 3));
//! assert_eq!(edited.ranges(), vec![TextRange::empty(1)]);
//! ```
//!
//! ## Using the document owner
//!
//! ```rust
//! use buffer_index::{Document, TextRange};
//!
//! let mut doc = Document::from_text("one\ntwo\n");
//! doc.insert(4, "1.5\n").unwrap();
//!
//! assert_eq!(doc.line_number(4), 2);
//! assert_eq!(doc.line_count(), 4);
//!
//! for dirty in doc.take_edited_ranges() {
//!     // reprocess only the dirty span
//!     assert_eq!(dirty, TextRange::new(4, 8));
//! }
//! ```
//!
//! # Module Description
//!
//! - [`range`] - half-open offset ranges
//! - [`edit`] - structured edit descriptors
//! - [`line_breaks`] - terminator recognition policies and line-ending metadata
//! - [`text_source`] - read-only buffer access capability
//! - [`line_index`] - the incremental line index
//! - [`edited_ranges`] - coalesced dirty-region tracking
//! - [`document`] - reference owner wiring everything together
//!
//! # Coordinates
//!
//! All offsets are character offsets (Unicode scalar values), half-open ranges, with
//! 1-based line numbers. `offset == len` is valid in every query and addresses the
//! (possibly empty) trailing line.
//!
//! # Concurrency
//!
//! Every operation is synchronous and runs on the caller's thread; cache-mutating
//! queries take `&mut self`, so exclusive sequential access is enforced by the borrow
//! checker rather than by locks.

pub mod document;
pub mod edit;
pub mod edited_ranges;
pub mod line_breaks;
pub mod line_index;
pub mod range;
pub mod text_source;

pub use document::{Document, DocumentError};
pub use edit::TextEdit;
pub use edited_ranges::EditedRangeSet;
pub use line_breaks::{AsciiTerminators, LineEnding, TerminatorPolicy, UnicodeTerminators};
pub use line_index::{LineBoundary, LineIndex};
pub use range::TextRange;
pub use text_source::TextSource;
