//! Reverse pack index: offset -> identity lookups and boundary resolution.
//!
//! ## Scope
//! A pack file stores many compressed, content-addressed objects
//! back-to-back, and its forward index maps object identity to byte offset.
//! Pack entries do not self-delimit, so tooling that reads, verifies, or
//! repacks needs the inverse mapping (which object starts at this offset?)
//! plus boundary information (where does this object's raw data end?).
//! This crate builds that reverse index once from a forward-index snapshot
//! and serves both queries lock-free to any number of concurrent readers.
//!
//! ## Key invariants
//! - The table is built exactly once and never mutated; it is discarded
//!   wholesale when the underlying pack is replaced.
//! - Offsets in the table are strictly increasing; construction fails fast
//!   on duplicates rather than publishing ambiguous lookups.
//! - Both queries are pure O(log N) reads over fixed parallel arrays with
//!   no blocking, retries, or timeouts.
//! - `find_object` treats a miss as a normal negative; `find_next_offset`
//!   treats a miss as evidence of index corruption. Callers of the latter
//!   only pass offsets they obtained from the forward index.
//!
//! ## Notable entry points
//! - [`ReverseIndex`]: eager build plus both queries.
//! - [`LazyReverseIndex`]: shared build-once-then-publish slot for pack
//!   handles with many concurrent first-time readers.
//! - [`ForwardIndex`]: the collaborator seam this crate consumes; this
//!   crate never parses the forward index's on-disk format.

pub mod pack;

pub use pack::{
    CorruptIndexError, EntrySpan, ForwardEntry, ForwardIndex, LazyReverseIndex, ObjectFormat,
    OidBytes, ReverseEntryIter, ReverseIndex, ReverseIndexBuildError, ReverseIndexLimits,
    SpanIter, VecForwardIndex,
};
