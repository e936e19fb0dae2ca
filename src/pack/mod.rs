//! Pack index modules.
//!
//! The forward index is an external, already-built artifact mapping object
//! identity to pack offset; it is consumed here only through the
//! [`ForwardIndex`] trait. The reverse index is derived from it in one
//! pass: collect every (offset, identity) pair, sort by offset, publish an
//! immutable table. All queries after publication are pure reads.
//!
//! Data flow:
//! forward index -> one-shot builder -> immutable offset-sorted table ->
//! concurrent `find_object` / `find_next_offset` callers.
//!
//! # Invariants
//! - The builder never mutates or re-reads the pack itself.
//! - A published table satisfies: strictly increasing offsets, entry count
//!   equal to the forward index's announced count, identity set preserved.
//! - Construction failures are fatal for the pack handle; no partial table
//!   is ever observable.

pub mod errors;
pub mod forward;
pub mod lazy;
pub mod limits;
pub mod object_id;
pub mod reverse;

pub use errors::{CorruptIndexError, ReverseIndexBuildError};
pub use forward::{ForwardEntry, ForwardIndex, VecForwardIndex};
pub use lazy::LazyReverseIndex;
pub use limits::{ReverseIndexLimits, TABLE_ENTRY_BYTES};
pub use object_id::{ObjectFormat, OidBytes};
pub use reverse::{EntrySpan, ReverseEntryIter, ReverseIndex, SpanIter};
