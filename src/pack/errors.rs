//! Error types for reverse-index construction and queries.
//!
//! Errors are stage-specific: construction failures and query-time
//! corruption are distinct failure modes with distinct consumers. All enums
//! are `#[non_exhaustive]` so variants can be added without breaking
//! callers; consumers should include a fallback match arm.
//!
//! # Design Notes
//! - Build errors are plain data (`Clone + PartialEq`) so a shared
//!   publication slot can cache and re-report them.
//! - A miss in `find_object` is not represented here at all: "no object
//!   starts at this offset" is a normal negative result, not an error.

use std::fmt;

/// Errors from building a reverse index.
///
/// Build failures are fatal for the pack handle: no partial index is
/// published, and the pack's indices must not be relied on afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReverseIndexBuildError {
    /// The forward index yielded a different number of entries than it
    /// announced.
    CountMismatch { announced: u64, traversed: u64 },
    /// Two forward entries claim the same pack offset.
    DuplicateOffset { offset: u64 },
    /// The forward index announces more objects than the configured cap.
    TooManyObjects { count: u64, max: u64 },
    /// The table would exceed the configured byte cap.
    TableTooLarge { size: u64, limit: u64 },
}

impl fmt::Display for ReverseIndexBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch {
                announced,
                traversed,
            } => {
                write!(
                    f,
                    "forward index count mismatch: announced {announced}, traversed {traversed}"
                )
            }
            Self::DuplicateOffset { offset } => {
                write!(f, "duplicate pack offset: {offset}")
            }
            Self::TooManyObjects { count, max } => {
                write!(f, "too many objects: {count} (max: {max})")
            }
            Self::TableTooLarge { size, limit } => {
                write!(f, "reverse index too large: {size} bytes (limit: {limit})")
            }
        }
    }
}

impl std::error::Error for ReverseIndexBuildError {}

/// Inconsistency detected while resolving a trusted offset.
///
/// `find_next_offset` is only invoked with offsets previously obtained
/// from the forward index, so a miss signals disagreement between the two
/// indices or a caller bug. This error is propagated unmodified and never
/// retried; further reliance on the pack's indices is unsafe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CorruptIndexError {
    /// No pack entry starts at the supplied offset.
    NoEntryAtOffset { offset: u64 },
}

impl fmt::Display for CorruptIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEntryAtOffset { offset } => {
                write!(f, "no pack entry starts at offset {offset}")
            }
        }
    }
}

impl std::error::Error for CorruptIndexError {}
