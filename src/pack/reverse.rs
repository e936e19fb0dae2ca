//! Reverse (offset -> identity) pack index.
//!
//! The forward index answers "where is this object?" but pack entries do
//! not record their own compressed length, so a reader that must size the
//! region it is about to inflate, or a verifier that must name the object
//! at a byte position, needs the inverse mapping. This module derives that
//! mapping once from a forward-index snapshot and serves lock-free reads
//! for the lifetime of the pack handle.
//!
//! # Algorithm
//! 1. Collect all (offset, identity) pairs into one buffer sized to the
//!    announced count; traversal order is unspecified, so no incidental
//!    ordering is assumed.
//! 2. Sort unstable by offset. Offsets are unique by pack construction;
//!    a duplicate discovered here is a format violation and fails the
//!    build.
//! 3. Split into two parallel fixed arrays (offsets, identities).
//!
//! # Invariants
//! - `offsets` is strictly increasing and `offsets.len() == oids.len()`.
//! - Entry `i` pairs `offsets[i]` with `oids[i]`.
//! - The table never changes after construction.
//!
//! # Complexity
//! - Build: O(N) collect + O(N log N) sort; O(N) storage with no growth
//!   after the initial allocation.
//! - `find_object`, `find_next_offset`, `find_position`: O(log N) binary
//!   search over a contiguous `u64` array.
//!
//! # Representation
//! Parallel arrays rather than an array of pairs keep the searched keys
//! densely packed (8 bytes per probe step instead of 48) and avoid padding
//! at the tens-of-millions-of-entries scale large packs reach.

use super::errors::{CorruptIndexError, ReverseIndexBuildError};
use super::forward::ForwardIndex;
use super::limits::{ReverseIndexLimits, TABLE_ENTRY_BYTES};
use super::object_id::OidBytes;

/// Immutable offset-sorted view of a pack's objects.
#[derive(Clone, Debug)]
pub struct ReverseIndex {
    /// Entry start offsets, strictly increasing.
    offsets: Box<[u64]>,
    /// Identity of the object starting at `offsets[i]`.
    oids: Box<[OidBytes]>,
}

impl ReverseIndex {
    /// Builds a reverse index from a forward index, under default limits.
    ///
    /// # Errors
    /// Returns `ReverseIndexBuildError` if the forward index misreports
    /// its entry count, contains duplicate offsets, or exceeds the caps.
    pub fn build(index: &dyn ForwardIndex) -> Result<Self, ReverseIndexBuildError> {
        Self::build_with_limits(index, &ReverseIndexLimits::DEFAULT)
    }

    /// Builds a reverse index from a forward index.
    ///
    /// Consumes one full pass over `index.entries()` and sorts the result;
    /// the forward index itself is left untouched and may back any number
    /// of independently built reverse indexes.
    ///
    /// # Errors
    /// Returns `ReverseIndexBuildError` if the forward index misreports
    /// its entry count, contains duplicate offsets, or exceeds the caps.
    ///
    /// # Panics
    /// Panics if `limits` are internally inconsistent (a configuration
    /// bug, not an input error).
    pub fn build_with_limits(
        index: &dyn ForwardIndex,
        limits: &ReverseIndexLimits,
    ) -> Result<Self, ReverseIndexBuildError> {
        limits.validate();

        let announced = index.object_count();
        if announced > limits.max_objects {
            return Err(ReverseIndexBuildError::TooManyObjects {
                count: announced,
                max: limits.max_objects,
            });
        }
        let table_bytes = announced.saturating_mul(TABLE_ENTRY_BYTES);
        if table_bytes > limits.max_table_bytes {
            return Err(ReverseIndexBuildError::TableTooLarge {
                size: table_bytes,
                limit: limits.max_table_bytes,
            });
        }

        // max_objects <= u32::MAX, so the announced count fits usize.
        let capacity = announced as usize;
        let mut pairs: Vec<(u64, OidBytes)> = Vec::with_capacity(capacity);
        let mut traversed: u64 = 0;
        for entry in index.entries() {
            traversed += 1;
            if traversed <= announced {
                pairs.push((entry.offset, entry.oid));
            }
        }
        if traversed != announced {
            return Err(ReverseIndexBuildError::CountMismatch {
                announced,
                traversed,
            });
        }

        pairs.sort_unstable_by_key(|&(offset, _)| offset);
        for window in pairs.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(ReverseIndexBuildError::DuplicateOffset {
                    offset: window[0].0,
                });
            }
        }

        let mut offsets = Vec::with_capacity(pairs.len());
        let mut oids = Vec::with_capacity(pairs.len());
        for (offset, oid) in pairs {
            offsets.push(offset);
            oids.push(oid);
        }

        Ok(Self {
            offsets: offsets.into_boxed_slice(),
            oids: oids.into_boxed_slice(),
        })
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true if the pack holds no objects.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the number of entries as the forward index counts them.
    #[inline]
    #[must_use]
    pub fn object_count(&self) -> u64 {
        self.offsets.len() as u64
    }

    /// Returns the identity of the object starting exactly at `offset`.
    ///
    /// A miss (offset 0, an offset inside an object's body, anything past
    /// the last entry) returns `None`; this is a normal negative result
    /// for diagnostic probes at arbitrary byte positions.
    #[inline]
    #[must_use]
    pub fn find_object(&self, offset: u64) -> Option<&OidBytes> {
        let position = self.find_position(offset)?;
        Some(&self.oids[position as usize])
    }

    /// Returns the offset immediately following the raw data of the object
    /// starting at `offset`.
    ///
    /// For the last entry this is the caller-supplied `max_offset`, the
    /// total pack data length excluding the trailing pack checksum. The
    /// result is always strictly greater than `offset`.
    ///
    /// # Errors
    /// Returns `CorruptIndexError` if no entry starts at `offset`. Callers
    /// pass only offsets obtained from the forward index, so a miss here
    /// means the two indices disagree and must not be swallowed.
    pub fn find_next_offset(
        &self,
        offset: u64,
        max_offset: u64,
    ) -> Result<u64, CorruptIndexError> {
        let position = self
            .offsets
            .binary_search(&offset)
            .map_err(|_| CorruptIndexError::NoEntryAtOffset { offset })?;
        Ok(match self.offsets.get(position + 1) {
            Some(&next) => next,
            None => max_offset,
        })
    }

    /// Returns the position of the entry starting at `offset` in
    /// offset-sorted order, or `None` when no entry starts there.
    #[inline]
    #[must_use]
    pub fn find_position(&self, offset: u64) -> Option<u32> {
        self.offsets
            .binary_search(&offset)
            .ok()
            .map(|position| position as u32)
    }

    /// Returns the identity at a sorted position.
    ///
    /// # Panics
    /// Panics if `position` is out of range.
    #[inline]
    #[must_use]
    pub fn oid_at(&self, position: u32) -> &OidBytes {
        debug_assert!(
            (position as usize) < self.oids.len(),
            "position out of bounds"
        );
        &self.oids[position as usize]
    }

    /// Returns the start offset at a sorted position.
    ///
    /// # Panics
    /// Panics if `position` is out of range.
    #[inline]
    #[must_use]
    pub fn offset_at(&self, position: u32) -> u64 {
        debug_assert!(
            (position as usize) < self.offsets.len(),
            "position out of bounds"
        );
        self.offsets[position as usize]
    }

    /// Returns the smallest entry offset, the starting point for a
    /// boundary walk over the whole pack.
    #[inline]
    #[must_use]
    pub fn first_offset(&self) -> Option<u64> {
        self.offsets.first().copied()
    }

    /// Returns the largest entry offset.
    #[inline]
    #[must_use]
    pub fn last_offset(&self) -> Option<u64> {
        self.offsets.last().copied()
    }

    /// Iterates entries as (offset, identity) pairs in ascending offset
    /// order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ReverseEntryIter<'_> {
        ReverseEntryIter {
            offsets: &self.offsets,
            oids: &self.oids,
            position: 0,
        }
    }

    /// Iterates the byte span of every entry in ascending offset order.
    ///
    /// Each span ends where the next entry starts; the final span ends at
    /// the caller-supplied `max_offset`. Spans therefore tile the region
    /// from the first entry offset to `max_offset` with no gaps.
    #[inline]
    #[must_use]
    pub fn spans(&self, max_offset: u64) -> SpanIter<'_> {
        SpanIter {
            offsets: &self.offsets,
            oids: &self.oids,
            position: 0,
            max_offset,
        }
    }
}

impl<'a> IntoIterator for &'a ReverseIndex {
    type Item = (u64, &'a OidBytes);
    type IntoIter = ReverseEntryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over reverse-index entries in ascending offset order.
#[derive(Clone, Debug)]
pub struct ReverseEntryIter<'a> {
    offsets: &'a [u64],
    oids: &'a [OidBytes],
    position: usize,
}

impl<'a> Iterator for ReverseEntryIter<'a> {
    type Item = (u64, &'a OidBytes);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let offset = *self.offsets.get(self.position)?;
        let oid = &self.oids[self.position];
        self.position += 1;
        Some((offset, oid))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.offsets.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReverseEntryIter<'_> {}

/// Byte range occupied by one packed object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntrySpan<'a> {
    /// Identity of the object occupying the span.
    pub oid: &'a OidBytes,
    /// Offset of the entry's first byte.
    pub start: u64,
    /// Offset one past the entry's last raw byte: the next entry's start,
    /// or the caller-supplied end-of-data boundary for the final entry.
    pub end: u64,
}

/// Iterator over entry byte spans in ascending offset order.
#[derive(Clone, Debug)]
pub struct SpanIter<'a> {
    offsets: &'a [u64],
    oids: &'a [OidBytes],
    position: usize,
    max_offset: u64,
}

impl<'a> Iterator for SpanIter<'a> {
    type Item = EntrySpan<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.offsets.get(self.position)?;
        let end = match self.offsets.get(self.position + 1) {
            Some(&next) => next,
            None => self.max_offset,
        };
        let oid = &self.oids[self.position];
        self.position += 1;
        Some(EntrySpan { oid, start, end })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.offsets.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpanIter<'_> {}
