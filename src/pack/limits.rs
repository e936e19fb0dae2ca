//! Hard caps for reverse-index construction.
//!
//! These limits are guardrails against unbounded allocation when a forward
//! index announces a pathological object count. All limits are explicit
//! and enforced; exceeding a limit surfaces as a build error rather than
//! silent truncation.
//!
//! # Design Notes
//! - Limits are validated at startup; invalid configurations are treated
//!   as programmer errors (panic in `validate`).
//! - Defaults are sized for large monorepo packs (tens of millions of
//!   objects) while keeping the table within predictable memory bounds.

use super::object_id::OidBytes;

/// Bytes one table entry occupies across the parallel arrays
/// (one `u64` offset plus one stored OID).
pub const TABLE_ENTRY_BYTES: u64 =
    (std::mem::size_of::<u64>() + std::mem::size_of::<OidBytes>()) as u64;

/// Hard caps for reverse-index construction.
#[derive(Clone, Copy, Debug)]
pub struct ReverseIndexLimits {
    /// Maximum objects a single pack's index may announce.
    pub max_objects: u64,
    /// Maximum bytes the built table may occupy.
    pub max_table_bytes: u64,
}

impl ReverseIndexLimits {
    /// Safe defaults suitable for large monorepo packs.
    pub const DEFAULT: Self = Self {
        max_objects: 50_000_000,
        max_table_bytes: 4 * 1024 * 1024 * 1024, // 4 GiB
    };

    /// Restrictive limits for testing or constrained environments.
    pub const RESTRICTIVE: Self = Self {
        max_objects: 65_536,
        max_table_bytes: 16 * 1024 * 1024, // 16 MiB
    };

    /// Validates that limits are internally consistent.
    ///
    /// # Panics
    ///
    /// Panics if limits are invalid (indicates a configuration bug).
    #[track_caller]
    pub const fn validate(&self) {
        assert!(self.max_objects > 0, "must allow at least 1 object");
        assert!(
            self.max_objects <= u32::MAX as u64,
            "table positions are indexed by u32"
        );
        assert!(
            self.max_table_bytes >= TABLE_ENTRY_BYTES,
            "table cap too small for a single entry"
        );
    }
}

impl Default for ReverseIndexLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = ReverseIndexLimits::DEFAULT.validate();
const _: () = ReverseIndexLimits::RESTRICTIVE.validate();
