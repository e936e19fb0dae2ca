//! Object identity value types.
//!
//! Packs address content by fixed-width hash. `OidBytes` stores one such
//! identifier inline (no heap) together with its format tag, so raw table
//! bytes can be wrapped without knowing the hash algorithm up front.
//!
//! # Ordering
//! OIDs compare lexicographically on their meaningful bytes only. Ordering
//! is format-agnostic: a 20-byte OID that is a byte prefix of a 32-byte OID
//! sorts before it.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Hash algorithm behind an object ID.
///
/// The discriminants are stable and may be used for compact serialization.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObjectFormat {
    /// SHA-1 object IDs (20 bytes).
    #[default]
    Sha1 = 1,
    /// SHA-256 object IDs (32 bytes).
    Sha256 = 2,
}

impl ObjectFormat {
    /// Returns the OID byte length for this format.
    #[inline]
    #[must_use]
    pub const fn oid_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Returns the format for an OID byte length, if one matches.
    #[inline]
    #[must_use]
    pub const fn from_oid_len(len: usize) -> Option<Self> {
        match len {
            20 => Some(Self::Sha1),
            32 => Some(Self::Sha256),
            _ => None,
        }
    }
}

/// Fixed-size storage for one object ID.
///
/// # Invariants
/// - Only `bytes[0..format.oid_len()]` is meaningful.
/// - The unused tail is always zero, so a copied value never leaks stale
///   bytes through `Debug` or future format changes.
#[derive(Clone, Copy)]
pub struct OidBytes {
    format: ObjectFormat,
    bytes: [u8; Self::MAX_LEN],
}

impl OidBytes {
    /// Maximum OID length in bytes (SHA-256).
    pub const MAX_LEN: usize = 32;

    /// Wraps a SHA-1 OID.
    #[inline]
    #[must_use]
    pub fn sha1(oid: [u8; 20]) -> Self {
        let mut bytes = [0u8; Self::MAX_LEN];
        bytes[..20].copy_from_slice(&oid);
        Self {
            format: ObjectFormat::Sha1,
            bytes,
        }
    }

    /// Wraps a SHA-256 OID.
    #[inline]
    #[must_use]
    pub fn sha256(oid: [u8; 32]) -> Self {
        Self {
            format: ObjectFormat::Sha256,
            bytes: oid,
        }
    }

    /// Wraps an OID slice, inferring the format from its length.
    ///
    /// Returns `None` unless the slice is exactly 20 or 32 bytes. Use this
    /// for untrusted input where panicking is undesirable.
    #[must_use]
    pub fn try_from_slice(oid: &[u8]) -> Option<Self> {
        let format = ObjectFormat::from_oid_len(oid.len())?;
        let mut bytes = [0u8; Self::MAX_LEN];
        bytes[..oid.len()].copy_from_slice(oid);
        Some(Self { format, bytes })
    }

    /// Wraps an OID slice from a trusted source.
    ///
    /// # Panics
    ///
    /// Panics if the slice is not 20 or 32 bytes; an invalid length from a
    /// trusted source indicates a programming error.
    #[must_use]
    pub fn from_slice(oid: &[u8]) -> Self {
        Self::try_from_slice(oid).expect("OID must be 20 or 32 bytes")
    }

    /// Returns the meaningful OID bytes (20 or 32 of them).
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.format.oid_len()]
    }

    /// Returns the OID length in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.format.oid_len()
    }

    /// Always false; provided for API symmetry with slice-like types.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the hash format of this OID.
    #[inline]
    #[must_use]
    pub const fn format(&self) -> ObjectFormat {
        self.format
    }

    /// Returns true for the all-zero OID of this format.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.as_slice().iter().all(|&b| b == 0)
    }
}

impl Default for OidBytes {
    /// The SHA-1 null OID.
    fn default() -> Self {
        Self::sha1([0u8; 20])
    }
}

impl fmt::Debug for OidBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OidBytes({self})")
    }
}

impl fmt::Display for OidBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lowercase hex, the canonical OID rendering.
        for byte in self.as_slice() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl PartialEq for OidBytes {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for OidBytes {}

impl Hash for OidBytes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl PartialOrd for OidBytes {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OidBytes {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
