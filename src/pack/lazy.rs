//! One-time build-then-publish slot for sharing a reverse index.
//!
//! Many readers of one pack handle want the same reverse index, but the
//! build must run at most once and no reader may ever observe a partially
//! constructed table. The slot computes the full table to a local value
//! inside the winning caller and publishes it through a single `OnceLock`
//! handoff; losers of the first-access race block until the winner's
//! result is visible, then share it.
//!
//! A failed build is published the same way: the error is cached and every
//! later call reports it unchanged. A forward index that misreported
//! itself once cannot become trustworthy by asking again, so there is no
//! retry path.

use std::sync::OnceLock;

use super::errors::ReverseIndexBuildError;
use super::forward::ForwardIndex;
use super::limits::ReverseIndexLimits;
use super::reverse::ReverseIndex;

/// Lazily built, shareable reverse index.
///
/// Lives inside the pack handle and matches its lifetime: when the pack is
/// replaced (for example after a repack) the whole handle is discarded,
/// slot included. There is no invalidation or incremental update.
#[derive(Debug, Default)]
pub struct LazyReverseIndex {
    slot: OnceLock<Result<ReverseIndex, ReverseIndexBuildError>>,
}

impl LazyReverseIndex {
    /// Creates an unbuilt slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the shared reverse index, building it on first call.
    ///
    /// Exactly one caller performs the build; concurrent first-time
    /// callers block until it completes and then observe the same table.
    /// Later calls are a lock-free read.
    ///
    /// # Errors
    /// Returns the build error, on the building call and on every call
    /// after a failed build.
    pub fn get_or_build(
        &self,
        index: &dyn ForwardIndex,
        limits: &ReverseIndexLimits,
    ) -> Result<&ReverseIndex, ReverseIndexBuildError> {
        self.slot
            .get_or_init(|| ReverseIndex::build_with_limits(index, limits))
            .as_ref()
            .map_err(|err| *err)
    }

    /// Returns the reverse index if a successful build has been published.
    ///
    /// Never triggers a build; returns `None` while unbuilt and after a
    /// failed build.
    #[must_use]
    pub fn get(&self) -> Option<&ReverseIndex> {
        self.slot.get().and_then(|result| result.as_ref().ok())
    }
}
