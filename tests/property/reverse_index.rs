//! Property tests for reverse-index lookups and boundary resolution.

use proptest::prelude::*;

use revidx_rs::pack::{ForwardEntry, OidBytes, ReverseIndex, VecForwardIndex};

/// Derives a distinct OID from an offset so reverse lookups are checkable.
fn oid_for(offset: u64) -> OidBytes {
    let mut bytes = [0u8; 20];
    bytes[..8].copy_from_slice(&offset.to_be_bytes());
    bytes[8] = 0xc3;
    OidBytes::sha1(bytes)
}

/// Unique non-zero offsets in randomized traversal order.
///
/// The range spans past 2^32 so large-offset packs are covered.
fn offsets_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(1u64..(1 << 40), 1..64)
        .prop_map(|set| set.into_iter().collect::<Vec<u64>>())
        .prop_shuffle()
}

fn forward_at(offsets: &[u64]) -> VecForwardIndex {
    let entries = offsets
        .iter()
        .map(|&offset| ForwardEntry::new(oid_for(offset), offset, 0))
        .collect();
    VecForwardIndex::new(entries)
}

proptest! {
    /// Every forward entry resolves back to its identity.
    #[test]
    fn forward_entries_round_trip(offsets in offsets_strategy()) {
        let reverse = ReverseIndex::build(&forward_at(&offsets)).expect("build");
        for &offset in &offsets {
            prop_assert_eq!(reverse.find_object(offset), Some(&oid_for(offset)));
        }
    }

    /// Offsets that start no entry are absent from lookups and rejected
    /// by boundary resolution.
    #[test]
    fn non_entries_are_absent(
        offsets in offsets_strategy(),
        probes in prop::collection::vec(0u64..(1 << 41), 1..32),
    ) {
        let reverse = ReverseIndex::build(&forward_at(&offsets)).expect("build");
        let max_offset = 1 << 41;
        for probe in probes {
            if offsets.contains(&probe) {
                continue;
            }
            prop_assert_eq!(reverse.find_object(probe), None);
            prop_assert!(reverse.find_next_offset(probe, max_offset).is_err());
        }
    }

    /// The boundary walk from the minimum offset visits every entry once,
    /// strictly ascending, in exactly N-1 internal transitions, and the
    /// final call returns the sentinel.
    #[test]
    fn boundary_walk_is_a_complete_ascending_tour(offsets in offsets_strategy()) {
        let reverse = ReverseIndex::build(&forward_at(&offsets)).expect("build");
        let max_offset = offsets.iter().max().copied().unwrap_or(0) + 1000;

        let mut offset = reverse.first_offset().expect("non-empty");
        let mut transitions = 0usize;
        let mut visited = 1usize;
        loop {
            let next = reverse.find_next_offset(offset, max_offset).expect("walk");
            prop_assert!(next > offset);
            if next == max_offset {
                break;
            }
            transitions += 1;
            visited += 1;
            offset = next;
        }
        prop_assert_eq!(transitions, offsets.len() - 1);
        prop_assert_eq!(visited, offsets.len());
    }

    /// Spans tile `[first_offset, max_offset)` without gaps or overlaps.
    #[test]
    fn spans_tile_the_data_region(offsets in offsets_strategy()) {
        let reverse = ReverseIndex::build(&forward_at(&offsets)).expect("build");
        let max_offset = offsets.iter().max().copied().unwrap_or(0) + 1000;

        let spans: Vec<_> = reverse.spans(max_offset).collect();
        prop_assert_eq!(spans.len(), offsets.len());
        prop_assert_eq!(spans[0].start, reverse.first_offset().expect("non-empty"));
        prop_assert_eq!(spans[spans.len() - 1].end, max_offset);
        for pair in spans.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        for span in &spans {
            prop_assert!(span.start < span.end);
        }
    }

    /// Position queries agree with the sorted rank of each offset.
    #[test]
    fn positions_match_sorted_rank(offsets in offsets_strategy()) {
        let reverse = ReverseIndex::build(&forward_at(&offsets)).expect("build");

        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        for (rank, &offset) in sorted.iter().enumerate() {
            let rank = rank as u32;
            prop_assert_eq!(reverse.find_position(offset), Some(rank));
            prop_assert_eq!(reverse.offset_at(rank), offset);
            prop_assert_eq!(reverse.oid_at(rank), &oid_for(offset));
        }
    }
}
