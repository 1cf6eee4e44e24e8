//! Byte order selection.
//!
//! The same constant table can be stored little- or big-endian depending on
//! the target architecture and on how the implementation spelled it out in
//! source. Both interpretations are scanned and the stronger one is kept.

use super::MatchResult;
use super::word::ByteOrder;

/// Pick the stronger of a little-endian and a big-endian scan.
///
/// Priority:
/// 1. the higher match count wins outright;
/// 2. on equal counts, big-endian wins if its matches are consecutive;
/// 3. otherwise little-endian wins if its matches are consecutive;
/// 4. otherwise big-endian.
///
/// Rule 4 is a fixed output policy kept for stable reports. It carries no
/// information about the actual layout of the binary.
pub fn select(little: MatchResult, big: MatchResult) -> MatchResult {
    debug_assert_eq!(little.byte_order, ByteOrder::Little);
    debug_assert_eq!(big.byte_order, ByteOrder::Big);

    let (le, be) = (little.count(), big.count());

    if be > le || (be == le && big.consecutive) {
        return big;
    }
    if le > be || little.consecutive {
        return little;
    }

    // Policy default, not a signal
    big
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(order: ByteOrder, offsets: Vec<usize>, consecutive: bool) -> MatchResult {
        MatchResult {
            byte_order: order,
            offsets,
            consecutive,
        }
    }

    #[test]
    fn test_higher_count_wins() {
        let le = result(ByteOrder::Little, vec![0, 4, 8], false);
        let be = result(ByteOrder::Big, vec![0, 4], true);
        assert_eq!(select(le, be).byte_order, ByteOrder::Little);

        let le = result(ByteOrder::Little, vec![0], true);
        let be = result(ByteOrder::Big, vec![0, 900], false);
        assert_eq!(select(le, be).byte_order, ByteOrder::Big);
    }

    #[test]
    fn test_equal_count_prefers_consecutive_big_endian() {
        let le = result(ByteOrder::Little, vec![0, 4], true);
        let be = result(ByteOrder::Big, vec![8, 12], true);
        assert_eq!(select(le, be).byte_order, ByteOrder::Big);
    }

    #[test]
    fn test_equal_count_falls_back_to_consecutive_little_endian() {
        let le = result(ByteOrder::Little, vec![0, 4], true);
        let be = result(ByteOrder::Big, vec![8, 1000], false);
        let chosen = select(le, be);
        assert_eq!(chosen.byte_order, ByteOrder::Little);
        assert!(chosen.consecutive);
    }

    #[test]
    fn test_both_fragmented_defaults_to_big_endian() {
        let le = result(ByteOrder::Little, vec![0, 1000], false);
        let be = result(ByteOrder::Big, vec![4, 2000], false);
        let chosen = select(le, be);
        assert_eq!(chosen.byte_order, ByteOrder::Big);
        assert_eq!(chosen.offsets, vec![4, 2000]);
    }

    #[test]
    fn test_no_matches_defaults_to_big_endian() {
        let le = result(ByteOrder::Little, vec![], true);
        let be = result(ByteOrder::Big, vec![], true);
        assert_eq!(select(le, be).byte_order, ByteOrder::Big);
    }
}
