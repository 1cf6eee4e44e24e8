//! Constant sequence matching.
//!
//! This module locates an ordered sequence of 32-bit constants inside a
//! binary blob, the way crypto tables (S-boxes, round constants, IVs) are
//! laid out by compilers.
//!
//! ## Algorithm Overview
//!
//! 1. Slide a 4-byte window over every offset of the buffer
//! 2. Reinterpret the window as a `u32` in the requested byte order
//! 3. When it equals the next expected constant, record the offset and
//!    advance to the following constant
//! 4. Stop once every constant is found or the buffer ends
//! 5. Mark the match as consecutive when no two neighbouring offsets are
//!    further apart than the configured gap
//!
//! The search is a strictly in-order subsequence search: once a constant has
//! been matched the scanner never looks for an earlier one again, and bytes
//! between matches are not required to be contiguous or unused.
//!
//! ## Example
//!
//! ```
//! use ciphersniff_core::{ByteOrder, ConstantSequence, Matcher};
//!
//! let sequence = ConstantSequence::new(vec![0x4142_4344, 0x4546_4748]).unwrap();
//! let mut data = vec![0u8; 64];
//! data[10..18].copy_from_slice(&[0x44, 0x43, 0x42, 0x41, 0x48, 0x47, 0x46, 0x45]);
//!
//! let result = Matcher::new().scan(&data, &sequence, ByteOrder::Little);
//! assert_eq!(result.count(), 2);
//! assert!(result.consecutive);
//! ```

mod select;
mod word;

use crate::observer::{NullObserver, ScanContext, ScanObserver};
use crate::registry::ConstantSequence;
use tracing::trace;

pub use select::select;
pub use word::{window_count, words, ByteOrder, WORD_SIZE};

/// Default maximum distance in bytes between two neighbouring matches
/// for them to count as consecutive
pub const DEFAULT_MAX_GAP: usize = 256;

/// Number of offsets between two progress notifications
pub const PROGRESS_STRIDE: usize = 1 << 16;

/// Outcome of scanning one buffer for one sequence in one byte order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Byte order the buffer was interpreted with
    pub byte_order: ByteOrder,
    /// Offsets of the matched constants, strictly increasing
    pub offsets: Vec<usize>,
    /// Whether every pair of neighbouring offsets is within the gap limit
    pub consecutive: bool,
}

impl MatchResult {
    /// Builds a result from recorded offsets, deriving `consecutive`
    pub fn from_offsets(byte_order: ByteOrder, offsets: Vec<usize>, max_gap: usize) -> Self {
        let consecutive = is_consecutive(&offsets, max_gap);
        Self {
            byte_order,
            offsets,
            consecutive,
        }
    }

    /// Number of constants found
    pub fn count(&self) -> usize {
        self.offsets.len()
    }
}

/// True when no two neighbouring offsets are more than `max_gap` apart.
///
/// Zero or one offsets are trivially consecutive.
pub fn is_consecutive(offsets: &[usize], max_gap: usize) -> bool {
    offsets.windows(2).all(|pair| pair[1] - pair[0] <= max_gap)
}

/// Configuration for the matcher
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Largest distance in bytes between neighbouring matches that still
    /// counts as consecutive. Absorbs padding and alignment between
    /// table entries.
    pub max_gap: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
        }
    }
}

impl MatcherConfig {
    /// Creates a new matcher config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consecutive gap limit
    pub fn max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }
}

/// Scans buffers for ordered constant sequences
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Creates a new matcher with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new matcher with custom configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Scan `data` for `sequence` interpreted in `order`
    pub fn scan(&self, data: &[u8], sequence: &ConstantSequence, order: ByteOrder) -> MatchResult {
        self.scan_observed(data, sequence, &ScanContext::anonymous(order), &NullObserver)
    }

    /// Scan with progress reporting.
    ///
    /// The byte order is taken from `context`. The observer never influences
    /// the result.
    pub fn scan_observed(
        &self,
        data: &[u8],
        sequence: &ConstantSequence,
        context: &ScanContext<'_>,
        observer: &dyn ScanObserver,
    ) -> MatchResult {
        let order = context.byte_order;
        observer.scan_started(context, window_count(data.len()));

        let mut offsets = Vec::new();
        let mut expected = sequence.first().copied();

        for (offset, word) in words(data, order) {
            let Some(target) = expected else {
                break;
            };

            if offset > 0 && offset % PROGRESS_STRIDE == 0 {
                observer.scan_advanced(context, offset);
            }

            if word != target {
                continue;
            }

            offsets.push(offset);
            expected = sequence.get(offsets.len()).copied();
        }

        let result = MatchResult::from_offsets(order, offsets, self.config.max_gap);

        trace!(
            "{} <{}>: {}/{} (consecutive: {})",
            context.indicator,
            order,
            result.count(),
            sequence.len(),
            result.consecutive
        );

        observer.scan_finished(context, &result);
        result
    }

    /// Scan both byte orders and keep the stronger result (see [`select`])
    pub fn best(&self, data: &[u8], sequence: &ConstantSequence) -> MatchResult {
        self.best_observed(data, sequence, "", "", &NullObserver)
    }

    /// Like [`Matcher::best`], reporting progress for both scans
    pub fn best_observed(
        &self,
        data: &[u8],
        sequence: &ConstantSequence,
        algorithm: &str,
        indicator: &str,
        observer: &dyn ScanObserver,
    ) -> MatchResult {
        let [little, big] = ByteOrder::ALL.map(|byte_order| {
            let context = ScanContext {
                algorithm,
                indicator,
                byte_order,
            };
            self.scan_observed(data, sequence, &context, observer)
        });
        select(little, big)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StatsObserver;

    const CHAR_MAP_HEAD: [u32; 2] = [0x4142_4344, 0x4546_4748];

    fn sequence(values: &[u32]) -> ConstantSequence {
        ConstantSequence::new(values.to_vec()).unwrap()
    }

    /// Writes `values` into `data` starting at each given offset
    fn embed(data: &mut [u8], placements: &[(usize, u32)], order: ByteOrder) {
        for &(offset, value) in placements {
            data[offset..offset + WORD_SIZE].copy_from_slice(&order.encode(value));
        }
    }

    #[test]
    fn test_char_map_head_little_endian() {
        let mut data = vec![0u8; 64];
        data[10..18].copy_from_slice(&[0x44, 0x43, 0x42, 0x41, 0x48, 0x47, 0x46, 0x45]);
        let seq = sequence(&CHAR_MAP_HEAD);
        let matcher = Matcher::new();

        let le = matcher.scan(&data, &seq, ByteOrder::Little);
        assert_eq!(le.count(), 2);
        assert!(le.consecutive);
        assert_eq!(le.offsets, vec![10, 14]);

        let be = matcher.scan(&data, &seq, ByteOrder::Big);
        assert_eq!(be.count(), 0);
    }

    #[test]
    fn test_far_apart_is_fragmented() {
        let mut data = vec![0u8; 600];
        embed(
            &mut data,
            &[(10, CHAR_MAP_HEAD[0]), (510, CHAR_MAP_HEAD[1])],
            ByteOrder::Little,
        );

        let result = Matcher::new().scan(&data, &sequence(&CHAR_MAP_HEAD), ByteOrder::Little);
        assert_eq!(result.count(), 2);
        assert!(!result.consecutive);
    }

    #[test]
    fn test_gap_boundary() {
        let mut data = vec![0u8; 600];
        embed(
            &mut data,
            &[(0, CHAR_MAP_HEAD[0]), (256, CHAR_MAP_HEAD[1])],
            ByteOrder::Big,
        );
        let seq = sequence(&CHAR_MAP_HEAD);

        assert!(Matcher::new().scan(&data, &seq, ByteOrder::Big).consecutive);

        let strict = Matcher::with_config(MatcherConfig::new().max_gap(255));
        let result = strict.scan(&data, &seq, ByteOrder::Big);
        assert_eq!(result.count(), 2);
        assert!(!result.consecutive);
    }

    #[test]
    fn test_empty_and_short_buffers() {
        let seq = sequence(&CHAR_MAP_HEAD);
        for data in [&[][..], &[0x44, 0x43, 0x42][..]] {
            for order in ByteOrder::ALL {
                let result = Matcher::new().scan(data, &seq, order);
                assert_eq!(result.count(), 0);
                assert!(result.consecutive);
            }
        }
    }

    #[test]
    fn test_last_window_is_scanned() {
        let data = ByteOrder::Big.encode(0xDEAD_BEEF);
        let result = Matcher::new().scan(&data, &sequence(&[0xDEAD_BEEF]), ByteOrder::Big);
        assert_eq!(result.offsets, vec![0]);
    }

    #[test]
    fn test_in_order_only() {
        // Second constant appears before the first: only the first is found
        let mut data = vec![0u8; 32];
        embed(
            &mut data,
            &[(0, CHAR_MAP_HEAD[1]), (8, CHAR_MAP_HEAD[0])],
            ByteOrder::Little,
        );
        let result = Matcher::new().scan(&data, &sequence(&CHAR_MAP_HEAD), ByteOrder::Little);
        assert_eq!(result.offsets, vec![8]);
    }

    #[test]
    fn test_repeated_values_need_later_offsets() {
        let mut data = vec![0u8; 32];
        embed(&mut data, &[(4, 0x1234_5678)], ByteOrder::Big);
        let seq = sequence(&[0x1234_5678, 0x1234_5678]);
        assert_eq!(Matcher::new().scan(&data, &seq, ByteOrder::Big).count(), 1);

        embed(&mut data, &[(20, 0x1234_5678)], ByteOrder::Big);
        let result = Matcher::new().scan(&data, &seq, ByteOrder::Big);
        assert_eq!(result.offsets, vec![4, 20]);
    }

    #[test]
    fn test_overlapping_windows_match() {
        // 0x00000000 followed by 0x00000001 overlapping at offset 1
        let data = [0x00, 0x00, 0x00, 0x00, 0x01];
        let seq = sequence(&[0x0000_0000, 0x0000_0001]);
        let result = Matcher::new().scan(&data, &seq, ByteOrder::Big);
        assert_eq!(result.offsets, vec![0, 1]);
    }

    #[test]
    fn test_stops_once_complete() {
        let mut data = vec![0u8; 64];
        embed(&mut data, &[(0, 0xAAAA_AAAA), (40, 0xAAAA_AAAA)], ByteOrder::Big);
        let result = Matcher::new().scan(&data, &sequence(&[0xAAAA_AAAA]), ByteOrder::Big);
        assert_eq!(result.offsets, vec![0]);
    }

    #[test]
    fn test_opposite_order_finds_nothing() {
        let values = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];
        let mut data = vec![0u8; 128];
        let placements: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (16 + i * 4, v))
            .collect();
        embed(&mut data, &placements, ByteOrder::Little);
        let seq = sequence(&values);

        let le = Matcher::new().scan(&data, &seq, ByteOrder::Little);
        assert_eq!(le.count(), values.len());
        assert!(le.consecutive);
        assert_eq!(Matcher::new().scan(&data, &seq, ByteOrder::Big).count(), 0);
    }

    #[test]
    fn test_count_bounded_and_idempotent() {
        let data: Vec<u8> = (0..2048u32).map(|i| (i.wrapping_mul(31) % 7) as u8).collect();
        let seq = sequence(&[0x0000_0000, 0x0102_0304, 0x0000_0000, 0x0605_0403]);
        let matcher = Matcher::new();
        for order in ByteOrder::ALL {
            let first = matcher.scan(&data, &seq, order);
            let second = matcher.scan(&data, &seq, order);
            assert!(first.count() <= seq.len());
            assert!(first.offsets.windows(2).all(|p| p[0] < p[1]));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_best_picks_matching_order() {
        let mut data = vec![0u8; 64];
        embed(
            &mut data,
            &[(8, CHAR_MAP_HEAD[0]), (12, CHAR_MAP_HEAD[1])],
            ByteOrder::Little,
        );
        let best = Matcher::new().best(&data, &sequence(&CHAR_MAP_HEAD));
        assert_eq!(best.byte_order, ByteOrder::Little);
        assert_eq!(best.count(), 2);
    }

    #[test]
    fn test_best_fragmented_tie_is_big_endian() {
        let mut data = vec![0u8; 2048];
        embed(
            &mut data,
            &[(0, CHAR_MAP_HEAD[0]), (600, CHAR_MAP_HEAD[1])],
            ByteOrder::Little,
        );
        embed(
            &mut data,
            &[(1200, CHAR_MAP_HEAD[0]), (1800, CHAR_MAP_HEAD[1])],
            ByteOrder::Big,
        );
        let best = Matcher::new().best(&data, &sequence(&CHAR_MAP_HEAD));
        assert_eq!(best.byte_order, ByteOrder::Big);
        assert_eq!(best.count(), 2);
        assert!(!best.consecutive);
    }

    #[test]
    fn test_observer_does_not_change_result() {
        let mut data = vec![0u8; PROGRESS_STRIDE * 2 + 16];
        embed(&mut data, &[(PROGRESS_STRIDE + 3, CHAR_MAP_HEAD[0])], ByteOrder::Big);
        let seq = sequence(&CHAR_MAP_HEAD);
        let stats = StatsObserver::new();

        let observed = Matcher::new().best_observed(&data, &seq, "Base64", "Char map", &stats);
        assert_eq!(observed, Matcher::new().best(&data, &seq));
        assert_eq!(stats.scans_finished(), 2);
        assert_eq!(stats.windows_total(), 2 * window_count(data.len()) as u64);
        assert!(stats.progress_events() >= 2);
    }
}
