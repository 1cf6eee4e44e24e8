//! 32-bit word extraction from raw bytes.
//!
//! Every offset of a buffer that has at least four bytes remaining is a
//! candidate word. Words overlap: offset `i` and offset `i + 1` share three
//! bytes. The window iteration is bounds-checked by construction, so no
//! offset past `len - 4` is ever read.

use serde::Serialize;
use std::fmt;

/// Width of a scanned word in bytes
pub const WORD_SIZE: usize = 4;

/// Byte order used to reinterpret four bytes as a `u32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ByteOrder {
    /// Least significant byte first
    #[serde(rename = "LE")]
    Little,
    /// Most significant byte first
    #[serde(rename = "BE")]
    Big,
}

impl ByteOrder {
    /// Both byte orders, little-endian first
    pub const ALL: [ByteOrder; 2] = [ByteOrder::Little, ByteOrder::Big];

    /// Short label used in reports
    pub fn label(self) -> &'static str {
        match self {
            ByteOrder::Little => "LE",
            ByteOrder::Big => "BE",
        }
    }

    /// Reinterpret a 4-byte window as a `u32`
    #[inline]
    pub fn read(self, bytes: [u8; WORD_SIZE]) -> u32 {
        match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Encode a `u32` the way it would be laid out on disk in this order
    #[inline]
    pub fn encode(self, value: u32) -> [u8; WORD_SIZE] {
        match self {
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of complete 4-byte windows in a buffer of `len` bytes
#[inline]
pub fn window_count(len: usize) -> usize {
    len.saturating_sub(WORD_SIZE - 1)
}

/// Iterate `(offset, word)` pairs over every complete window in `data`.
///
/// Yields nothing for buffers shorter than four bytes.
pub fn words(data: &[u8], order: ByteOrder) -> impl Iterator<Item = (usize, u32)> + '_ {
    data.windows(WORD_SIZE).enumerate().map(move |(offset, window)| {
        let bytes = [window[0], window[1], window[2], window[3]];
        (offset, order.read(bytes))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_both_orders() {
        let bytes = [0x44, 0x43, 0x42, 0x41];
        assert_eq!(ByteOrder::Little.read(bytes), 0x4142_4344);
        assert_eq!(ByteOrder::Big.read(bytes), 0x4443_4241);
    }

    #[test]
    fn test_encode_matches_read() {
        for order in ByteOrder::ALL {
            assert_eq!(order.read(order.encode(0x9E37_79B9)), 0x9E37_79B9);
        }
        assert_eq!(ByteOrder::Big.encode(0x0102_0304), [1, 2, 3, 4]);
    }

    #[test]
    fn test_window_count() {
        assert_eq!(window_count(0), 0);
        assert_eq!(window_count(3), 0);
        assert_eq!(window_count(4), 1);
        assert_eq!(window_count(64), 61);
    }

    #[test]
    fn test_words_overlap() {
        let data = [0x00, 0x01, 0x02, 0x03, 0x04];
        let collected: Vec<_> = words(&data, ByteOrder::Big).collect();
        assert_eq!(collected, vec![(0, 0x0001_0203), (1, 0x0102_0304)]);
    }

    #[test]
    fn test_words_short_buffer() {
        assert_eq!(words(&[1, 2, 3], ByteOrder::Little).count(), 0);
        assert_eq!(words(&[], ByteOrder::Little).count(), 0);
    }

    #[test]
    fn test_byte_order_labels() {
        assert_eq!(ByteOrder::Big.to_string(), "BE");
        assert_eq!(ByteOrder::Little.to_string(), "LE");
        // Reports serialize the same short labels the text output prints
        for order in ByteOrder::ALL {
            let json = serde_json::to_string(&order).unwrap();
            assert_eq!(json, format!("\"{}\"", order.label()));
        }
    }
}
