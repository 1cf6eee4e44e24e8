//! Detection report types.
//!
//! Reports are plain data. Rendering them (text, JSON, colours, severity)
//! is left to the caller.

use crate::scanner::{ByteOrder, MatchResult};
use serde::Serialize;
use std::fmt;

/// Strength of the evidence an indicator provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Every constant found, close together: strong positive
    FullConsecutive,
    /// Every constant found but spread out: weak positive
    FullFragmented,
    /// Some constants found: inconclusive
    Partial,
    /// Nothing found: negative
    None,
}

impl Classification {
    /// Classifies a match of `count` out of `sequence_len` constants
    pub fn classify(count: usize, sequence_len: usize, consecutive: bool) -> Self {
        match count {
            0 => Classification::None,
            n if n >= sequence_len && consecutive => Classification::FullConsecutive,
            n if n >= sequence_len => Classification::FullFragmented,
            _ => Classification::Partial,
        }
    }

    /// True if every constant of the sequence was found
    pub fn is_full(self) -> bool {
        matches!(
            self,
            Classification::FullConsecutive | Classification::FullFragmented
        )
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Classification::FullConsecutive => "full",
            Classification::FullFragmented => "fragmented",
            Classification::Partial => "partial",
            Classification::None => "none",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome for a single indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorReport {
    /// Algorithm the indicator belongs to
    pub algorithm: String,
    /// Indicator name
    pub indicator: String,
    /// Byte order of the selected match
    pub byte_order: ByteOrder,
    /// Number of constants found
    pub count: usize,
    /// Number of constants in the indicator
    pub sequence_len: usize,
    /// Whether the found constants are close together
    pub consecutive: bool,
    /// Offsets of the found constants
    pub offsets: Vec<usize>,
    /// Evidence strength
    pub classification: Classification,
}

impl IndicatorReport {
    /// Builds a report from the selected match
    pub fn new(
        algorithm: impl Into<String>,
        indicator: impl Into<String>,
        sequence_len: usize,
        result: MatchResult,
    ) -> Self {
        let count = result.count();
        Self {
            algorithm: algorithm.into(),
            indicator: indicator.into(),
            byte_order: result.byte_order,
            count,
            sequence_len,
            consecutive: result.consecutive,
            offsets: result.offsets,
            classification: Classification::classify(count, sequence_len, result.consecutive),
        }
    }
}

/// All indicator outcomes for one algorithm, in registry order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmReport {
    /// Algorithm name
    pub name: String,
    /// Per-indicator outcomes
    pub indicators: Vec<IndicatorReport>,
}

/// Outcome of a detection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    /// Size of the scanned buffer in bytes
    pub buffer_len: usize,
    /// Selected algorithms, in registry order
    pub algorithms: Vec<AlgorithmReport>,
}

impl DetectionReport {
    /// Every indicator report, flattened
    pub fn indicators(&self) -> impl Iterator<Item = &IndicatorReport> {
        self.algorithms.iter().flat_map(|a| a.indicators.iter())
    }

    /// Number of indicators with the given classification
    pub fn count(&self, classification: Classification) -> usize {
        self.indicators()
            .filter(|r| r.classification == classification)
            .count()
    }

    /// Indicators that were found completely and consecutively
    pub fn strong_matches(&self) -> impl Iterator<Item = &IndicatorReport> {
        self.indicators()
            .filter(|r| r.classification == Classification::FullConsecutive)
    }
}
