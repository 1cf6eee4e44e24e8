//! Progress observation hooks.
//!
//! This module provides the [`ScanObserver`] trait for watching a detection
//! run as it happens, e.g. to drive progress bars. Observers only see
//! events; they cannot alter what is matched or reported.

use crate::detect::IndicatorReport;
use crate::scanner::{ByteOrder, MatchResult};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a single matcher run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanContext<'a> {
    /// Algorithm the indicator belongs to (empty for ad-hoc scans)
    pub algorithm: &'a str,
    /// Indicator being searched for (empty for ad-hoc scans)
    pub indicator: &'a str,
    /// Byte order of this run
    pub byte_order: ByteOrder,
}

impl ScanContext<'static> {
    /// Context for a scan that is not tied to a registry entry
    pub fn anonymous(byte_order: ByteOrder) -> Self {
        Self {
            algorithm: "",
            indicator: "",
            byte_order,
        }
    }
}

/// Trait for observing detection progress.
///
/// All methods default to no-ops. Implementations must be `Send + Sync`
/// since indicators may be scanned on several worker threads at once.
///
/// # Example
///
/// ```
/// use ciphersniff_core::{IndicatorReport, ScanObserver};
///
/// struct Printer;
///
/// impl ScanObserver for Printer {
///     fn indicator_finished(&self, report: &IndicatorReport) {
///         println!("{}: {}/{}", report.indicator, report.count, report.sequence_len);
///     }
/// }
/// ```
pub trait ScanObserver: Send + Sync {
    /// A matcher run over `windows` offsets is starting
    fn scan_started(&self, context: &ScanContext<'_>, windows: usize) {
        let _ = (context, windows);
    }

    /// The matcher reached `position`; called every
    /// [`PROGRESS_STRIDE`](crate::scanner::PROGRESS_STRIDE) offsets
    fn scan_advanced(&self, context: &ScanContext<'_>, position: usize) {
        let _ = (context, position);
    }

    /// A matcher run completed
    fn scan_finished(&self, context: &ScanContext<'_>, result: &MatchResult) {
        let _ = (context, result);
    }

    /// Both byte orders of an indicator were scanned and classified
    fn indicator_finished(&self, report: &IndicatorReport) {
        let _ = report;
    }
}

/// An observer that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ScanObserver for NullObserver {}

/// An observer that counts events
#[derive(Debug, Default)]
pub struct StatsObserver {
    scans_started: AtomicU64,
    scans_finished: AtomicU64,
    windows_total: AtomicU64,
    progress_events: AtomicU64,
    indicators_finished: AtomicU64,
}

impl StatsObserver {
    /// Creates a new observer with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matcher runs started
    pub fn scans_started(&self) -> u64 {
        self.scans_started.load(Ordering::Relaxed)
    }

    /// Number of matcher runs completed
    pub fn scans_finished(&self) -> u64 {
        self.scans_finished.load(Ordering::Relaxed)
    }

    /// Sum of the window counts announced by all runs
    pub fn windows_total(&self) -> u64 {
        self.windows_total.load(Ordering::Relaxed)
    }

    /// Number of intermediate progress notifications
    pub fn progress_events(&self) -> u64 {
        self.progress_events.load(Ordering::Relaxed)
    }

    /// Number of indicators fully processed
    pub fn indicators_finished(&self) -> u64 {
        self.indicators_finished.load(Ordering::Relaxed)
    }
}

impl ScanObserver for StatsObserver {
    fn scan_started(&self, _context: &ScanContext<'_>, windows: usize) {
        self.scans_started.fetch_add(1, Ordering::Relaxed);
        self.windows_total.fetch_add(windows as u64, Ordering::Relaxed);
    }

    fn scan_advanced(&self, _context: &ScanContext<'_>, _position: usize) {
        self.progress_events.fetch_add(1, Ordering::Relaxed);
    }

    fn scan_finished(&self, _context: &ScanContext<'_>, _result: &MatchResult) {
        self.scans_finished.fetch_add(1, Ordering::Relaxed);
    }

    fn indicator_finished(&self, _report: &IndicatorReport) {
        self.indicators_finished.fetch_add(1, Ordering::Relaxed);
    }
}
