//! # ciphersniff-core
//!
//! A library for fingerprinting cryptographic algorithms inside compiled
//! binaries by the 32-bit constants they carry.
//!
//! Crypto implementations embed characteristic tables: S-boxes, round
//! constants, initialization vectors, magic deltas. This crate searches a
//! byte buffer for those tables in either byte order, without disassembling
//! anything. Coincidental matches are possible; the report says how strong
//! each piece of evidence is rather than whether an algorithm is present.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`scanner`]: In-order constant matching and byte order selection
//! - [`registry`]: Algorithm fingerprints, built-in and user-supplied
//! - [`detect`]: Registry-wide detection and result classification
//! - [`observer`]: Progress hooks
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use ciphersniff_core::{Detector, NameFilter, Registry};
//! use std::fs;
//!
//! let data = fs::read("./target/release/my_app")?;
//!
//! let registry = Registry::builtin();
//! let report = Detector::new(&registry).detect(&data, &NameFilter::parse("aes,sha"));
//!
//! for hit in report.strong_matches() {
//!     println!("{} / {} <{}>", hit.algorithm, hit.indicator, hit.byte_order);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Extensibility
//!
//! - [`ScanObserver`]: Watch scans as they run, e.g. for progress bars
//! - [`Registry::from_json`]: Load additional fingerprints
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod detect;
pub mod error;
pub mod observer;
pub mod registry;
pub mod scanner;

// Re-export primary types for convenience
pub use detect::{
    detect_file, detect_file_with, AlgorithmReport, Classification, DetectionReport, Detector,
    DetectorConfig, IndicatorReport, NameFilter,
};
pub use error::{Error, Result};
pub use observer::{NullObserver, ScanContext, ScanObserver, StatsObserver};
pub use registry::{Algorithm, ConstantSequence, Indicator, Registry};
pub use scanner::{ByteOrder, MatchResult, Matcher, MatcherConfig};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
