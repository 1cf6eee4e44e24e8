//! Registry-wide detection.
//!
//! The [`Detector`] runs the byte-order selecting matcher for every indicator
//! of every algorithm selected by a [`NameFilter`] and classifies each
//! outcome independently. Grouping by algorithm is for presentation only; no
//! score is aggregated across indicators.
//!
//! ## Example
//!
//! ```
//! use ciphersniff_core::{Classification, Detector, NameFilter, Registry};
//!
//! let registry = Registry::builtin();
//! let detector = Detector::new(&registry);
//!
//! // The Salsa20 "expand 32-byte k" sigma, as it sits in .rodata
//! let mut data = vec![0u8; 128];
//! data[32..48].copy_from_slice(b"expand 32-byte k");
//!
//! let report = detector.detect(&data, &NameFilter::parse("salsa"));
//! let init = &report.algorithms[0].indicators[0];
//! assert_eq!(init.classification, Classification::FullConsecutive);
//! ```

mod filter;
mod report;

use crate::error::{Error, Result};
use crate::observer::{NullObserver, ScanObserver};
use crate::registry::{Algorithm, Indicator, Registry};
use crate::scanner::{Matcher, MatcherConfig};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info};

pub use filter::NameFilter;
pub use report::{AlgorithmReport, Classification, DetectionReport, IndicatorReport};

/// Configuration for the detector
#[derive(Debug, Clone, Default)]
pub struct DetectorConfig {
    /// Matcher settings applied to every indicator
    pub matcher: MatcherConfig,
    /// Scan indicators on the current rayon thread pool
    pub parallel: bool,
}

impl DetectorConfig {
    /// Creates a new detector config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the matcher configuration
    pub fn matcher(mut self, matcher: MatcherConfig) -> Self {
        self.matcher = matcher;
        self
    }

    /// Enables or disables parallel scanning
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Runs every selected indicator of a registry against a buffer
#[derive(Debug, Clone)]
pub struct Detector<'r> {
    registry: &'r Registry,
    matcher: Matcher,
    parallel: bool,
}

impl<'r> Detector<'r> {
    /// Creates a detector with default configuration
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_config(registry, DetectorConfig::default())
    }

    /// Creates a detector with custom configuration
    pub fn with_config(registry: &'r Registry, config: DetectorConfig) -> Self {
        Self {
            registry,
            matcher: Matcher::with_config(config.matcher),
            parallel: config.parallel,
        }
    }

    /// The registry this detector draws indicators from
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Algorithms selected by `filter`, in registry order
    pub fn selected<'f>(&self, filter: &'f NameFilter) -> impl Iterator<Item = &'r Algorithm> + 'f
    where
        'r: 'f,
    {
        self.registry
            .algorithms()
            .iter()
            .filter(move |algorithm| filter.matches(algorithm.name()))
    }

    /// Scan `data` for every indicator selected by `filter`
    pub fn detect(&self, data: &[u8], filter: &NameFilter) -> DetectionReport {
        self.detect_observed(data, filter, &NullObserver)
    }

    /// Like [`Detector::detect`], reporting progress to `observer`
    pub fn detect_observed(
        &self,
        data: &[u8],
        filter: &NameFilter,
        observer: &dyn ScanObserver,
    ) -> DetectionReport {
        let work: Vec<(&Algorithm, &Indicator)> = self
            .selected(filter)
            .flat_map(|algorithm| {
                algorithm
                    .indicators()
                    .iter()
                    .map(move |indicator| (algorithm, indicator))
            })
            .collect();

        info!(
            "Scanning {} bytes for {} indicator(s){}",
            data.len(),
            work.len(),
            if self.parallel { " in parallel" } else { "" }
        );

        let results: Vec<IndicatorReport> = if self.parallel {
            work.par_iter()
                .map(|&(algorithm, indicator)| {
                    self.run_indicator(data, algorithm, indicator, observer)
                })
                .collect()
        } else {
            work.iter()
                .map(|&(algorithm, indicator)| {
                    self.run_indicator(data, algorithm, indicator, observer)
                })
                .collect()
        };

        let mut algorithms: Vec<AlgorithmReport> = Vec::new();
        for report in results {
            match algorithms.last_mut() {
                Some(group) if group.name == report.algorithm => group.indicators.push(report),
                _ => algorithms.push(AlgorithmReport {
                    name: report.algorithm.clone(),
                    indicators: vec![report],
                }),
            }
        }

        DetectionReport {
            buffer_len: data.len(),
            algorithms,
        }
    }

    fn run_indicator(
        &self,
        data: &[u8],
        algorithm: &Algorithm,
        indicator: &Indicator,
        observer: &dyn ScanObserver,
    ) -> IndicatorReport {
        let sequence = indicator.sequence();
        let result = self.matcher.best_observed(
            data,
            sequence,
            algorithm.name(),
            indicator.name(),
            observer,
        );
        let report =
            IndicatorReport::new(algorithm.name(), indicator.name(), sequence.len(), result);

        debug!(
            "[{}] {} <{}>: {}/{} ({})",
            report.algorithm,
            report.indicator,
            report.byte_order,
            report.count,
            report.sequence_len,
            report.classification
        );

        observer.indicator_finished(&report);
        report
    }
}

/// Read a file and scan it against the built-in registry
pub fn detect_file(path: impl AsRef<Path>, filter: &NameFilter) -> Result<DetectionReport> {
    detect_file_with(path, &Registry::builtin(), filter, DetectorConfig::default())
}

/// Read a file and scan it with a custom registry and configuration
pub fn detect_file_with(
    path: impl AsRef<Path>,
    registry: &Registry,
    filter: &NameFilter,
    config: DetectorConfig,
) -> Result<DetectionReport> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;
    Ok(Detector::with_config(registry, config).detect(&data, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::StatsObserver;
    use crate::scanner::ByteOrder;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn embed(data: &mut [u8], offset: usize, values: &[u32], order: ByteOrder) {
        for (i, &value) in values.iter().enumerate() {
            let at = offset + i * 4;
            data[at..at + 4].copy_from_slice(&order.encode(value));
        }
    }

    fn sample_registry() -> Registry {
        Registry::from_json(
            r#"[
                {"name": "Alpha / Beta", "indicators": [
                    {"name": "Table", "sequence": [305419896, 591751049, 878082192]},
                    {"name": "Single", "sequence": [2654435769]}
                ]},
                {"name": "Gamma", "indicators": [
                    {"name": "Init", "sequence": [1732584193, 4023233417]}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_classifies_each_indicator() {
        let registry = sample_registry();
        let mut data = vec![0u8; 4096];
        // Table: full and consecutive, big-endian
        embed(&mut data, 100, &[0x1234_5678, 0x2345_6789, 0x3456_7890], ByteOrder::Big);
        // Gamma Init: both constants, far apart, little-endian
        embed(&mut data, 1000, &[0x6745_2301], ByteOrder::Little);
        embed(&mut data, 3000, &[0xEFCD_AB89], ByteOrder::Little);

        let report = Detector::new(&registry).detect(&data, &NameFilter::all());
        assert_eq!(report.buffer_len, 4096);

        let names: Vec<_> = report.algorithms.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha / Beta", "Gamma"]);

        let table = &report.algorithms[0].indicators[0];
        assert_eq!(table.classification, Classification::FullConsecutive);
        assert_eq!(table.byte_order, ByteOrder::Big);
        assert_eq!(table.offsets, vec![100, 104, 108]);

        let single = &report.algorithms[0].indicators[1];
        assert_eq!(single.classification, Classification::None);
        assert_eq!(single.count, 0);

        let init = &report.algorithms[1].indicators[0];
        assert_eq!(init.classification, Classification::FullFragmented);
        assert_eq!(init.byte_order, ByteOrder::Little);
    }

    #[test]
    fn test_partial_match() {
        let registry = sample_registry();
        let mut data = vec![0u8; 256];
        embed(&mut data, 16, &[0x1234_5678, 0x2345_6789], ByteOrder::Little);

        let report = Detector::new(&registry).detect(&data, &NameFilter::parse("beta"));
        assert_eq!(report.algorithms.len(), 1);
        let table = &report.algorithms[0].indicators[0];
        assert_eq!(table.classification, Classification::Partial);
        assert_eq!((table.count, table.sequence_len), (2, 3));
    }

    #[test]
    fn test_filter_excludes_algorithms() {
        let registry = sample_registry();
        let report = Detector::new(&registry).detect(&[0u8; 16], &NameFilter::parse("nothing"));
        assert!(report.algorithms.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let registry = Registry::builtin();
        let mut data = vec![0u8; 8192];
        data[64..80].copy_from_slice(b"expand 32-byte k");
        embed(&mut data, 512, &[0x6A09_E667, 0xBB67_AE85, 0x3C6E_F372, 0xA54F_F53A], ByteOrder::Little);
        embed(&mut data, 528, &[0x510E_527F, 0x9B05_688C, 0x1F83_D9AB, 0x5BE0_CD19], ByteOrder::Little);

        let sequential = Detector::new(&registry).detect(&data, &NameFilter::all());
        let parallel = Detector::with_config(&registry, DetectorConfig::new().parallel(true))
            .detect(&data, &NameFilter::all());
        assert_eq!(sequential, parallel);

        let sha256_init = sequential
            .indicators()
            .find(|r| r.indicator == "[SHA-256] Init")
            .unwrap();
        assert_eq!(sha256_init.classification, Classification::FullConsecutive);
        assert_eq!(sha256_init.byte_order, ByteOrder::Little);
        assert_eq!(sequential.algorithms.len(), registry.len());
    }

    #[test]
    fn test_observer_sees_every_indicator() {
        let registry = sample_registry();
        let stats = StatsObserver::new();
        Detector::new(&registry).detect_observed(&[0u8; 64], &NameFilter::all(), &stats);
        assert_eq!(stats.indicators_finished(), 3);
        assert_eq!(stats.scans_finished(), 6);
    }

    #[test]
    fn test_gap_config_reaches_matcher() {
        let registry = sample_registry();
        let mut data = vec![0u8; 4096];
        embed(&mut data, 1000, &[0x6745_2301], ByteOrder::Little);
        embed(&mut data, 3000, &[0xEFCD_AB89], ByteOrder::Little);

        let config = DetectorConfig::new().matcher(MatcherConfig::new().max_gap(4096));
        let report = Detector::with_config(&registry, config).detect(&data, &NameFilter::parse("gamma"));
        assert_eq!(
            report.algorithms[0].indicators[0].classification,
            Classification::FullConsecutive
        );
    }

    #[test]
    fn test_detect_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut data = vec![0u8; 64];
        embed(&mut data, 8, &[0x9E37_79B9], ByteOrder::Little);
        file.write_all(&data).unwrap();

        let report = detect_file(file.path(), &NameFilter::parse("tea")).unwrap();
        let delta = &report.algorithms[0].indicators[0];
        assert_eq!(delta.indicator, "Delta");
        assert_eq!(delta.classification, Classification::FullConsecutive);

        let missing = detect_file("/nonexistent/binary", &NameFilter::all());
        assert!(matches!(missing, Err(Error::FileRead { .. })));
    }
}
