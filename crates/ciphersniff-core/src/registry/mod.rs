//! Registry of algorithm fingerprints.
//!
//! A [`Registry`] groups [`Indicator`]s (named constant sequences) under
//! [`Algorithm`] names. It is immutable once built and preserves insertion
//! order, which is also the order of the detection report.
//!
//! The built-in tables are available through [`Registry::builtin`]. Extra
//! fingerprints can be loaded from JSON:
//!
//! ```json
//! [
//!   {
//!     "name": "RC5",
//!     "indicators": [
//!       { "name": "Magic", "sequence": [3084996963, 2654435769] }
//!     ]
//!   }
//! ]
//! ```

#[rustfmt::skip]
mod builtin;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::ops::Deref;
use std::path::Path;

/// An ordered, non-empty list of 32-bit constants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantSequence(Cow<'static, [u32]>);

impl ConstantSequence {
    /// Creates a sequence, returning `None` if `values` is empty
    pub fn new(values: Vec<u32>) -> Option<Self> {
        (!values.is_empty()).then(|| Self(Cow::Owned(values)))
    }

    /// Creates a sequence borrowing static data, returning `None` if empty
    pub const fn from_static(values: &'static [u32]) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self(Cow::Borrowed(values)))
        }
    }

    /// The constants as a slice
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Deref for ConstantSequence {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

/// A named constant sequence characteristic of an algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    name: Cow<'static, str>,
    sequence: ConstantSequence,
}

impl Indicator {
    /// Creates an indicator, rejecting an empty sequence
    pub fn new(name: impl Into<Cow<'static, str>>, values: Vec<u32>) -> Result<Self> {
        let name = name.into();
        let sequence =
            ConstantSequence::new(values).ok_or_else(|| Error::empty_sequence(&*name))?;
        Ok(Self { name, sequence })
    }

    /// Indicator name, e.g. `S-box`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The constants to search for
    pub fn sequence(&self) -> &ConstantSequence {
        &self.sequence
    }
}

/// An algorithm and the indicators that fingerprint it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Algorithm {
    name: Cow<'static, str>,
    indicators: Vec<Indicator>,
}

impl Algorithm {
    /// Creates an algorithm entry.
    ///
    /// Fails if `indicators` is empty or contains two indicators with the
    /// same name.
    pub fn new(name: impl Into<Cow<'static, str>>, indicators: Vec<Indicator>) -> Result<Self> {
        let name = name.into();
        if indicators.is_empty() {
            return Err(Error::empty_algorithm(&*name));
        }

        let mut seen = HashSet::new();
        for indicator in &indicators {
            if !seen.insert(indicator.name()) {
                return Err(Error::duplicate_indicator(&*name, indicator.name()));
            }
        }

        Ok(Self { name, indicators })
    }

    /// Algorithm name, e.g. `SHA-224 / SHA-256`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Indicators in definition order
    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Individual algorithm names covered by this entry.
    ///
    /// Entries such as `MD4 / MD5 / SHA-1` cover several algorithms.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.name.split('/').map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Ordered, read-only collection of algorithms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    algorithms: Vec<Algorithm>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Creates a registry, rejecting duplicate algorithm names
    pub fn new(algorithms: Vec<Algorithm>) -> Result<Self> {
        let mut seen = HashSet::new();
        for algorithm in &algorithms {
            if !seen.insert(algorithm.name()) {
                return Err(Error::duplicate_algorithm(algorithm.name()));
            }
        }
        Ok(Self { algorithms })
    }

    /// The built-in fingerprints
    pub fn builtin() -> Self {
        let algorithms = builtin::BUILTIN
            .iter()
            .map(|&(name, indicators)| Algorithm {
                name: Cow::Borrowed(name),
                indicators: indicators
                    .iter()
                    .filter_map(|&(name, values)| {
                        // Table emptiness is rejected at compile time
                        ConstantSequence::from_static(values).map(|sequence| Indicator {
                            name: Cow::Borrowed(name),
                            sequence,
                        })
                    })
                    .collect(),
            })
            .collect();

        Self { algorithms }
    }

    /// Parses a registry from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawAlgorithm> = serde_json::from_str(json)?;
        let algorithms = raw
            .into_iter()
            .map(RawAlgorithm::into_algorithm)
            .collect::<Result<Vec<_>>>()?;
        Self::new(algorithms)
    }

    /// Reads and parses a JSON registry file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
        Self::from_json(&json)
    }

    /// Appends the algorithms of `other` after this registry's own
    pub fn merge(self, other: Registry) -> Result<Self> {
        let mut algorithms = self.algorithms;
        algorithms.extend(other.algorithms);
        Self::new(algorithms)
    }

    /// Algorithms in definition order
    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Looks up an algorithm by its exact name
    pub fn get(&self, name: &str) -> Option<&Algorithm> {
        self.algorithms.iter().find(|a| a.name() == name)
    }

    /// Number of algorithm entries
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// True if the registry has no algorithms
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Total number of indicators across all algorithms
    pub fn indicator_count(&self) -> usize {
        self.algorithms.iter().map(|a| a.indicators.len()).sum()
    }

    /// Every individual algorithm name, splitting combined entries
    pub fn supported_names(&self) -> Vec<&str> {
        self.algorithms.iter().flat_map(|a| a.aliases()).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAlgorithm {
    name: String,
    indicators: Vec<RawIndicator>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawIndicator {
    name: String,
    sequence: Vec<u32>,
}

impl RawAlgorithm {
    fn into_algorithm(self) -> Result<Algorithm> {
        let indicators = self
            .indicators
            .into_iter()
            .map(|raw| Indicator::new(raw.name, raw.sequence))
            .collect::<Result<Vec<_>>>()?;
        Algorithm::new(self.name, indicators)
    }
}
