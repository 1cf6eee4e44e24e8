//! Algorithm name filtering.

/// Case-insensitive substring filter over algorithm names.
///
/// Built from a comma-separated list such as `cha,md,zip`. An algorithm is
/// selected when its name contains any of the substrings. A filter with no
/// substrings selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    needles: Vec<String>,
}

impl NameFilter {
    /// A filter that selects every algorithm
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter from individual substrings.
    ///
    /// Substrings are trimmed and lower-cased; blank ones are ignored.
    pub fn new<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles = needles
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { needles }
    }

    /// Parses a comma-separated filter list
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// The normalized substrings
    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    /// True if this filter selects everything
    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    /// True if `name` is selected
    pub fn matches(&self, name: &str) -> bool {
        if self.needles.is_empty() {
            return true;
        }
        let name = name.to_lowercase();
        self.needles.iter().any(|needle| name.contains(needle.as_str()))
    }
}
