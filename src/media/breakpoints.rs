//! Breakpoint thresholds and active-set derivation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Named minimum-width thresholds, kept sorted by ascending threshold.
///
/// The default set is `sm 640`, `md 768`, `lg 1024`, `xl 1280`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct Breakpoints {
    entries: Vec<(String, f64)>,
}

impl Breakpoints {
    /// Creates a breakpoint set from `(name, min_width)` pairs.
    ///
    /// Pairs may be given in any order; they are sorted by threshold. Ties
    /// keep their given order.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidBreakpoint`] if a threshold is negative
    /// or not finite, and [`OptionsError::DuplicateBreakpoint`] if a name
    /// appears twice.
    pub fn new<I, S>(thresholds: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        for (name, threshold) in thresholds {
            let name = name.into();
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(OptionsError::InvalidBreakpoint { name, threshold });
            }
            if entries.iter().any(|(n, _)| *n == name) {
                return Err(OptionsError::DuplicateBreakpoint { name });
            }
            entries.push((name, threshold));
        }
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(Self { entries })
    }

    /// Breakpoint names, smallest threshold first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), *t))
    }

    pub fn threshold(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| *t)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the largest breakpoint whose threshold is at most `width`.
    pub(crate) fn largest_index(&self, width: f64) -> Option<usize> {
        self.entries.iter().rposition(|(_, t)| *t <= width)
    }

    /// Shorthand for [`active_breakpoints`].
    pub fn active(&self, width: f64) -> ActiveBreakpoints {
        active_breakpoints(self, width)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            entries: vec![
                ("sm".to_string(), 640.0),
                ("md".to_string(), 768.0),
                ("lg".to_string(), 1024.0),
                ("xl".to_string(), 1280.0),
            ],
        }
    }
}

impl TryFrom<BTreeMap<String, f64>> for Breakpoints {
    type Error = OptionsError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Breakpoints::new(map)
    }
}

impl From<Breakpoints> for BTreeMap<String, f64> {
    fn from(breakpoints: Breakpoints) -> Self {
        breakpoints.entries.into_iter().collect()
    }
}

/// Active breakpoints in mobile-first order (smallest to largest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveBreakpoints(Vec<String>);

impl ActiveBreakpoints {
    /// The largest active breakpoint, if any.
    pub fn largest(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Derives the active breakpoints for a viewport width.
///
/// Thresholds are scanned from largest to smallest; the first one at or
/// below `width` is the largest active breakpoint, and every breakpoint up
/// to it is active. The result is ordered smallest first and is empty when
/// `width` is below every threshold.
///
/// # Example
///
/// ```rust
/// use stylekit::{active_breakpoints, Breakpoints};
///
/// let bps = Breakpoints::default();
/// assert_eq!(active_breakpoints(&bps, 900.0).names(), vec!["sm", "md"]);
/// assert!(active_breakpoints(&bps, 320.0).is_empty());
/// ```
pub fn active_breakpoints(breakpoints: &Breakpoints, width: f64) -> ActiveBreakpoints {
    match breakpoints.largest_index(width) {
        Some(i) => ActiveBreakpoints(
            breakpoints.entries[..=i]
                .iter()
                .map(|(n, _)| n.clone())
                .collect(),
        ),
        None => ActiveBreakpoints::default(),
    }
}
