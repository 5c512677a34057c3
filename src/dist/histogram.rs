//! Frequency histogram over observed values
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// A map from value to the number of times it was observed.
///
/// The leaf representation: built directly from a sequence of raw
/// observations, one increment per element. Bins are kept sorted ascending
/// by value, and a value with count zero is indistinguishable from one that
/// was never observed.
///
/// # Example
///
/// ```rust
/// use empirical::dist::Histogram;
///
/// let hist = Histogram::from_seq(&[1.0, 2.0, 2.0, 3.0, 5.0]);
///
/// assert_eq!(hist.freq(2.0), 2);
/// assert_eq!(hist.freq(4.0), 0);
/// assert_eq!(hist.total(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Histogram {
    name: Option<String>,
    // Sorted ascending by value. NaN sorts via total_cmp.
    bins: Vec<(f64, u64)>,
}

impl Histogram {
    /// Create an empty histogram
    #[inline]
    pub fn new() -> Self {
        Histogram {
            name: None,
            bins: Vec::new(),
        }
    }

    /// Build a histogram from a sequence of observations
    pub fn from_seq(xs: &[f64]) -> Self {
        let mut hist = Histogram::new();
        for &x in xs {
            hist.incr(x, 1);
        }
        hist
    }

    /// Attach a label used by plotting collaborators as a legend entry
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    #[inline]
    fn index_of(&self, x: f64) -> Result<usize, usize> {
        self.bins.binary_search_by(|&(v, _)| v.total_cmp(&x))
    }

    /// Number of times `x` was observed. Zero if absent; never fails.
    #[inline]
    pub fn freq(&self, x: f64) -> u64 {
        self.index_of(x).map_or(0, |ix| self.bins[ix].1)
    }

    /// Add `count` observations of `x`, creating the bin if absent
    pub fn incr(&mut self, x: f64, count: u64) {
        match self.index_of(x) {
            Ok(ix) => self.bins[ix].1 += count,
            Err(ix) => self.bins.insert(ix, (x, count)),
        }
    }

    /// Distinct observed values, ascending
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bins.iter().map(|&(v, _)| v)
    }

    /// The `(value, count)` bins, sorted ascending by value
    #[inline]
    pub fn items(&self) -> &[(f64, u64)] {
        &self.bins
    }

    /// Total number of observations
    #[inline]
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&(_, ct)| ct).sum()
    }

    /// Number of distinct values
    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

impl FromIterator<f64> for Histogram {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut hist = Histogram::new();
        for x in iter {
            hist.incr(x, 1);
        }
        hist
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name.as_deref().unwrap_or("Histogram"))?;
        for &(x, ct) in &self.bins {
            writeln!(f, "{}\t{}", x, ct)?;
        }
        Ok(())
    }
}
