//! Probability mass function over a finite support
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::dist::{Cdf, Histogram};
use crate::misc::linspace;
use std::fmt;

/// A map from value to probability mass.
///
/// A `Pmf` moves between two phases: *accumulation*, where masses are
/// assigned with [`set`](Pmf::set), [`incr`](Pmf::incr), and
/// [`mult`](Pmf::mult) and need not sum to one, and *query*, entered by
/// calling [`normalize`](Pmf::normalize). Nothing auto-normalizes: the
/// statistics ([`mean`](Pmf::mean), [`variance`](Pmf::variance)) treat the
/// stored masses as probabilities, so the caller must normalize first.
///
/// This phase split is what makes the `Pmf` usable as a suite of
/// hypotheses: each Bayesian update round multiplies every hypothesis by a
/// likelihood (leaving the masses unnormalized) and then renormalizes once.
/// See the [`suite`](crate::suite) module.
///
/// Entries are kept sorted ascending by value; a missing value behaves as
/// zero mass.
///
/// # Example
///
/// ```rust
/// use empirical::dist::Pmf;
///
/// let pmf = Pmf::from_seq(&[1.0, 2.0, 2.0, 3.0, 5.0]);
///
/// assert::close(pmf.prob(2.0), 0.4, 1E-12);
/// assert::close(pmf.prob(4.0), 0.0, 1E-12);
/// assert::close(pmf.mean(), 2.6, 1E-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Pmf {
    name: Option<String>,
    // Sorted ascending by value. NaN sorts via total_cmp.
    entries: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum PmfError {
    /// The total mass is exactly zero, so there is nothing to normalize.
    /// During a Bayesian update this means every hypothesis had zero
    /// likelihood under the evidence.
    ZeroTotalMass,
}

impl Pmf {
    /// Create an empty PMF
    #[inline]
    pub fn new() -> Self {
        Pmf {
            name: None,
            entries: Vec::new(),
        }
    }

    /// Build a normalized PMF from a sequence of observations
    ///
    /// Equivalent to building a [`Histogram`] from the sequence and
    /// normalizing the counts. An empty sequence yields an empty PMF.
    pub fn from_seq(xs: &[f64]) -> Self {
        Pmf::from_hist(&Histogram::from_seq(xs))
    }

    /// Build a normalized PMF from a histogram (mass = count / total)
    pub fn from_hist(hist: &Histogram) -> Self {
        let total = hist.total();
        if total == 0 {
            return Pmf::new();
        }
        let n = total as f64;
        let entries = hist
            .items()
            .iter()
            .map(|&(x, ct)| (x, ct as f64 / n))
            .collect();
        Pmf {
            name: hist.name().map(String::from),
            entries,
        }
    }

    /// Build a PMF from explicit `(value, mass)` pairs, then normalize
    ///
    /// Later duplicates of a value overwrite earlier ones, as with
    /// [`set`](Pmf::set).
    ///
    /// # Errors
    /// `PmfError::ZeroTotalMass` if the masses sum to zero (in particular,
    /// if `items` is empty).
    pub fn from_items(items: &[(f64, f64)]) -> Result<Self, PmfError> {
        let mut pmf = Pmf::new();
        for &(x, p) in items {
            pmf.set(x, p);
        }
        pmf.normalize()?;
        Ok(pmf)
    }

    /// Recover a PMF from a CDF by successive differences
    ///
    /// The mass at each value is its cumulative probability minus that of
    /// its predecessor in sorted order; the first value keeps its
    /// cumulative probability as its mass.
    pub fn from_cdf(cdf: &Cdf) -> Self {
        let mut prev = 0.0;
        let entries = cdf
            .items()
            .map(|(x, p)| {
                let mass = p - prev;
                prev = p;
                (x, mass)
            })
            .collect();
        Pmf {
            name: cdf.name().map(String::from),
            entries,
        }
    }

    /// A uniform suite of hypotheses: equal mass on `steps` evenly spaced
    /// values covering `[low, high]`
    ///
    /// ```rust
    /// use empirical::dist::Pmf;
    ///
    /// let suite = Pmf::uniform(0.0, 1.0, 11);
    /// assert_eq!(suite.len(), 11);
    /// assert::close(suite.prob(0.5), 1.0 / 11.0, 1E-12);
    /// assert::close(suite.total(), 1.0, 1E-12);
    /// ```
    pub fn uniform(low: f64, high: f64, steps: usize) -> Self {
        let mass = 1.0 / steps as f64;
        let entries = linspace(low, high, steps)
            .into_iter()
            .map(|x| (x, mass))
            .collect();
        Pmf {
            name: None,
            entries,
        }
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
        self.entries.binary_search_by(|&(v, _)| v.total_cmp(&x))
    }

    /// Overwrite the mass at `x`, creating the entry if absent
    pub fn set(&mut self, x: f64, mass: f64) {
        match self.index_of(x) {
            Ok(ix) => self.entries[ix].1 = mass,
            Err(ix) => self.entries.insert(ix, (x, mass)),
        }
    }

    /// Add `delta` to the mass at `x` (absent entries start at zero)
    pub fn incr(&mut self, x: f64, delta: f64) {
        match self.index_of(x) {
            Ok(ix) => self.entries[ix].1 += delta,
            Err(ix) => self.entries.insert(ix, (x, delta)),
        }
    }

    /// Multiply the mass at `x` by `factor`
    ///
    /// The Bayesian update primitive: `factor` is the likelihood of the
    /// evidence under hypothesis `x`. An absent value has zero mass, and
    /// zero times anything is zero, so absent values stay absent.
    pub fn mult(&mut self, x: f64, factor: f64) {
        if let Ok(ix) = self.index_of(x) {
            self.entries[ix].1 *= factor;
        }
    }

    /// Scale all masses so they sum to one
    ///
    /// Returns the total mass before scaling; during a Bayesian update this
    /// is the normalizing constant of the posterior.
    ///
    /// # Errors
    /// `PmfError::ZeroTotalMass` if the total is exactly zero.
    pub fn normalize(&mut self) -> Result<f64, PmfError> {
        self.normalize_to(1.0)
    }

    /// Scale all masses so they sum to `fraction`
    pub fn normalize_to(&mut self, fraction: f64) -> Result<f64, PmfError> {
        let total = self.total();
        if total == 0.0 {
            return Err(PmfError::ZeroTotalMass);
        }
        let factor = fraction / total;
        for (_, mass) in &mut self.entries {
            *mass *= factor;
        }
        Ok(total)
    }

    /// Sum of all stored masses (1.0 once normalized)
    #[inline]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, p)| p).sum()
    }

    /// Mass at `x`. Zero if absent; never fails.
    #[inline]
    pub fn prob(&self, x: f64) -> f64 {
        self.prob_or(x, 0.0)
    }

    /// Mass at `x`, or `default` if absent
    #[inline]
    pub fn prob_or(&self, x: f64, default: f64) -> f64 {
        self.index_of(x).map_or(default, |ix| self.entries[ix].1)
    }

    /// Supported values, ascending
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(x, _)| x)
    }

    /// The `(value, mass)` entries, sorted ascending by value
    #[inline]
    pub fn items(&self) -> &[(f64, f64)] {
        &self.entries
    }

    /// Number of supported values
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ x·p(x). Assumes the PMF is normalized.
    pub fn mean(&self) -> f64 {
        self.entries.iter().map(|&(x, p)| x * p).sum()
    }

    /// Σ p(x)·(x − mean)². Assumes the PMF is normalized.
    pub fn variance(&self) -> f64 {
        self.variance_about(self.mean())
    }

    /// Second moment about `mu`
    pub fn variance_about(&self, mu: f64) -> f64 {
        self.entries
            .iter()
            .map(|&(x, p)| p * (x - mu) * (x - mu))
            .sum()
    }

    /// Parallel `(values, probabilities)` vectors sorted by value,
    /// suitable for a line or bar plot
    pub fn render(&self) -> (Vec<f64>, Vec<f64>) {
        self.entries.iter().copied().unzip()
    }
}

impl fmt::Display for Pmf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name.as_deref().unwrap_or("Pmf"))?;
        for &(x, p) in &self.entries {
            writeln!(f, "{}\t{}", x, p)?;
        }
        Ok(())
    }
}

impl fmt::Display for PmfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTotalMass => {
                write!(f, "total probability mass is zero; cannot normalize")
            }
        }
    }
}

impl std::error::Error for PmfError {}
