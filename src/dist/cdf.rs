//! Cumulative distribution function as a discrete step function
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::dist::{Histogram, Pmf};
use itertools::Itertools;
use rand::distributions::Uniform;
use rand::Rng;
use std::fmt;

/// A discrete CDF: a strictly ascending sequence of values `xs` and a
/// parallel non-decreasing sequence of cumulative probabilities `ps`, with
/// `ps[i] = P(X ≤ xs[i])` and `ps[last] = 1.0`.
///
/// Evaluation is right-continuous: [`prob`](Cdf::prob) returns the
/// cumulative probability of the largest stored value at or below the
/// query, 0 below the support and 1 at or above its maximum.
/// [`value`](Cdf::value) is the inverse lookup, and [`draw`](Cdf::draw)/
/// [`sample`](Cdf::sample) apply it to uniform random numbers.
///
/// A `Cdf` is immutable after construction; [`resample`](Cdf::resample)
/// produces a new one.
///
/// # Example
///
/// ```rust
/// use empirical::dist::Cdf;
///
/// let cdf = Cdf::from_seq(&[2.0, 1.0, 3.0, 2.0, 5.0]);
///
/// assert::close(cdf.prob(2.0), 0.6, 1E-12);
/// assert::close(cdf.prob(2.5), 0.6, 1E-12);
/// assert_eq!(cdf.value(0.3).unwrap(), 2.0);
/// assert!(cdf.value(1.1).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Cdf {
    name: Option<String>,
    xs: Vec<f64>,
    ps: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum CdfError {
    /// The probability passed to an inverse lookup is outside [0, 1]
    ProbOutOfRange { p: f64 },
    /// The CDF has no support, so inverse lookup is undefined
    EmptySupport,
}

impl Cdf {
    /// Build a CDF from a sequence of observations: sort, dedupe, and
    /// accumulate occurrence counts into cumulative fractions
    pub fn from_seq(xs: &[f64]) -> Self {
        Cdf::from_hist(&Histogram::from_seq(xs))
    }

    /// Build a CDF from a histogram
    ///
    /// A histogram with zero total count yields an empty CDF; inverse
    /// lookups on it fail with [`CdfError::EmptySupport`].
    pub fn from_hist(hist: &Histogram) -> Self {
        let total = hist.total() as f64;
        if total == 0.0 {
            return Cdf {
                name: hist.name().map(String::from),
                xs: Vec::new(),
                ps: Vec::new(),
            };
        }
        let mut run = 0_u64;
        let (xs, ps) = hist
            .items()
            .iter()
            .map(|&(x, ct)| {
                run += ct;
                (x, run as f64 / total)
            })
            .unzip();
        Cdf {
            name: hist.name().map(String::from),
            xs,
            ps,
        }
    }

    /// Build a CDF from a PMF by accumulating its sorted masses
    ///
    /// The masses are scaled by their total, so an unnormalized PMF still
    /// yields a CDF ending at 1. A PMF with zero total mass yields an
    /// empty CDF.
    pub fn from_pmf(pmf: &Pmf) -> Self {
        let total = pmf.total();
        if total == 0.0 {
            return Cdf {
                name: pmf.name().map(String::from),
                xs: Vec::new(),
                ps: Vec::new(),
            };
        }
        let mut run = 0.0;
        let (xs, ps) = pmf
            .items()
            .iter()
            .map(|&(x, mass)| {
                run += mass;
                (x, run / total)
            })
            .unzip();
        Cdf {
            name: pmf.name().map(String::from),
            xs,
            ps,
        }
    }

    /// Build a CDF from explicit `(value, mass)` pairs in any order
    ///
    /// Masses summing to zero (in particular, no pairs at all) yield an
    /// empty CDF rather than a `ps` column of `NaN`s.
    pub fn from_items(items: &[(f64, f64)]) -> Self {
        let total: f64 = items.iter().map(|&(_, mass)| mass).sum();
        if total == 0.0 {
            return Cdf::default();
        }
        let mut run = 0.0;
        let (xs, ps) = items
            .iter()
            .sorted_by(|a, b| a.0.total_cmp(&b.0))
            .map(|&(x, mass)| {
                run += mass;
                (x, run / total)
            })
            .unzip();
        Cdf { name: None, xs, ps }
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

    /// The stored values, strictly ascending
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The cumulative probabilities parallel to [`xs`](Cdf::xs)
    #[inline]
    pub fn ps(&self) -> &[f64] {
        &self.ps
    }

    /// The `(value, cumulative probability)` pairs, ascending
    pub fn items(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ps.iter().copied())
    }

    /// Number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// `P(X ≤ x)`
    ///
    /// Zero below the support, one at or beyond its maximum, and the
    /// cumulative probability of the rightmost stored value ≤ `x`
    /// everywhere else. Never fails.
    pub fn prob(&self, x: f64) -> f64 {
        let ix = self.xs.partition_point(|&v| v <= x);
        if ix == 0 {
            0.0
        } else {
            self.ps[ix - 1]
        }
    }

    /// Inverse lookup: the smallest stored value whose cumulative
    /// probability is at least `p`
    ///
    /// # Errors
    /// `CdfError::ProbOutOfRange` if `p` is outside [0, 1];
    /// `CdfError::EmptySupport` if the CDF has no values.
    pub fn value(&self, p: f64) -> Result<f64, CdfError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(CdfError::ProbOutOfRange { p });
        }
        if self.xs.is_empty() {
            return Err(CdfError::EmptySupport);
        }
        let ix = self.ps.partition_point(|&q| q < p);
        // Accumulated ps[last] can round below 1.0; clamp to the largest
        // stored value.
        let ix = ix.min(self.xs.len() - 1);
        Ok(self.xs[ix])
    }

    /// [`value`](Cdf::value) with `p` given as a percentage in [0, 100]
    pub fn percentile(&self, p: f64) -> Result<f64, CdfError> {
        self.value(p / 100.0)
    }

    /// Draw a single value from the distribution
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Result<f64, CdfError> {
        let u = rng.sample(Uniform::new(0.0, 1.0));
        self.value(u)
    }

    /// Draw `n` independent values; output is in draw order, not sorted
    pub fn sample<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, CdfError> {
        let u = Uniform::new(0.0, 1.0);
        (0..n).map(|_| self.value(rng.sample(u))).collect()
    }

    /// Build a new CDF from `n` draws off this one
    pub fn resample<R: Rng>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Cdf, CdfError> {
        let xs = self.sample(n, rng)?;
        Ok(Cdf::from_seq(&xs))
    }

    /// Σ x·dP(x) over the step function
    pub fn mean(&self) -> f64 {
        let mut prev = 0.0;
        self.items()
            .map(|(x, p)| {
                let m = x * (p - prev);
                prev = p;
                m
            })
            .sum()
    }

    /// The step-function rendering for plotting: each stored `(x, p)`
    /// emits `(x, p_prev)` then `(x, p)`, reproducing the vertical jump at
    /// every support value
    pub fn render(&self) -> (Vec<f64>, Vec<f64>) {
        let mut vs = Vec::with_capacity(2 * self.xs.len());
        let mut ps = Vec::with_capacity(2 * self.xs.len());
        let mut prev = 0.0;
        for (x, p) in self.items() {
            vs.push(x);
            ps.push(prev);
            vs.push(x);
            ps.push(p);
            prev = p;
        }
        (vs, ps)
    }
}

impl fmt::Display for Cdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name.as_deref().unwrap_or("Cdf"))?;
        for (x, p) in self.items() {
            writeln!(f, "{}\t{}", x, p)?;
        }
        Ok(())
    }
}

impl fmt::Display for CdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProbOutOfRange { p } => {
                write!(f, "probability {} is outside [0, 1]", p)
            }
            Self::EmptySupport => {
                write!(f, "the CDF has no support")
            }
        }
    }
}

impl std::error::Error for CdfError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    const TOL: f64 = 1E-12;

    fn bob() -> Cdf {
        Cdf::from_seq(&[2.0, 1.0, 3.0, 2.0, 5.0]).with_name("bob")
    }

    #[test]
    fn from_seq_sorts_and_accumulates() {
        let cdf = bob();
        assert_eq!(cdf.xs(), &[1.0, 2.0, 3.0, 5.0]);
        assert_eq!(cdf.ps(), &[0.2, 0.6, 0.8, 1.0]);
        assert_eq!(cdf.name(), Some("bob"));
    }

    #[test]
    fn prob_step_function() {
        let cdf = bob();
        assert::close(cdf.prob(-1.0), 0.0, TOL);
        assert::close(cdf.prob(1.0), 0.2, TOL);
        assert::close(cdf.prob(2.0), 0.6, TOL);
        assert::close(cdf.prob(2.5), 0.6, TOL);
        assert::close(cdf.prob(4.0), 0.8, TOL);
        assert::close(cdf.prob(5.0), 1.0, TOL);
        assert::close(cdf.prob(7.0), 1.0, TOL);
    }

    #[test]
    fn value_inverse_lookup() {
        let cdf = bob();
        let expected = [
            (0.0, 1.0),
            (0.1, 1.0),
            (0.2, 1.0),
            (0.3, 2.0),
            (0.4, 2.0),
            (0.5, 2.0),
            (0.6, 2.0),
            (0.7, 3.0),
            (0.8, 3.0),
            (0.9, 5.0),
            (1.0, 5.0),
        ];
        for &(p, x) in &expected {
            assert_eq!(cdf.value(p).unwrap(), x, "value({})", p);
        }
    }

    #[test]
    fn value_rejects_out_of_range() {
        let cdf = bob();
        assert_eq!(
            cdf.value(-0.1),
            Err(CdfError::ProbOutOfRange { p: -0.1 })
        );
        assert_eq!(cdf.value(1.1), Err(CdfError::ProbOutOfRange { p: 1.1 }));
    }

    #[test]
    fn value_on_empty_support() {
        let cdf = Cdf::from_seq(&[]);
        assert_eq!(cdf.value(0.5), Err(CdfError::EmptySupport));
        // prob never fails: no stored value is ≤ x
        assert::close(cdf.prob(0.0), 0.0, TOL);
    }

    #[test]
    fn percentile_scales_by_100() {
        let cdf = bob();
        assert_eq!(cdf.percentile(30.0).unwrap(), 2.0);
        assert_eq!(cdf.percentile(100.0).unwrap(), 5.0);
        assert!(cdf.percentile(101.0).is_err());
    }

    #[test]
    fn mean_integrates_steps() {
        let cdf = bob();
        assert::close(cdf.mean(), 13.0 / 5.0, TOL);
    }

    #[test]
    fn items_in_order() {
        let cdf = bob();
        let items: Vec<(f64, f64)> = cdf.items().collect();
        let expected = [(1.0, 0.2), (2.0, 0.6), (3.0, 0.8), (5.0, 1.0)];
        assert_eq!(items.len(), expected.len());
        for (&(x, p), &(ex, ep)) in items.iter().zip(expected.iter()) {
            assert_eq!(x, ex);
            assert::close(p, ep, TOL);
        }
    }

    #[test]
    fn render_duplicates_support_points() {
        let (vs, ps) = bob().render();
        assert_eq!(vs, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 5.0, 5.0]);
        let expected = [0.0, 0.2, 0.2, 0.6, 0.6, 0.8, 0.8, 1.0];
        for (&got, &ex) in ps.iter().zip(expected.iter()) {
            assert::close(got, ex, TOL);
        }
    }

    #[test]
    fn from_items_sorts_unordered_input() {
        let cdf =
            Cdf::from_items(&[(3.0, 0.2), (1.0, 0.2), (5.0, 0.2), (2.0, 0.4)]);
        assert_eq!(cdf.xs(), &[1.0, 2.0, 3.0, 5.0]);
        assert::close(cdf.ps()[3], 1.0, TOL);
    }

    #[test]
    fn zero_total_mass_yields_empty_support() {
        // no ps entry may leave [0, 1], so a zero total cannot be divided
        // through; it collapses to the empty CDF instead
        let cdf = Cdf::from_items(&[(1.0, 0.0), (2.0, 0.0)]);
        assert!(cdf.is_empty());
        assert!(cdf.ps().iter().all(|p| p.is_finite()));
        assert_eq!(cdf.value(0.5), Err(CdfError::EmptySupport));

        let mut pmf = Pmf::new();
        pmf.set(1.0, 0.0);
        let cdf = Cdf::from_pmf(&pmf);
        assert!(cdf.is_empty());
        assert::close(cdf.prob(1.0), 0.0, TOL);

        let mut hist = Histogram::new();
        hist.incr(1.0, 0);
        assert!(Cdf::from_hist(&hist).is_empty());
    }

    #[test]
    fn from_pmf_of_unnormalized_masses() {
        let mut pmf = Pmf::new();
        pmf.set(1.0, 2.0);
        pmf.set(2.0, 6.0);
        let cdf = Cdf::from_pmf(&pmf);
        assert::close(cdf.prob(1.0), 0.25, TOL);
        assert::close(cdf.prob(2.0), 1.0, TOL);
    }

    #[test]
    fn sample_draws_from_support() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
        let cdf = bob();
        let draws = cdf.sample(1000, &mut rng).unwrap();
        assert_eq!(draws.len(), 1000);
        for x in draws {
            assert!(cdf.xs().contains(&x));
        }
    }

    #[test]
    fn draw_hits_every_bin() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
        let cdf = bob();
        let mut hist = Histogram::new();
        for _ in 0..1000 {
            hist.incr(cdf.draw(&mut rng).unwrap(), 1);
        }
        for x in cdf.xs() {
            assert!(hist.freq(*x) > 0);
        }
    }

    #[test]
    fn resample_is_a_fresh_cdf() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0xBEEF);
        let cdf = bob();
        let new = cdf.resample(10_000, &mut rng).unwrap();
        assert!(!new.is_empty());
        assert::close(*new.ps().last().unwrap(), 1.0, TOL);
        for x in new.xs() {
            assert!(cdf.xs().contains(x));
        }
        // the original is untouched
        assert_eq!(cdf.xs(), &[1.0, 2.0, 3.0, 5.0]);
    }
}
