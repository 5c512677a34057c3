//! Sequential Bayesian updating over a suite of hypotheses
//!
//! A *suite* is a [`Pmf`] whose support is a set of candidate parameter
//! values. Updating folds one batch of evidence into the suite: every
//! hypothesis is multiplied by the likelihood of the evidence under it,
//! then the suite is renormalized. The likelihood itself is supplied by the
//! caller; this module is agnostic to its form.
//!
//! ```rust
//! use empirical::dist::Pmf;
//! use empirical::suite::{estimate_parameter, credible_interval};
//!
//! // The locomotive problem: a railroad numbers its locomotives 1..N and
//! // you see number 60. How many locomotives does it have?
//! let prior = Pmf::uniform(1.0, 200.0, 200);
//! let seen = 60.0;
//! let posterior = estimate_parameter(
//!     &prior,
//!     &|&seen: &f64, n: f64| if seen > n { 0.0 } else { 1.0 / n },
//!     &seen,
//!     "posterior",
//! )
//! .unwrap();
//!
//! let (lo, hi) = credible_interval(&posterior, 90.0).unwrap();
//! assert!(60.0 <= lo && hi <= 200.0);
//! ```
use crate::dist::{Cdf, CdfError, Pmf, PmfError};

/// Likelihood of evidence `data` under a hypothesis
///
/// Implemented for any `Fn(&D, f64) -> f64`, so closures work directly;
/// implement it on a struct when the model carries state of its own.
pub trait Likelihood<D> {
    /// A non-negative weight: how probable is `data` if `hypo` is the true
    /// parameter value?
    fn likelihood(&self, data: &D, hypo: f64) -> f64;
}

impl<D, F> Likelihood<D> for F
where
    F: Fn(&D, f64) -> f64,
{
    fn likelihood(&self, data: &D, hypo: f64) -> f64 {
        self(data, hypo)
    }
}

/// Fold one batch of evidence into a suite of hypotheses, in place
///
/// Multiplies each hypothesis by its likelihood and renormalizes. Returns
/// the normalizing constant (the total unnormalized posterior mass).
///
/// # Errors
/// `PmfError::ZeroTotalMass` if every hypothesis has zero likelihood under
/// the evidence; the posterior is logically impossible and the suite is
/// left unnormalized.
pub fn update<D, L>(
    suite: &mut Pmf,
    model: &L,
    data: &D,
) -> Result<f64, PmfError>
where
    L: Likelihood<D>,
{
    let hypos: Vec<f64> = suite.values().collect();
    for hypo in hypos {
        suite.mult(hypo, model.likelihood(data, hypo));
    }
    suite.normalize()
}

/// Compute a posterior from a prior without mutating the prior
///
/// Clones the prior, updates the clone with the evidence, and returns it
/// under `name`. The prior stays usable as a template for further
/// posteriors.
pub fn estimate_parameter<D, L>(
    prior: &Pmf,
    model: &L,
    data: &D,
    name: &str,
) -> Result<Pmf, PmfError>
where
    L: Likelihood<D>,
{
    let mut posterior = prior.clone().with_name(name);
    update(&mut posterior, model, data)?;
    Ok(posterior)
}

/// Central credible interval of a posterior
///
/// For `percentage = 90`, returns the values at the 5th and 95th
/// percentiles of the distribution.
///
/// # Errors
/// `CdfError::ProbOutOfRange` if `percentage` is outside [0, 100];
/// `CdfError::EmptySupport` if the PMF has no support.
pub fn credible_interval(
    pmf: &Pmf,
    percentage: f64,
) -> Result<(f64, f64), CdfError> {
    let cdf = Cdf::from_pmf(pmf);
    let tail = (1.0 - percentage / 100.0) / 2.0;
    let lo = cdf.value(tail)?;
    let hi = cdf.value(1.0 - tail)?;
    Ok((lo, hi))
}
