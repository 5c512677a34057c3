//! Empirical discrete distributions with sequential Bayesian updating.
//!
//! Three representations of a finite-support distribution and the
//! conversions between them:
//!
//! - [`dist::Histogram`]: value → occurrence count, built from raw
//!   observations.
//! - [`dist::Pmf`]: value → probability mass, with incremental accumulation
//!   (`set`/`incr`/`mult`) and explicit normalization.
//! - [`dist::Cdf`]: ascending value/cumulative-probability step function,
//!   with inverse lookup and sampling.
//!
//! The [`suite`] module layers the sequential Bayesian update pattern on
//! top of `Pmf`: treat the support as a set of hypotheses, multiply each by
//! a caller-supplied likelihood, renormalize, and query the posterior.
//!
//! ```rust
//! use empirical::prelude::*;
//!
//! // Is this coin biased? 140 heads in 250 spins.
//! let prior = Pmf::uniform(0.0, 1.0, 101);
//! let binomial = |&(h, t): &(i32, i32), p: f64| p.powi(h) * (1.0 - p).powi(t);
//!
//! let posterior =
//!     estimate_parameter(&prior, &binomial, &(140, 110), "posterior").unwrap();
//! let (lo, hi) = credible_interval(&posterior, 90.0).unwrap();
//! assert!(lo < 140.0 / 250.0 && 140.0 / 250.0 < hi);
//! ```
//!
//! # Feature flags
//!
//! - `serde1`: serde `Serialize`/`Deserialize` on all distribution types
//!   and errors.
pub mod dist;
pub mod misc;
pub mod prelude;
pub mod suite;
