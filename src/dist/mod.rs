//! Distribution representations
mod cdf;
mod histogram;
mod pmf;

pub use cdf::{Cdf, CdfError};
pub use histogram::Histogram;
pub use pmf::{Pmf, PmfError};
