//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::dist::*;
#[doc(no_inline)]
pub use crate::suite::*;
