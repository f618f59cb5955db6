//! Crate-wide foundations: the error taxonomy and small numeric helpers.

pub mod error;
pub(crate) mod math;
