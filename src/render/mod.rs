//! Off-screen composition and the public render entry point.

pub(crate) mod compositor;
pub mod fingerprint;
pub mod pipeline;
pub(crate) mod sequence;
pub mod surface;
