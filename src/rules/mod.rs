//! Layer-resolution rules: which sub-layer a piece contributes to each
//! visual layer, where it anchors, and when another piece suppresses it.

pub mod engine;
pub mod tables;
