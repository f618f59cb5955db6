//! Per-item layer metadata: document shape, asset-path building rules,
//! stand-pose selection, and the parallel per-piece resolver.

pub mod document;
pub mod paths;
pub mod pose;
pub mod resolver;
