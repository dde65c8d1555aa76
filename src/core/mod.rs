//! Core building blocks: the compiled-in batch constants and the padding
//! primitives. These are consumed by the high-level `api` module.
pub mod params;
pub mod processing;
