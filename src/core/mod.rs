//! Core building blocks: generation parameters, the response fetcher and
//! title/slug formatting. Consumed by the high-level `api` module.
pub mod fetcher;
pub mod format;
pub mod params;
