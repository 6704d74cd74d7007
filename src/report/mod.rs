//! Report module - summarizing batch results

pub mod summary;

pub use summary::*;
