//! Variant output writing and progress reporting.

pub mod progress;
mod writer;

pub use writer::write_variants;
