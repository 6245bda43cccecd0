//! Configuration value objects shared by the outer layers
//!
//! Kept in the domain so file config and CLI flags resolve to one type.

mod output_format;

pub use output_format::OutputFormat;
