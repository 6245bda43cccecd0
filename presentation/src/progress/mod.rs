//! Progress reporting while a meeting runs

pub mod reporter;
