//! Core domain concepts shared across all subdomains.
//!
//! - [`agenda::Agenda`] : a validated meeting agenda
//! - [`error`] : input, configuration and meeting-level errors
//! - [`string`] : small string helpers

pub mod agenda;
pub mod error;
pub mod string;
