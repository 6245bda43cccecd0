//! Output formatting for meeting results

pub mod console;
pub mod formatter;
