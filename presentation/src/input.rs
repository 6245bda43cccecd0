//! Interactive agenda prompt

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Ask for the meeting agenda on `output` and read one line from `input`.
///
/// Returns the line without its trailing newline; an empty string means the
/// user entered nothing (or input was closed).
pub fn prompt_agenda<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{} ", "Please enter the meeting agenda:".cyan().bold())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
