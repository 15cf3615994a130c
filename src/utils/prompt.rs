// Interactive input

use std::io::{BufRead, Write};
use crate::utils::error::Result;

/// Print `question`, read one line and return it trimmed.
///
/// End of input yields an empty string.
pub fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
