// crates/cli/src/prompt.rs
use crate::error::{AppError, Result};
use crate::style::Palette;
use line_tally_engine::options::Extension;
use std::io::{BufRead, Write};

/// Ask for the extension on `output` and read one line from `input`.
///
/// End of input counts as an empty answer, which normalizes to a bare `.`.
/// Bytes that are not valid UTF-8 are replaced, not rejected.
///
/// # Errors
/// Fails if the prompt cannot be written or the line cannot be read.
pub fn read_extension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    palette: Palette,
) -> Result<Extension> {
    write!(
        output,
        "{} ",
        palette.cyan("Enter the file extension to count (e.g. rs, .txt):")
    )?;
    output.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line).map_err(AppError::Prompt)?;

    Ok(Extension::normalize(&String::from_utf8_lossy(&line)))
}
