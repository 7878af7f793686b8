// crates/cli/src/app.rs
use crate::args::Args;
use crate::config::RunConfig;
use crate::error::Result;
use crate::presentation::{self, ConsoleReporter};
use crate::prompt;
use crate::style::Palette;
use clap::CommandFactory;
use line_tally_engine::options::Extension;
use std::io::{BufRead, Write};

/// One full invocation: usage check, prompt, walk, report.
///
/// Scan failures are reported in the output, never returned; only console
/// I/O failures surface as errors.
///
/// # Errors
/// Returns an error if the prompt cannot be read or output cannot be written.
pub fn execute<R: BufRead, W: Write>(args: Args, input: &mut R, output: &mut W) -> Result<()> {
    let Some(root) = args.root.clone() else {
        Args::command().write_help(output)?;
        return Ok(());
    };

    let palette = Palette::from(&args);
    let extension = match &args.ext {
        Some(raw) => Extension::normalize(raw),
        None => prompt::read_extension(input, output, palette)?,
    };
    let config = RunConfig::new(root, extension, palette);

    presentation::print_start_banner(output, &config.engine, palette)?;
    let mut reporter = ConsoleReporter::new(&mut *output, config.palette);
    let result = line_tally_engine::run(&config.engine, &mut reporter);
    reporter.finish()?;

    presentation::print_complete_banner(output, palette)?;
    presentation::print_summary(output, &config.engine, &result, config.palette)?;
    Ok(())
}
