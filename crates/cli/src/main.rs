use anyhow::Context;
use clap::Parser;
use line_tally_cli::app;
use line_tally_cli::args::Args;
use line_tally_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = app::execute(args, &mut stdin.lock(), &mut stdout.lock())
        .context("line_tally could not finish");

    // 走査結果にかかわらず終了コードは常に 0
    if let Err(e) = outcome {
        tracing::error!("{e:#}");
    }
    ExitCode::SUCCESS
}
