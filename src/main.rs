use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::{ArgAction, Parser};
use sol_cleaner::{read_source, SourceStripper, StripConfig, StripReport};

/// Strip comments from a flattened Solidity source, keeping the version pragma
#[derive(Parser, Debug)]
#[command(name = "sol-cleaner", version)]
struct Args {
    /// Source file to clean
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where the cleaned source is written
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (.json or .toml) or inline JSON
    #[arg(short, long)]
    config: Option<String>,

    /// Keep the header above the first `pragma solidity`
    #[arg(long)]
    keep_header: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the cleaned source to stdout instead of the output file
    #[arg(long, conflicts_with_all = ["json", "output"])]
    stdout: bool,

    /// Clean every .sol file in a directory
    #[cfg(feature = "multi_thread")]
    #[arg(long, value_name = "DIR", conflicts_with_all = ["input", "output", "stdout"])]
    batch: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn resolve_config(args: &Args) -> Result<StripConfig> {
    let mut config = match &args.config {
        Some(config) => StripConfig::from_config(config)?,
        None => StripConfig::default(),
    };
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if args.keep_header {
        config.keep_pragma_only = false;
    }
    log::debug!("using config {}", config);
    Ok(config)
}

fn render_report(report: &StripReport, json: bool) -> Result<String> {
    if json {
        Ok(sonic_rs::to_string(report)?)
    } else {
        Ok(report.to_string())
    }
}

fn write_stripped<W: Write>(stripper: &SourceStripper, out: &mut W) -> Result<()> {
    let source = read_source(&stripper.config().input)?;
    out.write_all(stripper.strip(&source).text.as_bytes())?;
    Ok(())
}

#[cfg(feature = "multi_thread")]
fn run_batch<W: Write>(
    stripper: &SourceStripper,
    dir: &std::path::Path,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let jobs = sol_cleaner::batch_jobs(dir)?;
    let results = stripper.strip_many(&jobs);

    let mut failed = 0;
    for (input, _) in &jobs {
        match results.remove(input).map(|(_, result)| result) {
            Some(Ok(report)) => writeln!(out, "{}", render_report(&report, json)?)?,
            Some(Err(err)) => {
                log::error!("{}", err);
                failed += 1;
            }
            None => {}
        }
    }
    if failed > 0 {
        anyhow::bail!("{} of {} files failed", failed, jobs.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = resolve_config(&args)?;
    let stripper = SourceStripper::new().with_config(config).build();
    let mut stdout = io::stdout().lock();

    #[cfg(feature = "multi_thread")]
    {
        if let Some(dir) = &args.batch {
            return run_batch(&stripper, dir, args.json, &mut stdout);
        }
    }

    if args.stdout {
        return write_stripped(&stripper, &mut stdout);
    }

    let report = stripper.run()?;
    writeln!(stdout, "{}", render_report(&report, args.json)?)?;
    Ok(())
}
