use anyhow::{Context, Result};
use std::fs::File;
use std::io::{prelude::*, stdin, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod errors;
mod resolve_file;
mod utils;

use resolve_file::{MalformedConflictPolicy, MissingStartMarker, Resolver};

const DEFAULT_TARGETS: &[&str] = &[
    "app/src/screens/TourHistoryScreen.js",
    "app/components/Icons.js",
];

#[derive(StructOpt, Debug)]
#[structopt(name = "unconflict")]
pub struct Cli {
    /// Files to resolve. Defaults to the built-in target list.
    #[structopt(parse(from_os_str))]
    files: Vec<PathBuf>,

    /// Read more files from this list, one per line. `-` reads stdin.
    #[structopt(short = "i", long = "input-file", parse(from_os_str))]
    input: Option<PathBuf>,

    #[structopt(short = "d", long = "dry")]
    dry: bool,

    /// File that gets the missing-start-marker repair.
    #[structopt(short = "s", long = "special-file", default_value = "Icons.js")]
    special_file: String,

    #[structopt(short = "t", long = "closing-token", default_value = ");")]
    closing_token: String,
}

fn read_targets(cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut files = cli.files.clone();

    if let Some(input) = &cli.input {
        let input: Box<dyn Read> = if input.as_os_str() == "-" {
            Box::new(stdin())
        } else {
            Box::new(
                File::open(input)
                    .with_context(|| format!("failed to open {}", input.display()))?,
            )
        };

        let reader = BufReader::new(input);
        for line in reader.lines() {
            let line = line.context("failed to read file list")?;
            let line = line.trim();
            if !line.is_empty() {
                files.push(PathBuf::from(line));
            }
        }
    }

    if files.is_empty() {
        files = DEFAULT_TARGETS.iter().map(PathBuf::from).collect();
    }

    Ok(files)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::from_args();

    let targets = match read_targets(&cli) {
        Ok(targets) => targets,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let policy: Box<dyn MalformedConflictPolicy> = Box::new(MissingStartMarker {
        file_name: cli.special_file,
        closing_token: cli.closing_token,
    });
    let resolver = Resolver::new(Some(policy), cli.dry);

    let summary = resolver.run(&targets);
    tracing::debug!("{}", summary);

    if summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
