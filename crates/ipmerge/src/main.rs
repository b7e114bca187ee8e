// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use argh::{FromArgs, from_env};
use ipmerge::{merge, read_ranges, report};
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};
use tracing::level_filters::LevelFilter;

/// merge overlapping and adjacent ipv4 ranges
#[derive(Debug, FromArgs)]
#[argh(help_triggers("-h", "--help"))]
struct Opt {
    /// mention skipped lines and other details on stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
    /// file with one hexadecimal range per line (reads stdin by default)
    #[argh(positional)]
    file: Option<PathBuf>,
}

#[derive(Debug, foxerror::FoxError)]
enum Error {
    /// could not open input
    InputOpen(io::Error),
    /// could not read input
    InputRead(io::Error),
    /// could not write output
    OutputWrite(io::Error),
}

fn run(opt: &Opt) -> Result<(), Error> {
    let ranges = if let Some(path) = &opt.file {
        let file = File::open(path).map_err(Error::InputOpen)?;
        read_ranges(BufReader::new(file)).map_err(Error::InputRead)?
    } else {
        read_ranges(io::stdin().lock()).map_err(Error::InputRead)?
    };

    if ranges.is_empty() {
        return Ok(());
    }

    let merged = merge(ranges);
    report(&merged, &mut io::stdout().lock()).map_err(Error::OutputWrite)
}

fn main() -> ExitCode {
    let opt: Opt = from_env();

    tracing_subscriber::fmt()
        .with_max_level(if opt.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::ERROR
        })
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();

    match run(&opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
