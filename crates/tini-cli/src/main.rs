//! `tini`: parse INI files as one batch and print or look up their sections.
//!
//! Exit codes: 0 success, 1 out of memory, 2 file error, 3 a requested
//! section was not found, 64 usage error.

mod cli;
mod exit;
mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use indexmap::IndexSet;
use tini_files::load_all;
use tini_parse::{parse_multi, Pool};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::exit::MissingSections;

fn main() -> ExitCode {
    eprintln!("Tini: Teeny INI tool (Version {})", env!("CARGO_PKG_VERSION"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here, on stdout.
            let code = if err.use_stderr() { exit::USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit::code_for(&err))
        }
    }
}

/// Log to stderr at `default_level`; `RUST_LOG` takes precedence.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    info!(files = cli.inputs.len(), "reading input files");
    let mut batch = load_all(&cli.inputs).context("loading input files")?;
    let mut units = batch.units();

    let mut pool = Pool::new(&cli.arena_config()).context("creating pool")?;
    let results =
        parse_multi(&mut pool, &mut units, &cli.parse_config()).context("parsing input files")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = if cli.sections.is_empty() {
        report::write_all(&mut out, &results).context("writing output")
    } else {
        let names: IndexSet<&str> = cli.sections.iter().map(String::as_str).collect();
        let missing =
            report::write_lookups(&mut out, &results, &names).context("writing output")?;
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingSections(missing).into())
        }
    };
    out.flush().context("writing output")?;

    debug!(stats = ?results.pool().stats(), "pool usage");
    outcome
}
