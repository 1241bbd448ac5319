use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tini_arena::ArenaConfig;
use tini_parse::{FinalLine, ParseConfig};

#[derive(Debug, Parser)]
#[command(
    name = "tini",
    version,
    about = "Teeny INI tool",
    long_about = "Parses one or more INI files as a single batch and prints their sections. \
Every input is loaded before any is parsed; if one file cannot be read, nothing is parsed."
)]
pub(crate) struct Cli {
    /// INI file to load (repeatable; order is kept)
    #[arg(short = 'i', long = "input", value_name = "FILE", required = true)]
    pub(crate) inputs: Vec<PathBuf>,

    /// Print only the first section with this exact name (repeatable)
    #[arg(short = 's', long = "section", value_name = "NAME")]
    pub(crate) sections: Vec<String>,

    /// Arena chunk size in bytes
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = ArenaConfig::DEFAULT_CHUNK_CAPACITY,
        value_parser = parse_nonzero
    )]
    pub(crate) chunk_size: usize,

    /// Fail with out-of-memory once an arena holds this many chunks
    #[arg(long, value_name = "N", value_parser = parse_nonzero)]
    pub(crate) max_chunks: Option<usize>,

    /// Ignore text after the last line terminator of each file
    #[arg(long)]
    pub(crate) discard_final_line: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Cli {
    pub(crate) fn arena_config(&self) -> ArenaConfig {
        let config = ArenaConfig::new(self.chunk_size);
        match self.max_chunks {
            Some(max) => config.with_max_chunks(max),
            None => config,
        }
    }

    pub(crate) fn parse_config(&self) -> ParseConfig {
        if self.discard_final_line {
            ParseConfig::with_final_line(FinalLine::Discard)
        } else {
            ParseConfig::default()
        }
    }

    /// Default log filter for the verbosity level.
    pub(crate) fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn parse_nonzero(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tini", "-i", "a.ini"]).unwrap();
        assert_eq!(cli.arena_config(), ArenaConfig::default());
        assert_eq!(cli.parse_config(), ParseConfig::default());
        assert_eq!(cli.log_level(), "warn");
        assert!(cli.sections.is_empty());
    }

    #[test]
    fn repeated_inputs_keep_order() {
        let cli = Cli::try_parse_from(["tini", "-i", "b.ini", "--input", "a.ini"]).unwrap();
        assert_eq!(cli.inputs, [PathBuf::from("b.ini"), PathBuf::from("a.ini")]);
    }

    #[test]
    fn options_map_to_configs() {
        let cli = Cli::try_parse_from([
            "tini",
            "-vv",
            "--chunk-size",
            "64",
            "--max-chunks",
            "3",
            "--discard-final-line",
            "-i",
            "a.ini",
        ])
        .unwrap();
        assert_eq!(cli.arena_config(), ArenaConfig::new(64).with_max_chunks(3));
        assert_eq!(
            cli.parse_config().final_line,
            FinalLine::Discard
        );
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn missing_input_is_rejected() {
        assert!(Cli::try_parse_from(["tini", "-s", "x"]).is_err());
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        assert!(Cli::try_parse_from(["tini", "--chunk-size", "0", "-i", "a.ini"]).is_err());
    }
}
