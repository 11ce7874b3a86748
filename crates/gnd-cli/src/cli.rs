//! CLI argument definitions for the GND authority loader.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gnd-loader",
    version,
    about = "GND authority loader - index MARC 21 authority records",
    long_about = "Load GND authority record files (MARC-XML) into a search index.\n\n\
                  Records are split out of the line stream, parsed into fields and\n\
                  subfields, mapped to preferred/synonym/related document values,\n\
                  and submitted with one durability commit per file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load one authority file into the index.
    Load(LoadArgs),

    /// List the registered field mapping rules.
    Tags,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the MARC-XML authority file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target JSON-lines file for the produced documents
    /// (default: the input path with a .jsonl extension).
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Number of documents the index may queue between flushes.
    #[arg(
        long,
        value_name = "N",
        default_value_t = gnd_index::IndexConfig::default().queue_size
    )]
    pub queue_size: usize,

    /// Parse and map without writing documents anywhere.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
