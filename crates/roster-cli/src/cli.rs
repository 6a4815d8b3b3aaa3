//! CLI argument definitions for the roster importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster-import",
    version,
    about = "Bulk member import - map, validate and submit invitation rosters",
    long_about = "Parse a CSV of members with unknown column order, detect the\n\
                  header and column types, normalize international phone numbers,\n\
                  and produce a validated invitation payload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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

    /// Allow member emails and phone numbers (PII) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a file and show the detected header and column types.
    Inspect(InspectArgs),

    /// Run the full pipeline and preview validated rows.
    Preview(PreviewArgs),

    /// Emit the JSON invitation payload for all invitable rows.
    Submit(SubmitArgs),

    /// List the known country dial codes.
    Countries,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Assumed country (ISO alpha-2) for phones without a dial code.
    /// Defaults to the batch suggestion when omitted.
    #[arg(long = "country", value_name = "ALPHA2")]
    pub country: Option<String>,

    /// Organization billing country (ISO alpha-2), used as a hint.
    #[arg(long = "billing-country", value_name = "ALPHA2")]
    pub billing_country: Option<String>,

    /// The inviting user's verified phone, used as a hint.
    #[arg(long = "inviter-phone", value_name = "PHONE")]
    pub inviter_phone: Option<String>,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Assumed country (ISO alpha-2) for phones without a dial code.
    /// Defaults to the batch suggestion when omitted.
    #[arg(long = "country", value_name = "ALPHA2")]
    pub country: Option<String>,

    /// Organization billing country (ISO alpha-2), used as a hint.
    #[arg(long = "billing-country", value_name = "ALPHA2")]
    pub billing_country: Option<String>,

    /// The inviting user's verified phone, used as a hint.
    #[arg(long = "inviter-phone", value_name = "PHONE")]
    pub inviter_phone: Option<String>,

    /// Write the payload to a file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
