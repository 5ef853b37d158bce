use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str =
    "A command-line tool for inspecting contracted Gaussian basis-set data files.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser)]
#[command(
    version,
    about = ABOUT,
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Elements to inspect, given as symbols or atomic numbers.
    ///
    /// If no elements are given, every entry of the basis set is listed.
    #[arg(value_name = "ELEMENTS")]
    pub elements: Vec<String>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub basis: BasisOptions,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the basis summary.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places to display for exponents.
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,
}

/// Options for selecting the basis-set source.
#[derive(Args)]
#[command(next_help_heading = "Basis Options")]
pub struct BasisOptions {
    /// Basis-set file in TOML format.
    ///
    /// If not specified, the built-in default basis (h, c, n, o) is used.
    #[arg(short = 'b', long, value_name = "FILE")]
    pub basis: Option<PathBuf>,
}

/// Output format for the basis summary.
#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table with one row per element.
    Pretty,
    /// Comma-separated values with columns: z, symbol, shells, primitives, angular_momenta.
    Csv,
    /// JSON object containing one entry per element with the full exponent block.
    Json,
}
