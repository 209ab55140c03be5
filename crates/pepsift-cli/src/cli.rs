use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "pepsift",
    version,
    about = "Pepsift CLI - Screen peptide sequence collections by sequence pattern and physicochemical descriptor ranges.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter a sequence collection and print or export the matching subset.
    Search(SearchArgs),
    /// Compute the descriptor set of one sequence or of every record in a collection.
    Describe(DescribeArgs),
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    // --- Core Arguments ---
    /// Path to the input collection (a `.json` record array; anything else
    /// is read as a FASTA-like flat file).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Literal search pattern; the letter X matches any residue.
    #[arg(short, long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Comma-separated exclusion patterns (same syntax as --pattern).
    #[arg(long, value_name = "LIST")]
    pub ignore: Option<String>,

    /// Path to a TOML filter specification. Explicit flags override it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Descriptor Range Overrides ---
    /// Minimum net charge, inclusive.
    #[arg(long, value_name = "NUM")]
    pub min_charge: Option<f64>,

    /// Maximum net charge, inclusive.
    #[arg(long, value_name = "NUM")]
    pub max_charge: Option<f64>,

    /// Minimum isoelectric point, inclusive.
    #[arg(long, value_name = "NUM")]
    pub min_isoelectric: Option<f64>,

    /// Maximum isoelectric point, inclusive.
    #[arg(long, value_name = "NUM")]
    pub max_isoelectric: Option<f64>,

    /// Minimum hydrophobic residue percentage, inclusive.
    #[arg(long, value_name = "NUM")]
    pub min_hydrophobicity: Option<f64>,

    /// Maximum hydrophobic residue percentage, inclusive.
    #[arg(long, value_name = "NUM")]
    pub max_hydrophobicity: Option<f64>,

    /// Minimum Boman index, inclusive.
    #[arg(long, value_name = "NUM")]
    pub min_boman: Option<f64>,

    /// Maximum Boman index, inclusive.
    #[arg(long, value_name = "NUM")]
    pub max_boman: Option<f64>,

    /// Minimum hydrophobic moment ratio, inclusive.
    #[arg(long, value_name = "NUM")]
    pub min_moment: Option<f64>,

    /// Maximum hydrophobic moment ratio, inclusive.
    #[arg(long, value_name = "NUM")]
    pub max_moment: Option<f64>,

    // --- Output ---
    /// Write the matching subset as delimited text.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Write the matching subset as FASTA.
    #[arg(long, value_name = "PATH")]
    pub fasta: Option<PathBuf>,

    /// Print only the summary, not the matching rows.
    #[arg(long)]
    pub summary_only: bool,

    /// Disable match highlighting in the printed rows.
    #[arg(long)]
    pub no_highlight: bool,
}

/// Arguments for the `describe` subcommand.
#[derive(Args, Debug)]
#[command(group = clap::ArgGroup::new("target").required(true).args(["sequence", "input"]))]
pub struct DescribeArgs {
    /// Sequence to score, given directly on the command line.
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Score every record of this collection instead.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Emit JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,
}
