use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Logging level (overrides env/config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace (writes an example config file)
    Init,

    /// Compare mean spill counts between the baseline and restricted condition
    Compare(CompareArgs),

    /// Scan arbitrary log directories and report their spill totals
    Scan(ScanArgs),

    /// Print various information about the configuration and log files
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Root directory of the baseline logs (one subdirectory per suite).
    /// Replaces config baseline_dir if provided.
    #[arg(long = "baseline-dir")]
    pub baseline_dir: Option<String>,

    /// Root directory of the restricted-register logs (one subdirectory per suite).
    /// Replaces config restricted_dir if provided.
    #[arg(long = "restricted-dir")]
    pub restricted_dir: Option<String>,

    /// Benchmark suite to compare; repeat for several suites.
    /// Replaces config suites if provided.
    #[arg(long = "suite", value_name = "SUITE")]
    pub suites: Vec<String>,

    /// Substring that marks a spill count line.
    /// Replaces config marker if provided.
    #[arg(long)]
    pub marker: Option<String>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the scan command
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directories to scan; glob patterns are expanded.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Substring that marks a spill count line.
    /// Replaces config marker if provided.
    #[arg(long)]
    pub marker: Option<String>,

    /// Show the spill total of every file, not just the group summary
    #[arg(long = "per-file")]
    pub per_file: bool,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// Print the effective global configuration
    Config(PrintConfigArgs),

    /// List the log files each group would scan
    Files(PrintFilesArgs),
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print files subcommand
#[derive(Parser, Debug)]
pub struct PrintFilesArgs {
    /// Root directory of the baseline logs.
    /// Replaces config baseline_dir if provided.
    #[arg(long = "baseline-dir")]
    pub baseline_dir: Option<String>,

    /// Root directory of the restricted-register logs.
    /// Replaces config restricted_dir if provided.
    #[arg(long = "restricted-dir")]
    pub restricted_dir: Option<String>,

    /// Benchmark suite to list; repeat for several suites.
    /// Replaces config suites if provided.
    #[arg(long = "suite", value_name = "SUITE")]
    pub suites: Vec<String>,
}
