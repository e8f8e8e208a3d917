//!
//! The results converter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The results converter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The results directory with the `compile-time`, `object-size`, `memory-usage`,
    /// `test-results` and `asm-diff` subdirectories.
    pub results_dir: PathBuf,

    /// The test profiles directory with the test definitions.
    pub test_profiles_dir: Option<PathBuf>,

    /// The optimization flag selecting the repeated-run layouts, e.g. `O2`.
    #[arg(long)]
    pub flag: Option<String>,

    /// Skips the extraction and uses the existing tables in `<results-dir>/csv`.
    #[arg(short, long)]
    pub csv: bool,

    /// Merges the tables across profiles.
    #[arg(short, long)]
    pub merge: bool,

    /// Plots the tables into `<results-dir>/plots`.
    #[arg(short, long)]
    pub plot: bool,

    /// The metrics to process.
    /// Defaults to the metrics whose raw data directory exists.
    #[arg(long, value_delimiter = ',')]
    pub metrics: Vec<results_converter::Metric>,

    /// A profile to subdirectory mapping, `NAME=DIR`. May be repeated.
    #[arg(long = "profile")]
    pub profiles: Vec<results_converter::ProfileMapping>,

    /// The reference profile name.
    #[arg(long, default_value_t = results_converter::Context::DEFAULT_REFERENCE.to_owned())]
    pub reference: String,

    /// The candidate profile name.
    #[arg(long, default_value_t = results_converter::Context::DEFAULT_CANDIDATE.to_owned())]
    pub candidate: String,

    /// The test definition namespace.
    #[arg(long, default_value_t = results_converter::Context::DEFAULT_NAMESPACE.to_owned())]
    pub namespace: String,

    /// Writes the merged tables into a comparison workbook.
    #[arg(long)]
    pub xlsx: Option<PathBuf>,
}
