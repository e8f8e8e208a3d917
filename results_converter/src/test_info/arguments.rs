//!
//! The test information report arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The test information report arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the diagnostics.
    #[arg(short, long)]
    pub quiet: bool,

    /// The test profiles directory.
    pub test_profiles_dir: PathBuf,

    /// The file with one `<namespace>/<name>-<version>` test name per line.
    pub test_names_file: PathBuf,

    /// The report format: `markdown` (default), `csv`, or `json`.
    #[arg(long = "output-format", default_value_t = results_converter::TestInfoFormat::Markdown)]
    pub output_format: results_converter::TestInfoFormat,
}
