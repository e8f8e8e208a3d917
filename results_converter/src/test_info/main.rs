//!
//! The test information report binary.
//!

pub(crate) mod arguments;

use std::io::Write;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    results_converter::logging::init(arguments.quiet);

    if !arguments.test_profiles_dir.is_dir() {
        anyhow::bail!(
            "Test profiles directory {:?} does not exist!",
            arguments.test_profiles_dir
        );
    }
    if !arguments.test_names_file.is_file() {
        anyhow::bail!(
            "Test names file {:?} does not exist!",
            arguments.test_names_file
        );
    }

    let names = std::fs::read_to_string(arguments.test_names_file.as_path()).map_err(|error| {
        results_converter::Error::Reading {
            error,
            path: arguments.test_names_file.clone(),
        }
    })?;
    let names: Vec<&str> = names.lines().collect();

    let store = results_converter::FileSystemStore::new(arguments.test_profiles_dir.clone());
    let report = results_converter::TestInfoReport::from_names(&store, names.as_slice())?;
    tracing::info!(
        "Collected {} test profiles from {:?}",
        report.entries.len(),
        arguments.test_profiles_dir
    );

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.render(arguments.output_format)?.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
