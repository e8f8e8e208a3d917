//!
//! The results converter binary.
//!

pub(crate) mod arguments;

use std::path::Path;
use std::path::PathBuf;

use clap::Parser;

use results_converter::IResultStore;

use self::arguments::Arguments;

/// The table directory name.
const CSV_DIRECTORY: &str = "csv";
/// The chart directory name.
const PLOTS_DIRECTORY: &str = "plots";

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    results_converter::logging::init(arguments.quiet);

    if !arguments.results_dir.is_dir() {
        return Err(results_converter::Error::MissingDirectory {
            path: arguments.results_dir.clone(),
        }
        .into());
    }
    if let Some(test_profiles_dir) = arguments.test_profiles_dir.as_ref() {
        if !test_profiles_dir.is_dir() {
            return Err(results_converter::Error::MissingDirectory {
                path: test_profiles_dir.to_owned(),
            }
            .into());
        }
    }

    let context = results_converter::Context {
        flag: arguments.flag.clone(),
        profiles: arguments.profiles.iter().cloned().collect(),
        reference: arguments.reference.clone(),
        candidate: arguments.candidate.clone(),
        namespace: arguments.namespace.clone(),
    };
    let results = results_converter::FileSystemStore::new(arguments.results_dir.clone());
    let definitions = results_converter::FileSystemStore::new(
        arguments
            .test_profiles_dir
            .clone()
            .unwrap_or_else(|| arguments.results_dir.clone()),
    );
    let metrics = select_metrics(&arguments, &results)?;

    let csv_dir = arguments.results_dir.join(CSV_DIRECTORY);
    let table_path = |metric: results_converter::Metric| csv_dir.join(metric.table_file_name());

    if arguments.csv {
        for metric in metrics.iter().copied() {
            let path = table_path(metric);
            if !path.is_file() {
                anyhow::bail!("Results file {path:?} does not exist!");
            }
        }
    } else {
        let mut stdout = std::io::stdout();
        for metric in metrics.iter().copied() {
            let extractor =
                results_converter::extract(metric, &results, &definitions, &context)?;
            extractor.write(table_path(metric).as_path())?;
            if !arguments.quiet {
                extractor.print_summary(&mut stdout)?;
            }
        }
    }

    if arguments.plot {
        let renderer = results_converter::SvgChartRenderer::default();
        let plots_dir = arguments.results_dir.join(PLOTS_DIRECTORY);
        for metric in metrics.iter().copied() {
            if let results_converter::Metric::TestInfo = metric {
                continue;
            }
            metric.plot(
                table_path(metric).as_path(),
                plots_dir.as_path(),
                &renderer,
                &context,
            )?;
        }
    }

    if arguments.merge {
        for metric in metrics.iter().copied() {
            if metric.merge_index().is_none() {
                continue;
            }
            metric.merge(table_path(metric).as_path())?;
        }
    }

    if let Some(xlsx_path) = arguments.xlsx.as_ref() {
        write_workbook(metrics.as_slice(), &table_path, xlsx_path, &context)?;
    }

    Ok(())
}

///
/// Returns the requested metrics, or the metrics whose raw data directory exists.
///
fn select_metrics(
    arguments: &Arguments,
    results: &results_converter::FileSystemStore,
) -> anyhow::Result<Vec<results_converter::Metric>> {
    if !arguments.metrics.is_empty() {
        if arguments.metrics.contains(&results_converter::Metric::TestInfo)
            && arguments.test_profiles_dir.is_none()
            && !arguments.csv
        {
            anyhow::bail!("Metric `test-info` requires the test profiles directory");
        }
        return Ok(arguments.metrics.clone());
    }

    let metrics = results_converter::Metric::ALL
        .into_iter()
        .filter(|metric| match metric {
            results_converter::Metric::AsmSize => arguments.flag.is_some(),
            results_converter::Metric::TestInfo => arguments.test_profiles_dir.is_some(),
            _ => true,
        })
        .filter(|metric| {
            results.is_directory(&results_converter::Location::new(metric.directory()))
        })
        .collect::<Vec<_>>();
    if metrics.is_empty() && arguments.csv {
        anyhow::bail!(
            "No raw result directories found in {:?} to select the results files",
            arguments.results_dir
        );
    }
    if metrics.is_empty() {
        tracing::warn!(
            "No raw result directories found in {:?}",
            arguments.results_dir
        );
    }
    Ok(metrics)
}

///
/// Writes the comparison workbook of the mergeable metrics.
///
fn write_workbook<F>(
    metrics: &[results_converter::Metric],
    table_path: &F,
    xlsx_path: &Path,
    context: &results_converter::Context,
) -> anyhow::Result<()>
where
    F: Fn(results_converter::Metric) -> PathBuf,
{
    let mut xlsx = results_converter::Xlsx::default();
    for metric in metrics.iter().copied() {
        if metric.merge_index().is_none() {
            continue;
        }
        let path = table_path(metric);
        let table = results_converter::Table::read(path.as_path())?;
        let wide = if results_converter::Metric::is_long(&table) {
            metric.pivot(&table, path.as_path())?
        } else {
            table
        };
        xlsx.add_table(metric, &wide, context)?;
    }
    tracing::info!("Writing comparison workbook to {xlsx_path:?}");
    xlsx.save(xlsx_path)
}
