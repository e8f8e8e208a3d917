//!
//! The comparison chart data and its renderers.
//!


pub mod svg;

use std::collections::BTreeMap;
use std::path::Path;

use crate::context::Context;
use crate::error::Error;
use crate::extractor::metric::Metric;
use crate::parser::bare_test_name;
use crate::proportion::Proportion;
use crate::table::Table;

///
/// The chart renderer.
///
pub trait IChartRenderer {
    ///
    /// The chart file extension.
    ///
    fn extension(&self) -> &'static str;

    ///
    /// Renders the chart into a file.
    ///
    fn render(&self, chart: &Chart, path: &Path) -> anyhow::Result<()>;
}

///
/// A named sequence of values, one per chart category.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The legend label.
    pub name: String,
    /// The values, `NaN` if missing.
    pub values: Vec<f64>,
}

///
/// A grouped bar chart.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// The chart caption.
    pub title: String,
    /// The value axis label.
    pub y_label: String,
    /// The category labels.
    pub categories: Vec<String>,
    /// The bar series.
    pub series: Vec<Series>,
    /// The reference to candidate change in percent per category, or empty.
    pub changes: Vec<f64>,
}

impl Chart {
    ///
    /// Builds the chart of a metric from its long- or wide-format table.
    ///
    pub fn from_table(
        metric: Metric,
        table: &Table,
        path: &Path,
        context: &Context,
    ) -> Result<Self, Error> {
        let wide = if Metric::is_long(table) {
            metric.pivot(table, path)?
        } else {
            table.clone()
        };

        match metric {
            Metric::Runtime => Self::runtime(&wide, path, context),
            Metric::AsmSize => Self::asm_size(&wide, path, context),
            Metric::TestInfo => Err(Error::UnsupportedOperation {
                operation: "plot",
                metric,
            }),
            metric => Self::profiles(metric, &wide, path, context),
        }
    }

    ///
    /// One bar per profile and test, annotated with the candidate change.
    ///
    fn profiles(
        metric: Metric,
        wide: &Table,
        path: &Path,
        context: &Context,
    ) -> Result<Self, Error> {
        let (title, y_label, scale) = match metric {
            Metric::CompileTime => ("Compile Time", "Time (sec)", 1000.0),
            Metric::ObjectSize => ("Object Size", "Size (bytes)", 1.0),
            _ => ("Memory Usage", "Maximum resident set size (KiB)", 1.0),
        };
        let test_column = wide.require_column("Test", path)?;
        let profiles = Self::profile_columns(metric, wide);

        let categories = wide
            .rows
            .iter()
            .map(|row| bare_test_name(row[test_column].as_str()).to_owned())
            .collect();
        let series = profiles
            .iter()
            .map(|(name, column)| Series {
                name: name.to_owned(),
                values: wide
                    .rows
                    .iter()
                    .map(|row| value(row[*column].as_str()) / scale)
                    .collect(),
            })
            .collect();
        let changes = match Self::comparison_columns(&profiles, context) {
            Some((reference, candidate)) => wide
                .rows
                .iter()
                .map(|row| {
                    Proportion::LIB
                        .improvement(value(row[reference].as_str()), value(row[candidate].as_str()))
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            title: title.to_owned(),
            y_label: y_label.to_owned(),
            categories,
            series,
            changes,
        })
    }

    ///
    /// One bar per test measurement with the improvement of the candidate.
    ///
    fn runtime(wide: &Table, path: &Path, context: &Context) -> Result<Self, Error> {
        let test_column = wide.require_column("Test", path)?;
        let description_column = wide.require_column("Description", path)?;
        let proportion_column = wide.require_column("Proportion", path)?;
        let profiles = Self::profile_columns(Metric::Runtime, wide);
        let comparison = Self::comparison_columns(&profiles, context);

        let mut categories = Vec::with_capacity(wide.rows.len());
        let mut improvements = Vec::with_capacity(wide.rows.len());
        for row in wide.rows.iter() {
            let proportion = row[proportion_column]
                .parse::<Proportion>()
                .map_err(|_| Error::InvalidField {
                    path: path.to_path_buf(),
                    field: "Proportion",
                    value: row[proportion_column].clone(),
                })?;
            categories.push(format!(
                "{}: {}",
                bare_test_name(row[test_column].as_str()),
                row[description_column]
            ));
            improvements.push(match comparison {
                Some((reference, candidate)) => proportion
                    .improvement(value(row[reference].as_str()), value(row[candidate].as_str())),
                None => f64::NAN,
            });
        }

        Ok(Self {
            title: "Runtime".to_owned(),
            y_label: format!("{} vs {} (%)", context.candidate, context.reference),
            categories,
            series: vec![Series {
                name: "Improvement".to_owned(),
                values: improvements,
            }],
            changes: Vec::new(),
        })
    }

    ///
    /// One bar per test with the total size delta of the common functions.
    ///
    fn asm_size(wide: &Table, path: &Path, context: &Context) -> Result<Self, Error> {
        let test_column = wide.require_column("Test", path)?;
        let profiles = Self::profile_columns(Metric::AsmSize, wide);

        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        if let Some((reference, candidate)) = Self::comparison_columns(&profiles, context) {
            for row in wide.rows.iter() {
                let reference = value(row[reference].as_str());
                let candidate = value(row[candidate].as_str());
                if reference.is_nan() || candidate.is_nan() {
                    continue;
                }
                *totals.entry(row[test_column].as_str()).or_default() += candidate - reference;
            }
        }

        Ok(Self {
            title: "Assembly Size".to_owned(),
            y_label: "Total delta (bytes)".to_owned(),
            categories: totals
                .keys()
                .map(|test| bare_test_name(test).to_owned())
                .collect(),
            series: vec![Series {
                name: format!("{} - {}", context.candidate, context.reference),
                values: totals.into_values().collect(),
            }],
            changes: Vec::new(),
        })
    }

    ///
    /// Returns the profile names and column indexes of a wide table.
    ///
    fn profile_columns(metric: Metric, wide: &Table) -> Vec<(String, usize)> {
        let index = metric.merge_index().unwrap_or_default();
        wide.header
            .iter()
            .enumerate()
            .filter(|(_, name)| !index.contains(&name.as_str()))
            .map(|(column, name)| (name.to_owned(), column))
            .collect()
    }

    ///
    /// Returns the reference and candidate column indexes, if both are present.
    ///
    fn comparison_columns(
        profiles: &[(String, usize)],
        context: &Context,
    ) -> Option<(usize, usize)> {
        let find = |name: &str| {
            profiles
                .iter()
                .find(|(profile, _)| profile == name)
                .map(|(_, column)| *column)
        };
        Some((
            find(context.reference.as_str())?,
            find(context.candidate.as_str())?,
        ))
    }
}

///
/// Parses a table cell, `NaN` if it is not a number.
///
fn value(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(f64::NAN)
}
