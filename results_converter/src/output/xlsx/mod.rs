//!
//! XLSX comparison workbook.
//!

pub mod worksheet;

use std::path::Path;

use crate::context::Context;
use crate::extractor::metric::Metric;
use crate::proportion::Proportion;
use crate::table::Table;

use self::worksheet::Worksheet;

///
/// XLSX comparison workbook with one worksheet per merged metric table.
///
#[derive(Default)]
pub struct Xlsx {
    /// The worksheets in insertion order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    /// Width of the index columns.
    const INDEX_COLUMN_WIDTH: usize = 24;
    /// Width of the description columns.
    const DESCRIPTION_COLUMN_WIDTH: usize = 48;

    ///
    /// Adds the worksheet of a metric built from its wide-format table.
    ///
    /// The change column holds the candidate improvement over the reference. Runtime rows use
    /// their own proportion, the other metrics are lower-is-better.
    ///
    pub fn add_table(
        &mut self,
        metric: Metric,
        wide: &Table,
        context: &Context,
    ) -> anyhow::Result<()> {
        let index = metric.merge_index().ok_or_else(|| {
            anyhow::anyhow!("Metric `{metric}` cannot be added to the workbook")
        })?;
        let index_columns = index
            .iter()
            .map(|name| {
                wide.column(name)
                    .ok_or_else(|| anyhow::anyhow!("Table of `{metric}` has no column `{name}`"))
            })
            .collect::<anyhow::Result<Vec<usize>>>()?;
        let profile_columns: Vec<(String, usize)> = wide
            .header
            .iter()
            .enumerate()
            .filter(|(_, name)| !index.contains(&name.as_str()))
            .map(|(column, name)| (name.to_owned(), column))
            .collect();
        let proportion_column = wide.column("Proportion");

        let headers = index
            .iter()
            .map(|name| {
                let width = match *name {
                    "Description" | "Function" => Self::DESCRIPTION_COLUMN_WIDTH,
                    _ => Self::INDEX_COLUMN_WIDTH,
                };
                (name.to_string(), width)
            })
            .collect();
        let change_caption = format!("{}\nvs\n{}", context.candidate, context.reference);
        let mut worksheet = Worksheet::new(
            metric.to_string().as_str(),
            headers,
            profile_columns
                .iter()
                .map(|(name, _)| name.to_owned())
                .collect(),
            change_caption.as_str(),
        )?;

        let column = |name: &str| {
            profile_columns
                .iter()
                .find(|(profile, _)| profile == name)
                .map(|(_, column)| *column)
        };
        let comparison = column(context.reference.as_str()).zip(column(context.candidate.as_str()));

        for row in wide.rows.iter() {
            let cells: Vec<&str> = index_columns
                .iter()
                .map(|column| row[*column].as_str())
                .collect();
            let values: Vec<f64> = profile_columns
                .iter()
                .map(|(_, column)| row[*column].trim().parse::<f64>().unwrap_or(f64::NAN))
                .collect();
            let proportion = proportion_column
                .and_then(|column| row[column].parse::<Proportion>().ok())
                .unwrap_or(Proportion::LIB);
            let change = match comparison {
                Some((reference, candidate)) => proportion.improvement(
                    row[reference].trim().parse::<f64>().unwrap_or(f64::NAN),
                    row[candidate].trim().parse::<f64>().unwrap_or(f64::NAN),
                ),
                None => f64::NAN,
            };
            worksheet.write_row(cells.as_slice(), values.as_slice(), change)?;
        }

        self.worksheets.push(worksheet);
        Ok(())
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }

    ///
    /// Writes the workbook to a file.
    ///
    pub fn save(self, path: &Path) -> anyhow::Result<()> {
        let mut workbook = self.finalize();
        workbook
            .save(path)
            .map_err(|error| anyhow::anyhow!("Workbook file {path:?} writing: {error}"))?;
        Ok(())
    }
}
