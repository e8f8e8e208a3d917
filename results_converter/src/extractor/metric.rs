//!
//! The metric kind.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::chart::Chart;
use crate::chart::IChartRenderer;
use crate::context::Context;
use crate::error::Error;
use crate::record::asm_function::AsmFunction;
use crate::record::compile_time::CompileTime;
use crate::record::memory_usage::MemoryUsage;
use crate::record::object_size::ObjectSize;
use crate::record::runtime::Runtime;
use crate::record::test_info::TestInfo;
use crate::record::IRecord;
use crate::table::pivot::pivot;
use crate::table::Table;

///
/// The metric kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    /// Build time of a test.
    CompileTime,
    /// Size of the built binaries of a test.
    ObjectSize,
    /// Peak memory usage of the build of a test.
    MemoryUsage,
    /// Runtime performance measurements of a test.
    Runtime,
    /// Per-function assembly sizes of a test.
    AsmSize,
    /// Test version, description and source size.
    TestInfo,
}

impl Metric {
    /// All metric kinds in extraction order.
    pub const ALL: [Self; 6] = [
        Self::CompileTime,
        Self::ObjectSize,
        Self::MemoryUsage,
        Self::Runtime,
        Self::AsmSize,
        Self::TestInfo,
    ];

    /// The name of the pivoted column of the long-format tables.
    pub const PROFILE_COLUMN: &'static str = "Profile";

    ///
    /// The raw data directory walked by the extractor.
    ///
    pub fn directory(&self) -> &'static str {
        match self {
            Self::CompileTime => "compile-time",
            Self::ObjectSize | Self::TestInfo => "object-size",
            Self::MemoryUsage => "memory-usage",
            Self::Runtime => "test-results",
            Self::AsmSize => "asm-diff",
        }
    }

    ///
    /// The result table file name.
    ///
    pub fn table_file_name(&self) -> &'static str {
        match self {
            Self::CompileTime => "compile-time-results.csv",
            Self::ObjectSize => "object-size-results.csv",
            Self::MemoryUsage => "memory-usage-results.csv",
            Self::Runtime => "runtime-results.csv",
            Self::AsmSize => "asm-size-results.csv",
            Self::TestInfo => "test-info.csv",
        }
    }

    ///
    /// The long-format table header.
    ///
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Self::CompileTime => CompileTime::HEADER,
            Self::ObjectSize => ObjectSize::HEADER,
            Self::MemoryUsage => MemoryUsage::HEADER,
            Self::Runtime => Runtime::HEADER,
            Self::AsmSize => AsmFunction::HEADER,
            Self::TestInfo => TestInfo::HEADER,
        }
    }

    ///
    /// The index columns of the wide-format table, `None` if the table cannot be merged.
    ///
    pub fn merge_index(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::CompileTime | Self::ObjectSize | Self::MemoryUsage => Some(&["Test"]),
            Self::Runtime => Some(&["Test", "Description", "Scale", "Proportion"]),
            Self::AsmSize => Some(&["Test", "Function"]),
            Self::TestInfo => None,
        }
    }

    ///
    /// The measured value column.
    ///
    pub fn value_column(&self) -> &'static str {
        match self {
            Self::CompileTime => "Compile Time",
            Self::ObjectSize | Self::AsmSize => "Size",
            Self::MemoryUsage => "Memory Usage",
            Self::Runtime => "Value",
            Self::TestInfo => "LOC",
        }
    }

    ///
    /// Whether the table is in the long format.
    ///
    pub fn is_long(table: &Table) -> bool {
        table.column(Self::PROFILE_COLUMN).is_some()
    }

    ///
    /// Pivots a long-format table into the wide format.
    ///
    pub fn pivot(&self, table: &Table, path: &Path) -> Result<Table, Error> {
        let index = self.merge_index().ok_or(Error::UnsupportedOperation {
            operation: "merge",
            metric: *self,
        })?;
        pivot(
            table,
            index,
            Self::PROFILE_COLUMN,
            self.value_column(),
            path,
        )
    }

    ///
    /// Replaces the long-format table at `path` with its wide-format version.
    ///
    /// A table which is already in the wide format is left untouched.
    ///
    pub fn merge(&self, path: &Path) -> Result<(), Error> {
        if self.merge_index().is_none() {
            return Err(Error::UnsupportedOperation {
                operation: "merge",
                metric: *self,
            });
        }

        let table = Table::read(path)?;
        if !Self::is_long(&table) {
            tracing::warn!("Skipping merge of {path:?}: the table is already merged");
            return Ok(());
        }

        tracing::info!("Merging {self} results in {path:?}");
        self.pivot(&table, path)?.write(path)
    }

    ///
    /// Renders the long- or wide-format table at `path` into a chart in `output_directory`.
    ///
    /// Returns the path to the chart file.
    ///
    pub fn plot(
        &self,
        path: &Path,
        output_directory: &Path,
        renderer: &dyn IChartRenderer,
        context: &Context,
    ) -> anyhow::Result<PathBuf> {
        if let Self::TestInfo = self {
            return Err(Error::UnsupportedOperation {
                operation: "plot",
                metric: *self,
            }
            .into());
        }

        let table = Table::read(path)?;
        let chart = Chart::from_table(*self, &table, path, context)?;

        std::fs::create_dir_all(output_directory).map_err(|error| Error::Writing {
            error,
            path: output_directory.to_path_buf(),
        })?;
        let chart_path = output_directory.join(format!("{self}.{}", renderer.extension()));
        tracing::info!("Plotting {self} results to {chart_path:?}");
        renderer.render(&chart, chart_path.as_path())?;
        Ok(chart_path)
    }
}

impl std::str::FromStr for Metric {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_lowercase().as_str() {
            "compile-time" => Ok(Self::CompileTime),
            "object-size" => Ok(Self::ObjectSize),
            "memory-usage" => Ok(Self::MemoryUsage),
            "runtime" => Ok(Self::Runtime),
            "asm-size" => Ok(Self::AsmSize),
            "test-info" => Ok(Self::TestInfo),
            string => anyhow::bail!(
                "Unknown metric `{string}`. Supported metrics: {}",
                Self::ALL
                    .iter()
                    .map(|metric| metric.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompileTime => write!(f, "compile-time"),
            Self::ObjectSize => write!(f, "object-size"),
            Self::MemoryUsage => write!(f, "memory-usage"),
            Self::Runtime => write!(f, "runtime"),
            Self::AsmSize => write!(f, "asm-size"),
            Self::TestInfo => write!(f, "test-info"),
        }
    }
}
