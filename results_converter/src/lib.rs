//!
//! The benchmark results converter library.
//!

pub mod chart;
pub mod context;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod output;
pub mod parser;
pub mod profile;
pub mod proportion;
pub mod record;
pub mod statistics;
pub mod store;
pub mod table;
pub mod util;

pub use crate::chart::svg::Svg as SvgChartRenderer;
pub use crate::chart::Chart;
pub use crate::chart::IChartRenderer;
pub use crate::context::Context;
pub use crate::error::Error;
pub use crate::extractor::asm_size::diff::Diff as AsmDiff;
pub use crate::extractor::asm_size::AsmSize as AsmSizeExtractor;
pub use crate::extractor::compile_time::CompileTime as CompileTimeExtractor;
pub use crate::extractor::extract;
pub use crate::extractor::memory_usage::MemoryUsage as MemoryUsageExtractor;
pub use crate::extractor::metric::Metric;
pub use crate::extractor::object_size::ObjectSize as ObjectSizeExtractor;
pub use crate::extractor::runtime::Runtime as RuntimeExtractor;
pub use crate::extractor::test_info::TestInfo as TestInfoExtractor;
pub use crate::extractor::IExtractor;
pub use crate::output::format::Format as TestInfoFormat;
pub use crate::output::report::Report as TestInfoReport;
pub use crate::output::xlsx::Xlsx;
pub use crate::profile::mapping::Mapping as ProfileMapping;
pub use crate::profile::Profiles;
pub use crate::proportion::Proportion;
pub use crate::statistics::Statistics;
pub use crate::store::file_system::FileSystem as FileSystemStore;
pub use crate::store::location::Location;
pub use crate::store::memory::Memory as MemoryStore;
pub use crate::store::IResultStore;
pub use crate::table::Table;
