//!
//! The metric result extractors.
//!

#[cfg(test)]
mod tests;

pub mod asm_size;
pub mod compile_time;
pub mod memory_usage;
pub mod metric;
pub mod object_size;
pub mod runtime;
pub mod test_info;

use std::path::Path;

use crate::context::Context;
use crate::error::Error;
use crate::profile::Profiles;
use crate::store::location::Location;
use crate::store::IResultStore;
use crate::table::Table;

use self::asm_size::AsmSize;
use self::compile_time::CompileTime;
use self::memory_usage::MemoryUsage;
use self::metric::Metric;
use self::object_size::ObjectSize;
use self::runtime::Runtime;
use self::test_info::TestInfo;

///
/// The metric result extractor.
///
/// The records are computed once by the constructor and kept in memory.
///
pub trait IExtractor {
    ///
    /// The extracted metric kind.
    ///
    fn metric(&self) -> Metric;

    ///
    /// Returns the long-format result table.
    ///
    fn table(&self) -> Table;

    ///
    /// Writes the long-format result table, overwriting the file.
    ///
    fn write(&self, path: &Path) -> Result<(), Error> {
        tracing::info!("Writing {} results to {path:?}", self.metric());
        self.table().write(path)
    }

    ///
    /// Prints a human-readable summary of the results, if the metric has one.
    ///
    fn print_summary(&self, _output: &mut dyn std::io::Write) -> anyhow::Result<()> {
        Ok(())
    }

    ///
    /// Replaces the long-format table at `path` with its wide-format version.
    ///
    fn merge(&self, path: &Path) -> Result<(), Error> {
        self.metric().merge(path)
    }
}

///
/// Runs the extractor of a metric.
///
/// `definitions` is the test definition store, only used by the test information extractor.
///
pub fn extract(
    metric: Metric,
    results: &dyn IResultStore,
    definitions: &dyn IResultStore,
    context: &Context,
) -> Result<Box<dyn IExtractor>, Error> {
    tracing::info!("Extracting {metric} results");
    Ok(match metric {
        Metric::CompileTime => Box::new(CompileTime::new(results, context)?),
        Metric::ObjectSize => Box::new(ObjectSize::new(results, context)?),
        Metric::MemoryUsage => Box::new(MemoryUsage::new(results, context)?),
        Metric::Runtime => Box::new(Runtime::new(results, context)?),
        Metric::AsmSize => Box::new(AsmSize::new(results, context)?),
        Metric::TestInfo => Box::new(TestInfo::new(results, definitions, context)?),
    })
}

///
/// A profile of a test with its raw data location.
///
#[derive(Debug, Clone)]
pub struct ProfileEntry {
    /// The test name.
    pub test: String,
    /// The profile name.
    pub profile: String,
    /// The profile raw data location.
    pub location: Location,
}

///
/// Walks a metric category directory and returns every test profile in walk order.
///
/// `is_profile` filters the discovered test subdirectories before the profile mapping is applied.
///
pub fn walk<F>(
    store: &dyn IResultStore,
    category: &str,
    profiles: &Profiles,
    is_profile: F,
) -> Result<Vec<ProfileEntry>, Error>
where
    F: Fn(&Location) -> bool,
{
    let mut entries = Vec::new();
    for test in store.list_tests(category)?.into_iter() {
        let test_location = Location::new(category).join(test.as_str());
        let directories: Vec<String> = store
            .list_profiles(category, test.as_str())?
            .into_iter()
            .filter(|directory| is_profile(&test_location.join(directory.as_str())))
            .collect();
        for (profile, directory) in profiles.resolve(directories).into_iter() {
            entries.push(ProfileEntry {
                test: test.clone(),
                profile,
                location: test_location.join(directory.as_str()),
            });
        }
    }
    Ok(entries)
}

///
/// Averages the values read from every run file of a directory.
///
/// Returns `NaN` if the directory has no run files.
///
pub fn average_over_runs<F>(
    store: &dyn IResultStore,
    directory: &Location,
    mut parse: F,
) -> Result<f64, Error>
where
    F: FnMut(&str, &Path) -> Result<f64, Error>,
{
    let runs = store.list(directory)?;
    if runs.is_empty() {
        return Ok(f64::NAN);
    }

    let mut total = 0.0;
    for run in runs.iter() {
        let location = directory.join(run.as_str());
        let text = store.read(&location)?;
        tracing::debug!("Parsing {location}");
        total += parse(text.as_str(), store.path(&location).as_path())?;
    }
    Ok(total / (runs.len() as f64))
}
