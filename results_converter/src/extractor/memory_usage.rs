//!
//! The peak memory usage extractor.
//!

use crate::context::Context;
use crate::error::Error;
use crate::extractor::metric::Metric;
use crate::extractor::IExtractor;
use crate::parser::memory_usage;
use crate::record::memory_usage::MemoryUsage as Record;
use crate::store::IResultStore;
use crate::table::Table;

///
/// The peak memory usage extractor.
///
#[derive(Debug)]
pub struct MemoryUsage {
    /// The records sorted by test and profile.
    pub records: Vec<Record>,
}

impl MemoryUsage {
    ///
    /// Walks the `memory-usage` directory of the store.
    ///
    /// Without a flag, every profile is a `time -v` output file.
    /// With a flag, the `<profile>/<flag>/` directory holds one output file per build run.
    /// The reported figure is the largest number found in all runs divided by the number of runs.
    ///
    pub fn new(store: &dyn IResultStore, context: &Context) -> Result<Self, Error> {
        let directory = Metric::MemoryUsage.directory();
        let entries = super::walk(store, directory, &context.profiles, |_| true)?;
        let pattern = memory_usage::digit_line_pattern();

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries.into_iter() {
            let usage = match context.flag.as_deref() {
                Some(flag) => {
                    let runs_location = entry.location.join(flag);
                    let runs = store.list(&runs_location)?;
                    let mut figures = Vec::new();
                    for run in runs.iter() {
                        let location = runs_location.join(run.as_str());
                        let text = store.read(&location)?;
                        tracing::debug!("Parsing {location}");
                        figures.extend(memory_usage::digit_lines(
                            text.as_str(),
                            store.path(&location).as_path(),
                            &pattern,
                        )?);
                    }
                    match figures.into_iter().max() {
                        Some(maximum) if !runs.is_empty() => {
                            maximum as f64 / (runs.len() as f64)
                        }
                        _ => f64::NAN,
                    }
                }
                None => {
                    let text = store.read(&entry.location)?;
                    tracing::debug!("Parsing {}", entry.location);
                    memory_usage::maximum_resident_set_size(
                        text.as_str(),
                        store.path(&entry.location).as_path(),
                    )?
                    .map(|value| value as f64)
                    .unwrap_or(f64::NAN)
                }
            };
            if usage.is_nan() {
                tracing::warn!("No memory usage reported for {} in {}", entry.profile, entry.test);
            }
            records.push(Record {
                test: entry.test,
                profile: entry.profile,
                usage,
            });
        }
        records.sort_by(|a, b| (&a.test, &a.profile).cmp(&(&b.test, &b.profile)));

        Ok(Self { records })
    }
}

impl IExtractor for MemoryUsage {
    fn metric(&self) -> Metric {
        Metric::MemoryUsage
    }

    fn table(&self) -> Table {
        Table::from_records(self.records.iter())
    }
}
