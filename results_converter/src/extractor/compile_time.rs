//!
//! The compile time extractor.
//!

use crate::context::Context;
use crate::error::Error;
use crate::extractor::metric::Metric;
use crate::extractor::IExtractor;
use crate::parser::integer_sum;
use crate::record::compile_time::CompileTime as Record;
use crate::store::IResultStore;
use crate::table::Table;

///
/// The compile time extractor.
///
/// Without a flag, every profile is a file of per-step build times which are summed up.
/// With a flag, the `<profile>/<flag>/` directory holds one file per build run,
/// and the time is the sum of all of them divided by the number of runs.
///
#[derive(Debug)]
pub struct CompileTime {
    /// The records sorted by test and profile.
    pub records: Vec<Record>,
}

impl CompileTime {
    ///
    /// Walks the `compile-time` directory of the store.
    ///
    pub fn new(store: &dyn IResultStore, context: &Context) -> Result<Self, Error> {
        let directory = Metric::CompileTime.directory();
        let entries = super::walk(store, directory, &context.profiles, |_| true)?;

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries.into_iter() {
            let time = match context.flag.as_deref() {
                Some(flag) => super::average_over_runs(
                    store,
                    &entry.location.join(flag),
                    |text, path| Ok(integer_sum::parse(text, path)? as f64),
                )?,
                None => {
                    let text = store.read(&entry.location)?;
                    tracing::debug!("Parsing {}", entry.location);
                    integer_sum::parse(text.as_str(), store.path(&entry.location).as_path())?
                        as f64
                }
            };
            records.push(Record {
                test: entry.test,
                profile: entry.profile,
                time,
            });
        }
        records.sort_by(|a, b| (&a.test, &a.profile).cmp(&(&b.test, &b.profile)));

        Ok(Self { records })
    }
}

impl IExtractor for CompileTime {
    fn metric(&self) -> Metric {
        Metric::CompileTime
    }

    fn table(&self) -> Table {
        Table::from_records(self.records.iter())
    }
}
