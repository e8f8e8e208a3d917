//!
//! The runtime performance extractor.
//!

use crate::context::Context;
use crate::error::Error;
use crate::extractor::metric::Metric;
use crate::extractor::IExtractor;
use crate::parser::composite;
use crate::record::runtime::Runtime as Record;
use crate::store::IResultStore;
use crate::table::Table;

///
/// The runtime performance extractor.
///
/// Every profile directory holds a `composite.xml` report. The profile names of the records
/// are taken from the report entries, not from the directory names.
///
#[derive(Debug)]
pub struct Runtime {
    /// The records sorted by test, profile and description.
    pub records: Vec<Record>,
}

impl Runtime {
    /// The composite report file name.
    pub const REPORT_FILE_NAME: &'static str = "composite.xml";

    ///
    /// Walks the `test-results` directory of the store.
    ///
    pub fn new(store: &dyn IResultStore, context: &Context) -> Result<Self, Error> {
        let directory = Metric::Runtime.directory();
        let entries = super::walk(store, directory, &context.profiles, |_| true)?;

        let mut records = Vec::new();
        for entry in entries.into_iter() {
            let location = entry.location.join(Self::REPORT_FILE_NAME);
            let text = store.read(&location)?;
            tracing::debug!("Parsing {location}");
            records.extend(composite::parse(
                text.as_str(),
                store.path(&location).as_path(),
            )?);
        }
        records.sort_by(|a, b| {
            (&a.test, &a.profile, &a.description).cmp(&(&b.test, &b.profile, &b.description))
        });

        Ok(Self { records })
    }
}

impl IExtractor for Runtime {
    fn metric(&self) -> Metric {
        Metric::Runtime
    }

    fn table(&self) -> Table {
        Table::from_records(self.records.iter())
    }
}
