//!
//! The object size extractor.
//!

use crate::context::Context;
use crate::error::Error;
use crate::extractor::metric::Metric;
use crate::extractor::IExtractor;
use crate::parser::sized_listing;
use crate::parser::sized_listing::Selector;
use crate::record::object_size::ObjectSize as Record;
use crate::store::IResultStore;
use crate::table::Table;

///
/// The object size extractor.
///
/// Without a flag, every profile is a `size<TAB>name<TAB>type` listing of the build tree,
/// and only ELF binaries are counted.
/// With a flag, the profile directory holds a `<flag>.txt` listing of the binaries only.
///
#[derive(Debug)]
pub struct ObjectSize {
    /// The records sorted by test and profile.
    pub records: Vec<Record>,
}

impl ObjectSize {
    ///
    /// Walks the `object-size` directory of the store.
    ///
    pub fn new(store: &dyn IResultStore, context: &Context) -> Result<Self, Error> {
        let directory = Metric::ObjectSize.directory();
        let entries = super::walk(store, directory, &context.profiles, |_| true)?;

        let mut records = Vec::with_capacity(entries.len());
        for entry in entries.into_iter() {
            let (location, selector) = match context.flag.as_deref() {
                Some(flag) => (
                    entry.location.join(format!("{flag}.txt").as_str()),
                    Selector::Untagged,
                ),
                None => (entry.location, Selector::Elf),
            };
            let text = store.read(&location)?;
            tracing::debug!("Parsing {location}");
            let size =
                sized_listing::parse(text.as_str(), store.path(&location).as_path(), selector)?;
            records.push(Record {
                test: entry.test,
                profile: entry.profile,
                size,
            });
        }
        records.sort_by(|a, b| (&a.test, &a.profile).cmp(&(&b.test, &b.profile)));

        Ok(Self { records })
    }
}

impl IExtractor for ObjectSize {
    fn metric(&self) -> Metric {
        Metric::ObjectSize
    }

    fn table(&self) -> Table {
        Table::from_records(self.records.iter())
    }
}
