//!
//! The per-function assembly size extractor.
//!

pub mod diff;

use std::collections::BTreeMap;
use std::path::Path;

use crate::context::Context;
use crate::error::Error;
use crate::extractor::metric::Metric;
use crate::extractor::IExtractor;
use crate::parser::asm_listing;
use crate::record::asm_function::AsmFunction as Record;
use crate::store::location::Location;
use crate::store::IResultStore;
use crate::table::Table;

use self::diff::Diff;

///
/// The per-function assembly size extractor.
///
/// The layout is `asm-diff/<test>/<profile>/<flag>/sizes.txt`, with the
/// `asm-diff/<test>/<flag>/{all.txt,diff.txt}` function listings shared by the profiles.
///
#[derive(Debug)]
pub struct AsmSize {
    /// The records sorted by test, profile and function.
    pub records: Vec<Record>,
    /// The reference to candidate differences of the tests with both profiles.
    pub diffs: Vec<Diff>,
}

impl AsmSize {
    /// The per-profile function size listing file name.
    pub const SIZES_FILE_NAME: &'static str = "sizes.txt";
    /// The listing of all functions of a test.
    pub const ALL_FILE_NAME: &'static str = "all.txt";
    /// The listing of functions that differ between the profiles.
    pub const DIFF_FILE_NAME: &'static str = "diff.txt";
    /// The difference summary table file name.
    pub const SUMMARY_FILE_NAME: &'static str = "asm-diff-summary.csv";

    ///
    /// Walks the `asm-diff` directory of the store.
    ///
    pub fn new(store: &dyn IResultStore, context: &Context) -> Result<Self, Error> {
        let flag = context.flag.as_deref().ok_or(Error::MissingFlag {
            metric: Metric::AsmSize,
        })?;

        let directory = Metric::AsmSize.directory();
        let entries = super::walk(store, directory, &context.profiles, |location| {
            store.is_file(&location.join(flag).join(Self::SIZES_FILE_NAME))
        })?;

        let mut records = Vec::new();
        let mut sizes: BTreeMap<String, BTreeMap<String, BTreeMap<String, u64>>> =
            BTreeMap::new();
        for entry in entries.into_iter() {
            let location = entry.location.join(flag).join(Self::SIZES_FILE_NAME);
            let text = store.read(&location)?;
            tracing::debug!("Parsing {location}");
            let functions = asm_listing::parse(text.as_str(), store.path(&location).as_path())?;

            let profile_sizes = sizes
                .entry(entry.test.clone())
                .or_default()
                .entry(entry.profile.clone())
                .or_default();
            for (function, size) in functions.into_iter() {
                profile_sizes.insert(function.clone(), size);
                records.push(Record {
                    test: entry.test.clone(),
                    profile: entry.profile.clone(),
                    function,
                    size,
                });
            }
        }
        records.sort_by(|a, b| {
            (&a.test, &a.profile, &a.function).cmp(&(&b.test, &b.profile, &b.function))
        });

        let mut diffs = Vec::with_capacity(sizes.len());
        for (test, mut profiles) in sizes.into_iter() {
            let (reference, candidate) = match (
                profiles.remove(context.reference.as_str()),
                profiles.remove(context.candidate.as_str()),
            ) {
                (Some(reference), Some(candidate)) => (reference, candidate),
                _ => {
                    tracing::warn!(
                        "Skipping the assembly diff of {test}: profiles `{}` and `{}` are required",
                        context.reference,
                        context.candidate
                    );
                    continue;
                }
            };

            let listings = Location::new(directory).join(test.as_str()).join(flag);
            let functions = Self::count(store, &listings.join(Self::ALL_FILE_NAME))?;
            let changed = Self::count(store, &listings.join(Self::DIFF_FILE_NAME))?;
            diffs.push(Diff::new(test, reference, candidate).with_counts(functions, changed));
        }

        Ok(Self { records, diffs })
    }

    ///
    /// Returns the difference summary table.
    ///
    pub fn summary(&self) -> Table {
        Table::from_records(self.diffs.iter())
    }

    ///
    /// Counts the lines of a function listing, `None` if the listing does not exist.
    ///
    fn count(store: &dyn IResultStore, location: &Location) -> Result<Option<usize>, Error> {
        if !store.is_file(location) {
            return Ok(None);
        }
        let text = store.read(location)?;
        Ok(Some(asm_listing::count(text.as_str())))
    }
}

impl IExtractor for AsmSize {
    fn metric(&self) -> Metric {
        Metric::AsmSize
    }

    fn table(&self) -> Table {
        Table::from_records(self.records.iter())
    }

    fn write(&self, path: &Path) -> Result<(), Error> {
        tracing::info!("Writing {} results to {path:?}", self.metric());
        self.table().write(path)?;

        let summary_path = path.with_file_name(Self::SUMMARY_FILE_NAME);
        tracing::info!("Writing assembly diff summary to {summary_path:?}");
        self.summary().write(summary_path.as_path())
    }

    fn print_summary(&self, output: &mut dyn std::io::Write) -> anyhow::Result<()> {
        for diff in self.diffs.iter() {
            diff.write_all(output)?;
        }
        Ok(())
    }
}
