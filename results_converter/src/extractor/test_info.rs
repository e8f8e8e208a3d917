//!
//! The test information extractor.
//!

use crate::context::Context;
use crate::error::Error;
use crate::extractor::metric::Metric;
use crate::extractor::IExtractor;
use crate::parser::definition;
use crate::parser::definition::Definition;
use crate::parser::sized_listing;
use crate::parser::sized_listing::Selector;
use crate::record::test_info::TestInfo as Record;
use crate::store::location::Location;
use crate::store::IResultStore;
use crate::table::Table;

///
/// The test information extractor.
///
/// Joins the source line count from the object size listings with the test definitions.
///
#[derive(Debug)]
pub struct TestInfo {
    /// The records sorted by test.
    pub records: Vec<Record>,
}

impl TestInfo {
    ///
    /// Walks the `object-size` directory of `results` and looks the tests up in `definitions`.
    ///
    /// The line count is taken from the type-tagged listing of the reference profile, or of the
    /// first profile if the reference one is missing. The flag layouts carry no type tags, so
    /// their line count is unknown. A test without a definition gets an empty version and description.
    ///
    pub fn new(
        results: &dyn IResultStore,
        definitions: &dyn IResultStore,
        context: &Context,
    ) -> Result<Self, Error> {
        let directory = Metric::TestInfo.directory();

        let mut records = Vec::new();
        for test in results.list_tests(directory)?.into_iter() {
            let profiles = context
                .profiles
                .resolve(results.list_profiles(directory, test.as_str())?);
            let listing = profiles
                .iter()
                .find(|(profile, _)| profile == &context.reference)
                .or_else(|| profiles.first())
                .map(|(_, subdirectory)| {
                    Location::new(directory)
                        .join(test.as_str())
                        .join(subdirectory.as_str())
                });
            let loc = match listing {
                Some(location) if results.is_file(&location) => {
                    let text = results.read(&location)?;
                    Some(sized_listing::parse(
                        text.as_str(),
                        results.path(&location).as_path(),
                        Selector::Source,
                    )?)
                }
                _ => {
                    tracing::warn!("No type-tagged object size listing for {test}, LOC is unknown");
                    None
                }
            };

            let location = Location::new(context.namespace.as_str())
                .join(test.as_str())
                .join(definition::FILE_NAME);
            let definition = if definitions.is_file(&location) {
                let text = definitions.read(&location)?;
                tracing::debug!("Parsing {location}");
                Definition::parse(text.as_str(), definitions.path(&location).as_path())?
            } else {
                tracing::warn!("No test definition found for {test} at {location}");
                Definition::default()
            };

            records.push(Record {
                name: test,
                version: definition.version(),
                description: definition.description(),
                loc,
            });
        }
        records.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self { records })
    }
}

impl IExtractor for TestInfo {
    fn metric(&self) -> Metric {
        Metric::TestInfo
    }

    fn table(&self) -> Table {
        Table::from_records(self.records.iter())
    }
}
