//!
//! The raw result store.
//!


pub mod file_system;
pub mod location;
pub mod memory;

use std::path::PathBuf;

use crate::error::Error;

use self::location::Location;

///
/// The raw result store.
///
/// Implemented by the results directory and by an in-memory fake.
///
pub trait IResultStore {
    ///
    /// Returns the names of the immediate children of a directory, in ascending order.
    ///
    fn list(&self, location: &Location) -> Result<Vec<String>, Error>;

    ///
    /// Reads a file as text.
    ///
    fn read(&self, location: &Location) -> Result<String, Error>;

    ///
    /// Whether the location is a directory.
    ///
    fn is_directory(&self, location: &Location) -> bool;

    ///
    /// Whether the location is a file.
    ///
    fn is_file(&self, location: &Location) -> bool;

    ///
    /// Returns the path used to identify the location in diagnostics.
    ///
    fn path(&self, location: &Location) -> PathBuf;

    ///
    /// Returns the test names of a metric category directory.
    ///
    fn list_tests(&self, category: &str) -> Result<Vec<String>, Error> {
        self.list(&Location::new(category))
    }

    ///
    /// Returns the profile subdirectory names of a test.
    ///
    fn list_profiles(&self, category: &str, test: &str) -> Result<Vec<String>, Error> {
        self.list(&Location::new(category).join(test))
    }
}
