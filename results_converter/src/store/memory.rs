//!
//! The in-memory raw result store.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::Error;
use crate::store::location::Location;
use crate::store::IResultStore;

///
/// The in-memory raw result store.
///
/// Files are keyed by their `/`-separated relative path, directories are implied.
///
#[derive(Debug, Default, Clone)]
pub struct Memory {
    /// The file contents.
    files: BTreeMap<String, String>,
}

impl Memory {
    ///
    /// Adds a file.
    ///
    pub fn insert(&mut self, path: &str, content: &str) -> &mut Self {
        self.files.insert(path.to_owned(), content.to_owned());
        self
    }

    ///
    /// Returns the key prefix of the directory entries.
    ///
    fn prefix(location: &Location) -> String {
        format!("{location}/")
    }

    ///
    /// Creates a not-found error for the location.
    ///
    fn not_found(location: &Location) -> Error {
        Error::Reading {
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "no such entry"),
            path: location.to_path_buf(),
        }
    }
}

impl IResultStore for Memory {
    fn list(&self, location: &Location) -> Result<Vec<String>, Error> {
        let prefix = Self::prefix(location);
        let names: BTreeSet<String> = self
            .files
            .keys()
            .filter_map(|path| path.strip_prefix(prefix.as_str()))
            .filter_map(|relative| relative.split('/').next())
            .map(|name| name.to_owned())
            .collect();
        if names.is_empty() {
            return Err(Self::not_found(location));
        }
        Ok(names.into_iter().collect())
    }

    fn read(&self, location: &Location) -> Result<String, Error> {
        self.files
            .get(location.to_string().as_str())
            .cloned()
            .ok_or_else(|| Self::not_found(location))
    }

    fn is_directory(&self, location: &Location) -> bool {
        let prefix = Self::prefix(location);
        self.files.keys().any(|path| path.starts_with(prefix.as_str()))
    }

    fn is_file(&self, location: &Location) -> bool {
        self.files.contains_key(location.to_string().as_str())
    }

    fn path(&self, location: &Location) -> PathBuf {
        location.to_path_buf()
    }
}
