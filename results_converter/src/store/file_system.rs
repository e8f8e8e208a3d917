//!
//! The raw result store backed by a results directory.
//!

use std::path::PathBuf;

use crate::error::Error;
use crate::store::location::Location;
use crate::store::IResultStore;

///
/// The raw result store backed by a results directory.
///
#[derive(Debug, Clone)]
pub struct FileSystem {
    /// The results directory.
    pub root: PathBuf,
}

impl FileSystem {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl IResultStore for FileSystem {
    fn list(&self, location: &Location) -> Result<Vec<String>, Error> {
        let path = self.path(location);
        if !path.is_dir() {
            return Err(Error::Reading {
                error: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
                path,
            });
        }

        let pattern = format!(
            "{}/*",
            glob::Pattern::escape(path.to_string_lossy().as_ref())
        );
        let entries = glob::glob(pattern.as_str()).map_err(|error| Error::Reading {
            error: std::io::Error::new(std::io::ErrorKind::InvalidInput, error.to_string()),
            path: path.clone(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|error| Error::Reading {
                path: error.path().to_path_buf(),
                error: error.into(),
            })?;
            if let Some(name) = entry.file_name() {
                names.push(name.to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, location: &Location) -> Result<String, Error> {
        let path = self.path(location);
        std::fs::read_to_string(path.as_path()).map_err(|error| Error::Reading { error, path })
    }

    fn is_directory(&self, location: &Location) -> bool {
        self.path(location).is_dir()
    }

    fn is_file(&self, location: &Location) -> bool {
        self.path(location).is_file()
    }

    fn path(&self, location: &Location) -> PathBuf {
        self.root.join(location.to_path_buf())
    }
}
