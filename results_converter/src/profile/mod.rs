//!
//! The compared profiles and their raw data subdirectories.
//!

pub mod mapping;

use std::collections::BTreeMap;

use self::mapping::Mapping;

///
/// The compared profiles and their raw data subdirectories.
///
/// Without explicit mappings, every discovered subdirectory is a profile of the same name.
///
#[derive(Debug, Default, Clone)]
pub struct Profiles {
    /// Profile names mapped to subdirectory names.
    mappings: BTreeMap<String, String>,
}

impl Profiles {
    ///
    /// Adds a profile to subdirectory mapping.
    ///
    pub fn insert(&mut self, mapping: Mapping) {
        self.mappings.insert(mapping.name, mapping.directory);
    }

    ///
    /// Resolves discovered subdirectories into `(profile, subdirectory)` pairs.
    ///
    /// Mapped profiles whose subdirectory was not discovered are left out.
    ///
    pub fn resolve(&self, directories: Vec<String>) -> Vec<(String, String)> {
        if self.mappings.is_empty() {
            return directories
                .into_iter()
                .map(|directory| (directory.clone(), directory))
                .collect();
        }

        self.mappings
            .iter()
            .filter(|(_, directory)| directories.contains(directory))
            .map(|(name, directory)| (name.to_owned(), directory.to_owned()))
            .collect()
    }
}

impl FromIterator<Mapping> for Profiles {
    fn from_iter<I: IntoIterator<Item = Mapping>>(iter: I) -> Self {
        let mut profiles = Self::default();
        for mapping in iter {
            profiles.insert(mapping);
        }
        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::Mapping;
    use super::Profiles;

    #[test]
    fn identity_without_mappings() {
        let profiles = Profiles::default();
        assert_eq!(
            profiles.resolve(vec!["base".to_owned(), "byte".to_owned()]),
            vec![
                ("base".to_owned(), "base".to_owned()),
                ("byte".to_owned(), "byte".to_owned())
            ]
        );
    }

    #[test]
    fn explicit_mappings() {
        let profiles: Profiles = ["base=gcc-13", "byte=gcc-13-bc"]
            .into_iter()
            .map(|mapping| mapping.parse::<Mapping>().expect("Valid mapping"))
            .collect();
        assert_eq!(
            profiles.resolve(vec!["gcc-13-bc".to_owned(), "other".to_owned()]),
            vec![("byte".to_owned(), "gcc-13-bc".to_owned())]
        );
    }
}
