//!
//! The direction in which a runtime metric improves.
//!

use std::str::FromStr;

///
/// The direction in which a runtime metric improves.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Proportion {
    /// Higher is better.
    HIB,
    /// Lower is better.
    LIB,
}

impl Proportion {
    ///
    /// Returns the percentage improvement of the candidate over the reference.
    ///
    /// For `HIB` the difference is relative to the candidate, for `LIB` to the reference.
    ///
    pub fn improvement(&self, reference: f64, candidate: f64) -> f64 {
        match self {
            Self::HIB => (reference - candidate) / candidate * 100.0,
            Self::LIB => (candidate - reference) / reference * 100.0,
        }
    }
}

impl FromStr for Proportion {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim() {
            "HIB" => Ok(Self::HIB),
            "LIB" => Ok(Self::LIB),
            string => anyhow::bail!(
                "Unknown proportion `{string}`. Supported proportions: {}",
                [Self::HIB, Self::LIB]
                    .into_iter()
                    .map(|proportion| proportion.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Proportion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HIB => write!(f, "HIB"),
            Self::LIB => write!(f, "LIB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Proportion;

    #[test]
    fn higher_is_better() {
        assert_eq!(Proportion::HIB.improvement(100.0, 80.0), 25.0);
    }

    #[test]
    fn lower_is_better() {
        assert_eq!(Proportion::LIB.improvement(100.0, 80.0), -20.0);
    }

    #[test]
    fn parse() {
        assert_eq!("HIB".parse::<Proportion>().ok(), Some(Proportion::HIB));
        assert_eq!(" LIB\n".parse::<Proportion>().ok(), Some(Proportion::LIB));
        assert!("MIB".parse::<Proportion>().is_err());
    }
}
