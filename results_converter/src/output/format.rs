//!
//! The test information report format.
//!

///
/// The test information report format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Markdown document with a pipe table.
    #[default]
    Markdown,
    /// Comma-separated values with a header.
    Csv,
    /// JSON array of objects.
    Json,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            string => anyhow::bail!(
                "Unknown report format `{string}`. Supported formats: {}",
                [Self::Markdown, Self::Csv, Self::Json]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Markdown => write!(f, "markdown"),
            Format::Csv => write!(f, "csv"),
            Format::Json => write!(f, "json"),
        }
    }
}
