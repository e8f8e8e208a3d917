//!
//! Summary statistics of repeated measurements.
//!


///
/// Summary statistics of repeated measurements.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Statistics {
    /// The arithmetic mean.
    pub mean: f64,
    /// The population standard deviation.
    pub std_dev: f64,
    /// The relative standard deviation in percent.
    pub rsd: f64,
}

impl Statistics {
    ///
    /// Computes the statistics of the samples.
    ///
    /// An empty sequence yields zeros everywhere.
    ///
    pub fn new(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let count = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / count;
        let variance = samples
            .iter()
            .map(|sample| (sample - mean).powi(2))
            .sum::<f64>()
            / count;
        let std_dev = variance.sqrt();
        let rsd = if mean == 0.0 {
            0.0
        } else {
            std_dev / mean * 100.0
        };

        Self { mean, std_dev, rsd }
    }
}

impl From<&[f64]> for Statistics {
    fn from(samples: &[f64]) -> Self {
        Self::new(samples)
    }
}
