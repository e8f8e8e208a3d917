//!
//! The per-test assembly size difference between two profiles.
//!

use std::collections::BTreeMap;

use colored::Colorize;

use crate::record::IRecord;
use crate::util::btreemap::intersect_keys;

///
/// The per-test assembly size difference between the reference and candidate profiles.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    /// The test name.
    pub test: String,
    /// The candidate minus reference size of every function present in both profiles.
    pub deltas: BTreeMap<String, i64>,
    /// The sum of all deltas.
    pub total: i64,
    /// The function with the smallest delta.
    pub min: Option<(String, i64)>,
    /// The function with the largest delta.
    pub max: Option<(String, i64)>,
    /// The number of functions in the `all.txt` listing, if present.
    pub functions: Option<usize>,
    /// The number of functions in the `diff.txt` listing, if present.
    pub changed: Option<usize>,
}

impl Diff {
    ///
    /// Computes the difference over the functions present in both profiles.
    ///
    /// On ties, the minimum and maximum are the first function in name order.
    ///
    pub fn new(
        test: String,
        reference: BTreeMap<String, u64>,
        candidate: BTreeMap<String, u64>,
    ) -> Self {
        let deltas: BTreeMap<String, i64> = intersect_keys(reference, candidate)
            .map(|(function, reference, candidate)| {
                (function, candidate as i64 - reference as i64)
            })
            .collect();

        let mut min: Option<(&String, i64)> = None;
        let mut max: Option<(&String, i64)> = None;
        for (function, delta) in deltas.iter() {
            if min.map_or(true, |(_, value)| *delta < value) {
                min = Some((function, *delta));
            }
            if max.map_or(true, |(_, value)| *delta > value) {
                max = Some((function, *delta));
            }
        }
        let min = min.map(|(function, delta)| (function.to_owned(), delta));
        let max = max.map(|(function, delta)| (function.to_owned(), delta));

        Self {
            test,
            total: deltas.values().sum(),
            deltas,
            min,
            max,
            functions: None,
            changed: None,
        }
    }

    ///
    /// Sets the function counts of the test listings.
    ///
    pub fn with_counts(mut self, functions: Option<usize>, changed: Option<usize>) -> Self {
        self.functions = functions;
        self.changed = changed;
        self
    }

    ///
    /// Formats and colorizes a size delta. Smaller code is an improvement.
    ///
    fn format_delta(delta: i64) -> colored::ColoredString {
        let text = format!("{delta:+}");
        match delta.cmp(&0) {
            std::cmp::Ordering::Greater => text.bright_red(),
            std::cmp::Ordering::Equal => text.white(),
            std::cmp::Ordering::Less => text.green(),
        }
    }

    ///
    /// Prints the summary box of the difference.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write + ?Sized,
    {
        let count = |count: Option<usize>| {
            count
                .map(|count| count.to_string())
                .unwrap_or_else(|| "-".to_owned())
        };

        writeln!(w, "╔═╡ {} ╞═╡ {} ", "Assembly size".bright_white(), self.test.bright_white())?;
        writeln!(w, "║ {:24} {:>12}", "Functions".bright_white(), count(self.functions))?;
        writeln!(w, "║ {:24} {:>12}", "Changed".bright_white(), count(self.changed))?;
        writeln!(w, "║ {:24} {:>12}", "Common".bright_white(), self.deltas.len())?;
        writeln!(
            w,
            "║ {:24} {:>12}",
            "Total".bright_white(),
            Self::format_delta(self.total)
        )?;
        if let Some((function, delta)) = self.min.as_ref() {
            writeln!(
                w,
                "║ {:24} {:>12} {function}",
                "Best".bright_white(),
                Self::format_delta(*delta)
            )?;
        }
        if let Some((function, delta)) = self.max.as_ref() {
            writeln!(
                w,
                "║ {:24} {:>12} {function}",
                "Worst".bright_white(),
                Self::format_delta(*delta)
            )?;
        }
        writeln!(w, "╚═══════════════════════════════════════╝")?;

        Ok(())
    }
}

impl IRecord for Diff {
    const HEADER: &'static [&'static str] = &[
        "Test",
        "Functions",
        "Changed",
        "Common",
        "Total Delta",
        "Min Function",
        "Min Delta",
        "Max Function",
        "Max Delta",
    ];

    fn fields(&self) -> Vec<String> {
        let count = |count: Option<usize>| count.map(|count| count.to_string()).unwrap_or_default();
        let (min_function, min_delta) = match self.min.as_ref() {
            Some((function, delta)) => (function.to_owned(), delta.to_string()),
            None => (String::new(), String::new()),
        };
        let (max_function, max_delta) = match self.max.as_ref() {
            Some((function, delta)) => (function.to_owned(), delta.to_string()),
            None => (String::new(), String::new()),
        };
        vec![
            self.test.clone(),
            count(self.functions),
            count(self.changed),
            self.deltas.len().to_string(),
            self.total.to_string(),
            min_function,
            min_delta,
            max_function,
            max_delta,
        ]
    }
}
