//!
//! The normalized metric records.
//!

pub mod asm_function;
pub mod compile_time;
pub mod memory_usage;
pub mod object_size;
pub mod runtime;
pub mod test_info;

///
/// A normalized metric record, one row of a result table.
///
pub trait IRecord {
    /// The table header.
    const HEADER: &'static [&'static str];

    ///
    /// Returns the table row fields.
    ///
    fn fields(&self) -> Vec<String>;
}

///
/// Formats a measured value for a table cell.
///
/// Integral values print without a fractional part, a missing value prints as `nan`.
///
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    value.to_string()
}
