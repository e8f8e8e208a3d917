//!
//! The report and workbook outputs.
//!


pub mod format;
pub mod report;
pub mod xlsx;
