//!
//! The result table tests.
//!

use std::path::Path;

use crate::error::Error;
use crate::record::compile_time::CompileTime;
use crate::record::object_size::ObjectSize;

use super::pivot::pivot;
use super::Table;

fn object_sizes() -> Vec<ObjectSize> {
    vec![
        ObjectSize {
            test: "pts/zlib-1.0.0".to_owned(),
            profile: "base".to_owned(),
            size: 1024,
        },
        ObjectSize {
            test: "pts/zlib-1.0.0".to_owned(),
            profile: "byte".to_owned(),
            size: 896,
        },
        ObjectSize {
            test: "pts/zstd-1.6.0".to_owned(),
            profile: "base".to_owned(),
            size: 2048,
        },
    ]
}

#[test]
fn write_and_read() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join("csv").join("object-size-results.csv");

    let table = Table::from_records(object_sizes().iter());
    table.write(path.as_path()).expect("Writable");

    let text = std::fs::read_to_string(path.as_path()).expect("Readable");
    assert_eq!(
        text,
        "Test;Profile;Size\n\
         pts/zlib-1.0.0;base;1024\n\
         pts/zlib-1.0.0;byte;896\n\
         pts/zstd-1.6.0;base;2048\n"
    );
    assert_eq!(Table::read(path.as_path()).expect("Valid table"), table);
}

#[test]
fn delimiter_escaping() {
    let mut table = Table::new(&["Test", "Description"]);
    table.rows.push(vec![
        "compress-zstd".to_owned(),
        "Level: 3; Speed".to_owned(),
    ]);

    let text = table.to_string();
    assert_eq!(
        text,
        "Test;Description\ncompress-zstd;Level: 3\\; Speed\n"
    );
    assert_eq!(
        Table::parse(text.as_str(), Path::new("runtime-results.csv")).expect("Valid table"),
        table
    );
}

#[test]
fn escape_characters_survive() {
    let mut table = Table::new(&["Test", "Function"]);
    table.rows.push(vec!["t\\".to_owned(), "f".to_owned()]);
    table
        .rows
        .push(vec!["a\\;b".to_owned(), "C:\\path\\".to_owned()]);

    let text = table.to_string();
    assert_eq!(
        text,
        "Test;Function\nt\\\\;f\na\\\\\\;b;C:\\\\path\\\\\n"
    );
    assert_eq!(
        Table::parse(text.as_str(), Path::new("asm-size-results.csv")).expect("Valid table"),
        table
    );
}

#[test]
fn lone_escape_is_literal() {
    let table = Table::parse("Test;Size\nx\\y;1\n", Path::new("object-size-results.csv"))
        .expect("Valid table");
    assert_eq!(table.rows, vec![vec!["x\\y", "1"]]);
}

#[test]
fn field_count_mismatch() {
    let text = "Test;Profile;Size\nzlib;base;1024\nzlib;byte\n";
    match Table::parse(text, Path::new("object-size-results.csv")) {
        Err(Error::Parsing { line, .. }) => assert_eq!(line, 3),
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn empty_table() {
    assert!(matches!(
        Table::parse("", Path::new("object-size-results.csv")),
        Err(Error::Parsing { line: 1, .. })
    ));
}

#[test]
fn pivot_missing_cell() {
    let path = Path::new("object-size-results.csv");
    let table = Table::from_records(object_sizes().iter());
    let wide = pivot(&table, &["Test"], "Profile", "Size", path).expect("Valid table");

    assert_eq!(wide.header, vec!["Test", "base", "byte"]);
    assert_eq!(
        wide.rows,
        vec![
            vec!["pts/zlib-1.0.0", "1024", "896"],
            vec!["pts/zstd-1.6.0", "2048", "nan"],
        ]
    );
}

#[test]
fn pivot_keeps_every_pair() {
    let path = Path::new("object-size-results.csv");
    let long = Table::from_records(object_sizes().iter());
    let wide = pivot(&long, &["Test"], "Profile", "Size", path).expect("Valid table");

    let mut pairs = Vec::new();
    for row in wide.rows.iter() {
        for (column, profile) in wide.header.iter().enumerate().skip(1) {
            if row[column] != "nan" {
                pairs.push(vec![row[0].clone(), profile.clone(), row[column].clone()]);
            }
        }
    }
    assert_eq!(pairs, long.rows);
}

#[test]
fn pivot_averages_duplicates() {
    let path = Path::new("compile-time-results.csv");
    let records = [
        CompileTime {
            test: "zlib".to_owned(),
            profile: "base".to_owned(),
            time: 100.0,
        },
        CompileTime {
            test: "zlib".to_owned(),
            profile: "base".to_owned(),
            time: 200.0,
        },
        CompileTime {
            test: "zlib".to_owned(),
            profile: "byte".to_owned(),
            time: f64::NAN,
        },
    ];
    let table = Table::from_records(records.iter());
    let wide = pivot(&table, &["Test"], "Profile", "Compile Time", path).expect("Valid table");

    assert_eq!(wide.rows, vec![vec!["zlib", "150", "nan"]]);
}

#[test]
fn pivot_missing_column() {
    let path = Path::new("object-size-results.csv");
    let table = Table::from_records(object_sizes().iter());
    assert!(matches!(
        pivot(&table, &["Test"], "Profile", "Compile Time", path),
        Err(Error::MissingColumn { .. })
    ));
}
