//!
//! The raw result file parser tests.
//!

use std::path::Path;

use crate::error::Error;
use crate::proportion::Proportion;
use crate::record::runtime::Runtime;

use super::asm_listing;
use super::bare_test_name;
use super::composite;
use super::definition::Definition;
use super::integer_sum;
use super::memory_usage;
use super::sized_listing;
use super::sized_listing::Selector;

const COMPOSITE: &str = r#"<?xml version="1.0"?>
<PhoronixTestSuite>
  <Generated>
    <Title>byte-vs-base</Title>
  </Generated>
  <System>
    <Identifier>base</Identifier>
  </System>
  <Result>
    <Identifier>local/compress-zstd-1.6.0</Identifier>
    <Title>Zstd Compression</Title>
    <Description>Compression Level: 3 - Compression Speed</Description>
    <Scale>MB/s</Scale>
    <Proportion>HIB</Proportion>
    <Data>
      <Entry>
        <Identifier>base</Identifier>
        <Value>2.0</Value>
        <RawString>1.0:2.0:3.0</RawString>
      </Entry>
      <Entry>
        <Identifier>byte</Identifier>
        <Value></Value>
      </Entry>
    </Data>
  </Result>
  <Result>
    <Identifier>pts/sqlite-2.2.0</Identifier>
    <Description></Description>
    <Scale>Seconds</Scale>
    <Proportion>LIB</Proportion>
    <Data>
      <Entry>
        <Identifier>byte</Identifier>
        <Value>12.5</Value>
      </Entry>
    </Data>
  </Result>
</PhoronixTestSuite>
"#;

#[test]
fn integer_sum() {
    let path = Path::new("compile-time/zlib/base");
    assert_eq!(integer_sum::parse("100\n200\n300", path).ok(), Some(600));
    assert_eq!(integer_sum::parse("100\n200\n300\n", path).ok(), Some(600));
    assert_eq!(integer_sum::parse("", path).ok(), Some(0));
}

#[test]
fn integer_sum_invalid_line() {
    let path = Path::new("compile-time/zlib/base");
    match integer_sum::parse("100\n2x0\n300", path) {
        Err(Error::Parsing { line, path, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(path, Path::new("compile-time/zlib/base"));
        }
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn sized_listing_elf_and_source() {
    let path = Path::new("object-size/zlib/base");
    let text = "1024\tfoo.o\tELF 64-bit LSB executable\n\
                1024\tfoo.c\tC source, ASCII text\n\
                512\tbar.cpp\tC++ source, ASCII text\n\
                total 2560\n\
                7\tREADME\tASCII text\n";

    assert_eq!(
        sized_listing::parse(text, path, Selector::Elf).ok(),
        Some(1024)
    );
    assert_eq!(
        sized_listing::parse(text, path, Selector::Source).ok(),
        Some(1536)
    );
}

#[test]
fn sized_listing_untagged() {
    let path = Path::new("object-size/zlib/base/O2.txt");
    let text = "100\tlibz.so\n200\tminigzip\n300\tfoo\tELF\n";

    assert_eq!(
        sized_listing::parse(text, path, Selector::Untagged).ok(),
        Some(300)
    );
}

#[test]
fn sized_listing_invalid_size() {
    let path = Path::new("object-size/zlib/base");
    let result = sized_listing::parse("12k\tfoo.o\tELF\n", path, Selector::Elf);
    assert!(matches!(result, Err(Error::Parsing { line: 1, .. })));
}

#[test]
fn maximum_resident_set_size() {
    let path = Path::new("memory-usage/zlib/base");
    let text = "\tCommand being timed: \"make\"\n\
                \tMaximum resident set size (kbytes): 4096\n\
                \tMaximum resident set size (kbytes): 8192\n\
                \tExit status: 0\n";

    assert_eq!(
        memory_usage::maximum_resident_set_size(text, path).ok(),
        Some(Some(8192))
    );
    assert_eq!(
        memory_usage::maximum_resident_set_size("Exit status: 0", path).ok(),
        Some(None)
    );
}

#[test]
fn digit_lines() {
    let path = Path::new("memory-usage/zlib/base/O2/run-1");
    let pattern = memory_usage::digit_line_pattern();
    let text = "make: Entering directory\n4096\n 128 \n12 kB\n";

    assert_eq!(
        memory_usage::digit_lines(text, path, &pattern).ok(),
        Some(vec![4096, 128])
    );
}

#[test]
fn composite_report() {
    let path = Path::new("test-results/zstd/base/composite.xml");
    let records = composite::parse(COMPOSITE, path).expect("Valid report");

    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.test, "compress-zstd-1.6.0");
    assert_eq!(
        first.description,
        "Compression Level: 3 - Compression Speed"
    );
    assert_eq!(first.scale, "MB/s");
    assert_eq!(first.proportion, Proportion::HIB);
    assert_eq!(first.profile, "base");
    assert_eq!(first.value, 2.0);
    let statistics = first.statistics.expect("Raw samples are present");
    assert_eq!(statistics.mean, 2.0);
    assert!((statistics.std_dev - (2.0f64 / 3.0).sqrt()).abs() < 1e-9);

    let second = &records[1];
    assert_eq!(second.profile, "byte");
    assert!(second.value.is_nan());
    assert!(second.statistics.is_none());

    let third = &records[2];
    assert_eq!(third.test, "pts/sqlite-2.2.0");
    assert_eq!(third.description, Runtime::DEFAULT_DESCRIPTION);
    assert_eq!(third.proportion, Proportion::LIB);
    assert_eq!(third.value, 12.5);
}

#[test]
fn composite_invalid_value() {
    let path = Path::new("composite.xml");
    let text = COMPOSITE.replace("<Value>12.5</Value>", "<Value>fast</Value>");
    let result = composite::parse(text.as_str(), path);
    assert!(matches!(
        result,
        Err(Error::InvalidField { field: "Value", .. })
    ));
}

#[test]
fn composite_invalid_proportion() {
    let path = Path::new("composite.xml");
    let text = COMPOSITE.replace("<Proportion>LIB</Proportion>", "<Proportion>MIB</Proportion>");
    let result = composite::parse(text.as_str(), path);
    assert!(matches!(
        result,
        Err(Error::InvalidField {
            field: "Proportion",
            ..
        })
    ));
}

#[test]
fn raw_string() {
    let path = Path::new("composite.xml");
    assert_eq!(
        composite::parse_raw_string("1.5:2.5::3", path).ok(),
        Some(vec![1.5, 2.5, 3.0])
    );
    assert!(composite::parse_raw_string("1.5:x", path).is_err());
}

#[test]
fn asm_listing() {
    let path = Path::new("asm-diff/zlib/base/O2/sizes.txt");
    let text = "120 deflate\n48   inflate_fast\n16 std::vector<int>::size() const\n";

    assert_eq!(
        asm_listing::parse(text, path).ok(),
        Some(vec![
            ("deflate".to_owned(), 120),
            ("inflate_fast".to_owned(), 48),
            ("std::vector<int>::size() const".to_owned(), 16),
        ])
    );
    assert!(matches!(
        asm_listing::parse("deflate\n", path),
        Err(Error::Parsing { line: 1, .. })
    ));
    assert_eq!(asm_listing::count("deflate\ninflate\n\n"), 2);
}

#[test]
fn test_definition() {
    let path = Path::new("pts/zlib-1.0.0/test-definition.xml");
    let text = r#"<?xml version="1.0"?>
<PhoronixTestSuite>
  <TestInformation>
    <Title>zlib</Title>
    <AppVersion>1.3.1</AppVersion>
    <Description>This test measures zlib compression.</Description>
  </TestInformation>
  <TestProfile>
    <Version>1.0.0</Version>
  </TestProfile>
</PhoronixTestSuite>
"#;
    let definition = Definition::parse(text, path).expect("Valid definition");

    assert_eq!(definition.version(), "1.3.1");
    assert_eq!(
        definition.description(),
        "This test measures zlib compression."
    );
}

#[test]
fn bare_names() {
    assert_eq!(bare_test_name("pts/build-gcc-1.4.0"), "build-gcc");
    assert_eq!(bare_test_name("compress-zstd-1.6.0"), "compress-zstd");
    assert_eq!(bare_test_name("sqlite"), "sqlite");
}
