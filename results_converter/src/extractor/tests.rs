//!
//! The metric result extractor tests.
//!

use std::collections::BTreeMap;

use crate::context::Context;
use crate::error::Error;
use crate::profile::mapping::Mapping;
use crate::proportion::Proportion;
use crate::store::memory::Memory;
use crate::table::Table;

use super::asm_size::diff::Diff;
use super::asm_size::AsmSize;
use super::compile_time::CompileTime;
use super::memory_usage::MemoryUsage;
use super::metric::Metric;
use super::object_size::ObjectSize;
use super::runtime::Runtime;
use super::test_info::TestInfo;
use super::IExtractor;

const COMPOSITE_BASE: &str = r#"<?xml version="1.0"?>
<PhoronixTestSuite>
  <Result>
    <Identifier>local/compress-zstd-1.6.0</Identifier>
    <Description>Level 3 - Decompression Speed</Description>
    <Scale>MB/s</Scale>
    <Proportion>HIB</Proportion>
    <Data>
      <Entry>
        <Identifier>base</Identifier>
        <Value>1500</Value>
        <RawString>1400:1500:1600</RawString>
      </Entry>
    </Data>
  </Result>
  <Result>
    <Identifier>local/compress-zstd-1.6.0</Identifier>
    <Description>Level 3 - Compression Speed</Description>
    <Scale>MB/s</Scale>
    <Proportion>HIB</Proportion>
    <Data>
      <Entry>
        <Identifier>base</Identifier>
        <Value>500</Value>
      </Entry>
    </Data>
  </Result>
</PhoronixTestSuite>
"#;

const COMPOSITE_BYTE: &str = r#"<?xml version="1.0"?>
<PhoronixTestSuite>
  <Result>
    <Identifier>local/compress-zstd-1.6.0</Identifier>
    <Description>Level 3 - Compression Speed</Description>
    <Scale>MB/s</Scale>
    <Proportion>HIB</Proportion>
    <Data>
      <Entry>
        <Identifier>byte</Identifier>
        <Value></Value>
      </Entry>
    </Data>
  </Result>
</PhoronixTestSuite>
"#;

const DEFINITION: &str = r#"<?xml version="1.0"?>
<PhoronixTestSuite>
  <TestInformation>
    <Title>Zlib</Title>
    <AppVersion>1.3.1</AppVersion>
    <Description>Compression; level 6</Description>
  </TestInformation>
</PhoronixTestSuite>
"#;

fn flagged() -> Context {
    Context::new(Some("O2".to_owned()))
}

#[test]
fn compile_time_sums_steps() {
    let mut store = Memory::default();
    store
        .insert("compile-time/zstd-1.6.0/byte", "10\n20\n")
        .insert("compile-time/zlib-1.0.0/byte", "100\n100\n")
        .insert("compile-time/zlib-1.0.0/base", "100\n200\n300\n");

    let extractor = CompileTime::new(&store, &Context::default()).expect("Valid results");
    assert_eq!(
        extractor.table().to_string(),
        "Test;Profile;Compile Time\n\
         zlib-1.0.0;base;600\n\
         zlib-1.0.0;byte;200\n\
         zstd-1.6.0;byte;30\n"
    );
}

#[test]
fn compile_time_averages_runs() {
    let mut store = Memory::default();
    store
        .insert("compile-time/zlib-1.0.0/base/O2/run-1", "1000\n")
        .insert("compile-time/zlib-1.0.0/base/O2/run-2", "2000\n1000\n")
        .insert("compile-time/zlib-1.0.0/base/O3/run-1", "7\n");

    let extractor = CompileTime::new(&store, &flagged()).expect("Valid results");
    assert_eq!(extractor.records.len(), 1);
    assert_eq!(extractor.records[0].time, 2000.0);
}

#[test]
fn compile_time_invalid_line() {
    let mut store = Memory::default();
    store.insert("compile-time/zlib-1.0.0/base", "100\nfast\n");

    match CompileTime::new(&store, &Context::default()) {
        Err(Error::Parsing { path, line, .. }) => {
            assert_eq!(line, 2);
            assert!(path.ends_with("zlib-1.0.0/base"));
        }
        result => panic!("Unexpected result: {result:?}"),
    }
}

#[test]
fn object_size_counts_elf_only() {
    let mut store = Memory::default();
    store
        .insert(
            "object-size/zlib-1.0.0/base",
            "1024\tlibz.so\tELF 64-bit LSB shared object\n\
             1024\tzlib.c\tC source, ASCII text\n\
             512\tminigzip\tELF 64-bit LSB executable\n",
        )
        .insert("object-size/zlib-1.0.0/byte", "total 8\n");

    let extractor = ObjectSize::new(&store, &Context::default()).expect("Valid results");
    assert_eq!(extractor.records[0].size, 1536);
    assert_eq!(extractor.records[1].size, 0);
}

#[test]
fn object_size_flag_listing() {
    let mut store = Memory::default();
    store
        .insert("object-size/zlib-1.0.0/base/O2.txt", "100\tlibz.so\n28\tminigzip\n")
        .insert("object-size/zlib-1.0.0/base/O3.txt", "1\tlibz.so\n");

    let extractor = ObjectSize::new(&store, &flagged()).expect("Valid results");
    assert_eq!(extractor.records[0].size, 128);
}

#[test]
fn memory_usage_maximum_rss() {
    let mut store = Memory::default();
    store
        .insert(
            "memory-usage/zlib-1.0.0/base",
            "\tMaximum resident set size (kbytes): 4096\n\
             \tMaximum resident set size (kbytes): 8192\n",
        )
        .insert("memory-usage/zlib-1.0.0/byte", "Exit status: 0\n");

    let extractor = MemoryUsage::new(&store, &Context::default()).expect("Valid results");
    assert_eq!(extractor.records[0].usage, 8192.0);
    assert!(extractor.records[1].usage.is_nan());
    assert_eq!(
        extractor.table().rows[1],
        vec!["zlib-1.0.0", "byte", "nan"]
    );
}

#[test]
fn memory_usage_runs() {
    let mut store = Memory::default();
    store
        .insert("memory-usage/zlib-1.0.0/base/O2/run-1", "make: done\n4096\n100\n")
        .insert("memory-usage/zlib-1.0.0/base/O2/run-2", "2048\n");

    let extractor = MemoryUsage::new(&store, &flagged()).expect("Valid results");
    assert_eq!(extractor.records[0].usage, 2048.0);
}

#[test]
fn runtime_records() {
    let mut store = Memory::default();
    store
        .insert("test-results/zstd/byte/composite.xml", COMPOSITE_BYTE)
        .insert("test-results/zstd/base/composite.xml", COMPOSITE_BASE);

    let extractor = Runtime::new(&store, &Context::default()).expect("Valid results");
    let records = extractor.records.as_slice();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].profile, "base");
    assert_eq!(records[0].description, "Level 3 - Compression Speed");
    assert_eq!(records[1].description, "Level 3 - Decompression Speed");
    assert_eq!(records[1].proportion, Proportion::HIB);
    assert!(records[1].statistics.is_some());
    assert_eq!(records[2].profile, "byte");
    assert!(records[2].value.is_nan());

    assert_eq!(
        extractor.table().rows[0],
        vec![
            "compress-zstd-1.6.0",
            "Level 3 - Compression Speed",
            "MB/s",
            "HIB",
            "base",
            "500",
            "nan",
            "nan"
        ]
    );
}

#[test]
fn asm_size_diff() {
    let mut store = Memory::default();
    store
        .insert("asm-diff/zlib-1.0.0/base/O2/sizes.txt", "100 f\n50 g\n")
        .insert("asm-diff/zlib-1.0.0/byte/O2/sizes.txt", "120 f\n50 g\n")
        .insert("asm-diff/zlib-1.0.0/O2/all.txt", "f\ng\nh\n")
        .insert("asm-diff/zlib-1.0.0/O2/diff.txt", "f\n");

    let extractor = AsmSize::new(&store, &flagged()).expect("Valid results");
    assert_eq!(extractor.records.len(), 4);
    assert_eq!(extractor.records[0].profile, "base");
    assert_eq!(extractor.records[0].function, "f");

    assert_eq!(extractor.diffs.len(), 1);
    let diff = &extractor.diffs[0];
    assert_eq!(
        diff.deltas,
        BTreeMap::from([("f".to_owned(), 20), ("g".to_owned(), 0)])
    );
    assert_eq!(diff.total, 20);
    assert_eq!(diff.min, Some(("g".to_owned(), 0)));
    assert_eq!(diff.max, Some(("f".to_owned(), 20)));
    assert_eq!(diff.functions, Some(3));
    assert_eq!(diff.changed, Some(1));

    assert_eq!(
        extractor.summary().to_string(),
        "Test;Functions;Changed;Common;Total Delta;Min Function;Min Delta;Max Function;Max Delta\n\
         zlib-1.0.0;3;1;2;20;g;0;f;20\n"
    );
}

#[test]
fn asm_size_single_profile_has_no_diff() {
    let mut store = Memory::default();
    store.insert("asm-diff/zlib-1.0.0/base/O2/sizes.txt", "100 f\n");

    let extractor = AsmSize::new(&store, &flagged()).expect("Valid results");
    assert_eq!(extractor.records.len(), 1);
    assert!(extractor.diffs.is_empty());
}

#[test]
fn asm_size_requires_flag() {
    let store = Memory::default();
    assert!(matches!(
        AsmSize::new(&store, &Context::default()),
        Err(Error::MissingFlag {
            metric: Metric::AsmSize
        })
    ));
}

#[test]
fn asm_diff_ties_pick_first_function() {
    let reference = BTreeMap::from([("a".to_owned(), 10), ("b".to_owned(), 10)]);
    let candidate = BTreeMap::from([("a".to_owned(), 15), ("b".to_owned(), 15)]);
    let diff = Diff::new("zlib".to_owned(), reference, candidate);

    assert_eq!(diff.min, Some(("a".to_owned(), 5)));
    assert_eq!(diff.max, Some(("a".to_owned(), 5)));
}

#[test]
fn asm_diff_summary_box() {
    let reference = BTreeMap::from([("f".to_owned(), 100)]);
    let candidate = BTreeMap::from([("f".to_owned(), 90)]);
    let diff = Diff::new("zlib".to_owned(), reference, candidate);

    let mut output = Vec::new();
    diff.write_all(&mut output).expect("Always valid");
    let output = String::from_utf8(output).expect("Always valid");
    assert!(output.contains("zlib"));
    assert!(output.contains("-10"));
}

#[test]
fn test_info_joins_definitions() {
    let mut results = Memory::default();
    results
        .insert(
            "object-size/zlib-1.0.0/base",
            "120\tzlib.c\tC source, ASCII text\n\
             30\tzlib.h\tC source, ASCII text\n\
             1024\tlibz.so\tELF 64-bit LSB shared object\n",
        )
        .insert("object-size/zlib-1.0.0/byte", "1\tzlib.c\tC source, ASCII text\n")
        .insert("object-size/zstd-1.6.0/byte", "1024\tzstd\tELF\n");
    let mut definitions = Memory::default();
    definitions.insert("pts/zlib-1.0.0/test-definition.xml", DEFINITION);

    let extractor =
        TestInfo::new(&results, &definitions, &Context::default()).expect("Valid results");
    let records = extractor.records.as_slice();
    assert_eq!(records[0].name, "zlib-1.0.0");
    assert_eq!(records[0].version, "1.3.1");
    assert_eq!(records[0].loc, Some(150));
    assert_eq!(records[1].version, "");
    assert_eq!(records[1].loc, Some(0));

    assert_eq!(
        extractor.table().to_string(),
        "Test;Version;Description;LOC\n\
         zlib-1.0.0;1.3.1;Compression\\; level 6;150\n\
         zstd-1.6.0;;;0\n"
    );
}

#[test]
fn test_info_flag_listing_has_unknown_loc() {
    let mut results = Memory::default();
    results
        .insert("object-size/zlib-1.0.0/base/O2.txt", "100\tlibz.so\n28\tminigzip\n")
        .insert("object-size/zlib-1.0.0/byte/O2.txt", "96\tlibz.so\n");
    let mut definitions = Memory::default();
    definitions.insert("pts/zlib-1.0.0/test-definition.xml", DEFINITION);

    let extractor = TestInfo::new(&results, &definitions, &flagged()).expect("Valid results");
    assert_eq!(extractor.records.len(), 1);
    assert_eq!(extractor.records[0].version, "1.3.1");
    assert_eq!(extractor.records[0].loc, None);
    assert_eq!(
        extractor.table().to_string(),
        "Test;Version;Description;LOC\n\
         zlib-1.0.0;1.3.1;Compression\\; level 6;\n"
    );
}

#[test]
fn test_info_merge_is_unsupported() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join("test-info.csv");
    assert!(matches!(
        Metric::TestInfo.merge(path.as_path()),
        Err(Error::UnsupportedOperation {
            operation: "merge",
            metric: Metric::TestInfo
        })
    ));
}

#[test]
fn profile_mapping() {
    let mut store = Memory::default();
    store
        .insert("compile-time/zlib-1.0.0/gcc-13", "100\n")
        .insert("compile-time/zlib-1.0.0/gcc-13-bc", "90\n")
        .insert("compile-time/zlib-1.0.0/clang", "80\n");
    let mut context = Context::default();
    context.profiles = ["base=gcc-13", "byte=gcc-13-bc"]
        .into_iter()
        .map(|mapping| mapping.parse::<Mapping>().expect("Valid mapping"))
        .collect();

    let extractor = CompileTime::new(&store, &context).expect("Valid results");
    assert_eq!(
        extractor
            .records
            .iter()
            .map(|record| (record.profile.as_str(), record.time))
            .collect::<Vec<_>>(),
        vec![("base", 100.0), ("byte", 90.0)]
    );
}

#[test]
fn write_then_merge() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory
        .path()
        .join("csv")
        .join(Metric::ObjectSize.table_file_name());

    let mut store = Memory::default();
    store
        .insert("object-size/zlib-1.0.0/base", "1000\tlibz.so\tELF\n")
        .insert("object-size/zlib-1.0.0/byte", "900\tlibz.so\tELF\n")
        .insert("object-size/zstd-1.6.0/base", "2000\tzstd\tELF\n");
    let extractor = ObjectSize::new(&store, &Context::default()).expect("Valid results");
    extractor.write(path.as_path()).expect("Writable");
    extractor.merge(path.as_path()).expect("Mergeable");

    let merged = Table::read(path.as_path()).expect("Readable");
    assert_eq!(merged.header, vec!["Test", "base", "byte"]);
    assert_eq!(
        merged.rows,
        vec![
            vec!["zlib-1.0.0", "1000", "900"],
            vec!["zstd-1.6.0", "2000", "nan"],
        ]
    );

    extractor.merge(path.as_path()).expect("Already merged");
    assert_eq!(Table::read(path.as_path()).expect("Readable"), merged);
}

#[test]
fn asm_size_writes_summary() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join(Metric::AsmSize.table_file_name());

    let mut store = Memory::default();
    store
        .insert("asm-diff/zlib-1.0.0/base/O2/sizes.txt", "100 f\n")
        .insert("asm-diff/zlib-1.0.0/byte/O2/sizes.txt", "80 f\n");
    let extractor = AsmSize::new(&store, &flagged()).expect("Valid results");
    extractor.write(path.as_path()).expect("Writable");

    let summary = Table::read(directory.path().join(AsmSize::SUMMARY_FILE_NAME).as_path())
        .expect("Readable");
    assert_eq!(summary.rows, vec![vec!["zlib-1.0.0", "", "", "1", "-20", "f", "-20", "f", "-20"]]);
}

#[test]
fn metric_names() {
    for metric in Metric::ALL.into_iter() {
        assert_eq!(metric.to_string().parse::<Metric>().ok(), Some(metric));
    }
    assert!("binary-size".parse::<Metric>().is_err());
}
