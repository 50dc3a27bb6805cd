// Rust guideline compliant 2026-10-16

//! Integration tests for compressed file I/O.

use std::fs;
use std::io::{BufRead, Read, Write};
use std::path::Path;
use tempfile::TempDir;
use toolbelt_core::{zcreate, zopen, Codec};

const TEXT: &str = "hello world\n";

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("test.txt"), TEXT).unwrap();

    let mut gz = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    gz.write_all(TEXT.as_bytes()).unwrap();
    fs::write(dir.join("test.gz"), gz.finish().unwrap()).unwrap();

    let mut bz = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    bz.write_all(TEXT.as_bytes()).unwrap();
    fs::write(dir.join("test.bz2"), bz.finish().unwrap()).unwrap();

    let mut xz = xz2::write::XzEncoder::new(Vec::new(), 6);
    xz.write_all(TEXT.as_bytes()).unwrap();
    fs::write(dir.join("test.xz"), xz.finish().unwrap()).unwrap();
}

#[test]
fn test_zopen_reads_every_format() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    for name in ["test.txt", "test.gz", "test.bz2", "test.xz"] {
        let mut text = String::new();
        zopen(temp_dir.path().join(name))
            .unwrap()
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text.trim(), "hello world", "reading {name}");
    }
}

#[test]
fn test_zopen_unknown_extension_is_raw() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.zst");
    fs::write(&path, b"\x28\xb5\x2f\xfdraw").unwrap();

    let mut bytes = Vec::new();
    zopen(&path).unwrap().read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes, b"\x28\xb5\x2f\xfdraw");
}

#[test]
fn test_zcreate_output_decodes_with_codec() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    for name in ["out.gz", "out.bz2", "out.xz", "out.txt"] {
        let path = dir.join(name);
        let mut writer = zcreate(&path, 9).unwrap();
        assert_eq!(writer.codec(), Codec::from_path(&path));
        for i in 0..100 {
            writeln!(writer, "line {i}").unwrap();
        }
        writer.finish().unwrap();
    }

    let raw = fs::read(dir.join("out.txt")).unwrap();
    let expected: String = (0..100).map(|i| format!("line {i}\n")).collect();
    assert_eq!(String::from_utf8(raw).unwrap(), expected);

    let mut gz = String::new();
    flate2::read::GzDecoder::new(fs::File::open(dir.join("out.gz")).unwrap())
        .read_to_string(&mut gz)
        .unwrap();
    assert_eq!(gz, expected);

    let mut bz = String::new();
    bzip2::read::BzDecoder::new(fs::File::open(dir.join("out.bz2")).unwrap())
        .read_to_string(&mut bz)
        .unwrap();
    assert_eq!(bz, expected);

    let mut xz = String::new();
    xz2::read::XzDecoder::new(fs::File::open(dir.join("out.xz")).unwrap())
        .read_to_string(&mut xz)
        .unwrap();
    assert_eq!(xz, expected);
}

#[test]
fn test_zopen_lines_iterate() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lines.gz");
    let mut writer = zcreate(&path, 6).unwrap();
    writer.write_all(b"a\nb\nc\n").unwrap();
    writer.finish().unwrap();

    let lines: Vec<String> = zopen(&path).unwrap().lines().map(|l| l.unwrap()).collect();
    assert_eq!(lines, ["a", "b", "c"]);
}

#[test]
fn test_zopen_reads_concatenated_xz_streams() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("joined.xz");

    let mut bytes = Vec::new();
    for part in ["first\n", "second\n"] {
        let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
        encoder.write_all(part.as_bytes()).unwrap();
        bytes.extend(encoder.finish().unwrap());
    }
    fs::write(&path, bytes).unwrap();

    let mut text = String::new();
    zopen(&path).unwrap().read_to_string(&mut text).unwrap();
    assert_eq!(text, "first\nsecond\n");
}
