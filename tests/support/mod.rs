#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use schema2md::parser::export::{self, SchemaExportRow};

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn fixture_export_path(fixture: &str) -> PathBuf {
    fixture_dir(fixture).join("schema_export.json")
}

pub(crate) fn read_fixture_json(fixture: &str) -> String {
    std::fs::read_to_string(fixture_export_path(fixture))
        .expect("fixture export should be readable")
}

pub(crate) fn load_fixture_rows(fixture: &str) -> Vec<SchemaExportRow> {
    export::parse_export(&read_fixture_json(fixture)).expect("fixture export should parse")
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}

/// Copy a fixture export into a fresh temp dir and return (dir, export path).
pub(crate) fn stage_fixture(fixture: &str, prefix: &str) -> (PathBuf, PathBuf) {
    let dir = unique_temp_dir(prefix);
    let input = dir.join("schema_export.json");
    std::fs::write(&input, read_fixture_json(fixture)).expect("should stage fixture export");
    (dir, input)
}
