mod support;

use schema2md::generator::document::{self, GeneratorOptions};
use schema2md::output::pipeline::{self, RunConfig, RunOutcome};
use schema2md::DocError;

/// Full pipeline over a representative export. This is the primary acceptance test.
#[test]
fn end_to_end_study_app_schema() {
    let rows = support::load_fixture_rows("study_app");
    let document = document::generate_document(&rows, &GeneratorOptions::default())
        .expect("fixture should render");

    insta::assert_snapshot!("study_app_schema_document", document.trim_end());
}

#[test]
fn run_writes_document_and_reports_counts() {
    let (dir, input) = support::stage_fixture("study_app", "schema2md_e2e_run");
    let output = dir.join("DATABASE_SCHEMA.md");
    let config = RunConfig {
        input,
        output: output.clone(),
        ..RunConfig::default()
    };

    let outcome = pipeline::run(&config).expect("run should succeed");

    let summary = match outcome {
        RunOutcome::Written(summary) => summary,
        other => panic!("expected Written, got {other:?}"),
    };
    assert_eq!(summary.functions, 2);
    assert_eq!(summary.tables, 3);
    assert_eq!(summary.columns, 7);
    assert_eq!(summary.triggers, 3);
    assert_eq!(summary.skipped_rows, 0);

    let written = std::fs::read_to_string(&output).expect("document should exist");
    let rows = support::load_fixture_rows("study_app");
    let expected = document::generate_document(&rows, &GeneratorOptions::default()).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn repeated_runs_produce_identical_documents() {
    let (dir, input) = support::stage_fixture("study_app", "schema2md_e2e_idempotent");
    let output = dir.join("DATABASE_SCHEMA.md");
    let config = RunConfig {
        input,
        output: output.clone(),
        ..RunConfig::default()
    };

    pipeline::run(&config).expect("first run should succeed");
    let first = std::fs::read(&output).unwrap();
    pipeline::run(&config).expect("second run should succeed");
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn check_mode_detects_stale_and_fresh_documents() {
    let (dir, input) = support::stage_fixture("study_app", "schema2md_e2e_check");
    let output = dir.join("DATABASE_SCHEMA.md");
    let mut config = RunConfig {
        input,
        output: output.clone(),
        check: true,
        ..RunConfig::default()
    };

    let outcome = pipeline::run(&config).expect("check should succeed");
    assert!(matches!(outcome, RunOutcome::Stale(_)), "{outcome:?}");
    assert!(!output.exists(), "check mode must not write the document");

    config.check = false;
    pipeline::run(&config).expect("write should succeed");

    config.check = true;
    let outcome = pipeline::run(&config).expect("check should succeed");
    assert!(matches!(outcome, RunOutcome::UpToDate(_)), "{outcome:?}");
    assert_eq!(outcome.summary().tables, 3);
}

#[test]
fn malformed_export_fails_before_touching_output() {
    let dir = support::unique_temp_dir("schema2md_e2e_malformed");
    let input = dir.join("schema_export.json");
    let output = dir.join("DATABASE_SCHEMA.md");
    std::fs::write(&input, r#"{"category": "Functions"}"#).unwrap();
    std::fs::write(&output, "existing document\n").unwrap();

    let err = pipeline::run(&RunConfig {
        input,
        output: output.clone(),
        ..RunConfig::default()
    })
    .expect_err("object top level should be rejected");

    assert!(matches!(err, DocError::Parse { .. }), "{err:?}");
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "existing document\n",
        "a parse failure must leave the destination untouched"
    );
}

#[test]
fn rejected_unknown_category_fails_before_touching_output() {
    let dir = support::unique_temp_dir("schema2md_e2e_unknown");
    let input = dir.join("schema_export.json");
    let output = dir.join("DATABASE_SCHEMA.md");
    std::fs::write(
        &input,
        r#"[{"category": "Table Columns", "table_name": "notes", "column_name": "id"},
            {"category": "Policies", "table_name": "notes", "column_name": "owner_only"}]"#,
    )
    .unwrap();

    let mut config = RunConfig {
        input,
        output: output.clone(),
        ..RunConfig::default()
    };
    config.options.unknown_categories = "error".parse().unwrap();

    let err = pipeline::run(&config).expect_err("unknown category should be rejected");
    assert_eq!(err.to_string(), "Unknown category 'Policies' at row 1");
    assert!(!output.exists());
}
