//! End-to-end tests for a pipeline run over a directory of raw files
//!
//! ## Test Strategy
//!
//! 1. **Happy path**: configuration + raw files produce every requested artifact
//! 2. **Fatal configuration**: invalid header or shared files abort before parsing
//! 3. **Per-item isolation**: unreadable files and failing exporters are reported
//!    without stopping the rest of the run

use dctext_core::{DctextError, Pipeline, RunConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

struct Fixture {
    _dir: TempDir,
    input: PathBuf,
    output: PathBuf,
    config: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("sample_data");
        let output = dir.path().join("output");
        let config = dir.path().join("config");
        fs::create_dir_all(&input).unwrap();
        fs::create_dir_all(&config).unwrap();
        Self {
            _dir: dir,
            input,
            output,
            config,
        }
    }

    fn raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.input.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn conf(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.input, &self.output)
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn test_run_produces_requested_artifacts() {
    let fx = Fixture::new();
    let header = fx.conf("header.txt", "title\ncreator\n");
    let shared = fx.conf("shared.csv", "collection,LibA\n");
    fx.raw("b_typee.txt", "Typee\nHerman Melville\n");
    fx.raw("a_moby.txt", "Moby Dick\nHerman Melville\n");

    let config = fx
        .run_config()
        .with_header_config(header)
        .with_shared_fields(shared)
        .with_format("csv")
        .with_format("json");

    let report = Pipeline::run(config).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.parsed, 2);
    let formats: Vec<_> = report.exports.iter().map(|e| e.format.as_str()).collect();
    assert_eq!(formats, vec!["txt", "csv", "json"]);

    let csv = read(&fx.output.join("export.csv"));
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows[0], "id,file,title,creator,collection");
    // sorted by file name before ids are assigned
    assert!(rows[1].starts_with("1,") && rows[1].contains("Moby Dick"));
    assert!(rows[2].starts_with("2,") && rows[2].contains("Typee"));

    assert!(fx.output.join("export.txt").exists());
    assert!(fx.output.join("export.json").exists());
}

#[test]
fn test_default_schema_without_header_config() {
    let fx = Fixture::new();
    fx.raw("one.txt", "Moby Dick\nHerman Melville\nWhales\n");

    let report = Pipeline::run(fx.run_config().with_format("csv")).unwrap();
    assert_eq!(report.parsed, 1);

    let csv = read(&fx.output.join("export.csv"));
    assert!(csv.starts_with("id,file,title,creator,subject,description,"));
}

#[test]
fn test_export_name_is_configurable() {
    let fx = Fixture::new();
    fx.raw("one.txt", "Moby Dick\n");

    Pipeline::run(fx.run_config().with_export_name("wallace")).unwrap();
    assert!(fx.output.join("wallace.txt").exists());
}

#[test]
fn test_empty_input_directory_exports_empty_collection() {
    let fx = Fixture::new();

    let report = Pipeline::run(fx.run_config().with_format("csv")).unwrap();
    assert_eq!(report.parsed, 0);
    assert!(report.is_clean());

    let csv = read(&fx.output.join("export.csv"));
    assert_eq!(csv.lines().count(), 1, "only the header row");
}

// =============================================================================
// Fatal configuration
// =============================================================================

#[test]
fn test_empty_header_config_aborts() {
    let fx = Fixture::new();
    let header = fx.conf("header.txt", "\n\n");
    fx.raw("one.txt", "Moby Dick\n");

    let err = Pipeline::run(fx.run_config().with_header_config(header)).unwrap_err();
    assert!(matches!(err, DctextError::Config(_)));
    assert!(!fx.output.exists(), "nothing is exported after a fatal error");
}

#[test]
fn test_duplicate_header_label_aborts() {
    let fx = Fixture::new();
    let header = fx.conf("header.txt", "title\ncreator\ntitle\n");

    assert!(Pipeline::new(fx.run_config().with_header_config(header)).is_err());
}

#[test]
fn test_missing_header_config_aborts() {
    let fx = Fixture::new();
    let config = fx.run_config().with_header_config(fx.config.join("absent.txt"));

    assert!(Pipeline::new(config).is_err());
}

#[test]
fn test_malformed_shared_line_aborts() {
    let fx = Fixture::new();
    let shared = fx.conf("shared.csv", "collection,LibA\npublisher\n");

    assert!(Pipeline::new(fx.run_config().with_shared_fields(shared)).is_err());
}

// =============================================================================
// Per-item isolation
// =============================================================================

#[test]
fn test_malformed_file_is_skipped_and_ids_stay_contiguous() {
    let fx = Fixture::new();
    fx.raw("a.txt", "First\n");
    fs::write(fx.input.join("b.bin"), [0xff, 0xfe, 0x00, 0x81]).unwrap();
    fx.raw("c.txt", "Third\n");

    let config = fx.run_config().with_format("csv");
    let report = Pipeline::run(config).unwrap();

    assert_eq!(report.parsed, 2);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].path.ends_with("b.bin"));
    assert!(!report.is_clean());

    let csv = read(&fx.output.join("export.csv"));
    assert!(csv.contains("\n2,") && csv.contains("Third"));
}

#[test]
fn test_ingest_reports_unavailable_file() {
    let fx = Fixture::new();
    let mut pipeline = Pipeline::new(fx.run_config()).unwrap();

    assert!(pipeline.ingest(&fx.input.join("missing.txt")).is_err());
    assert_eq!(pipeline.skipped().len(), 1);
    assert!(pipeline.collection().is_empty());
}

#[test]
fn test_unsupported_format_does_not_block_others() {
    let fx = Fixture::new();
    fx.raw("one.txt", "Moby Dick\n");

    let config = fx.run_config().with_format("bibtex").with_format("csv");
    let report = Pipeline::run(config).unwrap();

    let bibtex = report.exports.iter().find(|e| e.format == "bibtex").unwrap();
    assert!(!bibtex.is_success());
    assert!(fx.output.join("export.csv").exists());
    assert!(fx.output.join("export.txt").exists());
}

#[test]
fn test_unwritable_destination_is_reported() {
    let fx = Fixture::new();
    fx.raw("one.txt", "Moby Dick\n");
    // a regular file where the output directory should be
    let blocked = fx.config.join("blocked");
    fs::write(&blocked, "").unwrap();

    let report = Pipeline::run(RunConfig::new(&fx.input, &blocked)).unwrap();
    assert_eq!(report.parsed, 1);
    assert!(report.exports.iter().all(|e| !e.is_success()));
}

#[test]
fn test_aliases_do_not_duplicate_artifacts() {
    let fx = Fixture::new();
    fx.raw("one.txt", "Moby Dick\n");

    let config = fx.run_config().with_format("mrk").with_format("marc");
    let report = Pipeline::run(config).unwrap();
    assert_eq!(report.exports.len(), 2, "txt + one mrk");
}
