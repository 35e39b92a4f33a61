//! Integration tests for linting filter files on disk.

use std::fs;

use filterlint_core::{
    Catalog, Document, LineKind, LineParser, LintReport, LintSettings, Severity, TextBuffer,
};
use tempfile::tempdir;

const FILTER: &str = "\
# Currency
Show # valuables
    Class Currency
    BaseType \"Exalted Orb\" \"Mirror of Kalandra\"
    SetTextColor #FFD700
    SetBorderColor 255 215 0 # gold
    PlayAlertSound 1 300

Hide
    ItemLevel < 60
    Rarity Normal Magic
    SetFontSize 18
";

#[test]
fn test_lint_realistic_filter() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("loot.filter");
    fs::write(&path, FILTER).expect("failed to write filter");

    let catalog = Catalog::builtin();
    let parser = LineParser::new(&catalog);
    let mut document = Document::open(&path).expect("failed to open filter");
    let results = document.lint(&parser).expect("lint failed");

    assert_eq!(results.len(), 12);
    assert!(matches!(results[0].kind, LineKind::Comment(_)));
    assert!(matches!(results[7].kind, LineKind::Empty));

    let report = LintReport::from_results(&results);
    assert_eq!(report.errors, 1, "only the second rarity should fail");
    assert_eq!(report.warnings, 0);

    let bad = &results[10];
    assert!(bad.invalid);
    assert_eq!(bad.diagnostics[0].excerpt, "Trailing text for a filter rule.");
    assert_eq!(
        bad.diagnostics[0].file.as_deref(),
        Some(path.display().to_string().as_str())
    );

    assert_eq!(document.line_text(4), Some("    SetTextColor 255 215 0"));
}

#[test]
fn test_fix_and_save_round_trip() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("loot.filter");
    fs::write(&path, "Show extra\r\n  SetBackgroundColor #00000080\r\n")
        .expect("failed to write filter");

    let catalog = Catalog::builtin();
    let parser = LineParser::new(&catalog);
    let mut document = Document::open(&path).expect("failed to open filter");
    let results = document.lint(&parser).expect("lint failed");
    let applied = document.apply_fixes(&results).expect("failed to apply fixes");
    assert_eq!(applied, 1);
    document.save().expect("failed to save");

    let saved = fs::read_to_string(&path).expect("failed to read back");
    assert_eq!(saved, "Show # extra\r\n  SetBackgroundColor 0 0 0 128\r\n");
}

#[test]
fn test_catalog_file_with_whitelist() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let catalog_path = temp_dir.path().join("catalog.json");
    fs::write(
        &catalog_path,
        r#"{"classes": ["Rings"], "bases": [], "whitelistClasses": ["Incubator"]}"#,
    )
    .expect("failed to write catalog");

    let catalog = Catalog::load(&catalog_path).expect("failed to load catalog");
    let parser = LineParser::new(&catalog);
    let mut document = Document::parse("Show\nClass Rings Incubator Amulets\n");
    let results = document.lint(&parser).expect("lint failed");

    let errors: Vec<_> = results[1].errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].range.start, 22);
}

#[test]
fn test_warnings_toggle_applies_to_documents() {
    let catalog = Catalog::builtin();
    let parser = LineParser::new(&catalog).with_settings(LintSettings {
        enable_warnings: false,
    });
    let mut document = Document::parse("Show whatever\nHide also ignored\n");
    let results = document.lint(&parser).expect("lint failed");
    assert!(results
        .iter()
        .flat_map(|r| &r.diagnostics)
        .all(|d| d.severity != Severity::Warning));
    assert!(results.iter().all(|r| r.diagnostics.is_empty()));
}
