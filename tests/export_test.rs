//! PDFレポート出力の統合テスト

use mullai::export::{self, pdf};
use mullai_common::{evaluate, Coordinate, Decision, Purpose};
use tempfile::tempdir;

fn approved_decision() -> Decision {
    evaluate(Coordinate::new(20.0, 80.0), Purpose::Commercial)
}

#[test]
fn test_report_with_decision() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("claim.pdf");

    let decision = approved_decision();
    let result = pdf::generate_report_pdf(Some(&decision), &output_path);

    assert!(result.is_ok(), "PDF generation failed: {:?}", result.err());
    assert!(output_path.exists(), "PDF file was not created");

    let metadata = std::fs::metadata(&output_path).expect("metadata failed");
    assert!(metadata.len() > 0, "PDF file is empty");
}

#[test]
fn test_report_without_decision() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("empty.pdf");

    let result = pdf::generate_report_pdf(None, &output_path);

    assert!(result.is_ok(), "PDF generation failed: {:?}", result.err());
    assert!(output_path.exists());
}

#[test]
fn test_report_file_is_pdf() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("header.pdf");

    pdf::generate_report_pdf(Some(&approved_decision()), &output_path).expect("PDF generation failed");

    let bytes = std::fs::read(&output_path).expect("read back failed");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_into_directory_uses_default_name() {
    let dir = tempdir().expect("Failed to create temp dir");

    let path = export::export_report(Some(&approved_decision()), dir.path(), "report.pdf")
        .expect("export failed");

    assert_eq!(path, dir.path().join("report.pdf"));
    assert!(path.exists());
}

#[test]
fn test_export_creates_missing_parent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("nested").join("decision.pdf");

    let path = export::export_report(None, &target, "report.pdf").expect("export failed");

    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn test_saved_decision_round_trip_to_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("decision.json");

    let decision = evaluate(Coordinate::new(10.0, 70.0), Purpose::Protected);
    std::fs::write(&json_path, serde_json::to_string_pretty(&decision).unwrap()).unwrap();

    let content = std::fs::read_to_string(&json_path).unwrap();
    let loaded: Decision = serde_json::from_str(&content).unwrap();
    assert_eq!(loaded, decision);

    let path = export::export_report(Some(&loaded), dir.path(), "report.pdf").expect("export failed");
    assert!(path.exists());
}
