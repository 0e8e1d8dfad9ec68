pub mod pdf;

use crate::error::Result;
use mullai_common::Decision;
use std::path::{Path, PathBuf};

/// 出力先が既存ディレクトリ（または末尾が区切り文字）なら既定のファイル名を付ける
pub fn output_path_for_report(output: &Path, file_name: &str) -> PathBuf {
    let raw = output.as_os_str().to_string_lossy();
    if output.is_dir() || raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

/// 判定レポートを書き出して出力パスを返す
pub fn export_report(decision: Option<&Decision>, output: &Path, file_name: &str) -> Result<PathBuf> {
    let output_path = output_path_for_report(output, file_name);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    tracing::info!(path = %output_path.display(), has_decision = decision.is_some(), "writing report");
    pdf::generate_report_pdf(decision, &output_path)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path_for_report(dir.path(), "report.pdf");
        assert_eq!(path, dir.path().join("report.pdf"));
    }

    #[test]
    fn test_output_path_without_extension_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("claim");
        let path = output_path_for_report(&target, "report.pdf");
        assert_eq!(path, target);
    }

    #[test]
    fn test_output_path_trailing_separator() {
        let path = output_path_for_report(Path::new("out/"), "report.pdf");
        assert_eq!(path, Path::new("out/").join("report.pdf"));
    }

    #[test]
    fn test_output_path_with_extension() {
        let path = output_path_for_report(Path::new("out/claim.pdf"), "report.pdf");
        assert_eq!(path, PathBuf::from("out/claim.pdf"));
    }
}
