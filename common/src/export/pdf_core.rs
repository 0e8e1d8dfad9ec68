//! PDF report core utilities.
//!
//! 判定結果をレポートの行（テキストと位置）に変換する。バイト列の生成は呼び出し側。

use crate::layout::ReportLayout;
use crate::types::Decision;

pub const REPORT_TITLE: &str = "Decision Report";
pub const NO_DECISION_TEXT: &str = "No decision available";

/// レポートの1行（位置はページ上端・左端からのmm）
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    pub left_mm: f32,
    pub top_mm: f32,
}

/// レポートの行を構築（タイトル → 判定・理由・目的・座標、または判定なし）
pub fn build_report_lines(decision: Option<&Decision>, layout: &ReportLayout) -> Vec<ReportLine> {
    let body: Vec<String> = match decision {
        Some(d) => vec![
            format!("Decision: {}", d.verdict),
            format!("Reason: {}", d.reason),
            format!("Purpose: {}", d.purpose),
            format!("Coordinates: {}", d.coordinate),
        ],
        None => vec![NO_DECISION_TEXT.to_string()],
    };

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(ReportLine {
        text: REPORT_TITLE.to_string(),
        left_mm: layout.left_mm,
        top_mm: layout.title_top_mm,
    });
    lines.extend(body.into_iter().enumerate().map(|(i, text)| ReportLine {
        text,
        left_mm: layout.left_mm,
        top_mm: layout.body_line_top_mm(i),
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::types::{Coordinate, Purpose};

    #[test]
    fn test_report_lines_with_decision() {
        let decision = evaluate(Coordinate::new(20.0, 80.0), Purpose::Commercial);
        let lines = build_report_lines(Some(&decision), &ReportLayout::default());

        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Decision Report",
                "Decision: Claim Approved",
                "Reason: Land suitable for commercial use",
                "Purpose: Commercial",
                "Coordinates: 20, 80",
            ]
        );
        let tops: Vec<f32> = lines.iter().map(|l| l.top_mm).collect();
        assert_eq!(tops, vec![20.0, 40.0, 50.0, 60.0, 70.0]);
        assert!(lines.iter().all(|l| l.left_mm == 20.0));
    }

    #[test]
    fn test_report_lines_without_decision() {
        let lines = build_report_lines(None, &ReportLayout::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, REPORT_TITLE);
        assert_eq!(lines[1].text, NO_DECISION_TEXT);
        assert_eq!(lines[1].top_mm, 40.0);
    }

    #[test]
    fn test_layout_pdf_y() {
        let layout = ReportLayout::default();
        assert_eq!(layout.to_pdf_y_mm(20.0), 277.0);
        assert!(layout.to_pdf_y_mm(layout.body_line_top_mm(3)) > 0.0);
    }
}
