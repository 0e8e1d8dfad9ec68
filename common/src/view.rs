//! 画面表示内容の組み立て
//!
//! 状態からタブごとの見出しと本文行を作る。描画方法（端末・Web）は呼び出し側。

use crate::types::View;
use crate::workflow::WorkflowState;

pub const APP_NAME: &str = "Mullai";

pub const ABOUT_TEXT: &str = "Mullai helps communities and officials analyze land claims under the Forest Rights Act. \
Users can select a land location, state the purpose of use, and get decisions based on rules \
and AI analysis. Claims can also be appealed for review.";

/// 1タブ分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContent {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// ヘッダーに表示するタブ名
pub fn view_label(view: View) -> &'static str {
    match view {
        View::Map => "Map",
        View::About => "About",
        View::Decision => "Decision",
        View::Appeal => "Appeal",
    }
}

/// アクティブなタブの内容
pub fn render_view(state: &WorkflowState) -> ViewContent {
    match state.active_view {
        View::Map => ViewContent {
            title: "Land Claim",
            lines: vec![
                match state.selected_coordinate {
                    Some(c) => format!("Location: {}", c),
                    None => "Location: No location selected".to_string(),
                },
                format!("Purpose of Land: {}", state.purpose),
            ],
        },
        View::Decision => ViewContent {
            title: "Decision",
            lines: match (&state.decision, state.claimed) {
                (Some(decision), true) => vec![
                    format!("Decision: {}", decision.verdict),
                    format!("Reason: {}", decision.reason),
                    format!("Purpose: {}", decision.purpose),
                    format!("Coordinates: {}", decision.coordinate),
                ],
                _ => vec!["No claim submitted yet.".to_string()],
            },
        },
        View::Appeal => ViewContent {
            title: "Appeal Claim",
            lines: vec![if state.appealed {
                "Your appeal has been submitted for review.".to_string()
            } else {
                "No appeal made yet.".to_string()
            }],
        },
        View::About => ViewContent {
            title: "About Mullai",
            lines: vec![ABOUT_TEXT.to_string()],
        },
    }
}
