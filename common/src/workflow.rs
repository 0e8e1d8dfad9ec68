//! 申請ワークフローの状態遷移
//!
//! 状態は呼び出し側が所有し、各遷移は新しい状態を返す純粋関数。
//! 地名検索（非同期）は本体クレート側で解決してから `select_location` に渡す。
//!
//! ## 変更履歴
//! - 2026-09-02: 初期作成

use crate::error::{Error, Result};
use crate::evaluator::evaluate;
use crate::types::{Coordinate, Decision, Purpose, View};
use serde::{Deserialize, Serialize};

/// セッション内の申請状態
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub selected_coordinate: Option<Coordinate>,
    pub purpose: Purpose,
    pub decision: Option<Decision>,
    pub claimed: bool,
    pub appealed: bool,
    pub active_view: View,
}

/// ユーザー操作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectLocation(Coordinate),
    SetPurpose(Purpose),
    SubmitClaim,
    Appeal,
    SwitchView(View),
}

impl WorkflowState {
    /// 初期状態（未選択・Commercial・Map）
    pub fn new() -> Self {
        Self::default()
    }

    /// 地点を選択。以前の判定・申請・異議フラグはすべて破棄する
    pub fn select_location(&self, coordinate: Coordinate) -> Self {
        Self {
            selected_coordinate: Some(coordinate),
            decision: None,
            claimed: false,
            appealed: false,
            ..self.clone()
        }
    }

    pub fn set_purpose(&self, purpose: Purpose) -> Self {
        Self {
            purpose,
            ..self.clone()
        }
    }

    /// 申請を提出して判定を記録し、Decisionタブへ移動
    pub fn submit_claim(&self) -> Result<Self> {
        let coordinate = self.selected_coordinate.ok_or(Error::NoLocationSelected)?;
        Ok(Self {
            decision: Some(evaluate(coordinate, self.purpose)),
            claimed: true,
            active_view: View::Decision,
            ..self.clone()
        })
    }

    /// 異議申し立て。事前の申請は要求しない
    pub fn appeal(&self) -> Self {
        Self {
            appealed: true,
            active_view: View::Appeal,
            ..self.clone()
        }
    }

    pub fn switch_view(&self, view: View) -> Self {
        Self {
            active_view: view,
            ..self.clone()
        }
    }

    /// 操作を1つ適用
    pub fn apply(&self, action: &Action) -> Result<Self> {
        match action {
            Action::SelectLocation(coordinate) => Ok(self.select_location(*coordinate)),
            Action::SetPurpose(purpose) => Ok(self.set_purpose(*purpose)),
            Action::SubmitClaim => self.submit_claim(),
            Action::Appeal => Ok(self.appeal()),
            Action::SwitchView(view) => Ok(self.switch_view(*view)),
        }
    }

    /// Decisionタブに判定を表示できるか
    pub fn has_claim(&self) -> bool {
        self.claimed && self.decision.is_some()
    }
}
