//! 申請データの型定義
//!
//! CLIと対話セッションで共有される型:
//! - Coordinate: 選択された地点
//! - Purpose: 土地の利用目的
//! - Decision: 判定結果（申請時点のスナップショット）
//! - View: 画面タブ

use serde::{Deserialize, Serialize};
use std::fmt;

/// 緯度の有効範囲
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// 経度の有効範囲
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// 地点（緯度・経度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// 緯度・経度が有効範囲内か（NaN/無限大は範囲外）
    pub fn is_valid(&self) -> bool {
        LATITUDE_RANGE.contains(&self.latitude) && LONGITUDE_RANGE.contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// 土地の利用目的
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Purpose {
    #[default]
    Commercial,
    Protected,
    Industrial,
    Agricultural,
}

impl Purpose {
    pub const ALL: [Purpose; 4] = [
        Purpose::Commercial,
        Purpose::Protected,
        Purpose::Industrial,
        Purpose::Agricultural,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Commercial => "Commercial",
            Purpose::Protected => "Protected",
            Purpose::Industrial => "Industrial",
            Purpose::Agricultural => "Agricultural",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "commercial" | "c" => Ok(Purpose::Commercial),
            "protected" | "p" => Ok(Purpose::Protected),
            "industrial" | "i" => Ok(Purpose::Industrial),
            "agricultural" | "a" => Ok(Purpose::Agricultural),
            _ => Err(format!(
                "Unknown purpose: {}. Use commercial, protected, industrial, or agricultural",
                s
            )),
        }
    }
}

/// 判定区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Approved,
    Rejected,
    FurtherReviewRequired,
}

impl Verdict {
    /// 画面・レポートに表示するラベル
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Approved => "Claim Approved",
            Verdict::Rejected => "Claim Rejected",
            Verdict::FurtherReviewRequired => "Further Review Required",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 判定結果
///
/// `evaluator::evaluate` だけが生成する。申請時点の地点・目的を保持し、
/// 後から地点や目的が変わっても再計算されない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub verdict: Verdict,
    pub reason: String,
    pub coordinate: Coordinate,
    pub purpose: Purpose,
}

/// 画面タブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Map,
    Decision,
    Appeal,
    About,
}

impl View {
    /// ヘッダーの並び順
    pub const ALL: [View; 4] = [View::Map, View::About, View::Decision, View::Appeal];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Map => "map",
            View::Decision => "decision",
            View::Appeal => "appeal",
            View::About => "about",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
