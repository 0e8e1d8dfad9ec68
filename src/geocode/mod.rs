//! 地点解決（座標の直接入力 → 地名検索）
//!
//! ## 変更履歴
//! - 2026-09-02: 初期作成
//! - 2026-09-20: 空入力は検索せずNotFoundにする

mod nominatim;
mod types;

pub use nominatim::NominatimClient;
pub use types::Place;

use crate::error::{MullaiError, Result};
use async_trait::async_trait;
use mullai_common::{parse_coordinate_pair, Coordinate, WorkflowState};

/// 外部の地名検索サービス
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Place>>;
}

/// 入力テキストを地点に解決
///
/// "lat, lon" 形式で範囲内ならネットワークを使わずに返す。
/// それ以外は地名検索の先頭結果を使う。
pub async fn resolve(text: &str, search: &dyn PlaceSearch) -> Result<Coordinate> {
    if let Ok(coordinate) = parse_coordinate_pair(text) {
        tracing::debug!(%coordinate, "coordinate parsed directly");
        return Ok(coordinate);
    }

    let query = text.trim();
    if query.is_empty() {
        return Err(MullaiError::NotFound("(empty)".to_string()));
    }

    let places = search.search(query).await?;
    let first = places
        .first()
        .ok_or_else(|| MullaiError::NotFound(query.to_string()))?;

    let coordinate = first.coordinate()?;
    tracing::info!(query, %coordinate, place = %first.display_name, "place resolved");
    Ok(coordinate)
}

/// 検索結果で地点を選択した新しい状態を返す。失敗時は状態を変えない
///
/// 先行する検索の取り消しや順序保証はない。後から返った結果がそのまま適用される。
pub async fn resolve_search(
    state: &WorkflowState,
    text: &str,
    search: &dyn PlaceSearch,
) -> Result<WorkflowState> {
    let coordinate = resolve(text, search).await?;
    Ok(state.select_location(coordinate))
}
