//! 座標入力パーサー
//!
//! 検索欄の "lat, lon" 形式を地点に変換する。
//! 変換できない入力は地名検索に回される。

use crate::error::{Error, Result};
use crate::types::Coordinate;

/// "lat, lon" 形式の入力を地点に変換
///
/// 受け付ける条件:
/// 1. カンマ区切りでちょうど2つのトークン
/// 2. 両方が有限の数値（前後の空白は無視）
/// 3. 緯度・経度が有効範囲内
///
/// # Examples
/// ```
/// use mullai_common::parse_coordinate_pair;
///
/// let coord = parse_coordinate_pair("12.5, 78.3").unwrap();
/// assert_eq!(coord.latitude, 12.5);
/// assert_eq!(coord.longitude, 78.3);
/// assert!(parse_coordinate_pair("Chennai").is_err());
/// ```
pub fn parse_coordinate_pair(input: &str) -> Result<Coordinate> {
    let mut parts = input.split(',');
    let (lat, lon) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lon), None) => (lat, lon),
        _ => return Err(Error::InvalidCoordinate(input.to_string())),
    };

    let latitude = parse_number(lat).ok_or_else(|| Error::InvalidCoordinate(input.to_string()))?;
    let longitude = parse_number(lon).ok_or_else(|| Error::InvalidCoordinate(input.to_string()))?;

    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        return Err(Error::InvalidCoordinate(format!("{} (out of range)", input.trim())));
    }
    Ok(coordinate)
}

/// 数値トークンを変換（"NaN", "inf" は除外）
fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
