use crate::error::{MullaiError, Result};
use mullai_common::Coordinate;
use serde::Deserialize;

/// 地名検索の1件（Nominatimのレスポンス形式。緯度経度は数値文字列）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Place {
    pub lat: String,

    pub lon: String,

    #[serde(default)]
    pub display_name: String,
}

impl Place {
    pub fn coordinate(&self) -> Result<Coordinate> {
        let latitude = parse_field("lat", &self.lat)?;
        let longitude = parse_field("lon", &self.lon)?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

fn parse_field(name: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MullaiError::Resolver(format!("invalid {} in response: {:?}", name, value)))
}
