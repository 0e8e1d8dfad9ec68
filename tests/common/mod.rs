//! 統合テスト用の地名検索スタブ

use async_trait::async_trait;
use mullai::error::{MullaiError, Result};
use mullai::geocode::{Place, PlaceSearch};
use std::sync::atomic::{AtomicUsize, Ordering};

/// 固定の応答を返し、呼び出し回数を数える
pub struct StubSearch {
    pub response: StubResponse,
    calls: AtomicUsize,
}

pub enum StubResponse {
    Places(Vec<Place>),
    Failure(String),
}

impl StubSearch {
    pub fn places(places: Vec<(&str, &str)>) -> Self {
        let places = places
            .into_iter()
            .map(|(lat, lon)| Place {
                lat: lat.to_string(),
                lon: lon.to_string(),
                display_name: String::new(),
            })
            .collect();
        Self {
            response: StubResponse::Places(places),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: StubResponse::Failure(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceSearch for StubSearch {
    async fn search(&self, _query: &str) -> Result<Vec<Place>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            StubResponse::Places(places) => Ok(places.clone()),
            StubResponse::Failure(message) => Err(MullaiError::Resolver(message.clone())),
        }
    }
}
