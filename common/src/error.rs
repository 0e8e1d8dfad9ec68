//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Select a location on map first!")]
    NoLocationSelected,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_location() {
        let error = Error::NoLocationSelected;
        assert_eq!(format!("{}", error), "Select a location on map first!");
    }

    #[test]
    fn test_error_display_invalid_coordinate() {
        let error = Error::InvalidCoordinate("abc, def".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Invalid coordinate"));
        assert!(display.contains("abc, def"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidCoordinate("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidCoordinate"));
        assert!(debug.contains("テスト"));
    }
}
