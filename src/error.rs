use thiserror::Error;

#[derive(Error, Debug)]
pub enum MullaiError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Place not found: {0}")]
    NotFound(String),

    #[error("Error fetching location: {0}")]
    Resolver(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("Interactive input error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] mullai_common::Error),
}

impl MullaiError {
    /// 対話セッションで通知して続行できるエラーか
    pub fn is_user_notice(&self) -> bool {
        matches!(
            self,
            MullaiError::NotFound(_)
                | MullaiError::Resolver(_)
                | MullaiError::Common(mullai_common::Error::NoLocationSelected)
        )
    }
}

impl From<reqwest::Error> for MullaiError {
    fn from(e: reqwest::Error) -> Self {
        MullaiError::Resolver(e.to_string())
    }
}

impl From<dialoguer::Error> for MullaiError {
    fn from(e: dialoguer::Error) -> Self {
        MullaiError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MullaiError>;
