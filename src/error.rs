use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("malformed date '{0}': expected YYYYMMDD")]
    MalformedDate(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("menu API error: {0}")]
    Api(String),

    #[error("image fetch failed: {0}")]
    Image(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
