use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoShoppingError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("不正なサーバーURL: {0}")]
    InvalidServerUrl(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_shopping_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoShoppingError>;
