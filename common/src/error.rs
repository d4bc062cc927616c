//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// アップロードURL取得の失敗と、写真送信の失敗の2系統を区別する。
#[derive(Error, Debug)]
pub enum Error {
    #[error("アップロードURL取得エラー: HTTP {status}")]
    UploadUrlStatus { status: u16 },

    #[error("アップロードURLが空です")]
    EmptyUploadUrl,

    #[error("写真送信エラー: HTTP {status}")]
    SubmissionStatus { status: u16, body: String },

    /// 通信そのものが失敗した場合（レスポンスなし）
    #[error("通信エラー: {url} ({message})")]
    Transport { url: String, message: String },

    #[error("写真が選択されていません")]
    MissingPhoto,

    #[error("不正な写真カテゴリ: {0} (product / shopping-list / barcode)")]
    InvalidCategory(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
