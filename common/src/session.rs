//! アップロードセッション
//!
//! サーバーが発行した一回限りのアップロードURLを保持する。
//! ダイアログを開くたびに新しいセッションで置き換える（後勝ち）。

/// アップロードURLを保持するセッション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSession {
    upload_url: String,
}

impl UploadSession {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self { upload_url: upload_url.into() }
    }

    /// 写真のPOST先URL
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}
