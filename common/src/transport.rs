//! HTTP通信の抽象化
//!
//! ブラウザは `fetch` + `FormData`、CLIは `reqwest` で実装する。

use crate::types::PhotoForm;

/// アップロードURLを発行するエンドポイント
pub const UPLOAD_URL_ENDPOINT: &str = "/blobstore-upload-url";

/// 完了したHTTPリクエストの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// 2xxかどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 検索フローが使うHTTP操作
///
/// `Err` はレスポンス自体が得られなかった通信失敗（メッセージのみ）。
/// HTTPエラーステータスは `Ok(HttpReply)` として返す。
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type Photo;

    async fn get_text(&self, url: &str) -> Result<HttpReply, String>;

    async fn post_form(&self, url: &str, form: &PhotoForm<Self::Photo>) -> Result<HttpReply, String>;
}
