//! 写真検索の一括実行
//!
//! アップロードURL取得 → 写真送信 → 結果カード生成を順に行う。

use photo_shopping_common::{
    PhotoCategory, PhotoFile, PhotoForm, PhotoSearch, SearchResponse, UploadSession,
    UploadTransport, UPLOAD_URL_ENDPOINT,
};
use reqwest::Url;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{PhotoShoppingError, Result};
use crate::terminal::TerminalView;

/// 検索条件
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub server: String,
    pub category: PhotoCategory,
    pub photo: PathBuf,
}

/// 検索結果と描画済みカード
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub response: SearchResponse,
    pub cards: Vec<String>,
}

/// 写真ファイルを読み込む
pub fn load_photo(path: &Path) -> Result<PhotoFile> {
    if !path.is_file() {
        return Err(PhotoShoppingError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "photo".to_string());
    Ok(PhotoFile::new(file_name, bytes))
}

/// サーバーURLを検証
pub fn parse_server_url(server: &str) -> Result<Url> {
    let url = Url::parse(server)
        .map_err(|e| PhotoShoppingError::InvalidServerUrl(format!("{} ({})", server, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(PhotoShoppingError::InvalidServerUrl(server.to_string()));
    }
    Ok(url)
}

/// 相対パスで返ったアップロードURLをサーバー基準の絶対URLにする
pub fn resolve_session(server: &Url, session: UploadSession) -> Result<UploadSession> {
    let resolved = server
        .join(session.upload_url())
        .map_err(|e| PhotoShoppingError::InvalidServerUrl(format!("{} ({})", session.upload_url(), e)))?;
    Ok(UploadSession::new(resolved.as_str()))
}

pub async fn run_search<T>(transport: T, request: &SearchRequest) -> Result<SearchOutcome>
where
    T: UploadTransport<Photo = PhotoFile>,
{
    let photo = load_photo(&request.photo)?;
    let server = parse_server_url(&request.server)?;
    let endpoint = server
        .join(UPLOAD_URL_ENDPOINT)
        .map_err(|e| PhotoShoppingError::InvalidServerUrl(e.to_string()))?;

    info!(file = %photo.file_name, category = %request.category, "写真を送信します");

    let view = TerminalView::new(PhotoForm {
        category: request.category.to_string(),
        photo: Some(photo),
    });
    let search = PhotoSearch::new(view, transport).with_endpoint(endpoint.as_str());

    let session = search.open_upload_dialog().await?;
    let session = resolve_session(&server, session)?;
    let response = search.submit(&session).await?;

    Ok(SearchOutcome {
        cards: search.view().take_cards(),
        response,
    })
}
