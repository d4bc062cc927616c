//! 写真ショッピング検索フロー
//!
//! アップロードボタン → ダイアログ表示 + アップロードURL取得
//! → フォーム送信 → 結果JSONのパース → カード描画

use crate::card::card_html;
use crate::error::{Error, Result};
use crate::parser::{parse_search_response, SearchResponse};
use crate::session::UploadSession;
use crate::transport::{UploadTransport, UPLOAD_URL_ENDPOINT};
use crate::types::ProductResult;
use crate::view::UploadView;
use tracing::{debug, warn};

/// 送信中に表示するメッセージ
pub const LOADING_PROMPT: &str = "Shopping results loading, please wait!";

/// 検索フローのコントローラ
///
/// 画面は [`UploadView`]、通信は [`UploadTransport`] として外から渡す。
/// アップロードURLは [`UploadSession`] として呼び出し側が保持する。
pub struct PhotoSearch<V, T> {
    view: V,
    transport: T,
    upload_url_endpoint: String,
}

impl<V, T> PhotoSearch<V, T>
where
    V: UploadView,
    T: UploadTransport<Photo = V::Photo>,
{
    pub fn new(view: V, transport: T) -> Self {
        Self {
            view,
            transport,
            upload_url_endpoint: UPLOAD_URL_ENDPOINT.to_string(),
        }
    }

    /// アップロードURL発行エンドポイントを変更（CLIではサーバーの絶対URL）
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.upload_url_endpoint = endpoint.into();
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn open_dialog(&self) {
        self.view.set_dialog_visible(true);
    }

    pub fn close_dialog(&self) {
        self.view.set_dialog_visible(false);
    }

    /// アップロードボタン押下時の処理
    ///
    /// ダイアログはURL取得の成否に関わらず開く。
    pub async fn open_upload_dialog(&self) -> Result<UploadSession> {
        self.open_dialog();
        self.fetch_and_show().await
    }

    /// アップロードURLを取得し、フォームを表示する
    ///
    /// 失敗時はフォームを表示せず、セッションも返さない。
    pub async fn fetch_and_show(&self) -> Result<UploadSession> {
        let endpoint = self.upload_url_endpoint.as_str();
        debug!(endpoint, "アップロードURL取得");

        let reply = self
            .transport
            .get_text(endpoint)
            .await
            .map_err(|message| Error::Transport {
                url: endpoint.to_string(),
                message,
            })?;

        if !reply.is_success() {
            return Err(Error::UploadUrlStatus { status: reply.status });
        }

        let upload_url = reply.body.trim();
        if upload_url.is_empty() {
            return Err(Error::EmptyUploadUrl);
        }

        self.view.reveal_upload_form();
        Ok(UploadSession::new(upload_url))
    }

    /// フォームを送信し、結果を描画する
    ///
    /// 送信前に前回の結果を消してローディング表示を出し、ダイアログを閉じる。
    /// 失敗時はローディング表示が残り、結果コンテナは空のまま。
    pub async fn submit(&self, session: &UploadSession) -> Result<SearchResponse> {
        let form = self.view.read_form();
        if form.photo.is_none() {
            return Err(Error::MissingPhoto);
        }

        self.view.clear_results();
        self.close_dialog();
        self.view.set_loading_prompt(LOADING_PROMPT);

        let url = session.upload_url();
        debug!(url, category = %form.category, "写真送信");

        let reply = match self.transport.post_form(url, &form).await {
            Ok(reply) => reply,
            Err(message) => {
                warn!(url, %message, "写真送信に失敗");
                return Err(Error::Transport {
                    url: url.to_string(),
                    message,
                });
            }
        };

        if !reply.is_success() {
            return Err(Error::SubmissionStatus {
                status: reply.status,
                body: reply.body,
            });
        }

        let response = parse_search_response(&reply.body)?;

        self.view.set_loading_prompt("");
        if let Some(query) = &response.query {
            self.view.show_query(query);
        }
        self.render(&response.products);
        Ok(response)
    }

    /// 商品ごとにカードを生成し、入力順に追加する
    pub fn render(&self, products: &[ProductResult]) {
        for product in products {
            self.view.append_card(card_html(product));
        }
    }
}
