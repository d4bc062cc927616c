//! ブラウザの fetch + FormData による通信

use photo_shopping_common::types::{FIELD_PHOTO, FIELD_PHOTO_CATEGORY};
use photo_shopping_common::{HttpReply, PhotoForm, UploadTransport};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// `window.fetch` を使う通信
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl UploadTransport for FetchTransport {
    type Photo = File;

    async fn get_text(&self, url: &str) -> Result<HttpReply, String> {
        let request = Request::new_with_str(url).map_err(js_error)?;
        send(&request).await
    }

    async fn post_form(&self, url: &str, form: &PhotoForm<File>) -> Result<HttpReply, String> {
        let data = FormData::new().map_err(js_error)?;
        data.append_with_str(FIELD_PHOTO_CATEGORY, &form.category)
            .map_err(js_error)?;
        if let Some(photo) = &form.photo {
            data.append_with_blob(FIELD_PHOTO, photo).map_err(js_error)?;
        }

        // Content-Type は FormData からブラウザが boundary 付きで設定する
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&data);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        send(&request).await
    }
}

/// リクエストを送り、ステータスと本文テキストを返す
async fn send(request: &Request) -> Result<HttpReply, String> {
    let window = web_sys::window().ok_or_else(|| "window が取得できません".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(HttpReply {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// JS側の例外をメッセージ文字列に変換
fn js_error(value: JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}
