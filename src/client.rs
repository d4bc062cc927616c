//! reqwest による通信

use photo_shopping_common::types::{FIELD_PHOTO, FIELD_PHOTO_CATEGORY};
use photo_shopping_common::{HttpReply, PhotoFile, PhotoForm, UploadTransport};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use crate::error::Result;

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl UploadTransport for ReqwestTransport {
    type Photo = PhotoFile;

    async fn get_text(&self, url: &str) -> std::result::Result<HttpReply, String> {
        let response = self.client.get(url).send().await.map_err(|e| e.to_string())?;
        into_reply(response).await
    }

    async fn post_form(
        &self,
        url: &str,
        form: &PhotoForm<PhotoFile>,
    ) -> std::result::Result<HttpReply, String> {
        let mut multipart = Form::new().text(FIELD_PHOTO_CATEGORY, form.category.clone());
        if let Some(photo) = &form.photo {
            let part = Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.mime_type)
                .map_err(|e| e.to_string())?;
            multipart = multipart.part(FIELD_PHOTO, part);
        }

        let response = self
            .client
            .post(url)
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        into_reply(response).await
    }
}

async fn into_reply(response: reqwest::Response) -> std::result::Result<HttpReply, String> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| e.to_string())?;
    Ok(HttpReply { status, body })
}
