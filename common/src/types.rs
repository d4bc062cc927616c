//! 検索結果・フォームの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ProductResult: 検索結果1件（カード1枚に対応）
//! - PhotoCategory: 写真カテゴリ（サーバーが受け付ける3種類）
//! - PhotoForm: アップロードフォームの入力内容

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// multipartフィールド名: カテゴリ
pub const FIELD_PHOTO_CATEGORY: &str = "photo-category";
/// multipartフィールド名: 写真ファイル
pub const FIELD_PHOTO: &str = "photo";

/// ショッピング検索結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductResult {
    pub title: String,
    pub image_link: String,
    pub price_and_seller: String,
    pub link: String,
    pub shipping_price: String,
}

/// 写真カテゴリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoCategory {
    #[default]
    Product,
    ShoppingList,
    Barcode,
}

impl PhotoCategory {
    pub const ALL: [PhotoCategory; 3] = [
        PhotoCategory::Product,
        PhotoCategory::ShoppingList,
        PhotoCategory::Barcode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoCategory::Product => "product",
            PhotoCategory::ShoppingList => "shopping-list",
            PhotoCategory::Barcode => "barcode",
        }
    }

    /// フォームの表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            PhotoCategory::Product => "Product",
            PhotoCategory::ShoppingList => "Shopping list",
            PhotoCategory::Barcode => "Barcode",
        }
    }
}

impl fmt::Display for PhotoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotoCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "product" => Ok(PhotoCategory::Product),
            "shopping-list" | "shopping_list" => Ok(PhotoCategory::ShoppingList),
            "barcode" => Ok(PhotoCategory::Barcode),
            other => Err(Error::InvalidCategory(other.to_string())),
        }
    }
}

/// アップロードフォームの入力内容
///
/// `P` はプラットフォームごとのファイルハンドル
/// （ブラウザでは `web_sys::File`、CLIでは [`PhotoFile`]）。
#[derive(Debug, Clone)]
pub struct PhotoForm<P> {
    pub category: String,
    pub photo: Option<P>,
}

/// メモリ上に読み込んだ写真ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    /// 拡張子からMIMEタイプを推定して作成
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_type_from_file_name(&file_name).to_string();
        Self { file_name, mime_type, bytes }
    }
}

/// ファイル名の拡張子からMIMEタイプを返す（不明な場合は application/octet-stream）
pub fn mime_type_from_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_result_deserialize() {
        let json = r#"{
            "title": "Fountain pen",
            "imageLink": "http://x/pen.jpg",
            "priceAndSeller": "$25.00 from Pens Inc",
            "link": "http://x/pen",
            "shippingPrice": "Free shipping"
        }"#;

        let product: ProductResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.title, "Fountain pen");
        assert_eq!(product.image_link, "http://x/pen.jpg");
        assert_eq!(product.price_and_seller, "$25.00 from Pens Inc");
        assert_eq!(product.link, "http://x/pen");
        assert_eq!(product.shipping_price, "Free shipping");
    }

    #[test]
    fn test_product_result_deserialize_missing_fields() {
        let json = r#"{"title": "Socks"}"#;

        let product: ProductResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.title, "Socks");
        assert_eq!(product.shipping_price, ""); // デフォルト値
    }

    #[test]
    fn test_product_result_serialize_camel_case() {
        let product = ProductResult {
            image_link: "http://x/i.jpg".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&product).expect("シリアライズ失敗");
        assert!(json.contains("\"imageLink\":\"http://x/i.jpg\""));
        assert!(json.contains("\"priceAndSeller\""));
    }

    #[test]
    fn test_photo_category_from_str() {
        assert_eq!("product".parse::<PhotoCategory>().unwrap(), PhotoCategory::Product);
        assert_eq!(
            " Shopping-List ".parse::<PhotoCategory>().unwrap(),
            PhotoCategory::ShoppingList
        );
        assert_eq!("barcode".parse::<PhotoCategory>().unwrap(), PhotoCategory::Barcode);

        let err = "receipt".parse::<PhotoCategory>().unwrap_err();
        assert!(matches!(err, Error::InvalidCategory(ref c) if c == "receipt"));
    }

    #[test]
    fn test_photo_category_display_matches_wire_value() {
        for category in PhotoCategory::ALL {
            assert_eq!(category.to_string(), category.as_str());
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_mime_type_from_file_name() {
        assert_eq!(mime_type_from_file_name("shoe.JPG"), "image/jpeg");
        assert_eq!(mime_type_from_file_name("list.png"), "image/png");
        assert_eq!(mime_type_from_file_name("noext"), "application/octet-stream");
    }

    #[test]
    fn test_photo_file_new() {
        let file = PhotoFile::new("barcode.webp", vec![1, 2, 3]);
        assert_eq!(file.mime_type, "image/webp");
        assert_eq!(file.bytes.len(), 3);
    }
}
