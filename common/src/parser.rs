//! 検索レスポンスパーサー
//!
//! サーバーのレスポンスは次のどちらかの形式:
//! 1. 商品の配列 `[{...}, {...}]`
//! 2. 検索クエリと商品配列の組 `["query", [{...}, {...}]]`

use crate::error::{Error, Result};
use crate::types::ProductResult;
use serde::Deserialize;

/// パース済みの検索レスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    /// サーバーが使った検索クエリ（組形式の場合のみ）
    pub query: Option<String>,
    pub products: Vec<ProductResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireResponse {
    Products(Vec<ProductResult>),
    WithQuery(String, Vec<ProductResult>),
}

/// レスポンス本文をパース
///
/// # Returns
/// * `Ok(SearchResponse)` - パース成功（商品はレスポンス順）
/// * `Err(Error::Parse)` - どちらの形式にも一致しない場合
pub fn parse_search_response(body: &str) -> Result<SearchResponse> {
    let wire: WireResponse = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("検索結果JSONパースエラー: {}", e)))?;

    Ok(match wire {
        WireResponse::Products(products) => SearchResponse { query: None, products },
        WireResponse::WithQuery(query, products) => SearchResponse {
            query: Some(query),
            products,
        },
    })
}
