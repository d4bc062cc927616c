//! 検索結果カードのHTML生成
//!
//! 1商品につき1枚のカード断片を生成する。
//! 埋め込む文字列はすべてHTMLエスケープする。

use crate::types::ProductResult;

/// カードを包むコンテナのクラス
pub const CARD_CONTAINER_CLASS: &str = "col-md-3";

/// Viewボタンのラベル
pub const VIEW_LABEL: &str = "View";

/// HTML特殊文字をエスケープ
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Viewボタンのリンク先
///
/// http(s) 以外（`javascript:` など）は `#` に置き換える。
pub fn safe_link(link: &str) -> &str {
    let trimmed = link.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed
    } else {
        "#"
    }
}

/// 商品カードのHTML断片を生成
///
/// 画像・タイトル・価格/販売者・Viewボタン（商品ページへ遷移）・送料を含む。
/// Viewボタンは現在のページで商品リンクへ遷移するアンカー。
///
/// # Examples
/// ```
/// use photo_shopping_common::{card_html, ProductResult};
///
/// let product = ProductResult {
///     title: "Shoe".to_string(),
///     link: "http://x/p".to_string(),
///     ..Default::default()
/// };
/// let html = card_html(&product);
/// assert!(html.contains("Shoe"));
/// assert!(html.contains(r#"href="http://x/p""#));
/// ```
pub fn card_html(product: &ProductResult) -> String {
    format!(
        r#"<div class="card mb-4 shadow-sm">
  <div class="col-4">
    <img src="{image}" class="mx-auto d-block">
  </div>
  <div class="card-body">
    <p class="card-text">{title}</p>
    <p class="card-text">{price}</p>
    <div class="d-flex justify-content-between align-items-center">
      <div class="btn-group">
        <a href="{link}" role="button" class="btn btn-sm btn-outline-secondary">{view}</a>
      </div>
      <small class="text-muted">{shipping}</small>
    </div>
  </div>
</div>"#,
        image = html_escape(&product.image_link),
        title = html_escape(&product.title),
        price = html_escape(&product.price_and_seller),
        link = html_escape(safe_link(&product.link)),
        view = VIEW_LABEL,
        shipping = html_escape(&product.shipping_price),
    )
}
