//! 検索結果ページのHTML出力

use photo_shopping_common::{html_escape, CARD_CONTAINER_CLASS};
use std::path::Path;

use crate::error::Result;

const BOOTSTRAP_CSS: &str =
    "https://stackpath.bootstrapcdn.com/bootstrap/4.5.0/css/bootstrap.min.css";

/// カード一覧を1枚のHTMLページにまとめる
pub fn results_page_html(query: Option<&str>, cards: &[String]) -> String {
    let heading = match query {
        Some(q) => format!("<h2>Results for &quot;{}&quot;</h2>", html_escape(q)),
        None => "<h2>Shopping results</h2>".to_string(),
    };

    let body: String = cards
        .iter()
        .map(|card| format!(r#"<div class="{}">{}</div>"#, CARD_CONTAINER_CLASS, card))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Photo Shopping</title>
<link rel="stylesheet" href="{css}">
</head>
<body>
<div class="container">
{heading}
<div id="shopping-results-wrapper" class="row">
{body}
</div>
</div>
</body>
</html>
"#,
        css = BOOTSTRAP_CSS,
    )
}

pub fn write_results_page(path: &Path, query: Option<&str>, cards: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, results_page_html(query, cards))?;
    Ok(())
}
