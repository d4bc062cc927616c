//! 設定ファイルテスト

use photo_shopping::config::{Config, SERVER_ENV};
use photo_shopping_common::PhotoCategory;
use tempfile::tempdir;

/// ファイルがなければデフォルト値
#[test]
fn test_load_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config.server_url, "http://localhost:8080");
    assert_eq!(config.default_category, PhotoCategory::Product);
    assert_eq!(config.timeout_seconds, 120);
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        server_url: "https://shop.example.com".to_string(),
        default_category: PhotoCategory::Barcode,
        timeout_seconds: 30,
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.server_url, "https://shop.example.com");
    assert_eq!(loaded.default_category, PhotoCategory::Barcode);
    assert_eq!(loaded.timeout_seconds, 30);
}

/// 一部の項目だけの設定ファイル
#[test]
fn test_load_partial_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"default_category": "shopping-list"}"#).unwrap();

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.default_category, PhotoCategory::ShoppingList);
    assert_eq!(config.timeout_seconds, 120); // デフォルト値
}

/// 壊れた設定ファイル
#[test]
fn test_load_invalid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 壊れた設定ファイルでもデフォルト値で続行できる
#[test]
fn test_load_or_default_from_invalid_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut config = Config::load_or_default_from(&path);
    assert_eq!(config.server_url, "http://localhost:8080");

    // デフォルト値で上書き保存すれば修復できる
    config.server_url = "https://shop.example.com".to_string();
    config.save_to(&path).expect("保存失敗");
    let repaired = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(repaired.server_url, "https://shop.example.com");
}

/// サーバーURLの優先順位: --server > 環境変数 > 設定ファイル
///
/// 環境変数を書き換えるので、環境変数に依存する確認はこの1関数にまとめる
#[test]
fn test_resolve_server_precedence() {
    let config = Config {
        server_url: "http://file.example.com".to_string(),
        ..Default::default()
    };

    std::env::set_var(SERVER_ENV, "http://env.example.com");
    assert_eq!(
        config.resolve_server(Some("http://flag.example.com".to_string())),
        "http://flag.example.com"
    );
    assert_eq!(config.resolve_server(None), "http://env.example.com");
    // 空のフラグは指定なし扱い
    assert_eq!(config.resolve_server(Some(" ".to_string())), "http://env.example.com");

    std::env::set_var(SERVER_ENV, "  ");
    assert_eq!(config.resolve_server(None), "http://file.example.com");

    std::env::remove_var(SERVER_ENV);
    assert_eq!(config.resolve_server(None), "http://file.example.com");
    assert_eq!(
        config.resolve_server(Some("http://flag.example.com".to_string())),
        "http://flag.example.com"
    );
}
