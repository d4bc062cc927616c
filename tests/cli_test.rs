//! コマンドライン引数テスト

use clap::Parser;
use photo_shopping::cli::{Cli, Commands};
use photo_shopping_common::PhotoCategory;
use std::path::PathBuf;

#[test]
fn test_parse_search() {
    let cli = Cli::try_parse_from([
        "photo-shopping",
        "search",
        "socks.jpg",
        "--category",
        "shopping-list",
        "--server",
        "http://localhost:9000",
        "--html",
        "out/results.html",
    ])
    .expect("パース失敗");

    assert!(!cli.verbose);
    match cli.command {
        Commands::Search { photo, category, server, html } => {
            assert_eq!(photo, PathBuf::from("socks.jpg"));
            assert_eq!(category, Some(PhotoCategory::ShoppingList));
            assert_eq!(server.as_deref(), Some("http://localhost:9000"));
            assert_eq!(html, Some(PathBuf::from("out/results.html")));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_search_defaults() {
    let cli = Cli::try_parse_from(["photo-shopping", "-v", "search", "pen.png"]).expect("パース失敗");

    assert!(cli.verbose);
    match cli.command {
        Commands::Search { category, server, html, .. } => {
            assert!(category.is_none());
            assert!(server.is_none());
            assert!(html.is_none());
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_invalid_category() {
    let result = Cli::try_parse_from(["photo-shopping", "search", "a.jpg", "-c", "receipt"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_search_requires_photo() {
    assert!(Cli::try_parse_from(["photo-shopping", "search"]).is_err());
}

#[test]
fn test_parse_config() {
    let cli = Cli::try_parse_from([
        "photo-shopping",
        "config",
        "--set-server",
        "https://shop.example.com",
        "--show",
    ])
    .expect("パース失敗");

    match cli.command {
        Commands::Config { set_server, show } => {
            assert_eq!(set_server.as_deref(), Some("https://shop.example.com"));
            assert!(show);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}
