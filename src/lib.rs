//! photo-shopping: 写真から商品を探すショッピング検索クライアント

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod search;
pub mod terminal;
