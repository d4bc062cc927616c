//! 画面コンポーネント

pub mod header;
pub mod upload_button;
pub mod upload_dialog;
pub mod shopping_results;
