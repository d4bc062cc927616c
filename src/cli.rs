use clap::{Parser, Subcommand};
use photo_shopping_common::PhotoCategory;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "photo-shopping")]
#[command(about = "写真から商品を探すショッピング検索クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 写真をアップロードして商品を検索
    Search {
        /// 写真ファイルのパス
        #[arg(required = true)]
        photo: PathBuf,

        /// 写真カテゴリ (product/shopping-list/barcode)
        #[arg(short, long)]
        category: Option<PhotoCategory>,

        /// サーバーURL（設定・環境変数より優先）
        #[arg(long)]
        server: Option<String>,

        /// 結果カードをHTMLファイルに保存
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// 設定の表示・変更
    Config {
        /// サーバーURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
