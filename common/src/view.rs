//! 画面バインディング
//!
//! 検索フローが画面に対して行う操作の一覧。
//! ブラウザではLeptosのシグナル、CLIでは端末出力、テストでは記録用の偽実装を差し込む。

use crate::types::PhotoForm;

pub trait UploadView {
    /// フォームから取り出すファイルハンドルの型
    type Photo;

    /// アップロードダイアログ（`.bg-model`）の表示/非表示
    fn set_dialog_visible(&self, visible: bool);

    /// アップロードフォームの `hidden` を外す
    fn reveal_upload_form(&self);

    /// フォームの入力内容（カテゴリ・選択ファイル）を読む
    fn read_form(&self) -> PhotoForm<Self::Photo>;

    /// 結果コンテナを空にする
    fn clear_results(&self);

    /// ローディング表示のテキストを設定（空文字で消去）
    fn set_loading_prompt(&self, text: &str);

    /// カード1枚を結果コンテナの末尾に追加
    fn append_card(&self, markup: String);

    /// サーバーが使った検索クエリを表示
    fn show_query(&self, _query: &str) {}
}
