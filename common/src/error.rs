//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 申請ワークフローで起きる失敗の3分類。いずれも入力修正か再送信で
/// 回復できる。
#[derive(Error, Debug)]
pub enum Error {
    /// 送信前の入力検証エラー（メッセージをそのまま表示する）
    #[error("{0}")]
    Validation(String),

    /// 非2xx応答を受け取った
    #[error("HTTPエラー: ステータス {0}")]
    RequestFailed(u16),

    /// 通信失敗または応答ボディの解析失敗
    #[error("{0}")]
    Transport(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
