use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "face-check")]
#[command(about = "顔照合チェック申請・判定レポートツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 申請ファイルを送信して判定を表示
    Submit {
        /// 申請内容のJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 判定JSONの出力先（省略時は表示のみ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// WebhookエンドポイントURL（環境変数・設定ファイルより優先）
        #[arg(short = 'u', long)]
        webhook_url: Option<String>,
    },

    /// 設定の表示・変更
    Config {
        /// WebhookエンドポイントURLを保存
        #[arg(long)]
        set_webhook_url: Option<String>,
    },
}
