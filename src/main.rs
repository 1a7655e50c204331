use clap::Parser;
use face_check_rust::{cli, client, config, report, request};

use cli::{Cli, Commands};
use config::Config;
use face_check_rust::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            input,
            output,
            webhook_url,
        } => {
            println!("📨 face-check - 顔照合チェック申請\n");

            let config = Config::load()?;
            let endpoint = config.resolve_webhook_url(webhook_url)?;

            // 1. 申請ファイル読み込み
            println!("[1/3] 申請ファイルを読み込み中...");
            let mut form = request::load_form(&input)?;
            request::fill_captured_at(&mut form, &request::default_captured_at());
            let submission = request::build_request(&form)?;
            println!("✔ 検出画像 {}件\n", submission.detections.len());

            if cli.verbose {
                println!("送信先: {}", endpoint);
                println!("{}\n", serde_json::to_string_pretty(&submission)?);
            }

            // 2. Webhook送信
            println!("[2/3] Webhookへ送信中...");
            let results = client::submit(&endpoint, &submission, config.timeout_seconds).await?;
            println!("✔ 判定 {}件を受信\n", results.len());

            // 3. 結果表示
            println!("[3/3] 判定結果\n");
            println!("{}\n", report::render_report(&results));

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&results)?;
                std::fs::write(&output, json)?;
                println!("✔ 判定を保存: {}", output.display());
            }

            if results.iter().any(|r| r.face_detection_violation) {
                println!("⚠ 違反が見つかりました");
            } else {
                println!("✅ 違反はありません");
            }
        }

        Commands::Config { set_webhook_url } => {
            let mut config = Config::load()?;

            if let Some(url) = set_webhook_url {
                config.webhook_url = Some(url);
                config.save()?;
                println!("✔ WebhookのURLを保存しました");
            } else {
                println!("設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "webhook_url: {}",
                    config.webhook_url.as_deref().unwrap_or("(未設定)")
                );
                println!("timeout_seconds: {}", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
