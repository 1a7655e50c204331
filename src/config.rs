use crate::error::{FaceCheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub webhook_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込む（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FaceCheckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("face-check").join("config.json"))
    }

    /// エンドポイントURLを解決する
    ///
    /// 優先順位: コマンドラインフラグ > 環境変数 FACE_CHECK_WEBHOOK_URL >
    /// 設定ファイル。
    pub fn resolve_webhook_url(&self, flag: Option<String>) -> Result<String> {
        if let Some(url) = flag {
            return Ok(url);
        }

        if let Ok(url) = std::env::var("FACE_CHECK_WEBHOOK_URL") {
            if !url.is_empty() {
                return Ok(url);
            }
        }

        self.webhook_url
            .clone()
            .ok_or(FaceCheckError::MissingWebhookUrl)
    }
}
