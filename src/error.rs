use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaceCheckError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("WebhookのURLが設定されていません。`face-check config --set-webhook-url URL` で設定してください")]
    MissingWebhookUrl,

    #[error("{0}")]
    Workflow(#[from] face_check_common::Error),

    #[error("HTTPリクエストエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FaceCheckError>;
