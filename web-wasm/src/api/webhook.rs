//! Webhook連携
//!
//! 申請ペイロードをJSONでPOSTし、判定配列を受け取る。
//! 送信は1回きりで、リトライもキャンセルもしない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use face_check_common::{parse_results, DetectionResult, Error, SubmissionRequest};

/// JsValueからエラーメッセージを取り出す
///
/// fetch例外のメッセージをそのまま使い、取れない場合は汎用文言に
/// フォールバックする。
fn transport_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "リクエストの処理に失敗しました".to_string());

    Error::Transport(message)
}

/// 申請を送信して判定配列を受け取る
///
/// # Arguments
/// * `endpoint` - WebhookエンドポイントURL
/// * `request` - 検証済みの申請ペイロード
///
/// # Returns
/// * `Ok(Vec<DetectionResult>)` - 2xx応答をパースした判定
/// * `Err(Error::RequestFailed)` - 非2xx応答
/// * `Err(Error::Transport)` - 通信失敗または応答の解析失敗
pub async fn submit(
    endpoint: &str,
    request: &SubmissionRequest,
) -> Result<Vec<DetectionResult>, Error> {
    let body = serde_json::to_string(request)
        .map_err(|e| Error::Transport(format!("リクエストの生成に失敗しました: {}", e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let req = Request::new_with_str_and_init(endpoint, &opts).map_err(transport_error)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(transport_error)?;

    let window =
        web_sys::window().ok_or_else(|| Error::Transport("windowが取得できません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::Transport("応答オブジェクトが不正です".to_string()))?;

    if !resp.ok() {
        return Err(Error::RequestFailed(resp.status()));
    }

    let text_value = JsFuture::from(resp.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    let body = text_value.as_string().unwrap_or_default();

    parse_results(&body)
}
