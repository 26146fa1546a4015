//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイントを指定可能。ストリーミング応答を LlmEvent に正規化する。
//! 既定値は智谱（bigmodel.cn）の GLM エンドポイント。

use crate::error::Error;
use crate::history::Message;
use crate::llm::events::{FinishReason, LlmEvent};
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::env;
use std::io::{BufRead, BufReader};

const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
const DEFAULT_MODEL: &str = "glm-4.5";
const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const DEFAULT_TEMPERATURE: f64 = 0.5;

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: String,
    base_url: String,
    api_key_env: String,
    temperature: f64,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のとき DEFAULT_API_KEY_ENV）
    /// * `temperature` - 温度（None のとき DEFAULT_TEMPERATURE）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
        temperature: Option<f32>,
    ) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_key_env = api_key_env.unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let temperature = temperature.map(f64::from).unwrap_or(DEFAULT_TEMPERATURE);
        Ok(Self {
            model,
            base_url,
            api_key_env,
            temperature,
        })
    }

    /// API キーを読む環境変数名
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> Option<String> {
        env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| format!("Bearer {}", key))
    }

    fn error_from_response(status: reqwest::StatusCode, response_text: &str) -> Error {
        let error_msg = if let Ok(v) = serde_json::from_str::<Value>(response_text) {
            v["error"]["message"]
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
        } else {
            format!("HTTP {}: {}", status, response_text)
        };
        Error::http(format!("Chat completions error: {}", error_msg))
    }
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        Ok(json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "stream": false
        }))
    }

    fn stream_events(
        &self,
        request_json: &str,
        callback: &mut dyn FnMut(LlmEvent) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let mut payload: Value = serde_json::from_str(request_json)
            .map_err(|e| Error::json(format!("Failed to parse request JSON: {}", e)))?;
        payload["stream"] = json!(true);
        let body = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;

        let mut builder = reqwest::blocking::Client::new()
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(body);

        if let Some(auth) = self.auth_header() {
            builder = builder.header("Authorization", auth);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let response_text = response
                .text()
                .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;
            return Err(Self::error_from_response(status, &response_text));
        }

        let reader = BufReader::new(response);
        let mut finish = FinishReason::Stop;

        for line_result in reader.lines() {
            let line = line_result
                .map_err(|e| Error::http(format!("Failed to read stream line: {}", e)))?;
            if !line.starts_with("data: ") {
                continue;
            }
            let data = line["data: ".len()..].trim();
            if data == "[DONE]" {
                break;
            }

            let v: Value = match serde_json::from_str(data) {
                Ok(x) => x,
                Err(_) => continue,
            };

            let choice = match v["choices"].get(0) {
                Some(c) => c,
                None => continue,
            };

            // content: 文字列のほか、互換 API の content parts 配列にも対応
            if let Some(s) = choice["delta"]["content"].as_str() {
                if !s.is_empty() {
                    callback(LlmEvent::TextDelta(s.to_string()))?;
                }
            } else if let Some(parts) = choice["delta"]["content"].as_array() {
                for part in parts {
                    if let Some(text) = part["text"].as_str() {
                        if !text.is_empty() {
                            callback(LlmEvent::TextDelta(text.to_string()))?;
                        }
                    }
                }
            }

            // reasoning_content: GLM / DeepSeek 系の推論モデルが使うフィールド。
            // content が空のとき、reasoning_content にテキストが入る場合がある。
            if let Some(s) = choice["delta"]["reasoning_content"].as_str() {
                if !s.is_empty() {
                    callback(LlmEvent::TextDelta(s.to_string()))?;
                }
            }

            if let Some(reason) = choice["finish_reason"].as_str() {
                finish = match reason {
                    "stop" => FinishReason::Stop,
                    "length" => FinishReason::Length,
                    other => FinishReason::Other(other.to_string()),
                };
            }
        }

        callback(LlmEvent::Completed { finish })?;
        Ok(())
    }
}
