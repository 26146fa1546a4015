//! プロバイダファクトリー
//!
//! プロバイダタイプに基づいて適切なプロバイダを作成します。

use crate::error::Error;
use crate::history::Message;
use crate::llm::echo::EchoProvider;
use crate::llm::events::LlmEvent;
use crate::llm::openai_compat::OpenAiCompatProvider;
use crate::llm::provider::LlmProvider;
use serde_json::Value;

/// プロバイダタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// OpenAI Chat Completions 互換 (/chat/completions)
    OpenAiCompat,
    /// Echo（固定文を返すだけ）
    Echo,
}

impl ProviderType {
    /// 文字列からプロバイダタイプを解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openai_compat" | "glm" => Some(Self::OpenAiCompat),
            "echo" => Some(Self::Echo),
            _ => None,
        }
    }

    /// プロバイダタイプを文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAiCompat => "openai_compat",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダのenumラッパー
///
/// 異なるプロバイダタイプを型安全に扱うために使用します。
pub enum AnyProvider {
    OpenAiCompat(OpenAiCompatProvider),
    Echo(EchoProvider),
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAiCompat(p) => p.name(),
            Self::Echo(p) => p.name(),
        }
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        match self {
            Self::OpenAiCompat(p) => p.make_request_payload(messages),
            Self::Echo(p) => p.make_request_payload(messages),
        }
    }

    fn stream_events(
        &self,
        request_json: &str,
        callback: &mut dyn FnMut(LlmEvent) -> Result<(), Error>,
    ) -> Result<(), Error> {
        match self {
            Self::OpenAiCompat(p) => p.stream_events(request_json, callback),
            Self::Echo(p) => p.stream_events(request_json, callback),
        }
    }
}

/// プロバイダを作成する
///
/// # Arguments
/// * `provider_type` - プロバイダタイプ
/// * `model` - モデル名（None のときプロバイダのデフォルト）
/// * `base_url` - ベース URL（OpenAiCompat 用。None のときデフォルト）
/// * `api_key_env` - API キーを読む環境変数名（OpenAiCompat 用。None のときデフォルト）
/// * `temperature` - 温度（OpenAiCompat 用。None のときデフォルト）
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
    temperature: Option<f32>,
) -> Result<AnyProvider, Error> {
    match provider_type {
        ProviderType::OpenAiCompat => {
            let provider = OpenAiCompatProvider::new(model, base_url, api_key_env, temperature)?;
            Ok(AnyProvider::OpenAiCompat(provider))
        }
        ProviderType::Echo => Ok(AnyProvider::Echo(EchoProvider::new())),
    }
}
