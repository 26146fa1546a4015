//! Echoプロバイダの実装
//!
//! このプロバイダは実際にLLM APIを呼び出さず、固定文をチャンク単位で返すだけです。
//! デバッグやテスト用に使用します。

use crate::error::Error;
use crate::history::Message;
use crate::llm::events::{FinishReason, LlmEvent};
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::thread;
use std::time::Duration;

const ECHO_RESPONSE: &str = "[Echo Provider] This is a simulated streaming response. \
It displays text chunk by chunk to demonstrate the streaming capability.";

/// Echoプロバイダ
pub struct EchoProvider;

impl EchoProvider {
    /// 新しいEchoプロバイダを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error> {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();
        Ok(json!({ "messages": messages, "stream": false }))
    }

    fn stream_events(
        &self,
        _request_json: &str,
        callback: &mut dyn FnMut(LlmEvent) -> Result<(), Error>,
    ) -> Result<(), Error> {
        for word in ECHO_RESPONSE.split_inclusive(' ') {
            callback(LlmEvent::TextDelta(word.to_string()))?;
            thread::sleep(Duration::from_millis(20));
        }
        callback(LlmEvent::Completed {
            finish: FinishReason::Stop,
        })?;
        Ok(())
    }
}
