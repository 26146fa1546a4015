//! プロバイダを LlmEventStream に接続するアダプタ
//!
//! 会話履歴からリクエストペイロードを組み立て、プロバイダのストリームを
//! そのまま LlmEvent 列として流す。

use common::error::Error;
use common::history::Message;
use common::llm::events::LlmEvent;
use common::llm::{AnyProvider, LlmProvider};

use crate::ports::outbound::LlmEventStream;

/// AnyProvider を駆動する標準の LlmEventStream 実装
pub struct ProviderEventStream {
    provider: AnyProvider,
}

impl ProviderEventStream {
    pub fn new(provider: AnyProvider) -> Self {
        Self { provider }
    }
}

impl LlmEventStream for ProviderEventStream {
    fn stream_events(
        &self,
        messages: &[Message],
        callback: &mut dyn FnMut(LlmEvent) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let payload = self.provider.make_request_payload(messages)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        self.provider.stream_events(&request_json, callback)
    }
}
