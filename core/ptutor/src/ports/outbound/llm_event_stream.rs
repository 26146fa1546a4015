//! LLM イベントストリーム Outbound ポート
//!
//! テストでは StubLlm で差し替え可能。

use common::error::Error;
use common::history::Message;
use common::llm::events::LlmEvent;

/// LLM ストリームを LlmEvent 列で受け取る Outbound ポート
///
/// `messages` は persona（system）を含む会話履歴の全量。コールバックは
/// チャンクの到着順に呼ばれる。
pub trait LlmEventStream: Send {
    fn stream_events(
        &self,
        messages: &[Message],
        callback: &mut dyn FnMut(LlmEvent) -> Result<(), Error>,
    ) -> Result<(), Error>;
}
