//! LLMプロバイダのトレイト定義

use crate::error::Error;
use crate::history::Message;
use crate::llm::events::LlmEvent;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（openai_compat、echo など）はこのトレイトを実装する。
/// テストではモック実装に差し替える。
pub trait LlmProvider {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成する
    ///
    /// `messages` は persona（system）を含む会話履歴の全量。
    /// `stream` は false で埋めておき、ストリーミング実行時に反転する。
    fn make_request_payload(&self, messages: &[Message]) -> Result<Value, Error>;

    /// ストリーミングHTTPリクエストを実行し、LlmEvent 列に正規化して
    /// コールバックに渡す（チャンク受信ごとに即コールバック）
    fn stream_events(
        &self,
        request_json: &str,
        callback: &mut dyn FnMut(LlmEvent) -> Result<(), Error>,
    ) -> Result<(), Error>;
}
