//! ストリーミングの「消費」側（表示）を分離する EventSink
//!
//! LlmEvent を受け取り、stdout への逐次表示などに振り分ける。

use crate::error::Error;
use crate::llm::events::LlmEvent;

/// イベントを受け取る Sink（表示の責務を分離）
pub trait EventSink: Send {
    /// 1 イベントを処理（到着順に呼ばれる）
    fn on_event(&mut self, ev: &LlmEvent) -> Result<(), Error>;
    /// ストリーム終了時（オプションで flush 等）
    fn on_end(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// 受け取った TextDelta を蓄積するだけの Sink（テスト・検証用）
#[derive(Debug, Default)]
pub struct CollectSink {
    buffer: String,
    deltas: Vec<String>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn deltas(&self) -> &[String] {
        &self.deltas
    }
}

impl EventSink for CollectSink {
    fn on_event(&mut self, ev: &LlmEvent) -> Result<(), Error> {
        if let LlmEvent::TextDelta(s) = ev {
            self.buffer.push_str(s);
            self.deltas.push(s.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::events::FinishReason;

    #[test]
    fn test_collect_sink_accumulates_in_order() {
        let mut sink = CollectSink::new();
        sink.on_event(&LlmEvent::TextDelta("概率".to_string())).unwrap();
        sink.on_event(&LlmEvent::TextDelta("论".to_string())).unwrap();
        sink.on_event(&LlmEvent::Completed {
            finish: FinishReason::Stop,
        })
        .unwrap();
        assert_eq!(sink.text(), "概率论");
        assert_eq!(sink.deltas().len(), 2);
    }
}
