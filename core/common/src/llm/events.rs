//! LLMストリームの共通イベント型
//!
//! プロバイダごとの差異（delta の payload 形状など）を adapter 層で吸収し、
//! 共通のイベント列に正規化する。

use serde::{Deserialize, Serialize};

/// ストリーム終了理由
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// 通常終了
    Stop,
    /// 長さ制限
    Length,
    /// その他（プロバイダ固有）
    Other(String),
}

/// LLMストリームから来る正規化済みイベント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LlmEvent {
    /// アシスタントテキストの増分
    TextDelta(String),
    /// ストリーム完了
    Completed { finish: FinishReason },
    /// ストリーム失敗
    Failed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_delta() {
        let ev = LlmEvent::TextDelta("hello".to_string());
        assert!(matches!(ev, LlmEvent::TextDelta(s) if s == "hello"));
    }

    #[test]
    fn test_completed_stop() {
        let ev = LlmEvent::Completed {
            finish: FinishReason::Stop,
        };
        assert!(matches!(ev, LlmEvent::Completed { finish: FinishReason::Stop }));
    }

    #[test]
    fn test_failed_carries_message() {
        let ev = LlmEvent::Failed {
            message: "HTTP 500".to_string(),
        };
        assert!(matches!(ev, LlmEvent::Failed { message } if message == "HTTP 500"));
    }
}
