//! ストリーミングの「消費」実装（stdout への逐次表示）

use common::error::Error;
use common::llm::events::LlmEvent;
use common::sink::EventSink;
use std::io::{self, Write};

/// 標準出力へ表示（TextDelta を到着順にそのまま表示）
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for StdoutSink {
    fn on_event(&mut self, ev: &LlmEvent) -> Result<(), Error> {
        if let LlmEvent::TextDelta(s) = ev {
            print!("{}", s);
            io::stdout()
                .flush()
                .map_err(|e| Error::io_msg(format!("Failed to flush stdout: {}", e)))?;
        }
        Ok(())
    }

    fn on_end(&mut self) -> Result<(), Error> {
        // 応答の直後に空行を 1 つ挟む
        println!("\n");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_sink_text_delta() {
        let mut sink = StdoutSink::new();
        let ev = LlmEvent::TextDelta("hello".to_string());
        assert!(sink.on_event(&ev).is_ok());
        assert!(sink.on_end().is_ok());
    }
}
