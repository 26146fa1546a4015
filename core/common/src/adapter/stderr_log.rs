//! 人間向けログ実装（LogRecord → stderr への要点のみ出力）
//!
//! --verbose 時にファイルログと並行して使う。payload の全量は出さず要点のみ。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

/// stderr に整形して出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl StderrLog {
    pub fn new() -> Self {
        Self
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let kind = record.kind.as_deref().unwrap_or("-");
        match record.level {
            LogLevel::Error | LogLevel::Warn => {
                eprintln!(
                    "[{}] {} {} {}",
                    record.level.as_str(),
                    record.ts,
                    kind,
                    record.message
                );
            }
            _ => {
                eprintln!("[{}] {} {}", record.level.as_str(), kind, record.message);
            }
        }
        Ok(())
    }
}

/// 複数の Log へ同報する Log 実装
pub struct TeeLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(sinks: Vec<Arc<dyn Log>>) -> Self {
        Self { sinks }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        for sink in &self.sinks {
            sink.log(record)?;
        }
        Ok(())
    }
}
