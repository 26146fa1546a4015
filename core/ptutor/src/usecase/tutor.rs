//! 導師クライアント
//!
//! リモート呼び出しをリトライ・ストリーミング集約・履歴管理で包む。
//! リモート起因の失敗はこの中に閉じ込め、対話ループへは例外を出さない。

use std::sync::Arc;
use std::time::Duration;

use common::error::Error;
use common::history::History;
use common::llm::events::LlmEvent;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord, Sleep};
use common::sink::EventSink;

use crate::domain::TaskKind;
use crate::ports::outbound::LlmEventStream;

/// リモート呼び出しの最大試行回数
pub const MAX_RETRIES: u32 = 5;

/// 失敗から次の試行までの待機時間
pub const RETRY_BACKOFF: Duration = Duration::from_secs(2);

/// リトライを使い切ったときに返す定型文
pub const SERVICE_UNAVAILABLE_NOTICE: &str = "❌ 服务暂时不可用，请稍后再试。";

/// 不明なタスク番号への定型文
pub const UNKNOWN_TASK_NOTICE: &str = "❌ 未识别的任务类型，请输入有效的任务编号（1-4）。";

/// 導師クライアント
///
/// 起動時に 1 回だけ構築し、対話ループへ渡す（プロセス全体の可変グローバルは持たない）。
pub struct Tutor {
    history: History,
    stream: Arc<dyn LlmEventStream>,
    sleep: Arc<dyn Sleep>,
    logger: Arc<dyn Log>,
}

impl Tutor {
    pub fn new(
        persona: impl Into<String>,
        stream: Arc<dyn LlmEventStream>,
        sleep: Arc<dyn Sleep>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            history: History::with_persona(persona),
            stream,
            sleep,
            logger,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// タスク番号で振り分けて応答を得る
    ///
    /// 不明な番号は usage エラーを返し、履歴にもリモートにも触れない。
    pub fn chat(
        &mut self,
        task_kind: u32,
        user_input: &str,
        sink: &mut dyn EventSink,
    ) -> Result<String, Error> {
        let task = TaskKind::from_index(task_kind)
            .ok_or_else(|| Error::invalid_argument(UNKNOWN_TASK_NOTICE))?;
        println!("{}\n", task.working_notice());
        let prompt = task.build_prompt(user_input);
        Ok(self.respond(&prompt, sink))
    }

    /// プロンプトへの応答を得る
    ///
    /// ユーザーメッセージは試行前に 1 回だけ履歴へ積む。成功したら全文を
    /// assistant として積み、trim する。全試行が失敗したら定型文を返す
    /// （エラーは返さない）。
    pub fn respond(&mut self, prompt: &str, sink: &mut dyn EventSink) -> String {
        self.history.push_user(prompt);

        for attempt in 1..=MAX_RETRIES {
            match self.stream_once(sink) {
                Ok(reply) => {
                    self.history.push_assistant(reply.clone());
                    self.history.trim();
                    self.log_exchange(attempt, reply.chars().count());
                    return reply;
                }
                Err(e) => {
                    eprintln!("⚠️ 第 {} 次尝试失败: {}", attempt, e);
                    self.log_attempt_failure(attempt, &e);
                    if attempt < MAX_RETRIES {
                        self.sleep.sleep(RETRY_BACKOFF);
                    }
                }
            }
        }

        SERVICE_UNAVAILABLE_NOTICE.to_string()
    }

    /// 1 回分のストリーミング呼び出し。断片は到着順に sink へ流しつつ連結する。
    fn stream_once(&self, sink: &mut dyn EventSink) -> Result<String, Error> {
        let mut reply = String::new();
        let mut failed: Option<String> = None;

        self.stream
            .stream_events(self.history.messages(), &mut |ev| {
                match &ev {
                    LlmEvent::TextDelta(s) => {
                        sink.on_event(&ev)?;
                        reply.push_str(s);
                    }
                    LlmEvent::Completed { .. } => {}
                    LlmEvent::Failed { message } => failed = Some(message.clone()),
                }
                Ok(())
            })?;

        if let Some(message) = failed {
            return Err(Error::http(format!("LLM stream failed: {}", message)));
        }
        sink.on_end()?;
        Ok(reply)
    }

    /// デバッグ用: 現在の履歴の長さと各メッセージの先頭を表示する
    pub fn show_memory(&self) {
        println!("\n🧠 当前记忆长度: {} 条消息", self.history.len());
        for msg in self.history.messages() {
            let preview: String = msg.content.chars().take(20).collect();
            println!("[{}]: {}...", msg.role, preview);
        }
    }

    fn log_attempt_failure(&self, attempt: u32, error: &Error) {
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: error.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("retry".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("attempt".to_string(), serde_json::json!(attempt));
                m.insert("max_retries".to_string(), serde_json::json!(MAX_RETRIES));
                Some(m)
            },
        });
    }

    fn log_exchange(&self, attempt: u32, reply_chars: usize) {
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "exchange completed".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("exchange".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("attempt".to_string(), serde_json::json!(attempt));
                m.insert("reply_chars".to_string(), serde_json::json!(reply_chars));
                m.insert(
                    "history_len".to_string(),
                    serde_json::json!(self.history.len()),
                );
                Some(m)
            },
        });
    }
}
