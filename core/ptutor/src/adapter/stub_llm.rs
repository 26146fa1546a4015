//! テスト用: 台本どおりの LlmEvent 列・失敗を返す LlmEventStream 実装と、
//! 待機を記録するだけの Sleep 実装

use common::error::Error;
use common::history::Message;
use common::llm::events::{FinishReason, LlmEvent};
use common::ports::outbound::Sleep;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::ports::outbound::LlmEventStream;

/// 1 回分の呼び出し結果の台本
pub enum StubOutcome {
    /// コールバックへ流すイベント列
    Events(Vec<LlmEvent>),
    /// ストリーム開始自体の失敗
    Err(Error),
}

/// テスト用: 呼び出しごとに台本を消費する Stub
pub struct StubLlm {
    outcomes: RefCell<VecDeque<StubOutcome>>,
    calls: RefCell<usize>,
    seen: RefCell<Vec<Vec<Message>>>,
}

impl StubLlm {
    pub fn new(outcomes: Vec<StubOutcome>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            calls: RefCell::new(0),
            seen: RefCell::new(Vec::new()),
        }
    }

    /// 1 回で成功し、`deltas` を順に流す台本
    pub fn deltas_once(deltas: &[&str]) -> Self {
        Self::new(vec![StubOutcome::Events(Self::delta_events(deltas))])
    }

    /// `failures` 回失敗した後、`deltas` で成功する台本
    pub fn failing_then(failures: usize, deltas: &[&str]) -> Self {
        let mut outcomes: Vec<StubOutcome> = (0..failures)
            .map(|i| StubOutcome::Err(Error::http(format!("connection reset (attempt {})", i + 1))))
            .collect();
        outcomes.push(StubOutcome::Events(Self::delta_events(deltas)));
        Self::new(outcomes)
    }

    /// `failures` 回失敗する台本（成功しない）
    pub fn always_failing(failures: usize) -> Self {
        Self::new(
            (0..failures)
                .map(|i| StubOutcome::Err(Error::http(format!("HTTP 503 (attempt {})", i + 1))))
                .collect(),
        )
    }

    fn delta_events(deltas: &[&str]) -> Vec<LlmEvent> {
        let mut events: Vec<LlmEvent> = deltas
            .iter()
            .map(|d| LlmEvent::TextDelta(d.to_string()))
            .collect();
        events.push(LlmEvent::Completed {
            finish: FinishReason::Stop,
        });
        events
    }

    /// これまでの呼び出し回数
    pub fn call_count(&self) -> usize {
        *self.calls.borrow()
    }

    /// 呼び出しごとに渡されたメッセージ列
    pub fn seen_messages(&self) -> Vec<Vec<Message>> {
        self.seen.borrow().clone()
    }
}

impl LlmEventStream for StubLlm {
    fn stream_events(
        &self,
        messages: &[Message],
        callback: &mut dyn FnMut(LlmEvent) -> Result<(), Error>,
    ) -> Result<(), Error> {
        *self.calls.borrow_mut() += 1;
        self.seen.borrow_mut().push(messages.to_vec());
        let outcome = self
            .outcomes
            .borrow_mut()
            .pop_front()
            .expect("StubLlm: unexpected extra attempt");
        match outcome {
            StubOutcome::Events(events) => {
                for ev in events {
                    callback(ev)?;
                }
                Ok(())
            }
            StubOutcome::Err(e) => Err(e),
        }
    }
}

/// テスト用: sleep せず待機時間を記録するだけの Sleep 実装
#[derive(Debug, Default)]
pub struct RecordingSleep {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.sleeps.lock().unwrap().len()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Sleep for RecordingSleep {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
