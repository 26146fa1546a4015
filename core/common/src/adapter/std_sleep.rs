//! 標準待機実装（std::thread::sleep を委譲）

use crate::ports::outbound::Sleep;
use std::time::Duration;

/// 現在のスレッドを実際にブロックする Sleep 実装
#[derive(Debug, Clone, Default)]
pub struct StdSleep;

impl Sleep for StdSleep {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
