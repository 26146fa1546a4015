//! 待機の抽象（リトライのバックオフ用）
//!
//! usecase はこの trait 経由で待機し、テストでは呼び出し回数を記録する
//! 実装に差し替えて実時間を使わない。

use std::time::Duration;

/// 一定時間ブロックする能力
///
/// 実装は `common::adapter::StdSleep` やテスト用の記録スタブなど。
pub trait Sleep: Send + Sync {
    fn sleep(&self, duration: Duration);
}
