//! ポート定義（usecase が依存する抽象）

pub mod outbound;
