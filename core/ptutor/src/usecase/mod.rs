//! ユースケース（導師クライアントと対話ループ）

pub mod repl;
pub mod tutor;

pub use tutor::Tutor;
