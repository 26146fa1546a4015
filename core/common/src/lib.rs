//! ptutor共通ライブラリ
//!
//! `ptutor`コマンドで使う共有機能（エラー型・会話履歴・LLMプロバイダ・
//! ポートと標準アダプタ）を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// 会話履歴（セッション状態）
pub mod history;

/// LLMプロバイダとストリーミング
pub mod llm;

/// Outbound ポート（ファイル・環境変数・ログ・待機）
pub mod ports;

/// 標準アダプタ実装
pub mod adapter;

/// ストリーミング消費側の EventSink
pub mod sink;
