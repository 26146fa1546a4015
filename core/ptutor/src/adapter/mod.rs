//! アダプタ実装（プロバイダ接続・表示・テストスタブ）

pub mod provider_stream;
pub mod stdout_sink;

#[cfg(test)]
pub mod stub_llm;

pub use provider_stream::ProviderEventStream;
pub use stdout_sink::StdoutSink;
