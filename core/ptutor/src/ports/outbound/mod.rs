//! Outbound ポート

pub mod llm_event_stream;

pub use llm_event_stream::LlmEventStream;
