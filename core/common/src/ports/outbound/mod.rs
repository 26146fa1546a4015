//! Outbound ポート（外界への依存の抽象）

pub mod env_resolver;
pub mod fs;
pub mod log;
pub mod sleep;

pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use sleep::Sleep;
