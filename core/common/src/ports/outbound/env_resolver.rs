//! 環境変数解決 Outbound ポート
//!
//! API キーやホームディレクトリを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 環境変数 `name` の値を返す（未設定・空文字は None）
    fn secret(&self, name: &str) -> Option<String>;

    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. PTUTOR_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/ptutor（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/ptutor
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// プロバイダプロファイル設定ファイルのパス（ホーム直下の profiles.json）
    fn resolve_profiles_config_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("profiles.json"))
    }

    /// 構造化ログファイルのパス（ホーム配下の log/ptutor.jsonl）
    fn resolve_log_path(&self) -> Result<PathBuf, Error> {
        Ok(self.resolve_home_dir()?.join("log").join("ptutor.jsonl"))
    }
}
