//! 配線: 標準アダプタで導師クライアントを組み立てる
//!
//! 起動時の致命的エラー（API キー未設定・persona ファイル欠落）はここで検出し、
//! そのまま main へ返してプロセスを終了させる。

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdEnvResolver, StdFileSystem, StdSleep, StderrLog, TeeLog};
use common::error::Error;
use common::llm::{create_provider, load_profiles_config, resolve_provider, ProviderType};
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::ProviderEventStream;
use crate::cli::Config;
use crate::usecase::Tutor;

/// persona ファイルの既定パス
pub const DEFAULT_PERSONA_PATH: &str = "Theresa.txt";

/// 組み立て済みアプリケーション
pub struct App {
    pub tutor: Tutor,
    pub logger: Arc<dyn Log>,
    /// 解決に使ったプロファイル名（ログ用）
    pub profile: String,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

/// 配線: 標準アダプタで Tutor を組み立てる
pub fn wire_tutor(config: &Config) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);

    // プロファイル解決（profiles.json は任意）
    let profiles = load_profiles_config(fs.as_ref(), env_resolver.as_ref())?;
    let resolved = resolve_provider(config.profile.as_ref(), profiles.as_ref())?;

    // API キーの存在チェック（致命的）。echo はキー不要。
    if resolved.provider_type == ProviderType::OpenAiCompat {
        let key_env = resolved
            .api_key_env
            .clone()
            .unwrap_or_else(|| "OPENAI_API_KEY".to_string());
        if env_resolver.secret(&key_env).is_none() {
            return Err(Error::env(format!("请设置 {} 环境变量。", key_env)));
        }
    }

    // persona の読み込み（致命的）
    let persona_path = config
        .persona
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PERSONA_PATH));
    let persona = fs.read_to_string(&persona_path)?;

    // 構造化ログ。--verbose のときは stderr にも流す
    let log_path = env_resolver.resolve_log_path()?;
    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), log_path));
    let logger: Arc<dyn Log> = if config.verbose {
        Arc::new(TeeLog::new(vec![file_log, Arc::new(StderrLog::new())]))
    } else {
        file_log
    };

    let model = config
        .model
        .as_ref()
        .map(|m| m.as_ref().to_string())
        .or_else(|| resolved.model.clone());
    let provider = create_provider(
        resolved.provider_type,
        model,
        resolved.base_url.clone(),
        resolved.api_key_env.clone(),
        resolved.temperature,
    )?;

    let stream = Arc::new(ProviderEventStream::new(provider));
    let tutor = Tutor::new(persona, stream, Arc::new(StdSleep), Arc::clone(&logger));

    Ok(App {
        tutor,
        logger,
        profile: resolved.profile_name,
    })
}
