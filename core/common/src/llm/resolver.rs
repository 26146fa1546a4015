//! profiles.json の読み込みとプロファイル解決

use crate::domain::ProviderName;
use crate::error::Error;
use crate::llm::config::{ProfilesConfig, ProviderTypeKind};
use crate::llm::factory::ProviderType;
use crate::ports::outbound::{EnvResolver, FileSystem};

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "glm", "echo"）。エラー表示用
    pub profile_name: String,
    pub provider_type: ProviderType,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
}

/// profiles.json を読み込む。ファイルが無ければ Ok(None)、JSON が壊れていれば Err（メッセージにパス含める）
pub fn load_profiles_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
) -> Result<Option<ProfilesConfig>, Error> {
    let path = env.resolve_profiles_config_path()?;
    if !fs.exists(path.as_path()) {
        return Ok(None);
    }
    let contents = fs
        .read_to_string(path.as_path())
        .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))?;
    ProfilesConfig::parse(&contents)
        .map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
        .map(Some)
}

fn provider_type_kind_to_provider_type(k: ProviderTypeKind) -> ProviderType {
    match k {
        ProviderTypeKind::OpenaiCompat => ProviderType::OpenAiCompat,
        ProviderTypeKind::Echo => ProviderType::Echo,
    }
}

/// 利用可能なビルトインプロファイル名
fn builtin_provider_names() -> &'static [&'static str] {
    &["glm", "echo"]
}

/// 要求されたプロファイル名（None の場合は default）と ProfilesConfig から ResolvedProvider を解決する。
/// 不明なプロファイルの場合は Error::invalid_argument（is_usage == true）で利用可能一覧を返す。
pub fn resolve_provider(
    requested: Option<&ProviderName>,
    cfg: Option<&ProfilesConfig>,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested.map(|r| r.as_ref()).unwrap_or_else(|| {
        cfg.and_then(|c| c.default_provider.as_deref())
            .unwrap_or("glm")
    });

    // 1) cfg.providers に名前があればそれを優先
    if let Some(cfg) = cfg {
        if let Some(profile) = cfg.providers.get(effective_name) {
            let provider_type = provider_type_kind_to_provider_type(profile.type_);
            return Ok(ResolvedProvider {
                profile_name: effective_name.to_string(),
                provider_type,
                base_url: profile.base_url.clone(),
                model: profile.model.clone(),
                api_key_env: profile.api_key_env.clone(),
                temperature: profile.temperature,
            });
        }
    }

    // 2) ビルトイン (ProviderType::from_str) を試す
    if let Some(provider_type) = ProviderType::from_str(effective_name) {
        return Ok(ResolvedProvider {
            profile_name: effective_name.to_string(),
            provider_type,
            base_url: None,
            model: None,
            api_key_env: None,
            temperature: None,
        });
    }

    // 3) どれも無ければ usage エラー
    let mut available: Vec<String> = builtin_provider_names()
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    if let Some(cfg) = cfg {
        for k in cfg.providers.keys() {
            if !available.contains(k) {
                available.push(k.clone());
            }
        }
    }
    available.sort();
    Err(Error::invalid_argument(format!(
        "Unknown profile: '{}'. Available: {}",
        effective_name,
        available.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::config::{ProfilesConfig, ProviderProfile, ProviderTypeKind};
    use std::collections::HashMap;

    #[test]
    fn test_resolve_no_cfg_defaults_to_glm() {
        let r = resolve_provider(None, None).unwrap();
        assert_eq!(r.profile_name, "glm");
        assert_eq!(r.provider_type, ProviderType::OpenAiCompat);
        assert!(r.model.is_none());
    }

    #[test]
    fn test_resolve_no_cfg_requested_echo() {
        let name = ProviderName::new("echo");
        let r = resolve_provider(Some(&name), None).unwrap();
        assert_eq!(r.provider_type, ProviderType::Echo);
    }

    #[test]
    fn test_resolve_no_cfg_unknown() {
        let name = ProviderName::new("unknown_profile");
        let e = resolve_provider(Some(&name), None).unwrap_err();
        assert!(e.is_usage());
        assert!(e.to_string().contains("Unknown profile"));
        assert!(e.to_string().contains("unknown_profile"));
        assert!(e.to_string().contains("Available"));
    }

    #[test]
    fn test_resolve_cfg_default_provider() {
        let cfg = ProfilesConfig {
            default_provider: Some("local".to_string()),
            providers: {
                let mut m = HashMap::new();
                m.insert(
                    "local".to_string(),
                    ProviderProfile {
                        type_: ProviderTypeKind::OpenaiCompat,
                        base_url: Some("http://localhost:11434/v1".to_string()),
                        model: Some("qwen3".to_string()),
                        api_key_env: Some("LOCAL_KEY".to_string()),
                        temperature: Some(0.7),
                    },
                );
                m
            },
        };
        let r = resolve_provider(None, Some(&cfg)).unwrap();
        assert_eq!(r.profile_name, "local");
        assert_eq!(r.provider_type, ProviderType::OpenAiCompat);
        assert_eq!(r.base_url.as_deref(), Some("http://localhost:11434/v1"));
        assert_eq!(r.model.as_deref(), Some("qwen3"));
        assert_eq!(r.api_key_env.as_deref(), Some("LOCAL_KEY"));
        assert_eq!(r.temperature, Some(0.7));
    }

    #[test]
    fn test_resolve_cfg_requested_overrides_default() {
        let cfg = ProfilesConfig {
            default_provider: Some("glm".to_string()),
            providers: HashMap::new(),
        };
        let name = ProviderName::new("echo");
        let r = resolve_provider(Some(&name), Some(&cfg)).unwrap();
        assert_eq!(r.provider_type, ProviderType::Echo);
    }

    #[test]
    fn test_resolve_cfg_unknown_lists_custom_names() {
        let cfg = ProfilesConfig {
            default_provider: None,
            providers: {
                let mut m = HashMap::new();
                m.insert(
                    "my_custom".to_string(),
                    ProviderProfile {
                        type_: ProviderTypeKind::Echo,
                        base_url: None,
                        model: None,
                        api_key_env: None,
                        temperature: None,
                    },
                );
                m
            },
        };
        let name = ProviderName::new("nonexistent");
        let e = resolve_provider(Some(&name), Some(&cfg)).unwrap_err();
        assert!(e.is_usage());
        let msg = e.to_string();
        assert!(msg.contains("my_custom"));
        assert!(msg.contains("glm"));
    }
}
