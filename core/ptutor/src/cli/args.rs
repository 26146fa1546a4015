use clap::builder::ArgAction;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use std::path::PathBuf;

/// 解析済みの起動オプション
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --persona: persona ファイルのパス（未指定時は Theresa.txt）
    pub persona: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            profile: None,
            model: None,
            persona: None,
        }
    }
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("ptutor")
        .about("Interactive streaming tutor for probability & statistics")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror structured log records to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (glm, echo, or a profiles.json entry)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. glm-4.5)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("persona")
                .long("persona")
                .value_name("path")
                .help("Path to the persona file used as the system message")
                .num_args(1),
        )
}

/// プロセスの引数から Config を解析する
pub fn parse_args() -> Result<Config, Error> {
    parse_args_from(std::env::args())
}

/// 任意の引数列から Config を解析する（テスト用の入口）
pub fn parse_args_from<I, T>(args: I) -> Result<Config, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    Ok(Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        profile: matches
            .get_one::<String>("profile")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        persona: matches
            .get_one::<String>("persona")
            .map(PathBuf::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let config = parse_args_from(["ptutor"]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_help() {
        let config = parse_args_from(["ptutor", "-h"]).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_profile_and_model() {
        let config = parse_args_from(["ptutor", "-p", "echo", "-m", "glm-4.5"]).unwrap();
        assert_eq!(config.profile, Some(ProviderName::new("echo")));
        assert_eq!(config.model, Some(ModelName::new("glm-4.5")));
    }

    #[test]
    fn test_parse_persona_path() {
        let config = parse_args_from(["ptutor", "--persona", "personas/strict.txt"]).unwrap();
        assert_eq!(config.persona, Some(PathBuf::from("personas/strict.txt")));
    }

    #[test]
    fn test_parse_verbose() {
        let config = parse_args_from(["ptutor", "--verbose"]).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_unknown_flag_is_usage_error() {
        let err = parse_args_from(["ptutor", "--bogus"]).unwrap_err();
        assert!(err.is_usage());
    }
}
