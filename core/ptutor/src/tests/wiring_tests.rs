use std::path::PathBuf;

use common::domain::ProviderName;

use crate::cli::Config;
use crate::wiring::wire_tutor;

/// 起動時の配線を 1 つのテストで順に検証する。
/// 環境変数（PTUTOR_HOME / OPENAI_API_KEY）を触るため、並列実行で
/// 競合しないようにシナリオをまとめている。
#[test]
fn test_wire_tutor_startup_scenarios() {
    let home = tempfile::tempdir().unwrap();
    std::env::set_var("PTUTOR_HOME", home.path());
    std::env::remove_var("OPENAI_API_KEY");

    let persona_path = home.path().join("Theresa.txt");
    std::fs::write(&persona_path, "你是一个导师。").unwrap();

    // echo プロファイル + persona あり → 組み立て成功
    let config = Config {
        profile: Some(ProviderName::new("echo")),
        persona: Some(persona_path.clone()),
        ..Config::default()
    };
    let app = wire_tutor(&config).unwrap();
    assert_eq!(app.profile, "echo");
    assert_eq!(app.tutor.history().len(), 1);
    assert_eq!(app.tutor.history().messages()[0].content, "你是一个导师。");

    // persona ファイル欠落 → 致命的 I/O エラー
    let config = Config {
        profile: Some(ProviderName::new("echo")),
        persona: Some(PathBuf::from(home.path().join("missing.txt"))),
        ..Config::default()
    };
    let err = wire_tutor(&config).unwrap_err();
    assert_eq!(err.exit_code(), 74);
    assert!(err.to_string().contains("Failed to read"));

    // 不明なプロファイル → usage エラー
    let config = Config {
        profile: Some(ProviderName::new("nonexistent")),
        persona: Some(persona_path.clone()),
        ..Config::default()
    };
    let err = wire_tutor(&config).unwrap_err();
    assert!(err.is_usage());

    // glm（既定）は API キー必須 → 未設定なら致命的 env エラー
    let config = Config {
        persona: Some(persona_path.clone()),
        ..Config::default()
    };
    let err = wire_tutor(&config).unwrap_err();
    assert_eq!(err.exit_code(), 78);
    assert!(err.to_string().contains("OPENAI_API_KEY"));

    // キーを設定すれば glm でも組み立て成功
    std::env::set_var("OPENAI_API_KEY", "test-key");
    let config = Config {
        persona: Some(persona_path),
        ..Config::default()
    };
    let app = wire_tutor(&config).unwrap();
    assert_eq!(app.profile, "glm");

    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("PTUTOR_HOME");
}
