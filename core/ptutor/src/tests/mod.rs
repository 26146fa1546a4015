//! シナリオテスト（StubLlm / RecordingSleep による通しの検証）

mod wiring_tests;
