//! 会話履歴（セッション状態）
//!
//! persona（system メッセージ）を先頭に据えた role 付きメッセージ列を保持し、
//! 上限を超えたら古い方から捨てる。プロセス終了とともに破棄され、永続化しない。

/// メッセージのロール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// ワイヤ上のロール名（Chat Completions 互換 API の "role" 値）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// メッセージ（作成後は不変。並び順が会話順でそのまま文脈になる）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// 履歴の上限（trim 後は最大でこの件数）
pub const HISTORY_CAP: usize = 20;

/// セッションヒストリー（会話のメッセージ列）
///
/// 構築時に persona を system メッセージとして 1 件だけ積む。
#[derive(Debug, Clone)]
pub struct History {
    messages: Vec<Message>,
    cap: usize,
}

impl History {
    /// persona を先頭の system メッセージとして履歴を作る
    pub fn with_persona(persona: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(persona)],
            cap: HISTORY_CAP,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// 上限を超えていたら末尾 `cap - 1` 件だけを残す。
    ///
    /// 先頭の persona（system）は特別扱いしない。窓から外れれば落ちる。
    pub fn trim(&mut self) {
        if self.messages.len() > self.cap {
            let keep = self.cap - 1;
            let drop_count = self.messages.len() - keep;
            self.messages.drain(..drop_count);
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
