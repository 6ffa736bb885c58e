use indexmap::IndexMap;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == MessageLevel::Error
    }
}

/// Structured result of an operation.
///
/// Read operations fill the data fields; mutating operations report exactly
/// one message, either a success confirmation or a specific validation error
/// naming the field to fix.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub categories: Vec<String>,
    pub entries: IndexMap<String, String>,
    pub content: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_entries(mut self, entries: IndexMap<String, String>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    /// Whether any message reports a validation failure.
    pub fn failed(&self) -> bool {
        self.messages.iter().any(CmdMessage::is_error)
    }

    fn rejected(reason: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::error(reason));
        result
    }
}
