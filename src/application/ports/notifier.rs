//! Notifier Port - 提示消息（toast）输出

use serde::Serialize;

/// 一条提示消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Toast {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Notifier Port
pub trait NotifierPort: Send + Sync {
    fn notify(&self, toast: Toast);
}
