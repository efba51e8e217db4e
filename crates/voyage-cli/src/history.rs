use chrono::{DateTime, Local};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::User => "you",
            Role::Assistant => "voyage",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Local>,
}

/// Ordered transcript of one chat, kept for re-display only.
#[derive(Debug, Default)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
            at: Local::now(),
        });
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn render(&self) -> String {
        if self.messages.is_empty() {
            return "(no messages yet)".to_string();
        }

        let mut out = String::new();
        for msg in &self.messages {
            let _ = writeln!(
                out,
                "[{}] {}> {}",
                msg.at.format("%H:%M:%S"),
                msg.role.label(),
                msg.content
            );
        }
        out
    }
}
