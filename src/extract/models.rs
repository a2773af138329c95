//! Data models for rule-based extraction.

use serde::{Deserialize, Serialize};

/// A task assigned to somebody during the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    /// Who the task belongs to. Defaults to the caller-supplied user name
    /// when the sentence names no explicit subject.
    pub owner: String,
    /// The task text as captured from the sentence.
    pub task: String,
    /// Raw due-date cue found in the sentence ("Friday", "tomorrow",
    /// "04/12"), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

impl ActionItem {
    pub fn new(owner: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            task: task.into(),
            due: None,
        }
    }

    pub fn with_due(mut self, due: Option<String>) -> Self {
        self.due = due;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_wire_format() {
        let item = ActionItem::new("Alice", "prepare the report").with_due(Some("Friday".into()));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"owner\":\"Alice\""));
        assert!(json.contains("\"due\":\"Friday\""));

        let back: ActionItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_due_omitted_when_absent() {
        let json = serde_json::to_string(&ActionItem::new("Bob", "send notes")).unwrap();
        assert!(!json.contains("due"));
    }
}
