//! FAQ accordion model

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FAQ_TITLE: &str = "Frequently Asked Questions";
/// Rendered instead of the accordion when there are no items
pub const EMPTY_FAQ_TEXT: &str = "No FAQs yet.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Returns every id that appears more than once, in first-repeat order
pub fn duplicate_ids(items: &[FaqItem]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for item in items {
        if !seen.insert(item.id.as_str()) && !duplicates.contains(&item.id.as_str()) {
            duplicates.push(item.id.as_str());
        }
    }

    duplicates
}

/// Logs duplicate ids; rendering continues either way
pub fn warn_duplicate_ids(items: &[FaqItem]) {
    for id in duplicate_ids(items) {
        leptos::logging::warn!("Duplicate FAQ id detected: {}", id);
    }
}

/// Single-open accordion: opening an item closes the previous one and
/// toggling the open item collapses it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn new(default_open: Option<&str>) -> Self {
        Self {
            open: default_open.map(str::to_string),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> FaqItem {
        FaqItem::new(id, format!("Question {id}?"), "Answer.")
    }

    #[test]
    fn test_no_duplicates() {
        let items = vec![item("a"), item("b"), item("c")];

        assert!(duplicate_ids(&items).is_empty());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let items = vec![item("a"), item("b"), item("a"), item("b"), item("a")];

        assert_eq!(duplicate_ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_accordion_single_open() {
        let mut accordion = Accordion::new(None);

        accordion.toggle("a");
        assert!(accordion.is_open("a"));

        accordion.toggle("b");
        assert!(accordion.is_open("b"));
        assert!(!accordion.is_open("a"));
    }

    #[test]
    fn test_accordion_collapsible() {
        let mut accordion = Accordion::new(Some("a"));
        assert_eq!(accordion.open_id(), Some("a"));

        accordion.toggle("a");

        assert_eq!(accordion.open_id(), None);
    }
}
