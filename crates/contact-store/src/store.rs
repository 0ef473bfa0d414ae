//! The in-memory message store

use crate::message::{ContactMessage, NewMessage};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Append-only keyed collection of contact messages
///
/// Constructed once at process start and handed to the boundary layer by
/// reference. The lock serializes the occasional concurrent handler call;
/// every critical section is a single insert or a single snapshot read.
#[derive(Default)]
pub struct MessageStore {
    messages: RwLock<HashMap<String, ContactMessage>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a submission: assigns a fresh unique id, stamps the current
    /// time, and returns the stored record. Valid input cannot fail.
    pub fn create(&self, input: NewMessage) -> ContactMessage {
        let message = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            telegram_username: input.telegram_username,
            created_at: Utc::now(),
        };

        self.messages
            .write()
            .insert(message.id.clone(), message.clone());
        message
    }

    /// All stored records, most recent first
    pub fn list(&self) -> Vec<ContactMessage> {
        let mut messages: Vec<ContactMessage> =
            self.messages.read().values().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread::sleep;
    use std::time::Duration;

    fn submission(name: &str) -> NewMessage {
        NewMessage {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "Hello there".to_string(),
            message: "This is a sufficiently long message.".to_string(),
            telegram_username: None,
        }
    }

    #[test]
    fn test_create_returns_stored_record() {
        let store = MessageStore::new();
        let stored = store.create(NewMessage {
            telegram_username: Some("@alice".to_string()),
            ..submission("Alice")
        });

        assert!(!stored.id.is_empty());
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.telegram_username.as_deref(), Some("@alice"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = MessageStore::new();
        let mut seen = HashSet::new();

        for i in 0..100 {
            let stored = store.create(submission(&format!("Sender{}", i)));
            assert!(seen.insert(stored.id), "duplicate id generated");
        }
        assert_eq!(store.len(), 100);
    }

    #[test]
    fn test_list_is_newest_first() {
        let store = MessageStore::new();

        let a = store.create(submission("Alpha"));
        sleep(Duration::from_millis(5));
        let b = store.create(submission("Beta"));
        sleep(Duration::from_millis(5));
        let c = store.create(submission("Gamma"));

        let listed = store.list();
        let ids: Vec<&str> = listed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec![c.id.as_str(), b.id.as_str(), a.id.as_str()]);
    }

    #[test]
    fn test_list_on_empty_store() {
        let store = MessageStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
