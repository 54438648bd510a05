use crate::models::Notification;
use dashmap::DashMap;
use std::sync::Arc;

/// Notifications per user.
///
/// A user's inbox is copied from the seed the first time it is touched and
/// lives independently afterwards. The unread count is always derived from
/// the entries, never stored.
#[derive(Debug, Clone, Default)]
pub struct NotificationInbox {
    seed: Arc<Vec<Notification>>,
    by_user: Arc<DashMap<String, Vec<Notification>>>,
}

impl NotificationInbox {
    pub fn new(seed: Vec<Notification>) -> Self {
        Self {
            seed: Arc::new(seed),
            by_user: Arc::new(DashMap::new()),
        }
    }

    fn with_inbox<R>(&self, user_id: &str, f: impl FnOnce(&mut Vec<Notification>) -> R) -> R {
        let mut inbox = self.by_user.entry(user_id.to_string()).or_insert_with(|| {
            self.seed
                .iter()
                .filter(|n| n.user_id == user_id)
                .cloned()
                .collect()
        });
        f(inbox.value_mut())
    }

    /// Newest first.
    pub fn list(&self, user_id: &str) -> Vec<Notification> {
        let mut notifications = self.with_inbox(user_id, |inbox| inbox.clone());
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.with_inbox(user_id, |inbox| inbox.iter().filter(|n| !n.is_read).count())
    }

    pub fn push(&self, notification: Notification) {
        let user_id = notification.user_id.clone();
        self.with_inbox(&user_id, |inbox| inbox.push(notification));
    }

    /// False when the user has no notification with that id.
    pub fn mark_read(&self, user_id: &str, id: &str) -> bool {
        self.with_inbox(user_id, |inbox| match inbox.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        })
    }

    /// Returns how many were unread.
    pub fn mark_all_read(&self, user_id: &str) -> usize {
        self.with_inbox(user_id, |inbox| {
            inbox
                .iter_mut()
                .filter(|n| !n.is_read)
                .map(|n| n.is_read = true)
                .count()
        })
    }

    pub fn delete(&self, user_id: &str, id: &str) -> bool {
        self.with_inbox(user_id, |inbox| {
            let before = inbox.len();
            inbox.retain(|n| n.id != id);
            inbox.len() != before
        })
    }

    pub fn clear(&self, user_id: &str) {
        self.with_inbox(user_id, Vec::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationType;
    use chrono::{Duration, Utc};

    fn notification(id: &str, user_id: &str, is_read: bool, age_minutes: i64) -> Notification {
        Notification {
            id: id.to_string(),
            user_id: user_id.to_string(),
            kind: NotificationType::Comment,
            title: "New comment".into(),
            message: "Someone replied".into(),
            link: "/problems/1".into(),
            is_read,
            created_at: Utc::now() - Duration::minutes(age_minutes),
            actor: None,
        }
    }

    fn inbox() -> NotificationInbox {
        NotificationInbox::new(vec![
            notification("a", "u1", false, 30),
            notification("b", "u1", true, 20),
            notification("c", "u1", false, 10),
            notification("d", "u2", false, 5),
        ])
    }

    fn unread_entries(inbox: &NotificationInbox, user: &str) -> usize {
        inbox.list(user).iter().filter(|n| !n.is_read).count()
    }

    #[test]
    fn test_seeded_on_first_access_newest_first() {
        let inbox = inbox();
        let ids: Vec<String> = inbox.list("u1").into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(inbox.unread_count("u1"), 2);
        assert!(inbox.list("nobody").is_empty());
    }

    #[test]
    fn test_unread_count_tracks_every_operation() {
        let inbox = inbox();
        let check = |inbox: &NotificationInbox| {
            assert_eq!(inbox.unread_count("u1"), unread_entries(inbox, "u1"));
        };

        check(&inbox);
        inbox.push(notification("e", "u1", false, 0));
        check(&inbox);
        assert_eq!(inbox.unread_count("u1"), 3);
        assert!(inbox.mark_read("u1", "a"));
        check(&inbox);
        assert!(inbox.delete("u1", "c"));
        check(&inbox);
        assert_eq!(inbox.mark_all_read("u1"), 1);
        check(&inbox);
        assert_eq!(inbox.unread_count("u1"), 0);
        inbox.clear("u1");
        check(&inbox);
        assert!(inbox.list("u1").is_empty());
    }

    #[test]
    fn test_unknown_ids_and_other_users() {
        let inbox = inbox();
        assert!(!inbox.mark_read("u1", "d"));
        assert!(!inbox.delete("u2", "a"));
        inbox.clear("u1");
        assert_eq!(inbox.unread_count("u2"), 1);
    }

    #[test]
    fn test_cleared_inbox_is_not_reseeded() {
        let inbox = inbox();
        inbox.clear("u1");
        assert!(inbox.list("u1").is_empty());
        assert_eq!(inbox.unread_count("u1"), 0);
    }
}
