//! Notification list state for the inbox page and navbar badge.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NotificationsState {
    pub fn unread_count(&self) -> usize {
        unread_count(&self.items)
    }

    /// IDs of unread notifications, in list order.
    pub fn unread_ids(&self) -> Vec<String> {
        self.items.iter().filter(|n| !n.is_read).map(|n| n.id.clone()).collect()
    }

    /// Flag one notification as read. Returns whether anything changed.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id && !n.is_read) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.is_read = true;
        }
    }
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.is_read).count()
}

/// Badge text; large counts collapse to `9+`.
pub fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=9 => Some(count.to_string()),
        _ => Some("9+".to_owned()),
    }
}
