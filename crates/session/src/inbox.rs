//! Notification inbox state.
//!
//! The unread count is derived from the notifications on every call.

use catalog::{Notification, NotificationKind};
use std::fmt;
use std::str::FromStr;

/// Tabs of the notifications view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InboxTab {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl InboxTab {
    pub fn includes(&self, notification: &Notification) -> bool {
        match self {
            InboxTab::All => true,
            InboxTab::Unread => !notification.read,
            InboxTab::Kind(kind) => notification.kind == *kind,
        }
    }
}

/// Error returned when a tab name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown notification tab '{}'", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for InboxTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(InboxTab::All),
            "unread" => Ok(InboxTab::Unread),
            other => other
                .parse::<NotificationKind>()
                .map(InboxTab::Kind)
                .map_err(|_| UnknownTab(s.to_string())),
        }
    }
}

/// Where opening a notification takes the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ItemDetails(String),
    Messages(String),
}

#[derive(Debug, Clone, Default)]
pub struct NotificationInbox {
    notifications: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Notifications shown under `tab`, in inbox order
    pub fn filter(&self, tab: InboxTab) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| tab.includes(n))
            .collect()
    }

    /// Open a notification: mark it read and return where it leads.
    ///
    /// Returns `None` for an unknown id or a notification with no
    /// related record.
    pub fn open(&mut self, id: &str) -> Option<Route> {
        let notification = self.notifications.iter_mut().find(|n| n.id == id)?;
        notification.read = true;

        let related = notification.related_id.clone()?;
        match notification.kind {
            NotificationKind::Message => Some(Route::Messages(related)),
            NotificationKind::SwapRequest
            | NotificationKind::SwapAccepted
            | NotificationKind::SwapRejected
            | NotificationKind::ItemBoosted => Some(Route::ItemDetails(related)),
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    /// Remove a notification; returns false if the id was unknown
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;
    use chrono::Utc;

    fn inbox() -> NotificationInbox {
        NotificationInbox::new(Catalog::sample(Utc::now()).notifications().to_vec())
    }

    #[test]
    fn test_unread_count() {
        let inbox = inbox();
        assert_eq!(inbox.len(), 7);
        assert_eq!(inbox.unread_count(), 3);
    }

    #[test]
    fn test_open_marks_read_and_routes() {
        let mut inbox = inbox();

        assert_eq!(inbox.open("notif_1"), Some(Route::ItemDetails("1".to_string())));
        assert_eq!(inbox.unread_count(), 2);

        assert_eq!(inbox.open("notif_2"), Some(Route::Messages("conv_2".to_string())));
        assert_eq!(inbox.unread_count(), 1);

        // Re-opening a read notification leaves the count alone
        inbox.open("notif_1");
        assert_eq!(inbox.unread_count(), 1);

        assert_eq!(inbox.open("missing"), None);
    }

    #[test]
    fn test_delete_unread_updates_count() {
        let mut inbox = inbox();

        assert!(inbox.delete("notif_3"));
        assert!(!inbox.delete("notif_3"));
        assert_eq!(inbox.len(), 6);
        assert_eq!(inbox.unread_count(), 2);
    }

    #[test]
    fn test_mark_all_and_clear() {
        let mut inbox = inbox();

        inbox.mark_all_read();
        assert_eq!(inbox.unread_count(), 0);
        assert!(inbox.filter(InboxTab::Unread).is_empty());

        inbox.clear();
        assert!(inbox.is_empty());
    }

    #[test]
    fn test_filter_tabs() {
        let inbox = inbox();

        assert_eq!(inbox.filter(InboxTab::All).len(), 7);
        assert_eq!(inbox.filter(InboxTab::Unread).len(), 3);
        assert_eq!(inbox.filter(InboxTab::Kind(NotificationKind::Message)).len(), 2);
        assert_eq!(
            inbox.filter(InboxTab::Kind(NotificationKind::SwapRequest)).len(),
            2
        );
    }

    #[test]
    fn test_parse_tab() {
        assert_eq!("all".parse::<InboxTab>().unwrap(), InboxTab::All);
        assert_eq!("unread".parse::<InboxTab>().unwrap(), InboxTab::Unread);
        assert_eq!(
            "swap_accepted".parse::<InboxTab>().unwrap(),
            InboxTab::Kind(NotificationKind::SwapAccepted)
        );
        assert!("archived".parse::<InboxTab>().is_err());
    }
}
