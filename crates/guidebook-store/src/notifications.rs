//! CRUD operations for [`Notification`] records.

use chrono::Utc;

use crate::catalog::Catalog;
use crate::constants::NOTIFICATIONS_COLLECTION;
use crate::document::to_fields;
use crate::error::{Result, StoreError};
use crate::models::Notification;

impl Catalog {
    /// Store a new notification stamped with the current wall-clock time.
    ///
    /// A blank link is stored as `null`.  Every call appends; nothing is
    /// deduplicated.
    pub async fn post_notification(
        &self,
        title: &str,
        body: Option<&str>,
        link: Option<&str>,
    ) -> Result<Notification> {
        if title.trim().is_empty() {
            return Err(StoreError::InvalidInput("notification title is empty".into()));
        }

        let mut notification = Notification {
            id: String::new(),
            title: title.to_string(),
            body: body.map(str::to_string),
            link: link
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            created_at: Utc::now().timestamp_millis(),
        };

        notification.id = self
            .documents()
            .add(NOTIFICATIONS_COLLECTION, to_fields(&notification)?)
            .await?;

        tracing::debug!(id = %notification.id, "posted notification");
        Ok(notification)
    }

    /// All notifications, newest first.
    pub async fn list_notifications(&self) -> Result<Vec<Notification>> {
        let mut notifications = self
            .documents()
            .list(NOTIFICATIONS_COLLECTION)
            .await?
            .into_iter()
            .map(|doc| -> Result<Notification> {
                let mut n: Notification = doc.decode()?;
                n.id = doc.id;
                Ok(n)
            })
            .collect::<Result<Vec<_>>>()?;

        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notifications)
    }

    /// Delete a notification.  Returns `true` if it existed.
    pub async fn delete_notification(&self, id: &str) -> Result<bool> {
        self.documents().delete(NOTIFICATIONS_COLLECTION, id).await
    }
}
