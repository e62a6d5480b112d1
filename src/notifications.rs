//! Notification operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::{EmailListNotificationRequest, FlowActionReminderRequest};

/// Client for notifications.
///
/// Access via `client.notifications()`.
pub struct NotificationsApi {
    client: Client,
}

impl NotificationsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Remind a participant of a pending flow action.
    pub async fn flow_action_reminder(&self, request: FlowActionReminderRequest) -> Result<()> {
        self.client
            .post_unit("/api/notifications/flow-action-reminder", &request)
            .await
    }

    /// Notify the given users about all of their pending actions.
    pub async fn notify_pending_users(&self, request: EmailListNotificationRequest) -> Result<()> {
        self.client
            .post_unit("/api/users/notify-pending", &request)
            .await
    }
}
