//! Outbound notification trait

use async_trait::async_trait;
use fleetbook_types::NotifyError;

/// Delivers a formatted message to the site moderators
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
