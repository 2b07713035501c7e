//! Change request relay

use std::sync::Arc;

use tracing::info;

use fleetbook_domain::model::ChangeRequest;
use fleetbook_domain::notifier::ChangeNotifier;
use fleetbook_types::{NotifyError, Result};

/// Forwards visitors' change requests to the moderators
pub struct ChangeRequestService {
    notifier: Option<Arc<dyn ChangeNotifier>>,
}

impl ChangeRequestService {
    pub fn new(notifier: Option<Arc<dyn ChangeNotifier>>) -> Self {
        Self { notifier }
    }

    pub fn is_configured(&self) -> bool {
        self.notifier.is_some()
    }

    pub async fn submit(&self, request: &ChangeRequest) -> Result<()> {
        request.validate()?;
        let notifier = self.notifier.as_ref().ok_or(NotifyError::NotConfigured)?;

        notifier.notify(&request.to_message()).await?;

        info!(
            fleet_number = request.fleet_number.as_deref().unwrap_or_default(),
            reg = request.reg.as_deref().unwrap_or_default(),
            "change request forwarded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fleetbook_types::Error;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ChangeNotifier for RecordingNotifier {
        async fn notify(&self, message: &str) -> std::result::Result<(), NotifyError> {
            self.sent.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl ChangeNotifier for FailingNotifier {
        async fn notify(&self, _message: &str) -> std::result::Result<(), NotifyError> {
            Err(NotifyError::Status(502))
        }
    }

    fn request(fleet_number: &str, reg: &str) -> ChangeRequest {
        ChangeRequest {
            fleet_number: Some(fleet_number.to_string()),
            reg: Some(reg.to_string()),
            new_reg: Some("YX70ABC".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_sends_formatted_message() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ChangeRequestService::new(Some(notifier.clone()));

        service.submit(&request("101", "SN64ABC")).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("**Fleet Number:** 101"));
        assert!(sent[0].contains("**New Reg:** YX70ABC"));
        assert!(sent[0].contains("**New Livery:** N/A"));
    }

    #[tokio::test]
    async fn test_missing_fields_checked_before_webhook() {
        let service = ChangeRequestService::new(None);
        let err = service.submit(&request("", "SN64ABC")).await.unwrap_err();
        assert!(matches!(err, Error::MissingChangeFields));
    }

    #[tokio::test]
    async fn test_unconfigured_webhook() {
        let service = ChangeRequestService::new(None);
        assert!(!service.is_configured());
        let err = service.submit(&request("101", "SN64ABC")).await.unwrap_err();
        assert!(matches!(err, Error::Notify(NotifyError::NotConfigured)));
        assert_eq!(err.to_string(), "Webhook URL is missing!");
    }

    #[tokio::test]
    async fn test_notifier_failure_is_returned() {
        let service = ChangeRequestService::new(Some(Arc::new(FailingNotifier)));
        let err = service.submit(&request("101", "SN64ABC")).await.unwrap_err();
        assert!(matches!(err, Error::Notify(NotifyError::Status(502))));
    }
}
