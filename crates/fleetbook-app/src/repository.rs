//! Repository adapters for persistence and notification

use std::path::PathBuf;
use std::sync::Arc;

use fleetbook_domain::ChangeNotifier;
use fleetbook_infra::notify::DiscordWebhookNotifier;
use fleetbook_infra::persistence::FileTableRepository;
use fleetbook_types::Result;

use crate::config::Config;

/// Open file-based table repository under the configured data directory
pub fn open_table_repo(config: &Config) -> Result<FileTableRepository> {
    open_table_repo_at(config.data_dir())
}

/// Open file-based table repository at a custom directory
pub fn open_table_repo_at(data_dir: PathBuf) -> Result<FileTableRepository> {
    FileTableRepository::open(data_dir).map_err(Into::into)
}

/// Build the change request notifier, if a webhook is configured
pub fn open_notifier(config: &Config) -> Result<Option<Arc<dyn ChangeNotifier>>> {
    match config.discord_webhook.as_deref() {
        Some(url) => {
            let notifier: Arc<dyn ChangeNotifier> = Arc::new(DiscordWebhookNotifier::new(url)?);
            Ok(Some(notifier))
        }
        None => Ok(None),
    }
}
