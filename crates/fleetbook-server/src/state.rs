//! Shared server state

use std::sync::Arc;

use anyhow::Context as _;
use chrono::Duration;

use fleetbook_app::app::{AdminCredentials, ChangeRequestService, FleetService, TableService};
use fleetbook_app::config::Config;
use fleetbook_app::repository::{open_notifier, open_table_repo};
use fleetbook_domain::{ChangeNotifier, TableRepository};

use crate::pages::PageRenderer;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub fleets: Arc<FleetService>,
    pub tables: Arc<TableService>,
    pub changes: Arc<ChangeRequestService>,
    pub credentials: Arc<AdminCredentials>,
    pub sessions: Arc<SessionStore>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn TableRepository>,
        notifier: Option<Arc<dyn ChangeNotifier>>,
        credentials: AdminCredentials,
        pages: PageRenderer,
        session_ttl: Duration,
    ) -> Self {
        Self {
            fleets: Arc::new(FleetService::new(repo.clone())),
            tables: Arc::new(TableService::new(repo)),
            changes: Arc::new(ChangeRequestService::new(notifier)),
            credentials: Arc::new(credentials),
            sessions: Arc::new(SessionStore::new(session_ttl)),
            pages: Arc::new(pages),
        }
    }

    /// Wire file storage, the webhook notifier and templates from config
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo: Arc<dyn TableRepository> = Arc::new(
            open_table_repo(config).context("failed to open data directory")?,
        );
        let notifier = open_notifier(config).context("failed to build webhook client")?;
        let templates_dir = config.templates_dir();
        let pages = PageRenderer::load(&templates_dir)
            .with_context(|| format!("failed to load templates from {}", templates_dir.display()))?;

        Ok(Self::new(
            repo,
            notifier,
            AdminCredentials::from_config(config),
            pages,
            Duration::hours(config.session_ttl_hours.max(1)),
        ))
    }
}
