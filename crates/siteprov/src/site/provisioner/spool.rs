//! Spool directory provisioner
//!
//! Hands each creation request to an out-of-process provisioning agent by
//! writing it as a YAML document into a spool directory. The agent picks the
//! document up, creates the site and drops a `<id>.done` receipt next to it.
//!
//! The Graph token is never written to disk.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    fs::filesystem::{FileSystem, FileSystemError},
    site::{
        SiteArchetype,
        context::GraphToken,
        port::{ProvisioningError, ProvisioningOutcome, SiteAddress, SiteProvisioner},
        request::{
            CommunicationSiteCreationRequest, CompletionMode, TeamNoGroupSiteCreationRequest,
            TeamSiteCreationRequest,
        },
    },
};

const REQUEST_EXTENSION: &str = "yaml";
const RECEIPT_EXTENSION: &str = "done";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// A [`SiteProvisioner`] that spools requests for a provisioning agent
#[derive(Debug, Clone)]
pub struct SpoolProvisioner<F: FileSystem> {
    fs: F,
    spool_directory: PathBuf,
    tenant_url: String,
    await_timeout: Duration,
    poll_interval: Duration,
}

#[derive(Debug, Serialize)]
struct SpooledRequest<'a, R> {
    id: Uuid,
    archetype: SiteArchetype,
    completion_mode: CompletionMode,
    address: &'a SiteAddress,
    request: &'a R,
}

// Only what the conflict check needs from documents already in the spool.
#[derive(Debug, Deserialize)]
struct SpooledAddress {
    address: String,
}

impl<F: FileSystem> SpoolProvisioner<F> {
    pub fn new(fs: F, spool_directory: impl Into<PathBuf>, tenant_url: impl Into<String>) -> Self {
        Self {
            fs,
            spool_directory: spool_directory.into(),
            tenant_url: tenant_url.into(),
            await_timeout: Duration::from_secs(crate::config::DEFAULT_AWAIT_TIMEOUT_SECS),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn from_config(fs: F, config: &AppConfig) -> Self {
        Self::new(fs, config.spool_directory(), config.tenant_url())
            .with_await_timeout(config.await_timeout())
    }

    #[must_use]
    pub fn with_await_timeout(mut self, timeout: Duration) -> Self {
        self.await_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub fn spool_directory(&self) -> &Path {
        &self.spool_directory
    }

    /// Address a group-backed team site will get under the tenant
    #[must_use]
    pub fn team_site_address(&self, alias: &str) -> SiteAddress {
        SiteAddress::new(format!(
            "{}/sites/{alias}",
            self.tenant_url.trim_end_matches('/')
        ))
    }

    #[instrument(skip(self, request), fields(spool = %self.spool_directory.display()))]
    async fn spool<R>(
        &self,
        archetype: SiteArchetype,
        address: SiteAddress,
        request: &R,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError>
    where
        R: Serialize + Sync,
    {
        self.ensure_not_spooled(&address)?;

        let id = Uuid::new_v4();
        let document = SpooledRequest {
            id,
            archetype,
            completion_mode: mode,
            address: &address,
            request,
        };
        let yaml = serde_yaml::to_string(&document).map_err(|e| ProvisioningError::Rejected {
            message: format!("request could not be serialized: {e}"),
        })?;

        self.fs.create_dir_all(&self.spool_directory).map_err(io_error)?;
        let request_path = self.document_path(id, REQUEST_EXTENSION);
        self.fs
            .write_file(&request_path, yaml.as_bytes())
            .map_err(io_error)?;
        debug!(path = %request_path.display(), %address, "request spooled");

        if !mode.blocks_until_complete() {
            return Ok(ProvisioningOutcome::accepted(address));
        }

        self.await_receipt(id).await?;
        Ok(ProvisioningOutcome::completed(address))
    }

    fn ensure_not_spooled(&self, address: &SiteAddress) -> Result<(), ProvisioningError> {
        if !self.fs.path_exists(&self.spool_directory) {
            return Ok(());
        }

        let entries = self
            .fs
            .list_directory(&self.spool_directory)
            .map_err(io_error)?;

        for path in entries
            .iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == REQUEST_EXTENSION))
        {
            let content = self.fs.read_file(path).map_err(io_error)?;

            match serde_yaml::from_str::<SpooledAddress>(&content) {
                Ok(spooled) if spooled.address == address.as_str() => {
                    return Err(ProvisioningError::Conflict {
                        address: address.to_string(),
                    });
                }
                Ok(_) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable spool entry"),
            }
        }

        Ok(())
    }

    async fn await_receipt(&self, id: Uuid) -> Result<(), ProvisioningError> {
        let receipt = self.document_path(id, RECEIPT_EXTENSION);
        debug!(receipt = %receipt.display(), timeout = ?self.await_timeout, "waiting for provisioning agent");

        let poll = async {
            while !self.fs.path_exists(&receipt) {
                tokio::time::sleep(self.poll_interval).await;
            }
        };

        tokio::time::timeout(self.await_timeout, poll)
            .await
            .map_err(|_| ProvisioningError::TimedOut {
                after: self.await_timeout,
            })
    }

    fn document_path(&self, id: Uuid, extension: &str) -> PathBuf {
        self.spool_directory.join(format!("{id}.{extension}"))
    }
}

fn io_error(error: FileSystemError) -> ProvisioningError {
    match error {
        FileSystemError::IoError(source) => ProvisioningError::Io(source),
        FileSystemError::HomeDirNotFound => ProvisioningError::Io(Arc::new(io::Error::new(
            io::ErrorKind::NotFound,
            "home directory not found",
        ))),
        FileSystemError::UnsupportedTilde(path) => ProvisioningError::Io(Arc::new(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot expand `{}`", path.display()),
        ))),
    }
}

#[async_trait]
impl<F> SiteProvisioner for SpoolProvisioner<F>
where
    F: FileSystem + Send + Sync,
{
    async fn create_communication_site(
        &self,
        request: &CommunicationSiteCreationRequest,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError> {
        self.spool(
            SiteArchetype::CommunicationSite,
            SiteAddress::new(request.url()),
            request,
            mode,
        )
        .await
    }

    async fn create_team_site(
        &self,
        request: &TeamSiteCreationRequest,
        _graph_token: &GraphToken,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError> {
        self.spool(
            SiteArchetype::TeamSite,
            self.team_site_address(request.alias()),
            request,
            mode,
        )
        .await
    }

    async fn create_team_site_no_group(
        &self,
        request: &TeamNoGroupSiteCreationRequest,
        mode: CompletionMode,
    ) -> Result<ProvisioningOutcome, ProvisioningError> {
        self.spool(
            SiteArchetype::TeamSiteNoGroup,
            SiteAddress::new(request.url()),
            request,
            mode,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fs::{RealFileSystem, filesystem::MockFileSystem},
        site::{
            CommunicationSiteFields, Lcid, TeamSiteFields, TeamSiteNoGroupFields,
            port::Completion,
        },
    };
    use tempfile::tempdir;

    const TENANT: &str = "https://contoso.sharepoint.com/";

    fn news_request() -> CommunicationSiteCreationRequest {
        CommunicationSiteCreationRequest::new(
            CommunicationSiteFields::new("Contoso News", "https://contoso.sharepoint.com/sites/news"),
            Lcid::ENGLISH_US,
            None,
        )
    }

    fn spooled_documents(dir: &Path) -> Vec<serde_yaml::Value> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "yaml"))
            .map(|p| serde_yaml::from_str(&std::fs::read_to_string(p).unwrap()).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_fire_and_forget_spools_request_and_returns_url() {
        let dir = tempdir().unwrap();
        let spool = dir.path().join("spool");
        let provisioner = SpoolProvisioner::new(RealFileSystem, &spool, TENANT);

        let outcome = provisioner
            .create_communication_site(&news_request(), CompletionMode::FireAndForget)
            .await
            .unwrap();

        assert_eq!(
            outcome.address().as_str(),
            "https://contoso.sharepoint.com/sites/news"
        );
        assert_eq!(outcome.completion(), Completion::Accepted);

        let documents = spooled_documents(&spool);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["archetype"], serde_yaml::Value::from("communication_site"));
        assert_eq!(
            documents[0]["completion_mode"],
            serde_yaml::Value::from("fire_and_forget")
        );
        assert_eq!(
            documents[0]["request"]["site_design"],
            serde_yaml::Value::from("Topic")
        );
    }

    #[tokio::test]
    async fn test_team_site_address_is_built_from_tenant_and_alias() {
        let dir = tempdir().unwrap();
        let provisioner = SpoolProvisioner::new(RealFileSystem, dir.path(), TENANT);
        let request = TeamSiteCreationRequest::new(TeamSiteFields::new("Marketing", "marketing"), None);

        let outcome = provisioner
            .create_team_site(
                &request,
                &GraphToken::new("super-secret-token"),
                CompletionMode::FireAndForget,
            )
            .await
            .unwrap();

        assert_eq!(
            outcome.address().as_str(),
            "https://contoso.sharepoint.com/sites/marketing"
        );

        let raw = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect::<String>();
        assert!(!raw.contains("super-secret-token"));
        assert!(raw.contains("display_name: Marketing"));
    }

    #[tokio::test]
    async fn test_second_request_for_same_address_conflicts() {
        let dir = tempdir().unwrap();
        let provisioner = SpoolProvisioner::new(RealFileSystem, dir.path(), TENANT);

        provisioner
            .create_communication_site(&news_request(), CompletionMode::FireAndForget)
            .await
            .unwrap();
        let err = provisioner
            .create_communication_site(&news_request(), CompletionMode::FireAndForget)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProvisioningError::Conflict { ref address } if address == "https://contoso.sharepoint.com/sites/news"
        ));
        assert_eq!(spooled_documents(dir.path()).len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_spool_entries_are_skipped() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("garbage.yaml"), "- not: [a document").unwrap();
        let provisioner = SpoolProvisioner::new(RealFileSystem, dir.path(), TENANT);

        let result = provisioner
            .create_communication_site(&news_request(), CompletionMode::FireAndForget)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_await_completion_times_out_without_receipt() {
        let dir = tempdir().unwrap();
        let provisioner = SpoolProvisioner::new(RealFileSystem, dir.path(), TENANT)
            .with_await_timeout(Duration::from_millis(50))
            .with_poll_interval(Duration::from_millis(10));
        let request = TeamNoGroupSiteCreationRequest::new(
            TeamSiteNoGroupFields::new("Projects", "https://contoso.sharepoint.com/sites/projects"),
            Lcid::ENGLISH_US,
            None,
        );

        let err = provisioner
            .create_team_site_no_group(&request, CompletionMode::AwaitCompletion)
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisioningError::TimedOut { .. }));
    }

    #[tokio::test]
    async fn test_await_completion_returns_once_receipt_appears() {
        let dir = tempdir().unwrap();
        let spool = dir.path().to_path_buf();
        let provisioner = SpoolProvisioner::new(RealFileSystem, &spool, TENANT)
            .with_await_timeout(Duration::from_secs(5))
            .with_poll_interval(Duration::from_millis(10));

        let agent = tokio::spawn({
            let spool = spool.clone();
            async move {
                loop {
                    let spooled = std::fs::read_dir(&spool)
                        .unwrap()
                        .map(|entry| entry.unwrap().path())
                        .find(|p| p.extension().is_some_and(|ext| ext == "yaml"));
                    if let Some(path) = spooled {
                        std::fs::write(path.with_extension("done"), "").unwrap();
                        break;
                    }
                    tokio::time::sleep(Duration::from_millis(5)).await;
                }
            }
        });

        let outcome = provisioner
            .create_communication_site(&news_request(), CompletionMode::AwaitCompletion)
            .await
            .unwrap();
        agent.await.unwrap();

        assert_eq!(outcome.completion(), Completion::Completed);
    }

    #[tokio::test]
    async fn test_write_failure_surfaces_as_io_error() {
        let mut fs = MockFileSystem::new();
        fs.expect_path_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| {
            Err(FileSystemError::IoError(Arc::new(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only spool",
            ))))
        });
        let provisioner = SpoolProvisioner::new(fs, "/var/spool/siteprov", TENANT);

        let err = provisioner
            .create_communication_site(&news_request(), CompletionMode::FireAndForget)
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisioningError::Io(_)));
    }
}
