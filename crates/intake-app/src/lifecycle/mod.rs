//! System wiring and lifecycle.
//!
//! Individual pieces are simple; wiring them together is where the
//! coordination lives. [`IntakeSystem`] starts the draft store, wraps the
//! token provider in its TTL cache, and hands fully wired form flows to
//! callers. Shutdown is cooperative: drop every client handle and the
//! draft store's loop ends on its own.

use crate::auth::{CachedTokenProvider, TokenProvider};
use crate::clients::{IdentityProvider, OfferGateway, ProfileService, VipBuyerService};
use crate::draft_store::{DraftStoreActor, DraftStoreClient};
use crate::forms::{OfferForm, ProfilePage, QualifySurvey};
use crate::model::PropertyListing;
use std::sync::Arc;
use tracing::info;

/// Initializes structured logging for the whole application.
///
/// Log level comes from `RUST_LOG` (`info` for compact workflow logs,
/// `debug` for full payloads at function entry points).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; log fields carry the context.
        .compact()
        .init();
}

/// The externally supplied collaborators the system is wired against.
pub struct Collaborators {
    pub identity: Arc<dyn IdentityProvider>,
    pub profiles: Arc<dyn ProfileService>,
    pub vip: Arc<dyn VipBuyerService>,
    pub tokens: Arc<dyn TokenProvider>,
    pub gateway: Arc<dyn OfferGateway>,
}

/// Runtime orchestrator: owns the draft-store task and the shared
/// collaborator handles, and constructs wired form flows on demand.
pub struct IntakeSystem {
    pub drafts: DraftStoreClient,
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileService>,
    vip: Arc<dyn VipBuyerService>,
    tokens: Arc<dyn TokenProvider>,
    gateway: Arc<dyn OfferGateway>,
    draft_handle: tokio::task::JoinHandle<()>,
}

impl IntakeSystem {
    pub fn new(collaborators: Collaborators) -> Self {
        let (draft_actor, drafts) = DraftStoreActor::new(32);
        let draft_handle = tokio::spawn(draft_actor.run());

        // Every token consumer shares one TTL cache.
        let tokens: Arc<dyn TokenProvider> =
            Arc::new(CachedTokenProvider::new(collaborators.tokens));

        info!("Intake system started");
        Self {
            drafts,
            identity: collaborators.identity,
            profiles: collaborators.profiles,
            vip: collaborators.vip,
            tokens,
            gateway: collaborators.gateway,
            draft_handle,
        }
    }

    pub fn offer_form(&self, listing: PropertyListing) -> OfferForm {
        OfferForm::new(
            listing,
            self.drafts.clone(),
            self.vip.clone(),
            self.identity.clone(),
            self.tokens.clone(),
            self.gateway.clone(),
        )
    }

    pub fn qualify_survey(&self) -> QualifySurvey {
        QualifySurvey::new(
            self.vip.clone(),
            self.profiles.clone(),
            self.identity.clone(),
        )
    }

    pub fn profile_page(&self) -> ProfilePage {
        ProfilePage::new(
            self.profiles.clone(),
            self.identity.clone(),
            self.vip.clone(),
        )
    }

    /// Graceful shutdown: drop the draft-store client and wait for the
    /// actor to drain. Forms created from this system hold their own
    /// client clones, so shut down after the forms are gone.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.drafts);
        self.draft_handle
            .await
            .map_err(|e| format!("draft store task failed: {e}"))?;
        info!("Intake system shut down");
        Ok(())
    }
}
