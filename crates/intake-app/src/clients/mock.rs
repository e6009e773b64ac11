//! In-memory collaborator implementations.
//!
//! These back the integration tests and the demo binary: no network, no
//! scheduler surprises, and failures that are injected with a flag
//! instead of reproduced against a real backend.

use crate::auth::{TokenError, TokenProvider};
use crate::clients::{
    GatewayError, IdentityProvider, OfferGateway, ProfileApiError, ProfileService, VipBuyerService,
    VipError,
};
use crate::model::{OfferSubmission, ProfileUpdate, UserClaims, UserProfile, VipBuyerProfile};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Identity provider with a fixed session state.
pub struct MockIdentity {
    claims: Option<UserClaims>,
}

impl MockIdentity {
    pub fn signed_out() -> Self {
        Self { claims: None }
    }

    pub fn signed_in(claims: UserClaims) -> Self {
        Self {
            claims: Some(claims),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn current_user(&self) -> Option<UserClaims> {
        self.claims.clone()
    }
}

/// Profile service over an in-memory row, with switchable fetch failure.
pub struct MockProfileService {
    profile: Mutex<Option<UserProfile>>,
    fail_fetch: AtomicBool,
    updates: Mutex<Vec<ProfileUpdate>>,
}

impl MockProfileService {
    /// A user with no profile row yet.
    pub fn empty() -> Self {
        Self {
            profile: Mutex::new(None),
            fail_fetch: AtomicBool::new(false),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        let service = Self::empty();
        *service.profile.lock().unwrap() = Some(profile);
        service
    }

    /// Make every subsequent fetch fail (or recover).
    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    /// Updates the service has accepted, in order.
    pub fn updates(&self) -> Vec<ProfileUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileService for MockProfileService {
    async fn fetch_profile(&self) -> Result<Option<UserProfile>, ProfileApiError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ProfileApiError::Request("profile service unavailable".into()));
        }
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, ProfileApiError> {
        let mut profile = self.profile.lock().unwrap();
        let mut stored = profile.clone().unwrap_or_default();
        stored.first_name = Some(update.first_name.clone());
        stored.last_name = Some(update.last_name.clone());
        *profile = Some(stored.clone());
        self.updates.lock().unwrap().push(update);
        Ok(stored)
    }
}

/// VIP program lookup with a fixed enrollment state.
pub struct MockVipService {
    profile: Option<VipBuyerProfile>,
    fail: bool,
}

impl MockVipService {
    pub fn not_enrolled() -> Self {
        Self {
            profile: None,
            fail: false,
        }
    }

    pub fn enrolled(profile: VipBuyerProfile) -> Self {
        Self {
            profile: Some(profile),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            profile: None,
            fail: true,
        }
    }
}

#[async_trait]
impl VipBuyerService for MockVipService {
    async fn vip_profile(&self) -> Result<Option<VipBuyerProfile>, VipError> {
        if self.fail {
            return Err(VipError::Lookup("vip service unavailable".into()));
        }
        Ok(self.profile.clone())
    }
}

/// Offer gateway that records what it is asked to submit.
pub struct RecordingGateway {
    submissions: Mutex<Vec<OfferSubmission>>,
    tokens_seen: Mutex<Vec<String>>,
    reject_message: Mutex<Option<String>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            tokens_seen: Mutex::new(Vec::new()),
            reject_message: Mutex::new(None),
        }
    }

    /// Make every subsequent submission fail with [`GatewayError::Rejected`].
    pub fn reject_with(&self, message: impl Into<String>) {
        *self.reject_message.lock().unwrap() = Some(message.into());
    }

    pub fn submissions(&self) -> Vec<OfferSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    /// Bearer tokens presented with accepted submissions, in order.
    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.lock().unwrap().clone()
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OfferGateway for RecordingGateway {
    async fn submit_offer(
        &self,
        token: &str,
        offer: &OfferSubmission,
    ) -> Result<(), GatewayError> {
        if let Some(message) = self.reject_message.lock().unwrap().clone() {
            return Err(GatewayError::Rejected(message));
        }
        self.tokens_seen.lock().unwrap().push(token.to_string());
        self.submissions.lock().unwrap().push(offer.clone());
        Ok(())
    }
}

/// Token provider that always returns the same token.
pub struct StaticTokens {
    token: String,
}

impl StaticTokens {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokens {
    async fn access_token(&self) -> Result<String, TokenError> {
        Ok(self.token.clone())
    }
}

/// Token provider for the signed-out state.
pub struct NoSession;

#[async_trait]
impl TokenProvider for NoSession {
    async fn access_token(&self) -> Result<String, TokenError> {
        Err(TokenError::NotAuthenticated)
    }
}
