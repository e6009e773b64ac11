//! Backend user-profile service interface.

use crate::model::{ProfileUpdate, UserProfile};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by the profile service.
#[derive(Debug, Error)]
pub enum ProfileApiError {
    /// The request never completed (network, server error, timeout).
    #[error("profile request failed: {0}")]
    Request(String),

    /// The backend refused the update.
    #[error("profile update rejected: {0}")]
    Rejected(String),
}

/// The backend's user-profile endpoints.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch the signed-in user's profile. `Ok(None)` means the user has
    /// no profile row yet: a normal state, not an error.
    async fn fetch_profile(&self) -> Result<Option<UserProfile>, ProfileApiError>;

    /// Persist edited profile fields, returning the stored profile.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, ProfileApiError>;
}
