//! The profile page.
//!
//! Loads the backend profile for the signed-in user, derives the display
//! name, lets the user edit their first/last name, and surfaces the VIP
//! section when the buyer is enrolled.

use crate::clients::{
    IdentityProvider, ProfileApiError, ProfileService, VipBuyerService,
};
use crate::model::{ProfileUpdate, UserClaims, UserProfile};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("unable to load your profile information, please try again later")]
    Load(#[source] ProfileApiError),

    #[error("failed to update your profile, please try again later")]
    Update(#[source] ProfileApiError),
}

/// VIP section contents, shown only for enrolled buyers.
#[derive(Debug, Clone, PartialEq)]
pub struct VipSummary {
    pub buyer_type: Option<String>,
    pub preferred_areas: Vec<String>,
}

pub struct ProfilePage {
    profiles: Arc<dyn ProfileService>,
    identity: Arc<dyn IdentityProvider>,
    vip: Arc<dyn VipBuyerService>,
    claims: Option<UserClaims>,
    stored: Option<UserProfile>,
    edit: ProfileUpdate,
}

impl ProfilePage {
    pub fn new(
        profiles: Arc<dyn ProfileService>,
        identity: Arc<dyn IdentityProvider>,
        vip: Arc<dyn VipBuyerService>,
    ) -> Self {
        Self {
            profiles,
            identity,
            vip,
            claims: None,
            stored: None,
            edit: ProfileUpdate::default(),
        }
    }

    /// Load the page: claims first (no session means nothing to show),
    /// then the backend profile, which also seeds the edit form.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), ProfileError> {
        let claims = self
            .identity
            .current_user()
            .await
            .ok_or(ProfileError::NotAuthenticated)?;
        self.claims = Some(claims);

        let stored = self
            .profiles
            .fetch_profile()
            .await
            .map_err(ProfileError::Load)?;

        self.edit = ProfileUpdate {
            first_name: stored
                .as_ref()
                .and_then(|p| p.first_name.clone())
                .unwrap_or_default(),
            last_name: stored
                .as_ref()
                .and_then(|p| p.last_name.clone())
                .unwrap_or_default(),
        };
        self.stored = stored;
        info!(has_profile = self.stored.is_some(), "Profile page loaded");
        Ok(())
    }

    /// Display name, most specific source first: stored first+last name,
    /// then the identity provider's display name, nickname, and finally
    /// the email address.
    pub fn display_name(&self) -> String {
        if let Some(profile) = &self.stored {
            if let (Some(first), Some(last)) = (&profile.first_name, &profile.last_name) {
                if !first.is_empty() && !last.is_empty() {
                    return format!("{first} {last}");
                }
            }
        }
        let Some(claims) = &self.claims else {
            return String::new();
        };
        claims
            .name
            .clone()
            .or_else(|| claims.nickname.clone())
            .or_else(|| claims.email.clone())
            .unwrap_or_default()
    }

    pub fn stored_profile(&self) -> Option<&UserProfile> {
        self.stored.as_ref()
    }

    pub fn edit_form(&self) -> &ProfileUpdate {
        &self.edit
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.edit.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.edit.last_name = value.into();
    }

    /// Persist the edit form and refresh the stored profile from the
    /// service's response.
    #[instrument(skip(self))]
    pub async fn save(&mut self) -> Result<(), ProfileError> {
        let updated = self
            .profiles
            .update_profile(self.edit.clone())
            .await
            .map_err(ProfileError::Update)?;
        self.stored = Some(updated);
        info!("Profile updated");
        Ok(())
    }

    /// VIP section contents; `None` hides the section (not enrolled, or
    /// the lookup failed: the page renders without it either way).
    pub async fn vip_section(&self) -> Option<VipSummary> {
        match self.vip.vip_profile().await {
            Ok(Some(profile)) => Some(VipSummary {
                buyer_type: profile.buyer_type,
                preferred_areas: profile.preferred_areas,
            }),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "VIP lookup failed, hiding VIP section");
                None
            }
        }
    }
}
