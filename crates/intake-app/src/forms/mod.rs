//! Form flows.
//!
//! Each flow owns its editable field state and the collaborators it seeds
//! from, and routes every phone or price keystroke through the core
//! normalizers. Candidate gathering is deliberately forgiving: a failed
//! or missing source becomes an absent candidate and resolution proceeds
//! with whatever is left.

pub mod offer;
pub mod profile;
pub mod qualify;

pub use offer::{OfferError, OfferForm};
pub use profile::{ProfileError, ProfilePage, VipSummary};
pub use qualify::{QualifySurvey, SurveyError};

use crate::clients::{IdentityProvider, ProfileService, VipBuyerService};
use intake_core::CandidateFields;
use tracing::warn;

/// VIP enrollment as a resolver candidate; absent when not enrolled or
/// when the lookup fails.
pub(crate) async fn vip_candidate(vip: &dyn VipBuyerService) -> CandidateFields {
    match vip.vip_profile().await {
        Ok(Some(profile)) => (&profile).into(),
        Ok(None) => CandidateFields::new(),
        Err(err) => {
            warn!(error = %err, "VIP lookup failed, treating as absent source");
            CandidateFields::new()
        }
    }
}

/// Backend profile as a resolver candidate; absent on miss or failure.
pub(crate) async fn profile_candidate(profiles: &dyn ProfileService) -> CandidateFields {
    match profiles.fetch_profile().await {
        Ok(Some(profile)) => (&profile).into(),
        Ok(None) => CandidateFields::new(),
        Err(err) => {
            warn!(error = %err, "Profile fetch failed, treating as absent source");
            CandidateFields::new()
        }
    }
}

/// Identity-provider claims as a resolver candidate; absent when signed out.
pub(crate) async fn claims_candidate(identity: &dyn IdentityProvider) -> CandidateFields {
    match identity.current_user().await {
        Some(claims) => (&claims).into(),
        None => CandidateFields::new(),
    }
}
