//! Profile records from the backend, the VIP buyer program, and the
//! identity provider, plus their conversions into resolver candidates.

use intake_core::CandidateFields;
use serde::{Deserialize, Serialize};

/// The backend user profile. Every field is optional; a freshly
/// registered user has an empty row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Editable subset of the backend profile (the profile page's form).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// A VIP buyer's enriched profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VipBuyerProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub buyer_type: Option<String>,
    pub preferred_areas: Vec<String>,
}

/// Claims supplied by the identity provider for the signed-in user.
/// Field names follow the OIDC standard claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserClaims {
    pub sub: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
}

impl From<&UserProfile> for CandidateFields {
    fn from(profile: &UserProfile) -> Self {
        let mut fields = CandidateFields::new();
        fields.first_name = profile.first_name.clone();
        fields.last_name = profile.last_name.clone();
        fields.email = profile.email.clone();
        fields.phone = profile.phone.clone();
        fields
    }
}

impl From<&VipBuyerProfile> for CandidateFields {
    fn from(profile: &VipBuyerProfile) -> Self {
        let mut fields = CandidateFields::new();
        fields.first_name = profile.first_name.clone();
        fields.last_name = profile.last_name.clone();
        fields.email = profile.email.clone();
        fields.phone = profile.phone.clone();
        fields.buyer_type = profile.buyer_type.clone();
        fields
    }
}

impl From<&UserClaims> for CandidateFields {
    fn from(claims: &UserClaims) -> Self {
        let mut fields = CandidateFields::new();
        fields.first_name = claims.given_name.clone();
        fields.last_name = claims.family_name.clone();
        fields.email = claims.email.clone();
        // The display name (or failing that the nickname) is only a
        // splitting fallback; the resolver guards against email-shaped
        // values itself.
        fields.full_name = claims.name.clone().or_else(|| claims.nickname.clone());
        fields
    }
}
