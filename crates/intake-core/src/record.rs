//! Identity records exchanged between candidate sources and forms.

use serde::{Deserialize, Serialize};

/// The canonical merged identity record.
///
/// Every field is always present (possibly as an empty string, never
/// absent), so form components can render without null-checking. The
/// `phone` field is always in canonical display form (`(DDD) DDD-DDDD`
/// or a shorter prefix) or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Buyer classification wire string (e.g. `"CashBuyer"`), or empty.
    pub buyer_type: String,
}

impl IdentityRecord {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.buyer_type.is_empty()
    }

    /// True when all contact fields (name, email, phone) are filled.
    /// Buyer type is a per-form requirement, checked separately.
    pub fn contact_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
    }
}

/// One candidate source's partial field set.
///
/// Any subset of fields may be present; an all-`None` value is a valid,
/// absent candidate (a failed or missing fetch). Sources are handed to
/// [`resolve`](crate::resolve) as an ordered slice: position is priority,
/// index 0 being the most authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub buyer_type: Option<String>,
    /// Combined display name, for sources that carry no split name fields
    /// (identity-provider `name`/`nickname` claims). Consulted only as a
    /// splitting fallback, never copied verbatim.
    pub full_name: Option<String>,
}

impl CandidateFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    pub fn buyer_type(mut self, value: impl Into<String>) -> Self {
        self.buyer_type = Some(value.into());
        self
    }

    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    /// True when the source supplies nothing at all.
    pub fn is_absent(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.buyer_type.is_none()
            && self.full_name.is_none()
    }
}
