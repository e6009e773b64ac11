//! Offer-form data: buyer classification, the listing being offered on,
//! the submission payload, and the locally cached draft snapshot.

use intake_core::CandidateFields;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Buyer classification offered by the buyer-type select.
///
/// Serialized with the backend's exact wire strings (`"CashBuyer"` and the rest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyerType {
    CashBuyer,
    Builder,
    Developer,
    Realtor,
    Investor,
    Wholesaler,
}

impl BuyerType {
    pub const ALL: [BuyerType; 6] = [
        BuyerType::CashBuyer,
        BuyerType::Builder,
        BuyerType::Developer,
        BuyerType::Realtor,
        BuyerType::Investor,
        BuyerType::Wholesaler,
    ];

    /// Wire string, as stored and submitted.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuyerType::CashBuyer => "CashBuyer",
            BuyerType::Builder => "Builder",
            BuyerType::Developer => "Developer",
            BuyerType::Realtor => "Realtor",
            BuyerType::Investor => "Investor",
            BuyerType::Wholesaler => "Wholesaler",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            BuyerType::CashBuyer => "Cash Buyer",
            BuyerType::Builder => "Builder",
            BuyerType::Developer => "Developer",
            BuyerType::Realtor => "Realtor",
            BuyerType::Investor => "Investor",
            BuyerType::Wholesaler => "Wholesaler",
        }
    }

    /// Parse a wire string. Unknown strings yield `None`; the resolver may
    /// hand us arbitrary text from an older draft or profile, and that is
    /// rejected at submission, not at resolution.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|bt| bt.as_str() == value)
    }
}

impl Display for BuyerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a property listing, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The listing an offer is being made on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub id: PropertyId,
    pub street_address: String,
    /// Offers below this amount are accepted by the backend but surfaced
    /// to the buyer as a warning rather than a confirmation.
    pub min_price: f64,
}

/// Payload posted to the offer endpoint after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSubmission {
    pub email: String,
    pub phone: String,
    pub buyer_type: BuyerType,
    pub property_id: PropertyId,
    pub offered_price: f64,
    pub first_name: String,
    pub last_name: String,
}

/// Result of a successfully transmitted offer.
#[derive(Debug, Clone, PartialEq)]
pub enum OfferOutcome {
    Accepted,
    /// The backend took the offer, but it sits below the listing minimum;
    /// the buyer should be nudged toward a higher price.
    BelowMinimum { min_price: f64 },
}

/// Snapshot of the offer form's contact fields, cached locally while the
/// offer has not been submitted. The price field is deliberately not
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub buyer_type: String,
}

impl OfferDraft {
    /// True when nothing worth persisting has been entered.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.buyer_type.is_empty()
    }
}

impl From<&OfferDraft> for CandidateFields {
    fn from(draft: &OfferDraft) -> Self {
        CandidateFields::new()
            .first_name(draft.first_name.clone())
            .last_name(draft.last_name.clone())
            .email(draft.email.clone())
            .phone(draft.phone.clone())
            .buyer_type(draft.buyer_type.clone())
    }
}
