//! The make-an-offer form.
//!
//! Seeds its contact fields from [saved draft, VIP profile, identity
//! claims] in that order, mirrors price and phone keystrokes through the
//! core normalizers, autosaves a draft of the contact fields, and submits
//! a validated [`OfferSubmission`] through the gateway.

use crate::auth::TokenProvider;
use crate::clients::{GatewayError, IdentityProvider, OfferGateway, VipBuyerService};
use crate::draft_store::{DraftKey, DraftStoreClient};
use crate::forms::{claims_candidate, vip_candidate};
use crate::model::{BuyerType, OfferDraft, OfferOutcome, OfferSubmission, PropertyListing};
use intake_core::{
    format_amount, format_phone, is_valid_us_phone, parse_amount, resolve, CandidateFields,
    IdentityRecord,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Why an offer could not be submitted. `Display` carries the user-facing
/// message the form surfaces next to the blocked submit.
#[derive(Debug, Error)]
pub enum OfferError {
    #[error("all fields are required")]
    MissingFields,

    #[error("invalid phone number, please enter a valid US number")]
    InvalidPhone,

    #[error("offer price is not a valid amount")]
    InvalidPrice,

    #[error("unrecognized buyer type: {0}")]
    UnknownBuyerType(String),

    #[error("could not authorize the request: {0}")]
    Auth(#[from] crate::auth::TokenError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub struct OfferForm {
    listing: PropertyListing,
    record: IdentityRecord,
    offer_price: String,
    drafts: DraftStoreClient,
    vip: Arc<dyn VipBuyerService>,
    identity: Arc<dyn IdentityProvider>,
    tokens: Arc<dyn TokenProvider>,
    gateway: Arc<dyn OfferGateway>,
}

impl OfferForm {
    pub fn new(
        listing: PropertyListing,
        drafts: DraftStoreClient,
        vip: Arc<dyn VipBuyerService>,
        identity: Arc<dyn IdentityProvider>,
        tokens: Arc<dyn TokenProvider>,
        gateway: Arc<dyn OfferGateway>,
    ) -> Self {
        Self {
            listing,
            record: IdentityRecord::default(),
            offer_price: String::new(),
            drafts,
            vip,
            identity,
            tokens,
            gateway,
        }
    }

    /// Seed the contact fields from the candidate sources.
    ///
    /// Order: saved draft, then VIP profile, then identity claims. A
    /// source that cannot be fetched is an absent candidate; population
    /// itself cannot fail.
    #[instrument(skip(self), fields(property = %self.listing.id))]
    pub async fn populate(&mut self) {
        let draft = match self.drafts.load::<OfferDraft>(DraftKey::Offer).await {
            Ok(Some(draft)) => (&draft).into(),
            Ok(None) => CandidateFields::new(),
            Err(err) => {
                warn!(error = %err, "Draft load failed, treating as absent source");
                CandidateFields::new()
            }
        };
        let vip = vip_candidate(self.vip.as_ref()).await;
        let claims = claims_candidate(self.identity.as_ref()).await;

        self.record = resolve(&[draft, vip, claims]);
        info!(populated = !self.record.is_empty(), "Offer form populated");
        // The draft mirrors whatever the form shows, seeded or typed.
        self.autosave().await;
    }

    // --- field accessors ---

    pub fn first_name(&self) -> &str {
        &self.record.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.record.last_name
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }

    pub fn phone(&self) -> &str {
        &self.record.phone
    }

    pub fn buyer_type(&self) -> &str {
        &self.record.buyer_type
    }

    pub fn offer_price(&self) -> &str {
        &self.offer_price
    }

    // --- field edits (every contact edit autosaves the draft) ---

    pub async fn set_first_name(&mut self, value: impl Into<String>) {
        self.record.first_name = value.into();
        self.autosave().await;
    }

    pub async fn set_last_name(&mut self, value: impl Into<String>) {
        self.record.last_name = value.into();
        self.autosave().await;
    }

    pub async fn set_email(&mut self, value: impl Into<String>) {
        self.record.email = value.into();
        self.autosave().await;
    }

    pub async fn set_buyer_type(&mut self, buyer_type: BuyerType) {
        self.record.buyer_type = buyer_type.as_str().to_string();
        self.autosave().await;
    }

    /// Route a phone keystroke through the display formatter.
    pub async fn input_phone(&mut self, raw: &str) {
        self.record.phone = format_phone(raw);
        self.autosave().await;
    }

    /// Mirror a price keystroke as a comma-grouped display string. The
    /// price is not part of the persisted draft.
    pub fn input_offer_price(&mut self, raw: &str) {
        self.offer_price = format_amount(raw);
    }

    /// Validate and transmit the offer.
    ///
    /// An accepted submission clears the saved draft. An offer below the
    /// listing minimum is still transmitted (the backend wants to see low
    /// offers) but comes back as [`OfferOutcome::BelowMinimum`] and keeps
    /// the draft for another try.
    #[instrument(skip(self), fields(property = %self.listing.id))]
    pub async fn submit(&mut self) -> Result<OfferOutcome, OfferError> {
        if !self.record.contact_complete()
            || self.record.buyer_type.is_empty()
            || self.offer_price.is_empty()
        {
            return Err(OfferError::MissingFields);
        }

        let buyer_type = BuyerType::parse(&self.record.buyer_type)
            .ok_or_else(|| OfferError::UnknownBuyerType(self.record.buyer_type.clone()))?;

        if !is_valid_us_phone(&self.record.phone) {
            return Err(OfferError::InvalidPhone);
        }

        let offered_price = parse_amount(&self.offer_price).ok_or(OfferError::InvalidPrice)?;

        let token = self.tokens.access_token().await?;
        let offer = OfferSubmission {
            email: self.record.email.clone(),
            phone: self.record.phone.clone(),
            buyer_type,
            property_id: self.listing.id.clone(),
            offered_price,
            first_name: self.record.first_name.clone(),
            last_name: self.record.last_name.clone(),
        };

        self.gateway.submit_offer(&token, &offer).await?;

        if offered_price < self.listing.min_price {
            info!(offered_price, min_price = self.listing.min_price, "Offer below listing minimum");
            return Ok(OfferOutcome::BelowMinimum {
                min_price: self.listing.min_price,
            });
        }

        if let Err(err) = self.drafts.clear(DraftKey::Offer).await {
            warn!(error = %err, "Could not clear submitted draft");
        }
        info!(offered_price, "Offer submitted");
        Ok(OfferOutcome::Accepted)
    }

    /// Persist the current contact fields. Autosave must never interrupt
    /// typing, so failures are logged and swallowed.
    async fn autosave(&self) {
        let snapshot = OfferDraft {
            first_name: self.record.first_name.clone(),
            last_name: self.record.last_name.clone(),
            email: self.record.email.clone(),
            phone: self.record.phone.clone(),
            buyer_type: self.record.buyer_type.clone(),
        };
        if snapshot.is_empty() {
            return;
        }
        if let Err(err) = self.drafts.save(DraftKey::Offer, &snapshot).await {
            warn!(error = %err, "Draft autosave failed");
        }
    }
}
