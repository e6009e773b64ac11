//! Offer submission gateway interface.

use crate::model::OfferSubmission;
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by the offer endpoint.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backend refused the offer: typically an equal or higher offer
    /// from this buyer already exists on the property.
    #[error("offer rejected: {0}")]
    Rejected(String),

    /// The request never completed.
    #[error("offer request failed: {0}")]
    Request(String),
}

/// The REST endpoint a validated offer is posted to. The payload shape is
/// fixed by [`OfferSubmission`]; transport and retries are the
/// implementation's concern.
#[async_trait]
pub trait OfferGateway: Send + Sync {
    async fn submit_offer(
        &self,
        token: &str,
        offer: &OfferSubmission,
    ) -> Result<(), GatewayError>;
}
