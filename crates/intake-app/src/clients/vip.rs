//! VIP buyer program client interface.

use crate::model::VipBuyerProfile;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VipError {
    #[error("vip lookup failed: {0}")]
    Lookup(String),
}

/// Lookup of the signed-in buyer's VIP enrollment.
#[async_trait]
pub trait VipBuyerService: Send + Sync {
    /// The buyer's VIP profile, or `None` when not enrolled.
    async fn vip_profile(&self) -> Result<Option<VipBuyerProfile>, VipError>;
}
