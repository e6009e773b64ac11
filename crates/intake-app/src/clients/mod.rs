//! Interfaces to the external collaborators the forms depend on.
//!
//! Each collaborator is an async trait so the form flows stay transport
//! agnostic: production wires HTTP-backed implementations, tests and the
//! demo binary wire the in-memory versions in [`mock`]. A failed or
//! missing collaborator never stalls a form: callers absorb errors into
//! absent candidates and move on.

pub mod gateway;
pub mod identity;
pub mod mock;
pub mod profile_api;
pub mod vip;

pub use gateway::{GatewayError, OfferGateway};
pub use identity::IdentityProvider;
pub use profile_api::{ProfileApiError, ProfileService};
pub use vip::{VipBuyerService, VipError};
