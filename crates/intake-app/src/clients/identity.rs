//! Identity-provider client interface.

use crate::model::UserClaims;
use async_trait::async_trait;

/// The external authentication service, exposed only as a claims lookup.
/// Token acquisition lives behind [`TokenProvider`](crate::auth::TokenProvider);
/// the login protocol itself is entirely out of scope.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Claims for the signed-in user, or `None` when there is no session.
    async fn current_user(&self) -> Option<UserClaims>;
}
