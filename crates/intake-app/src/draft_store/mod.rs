//! In-process draft cache.
//!
//! Unsent form snapshots are kept as string-serialized JSON in a small
//! actor that owns the map outright: requests arrive over an mpsc channel
//! and are processed one at a time, so no lock guards the entries, and
//! the store shuts down by itself once every client handle is dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Which form a draft snapshot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftKey {
    Offer,
    Survey,
}

impl DraftKey {
    fn as_str(&self) -> &'static str {
        match self {
            DraftKey::Offer => "offer_form",
            DraftKey::Survey => "qualify_survey",
        }
    }
}

impl Display for DraftKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors crossing the store boundary. Internal store operations cannot
/// fail; only serialization and channel breakage can.
#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("draft store closed")]
    StoreClosed,

    #[error("draft store dropped response channel")]
    StoreDropped,

    #[error("draft snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

enum DraftRequest {
    Save {
        key: DraftKey,
        payload: String,
        respond_to: oneshot::Sender<()>,
    },
    Load {
        key: DraftKey,
        respond_to: oneshot::Sender<Option<String>>,
    },
    Clear {
        key: DraftKey,
        respond_to: oneshot::Sender<()>,
    },
}

/// The server half: owns the entries, processes requests sequentially.
pub struct DraftStoreActor {
    receiver: mpsc::Receiver<DraftRequest>,
    entries: HashMap<DraftKey, String>,
}

impl DraftStoreActor {
    /// Creates the actor and its first client handle.
    pub fn new(buffer_size: usize) -> (Self, DraftStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: HashMap::new(),
        };
        (actor, DraftStoreClient { sender })
    }

    /// Runs the store's event loop until the last client drops.
    pub async fn run(mut self) {
        info!("Draft store started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                DraftRequest::Save {
                    key,
                    payload,
                    respond_to,
                } => {
                    debug!(%key, bytes = payload.len(), "Save draft");
                    self.entries.insert(key, payload);
                    let _ = respond_to.send(());
                }
                DraftRequest::Load { key, respond_to } => {
                    let found = self.entries.get(&key).cloned();
                    debug!(%key, hit = found.is_some(), "Load draft");
                    let _ = respond_to.send(found);
                }
                DraftRequest::Clear { key, respond_to } => {
                    let removed = self.entries.remove(&key).is_some();
                    debug!(%key, removed, "Clear draft");
                    let _ = respond_to.send(());
                }
            }
        }

        info!(entries = self.entries.len(), "Draft store shut down");
    }
}

/// Cheap-to-clone handle for talking to the draft store.
#[derive(Clone)]
pub struct DraftStoreClient {
    sender: mpsc::Sender<DraftRequest>,
}

impl DraftStoreClient {
    /// Serialize and store a snapshot under `key`, replacing any previous
    /// draft for that form.
    pub async fn save<T: Serialize>(
        &self,
        key: DraftKey,
        snapshot: &T,
    ) -> Result<(), DraftStoreError> {
        let payload = serde_json::to_string(snapshot)?;
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Save {
                key,
                payload,
                respond_to,
            })
            .await
            .map_err(|_| DraftStoreError::StoreClosed)?;
        response.await.map_err(|_| DraftStoreError::StoreDropped)
    }

    /// Load and deserialize the snapshot under `key`.
    ///
    /// A missing entry and a corrupt one both come back as `Ok(None)`: a
    /// draft that no longer parses is a cache miss, never a hard failure.
    pub async fn load<T: DeserializeOwned>(
        &self,
        key: DraftKey,
    ) -> Result<Option<T>, DraftStoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Load { key, respond_to })
            .await
            .map_err(|_| DraftStoreError::StoreClosed)?;
        let payload = response.await.map_err(|_| DraftStoreError::StoreDropped)?;

        Ok(payload.and_then(|payload| match serde_json::from_str(&payload) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(%key, error = %err, "Corrupt draft snapshot, treating as miss");
                None
            }
        }))
    }

    /// Remove the snapshot under `key`, if any.
    pub async fn clear(&self, key: DraftKey) -> Result<(), DraftStoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Clear { key, respond_to })
            .await
            .map_err(|_| DraftStoreError::StoreClosed)?;
        response.await.map_err(|_| DraftStoreError::StoreDropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OfferDraft;

    fn spawn_store() -> DraftStoreClient {
        let (actor, client) = DraftStoreActor::new(8);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let client = spawn_store();
        let draft = OfferDraft {
            first_name: "Sam".into(),
            email: "sam@x.com".into(),
            ..OfferDraft::default()
        };

        client.save(DraftKey::Offer, &draft).await.unwrap();
        let loaded: Option<OfferDraft> = client.load(DraftKey::Offer).await.unwrap();
        assert_eq!(loaded, Some(draft));

        client.clear(DraftKey::Offer).await.unwrap();
        let loaded: Option<OfferDraft> = client.load(DraftKey::Offer).await.unwrap();
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let client = spawn_store();
        let draft = OfferDraft {
            first_name: "Sam".into(),
            ..OfferDraft::default()
        };
        client.save(DraftKey::Offer, &draft).await.unwrap();

        let other: Option<OfferDraft> = client.load(DraftKey::Survey).await.unwrap();
        assert_eq!(other, None);
    }

    #[tokio::test]
    async fn corrupt_snapshot_reads_as_miss() {
        let client = spawn_store();
        // Store a payload of the wrong shape, then read it as a draft.
        client.save(DraftKey::Offer, &vec![1, 2, 3]).await.unwrap();

        let loaded: Option<OfferDraft> = client.load(DraftKey::Offer).await.unwrap();
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn store_shuts_down_when_clients_drop() {
        let (actor, client) = DraftStoreActor::new(8);
        let handle = tokio::spawn(actor.run());

        drop(client);
        handle.await.unwrap();
    }
}
