//! # Intake App
//!
//! The application layer around [`intake_core`]: form flows for the
//! buyer-facing screens of a land marketplace, the collaborators they
//! fetch candidate data from, and the wiring that holds it together.
//!
//! ## Modules
//!
//! - **[`model`]**: domain data: buyer types, listings, submissions,
//!   profiles, claims, survey state.
//! - **[`clients`]**: async interfaces to the external collaborators
//!   (identity provider, profile service, VIP program, offer gateway),
//!   plus in-memory implementations in [`clients::mock`].
//! - **[`auth`]**: the injected token provider and its TTL cache.
//! - **[`draft_store`]**: the in-process cache of unsent form snapshots.
//! - **[`forms`]**: the offer form, the qualification survey, and the
//!   profile page.
//! - **[`lifecycle`]**: [`IntakeSystem`](lifecycle::IntakeSystem) wiring
//!   and tracing setup.
//!
//! ## Concurrency shape
//!
//! Candidate-source fetches are async and independently failable; the
//! forms absorb failures into absent candidates and hand fully
//! materialized values to the synchronous core. Nothing here blocks
//! resolution on a slow collaborator.

pub mod auth;
pub mod clients;
pub mod draft_store;
pub mod forms;
pub mod lifecycle;
pub mod model;
