//! Offer-form flow against mocked collaborators: a real form and a real
//! draft store, with the network-facing pieces replaced by in-memory
//! implementations.

use intake_app::auth::TokenProvider;
use intake_app::clients::mock::{
    MockIdentity, MockVipService, NoSession, RecordingGateway, StaticTokens,
};
use intake_app::clients::{IdentityProvider, VipBuyerService};
use intake_app::draft_store::{DraftKey, DraftStoreActor, DraftStoreClient};
use intake_app::forms::{OfferError, OfferForm};
use intake_app::model::{
    BuyerType, OfferDraft, OfferOutcome, PropertyId, PropertyListing, UserClaims, VipBuyerProfile,
};
use std::sync::Arc;

fn listing() -> PropertyListing {
    PropertyListing {
        id: PropertyId("prop_1".into()),
        street_address: "1420 Juniper Rd".into(),
        min_price: 250_000.0,
    }
}

fn spawn_drafts() -> DraftStoreClient {
    let (actor, client) = DraftStoreActor::new(8);
    tokio::spawn(actor.run());
    client
}

fn vip_rivera() -> VipBuyerProfile {
    VipBuyerProfile {
        first_name: Some("Samuel".into()),
        last_name: Some("Rivera".into()),
        email: Some("samuel@example.com".into()),
        phone: Some("3035551212".into()),
        buyer_type: Some("Investor".into()),
        preferred_areas: vec!["North Metro".into()],
    }
}

struct Harness {
    form: OfferForm,
    drafts: DraftStoreClient,
    gateway: Arc<RecordingGateway>,
}

fn harness_with(
    drafts: DraftStoreClient,
    vip: Arc<dyn VipBuyerService>,
    identity: Arc<dyn IdentityProvider>,
    tokens: Arc<dyn TokenProvider>,
) -> Harness {
    let gateway = Arc::new(RecordingGateway::new());
    let form = OfferForm::new(
        listing(),
        drafts.clone(),
        vip,
        identity,
        tokens,
        gateway.clone(),
    );
    Harness {
        form,
        drafts,
        gateway,
    }
}

fn default_harness() -> Harness {
    harness_with(
        spawn_drafts(),
        Arc::new(MockVipService::enrolled(vip_rivera())),
        Arc::new(MockIdentity::signed_out()),
        Arc::new(StaticTokens::new("test-token")),
    )
}

#[tokio::test]
async fn populates_from_vip_profile() {
    let mut h = default_harness();
    h.form.populate().await;

    assert_eq!(h.form.first_name(), "Samuel");
    assert_eq!(h.form.last_name(), "Rivera");
    assert_eq!(h.form.phone(), "(303) 555-1212");
    assert_eq!(h.form.buyer_type(), "Investor");
}

#[tokio::test]
async fn saved_draft_outranks_vip_profile() {
    let drafts = spawn_drafts();
    let draft = OfferDraft {
        first_name: "Sam".into(),
        email: "sam@personal.com".into(),
        ..OfferDraft::default()
    };
    drafts.save(DraftKey::Offer, &draft).await.unwrap();

    let mut h = harness_with(
        drafts,
        Arc::new(MockVipService::enrolled(vip_rivera())),
        Arc::new(MockIdentity::signed_out()),
        Arc::new(StaticTokens::new("test-token")),
    );
    h.form.populate().await;

    // Draft wins where it has values; VIP fills the rest.
    assert_eq!(h.form.first_name(), "Sam");
    assert_eq!(h.form.email(), "sam@personal.com");
    assert_eq!(h.form.last_name(), "Rivera");
    assert_eq!(h.form.phone(), "(303) 555-1212");
}

#[tokio::test]
async fn failed_vip_lookup_falls_back_to_identity_claims() {
    let mut h = harness_with(
        spawn_drafts(),
        Arc::new(MockVipService::failing()),
        Arc::new(MockIdentity::signed_in(UserClaims {
            sub: "auth0|7".into(),
            given_name: Some("Dana".into()),
            family_name: Some("Okafor".into()),
            email: Some("dana@x.com".into()),
            ..UserClaims::default()
        })),
        Arc::new(StaticTokens::new("test-token")),
    );
    h.form.populate().await;

    assert_eq!(h.form.first_name(), "Dana");
    assert_eq!(h.form.last_name(), "Okafor");
    assert_eq!(h.form.email(), "dana@x.com");
    assert_eq!(h.form.phone(), "");
}

#[tokio::test]
async fn edits_autosave_and_reseed_a_fresh_form() {
    let drafts = spawn_drafts();
    let mut h = harness_with(
        drafts.clone(),
        Arc::new(MockVipService::not_enrolled()),
        Arc::new(MockIdentity::signed_out()),
        Arc::new(StaticTokens::new("test-token")),
    );

    h.form.set_first_name("Sam").await;
    h.form.set_email("sam@personal.com").await;
    h.form.input_phone("3035551212").await;

    // A brand new form over the same store picks the draft up.
    let mut second = harness_with(
        drafts,
        Arc::new(MockVipService::not_enrolled()),
        Arc::new(MockIdentity::signed_out()),
        Arc::new(StaticTokens::new("test-token")),
    );
    second.form.populate().await;
    assert_eq!(second.form.first_name(), "Sam");
    assert_eq!(second.form.email(), "sam@personal.com");
    assert_eq!(second.form.phone(), "(303) 555-1212");
}

#[tokio::test]
async fn price_keystrokes_are_mirrored_grouped() {
    let mut h = default_harness();
    h.form.input_offer_price("300000");
    assert_eq!(h.form.offer_price(), "300,000");

    h.form.input_offer_price("300000.5");
    assert_eq!(h.form.offer_price(), "300,000.5");

    // Unparseable intermediate input passes through unchanged.
    h.form.input_offer_price("30a");
    assert_eq!(h.form.offer_price(), "30a");
}

#[tokio::test]
async fn accepted_offer_reaches_gateway_and_clears_draft() {
    let mut h = default_harness();
    h.form.populate().await;
    h.form.input_offer_price("300,000");

    let outcome = h.form.submit().await.unwrap();
    assert_eq!(outcome, OfferOutcome::Accepted);

    let submissions = h.gateway.submissions();
    assert_eq!(submissions.len(), 1);
    let offer = &submissions[0];
    assert_eq!(offer.first_name, "Samuel");
    assert_eq!(offer.phone, "(303) 555-1212");
    assert_eq!(offer.buyer_type, BuyerType::Investor);
    assert_eq!(offer.offered_price, 300_000.0);
    assert_eq!(offer.property_id, PropertyId("prop_1".into()));
    assert_eq!(h.gateway.tokens_seen(), vec!["test-token".to_string()]);

    let draft: Option<OfferDraft> = h.drafts.load(DraftKey::Offer).await.unwrap();
    assert_eq!(draft, None);
}

#[tokio::test]
async fn below_minimum_offer_is_transmitted_but_flagged() {
    let mut h = default_harness();
    h.form.populate().await;
    h.form.input_offer_price("200000");

    let outcome = h.form.submit().await.unwrap();
    assert_eq!(
        outcome,
        OfferOutcome::BelowMinimum {
            min_price: 250_000.0
        }
    );
    // The backend still saw the low offer, and the draft survives for
    // another attempt.
    assert_eq!(h.gateway.submissions().len(), 1);
    let draft: Option<OfferDraft> = h.drafts.load(DraftKey::Offer).await.unwrap();
    assert!(draft.is_some());
}

#[tokio::test]
async fn submit_requires_every_field() {
    let mut h = default_harness();
    h.form.populate().await;
    // No price typed.
    let err = h.form.submit().await.unwrap_err();
    assert!(matches!(err, OfferError::MissingFields));
    assert!(h.gateway.submissions().is_empty());
}

#[tokio::test]
async fn submit_blocks_structurally_invalid_phone() {
    let mut h = default_harness();
    h.form.populate().await;
    h.form.input_phone("1234567890").await; // area code cannot start with 1
    h.form.input_offer_price("300000");

    let err = h.form.submit().await.unwrap_err();
    assert!(matches!(err, OfferError::InvalidPhone));
    assert!(h.gateway.submissions().is_empty());
}

#[tokio::test]
async fn submit_blocks_unparseable_price() {
    let mut h = default_harness();
    h.form.populate().await;
    h.form.input_offer_price("30a");

    let err = h.form.submit().await.unwrap_err();
    assert!(matches!(err, OfferError::InvalidPrice));
}

#[tokio::test]
async fn gateway_rejection_is_surfaced_and_draft_survives() {
    let mut h = default_harness();
    h.gateway.reject_with("an equal or higher offer exists");
    h.form.populate().await;
    h.form.input_offer_price("300000");

    let err = h.form.submit().await.unwrap_err();
    assert!(matches!(err, OfferError::Gateway(_)));

    let draft: Option<OfferDraft> = h.drafts.load(DraftKey::Offer).await.unwrap();
    assert!(draft.is_some());
}

#[tokio::test]
async fn signed_out_user_cannot_submit() {
    let mut h = harness_with(
        spawn_drafts(),
        Arc::new(MockVipService::enrolled(vip_rivera())),
        Arc::new(MockIdentity::signed_out()),
        Arc::new(NoSession),
    );
    h.form.populate().await;
    h.form.input_offer_price("300000");

    let err = h.form.submit().await.unwrap_err();
    assert!(matches!(err, OfferError::Auth(_)));
    assert!(h.gateway.submissions().is_empty());
}
