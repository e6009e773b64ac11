//! End-to-end walkthrough of the offer flow.
//!
//! Wires the system against in-memory collaborators, populates the offer
//! form from the VIP profile and identity claims, types a price and a
//! phone number, and submits.

use intake_app::clients::mock::{
    MockIdentity, MockProfileService, MockVipService, RecordingGateway, StaticTokens,
};
use intake_app::lifecycle::{setup_tracing, Collaborators, IntakeSystem};
use intake_app::model::{
    BuyerType, OfferOutcome, PropertyId, PropertyListing, UserClaims, VipBuyerProfile,
};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting intake walkthrough");

    let gateway = Arc::new(RecordingGateway::new());
    let system = IntakeSystem::new(Collaborators {
        identity: Arc::new(MockIdentity::signed_in(UserClaims {
            sub: "auth0|demo".into(),
            name: Some("Samuel Rivera".into()),
            email: Some("samuel@example.com".into()),
            ..UserClaims::default()
        })),
        profiles: Arc::new(MockProfileService::empty()),
        vip: Arc::new(MockVipService::enrolled(VipBuyerProfile {
            first_name: Some("Samuel".into()),
            last_name: Some("Rivera".into()),
            email: Some("samuel@example.com".into()),
            phone: Some("3035551212".into()),
            buyer_type: Some("Investor".into()),
            preferred_areas: vec!["North Metro".into(), "Foothills".into()],
        })),
        tokens: Arc::new(StaticTokens::new("demo-token")),
        gateway: gateway.clone(),
    });

    let listing = PropertyListing {
        id: PropertyId("prop_42".into()),
        street_address: "1420 Juniper Rd".into(),
        min_price: 250_000.0,
    };

    let mut form = system.offer_form(listing);

    let span = tracing::info_span!("offer_population");
    async {
        info!("Populating offer form from candidate sources");
        form.populate().await;
        info!(
            first_name = form.first_name(),
            phone = form.phone(),
            buyer_type = form.buyer_type(),
            "Form seeded"
        );
    }
    .instrument(span)
    .await;

    // The buyer adjusts the seeded values and types a price.
    form.set_buyer_type(BuyerType::Investor).await;
    form.input_offer_price("300000");
    info!(price = form.offer_price(), "Price entered");

    let span = tracing::info_span!("offer_submission");
    let outcome = async {
        info!("Submitting offer");
        form.submit().await
    }
    .instrument(span)
    .await;

    match outcome {
        Ok(OfferOutcome::Accepted) => info!("Offer accepted for review"),
        Ok(OfferOutcome::BelowMinimum { min_price }) => {
            info!(min_price, "Offer transmitted but below the listing minimum")
        }
        Err(e) => error!(error = %e, "Offer submission failed"),
    }

    info!(submissions = gateway.submissions().len(), "Gateway received");

    drop(form);
    system.shutdown().await?;

    info!("Walkthrough completed");
    Ok(())
}
