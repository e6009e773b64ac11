//! The buyer-qualification survey.
//!
//! A short wizard: language, whether the buyer has a real-estate agent,
//! then a contact step that auto-populates only while untouched and gates
//! completion on a dialable US phone number.

use crate::clients::{IdentityProvider, ProfileService, VipBuyerService};
use crate::forms::{claims_candidate, profile_candidate, vip_candidate};
use crate::model::{AgentAnswer, Language, SurveyData};
use intake_core::{format_phone, is_valid_us_phone, resolve};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurveyError {
    #[error("all contact fields are required")]
    MissingFields,

    #[error("please enter a valid US phone number")]
    InvalidPhone,
}

pub struct QualifySurvey {
    data: SurveyData,
    vip: Arc<dyn VipBuyerService>,
    profiles: Arc<dyn ProfileService>,
    identity: Arc<dyn IdentityProvider>,
}

impl QualifySurvey {
    pub fn new(
        vip: Arc<dyn VipBuyerService>,
        profiles: Arc<dyn ProfileService>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            data: SurveyData::default(),
            vip,
            profiles,
            identity,
        }
    }

    pub fn data(&self) -> &SurveyData {
        &self.data
    }

    pub fn set_language(&mut self, language: Language) {
        self.data.language = language;
    }

    pub fn answer_agent(&mut self, answer: AgentAnswer) {
        self.data.real_estate_agent = Some(answer);
    }

    /// Seed the contact step, but only while the respondent has typed
    /// nothing: a returning respondent's own answers are never replaced.
    ///
    /// Order: VIP profile, then backend profile, then identity claims.
    #[instrument(skip(self))]
    pub async fn populate_contact(&mut self) {
        if !self.data.contact_is_empty() {
            return;
        }

        let vip = vip_candidate(self.vip.as_ref()).await;
        let profile = profile_candidate(self.profiles.as_ref()).await;
        let claims = claims_candidate(self.identity.as_ref()).await;

        let merged = resolve(&[vip, profile, claims]);
        self.data.first_name = merged.first_name;
        self.data.last_name = merged.last_name;
        self.data.email = merged.email;
        self.data.phone = merged.phone;
        info!(populated = !self.data.contact_is_empty(), "Survey contact step populated");
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.data.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.data.last_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.data.email = value.into();
    }

    /// Route a phone keystroke through the display formatter.
    pub fn input_phone(&mut self, raw: &str) {
        self.data.phone = format_phone(raw);
    }

    /// Complete the contact step. All fields are required and the phone
    /// must be structurally dialable; otherwise the wizard stays put and
    /// the caller surfaces the message.
    pub fn submit_contact(&self) -> Result<(), SurveyError> {
        if !self.data.contact_complete() {
            return Err(SurveyError::MissingFields);
        }
        if !is_valid_us_phone(&self.data.phone) {
            return Err(SurveyError::InvalidPhone);
        }
        Ok(())
    }
}
