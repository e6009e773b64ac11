//! Buyer-qualification survey state.

use serde::{Deserialize, Serialize};

/// Language the survey is presented in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

/// Answer to the "do you have a real estate agent?" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentAnswer {
    Yes,
    No,
}

/// Accumulated survey answers. Contact fields hold display-form values
/// (phone already formatted), mirroring what the inputs show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyData {
    pub language: Language,
    pub real_estate_agent: Option<AgentAnswer>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl SurveyData {
    /// Auto-population runs only while the respondent has typed nothing.
    pub fn contact_is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
    }

    pub fn contact_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
    }
}
