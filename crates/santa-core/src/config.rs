use crate::error::{Result, SantaError};
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Participant / TwilioConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub people: Vec<Participant>,
    #[serde(default)]
    pub skip_sms: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twilio: Option<TwilioConfig>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SantaError::ConfigNotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Reject participant lists the draw cannot work with.
    ///
    /// Duplicate names hash to the same token and would corrupt both the
    /// circle and every later lookup, so they are refused here rather than
    /// discovered as an integrity error at request time.
    pub fn validate(&self) -> Result<()> {
        if self.people.len() < 2 {
            return Err(SantaError::TooFewParticipants(self.people.len()));
        }
        let mut seen = HashSet::new();
        for (i, person) in self.people.iter().enumerate() {
            if person.name.trim().is_empty() {
                return Err(SantaError::EmptyName(i));
            }
            if person.phone.trim().is_empty() {
                return Err(SantaError::MissingPhone(person.name.clone()));
            }
            if !seen.insert(person.name.as_str()) {
                return Err(SantaError::DuplicateName(person.name.clone()));
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reverse lookup
    // -----------------------------------------------------------------------

    /// Find the participant a persisted token belongs to by rehashing every
    /// configured name. O(people) per call, which is fine for a guest list
    /// measured in tens.
    pub fn participant_by_token(&self, token: &Token) -> Option<&Participant> {
        self.people.iter().find(|p| &Token::of(&p.name) == token)
    }

    pub fn name_by_token(&self, token: &Token) -> Option<&str> {
        self.participant_by_token(token).map(|p| p.name.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
