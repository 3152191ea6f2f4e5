use crate::config::{Config, TwilioConfig};
use crate::error::{Result, SantaError};
use crate::links::{self, LinkRegistry};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Notifier trait
// ---------------------------------------------------------------------------

/// A channel that can deliver one message to one phone number.
///
/// Built once at process startup and passed in wherever a batch runs; the
/// core never constructs a provider client on its own.
pub trait Notifier {
    /// Deliver `body` to `to`, returning the provider's message id.
    fn send(&self, to: &str, body: &str) -> Result<String>;
}

// ---------------------------------------------------------------------------
// TwilioNotifier
// ---------------------------------------------------------------------------

const TWILIO_API: &str = "https://api.twilio.com";

pub struct TwilioNotifier {
    http: reqwest::blocking::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioNotifier {
    pub fn new(config: &TwilioConfig) -> Self {
        Self::with_base_url(config, TWILIO_API)
    }

    /// Point the client at a different API host (used by tests).
    pub fn with_base_url(config: &TwilioConfig, base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
        }
    }
}

impl Notifier for TwilioNotifier {
    fn send(&self, to: &str, body: &str) -> Result<String> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .map_err(|e| SantaError::Notification(e.to_string()))?;

        let status = response.status();
        let payload: serde_json::Value = response
            .json()
            .map_err(|e| SantaError::Notification(e.to_string()))?;

        if !status.is_success() {
            let detail = payload
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(SantaError::Notification(detail));
        }

        payload
            .get("sid")
            .and_then(|s| s.as_str())
            .map(str::to_string)
            .ok_or_else(|| SantaError::Notification("response missing message sid".into()))
    }
}

// ---------------------------------------------------------------------------
// Delivery batch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sent { sid: String },
    Skipped,
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReport {
    pub name: String,
    pub phone: String,
    pub url: String,
    #[serde(flatten)]
    pub status: DeliveryStatus,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliverySummary {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// The SMS body for one participant.
pub fn greeting(name: &str, url: &str) -> String {
    format!("🎄 Hola {name}! Ací tens el teu link per a l'Amic Invisible: {url}")
}

/// Deliver every participant's personal link, one send at a time.
///
/// `None` is dry-run mode: nothing is transmitted and every report comes back
/// `Skipped`, with the url still filled in so the operator can forward links
/// by hand. A failed send is recorded and the batch moves on to the next
/// participant. A persisted token with no configured participant is reported
/// as failed rather than aborting the batch.
pub fn deliver_links(
    notifier: Option<&dyn Notifier>,
    config: &Config,
    registry: &LinkRegistry,
    public_url: &str,
) -> Vec<DeliveryReport> {
    let mut reports = Vec::with_capacity(registry.len());

    for entry in registry.entries() {
        let url = links::link_url(public_url, &entry.id);

        let Some(person) = config.participant_by_token(&entry.person) else {
            tracing::warn!(token = %entry.person, "no configured participant for persisted link");
            reports.push(DeliveryReport {
                name: entry.person.to_string(),
                phone: String::new(),
                url,
                status: DeliveryStatus::Failed {
                    reason: "token does not match any configured participant".into(),
                },
            });
            continue;
        };

        let status = match notifier {
            None => DeliveryStatus::Skipped,
            Some(n) => match n.send(&person.phone, &greeting(&person.name, &url)) {
                Ok(sid) => DeliveryStatus::Sent { sid },
                Err(e) => DeliveryStatus::Failed {
                    reason: e.to_string(),
                },
            },
        };

        reports.push(DeliveryReport {
            name: person.name.clone(),
            phone: person.phone.clone(),
            url,
            status,
        });
    }

    reports
}

pub fn summarize(reports: &[DeliveryReport]) -> DeliverySummary {
    let mut summary = DeliverySummary::default();
    for report in reports {
        match report.status {
            DeliveryStatus::Sent { .. } => summary.sent += 1,
            DeliveryStatus::Skipped => summary.skipped += 1,
            DeliveryStatus::Failed { .. } => summary.failed += 1,
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
