//! Domain model: the entities the identity core reads and writes.

use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::dkim::DkimRecord;

/// Outcome of a single SPF or DKIM DNS check.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum VerifyStatus {
    /// The expected record was found in DNS.
    #[serde(rename = "OK")]
    Ok,
    /// No record was found, or no returned record matched.
    Missing,
}

impl fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyStatus::Ok => f.write_str("OK"),
            VerifyStatus::Missing => f.write_str("Missing"),
        }
    }
}

/// A mail-sending domain owned by a [`Server`].
///
/// `dkim_selector` and `dkim_private_key` are assigned once at creation and
/// never regenerated: the published DKIM record name and public key are
/// derived from them and must stay stable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Domain {
    pub id: Uuid,
    pub server_id: Uuid,
    /// Registrable mail-sending domain name, globally unique.
    pub name: String,
    pub verification_token: String,
    pub dkim_selector: String,
    /// PKCS#8 PEM. The public key is re-derived from this on demand rather
    /// than stored separately.
    pub dkim_private_key: String,
    pub outgoing: bool,
    pub incoming: bool,
    pub created_at: OffsetDateTime,
    /// Set when a verification pass records overall success. `None` until
    /// then.
    pub verified_at: Option<OffsetDateTime>,
    /// Timestamp of the last verification attempt, successful or not.
    pub dns_checked_at: Option<OffsetDateTime>,
    pub spf_status: Option<VerifyStatus>,
    pub spf_error: Option<String>,
    pub dkim_status: Option<VerifyStatus>,
    pub dkim_error: Option<String>,
}

/// A mail server that owns zero or more domains.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Server {
    pub id: Uuid,
    pub name: String,
}

/// An API credential tied to a [`Server`]. Held credentials are treated as
/// nonexistent by lookups.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Credential {
    pub id: Uuid,
    pub server_id: Uuid,
    pub key: String,
    pub hold: bool,
}

/// Result of one [`verify_domain`][crate::service::DomainService::verify_domain]
/// pass. Mirrors the status fields persisted on [`Domain`], plus the record
/// the checks ran against.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub spf_status: VerifyStatus,
    pub spf_error: Option<String>,
    pub dkim_status: VerifyStatus,
    pub dkim_error: Option<String>,
    /// Whether the domain's `verified_at` was set *before* this call's own
    /// updates were applied. Reports the last confirmed state, not the
    /// outcome of the current checks.
    pub identity_status: VerifyStatus,
    pub dkim_record: DkimRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_status_serializes_as_ok_and_missing() {
        assert_eq!(serde_json::to_string(&VerifyStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::to_string(&VerifyStatus::Missing).unwrap(),
            "\"Missing\""
        );
    }

    #[test]
    fn verify_status_display() {
        assert_eq!(VerifyStatus::Ok.to_string(), "OK");
        assert_eq!(VerifyStatus::Missing.to_string(), "Missing");
    }
}
