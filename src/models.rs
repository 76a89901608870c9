use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::validation::{is_valid_email, require_text};

/// Source recorded when the capture form does not say where the lead came from.
pub const DEFAULT_LEAD_SOURCE: &str = "unknown";
/// Status every lead starts (and, here, stays) in.
pub const NEW_LEAD_STATUS: &str = "new";
/// Reserved key the server writes the receipt time under.
pub const EVENT_TIMESTAMP_KEY: &str = "timestamp";
/// Maximum number of leads returned by a single listing.
pub const LEAD_LIST_LIMIT: usize = 100;

pub const LEAD_CAPTURED_MESSAGE: &str = "Lead capturado com sucesso!";
pub const API_ONLINE_MESSAGE: &str = "VAGA BLINDADA ROV API Online";
pub const MOCK_CHECKOUT_URL: &str = "https://checkout.stripe.com/session_id_mock";

// ============ Stored Records ============

/// A captured prospective-customer contact.
///
/// `id` and `created_at` are assigned by the server; the rest comes from the
/// capture form and is never modified after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Builds a new lead from validated form input with a fresh identity.
    pub fn from_capture(input: LeadCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            source: input
                .source
                .unwrap_or_else(|| DEFAULT_LEAD_SOURCE.to_string()),
            status: NEW_LEAD_STATUS.to_string(),
            created_at: now,
        }
    }
}

/// A lead as read back from storage.
///
/// `_id` is the storage-assigned record identifier rendered as text; it is
/// distinct from the lead's own `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLead {
    #[serde(rename = "_id")]
    pub record_id: String,
    #[serde(flatten)]
    pub lead: Lead,
}

/// A client-defined analytics document stamped with its receipt time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    fields: Map<String, Value>,
    received_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(fields: Map<String, Value>, received_at: DateTime<Utc>) -> Self {
        Self {
            fields,
            received_at,
        }
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// The document as persisted: client fields plus the server `timestamp`,
    /// which replaces any client-supplied value under that key.
    pub fn to_document(&self) -> Value {
        let mut document = self.fields.clone();
        document.insert(
            EVENT_TIMESTAMP_KEY.to_string(),
            Value::String(
                self.received_at
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
        );
        Value::Object(document)
    }
}

// ============ Request Models ============

/// Body of `POST /api/leads/capture`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub source: Option<String>,
}

impl LeadCreate {
    /// Field rules applied before anything touches storage.
    pub fn validate(&self, strict_email: bool) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        require_text("phone", &self.phone)?;

        if strict_email && !is_valid_email(&self.email) {
            return Err(AppError::Validation(format!(
                "field 'email' is not a valid email address: {}",
                self.email
            )));
        }

        Ok(())
    }
}

// ============ Response Models ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureLeadResponse {
    pub success: bool,
    pub lead_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Placeholder checkout session; no payment provider is contacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub checkout_url: String,
    pub payment_id: String,
    pub success: bool,
}

impl CheckoutResponse {
    pub fn mock() -> Self {
        Self {
            checkout_url: MOCK_CHECKOUT_URL.to_string(),
            payment_id: Uuid::new_v4().to_string(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ana(source: Option<&str>) -> LeadCreate {
        LeadCreate {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "11999999999".into(),
            source: source.map(str::to_string),
        }
    }

    #[test]
    fn new_lead_gets_defaults() {
        let now = Utc::now();
        let lead = Lead::from_capture(ana(None), now);

        assert_eq!(lead.source, "unknown");
        assert_eq!(lead.status, "new");
        assert_eq!(lead.created_at, now);
        assert!(Uuid::parse_str(&lead.id).is_ok());
    }

    #[test]
    fn explicit_source_is_kept() {
        let lead = Lead::from_capture(ana(Some("instagram")), Utc::now());
        assert_eq!(lead.source, "instagram");
    }

    #[test]
    fn null_source_deserializes_as_missing() {
        let input: LeadCreate = serde_json::from_value(json!({
            "name": "Ana", "email": "ana@x.com", "phone": "1", "source": null
        }))
        .unwrap();
        assert!(input.source.is_none());
    }

    #[test]
    fn blank_fields_fail_validation() {
        let mut input = ana(None);
        input.phone = "  ".into();
        assert!(matches!(
            input.validate(false),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn strict_email_only_when_enabled() {
        let mut input = ana(None);
        input.email = "not-an-email".into();
        assert!(input.validate(false).is_ok());
        assert!(input.validate(true).is_err());
    }

    #[test]
    fn stored_lead_flattens_with_text_record_id() {
        let stored = StoredLead {
            record_id: "42".into(),
            lead: Lead::from_capture(ana(None), Utc::now()),
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["_id"], "42");
        assert_eq!(value["name"], "Ana");
        assert_eq!(value["status"], "new");
    }

    #[test]
    fn event_document_carries_server_timestamp() {
        let now = Utc::now();
        let mut fields = Map::new();
        fields.insert("type".into(), json!("page_view"));
        fields.insert("timestamp".into(), json!("1999-01-01T00:00:00Z"));

        let document = AnalyticsEvent::new(fields, now).to_document();
        assert_eq!(document["type"], "page_view");

        let stamped: DateTime<Utc> = document["timestamp"].as_str().unwrap().parse().unwrap();
        assert_eq!(stamped, now);
    }

    #[test]
    fn mock_checkout_ids_differ() {
        let a = CheckoutResponse::mock();
        let b = CheckoutResponse::mock();
        assert!(a.success);
        assert_eq!(a.checkout_url, MOCK_CHECKOUT_URL);
        assert_ne!(a.payment_id, b.payment_id);
    }
}
