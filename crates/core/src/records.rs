//! Alumni network entity types.
//!
//! Each entity is a read-only projection of a store document. Decoding is
//! lenient: every projected field accepts a string, number, boolean or null
//! and is kept as display text, so a document with unexpected field types
//! still renders instead of failing the whole collection.

use crate::store::Document;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Render a JSON value as display text.
///
/// Returns `None` for null and for blank strings so callers can substitute
/// a placeholder. Numbers always render, including zero, and integral
/// floats drop their fractional part (`1000.0` renders as `1000`).
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_text(n)),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_to_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

fn number_to_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// `deserialize_with` adapter that accepts any JSON value as display text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text))
}

/// A typed projection of one store collection.
pub trait Entity: DeserializeOwned + Default + Send {
    /// Collection label used in logs.
    const KIND: &'static str;

    /// Decode from a merged document, falling back to an all-absent entity.
    fn from_document(document: Document) -> Self {
        match serde_json::from_value(Value::Object(document)) {
            Ok(entity) => entity,
            Err(e) => {
                tracing::warn!(kind = Self::KIND, error = %e, "Undecodable document, rendering placeholders");
                Self::default()
            }
        }
    }
}

/// An alumni event (reunion, webinar, meetup).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub organizer: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl Entity for Event {
    const KIND: &'static str = "event";
}

/// A fundraising campaign. `raised` and `goal` are amounts, kept as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Campaign {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub raised: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub goal: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub purpose: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub deadline: Option<String>,
}

impl Entity for Campaign {
    const KIND: &'static str = "campaign";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Internship {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl Entity for Internship {
    const KIND: &'static str = "internship";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notification {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub date: Option<String>,
}

impl Entity for Notification {
    const KIND: &'static str = "notification";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MentorshipOffer {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub mentor_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub expertise: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub contact: Option<String>,
}

impl Entity for MentorshipOffer {
    const KIND: &'static str = "mentorship";
}

/// An alumni directory entry. No validation is applied to any field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlumniProfile {
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub college: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub profession: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub batch: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub grad_year: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
}

impl Entity for AlumniProfile {
    const KIND: &'static str = "alumni";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn event_decodes_type_field() {
        let event = Event::from_document(doc(json!({
            "id": "e1",
            "title": "Reunion",
            "type": "Social",
            "date": "2025-01-01",
            "organizer": "Alumni Office"
        })));
        assert_eq!(event.kind.as_deref(), Some("Social"));
        assert_eq!(event.organizer.as_deref(), Some("Alumni Office"));
        assert!(event.description.is_none());
    }

    #[test]
    fn camel_case_fields_decode() {
        let offer = MentorshipOffer::from_document(doc(json!({"mentorName": "Dr. Rao"})));
        assert_eq!(offer.mentor_name.as_deref(), Some("Dr. Rao"));

        let profile = AlumniProfile::from_document(doc(json!({"gradYear": 2019})));
        assert_eq!(profile.grad_year.as_deref(), Some("2019"));
    }

    #[test]
    fn numbers_render_like_integers_when_integral() {
        let campaign = Campaign::from_document(doc(json!({
            "raised": 1500.0,
            "goal": 10000,
            "deadline": 12.5
        })));
        assert_eq!(campaign.raised.as_deref(), Some("1500"));
        assert_eq!(campaign.goal.as_deref(), Some("10000"));
        assert_eq!(campaign.deadline.as_deref(), Some("12.5"));
    }

    #[test]
    fn zero_amount_is_kept() {
        let campaign = Campaign::from_document(doc(json!({"raised": 0})));
        assert_eq!(campaign.raised.as_deref(), Some("0"));
    }

    #[test]
    fn null_and_blank_strings_are_absent() {
        let notification = Notification::from_document(doc(json!({
            "title": null,
            "message": "   ",
            "date": ""
        })));
        assert_eq!(notification, Notification::default());
    }

    #[test]
    fn arrays_and_objects_render_as_text() {
        assert_eq!(
            value_to_text(&json!(["Rust", "Go"])).as_deref(),
            Some("Rust, Go")
        );
        assert_eq!(value_to_text(&json!([])), None);
        assert_eq!(
            value_to_text(&json!({"seconds": 1})).as_deref(),
            Some(r#"{"seconds":1}"#)
        );
        assert_eq!(value_to_text(&json!(false)).as_deref(), Some("false"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let internship = Internship::from_document(doc(json!({
            "title": "Backend Intern",
            "stipend": 20000,
            "tags": ["rust"]
        })));
        assert_eq!(internship.title.as_deref(), Some("Backend Intern"));
        assert!(internship.company.is_none());
    }
}
