// src/message.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/ai-chat`. Missing fields deserialize as empty so that
/// validation can answer with a structured 400.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChatReply {
    pub fn reply(text: impl Into<String>) -> Self {
        Self { success: true, response: Some(text.into()), message: None }
    }
}

/// Body of `POST /api/contact`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub subject: Option<String>,
}

impl ContactRequest {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// `{success, message}`: the contact acknowledgement and every error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReply {
    pub success: bool,
    pub message: String,
}

impl StatusReply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

// Scalars of any JSON type are kept as their text so a stray number or
// boolean does not discard the rest of the body.
fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_fields_accept_non_string_scalars() {
        let contact: ContactRequest = serde_json::from_str(
            r#"{"name":"Ann","email":"a@b.c","message":42,"subject":true}"#,
        )
        .unwrap();
        assert_eq!(contact.message, "42");
        assert_eq!(contact.subject.as_deref(), Some("true"));
        assert!(contact.is_complete());
    }

    #[test]
    fn null_fields_count_as_missing() {
        let contact: ContactRequest =
            serde_json::from_str(r#"{"name":null,"email":"a@b.c","message":"hi","subject":null}"#)
                .unwrap();
        assert!(contact.subject.is_none());
        assert!(!contact.is_complete());
    }
}
