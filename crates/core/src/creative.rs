//! Creative records: the unvalidated input DTO and the validated record.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::quadrant::Quadrant;
use crate::types::{new_doc_id, DocId, Timestamp};

/// A validated creative record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creative {
    pub id: DocId,
    pub title: String,
    pub overview: String,
    pub quadrant: Quadrant,
    pub created_at: Timestamp,
}

/// Creative input as received from a client, before validation.
///
/// Every field is optional at the parsing stage so that missing fields are
/// reported as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCreative {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub quadrant: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl NewCreative {
    /// Validate the input and build a [`Creative`].
    ///
    /// Text fields are trimmed and must be non-empty. An omitted quadrant
    /// defaults to [`Quadrant::KnownUnknown`]; any other value must be one
    /// of the four known labels. `created_at` defaults to now.
    pub fn validate(self) -> Result<Creative, CoreError> {
        let title = required_text("title", self.title)?;
        let overview = required_text("overview", self.overview)?;

        let quadrant = match self.quadrant {
            Some(raw) => raw.parse::<Quadrant>()?,
            None => Quadrant::default(),
        };

        Ok(Creative {
            id: new_doc_id(),
            title,
            overview,
            quadrant,
            created_at: self.created_at.unwrap_or_else(chrono::Utc::now),
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn input(quadrant: Option<&str>) -> NewCreative {
        NewCreative {
            title: Some("Night market".into()),
            overview: Some("Street food at dusk".into()),
            quadrant: quadrant.map(Into::into),
            created_at: None,
        }
    }

    #[test]
    fn omitted_quadrant_defaults_to_known_unknown() {
        let creative = input(None).validate().unwrap();
        assert_eq!(creative.quadrant, Quadrant::KnownUnknown);
    }

    #[test]
    fn explicit_quadrant_is_kept() {
        let creative = input(Some("unknown-unknown")).validate().unwrap();
        assert_eq!(creative.quadrant, Quadrant::UnknownUnknown);
    }

    #[test]
    fn unknown_quadrant_is_rejected() {
        assert_matches!(
            input(Some("somewhat-known")).validate(),
            Err(CoreError::Validation(msg)) if msg.contains("somewhat-known")
        );
    }

    #[test]
    fn empty_quadrant_is_rejected() {
        assert!(input(Some("")).validate().is_err());
    }

    #[test]
    fn missing_title_is_rejected() {
        let mut new = input(None);
        new.title = None;
        assert_matches!(new.validate(), Err(CoreError::Validation(msg)) if msg == "title is required");
    }

    #[test]
    fn blank_overview_is_rejected() {
        let mut new = input(None);
        new.overview = Some("   ".into());
        assert_matches!(new.validate(), Err(CoreError::Validation(msg)) if msg == "overview is required");
    }

    #[test]
    fn text_fields_are_trimmed() {
        let mut new = input(None);
        new.title = Some("  Night market  ".into());
        assert_eq!(new.validate().unwrap().title, "Night market");
    }

    #[test]
    fn created_at_defaults_to_now() {
        let before = chrono::Utc::now();
        let creative = input(None).validate().unwrap();
        assert!(creative.created_at >= before);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let new: NewCreative = serde_json::from_str(r#"{"title":"only a title"}"#).unwrap();
        assert_eq!(new.title.as_deref(), Some("only a title"));
        assert!(new.overview.is_none());
        assert!(new.quadrant.is_none());
    }
}
