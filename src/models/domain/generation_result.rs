use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const NOT_FOUND_MARKER: &str = "Not found.";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Idle,
    Loading,
    Done,
    Error,
}

/// The three sections shown on screen and exported. Only one is live at a time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResult {
    pub summary: String,
    pub mcqs: String,
    pub fill_blanks: String,
    pub status: GenerationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GenerationResult {
    pub fn loading() -> Self {
        Self {
            summary: LOADING_PLACEHOLDER.to_string(),
            mcqs: LOADING_PLACEHOLDER.to_string(),
            fill_blanks: LOADING_PLACEHOLDER.to_string(),
            status: GenerationStatus::Loading,
            updated_at: Some(Utc::now()),
        }
    }

    pub fn done(summary: String, mcqs: String, fill_blanks: String) -> Self {
        Self {
            summary,
            mcqs,
            fill_blanks,
            status: GenerationStatus::Done,
            updated_at: Some(Utc::now()),
        }
    }

    /// Error text goes into the summary pane; the other two are cleared.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            summary: message.into(),
            mcqs: String::new(),
            fill_blanks: String::new(),
            status: GenerationStatus::Error,
            updated_at: Some(Utc::now()),
        }
    }
}

impl Default for GenerationResult {
    fn default() -> Self {
        Self {
            summary: String::new(),
            mcqs: String::new(),
            fill_blanks: String::new(),
            status: GenerationStatus::Idle,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_sets_all_fields() {
        let result = GenerationResult::loading();
        assert_eq!(result.summary, "Loading...");
        assert_eq!(result.mcqs, "Loading...");
        assert_eq!(result.fill_blanks, "Loading...");
        assert_eq!(result.status, GenerationStatus::Loading);
    }

    #[test]
    fn test_failed_clears_siblings() {
        let result = GenerationResult::failed("Server error. Please try again later.");
        assert_eq!(result.summary, "Server error. Please try again later.");
        assert!(result.mcqs.is_empty());
        assert!(result.fill_blanks.is_empty());
        assert_eq!(result.status, GenerationStatus::Error);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(GenerationResult::default()).unwrap();
        assert_eq!(json["status"], "idle");
        assert!(json.get("updated_at").is_none());
    }
}
