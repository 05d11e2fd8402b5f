// Domain models module
// Contains core data structures used throughout the application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Languages the studio can dub into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Hindi,
    Russian,
}

impl Language {
    /// All supported languages, in the order they are shown in the UI.
    pub const ALL: [Language; 12] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::Arabic,
        Language::Hindi,
        Language::Russian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
            Language::Russian => "Russian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.as_str().to_string()
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.as_str() == value)
            .ok_or_else(|| format!("Unsupported language: {}", value))
    }
}

/// Source language selection. The source dropdown offers every supported
/// language plus auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SourceLanguage {
    AutoDetect,
    Known(Language),
}

impl SourceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::AutoDetect => "Auto-detect",
            SourceLanguage::Known(lang) => lang.as_str(),
        }
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SourceLanguage> for String {
    fn from(lang: SourceLanguage) -> Self {
        lang.as_str().to_string()
    }
}

impl TryFrom<String> for SourceLanguage {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "Auto-detect" {
            Ok(SourceLanguage::AutoDetect)
        } else {
            Language::try_from(value).map(SourceLanguage::Known)
        }
    }
}

/// Input fields of the dubbing form. Persists across runs; only the URL is
/// cleared on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormState {
    pub source_url: String,
    pub source_language: SourceLanguage,
    pub target_language: Language,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            source_language: SourceLanguage::AutoDetect,
            target_language: Language::Spanish,
        }
    }
}

/// Progress flags of the current run. `is_processing` and `is_complete` are
/// never both true; `progress_percent` never decreases within a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingState {
    pub is_processing: bool,
    pub progress_percent: u8,
    pub is_complete: bool,
    pub current_stage: Option<String>,
}

/// Serializable view of the whole studio, sent to the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct StudioSnapshot {
    pub form: FormState,
    pub processing: ProcessingState,
    pub demo_notice: bool,
}

/// Progress update for a single pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageProgress {
    pub percent: u8,
    pub label: String,
}

/// Result block shown once a run completes.
#[derive(Debug, Clone, Serialize)]
pub struct DubbingSummary {
    pub run_id: Uuid,
    pub message: String,
    pub original_language: String,
    pub target_language: String,
    pub processing_time: String,
    pub quality: String,
    pub completed_at: DateTime<Utc>,
}

/// Dropdown contents for the two language selectors.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageOptions {
    pub source: Vec<String>,
    pub target: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_string(&Language::French).unwrap();
        assert_eq!(json, "\"French\"");

        let lang: Language = serde_json::from_str("\"Chinese\"").unwrap();
        assert_eq!(lang, Language::Chinese);

        assert!(serde_json::from_str::<Language>("\"Klingon\"").is_err());
    }

    #[test]
    fn test_source_language_serialization() {
        let json = serde_json::to_string(&SourceLanguage::AutoDetect).unwrap();
        assert_eq!(json, "\"Auto-detect\"");

        let parsed: SourceLanguage = serde_json::from_str("\"German\"").unwrap();
        assert_eq!(parsed, SourceLanguage::Known(Language::German));
    }

    #[test]
    fn test_form_defaults() {
        let form = FormState::default();
        assert!(form.source_url.is_empty());
        assert_eq!(form.source_language, SourceLanguage::AutoDetect);
        assert_eq!(form.target_language, Language::Spanish);
    }
}
