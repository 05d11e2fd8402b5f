// Simulated dubbing pipeline: stage table, runner and result summary.

pub mod pipeline;
pub mod stages;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{DubbingSummary, FormState};

/// Fixed processing time shown in the result block. The simulation does not
/// measure anything real.
pub const FAKE_PROCESSING_TIME: &str = "~5.4 seconds";

/// Fixed quality label shown in the result block.
pub const FAKE_QUALITY: &str = "Professional";

/// Build the result block for a finished run. Pure function of the form
/// state; every metric is canned.
pub fn summarize_run(form: &FormState, run_id: Uuid) -> DubbingSummary {
    DubbingSummary {
        run_id,
        message: format!(
            "Your video has been successfully dubbed to {}",
            form.target_language
        ),
        original_language: form.source_language.to_string(),
        target_language: form.target_language.to_string(),
        processing_time: FAKE_PROCESSING_TIME.to_string(),
        quality: FAKE_QUALITY.to_string(),
        completed_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, SourceLanguage};

    #[test]
    fn test_summary_uses_form_languages() {
        let form = FormState {
            source_url: "https://example.com/video".to_string(),
            source_language: SourceLanguage::AutoDetect,
            target_language: Language::French,
        };

        let summary = summarize_run(&form, Uuid::new_v4());
        assert_eq!(
            summary.message,
            "Your video has been successfully dubbed to French"
        );
        assert_eq!(summary.original_language, "Auto-detect");
        assert_eq!(summary.target_language, "French");
        assert_eq!(summary.processing_time, "~5.4 seconds");
        assert_eq!(summary.quality, "Professional");
    }
}
