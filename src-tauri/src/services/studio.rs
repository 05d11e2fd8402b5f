//! The dubbing studio state machine.
//!
//! One object owns the form fields and the processing flags, and every UI
//! transition goes through it: `Idle -> Processing` via [`DubbingStudio::begin_run`]
//! (which requires a non-empty URL), `Processing -> Complete` via
//! [`DubbingStudio::finish_run`] once the last stage lands, and
//! `Complete -> Idle` via [`DubbingStudio::reset`]. There is no failure or
//! cancel transition; a started run always completes.

use log::{info, warn};
use uuid::Uuid;

use crate::config::StudioConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DubbingSummary, FormState, Language, ProcessingState, SourceLanguage, StageProgress,
    StudioSnapshot,
};

use super::dubbing;

pub struct DubbingStudio {
    config: StudioConfig,
    form: FormState,
    processing: ProcessingState,
    demo_notice: bool,
    current_run: Option<Uuid>,
}

impl DubbingStudio {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            config,
            form: FormState::default(),
            processing: ProcessingState::default(),
            demo_notice: false,
            current_run: None,
        }
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn snapshot(&self) -> StudioSnapshot {
        StudioSnapshot {
            form: self.form.clone(),
            processing: self.processing.clone(),
            demo_notice: self.demo_notice,
        }
    }

    fn ensure_idle(&self) -> AppResult<()> {
        if self.processing.is_processing {
            Err(AppError::AlreadyProcessing)
        } else {
            Ok(())
        }
    }

    // Form field setters. The UI disables the inputs during a run; the state
    // machine enforces the same rule.

    pub fn set_source_url(&mut self, url: String) -> AppResult<()> {
        self.ensure_idle()?;
        self.form.source_url = url;
        Ok(())
    }

    pub fn set_source_language(&mut self, language: SourceLanguage) -> AppResult<()> {
        self.ensure_idle()?;
        self.form.source_language = language;
        Ok(())
    }

    pub fn set_target_language(&mut self, language: Language) -> AppResult<()> {
        self.ensure_idle()?;
        self.form.target_language = language;
        Ok(())
    }

    /// Fill in the fixed demo link and raise the transient notice. The caller
    /// is responsible for expiring the notice via [`Self::clear_demo_notice`]
    /// after `demo_notice_duration`.
    pub fn use_demo_url(&mut self) -> AppResult<()> {
        self.ensure_idle()?;
        self.form.source_url = self.config.demo_url.clone();
        self.demo_notice = true;
        info!("Demo URL loaded");
        Ok(())
    }

    pub fn clear_demo_notice(&mut self) {
        self.demo_notice = false;
    }

    /// Start a run: the only validation in the studio is a non-empty URL.
    /// Fails with [`AppError::AlreadyProcessing`] if a run is in flight, so a
    /// second start cannot corrupt the one being driven.
    pub fn begin_run(&mut self) -> AppResult<Uuid> {
        self.ensure_idle()?;

        if self.form.source_url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Please enter a YouTube URL".to_string(),
            ));
        }

        let run_id = Uuid::new_v4();
        self.processing = ProcessingState {
            is_processing: true,
            progress_percent: 0,
            is_complete: false,
            current_stage: None,
        };
        self.demo_notice = false;
        self.current_run = Some(run_id);

        info!(
            "Run {} started: {} -> {}",
            run_id, self.form.source_language, self.form.target_language
        );
        Ok(run_id)
    }

    /// Record a stage update. Progress never moves backwards within a run;
    /// updates outside a run are dropped.
    pub fn apply_stage(&mut self, update: &StageProgress) {
        if !self.processing.is_processing {
            warn!("Stage update {}% ignored: no run in progress", update.percent);
            return;
        }

        self.processing.progress_percent = self.processing.progress_percent.max(update.percent);
        self.processing.current_stage = Some(update.label.clone());
    }

    /// Flip the run to Complete and build the result block.
    pub fn finish_run(&mut self) -> AppResult<DubbingSummary> {
        let run_id = self
            .current_run
            .take()
            .ok_or_else(|| AppError::InvalidState("no run to finish".to_string()))?;

        self.processing.is_processing = false;
        self.processing.is_complete = true;
        self.processing.current_stage = None;

        let summary = dubbing::summarize_run(&self.form, run_id);
        info!("Run {} complete: {}", run_id, summary.message);
        Ok(summary)
    }

    /// Return to the initial form: completion flag and progress cleared, URL
    /// emptied, language selections kept.
    pub fn reset(&mut self) -> AppResult<()> {
        self.ensure_idle()?;

        self.processing.is_complete = false;
        self.processing.progress_percent = 0;
        self.processing.current_stage = None;
        self.form.source_url.clear();
        self.demo_notice = false;
        info!("Studio reset to idle form");
        Ok(())
    }
}

impl Default for DubbingStudio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}
