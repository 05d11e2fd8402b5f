use log::{error, info};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tauri::State;
use tokio::sync::{mpsc, Mutex};

use crate::errors::AppError;
use crate::events::{self, DUBBING_COMPLETE, DUBBING_PROGRESS, STUDIO_STATE};
use crate::models::{
    DubbingSummary, Language, LanguageOptions, SourceLanguage, StageProgress, StudioSnapshot,
};
use crate::services::dubbing::pipeline;
use crate::services::dubbing::stages::STAGES;
use crate::services::studio::DubbingStudio;

/// The studio is the single owner of all widget state; every command goes
/// through this handle.
pub type SharedStudio = Arc<Mutex<DubbingStudio>>;

static LANGUAGE_OPTIONS: Lazy<LanguageOptions> = Lazy::new(|| {
    let target: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
    let mut source = Vec::with_capacity(target.len() + 1);
    source.push(SourceLanguage::AutoDetect.to_string());
    source.extend(target.iter().cloned());
    LanguageOptions { source, target }
});

/// Dropdown contents for the source and target selectors.
#[tauri::command]
pub fn get_language_options() -> LanguageOptions {
    LANGUAGE_OPTIONS.clone()
}

/// Current studio state, used by the frontend on startup.
#[tauri::command]
pub async fn get_studio_state(
    studio: State<'_, SharedStudio>,
) -> Result<StudioSnapshot, String> {
    Ok(studio.lock().await.snapshot())
}

#[tauri::command]
pub async fn set_source_url(
    url: String,
    studio: State<'_, SharedStudio>,
) -> Result<StudioSnapshot, String> {
    let mut studio = studio.lock().await;
    studio.set_source_url(url).map_err(|e| e.to_string())?;
    Ok(studio.snapshot())
}

#[tauri::command]
pub async fn set_source_language(
    language: SourceLanguage,
    studio: State<'_, SharedStudio>,
) -> Result<StudioSnapshot, String> {
    let mut studio = studio.lock().await;
    studio
        .set_source_language(language)
        .map_err(|e| e.to_string())?;
    Ok(studio.snapshot())
}

#[tauri::command]
pub async fn set_target_language(
    language: Language,
    studio: State<'_, SharedStudio>,
) -> Result<StudioSnapshot, String> {
    let mut studio = studio.lock().await;
    studio
        .set_target_language(language)
        .map_err(|e| e.to_string())?;
    Ok(studio.snapshot())
}

/// Fill in the fixed demo link and show a transient "Demo URL loaded!"
/// notice; a background task expires the notice after the configured delay.
#[tauri::command]
pub async fn use_demo_video(
    window: tauri::Window,
    studio: State<'_, SharedStudio>,
) -> Result<StudioSnapshot, String> {
    let (snapshot, notice_duration) = {
        let mut studio = studio.lock().await;
        studio.use_demo_url().map_err(|e| e.to_string())?;
        (studio.snapshot(), studio.config().demo_notice_duration())
    };
    events::emit_event(&window, STUDIO_STATE, snapshot.clone());

    let studio = studio.inner().clone();
    tokio::spawn(async move {
        tokio::time::sleep(notice_duration).await;
        let snapshot = {
            let mut studio = studio.lock().await;
            studio.clear_demo_notice();
            studio.snapshot()
        };
        events::emit_event(&window, STUDIO_STATE, snapshot);
    });

    Ok(snapshot)
}

/// Run the simulated dubbing pipeline to completion.
///
/// Validates the form, then drives the fixed stage table: each stage update
/// is applied to the studio and forwarded to the frontend as a
/// `dubbing-progress` event. There is no cancellation; the command resolves
/// with the result block once the last stage lands.
#[tauri::command]
pub async fn start_dubbing(
    window: tauri::Window,
    studio: State<'_, SharedStudio>,
) -> Result<DubbingSummary, String> {
    {
        let mut studio = studio.lock().await;
        if let Err(e) = studio.begin_run() {
            error!("Refusing to start dubbing: {}", e);
            events::emit_error(&window, &e);
            return Err(e.to_string());
        }
        events::emit_event(&window, STUDIO_STATE, studio.snapshot());
    }

    // Forward stage updates to the studio and the frontend while the
    // pipeline runs (same shape as a download progress monitor).
    let (tx, mut rx) = mpsc::channel::<StageProgress>(16);
    let monitor_studio = studio.inner().clone();
    let monitor_window = window.clone();
    let monitor = tokio::spawn(async move {
        while let Some(update) = rx.recv().await {
            {
                let mut studio = monitor_studio.lock().await;
                studio.apply_stage(&update);
            }
            events::emit_event(&monitor_window, DUBBING_PROGRESS, update);
        }
    });

    pipeline::run_pipeline(STAGES, Some(tx)).await;
    if let Err(e) = monitor.await {
        error!("Progress monitor task failed: {}", e);
    }

    let (summary, snapshot) = {
        let mut studio = studio.lock().await;
        let summary = studio.finish_run().map_err(|e| e.to_string())?;
        (summary, studio.snapshot())
    };
    events::emit_event(&window, DUBBING_COMPLETE, summary.clone());
    events::emit_event(&window, STUDIO_STATE, snapshot);

    info!("Dubbing run {} returned to frontend", summary.run_id);
    Ok(summary)
}

/// Clear the completed run and the URL field, keeping language selections.
#[tauri::command]
pub async fn reset_studio(
    window: tauri::Window,
    studio: State<'_, SharedStudio>,
) -> Result<StudioSnapshot, String> {
    let snapshot = {
        let mut studio = studio.lock().await;
        studio.reset().map_err(|e| e.to_string())?;
        studio.snapshot()
    };
    events::emit_event(&window, STUDIO_STATE, snapshot.clone());
    Ok(snapshot)
}

// The two post-completion actions are honest stubs: the simulation produces
// no artifact that could be downloaded or previewed.

#[tauri::command]
pub async fn download_dubbed_video() -> Result<(), String> {
    Err(AppError::NotImplemented("Download").to_string())
}

#[tauri::command]
pub async fn preview_dubbed_video() -> Result<(), String> {
    Err(AppError::NotImplemented("Preview").to_string())
}
