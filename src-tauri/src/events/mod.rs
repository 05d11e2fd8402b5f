// Events module
// Contains event emitting helpers for the frontend

use log::{debug, error};
use serde::Serialize;
use serde_json::json;
use tauri::{Emitter, Window};

use crate::errors::AppError;

/// Event carrying one stage update of the running pipeline.
pub const DUBBING_PROGRESS: &str = "dubbing-progress";
/// Event carrying the result block of a finished run.
pub const DUBBING_COMPLETE: &str = "dubbing-complete";
/// Event carrying a fresh studio snapshot after a state transition.
pub const STUDIO_STATE: &str = "studio-state";

/// Emit an event to the frontend
pub fn emit_event<T: Serialize + Clone>(window: &Window, event_name: &str, payload: T) {
    match window.emit(event_name, payload) {
        Ok(_) => debug!("Emitted event: {}", event_name),
        Err(e) => error!("Failed to emit event {}: {}", event_name, e),
    }
}

pub fn emit_error(window: &Window, error: &AppError) {
    window
        .emit(
            "error",
            json!({
                "message": error.to_string(),
                "type": match error {
                    AppError::ValidationError(_) => "validation",
                    AppError::AlreadyProcessing => "busy",
                    AppError::NotImplemented(_) => "not-implemented",
                    AppError::InvalidState(_) => "state",
                }
            }),
        )
        .unwrap_or_else(|e| {
            error!("Failed to emit error event: {}", e);
        });
}
