//! Simulated pipeline runner.
//!
//! Walks a stage table strictly in order: suspend for the stage delay, then
//! report the stage threshold over the progress channel. No stage can fail
//! and there is no cancellation; once started, a run always reaches the last
//! stage.

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::models::StageProgress;

use super::stages::Stage;

/// Drive every stage of `stages` to completion, sending one progress update
/// per stage. Progress send failures are logged and ignored so a dropped
/// receiver cannot stall the run.
pub async fn run_pipeline(stages: &[Stage], progress_sender: Option<mpsc::Sender<StageProgress>>) {
    info!("Starting simulated dubbing pipeline ({} stages)", stages.len());

    for stage in stages {
        sleep(stage.delay).await;
        debug!("Stage reached: {}% ({})", stage.threshold_percent, stage.label);

        if let Some(sender) = &progress_sender {
            let update = StageProgress {
                percent: stage.threshold_percent,
                label: stage.label.to_string(),
            };
            if let Err(e) = sender.send(update).await {
                log::error!("Failed to send stage progress: {}", e);
            }
        }
    }

    info!("Simulated dubbing pipeline finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dubbing::stages::STAGES;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_reports_every_threshold_in_order() {
        let (tx, mut rx) = mpsc::channel(16);

        let runner = tokio::spawn(async move {
            run_pipeline(STAGES, Some(tx)).await;
        });

        let mut percents = Vec::new();
        while let Some(update) = rx.recv().await {
            percents.push(update.percent);
        }
        runner.await.unwrap();

        assert_eq!(percents, vec![15, 30, 50, 70, 85, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_labels_match_stage_table() {
        let (tx, mut rx) = mpsc::channel(16);

        tokio::spawn(async move {
            run_pipeline(STAGES, Some(tx)).await;
        });

        let mut labels = Vec::new();
        while let Some(update) = rx.recv().await {
            labels.push(update.label);
        }

        assert_eq!(labels[0], "Extracting audio...");
        assert_eq!(labels.last().unwrap(), "Finalizing...");
        assert_eq!(labels.len(), STAGES.len());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pipeline_suspends_for_each_stage_delay() {
        let stages = [
            Stage {
                threshold_percent: 40,
                label: "first",
                delay: Duration::from_millis(100),
            },
            Stage {
                threshold_percent: 100,
                label: "second",
                delay: Duration::from_millis(300),
            },
        ];

        let start = tokio::time::Instant::now();
        run_pipeline(&stages, None).await;

        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }
}
