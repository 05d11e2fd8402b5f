//! The fixed stage table of the simulated dubbing pipeline.
//!
//! Each stage carries the progress percentage reached when it finishes, the
//! label shown while it runs, and the artificial delay that stands in for the
//! real work. The table is data on purpose; the runner never special-cases
//! individual stages.

use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub threshold_percent: u8,
    pub label: &'static str,
    pub delay: Duration,
}

/// Stages run strictly in this order. Thresholds are increasing and the last
/// stage always lands on 100.
pub const STAGES: &[Stage] = &[
    Stage {
        threshold_percent: 15,
        label: "Extracting audio...",
        delay: Duration::from_millis(800),
    },
    Stage {
        threshold_percent: 30,
        label: "Transcribing speech...",
        delay: Duration::from_millis(1000),
    },
    Stage {
        threshold_percent: 50,
        label: "Translating content...",
        delay: Duration::from_millis(1200),
    },
    Stage {
        threshold_percent: 70,
        label: "Generating dubbed audio...",
        delay: Duration::from_millis(1500),
    },
    Stage {
        threshold_percent: 85,
        label: "Synchronizing with video...",
        delay: Duration::from_millis(1000),
    },
    Stage {
        threshold_percent: 100,
        label: "Finalizing...",
        delay: Duration::from_millis(800),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_table_shape() {
        assert_eq!(STAGES.len(), 6);
        assert_eq!(STAGES.last().unwrap().threshold_percent, 100);

        for pair in STAGES.windows(2) {
            assert!(
                pair[0].threshold_percent < pair[1].threshold_percent,
                "thresholds must be strictly increasing"
            );
        }
    }

    #[test]
    fn test_stage_table_total_delay() {
        let total: Duration = STAGES.iter().map(|s| s.delay).sum();
        assert_eq!(total, Duration::from_millis(6300));
    }
}
