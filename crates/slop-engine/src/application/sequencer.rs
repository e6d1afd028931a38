//! The narrative sequencer.
//!
//! Delivers an ordered batch of timed reveals to the engine without
//! blocking it. One batch at a time: scheduling cancels the previous
//! batch (abort + generation bump), so batches never interleave and a
//! cancelled batch's in-flight messages are discarded on receipt.

use std::time::Duration;

use slop_content::{Scene, ScriptLine, Speaker};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::application::input::InternalEvent;
use crate::config::EngineConfig;

/// One entry of a reveal batch, delivered `offset` after the batch
/// starts. Offsets must be non-decreasing in batch order.
#[derive(Debug, Clone)]
pub(crate) struct TimedReveal {
    pub offset: Duration,
    pub speaker: Speaker,
    pub text: String,
}

/// Builds a scene's opening batch: the narrative line at the configured
/// lead, then each dialogue line at the dialogue start plus spacing.
pub(crate) fn scene_batch(scene: &Scene, config: &EngineConfig) -> Vec<TimedReveal> {
    let mut batch = vec![TimedReveal {
        offset: config.narrative_lead,
        speaker: Speaker::World,
        text: scene.narrative.clone(),
    }];
    for (i, log) in scene.opening_logs.iter().enumerate() {
        batch.push(TimedReveal {
            offset: config.dialogue_start + config.dialogue_spacing * u32::try_from(i).unwrap_or(0),
            speaker: log.speaker,
            text: log.text.clone(),
        });
    }
    batch
}

/// Builds the prologue batch from the script's absolute delays.
pub(crate) fn prologue_batch(lines: &[ScriptLine]) -> Vec<TimedReveal> {
    lines
        .iter()
        .map(|line| TimedReveal {
            offset: Duration::from_millis(line.delay_ms),
            speaker: line.speaker,
            text: line.text.clone(),
        })
        .collect()
}

/// Owns the current batch's delivery task and generation.
#[derive(Debug, Default)]
pub(crate) struct Sequencer {
    generation: u64,
    abort: Option<AbortHandle>,
}

impl Sequencer {
    /// Cancels any prior batch and schedules a new one. Returns whether
    /// a batch is now playing (an empty batch settles immediately).
    pub fn schedule(&mut self, tx: mpsc::Sender<InternalEvent>, batch: Vec<TimedReveal>) -> bool {
        self.cancel();
        if batch.is_empty() {
            return false;
        }
        let generation = self.generation;
        let handle = tokio::spawn(async move {
            let total = batch.len();
            let mut elapsed = Duration::ZERO;
            for (i, entry) in batch.into_iter().enumerate() {
                tokio::time::sleep(entry.offset.saturating_sub(elapsed)).await;
                elapsed = elapsed.max(entry.offset);
                let event = InternalEvent::Reveal {
                    generation,
                    speaker: entry.speaker,
                    text: entry.text,
                    last: i + 1 == total,
                };
                if tx.send(event).await.is_err() {
                    return;
                }
            }
        });
        self.abort = Some(handle.abort_handle());
        true
    }

    /// Invalidates all pending deliveries of the current batch. Already
    /// delivered entries are unaffected. Safe to call when nothing is
    /// scheduled.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.abort.take() {
            handle.abort();
        }
    }

    /// The generation a [`InternalEvent::Reveal`] must carry to be
    /// accepted.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use slop_content::ContentRegistry;

    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    async fn drain_batch(rx: &mut mpsc::Receiver<InternalEvent>, n: usize) -> Vec<(String, bool)> {
        let mut out = Vec::new();
        for _ in 0..n {
            match rx.recv().await {
                Some(InternalEvent::Reveal { text, last, .. }) => out.push((text, last)),
                other => panic!("expected Reveal, got {other:?}"),
            }
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn test_scene_batch_uses_documented_offsets() {
        let registry = ContentRegistry::builtin();
        let config = EngineConfig::default();

        let batch = scene_batch(registry.scene(0).unwrap(), &config);

        let offsets: Vec<Duration> = batch.iter().map(|r| r.offset).collect();
        assert_eq!(
            offsets,
            vec![ms(500), ms(2000), ms(3500), ms(5000), ms(6500)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_delivers_in_order_and_marks_last() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut sequencer = Sequencer::default();
        let batch = vec![
            TimedReveal {
                offset: ms(500),
                speaker: Speaker::World,
                text: "one".to_owned(),
            },
            TimedReveal {
                offset: ms(2000),
                speaker: Speaker::World,
                text: "two".to_owned(),
            },
        ];

        assert!(sequencer.schedule(tx, batch));
        let delivered = drain_batch(&mut rx, 2).await;

        assert_eq!(
            delivered,
            vec![("one".to_owned(), false), ("two".to_owned(), true)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_cancels_the_prior_batch() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut sequencer = Sequencer::default();
        let slow = vec![TimedReveal {
            offset: ms(10000),
            speaker: Speaker::World,
            text: "stale".to_owned(),
        }];
        let fresh = vec![TimedReveal {
            offset: ms(100),
            speaker: Speaker::World,
            text: "fresh".to_owned(),
        }];

        sequencer.schedule(tx.clone(), slow);
        let stale_generation = sequencer.generation();
        sequencer.schedule(tx, fresh);

        assert_ne!(sequencer.generation(), stale_generation);
        let delivered = drain_batch(&mut rx, 1).await;
        assert_eq!(delivered, vec![("fresh".to_owned(), true)]);
        // The slow batch's task was aborted; nothing else arrives.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_batch_settles_immediately() {
        let (tx, _rx) = mpsc::channel(16);
        let mut sequencer = Sequencer::default();

        assert!(!sequencer.schedule(tx, Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_is_safe_with_nothing_scheduled() {
        let mut sequencer = Sequencer::default();
        sequencer.cancel();
        sequencer.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_prologue_batch_preserves_script_delays() {
        let registry = ContentRegistry::builtin();

        let batch = prologue_batch(registry.prologue());

        assert_eq!(batch.len(), registry.prologue().len());
        assert_eq!(batch[0].offset, ms(0));
        assert_eq!(batch.last().unwrap().offset, ms(21000));
    }
}
