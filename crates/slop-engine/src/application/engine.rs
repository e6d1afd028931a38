//! The session engine: one task owns the session and processes every
//! transition.
//!
//! Player inputs arrive on one channel (acked after processing so
//! callers can observe the resulting snapshot), internal timer and
//! generation events on another. No handler awaits; anything slow runs
//! as a spawned task that posts a generation-tagged message back. A
//! phase exit bumps the owning generation, so a timer belonging to an
//! abandoned phase can never fire into the wrong state.

use std::sync::Arc;

use slop_content::{ContentRegistry, Difficulty, Modifier, Scene, Speaker, ThesisSceneContent};
use slop_core::clock::Clock;
use slop_core::error::DomainError;
use slop_core::rng::DeterministicRng;
use slop_core::unlock::UnlockStore;
use slop_generation::{TextGenerator, fallback};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::Instant;

use crate::application::deadline::{ArmEffect, DeadlineTimer};
use crate::application::input::{InternalEvent, PlayerInput};
use crate::application::interruption::AdGate;
use crate::application::sequencer::{self, Sequencer};
use crate::application::snapshot::{
    AdView, BreathView, SceneView, SessionSnapshot, TaskView, TherapyView, ThesisListing,
};
use crate::config::EngineConfig;
use crate::domain::economy;
use crate::domain::session::{GameState, Session};

/// The engine task has shut down (every handle was dropped).
#[derive(Debug, Error)]
#[error("session engine is no longer running")]
pub struct EngineStopped;

#[derive(Debug)]
struct PlayerEnvelope {
    input: PlayerInput,
    ack: Option<oneshot::Sender<()>>,
}

/// Cloneable handle to a running engine.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<PlayerEnvelope>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl EngineHandle {
    /// Submits a player input and waits until the engine has processed
    /// it, so the next [`EngineHandle::snapshot`] reflects the result.
    /// Guard-violating inputs are silently ignored, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`EngineStopped`] if the engine task has shut down.
    pub async fn apply(&self, input: PlayerInput) -> Result<(), EngineStopped> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(PlayerEnvelope {
                input,
                ack: Some(ack_tx),
            })
            .await
            .map_err(|_| EngineStopped)?;
        ack_rx.await.map_err(|_| EngineStopped)
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// A receiver that yields a change notification for every processed
    /// message.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }
}

enum Next {
    Player(Option<PlayerEnvelope>),
    Internal(InternalEvent),
}

/// The engine. Constructed and consumed by [`SessionEngine::spawn`].
pub struct SessionEngine {
    registry: Arc<ContentRegistry>,
    generator: Arc<dyn TextGenerator>,
    unlock: Arc<dyn UnlockStore>,
    clock: Arc<dyn Clock>,
    rng: Box<dyn DeterministicRng>,
    config: EngineConfig,
    session: Session,
    sequencer: Sequencer,
    deadline: DeadlineTimer,
    ad: AdGate,
    title_generation: u64,
    task_generation: u64,
    player_rx: mpsc::Receiver<PlayerEnvelope>,
    internal_tx: mpsc::Sender<InternalEvent>,
    internal_rx: mpsc::Receiver<InternalEvent>,
}

impl SessionEngine {
    /// Reads the persisted win flag, starts the engine task, and begins
    /// the prologue.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the unlock store cannot be read.
    pub async fn spawn(
        registry: Arc<ContentRegistry>,
        generator: Arc<dyn TextGenerator>,
        unlock: Arc<dyn UnlockStore>,
        clock: Arc<dyn Clock>,
        rng: Box<dyn DeterministicRng>,
        config: EngineConfig,
    ) -> Result<EngineHandle, DomainError> {
        let has_won = unlock.has_won_before().await?;
        let (player_tx, player_rx) = mpsc::channel(64);
        let (internal_tx, internal_rx) = mpsc::channel(64);
        let session = Session::new(config.initial_sanity, has_won);
        let breath_interval = config.breath_interval;
        let mut engine = Self {
            registry,
            generator,
            unlock,
            clock,
            rng,
            config,
            session,
            sequencer: Sequencer::default(),
            deadline: DeadlineTimer::new(breath_interval),
            ad: AdGate::default(),
            title_generation: 0,
            task_generation: 0,
            player_rx,
            internal_tx,
            internal_rx,
        };
        engine.begin_intro();
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.build_snapshot());
        tokio::spawn(engine.run(snapshot_tx));
        Ok(EngineHandle {
            tx: player_tx,
            snapshot_rx,
        })
    }

    async fn run(mut self, snapshot_tx: watch::Sender<SessionSnapshot>) {
        loop {
            let next = tokio::select! {
                envelope = self.player_rx.recv() => Next::Player(envelope),
                Some(event) = self.internal_rx.recv() => Next::Internal(event),
            };
            let ack = match next {
                Next::Player(None) => break,
                Next::Player(Some(PlayerEnvelope { input, ack })) => {
                    self.handle_player(input);
                    ack
                }
                Next::Internal(event) => {
                    self.handle_internal(event);
                    None
                }
            };
            self.reconcile_deadline();
            snapshot_tx.send_replace(self.build_snapshot());
            if let Some(ack) = ack {
                let _ = ack.send(());
            }
        }
        self.sequencer.cancel();
    }

    // ---- player inputs -------------------------------------------------

    fn handle_player(&mut self, input: PlayerInput) {
        tracing::debug!(?input, state = ?self.session.state, "player input");
        match input {
            PlayerInput::Advance => self.handle_advance(),
            PlayerInput::SelectThesis(id) => self.handle_select_thesis(&id),
            PlayerInput::ApplyModifier(id) => self.handle_apply_modifier(&id),
            PlayerInput::ResetText => self.handle_reset_text(),
            PlayerInput::Submit => self.handle_submit(),
            PlayerInput::Breathe => self.handle_breathe(),
            PlayerInput::SkipAdFree => self.handle_skip_ad_free(),
            PlayerInput::SkipAdPaid => self.handle_skip_ad_paid(),
            PlayerInput::CompleteTherapy { choice } => self.handle_complete_therapy(choice),
            PlayerInput::Restart => self.handle_restart(),
        }
    }

    fn handle_advance(&mut self) {
        match self.session.state {
            GameState::Intro => {
                if self.session.narrating {
                    self.sequencer.cancel();
                    self.session.narrating = false;
                    self.log(Speaker::System, "...SEQUENCE SKIPPED...");
                }
                self.session.state = GameState::ThesisSelection;
                self.log(Speaker::System, "INITIATING ACADEMIC PROTOCOLS...");
            }
            GameState::SceneIntro => {
                // The reveal batch need not have settled; moving on
                // cancels whatever remains.
                self.sequencer.cancel();
                self.session.narrating = false;
                self.session.stats.reset_slop();
                self.session.pending_submit_score = None;
                self.session.task_text = self.thesis_scene_content().base_text.clone();
                self.session.state = GameState::SceneTask;
            }
            GameState::SceneResult => {
                if self.session.scene_index == 1 {
                    self.session.state = GameState::TherapySession;
                    self.log(Speaker::System, "MANDATORY WELLNESS BREAK INITIATED...");
                } else {
                    self.load_next_level(self.config.scene_heal);
                }
            }
            _ => {}
        }
    }

    fn handle_select_thesis(&mut self, id: &str) {
        if self.session.state != GameState::ThesisSelection || self.session.thesis.is_some() {
            return;
        }
        let thesis = match self.registry.thesis(id) {
            Ok(thesis) => thesis.clone(),
            Err(error) => {
                tracing::debug!(%error, "thesis selection rejected");
                return;
            }
        };
        if thesis.requires_prior_victory && !self.session.has_won_before {
            return;
        }
        self.session.thesis = Some(thesis);
        self.session.state = GameState::TitleDrop;
        self.spawn_title_timer();
    }

    fn handle_apply_modifier(&mut self, id: &str) {
        if self.session.state != GameState::SceneTask
            || self.session.processing
            || self.ad.is_visible()
        {
            return;
        }
        let modifier = match self.registry.modifier(id) {
            Ok(modifier) => modifier.clone(),
            Err(error) => {
                tracing::debug!(%error, "modifier rejected");
                return;
            }
        };
        if self.rng.next_f64() < self.config.ad_trigger_chance {
            self.open_interruption();
        }
        let cost = economy::effective_sanity_cost(modifier.sanity_cost, self.session.sanity_penalty());
        self.session.stats.spend_sanity(cost);
        self.session.stats.gain_slop(modifier.slop_impact);
        self.session.processing = true;
        self.spawn_degrade(modifier);
    }

    fn handle_reset_text(&mut self) {
        if self.session.state != GameState::SceneTask
            || self.session.processing
            || self.ad.is_visible()
        {
            return;
        }
        // Spent sanity and accumulated slop stay spent.
        self.session.task_text = self.thesis_scene_content().base_text.clone();
    }

    fn handle_submit(&mut self) {
        if self.session.state != GameState::SceneTask
            || self.session.processing
            || self.ad.is_visible()
        {
            return;
        }
        let preview: String = self.session.task_text.chars().take(30).collect();
        self.log(Speaker::Player, format!("> SUBMITTED: \"{preview}...\""));
        // The vibe check uses the score as of submission, not whatever a
        // later mutation might produce.
        let captured = self.session.stats.slop_integrity;
        self.session.pending_submit_score = Some(captured);
        self.session.processing = true;
        self.spawn_react(captured);
    }

    fn handle_breathe(&mut self) {
        if self.ad.is_visible() || self.session.processing {
            return;
        }
        if !self.session.breathing_required(self.config.critical_sanity) {
            return;
        }
        if let Some(effect) = self.deadline.reset(Instant::now()) {
            self.spawn_deadline_task(effect);
        }
    }

    fn handle_skip_ad_free(&mut self) {
        if !self.ad.is_visible() || self.session.state.is_terminal() {
            return;
        }
        if !self.ad.free_skip_ready(Instant::now()) {
            return;
        }
        self.close_interruption();
    }

    fn handle_skip_ad_paid(&mut self) {
        if !self.ad.is_visible() || self.session.state.is_terminal() {
            return;
        }
        if !self.session.stats.spend_credit(self.config.ad_skip_cost) {
            return;
        }
        self.log(
            Speaker::System,
            "PREMIUM AD SKIP ACTIVATED. SOCIAL CREDIT DEDUCTED.",
        );
        self.close_interruption();
    }

    fn handle_complete_therapy(&mut self, choice: usize) {
        if self.session.state != GameState::TherapySession {
            return;
        }
        let Some(response) = self
            .registry
            .therapy()
            .choices
            .get(choice)
            .map(|c| c.response.clone())
        else {
            return;
        };
        self.log(Speaker::World, response);
        self.load_next_level(self.config.therapy_heal);
    }

    fn handle_restart(&mut self) {
        if !self.session.state.is_terminal() {
            return;
        }
        self.halt_phase_timers();
        let has_won = self.session.has_won_before;
        self.session = Session::new(self.config.initial_sanity, has_won);
        self.begin_intro();
    }

    // ---- internal events ----------------------------------------------

    fn handle_internal(&mut self, event: InternalEvent) {
        match event {
            InternalEvent::Reveal {
                generation,
                speaker,
                text,
                last,
            } => {
                if generation != self.sequencer.generation() {
                    return;
                }
                self.log(speaker, text);
                if last {
                    self.session.narrating = false;
                }
            }
            InternalEvent::TitleDropElapsed { generation } => {
                self.handle_title_drop_elapsed(generation);
            }
            InternalEvent::DeadlineExpired { generation } => {
                self.handle_deadline_expired(generation);
            }
            InternalEvent::AdSkipUnlocked { generation } => {
                // Nothing to mutate; the snapshot rebuild publishes the
                // now-unlocked free skip.
                if generation != self.ad.generation() {
                    tracing::debug!("stale ad unlock notification dropped");
                }
            }
            InternalEvent::TextDegraded { generation, text } => {
                if generation != self.task_generation
                    || !self.session.processing
                    || self.session.state != GameState::SceneTask
                {
                    return;
                }
                self.session.task_text = text;
                self.session.processing = false;
            }
            InternalEvent::ReactionReady { generation, text } => {
                self.handle_reaction_ready(generation, text);
            }
        }
    }

    fn handle_title_drop_elapsed(&mut self, generation: u64) {
        if generation != self.title_generation || self.session.state != GameState::TitleDrop {
            return;
        }
        self.session.state = GameState::SceneIntro;
        let (label, difficulty) = {
            let thesis = self
                .session
                .thesis
                .as_ref()
                .expect("thesis is bound before the title drop");
            (thesis.label.clone(), thesis.difficulty)
        };
        self.log(
            Speaker::Player,
            format!("> THESIS SELECTED: {}", label.to_uppercase()),
        );
        self.log(
            Speaker::System,
            "THESIS ACCEPTED. GENERATING SIMULATION PARAMETERS...",
        );
        match difficulty {
            Difficulty::Hard => self.log(
                Speaker::System,
                "WARNING: HARD MODE ACTIVE. INCREASED SANITY DRAIN.",
            ),
            Difficulty::Easy => {
                self.log(Speaker::System, "EASY MODE ACTIVE. CLOUT MULTIPLIER x2.");
            }
            Difficulty::Normal => {}
        }
        let title = self.current_scene().title.to_uppercase();
        self.log(Speaker::System, format!("LOADING SCENE: {title}"));
        self.schedule_scene_batch();
    }

    fn handle_deadline_expired(&mut self, generation: u64) {
        let now = Instant::now();
        if !self.deadline.acknowledge_expiry(generation, now) {
            return;
        }
        if !self.session.breathing_required(self.config.critical_sanity) || self.ad.is_visible() {
            return;
        }
        self.session.state = GameState::GameOverSanity;
        self.log(
            Speaker::System,
            "CRITICAL FAILURE: User forgot to breathe manually.",
        );
        self.halt_phase_timers();
    }

    fn handle_reaction_ready(&mut self, generation: u64, text: String) {
        if generation != self.task_generation
            || !self.session.processing
            || self.session.state != GameState::SceneTask
        {
            return;
        }
        self.log(Speaker::World, text);
        self.session.processing = false;
        let Some(score) = self.session.pending_submit_score.take() else {
            return;
        };
        let required = self.current_scene().required_slop_score;
        if economy::vibe_check(score, required) {
            self.log(Speaker::System, "VIBE CHECK PASSED.");
            let gain = economy::credit_gain(self.config.base_credit, self.session.clout_multiplier());
            self.session.stats.grant_credit(gain);
            self.session.state = GameState::SceneResult;
        } else {
            self.log(Speaker::System, "VIBE CHECK FAILED. AUTHENTICITY TOO LOW.");
            self.session.state = GameState::GameOverCaught;
            self.halt_phase_timers();
        }
    }

    // ---- phase orchestration -------------------------------------------

    fn begin_intro(&mut self) {
        let batch = sequencer::prologue_batch(self.registry.prologue());
        self.session.narrating = self.sequencer.schedule(self.internal_tx.clone(), batch);
    }

    fn schedule_scene_batch(&mut self) {
        let batch = sequencer::scene_batch(self.current_scene(), &self.config);
        self.session.narrating = self.sequencer.schedule(self.internal_tx.clone(), batch);
    }

    fn load_next_level(&mut self, heal: i32) {
        if self.session.scene_index + 1 < self.registry.scene_count() {
            self.session.stats.heal(heal);
            self.log(
                Speaker::System,
                format!("RECOVERING COGNITIVE FUNCTION... +{heal} SANITY"),
            );
            self.session.scene_index += 1;
            self.session.state = GameState::SceneIntro;
            let title = self.current_scene().title.to_uppercase();
            self.log(Speaker::System, format!("LOADING SCENE: {title}"));
            self.schedule_scene_batch();
        } else {
            self.session.state = GameState::Victory;
            self.session.has_won_before = true;
            let unlock = Arc::clone(&self.unlock);
            tokio::spawn(async move {
                if let Err(error) = unlock.record_victory().await {
                    tracing::warn!(%error, "failed to persist the victory flag");
                }
            });
            self.log(
                Speaker::Daemon,
                "Simulation complete. You have survived the Slop.",
            );
            self.log(Speaker::System, "Integrity Verified. Welcome to the New World.");
            self.halt_phase_timers();
        }
    }

    /// An open interruption freezes the countdown; the close path
    /// resumes it. This coupling is the controller's contract, not UI
    /// wiring.
    fn open_interruption(&mut self) {
        let max = u32::try_from(self.registry.ad_spots().len().saturating_sub(1)).unwrap_or(0);
        let index = usize::try_from(self.rng.next_u32_range(0, max)).unwrap_or(0);
        let Some(spot) = self.registry.ad_spots().get(index).cloned() else {
            return;
        };
        let now = Instant::now();
        let generation = self
            .ad
            .open(spot, now, self.config.ad_free_skip_delay);
        self.deadline.suspend(now);
        let tx = self.internal_tx.clone();
        let delay = self.config.ad_free_skip_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(InternalEvent::AdSkipUnlocked { generation }).await;
        });
    }

    fn close_interruption(&mut self) {
        self.ad.close();
        let now = Instant::now();
        if self.session.breathing_required(self.config.critical_sanity) {
            // Continue from the frozen remainder, never a fresh interval.
            if let Some(effect) = self.deadline.resume(now) {
                self.spawn_deadline_task(effect);
            }
        } else {
            self.deadline.disarm();
        }
    }

    /// Cancels every timer and in-flight call owned by the current
    /// phase. Called on every terminal transition and on restart.
    fn halt_phase_timers(&mut self) {
        self.sequencer.cancel();
        self.session.narrating = false;
        self.deadline.disarm();
        self.ad.close();
        self.title_generation += 1;
        self.task_generation += 1;
        self.session.processing = false;
        self.session.pending_submit_score = None;
    }

    /// Arms the deadline when its guard starts holding, disarms it when
    /// it stops. Idempotent; runs after every processed message.
    fn reconcile_deadline(&mut self) {
        if self.session.breathing_required(self.config.critical_sanity) {
            if !self.ad.is_visible() && self.deadline.is_disarmed() {
                if let Some(effect) = self.deadline.arm(Instant::now()) {
                    self.spawn_deadline_task(effect);
                }
            }
        } else if !self.ad.is_visible() {
            self.deadline.disarm();
        }
    }

    // ---- spawned effects ----------------------------------------------

    fn spawn_deadline_task(&self, effect: ArmEffect) {
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(effect.deadline).await;
            let _ = tx
                .send(InternalEvent::DeadlineExpired {
                    generation: effect.generation,
                })
                .await;
        });
    }

    fn spawn_title_timer(&mut self) {
        self.title_generation += 1;
        let generation = self.title_generation;
        let duration = self.config.title_drop_duration;
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx
                .send(InternalEvent::TitleDropElapsed { generation })
                .await;
        });
    }

    fn spawn_degrade(&mut self, modifier: Modifier) {
        self.task_generation += 1;
        let generation = self.task_generation;
        let generator = Arc::clone(&self.generator);
        let text = self.session.task_text.clone();
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            let degraded = match generator.degrade(&text, &modifier).await {
                Ok(out) => out,
                Err(error) => {
                    tracing::debug!(%error, "degrade call failed, using local fallback");
                    fallback::degraded(&text, modifier.category)
                }
            };
            let _ = tx
                .send(InternalEvent::TextDegraded {
                    generation,
                    text: degraded,
                })
                .await;
        });
    }

    fn spawn_react(&mut self, score: u8) {
        self.task_generation += 1;
        let generation = self.task_generation;
        let generator = Arc::clone(&self.generator);
        let text = self.session.task_text.clone();
        let opponent = self.current_scene().opponent_name.clone();
        let tx = self.internal_tx.clone();
        tokio::spawn(async move {
            let reaction = match generator.react(&text, &opponent, score).await {
                Ok(out) => out,
                Err(error) => {
                    tracing::debug!(%error, "react call failed, using local fallback");
                    fallback::reaction(&opponent, score)
                }
            };
            let _ = tx
                .send(InternalEvent::ReactionReady {
                    generation,
                    text: reaction,
                })
                .await;
        });
    }

    // ---- views ---------------------------------------------------------

    fn log(&mut self, speaker: Speaker, text: impl Into<String>) {
        let at = self.clock.now();
        self.session.push_log(speaker, text, at);
    }

    fn current_scene(&self) -> &Scene {
        self.registry
            .scene(self.session.scene_index)
            .expect("scene index stays within the campaign")
    }

    fn thesis_scene_content(&self) -> &ThesisSceneContent {
        let scene_id = &self.current_scene().id;
        self.session
            .thesis
            .as_ref()
            .and_then(|thesis| thesis.scenes.get(scene_id))
            .expect("a validated thesis covers every scene")
    }

    fn build_snapshot(&self) -> SessionSnapshot {
        let now = Instant::now();
        let scene = self.current_scene();
        let scene_view = SceneView {
            id: scene.id.clone(),
            title: scene.title.clone(),
            opponent_name: scene.opponent_name.clone(),
            opponent_title: scene.opponent_title.clone(),
            required_slop_score: scene.required_slop_score,
        };
        let task = (self.session.state == GameState::SceneTask).then(|| TaskView {
            prompt: self.thesis_scene_content().task_prompt.clone(),
            text: self.session.task_text.clone(),
        });
        let breath = self
            .session
            .breathing_required(self.config.critical_sanity)
            .then(|| BreathView {
                remaining_ms: u64::try_from(self.deadline.remaining(now).as_millis())
                    .unwrap_or(u64::MAX),
            });
        let ad = self.ad.active().map(|active| AdView {
            title: active.spot.title.clone(),
            body: active.spot.body.clone(),
            free_skip_ready: now >= active.free_skip_at,
            skip_cost: self.config.ad_skip_cost,
        });
        let therapy = (self.session.state == GameState::TherapySession).then(|| {
            let script = self.registry.therapy();
            TherapyView {
                greeting: script.greeting.clone(),
                prompt: script.prompt.clone(),
                choices: script.choices.iter().map(|c| c.label.clone()).collect(),
            }
        });
        let thesis_options = self
            .registry
            .theses()
            .iter()
            .map(|thesis| ThesisListing {
                id: thesis.id.clone(),
                label: thesis.label.clone(),
                description: thesis.description.clone(),
                difficulty: thesis.difficulty,
                locked: thesis.requires_prior_victory && !self.session.has_won_before,
            })
            .collect();
        SessionSnapshot {
            run_id: self.session.run_id,
            state: self.session.state,
            scene_index: self.session.scene_index,
            scene: scene_view,
            thesis_id: self.session.thesis.as_ref().map(|t| t.id.clone()),
            stats: self.session.stats,
            logs: self.session.logs.clone(),
            narrating: self.session.narrating,
            processing: self.session.processing,
            task,
            breath,
            ad,
            therapy,
            thesis_options,
        }
    }
}
