//! Frame driver
//!
//! Runs one tick at a time and tells the host whether to schedule another.
//! The host owns the frame clock; the driver never loops on its own.

use crate::systems::{check_end, drive_opponent, MatchOutcome};
use crate::{
    advance, route_key, Config, ConfigError, Events, GameRng, KeyEdge, MatchConfig, MatchState,
    PaddleIntent, Phase, Score, Side, Snapshot, TickError,
};

/// Draws the table once per completed tick
pub trait RenderSurface {
    fn draw(&mut self, view: &Snapshot, events: &Events);
}

/// Lifecycle notifications for the host (menus, announcements)
pub trait MatchListener {
    fn on_match_start(&mut self, _config: &MatchConfig) {}

    /// The host should announce `winner` and return to the pre-match menu.
    fn on_match_end(&mut self, _winner: Side, _score: Score) {}

    fn on_halt(&mut self, _error: &TickError) {}
}

/// Listener that ignores every notification
pub struct SilentListener;

impl MatchListener for SilentListener {}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextFrame {
    Schedule,
    Stop,
}

pub struct FrameDriver {
    config: Config,
    match_config: MatchConfig,
    state: MatchState,
    rng: GameRng,
    events: Events,
    listener: Box<dyn MatchListener>,
    tick: u64,
    halted: bool,
    winner: Option<Side>,
}

impl FrameDriver {
    pub fn new(
        config: Config,
        listener: Box<dyn MatchListener>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let match_config = MatchConfig::default();
        let state = MatchState::new(&config, match_config);

        Ok(Self {
            config,
            match_config,
            state,
            rng: GameRng::new(seed),
            events: Events::new(),
            listener,
            tick: 0,
            halted: false,
            winner: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn match_config(&self) -> MatchConfig {
        self.match_config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Completed ticks in the current match
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Start a fresh match. Any match in progress is discarded.
    pub fn start(&mut self, match_config: MatchConfig) -> NextFrame {
        self.match_config = match_config;
        self.state = MatchState::new(&self.config, match_config);
        self.state.phase = Phase::Running;
        self.events.clear();
        self.tick = 0;
        self.halted = false;
        self.winner = None;

        tracing::info!(
            difficulty = ?match_config.difficulty,
            mode = ?match_config.mode,
            "match started"
        );
        self.listener.on_match_start(&match_config);
        NextFrame::Schedule
    }

    /// Set a paddle's velocity from an input intent. Ignored outside a running
    /// match and for the computer-controlled side.
    pub fn set_paddle_intent(&mut self, side: Side, intent: PaddleIntent) -> Result<(), TickError> {
        if self.state.phase != Phase::Running || self.halted {
            return Ok(());
        }
        if self.state.opponent().map(|o| o.side) == Some(side) {
            return Ok(());
        }
        self.state.apply_intent(side, intent, &self.config)
    }

    /// Route a keyboard event by key name
    pub fn handle_key(&mut self, key: &str, edge: KeyEdge) -> Result<(), TickError> {
        let computer = self.state.opponent().map(|o| o.side);
        match route_key(key, edge, computer) {
            Some((side, intent)) => self.set_paddle_intent(side, intent),
            None => Ok(()),
        }
    }

    /// Run one tick: opponent, physics, referee, then render.
    ///
    /// Returns `Stop` without touching state when no match is running. A
    /// failed tick is rolled back, halts the driver and is returned.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> Result<NextFrame, TickError> {
        if self.halted || self.state.phase != Phase::Running {
            return Ok(NextFrame::Stop);
        }

        let before = match self.state.snapshot() {
            Ok(snapshot) => snapshot,
            Err(error) => return Err(self.halt(error, None)),
        };

        let (view, outcome) = match self.run_tick() {
            Ok(result) => result,
            Err(error) => return Err(self.halt(error, Some(&before))),
        };

        self.tick += 1;
        surface.draw(&view, &self.events);

        match outcome {
            MatchOutcome::Continues => Ok(NextFrame::Schedule),
            MatchOutcome::Finished(winner) => {
                self.winner = Some(winner);
                let score = self.state.score;
                tracing::info!(%winner, %score, ticks = self.tick, "match finished");
                self.listener.on_match_end(winner, score);
                Ok(NextFrame::Stop)
            }
        }
    }

    fn run_tick(&mut self) -> Result<(Snapshot, MatchOutcome), TickError> {
        self.events.clear();

        drive_opponent(&mut self.state, &self.config, &mut self.rng)?;
        advance(&mut self.state, &self.config, &mut self.events);
        let outcome = check_end(&mut self.state, &self.config);

        let view = self.state.snapshot()?;
        view.check_finite()?;
        Ok((view, outcome))
    }

    fn halt(&mut self, error: TickError, before: Option<&Snapshot>) -> TickError {
        if let Some(snapshot) = before {
            if let Err(restore_error) = self.state.restore(snapshot) {
                tracing::error!(%restore_error, "could not roll back failed tick");
            }
        }
        self.halted = true;
        tracing::error!(tick = self.tick, %error, "tick failed, simulation halted");
        self.listener.on_halt(&error);
        error
    }

    /// Return to the pre-match state with a fresh, idle match. Calling it
    /// while already idle does nothing.
    pub fn reset(&mut self) {
        if self.state.phase == Phase::Idle {
            return;
        }

        self.state = MatchState::new(&self.config, self.match_config);
        self.events.clear();
        self.tick = 0;
        self.halted = false;
        self.winner = None;
        tracing::debug!("returned to pre-match state");
    }
}
