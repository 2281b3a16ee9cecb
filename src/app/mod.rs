//! Application state and main event loop
//!
//! The `App` struct is the controller: it owns the countdown timer, the
//! in-memory session history, and the theme preference, binds timer ticks
//! to wall-clock time, and reacts to completions by recording and
//! persisting a session.

mod state;

pub use state::AppState;

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::config::Config;
use crate::history::{session_count_caption, HistoryStore, SessionHistory, SessionRecord};
use crate::theme::ThemePreference;
use crate::timer::{Phase, SessionTimer, TickDriver, TickOutcome};
use crate::tui::{render_main_view, Theme, Tui};

/// How long a save-failure banner stays on screen
const STATUS_TTL: Duration = Duration::from_secs(10);

/// Main application struct
pub struct App {
    /// Application configuration
    pub(crate) config: Config,
    /// Mutable UI state
    pub(crate) state: AppState,
    /// Focus countdown
    pub(crate) timer: SessionTimer,
    /// Wall-clock tick delivery for the countdown
    driver: TickDriver,
    /// Completed sessions (authoritative in-memory copy)
    pub(crate) history: SessionHistory,
    /// Persisted dark/light choice
    pub(crate) theme_pref: ThemePreference,
    /// Active palette derived from the preference
    theme: Theme,
    /// Sole writer of persisted state
    store: HistoryStore,
    /// Terminal UI
    tui: Tui,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let store = HistoryStore::new();

        // Ambient terminal preference applies only when nothing is persisted
        let (history, theme_pref) = store.load(ThemePreference::ambient());
        tracing::debug!(
            "Loaded {} completed sessions, theme: {:?}",
            history.len(),
            theme_pref
        );

        let timer = SessionTimer::new(config.focus_minutes);
        let theme = Theme::for_preference(theme_pref);
        let tui = Tui::new()?;

        Ok(Self {
            config,
            state: AppState::default(),
            timer,
            driver: TickDriver::new(),
            history,
            theme_pref,
            theme,
            store,
            tui,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        tracing::info!("FocusDots started. Press Space to start a session, 'q' to quit.");

        let result = self.event_loop();

        // Exit TUI mode (also done in Drop, but explicit is clearer)
        self.tui.exit()?;

        result
    }

    /// Main event loop
    fn event_loop(&mut self) -> Result<()> {
        let poll_rate = Duration::from_millis(100);

        // Always render on first frame
        self.state.needs_render = true;

        loop {
            // Only render when something has changed
            if self.state.needs_render {
                self.render()?;
                self.state.needs_render = false;
            }

            // Poll for events with timeout
            if event::poll(poll_rate)? {
                match event::read()? {
                    Event::Key(key) => {
                        crate::input::handle_key_event(self, key)?;
                        self.state.needs_render = true;
                    }
                    Event::Resize(_, _) => {
                        self.state.needs_render = true;
                    }
                    _ => {}
                }
            }

            // Deliver any wall-clock ticks that came due
            if self.deliver_due_ticks() {
                self.state.needs_render = true;
            }

            // Expire the status banner
            if self.state.tick_status() {
                self.state.needs_render = true;
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Feed due ticks into the countdown
    ///
    /// Returns true if the countdown advanced or completed. Ticks are
    /// serialized here: at most one per elapsed second, and a completion
    /// cancels the driver so nothing fires against the finished countdown.
    fn deliver_due_ticks(&mut self) -> bool {
        let due = self.driver.due_ticks(Instant::now());
        let mut advanced = false;

        for _ in 0..due {
            match self.timer.tick() {
                TickOutcome::Ticked => {
                    advanced = true;
                }
                TickOutcome::Completed => {
                    self.driver.cancel();
                    self.complete_session();
                    advanced = true;
                    break;
                }
                TickOutcome::Ignored => break,
            }
        }

        advanced
    }

    /// Space: start from Idle, pause from Running, resume from Paused
    pub(crate) fn toggle_timer(&mut self) {
        match self.timer.phase() {
            Phase::Idle => {
                self.timer.start();
                self.driver.arm();
                tracing::info!(
                    "Started focus session ({} minutes)",
                    self.config.focus_minutes
                );
            }
            Phase::Running => {
                // Cancel before the transition so no stale tick lands
                self.driver.cancel();
                self.timer.pause();
                tracing::debug!("Paused at {}", self.timer.format_remaining());
            }
            Phase::Paused => {
                self.timer.resume();
                self.driver.arm();
                tracing::debug!("Resumed at {}", self.timer.format_remaining());
            }
        }
    }

    /// Abandon the countdown and restore the full duration
    pub(crate) fn reset_timer(&mut self) {
        self.driver.cancel();
        self.timer.reset();
    }

    /// Record a completed session and persist the history
    fn complete_session(&mut self) {
        self.history.push(SessionRecord::now());
        self.persist();

        tracing::info!(
            "Focus session complete ({} today)",
            self.history.count_today()
        );

        if self.config.bell_on_complete {
            print!("\x07");
            let _ = std::io::stdout().flush();
        }
    }

    /// Flip the theme and persist the choice; independent of timer phase
    pub(crate) fn toggle_theme(&mut self) {
        self.theme_pref = self.theme_pref.toggled();
        self.theme = Theme::for_preference(self.theme_pref);
        self.persist();
    }

    /// Write the whole state through the store
    ///
    /// Failure is non-fatal: the in-memory state stays authoritative and
    /// the error only surfaces as a transient banner.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.history, self.theme_pref) {
            tracing::error!("Failed to persist session data: {}", e);
            self.state.set_status(e.to_string(), STATUS_TTL);
        }
    }

    /// Render the current state
    fn render(&mut self) -> Result<()> {
        let timer = &self.timer;
        let todays_count = self.history.count_today();
        let caption = session_count_caption(todays_count);
        let dots_per_row = self.config.dots_per_row;
        let theme = &self.theme;
        let status = self.state.status_text().map(str::to_string);

        self.tui.draw(|frame| {
            render_main_view(
                frame,
                frame.size(),
                timer,
                todays_count,
                &caption,
                dots_per_row,
                theme,
                status.as_deref(),
            );
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert!(!state.should_quit);
        assert!(!state.needs_render);
    }

    // The controller's tick-to-completion path, composed without a terminal:
    // the same driver/timer/history wiring App uses.
    #[test]
    fn test_completion_appends_exactly_one_record() {
        let mut timer = SessionTimer::new(1);
        let mut driver = TickDriver::new();
        let mut history = SessionHistory::new();

        timer.start();
        let start = Instant::now();
        driver.arm_at(start);

        // 60 seconds elapse in one slow pass
        let due = driver.due_ticks(start + Duration::from_secs(60));
        assert_eq!(due, 60);
        let mut completions = 0;
        for _ in 0..due {
            match timer.tick() {
                TickOutcome::Completed => {
                    driver.cancel();
                    history.push(SessionRecord::now());
                    completions += 1;
                    break;
                }
                TickOutcome::Ticked => {}
                TickOutcome::Ignored => break,
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(history.len(), 1);
        assert_eq!(timer.phase(), Phase::Idle);
        assert!(!driver.is_armed());
    }

    #[test]
    fn test_pause_cancels_before_transition() {
        let mut timer = SessionTimer::new(25);
        let mut driver = TickDriver::new();

        timer.start();
        let start = Instant::now();
        driver.arm_at(start);

        // Pause: cancel first, then transition, as toggle_timer does
        driver.cancel();
        timer.pause();

        // A tick that was due before the pause never fires
        assert_eq!(driver.due_ticks(start + Duration::from_secs(5)), 0);
        assert_eq!(timer.remaining_seconds(), 25 * 60);
    }
}
