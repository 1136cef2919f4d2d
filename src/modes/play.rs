use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::game::{Direction, GameConfig, GameEngine, GameState};
use crate::input::{map_key, InputCommand};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// The interactive play loop: one tick-driven game at a time, restartable
/// until the player quits.
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    should_quit: bool,
    /// Steering collected since the last tick; each key overwrites the
    /// previous one, so the most recent press wins
    pending_steer: Option<Direction>,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config)?;
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            should_quit: false,
            pending_steer: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // The TUI draws on stderr, leaving stdout free for log output
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            width = self.engine.config().board_width,
            height = self.engine.config().board_height,
            "game started"
        );

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        let tick_interval = Duration::from_millis(self.engine.config().tick_interval_ms);
        let mut ticker = interval(tick_interval);

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = ticker.tick() => {
                    self.advance_tick();
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            // One snapshot per tick, plus an immediate redraw after input
            self.stats.update();
            let snapshot = self.state.snapshot();
            terminal
                .draw(|frame| self.renderer.render(frame, &snapshot, &self.stats))
                .context("Failed to draw frame")?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Key press only, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match map_key(key) {
                Some(InputCommand::Steer(direction)) => {
                    self.pending_steer = Some(direction);
                }
                Some(InputCommand::Restart) => {
                    self.reset_game();
                }
                Some(InputCommand::Quit) => {
                    self.should_quit = true;
                }
                None => {}
            }
        }
    }

    fn advance_tick(&mut self) {
        if self.state.game_over {
            return;
        }

        let steer = self.pending_steer.take();
        let result = self.engine.tick(&mut self.state, steer);

        if result.game_over {
            self.stats.record_game_over(self.state.score);
            info!(score = self.state.score, "game over");
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.stats.record_start();
        self.pending_steer = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
