use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::{Duration, Instant};

use crate::driver::{FrameLogic, FrameOutcome, FrameScheduler, GameLoop, IntervalScheduler};
use crate::game::{Engine, Grid, GridConfig, World};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::{Renderer, SpriteStore, Surface, ALL_SPRITES};

type SessionTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Frames tick at roughly 30 FPS (33ms per frame)
const FRAME_PERIOD: Duration = Duration::from_millis(33);

/// Which screen the mode is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenState {
    Start,
    Playing,
    Summary(u32),
}

/// Interactive play: owns the world and the engine, sequences start screen,
/// timed session and summary, and drives the frame loop.
pub struct PlayMode {
    engine: Engine,
    world: World,
    stats: SessionStats,
    renderer: Renderer,
    input: InputHandler,
    sprites: SpriteStore,
    surface: Surface,
    game_loop: GameLoop,
    screen: ScreenState,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GridConfig) -> Self {
        let grid = Grid::new(config.clone());
        let mut rng = rand::thread_rng();
        let world = World::new(&grid, &mut rng);
        let surface = Surface::new(&grid);
        let stats = SessionStats::new(config.session_duration());

        Self {
            engine: Engine::new(grid),
            world,
            stats,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            sprites: SpriteStore::new(),
            surface,
            game_loop: GameLoop::new(),
            screen: ScreenState::Start,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Every sprite must be ready before the first frame runs.
        self.sprites
            .load(ALL_SPRITES)
            .context("Failed to preload sprites")?;

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run the screen loop with cleanup
        let result = self.run_screens(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_screens(&mut self, terminal: &mut SessionTerminal) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut scheduler = IntervalScheduler::new(FRAME_PERIOD);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Frame tick
                tick = scheduler.next_frame() => {
                    if let Some(now) = tick {
                        self.frame(terminal, now)?;
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        self.game_loop.stop();
        Ok(())
    }

    /// Place collectibles, reset the timers, and begin the frame cycle
    fn start_session(&mut self) {
        let mut rng = rand::thread_rng();
        self.world = World::new(self.engine.grid(), &mut rng);
        self.world.place_objects(self.engine.grid(), &mut rng);
        self.stats.on_session_start();
        self.game_loop.start(Instant::now(), self.stats.duration);
        self.screen = ScreenState::Playing;
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input.handle_key_event(key) {
                KeyAction::Step(direction) => {
                    if self.screen == ScreenState::Playing {
                        self.world.player.queue_step(direction);
                    }
                }
                KeyAction::Start => {
                    if self.screen != ScreenState::Playing {
                        self.start_session();
                    }
                }
                KeyAction::Restart => {
                    self.start_session();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn frame(&mut self, terminal: &mut SessionTerminal, now: Instant) -> Result<()> {
        self.stats.update();

        match self.screen {
            ScreenState::Start => {
                terminal
                    .draw(|frame| self.renderer.render_start(frame))
                    .context("Failed to draw start screen")?;
            }
            ScreenState::Summary(final_score) => {
                terminal
                    .draw(|frame| self.renderer.render_summary(frame, final_score, &self.stats))
                    .context("Failed to draw summary screen")?;
            }
            ScreenState::Playing => {
                let mut session = SessionFrame {
                    engine: &mut self.engine,
                    world: &mut self.world,
                    renderer: &self.renderer,
                    sprites: &self.sprites,
                    surface: &mut self.surface,
                    stats: &self.stats,
                    terminal,
                };

                match self.game_loop.run_frame(&mut session, now)? {
                    FrameOutcome::Ran => {}
                    FrameOutcome::Expired | FrameOutcome::Idle => {
                        // Publish the final score and freeze the session.
                        let final_score = self.world.player.score;
                        self.stats.on_session_over(final_score);
                        self.screen = ScreenState::Summary(final_score);
                    }
                }
            }
        }

        Ok(())
    }

    fn cleanup_terminal(&mut self, terminal: &mut SessionTerminal) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// One frame's view of the session, lent to the loop driver
struct SessionFrame<'a> {
    engine: &'a mut Engine,
    world: &'a mut World,
    renderer: &'a Renderer,
    sprites: &'a SpriteStore,
    surface: &'a mut Surface,
    stats: &'a SessionStats,
    terminal: &'a mut SessionTerminal,
}

impl FrameLogic for SessionFrame<'_> {
    fn update(&mut self, dt: f32) {
        self.engine.update(self.world, dt);
    }

    fn resolve(&mut self) {
        self.engine.resolve(self.world);
    }

    fn render(&mut self) -> Result<()> {
        let grid = self.engine.grid();
        let world = &*self.world;
        let renderer = self.renderer;
        let sprites = self.sprites;
        let stats = self.stats;
        let surface = &mut *self.surface;

        self.terminal
            .draw(|frame| renderer.render_session(frame, world, grid, sprites, surface, stats))
            .context("Failed to draw frame")?;
        Ok(())
    }
}
