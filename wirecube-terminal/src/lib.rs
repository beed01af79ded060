/// Terminal front-end for the rotating wireframe cube
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use wirecube_core::{AnimationConfig, Animator, Clock, CubeModel, SystemClock};

pub mod renderer;

pub use renderer::{LineRenderer, Viewport};

/// Settings for a terminal session
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub fps: u32,
    pub animation: AnimationConfig,
    /// Fixed RNG seed for a reproducible axis sequence
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            animation: AnimationConfig::default(),
            seed: None,
        }
    }
}

/// Main application struct: owns the animator and draws its edges each tick
pub struct TerminalApp {
    animator: Animator<StdRng>,
    clock: SystemClock,
    renderer: LineRenderer,
    frame_time: Duration,
    running: bool,
    needs_clear: bool,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: AppConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let animator =
            Animator::new(CubeModel::new(), config.animation, rng).map_err(io::Error::other)?;

        Ok(Self {
            animator,
            clock: SystemClock,
            renderer: LineRenderer::new(width as usize, height as usize),
            frame_time: Duration::from_secs(1) / config.fps.max(1),
            running: true,
            needs_clear: true,
            last_fps_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        info!(
            "starting render loop: {}x{} cells, frame time {:?}",
            self.renderer.width(),
            self.renderer.height(),
            self.frame_time
        );

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?);
            }

            self.animator
                .advance_frame(self.clock.now())
                .map_err(io::Error::other)?;

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            let now = Instant::now();
            let since_sample = now - self.last_fps_sample;
            if since_sample.as_secs() >= 1 {
                self.fps = self.frame_count as f32 / since_sample.as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = now;
            }
        }

        info!("render loop finished after {} epochs", self.animator.state().epoch());
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code, modifiers, ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                self.renderer.resize(width as usize, height as usize);
                self.needs_clear = true;
            }
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        self.renderer.render_edges(self.animator.display_edges());

        let mut stdout = stdout();
        if self.needs_clear {
            queue!(stdout, Clear(ClearType::All))?;
            self.needs_clear = false;
        }
        self.renderer.draw(&mut stdout)?;

        let state = self.animator.state();
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wirecube | FPS: {:.1} | Epoch: {} | Angle: {:.3} rad | Q/Esc=Quit",
                self.fps,
                state.epoch(),
                state.angle()
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
