/// Terminal front end: keyboard-driven cube viewer with a fixed-rate
/// frame loop
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use cubeview_core::{project_cube, ViewParams, CUBE_EDGES};
use log::debug;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::CharCanvas;

/// Degrees added or removed per rotation key press.
const KEY_ROTATE_STEP_DEG: f64 = 5.0;

/// Scale change per key press and the slider-equivalent range.
const KEY_SCALE_STEP: f64 = 0.1;
const SCALE_MIN: f64 = 0.5;
const SCALE_MAX: f64 = 3.0;

/// Main application struct for the terminal viewer
pub struct TerminalApp {
    params: ViewParams,
    canvas: CharCanvas,
    running: bool,
    target_fps: u32,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(params: ViewParams, target_fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            params,
            canvas: CharCanvas::new(width as usize, height as usize),
            running: true,
            target_fps: target_fps.max(1),
            last_frame: Instant::now(),
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
        let target_frame_time = Duration::from_millis(1000 / self.target_fps as u64);

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.params.step_auto_rotate();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.nudge_rotation_x(KEY_ROTATE_STEP_DEG);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.nudge_rotation_x(-KEY_ROTATE_STEP_DEG);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.nudge_rotation_y(-KEY_ROTATE_STEP_DEG);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.nudge_rotation_y(KEY_ROTATE_STEP_DEG);
                }
                KeyCode::Char('e') => {
                    self.nudge_rotation_z(KEY_ROTATE_STEP_DEG);
                }
                KeyCode::Char('r') => {
                    self.nudge_rotation_z(-KEY_ROTATE_STEP_DEG);
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.nudge_scale(KEY_SCALE_STEP);
                }
                KeyCode::Char('-') => {
                    self.nudge_scale(-KEY_SCALE_STEP);
                }
                KeyCode::Char(' ') => {
                    let enabled = self.params.toggle_auto_rotate();
                    debug!("auto-rotate {}", if enabled { "on" } else { "off" });
                }
                KeyCode::Char('0') => {
                    self.params.reset();
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                self.canvas = CharCanvas::new(width as usize, height as usize);
            }
            _ => {}
        }
        Ok(())
    }

    // The key bindings emulate sliders: angles wrap into [0, 360) and
    // scale clamps to the slider range. The core itself never clamps.
    fn nudge_rotation_x(&mut self, delta: f64) {
        self.params.rotation_x = (self.params.rotation_x + delta).rem_euclid(360.0);
    }

    fn nudge_rotation_y(&mut self, delta: f64) {
        self.params.rotation_y = (self.params.rotation_y + delta).rem_euclid(360.0);
    }

    fn nudge_rotation_z(&mut self, delta: f64) {
        self.params.rotation_z = (self.params.rotation_z + delta).rem_euclid(360.0);
    }

    fn nudge_scale(&mut self, delta: f64) {
        self.params.scale = (self.params.scale + delta).clamp(SCALE_MIN, SCALE_MAX);
    }

    fn render(&mut self) -> io::Result<()> {
        // Gradient background, then the wireframe over it
        self.canvas.clear();

        let projected = project_cube(&self.params);
        let cells = projected.map(|p| self.canvas.to_cell(p.x, p.y));

        for [start, end] in CUBE_EDGES {
            self.canvas.edge(cells[start], cells[end]);
        }
        for cell in cells {
            self.canvas.vertex(cell);
        }

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Cubeview | FPS: {:.1} | {} | Scale: {:.1}x | Auto: {} | \
                 WASD/Arrows=X/Y E/R=Z +/-=Scale Space=Auto 0=Reset Q=Quit",
                self.fps,
                self.params.rotation_display(),
                self.params.scale,
                if self.params.auto_rotate { "on" } else { "off" },
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_nudges_wrap() {
        let mut app = TerminalApp {
            params: ViewParams::new(),
            canvas: CharCanvas::new(10, 10),
            running: true,
            target_fps: 30,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        };
        app.params.rotation_y = 358.0;
        app.nudge_rotation_y(KEY_ROTATE_STEP_DEG);
        assert_eq!(app.params.rotation_y, 3.0);
        app.nudge_rotation_y(-KEY_ROTATE_STEP_DEG);
        assert_eq!(app.params.rotation_y, 358.0);
    }

    #[test]
    fn test_scale_nudges_clamp_to_slider_range() {
        let mut app = TerminalApp {
            params: ViewParams::new(),
            canvas: CharCanvas::new(10, 10),
            running: true,
            target_fps: 30,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        };
        app.params.scale = 2.95;
        app.nudge_scale(KEY_SCALE_STEP);
        assert_eq!(app.params.scale, SCALE_MAX);
        app.params.scale = 0.55;
        app.nudge_scale(-KEY_SCALE_STEP);
        assert_eq!(app.params.scale, SCALE_MIN);
    }
}
