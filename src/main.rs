use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use arboard::Clipboard;
use log::{error, info, warn};
use macroquad::prelude::*;
use mazerunner::action_log::ActionLog;
use mazerunner::config::Config;
use mazerunner::generator::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use mazerunner::scoring::PathComparison;
use mazerunner::{CellState, InputKind, InputState, MoveOutcome, Position, Session};

const OPEN_COLOR: Color = WHITE;
const GRID_LINE_COLOR: Color = BLACK;
const OBSTACLE_COLOR: Color = Color::new(0.55, 0.4, 0.25, 1.0);
const AGENT_COLOR: Color = Color::new(0.85, 0.1, 0.1, 1.0);
const END_COLOR: Color = Color::new(0.5, 0.2, 0.7, 1.0);
const REFERENCE_PATH_COLOR: Color = Color::new(0.0, 0.0, 1.0, 0.4);
const AGENT_PATH_COLOR: Color = Color::new(0.0, 1.0, 0.0, 0.4);

/// Keys mapped to engine inputs
const KEY_BINDINGS: [(KeyCode, InputKind); 5] = [
    (KeyCode::Space, InputKind::ArmJump),
    (KeyCode::Up, InputKind::MoveUp),
    (KeyCode::Down, InputKind::MoveDown),
    (KeyCode::Left, InputKind::MoveLeft),
    (KeyCode::Right, InputKind::MoveRight),
];

const DIFFICULTY_KEYS: [(KeyCode, u32); 7] = [
    (KeyCode::Key1, 1),
    (KeyCode::Key2, 2),
    (KeyCode::Key3, 3),
    (KeyCode::Key4, 4),
    (KeyCode::Key5, 5),
    (KeyCode::Key6, 6),
    (KeyCode::Key7, 7),
];

/// Game in progress plus its presentation state
struct PlayState {
    session: Session,
    action_log: ActionLog,
    cell_size: f32,
    comparison: Option<PathComparison>,
}

enum Screen {
    Menu {
        difficulty: u32,
        message: Option<String>,
    },
    Playing(PlayState),
}

struct App {
    config: Config,
    rng: StdRng,
    screen: Screen,
}

impl App {
    fn new(config: Config) -> Self {
        let rng = match config.maze.seed {
            Some(seed) => {
                info!("Using fixed maze seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let difficulty = config.maze.difficulty;
        App {
            config,
            rng,
            screen: Screen::Menu {
                difficulty,
                message: None,
            },
        }
    }

    fn background(&self) -> Color {
        Color::from_rgba(
            self.config.visual.background_r,
            self.config.visual.background_g,
            self.config.visual.background_b,
            255,
        )
    }

    fn start_game(&mut self, difficulty: u32) {
        let max_attempts = self.config.maze.max_generation_attempts;
        match Session::with_max_attempts(difficulty, max_attempts, &mut self.rng) {
            Ok(session) => {
                let grid = session.grid();
                let cell_size = self.config.cell_size(grid.width(), grid.height());
                request_new_screen_size(
                    grid.width() as f32 * cell_size,
                    grid.height() as f32 * cell_size,
                );
                self.screen = Screen::Playing(PlayState {
                    session,
                    action_log: ActionLog::new(),
                    cell_size,
                    comparison: None,
                });
            }
            Err(e) => {
                error!("Failed to start difficulty {}: {}", difficulty, e);
                self.screen = Screen::Menu {
                    difficulty,
                    message: Some(e.to_string()),
                };
            }
        }
    }

    fn update(&mut self) {
        match &mut self.screen {
            Screen::Menu { difficulty, .. } => {
                for (key, level) in DIFFICULTY_KEYS {
                    if is_key_pressed(key) {
                        *difficulty = level;
                    }
                }
                if is_key_pressed(KeyCode::Up) {
                    *difficulty = (*difficulty + 1).min(MAX_DIFFICULTY);
                }
                if is_key_pressed(KeyCode::Down) {
                    *difficulty = difficulty.saturating_sub(1).max(MIN_DIFFICULTY);
                }
                if is_key_pressed(KeyCode::Enter) {
                    let level = *difficulty;
                    self.start_game(level);
                }
            }
            Screen::Playing(play) => {
                if play.session.is_completed() {
                    if is_key_pressed(KeyCode::Enter) {
                        let difficulty = play.session.difficulty().unwrap_or(MIN_DIFFICULTY);
                        self.screen = Screen::Menu {
                            difficulty,
                            message: None,
                        };
                    }
                    return;
                }

                for (key, input) in KEY_BINDINGS {
                    if !is_key_pressed(key) {
                        continue;
                    }
                    let outcome = play.session.apply_input(input);
                    play.action_log
                        .log(input, outcome, play.session.agent_position());
                    if outcome == MoveOutcome::ReachedGoal {
                        finish_game(play, &self.config);
                        break;
                    }
                }

                if is_key_pressed(KeyCode::C) {
                    copy_to_clipboard(&play.session.render_text());
                }
            }
        }
    }

    fn draw(&self) {
        clear_background(self.background());
        match &self.screen {
            Screen::Menu {
                difficulty,
                message,
            } => draw_menu(*difficulty, message.as_deref()),
            Screen::Playing(play) => draw_play(play, self.config.visual.show_path_comparison),
        }
    }
}

fn finish_game(play: &mut PlayState, config: &Config) {
    play.comparison = Some(play.session.path_comparison());
    if let Some(report) = play.session.score_report() {
        info!("Congratulations! You completed the maze! {}", report.message());
    }
    info!("{}", play.action_log.summary());

    if config.logging.enable_action_log {
        match play.action_log.save_to_file(&config.logging.action_log_path) {
            Ok(()) => info!("Action log saved to {}", config.logging.action_log_path),
            Err(e) => warn!("Failed to save action log: {}", e),
        }
    }
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                warn!("Failed to copy to clipboard: {}", e);
            } else {
                info!("Maze layout copied to clipboard");
                // Keep clipboard alive for a moment so clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => warn!("Failed to access clipboard: {}", e),
    }
}

fn draw_menu(difficulty: u32, message: Option<&str>) {
    draw_text("MAZE RUNNER", 40.0, 80.0, 48.0, BLACK);
    draw_text(
        &format!(
            "Difficulty: {} ({} easiest, {} hardest)",
            difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
        ),
        40.0,
        140.0,
        28.0,
        BLACK,
    );
    let help = [
        "1-7 or Up/Down: choose difficulty",
        "Enter: start",
        "In game: arrows move, Space then arrow jumps over mountains",
        "C: copy maze as text, Esc: quit",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, 40.0, 200.0 + i as f32 * 30.0, 22.0, DARKGRAY);
    }
    if let Some(message) = message {
        draw_text(message, 40.0, 360.0, 22.0, RED);
    }
}

fn draw_play(play: &PlayState, show_comparison: bool) {
    let session = &play.session;
    let grid = session.grid();
    let size = play.cell_size;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let px = x as f32 * size;
            let py = y as f32 * size;
            match session.cell_state(x, y) {
                Some(CellState::Open) => {
                    draw_rectangle(px, py, size, size, OPEN_COLOR);
                    draw_rectangle_lines(px, py, size, size, 1.0, GRID_LINE_COLOR);
                }
                Some(CellState::Obstacle) => {
                    draw_rectangle(px, py, size, size, OPEN_COLOR);
                    draw_triangle(
                        vec2(px + size * 0.5, py + size * 0.1),
                        vec2(px + size * 0.1, py + size * 0.9),
                        vec2(px + size * 0.9, py + size * 0.9),
                        OBSTACLE_COLOR,
                    );
                }
                // Walls show the background
                Some(CellState::Wall) | None => {}
            }
        }
    }

    if let (true, Some(comparison)) = (show_comparison, &play.comparison) {
        for &id in &comparison.reference_cells {
            fill_cell(grid.get_coords(id), size, REFERENCE_PATH_COLOR);
        }
        for &id in &comparison.agent_only_cells {
            fill_cell(grid.get_coords(id), size, AGENT_PATH_COLOR);
        }
    }

    let end = session.end_position();
    draw_circle(
        (end.x as f32 + 0.5) * size,
        (end.y as f32 + 0.5) * size,
        size * 0.4,
        END_COLOR,
    );
    let agent = session.agent_position();
    draw_circle(
        (agent.x as f32 + 0.5) * size,
        (agent.y as f32 + 0.5) * size,
        size * 0.35,
        AGENT_COLOR,
    );

    if session.input_state() == InputState::JumpArmed {
        draw_text("JUMP", 8.0, 24.0, 24.0, AGENT_COLOR);
    }

    if let Some(report) = session.score_report() {
        let text = format!("{}  -  Enter: back to menu", report.message());
        draw_rectangle(0.0, 0.0, screen_width(), 36.0, Color::new(1.0, 1.0, 1.0, 0.8));
        draw_text(&text, 8.0, 26.0, 26.0, BLACK);
    }
}

fn fill_cell(pos: Position, size: f32, color: Color) {
    draw_rectangle(pos.x as f32 * size, pos.y as f32 * size, size, size, color);
}

#[macroquad::main("Maze Runner")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let mut app = App::new(config);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.update();
        app.draw();

        next_frame().await
    }
}
