use std::thread::sleep;

use crossterm::style::Color;
use log::{debug, info, trace};
use rand::{rngs::StdRng, SeedableRng};

use crate::config::GameConfig;
use crate::error::{Collision, Result};
use crate::food::Food;
use crate::frontend::{AudioPlayer, Effect, InputEvent, InputSource, Renderer, Sprite, Track};
use crate::geometry::{Board, Position};
use crate::snake::{Heading, Snake};

/// Segments closer to the head than this can't be hit by it.
const SELF_COLLISION_START: usize = 3;

const TEXT_COLOR: Color = Color::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// Showing the game over screen until the player confirms.
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Grew,
    GameOver(Collision),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The snake, its food and the rules tying them to the board.
pub struct Game {
    config: GameConfig,
    snake: Snake,
    food: Food,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (snake, food) = Game::spawn(&config);

        Game { config, snake, food, rng }
    }

    fn spawn(config: &GameConfig) -> (Snake, Food) {
        let snake = Snake::new(config.spawn, config.spawn_heading, config.board.cell_size())
            .with_reversal_guard(config.reversal_guard);
        (snake, Food::new(config.initial_food))
    }

    pub fn reset(&mut self) {
        let (snake, food) = Game::spawn(&self.config);
        self.snake = snake;
        self.food = food;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.config.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// The displayed score is the snake's length.
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.snake.set_heading(heading);
    }

    /// Advances the world by one step and reports what happened.
    pub fn tick(&mut self) -> TickOutcome {
        self.snake.advance();
        trace!("head at {:?} heading {:?}", self.snake.head(), self.snake.heading());

        let board = self.config.board;
        let ate = board.overlaps(self.snake.head(), self.food.position());
        if ate {
            self.snake.grow();
            if self.config.food_avoids_snake {
                self.food.relocate_avoiding(&board, self.snake.body(), &mut self.rng);
            } else {
                self.food.relocate(&board, &mut self.rng);
            }
            debug!("snake grew to {}, food moved to {:?}", self.snake.len(), self.food.position());
        }

        match self.collision() {
            Some(reason) => TickOutcome::GameOver(reason),
            None if ate => TickOutcome::Grew,
            None => TickOutcome::Moved,
        }
    }

    /// Checks the current head against the body and the board edges.
    pub fn collision(&self) -> Option<Collision> {
        let board = &self.config.board;
        let head = self.snake.head();

        let bitten = self.snake.body().iter()
            .skip(SELF_COLLISION_START)
            .any(|seg| board.overlaps(head, *seg));

        if bitten {
            Some(Collision::SelfCollision)
        } else if !board.contains(head) {
            Some(Collision::BoundaryCollision)
        } else {
            None
        }
    }
}

/// Drives a `Game` against its collaborators, one tick at a time.
pub struct GameLoop<R, A, I> {
    game: Game,
    phase: Phase,
    renderer: R,
    audio: A,
    input: I,
}

impl<R: Renderer, A: AudioPlayer, I: InputSource> GameLoop<R, A, I> {
    pub fn new(game: Game, renderer: R, audio: A, input: I) -> Self {
        GameLoop { game, phase: Phase::Running, renderer, audio, input }
    }

    /// Ticks at a fixed interval until the player quits.
    pub fn run(&mut self) -> Result<()> {
        self.audio.play_loop(Track::Background)?;
        let tick = self.game.config().tick;

        while self.step()? == Control::Continue {
            sleep(tick);
        }

        info!("player quit while {:?}", self.phase);
        Ok(())
    }

    /// One iteration of the loop: drain input, update, draw.
    pub fn step(&mut self) -> Result<Control> {
        for event in self.input.poll_events()? {
            match event {
                InputEvent::Quit => return Ok(Control::Quit),
                InputEvent::Confirm => self.confirm()?,
                InputEvent::Direction(heading) => {
                    if self.phase == Phase::Running {
                        self.game.set_heading(heading);
                    }
                }
            }
        }

        if self.phase == Phase::Paused {
            return Ok(Control::Continue);
        }

        match self.game.tick() {
            TickOutcome::Moved => {}
            TickOutcome::Grew => self.audio.play_once(Effect::Ding)?,
            TickOutcome::GameOver(reason) => {
                self.game_over(reason)?;
                return Ok(Control::Continue);
            }
        }

        self.render_frame()?;
        Ok(Control::Continue)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn confirm(&mut self) -> Result<()> {
        if self.phase == Phase::Paused {
            info!("new round");
            self.audio.resume()?;
            self.phase = Phase::Running;
        }
        Ok(())
    }

    fn game_over(&mut self, reason: Collision) -> Result<()> {
        let score = self.game.score();
        info!("game over: {}, score {}", reason, score);

        self.audio.play_once(Effect::Crash)?;
        self.show_game_over(score)?;
        self.audio.pause()?;

        self.phase = Phase::Paused;
        self.game.reset();
        Ok(())
    }

    fn render_frame(&mut self) -> Result<()> {
        let board = *self.game.board();
        self.renderer.fill_background(Sprite::Background, board.size())?;

        for seg in self.game.snake().body() {
            self.renderer.draw_sprite(Sprite::Block, *seg)?;
        }
        self.renderer.draw_sprite(Sprite::Apple, self.game.food().position())?;

        let score = format!("Score: {}", self.game.score());
        self.renderer.draw_text(&score, score_position(&board), TEXT_COLOR)?;

        self.renderer.present()
    }

    fn show_game_over(&mut self, score: usize) -> Result<()> {
        let board = *self.game.board();
        let (headline, hint) = game_over_positions(&board);

        self.renderer.fill_background(Sprite::Background, board.size())?;
        self.renderer.draw_text(&format!("Game Over! Score: {}", score), headline, TEXT_COLOR)?;
        self.renderer.draw_text("Press ENTER to Play Again | ESC to Exit", hint, TEXT_COLOR)?;
        self.renderer.present()
    }
}

/// Top-right corner, (860, 10) on the default 1000px board.
fn score_position(board: &Board) -> Position {
    Position::new((board.width() - 140).max(0), 10)
}

/// Headline and hint, (300, 260) and (230, 310) on the default board.
fn game_over_positions(board: &Board) -> (Position, Position) {
    let (w, h) = board.size();
    (Position::new(w * 3 / 10, h * 26 / 70), Position::new(w * 23 / 100, h * 31 / 70))
}
