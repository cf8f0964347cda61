use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::arena::Arena;
use crate::food::Food;
use crate::input::{Command, InputSource};
use crate::render::Renderer;
use crate::scheduler::Scheduler;
use crate::snake::{Direction, Snake};
use crate::Result;

pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const FOOD_SCORE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Collided,
    Quit,
    /// No free cell left to put food on.
    BoardFilled,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Collided | Outcome::Quit => "Game Over",
            Outcome::BoardFilled => "You won!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Over(Outcome),
}

/// Everything that changes while a game is played.
pub struct Session<R> {
    arena: Arena,
    snake: Snake,
    food: Food,
    score: u32,
    rng: R,
    growth_due: bool,
    status: Status,
}

impl<R> Session<R> {
    /// Starts from a given snake and food, for setting up exact situations.
    pub fn with_state(arena: Arena, snake: Snake, food: Food, rng: R) -> Self {
        Session { arena, snake, food, score: 0, rng, growth_due: false, status: Status::Running }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Running => None,
            Status::Over(outcome) => Some(outcome),
        }
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.move_head(direction);
    }

    pub fn quit(&mut self) {
        self.end(Outcome::Quit);
    }

    /// Update tick: move, check for a crash, push the digestion bulge along.
    ///
    /// Returns false once the game is over.
    pub fn update(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.snake.tick();

        if self.snake.collides(&self.arena) {
            self.end(Outcome::Collided);
            return false;
        }

        if self.snake.advance_digestion() {
            self.growth_due = true;
        }

        true
    }

    fn end(&mut self, outcome: Outcome) {
        if self.is_running() {
            info!(?outcome, score = self.score, len = self.snake.len(), "game over");
            self.status = Status::Over(outcome);
        }
    }
}

impl<R: Rng> Session<R> {
    /// Fresh game: a short snake in the middle of `arena` heading right, and
    /// food somewhere else.
    pub fn new(arena: Arena, mut rng: R) -> Self {
        let snake = Snake::new(arena.center(), INITIAL_SNAKE_LENGTH, Direction::Right);
        let food = Food::spawn(&snake, &arena, &mut rng);

        let mut session = Session::with_state(arena, snake, food.unwrap_or(Food::at(arena.center())), rng);
        if food.is_none() {
            session.end(Outcome::BoardFilled);
        }
        session
    }

    /// Render-tick bookkeeping: eat food under the head, grow when a bulge
    /// reached the tail.
    pub fn feed(&mut self) {
        if !self.is_running() {
            return;
        }

        if self.snake.digest(self.food.pos()) {
            self.score += FOOD_SCORE;
            debug!(score = self.score, pos = ?self.food.pos(), "food eaten");

            if !self.food.respawn(&self.snake, &self.arena, &mut self.rng) {
                self.end(Outcome::BoardFilled);
            }
        }

        if self.growth_due {
            self.growth_due = false;
            self.snake.grow();
            debug!(len = self.snake.len(), "snake grew");
        }
    }
}

pub struct SnakeGame<R> {
    session: Session<R>,
    update_every: Duration,
    render_every: Duration,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(session: Session<R>, update_every: Duration, render_every: Duration) -> Self {
        SnakeGame { session, update_every, render_every }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Plays until the snake crashes, the board fills up, or the player quits.
    pub fn play<I, W>(&mut self, input: &mut I, renderer: &mut Renderer<W>) -> Result<Outcome>
    where
        I: InputSource,
        W: Write,
    {
        renderer.draw_board(self.session.arena())?;
        renderer.draw_frame(&self.session)?;

        info!(len = self.session.snake().len(), "game started");
        let mut scheduler = Scheduler::new(self.update_every, self.render_every, Instant::now());

        while self.session.is_running() {
            let now = Instant::now();

            match input.poll_command()? {
                Some(Command::Steer(dir)) => self.session.steer(dir),
                Some(Command::Quit) => {
                    self.session.quit();
                    break;
                }
                None => {}
            }

            if scheduler.update_due(now) {
                self.session.update();
            }

            if scheduler.render_due(now) {
                self.session.feed();
                renderer.draw_frame(&self.session)?;
            }

            thread::yield_now();
        }

        renderer.draw_frame(&self.session)?;
        Ok(self.session.outcome().unwrap_or(Outcome::Quit))
    }
}
