use std::time::Instant;

use crate::config::GameConfig;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::difficulty::Difficulty;
use super::entity::Snake;
use super::types::{Block, Cell, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    MainMenu,
    Playing,
    GameOver { final_score: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32, next_food: Option<Block> },
    Died { score: u32 },
}

/// One player's game: the snake, the board mirroring it and the scene it is
/// in. Driven by `on_frame` from a single loop; every transition happens
/// through the methods below.
pub struct SnakeSession {
    scene: Scene,
    difficulty: Difficulty,
    pending_first_food: bool,
    snake: Snake,
    board: Board,
    rng: SessionRng,
    last_tick: Option<Instant>,
}

impl SnakeSession {
    pub fn new(
        width: usize,
        height: usize,
        start: Block,
        difficulty: Difficulty,
        rng: SessionRng,
    ) -> Self {
        let mut session = Self {
            scene: Scene::MainMenu,
            difficulty,
            pending_first_food: true,
            snake: Snake::new(start),
            board: Board::new(width, height),
            rng,
            last_tick: None,
        };
        session.place_snake();
        session
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, String> {
        let difficulty = Difficulty::new(config.difficulty)?;
        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Ok(Self::new(
            config.board_width as usize,
            config.board_height as usize,
            config.start_block(),
            difficulty,
            rng,
        ))
    }

    fn place_snake(&mut self) {
        let mut fits = true;
        for block in self.snake.body() {
            fits &= self.board.add_block(*block);
        }
        if !fits {
            self.snake.kill();
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), String> {
        if self.scene != Scene::MainMenu {
            return Err("difficulty can only be changed from the main menu".to_string());
        }
        self.difficulty = difficulty;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), String> {
        if self.scene != Scene::MainMenu {
            return Err(format!("cannot start a game from {:?}", self.scene));
        }
        self.scene = Scene::Playing;
        self.last_tick = None;
        log!(
            "Game started at difficulty {} (tick every {:?}, seed {})",
            self.difficulty,
            self.difficulty.tick_interval(),
            self.rng.seed()
        );
        Ok(())
    }

    pub fn retry(&mut self) -> Result<(), String> {
        if !matches!(self.scene, Scene::GameOver { .. }) {
            return Err(format!("nothing to retry from {:?}", self.scene));
        }
        self.snake.reset();
        self.board.reset();
        self.place_snake();
        self.pending_first_food = true;
        self.last_tick = None;
        self.scene = Scene::MainMenu;
        Ok(())
    }

    /// Queues a turn. Ignored outside of play and for reversals.
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.scene == Scene::Playing && self.snake.set_direction(direction)
    }

    /// Called once per frame; ticks when the difficulty's interval has passed
    /// since the previous tick. The first frame of a game ticks immediately.
    pub fn on_frame(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.scene != Scene::Playing {
            return None;
        }
        if let Some(last) = self.last_tick
            && now.saturating_duration_since(last) < self.difficulty.tick_interval()
        {
            return None;
        }
        self.last_tick = Some(now);
        self.tick()
    }

    /// Advances the game one step, regardless of timing.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.scene != Scene::Playing {
            return None;
        }

        if self.pending_first_food {
            self.pending_first_food = false;
            self.spawn_food();
        }

        let next = self.snake.next_block();
        let mut ate = None;
        if !self.board.is_out_of_bounds(next) && self.board.is_collided(next) {
            match self.board.get_block(next.x, next.y) {
                Cell::Food => {
                    self.board.remove_block(next);
                    self.board.add_block(next);
                    self.snake.grow();
                    log!("Ate food at {}. Score: {}", next, self.snake.score());
                    ate = Some(self.spawn_food());
                }
                _ => {
                    log!("Collided with own body at {}", next);
                    self.snake.kill();
                }
            }
        }

        if ate.is_none() {
            self.board.remove_block(self.snake.tail());
            self.snake.move_forward();
        }

        if self.board.is_out_of_bounds(self.snake.head()) {
            log!("Hit the wall at {}", self.snake.head());
            self.snake.kill();
        }

        let score = self.snake.score();
        if !self.snake.is_alive() {
            self.scene = Scene::GameOver { final_score: score };
            log!("Game over. Final score: {}", score);
            return Some(TickOutcome::Died { score });
        }

        self.board.add_block(self.snake.head());
        Some(match ate {
            Some(next_food) => TickOutcome::Ate { score, next_food },
            None => TickOutcome::Moved,
        })
    }

    fn spawn_food(&mut self) -> Option<Block> {
        let food = self.board.generate_food(&mut self.rng);
        match food {
            Some(block) => log!("Food spawned at {}", block),
            None => log!("No free cell left for food"),
        }
        food
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, block: Block) {
        while let Some(existing) = self.board.food() {
            self.board.remove_block(existing);
        }
        self.pending_first_food = false;
        assert!(self.board.add_food(block));
    }
}
