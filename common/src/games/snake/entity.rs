use std::collections::VecDeque;

use super::types::{Block, Direction};

pub const SNAKE_INITIAL_LENGTH: usize = 3;
pub const DEFAULT_START: Block = Block { x: 5, y: 10 };

/// The player's snake. Knows nothing about the board: bounds and collisions
/// are resolved by the session before a move is committed.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Block>,
    start: Block,
    direction: Direction,
    pending_direction: Option<Direction>,
    alive: bool,
    score: u32,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(DEFAULT_START)
    }
}

impl Snake {
    /// Head at `start`, the rest of the body trailing below it, heading up.
    pub fn new(start: Block) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(SNAKE_INITIAL_LENGTH),
            start,
            direction: Direction::Up,
            pending_direction: None,
            alive: true,
            score: 0,
        };
        snake.reset();
        snake
    }

    pub fn reset(&mut self) {
        self.body.clear();
        for i in 0..SNAKE_INITIAL_LENGTH as i32 {
            self.body.push_back(Block::new(self.start.x, self.start.y + i));
        }
        self.direction = Direction::Up;
        self.pending_direction = None;
        self.alive = true;
        self.score = 0;
    }

    /// Queues a turn for the next step. A reversal of the last moved
    /// direction is ignored and reported as `false`.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Direction the next step will take.
    pub fn direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.direction)
    }

    pub fn next_block(&self) -> Block {
        self.head().step(self.direction())
    }

    pub fn move_forward(&mut self) {
        let next = self.next_block();
        self.body.pop_back();
        self.body.push_front(next);
        self.commit_direction();
    }

    pub fn grow(&mut self) {
        let next = self.next_block();
        self.body.push_front(next);
        self.score += 1;
        self.commit_direction();
    }

    fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    pub fn head(&self) -> Block {
        // Body never drops below SNAKE_INITIAL_LENGTH segments.
        self.body[0]
    }

    pub fn tail(&self) -> Block {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Block> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}
