use serde::{Deserialize, Serialize};

use crate::games::snake::{Block, Difficulty, SNAKE_INITIAL_LENGTH};
use super::Validate;

pub const CONFIG_FILE_NAME: &str = "snake_game_config.yaml";

const MIN_BOARD_SIDE: u32 = 10;
const MAX_BOARD_SIDE: u32 = 100;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_width: u32,
    pub board_height: u32,
    pub difficulty: u8,
    pub start_x: i32,
    pub start_y: i32,
    pub frame_interval_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn start_block(&self) -> Block {
        Block::new(self.start_x, self.start_y)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        let side = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !side.contains(&self.board_width) || !side.contains(&self.board_height) {
            return Err(format!(
                "board dimensions must be between {} and {}",
                MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ));
        }
        Difficulty::new(self.difficulty)?;
        if self.frame_interval_ms == 0 || self.frame_interval_ms > 100 {
            return Err("frame_interval_ms must be between 1 and 100".to_string());
        }

        // The initial body trails below the head.
        let tail_y = self.start_y.checked_add(SNAKE_INITIAL_LENGTH as i32 - 1);
        if self.start_x < 0
            || self.start_x >= self.board_width as i32
            || self.start_y < 0
            || tail_y.is_none_or(|tail_y| tail_y >= self.board_height as i32)
        {
            return Err(format!(
                "start position ({}, {}) does not fit the initial snake on a {}x{} board",
                self.start_x, self.start_y, self.board_width, self.board_height
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 30,
            board_height: 30,
            difficulty: Difficulty::MIN,
            start_x: 5,
            start_y: 10,
            frame_interval_ms: 16,
            seed: None,
        }
    }
}
