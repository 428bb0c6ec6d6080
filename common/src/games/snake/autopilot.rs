use super::board::Board;
use super::entity::Snake;
use super::types::{Block, Cell, Direction};

pub struct Autopilot;

impl Autopilot {
    /// Greedy choice: the safe direction that gets closest to the food.
    /// Keeps the current heading when no food is known or nothing is safe.
    pub fn calculate_move(snake: &Snake, board: &Board) -> Direction {
        let current = snake.direction();
        let head = snake.head();

        let safe: Vec<Direction> = Self::get_valid_directions(current)
            .into_iter()
            .filter(|dir| Self::is_safe_position(head.step(*dir), board))
            .collect();

        let Some(food) = board.food() else {
            return if safe.contains(&current) {
                current
            } else {
                safe.first().copied().unwrap_or(current)
            };
        };

        safe.into_iter()
            .min_by_key(|dir| head.step(*dir).manhattan_distance(food))
            .unwrap_or(current)
    }

    fn get_valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    fn is_safe_position(pos: Block, board: &Board) -> bool {
        !board.is_out_of_bounds(pos) && board.get_block(pos.x, pos.y) != Cell::Snake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(snake: &Snake) -> Board {
        let mut board = Board::new(20, 20);
        for block in snake.body() {
            board.add_block(*block);
        }
        board
    }

    #[test]
    fn test_heads_towards_food() {
        let snake = Snake::new(Block::new(5, 10));
        let mut board = board_with(&snake);
        board.add_food(Block::new(12, 10));
        assert_eq!(Autopilot::calculate_move(&snake, &board), Direction::Right);

        board.remove_block(Block::new(12, 10));
        board.add_food(Block::new(5, 2));
        assert_eq!(Autopilot::calculate_move(&snake, &board), Direction::Up);
    }

    #[test]
    fn test_never_reverses() {
        let snake = Snake::new(Block::new(5, 10));
        let mut board = board_with(&snake);
        board.add_food(Block::new(5, 18));
        assert_ne!(Autopilot::calculate_move(&snake, &board), Direction::Down);
    }

    #[test]
    fn test_turns_away_from_wall() {
        let snake = Snake::new(Block::new(0, 0));
        let board = board_with(&snake);
        assert_eq!(Autopilot::calculate_move(&snake, &board), Direction::Right);
    }

    #[test]
    fn test_avoids_own_body() {
        let mut snake = Snake::new(Block::new(5, 10));
        snake.grow();
        snake.set_direction(Direction::Right);
        snake.move_forward();
        snake.set_direction(Direction::Down);
        snake.move_forward();
        assert_eq!(snake.head(), Block::new(6, 10));

        let mut board = board_with(&snake);
        board.add_food(Block::new(0, 10));

        // Left is the shortest way to the food but runs into the tail.
        assert_eq!(Autopilot::calculate_move(&snake, &board), Direction::Down);
    }
}
