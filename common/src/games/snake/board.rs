use crate::games::SessionRng;
use super::types::{Block, Cell};

const RANDOM_FOOD_ATTEMPTS: usize = 100;

/// Dense row-major grid. The board mirrors the snake body but does not own
/// the snake; the session keeps the two in sync.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cells, `width` per row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn is_out_of_bounds(&self, block: Block) -> bool {
        self.index_of(block.x, block.y).is_none()
    }

    fn place(&mut self, block: Block, cell: Cell) -> bool {
        match self.index_of(block.x, block.y) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => false,
        }
    }

    /// Marks a snake segment. `false` if the block lies off the board.
    pub fn add_block(&mut self, block: Block) -> bool {
        self.place(block, Cell::Snake)
    }

    pub fn add_food(&mut self, block: Block) -> bool {
        self.place(block, Cell::Food)
    }

    pub fn remove_block(&mut self, block: Block) {
        self.place(block, Cell::Empty);
    }

    pub fn get_block(&self, x: i32, y: i32) -> Cell {
        self.index_of(x, y)
            .map(|index| self.cells[index])
            .unwrap_or(Cell::Empty)
    }

    pub fn is_collided(&self, block: Block) -> bool {
        self.get_block(block.x, block.y).is_occupied()
    }

    pub fn food(&self) -> Option<Block> {
        self.cells
            .iter()
            .position(|cell| *cell == Cell::Food)
            .map(|index| self.block_at(index))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    fn block_at(&self, index: usize) -> Block {
        Block::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Places food on a uniformly chosen empty cell. Random probing is tried
    /// first; once that keeps hitting occupied cells the remaining empty cells
    /// are enumerated, so a crowded board cannot stall the tick. Returns `None`
    /// only when no cell is free.
    pub fn generate_food(&mut self, rng: &mut SessionRng) -> Option<Block> {
        if self.cells.is_empty() {
            return None;
        }

        for _ in 0..RANDOM_FOOD_ATTEMPTS {
            let x = rng.random_range(0..self.width) as i32;
            let y = rng.random_range(0..self.height) as i32;
            let block = Block::new(x, y);
            if !self.is_collided(block) {
                self.add_food(block);
                return Some(block);
            }
        }

        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_occupied())
            .map(|(index, _)| index)
            .collect();
        if empty.is_empty() {
            return None;
        }

        let block = self.block_at(empty[rng.random_range(0..empty.len())]);
        self.add_food(block);
        Some(block)
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}
