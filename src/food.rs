use rand::Rng;
use rand::seq::IteratorRandom;

use crate::geometry::{Board, Position};

#[derive(Debug, Clone)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves to a uniformly chosen cell inside the board's one-cell margin.
    /// The snake may be lying on the chosen cell.
    pub fn relocate<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) {
        let (cols, rows) = board.whole_cells();
        let cell = board.cell_size();
        self.position = Position::new(rng.gen_range(1..=cols - 2) * cell, rng.gen_range(1..=rows - 2) * cell);
    }

    /// Like `relocate`, but only picks margin cells free of `occupied`.
    /// Falls back to `relocate` when there is no such cell.
    pub fn relocate_avoiding<R: Rng + ?Sized>(&mut self, board: &Board, occupied: &[Position], rng: &mut R) {
        let free = board.inner_cells()
            .filter(|cell| !occupied.iter().any(|seg| board.overlaps(*seg, *cell)))
            .choose(rng);

        match free {
            Some(pos) => self.position = pos,
            None => self.relocate(board, rng),
        }
    }
}
