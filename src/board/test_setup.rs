use crate::{BoardGrid, CellStatus, Coordinate};

impl BoardGrid {
    /// Marks the cell at `coordinate` [selected](CellStatus::Selected) regardless of where the
    /// pointer is, as if two cells overlapped under it.
    ///
    /// # Panics
    ///
    /// When `coordinate` is not on the board.
    pub fn select(&mut self, (x, y): Coordinate) {
        let board_size = self.board_size();
        assert!(x < board_size && y < board_size, "({x}, {y}) is off the board");
        self.cells[y * board_size + x].set_status(CellStatus::Selected);
    }
}
