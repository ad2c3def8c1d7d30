use crate::{
    cell_hit_test, AssetProvider, Coordinate, GameConfig, Placements, Point, RenderItem,
    RenderPart, Renderable, Size, Tile, TileId, BOARD_ORDER,
};
pub use cell::*;
use log::trace;
use smallvec::SmallVec;
use std::ops::Index;
use thiserror::Error;

mod cell;
#[cfg(test)]
mod test_setup;

/// Describes the reason why a [board cell](BoardCell) could not be reached or filled.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoardError {
    /// Attempting to reach a cell outside the `board_size` by `board_size` grid.
    #[error("cell ({x}, {y}) is outside a board of {board_size} by {board_size}")]
    IndexOutOfBounds {
        /// The requested column.
        x: usize,
        /// The requested row.
        y: usize,
        /// The number of rows and columns.
        board_size: usize,
    },
    /// Attempting to place a [tile](Tile) on a cell which already holds one.
    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied {
        /// The column of the occupied cell.
        x: usize,
        /// The row of the occupied cell.
        y: usize,
    },
}

/// Where the board background is drawn and how finely it is divided.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoardGeometry {
    /// Center of the board background.
    pub center: Point,
    /// Size of the board background as drawn, after scaling.
    pub size: Size,
    /// Scale of the board background.
    pub scale: f32,
    /// Number of rows (and columns) of cells.
    pub board_size: usize,
}

impl BoardGeometry {
    /// The board background scaled by `config.board_scale` and centered in the window.
    pub fn from_config(config: &GameConfig, assets: &impl AssetProvider) -> BoardGeometry {
        BoardGeometry {
            center: Point::new(config.window_width / 2.0, config.window_height / 2.0),
            size: assets.board().scaled(config.board_scale),
            scale: config.board_scale,
            board_size: config.board_size,
        }
    }

    /// The lowest point of the board background, which is the bottom vertex of cell `(0, 0)`.
    #[inline]
    pub fn bottom(&self) -> Point {
        self.center.translate(0.0, -self.size.height / 2.0)
    }

    /// Half the width of one cell, rounded to a whole pixel.
    #[inline]
    pub fn width_division(&self) -> f32 {
        (self.size.width / (2 * self.board_size) as f32).round()
    }

    /// Half the height of one cell, rounded to a whole pixel.
    #[inline]
    pub fn height_division(&self) -> f32 {
        (self.size.height / (2 * self.board_size) as f32).round()
    }
}

/// The `board_size` by `board_size` grid of [board cells](BoardCell) laid over an isometric
/// board background.
///
/// Cell `(x, y)` has its bottom vertex `width_division * (x - y)` to the right of and
/// `height_division * (x + y)` above the bottom of the board.
#[derive(Debug)]
pub struct BoardGrid {
    geometry: BoardGeometry,
    /// Cells in build order: rows outer, columns inner.
    cells: Vec<BoardCell>,
    placements: Placements,
}

impl BoardGrid {
    /// Lays out every cell, rows outer and columns inner, all [free](CellStatus::Free).
    pub fn new(geometry: BoardGeometry) -> BoardGrid {
        let board_size = geometry.board_size;
        let bottom = geometry.bottom();
        let width_division = geometry.width_division();
        let height_division = geometry.height_division();

        let mut cells = Vec::with_capacity(board_size * board_size);
        for y in 0..board_size {
            for x in 0..board_size {
                let cell_bottom = bottom.translate(
                    width_division * (x as f32 - y as f32),
                    height_division * (x + y) as f32,
                );
                cells.push(BoardCell::from_bottom(
                    (x, y),
                    cell_bottom,
                    width_division,
                    height_division,
                ));
            }
        }

        BoardGrid {
            geometry,
            cells,
            placements: Placements::new(),
        }
    }

    /// Where the board is drawn and how finely it is divided.
    #[inline]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// The number of rows (and columns).
    #[inline]
    pub fn board_size(&self) -> usize {
        self.geometry.board_size
    }

    /// Every cell in build order: rows outer, columns inner.
    #[inline]
    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    /// # Errors
    ///
    /// * [BoardError::IndexOutOfBounds] when `x` or `y` is not less than the board size.
    ///
    /// # Returns
    ///
    /// The cell in column `x` and row `y`.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<&BoardCell, BoardError> {
        let index = self.index_of(x, y)?;
        Ok(&self.cells[index])
    }

    /// Recomputes every unoccupied cell with a [hit test](cell_hit_test) against `pointer`.
    /// Occupied cells keep their status.
    ///
    /// Nothing stops two cells from being [selected](CellStatus::Selected) at once when the
    /// pointer sits on a shared edge; releasing over both reports
    /// [InteractionError::MultipleCellsSelected](crate::InteractionError::MultipleCellsSelected).
    pub fn update_on_drag(&mut self, pointer: Point) {
        for cell in &mut self.cells {
            if cell.status() != CellStatus::Occupied {
                let status = cell_hit_test(pointer, cell);
                cell.set_status(status);
            }
        }
        trace!(
            "board cells under ({}, {}): {:?}",
            pointer.x,
            pointer.y,
            self.selected_cells()
        );
    }

    /// The [coordinates](Coordinate) of every [selected](CellStatus::Selected) cell
    /// in build order.
    pub fn selected_cells(&self) -> SmallVec<[Coordinate; 2]> {
        self.cells
            .iter()
            .filter(|cell| cell.status() == CellStatus::Selected)
            .map(BoardCell::coordinate)
            .collect()
    }

    /// Reverts every [selected](CellStatus::Selected) cell to [free](CellStatus::Free).
    pub fn clear_selection(&mut self) {
        for cell in &mut self.cells {
            if cell.status() == CellStatus::Selected {
                cell.set_status(CellStatus::Free);
            }
        }
    }

    /// The [tiles](Tile) on the board and the cells they were placed on.
    #[inline]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// The [coordinate](Coordinate) of the cell holding the [tile](Tile) with `id`, if any.
    #[inline]
    pub fn coordinate_of(&self, id: TileId) -> Option<Coordinate> {
        self.placements.get_by_left(&id).copied()
    }

    /// Moves `tile` onto the cell at `coordinate`, which becomes
    /// [occupied](CellStatus::Occupied).
    ///
    /// # Errors
    ///
    /// `tile` is handed back together with
    ///
    /// * [BoardError::IndexOutOfBounds] when `coordinate` is not on the board, or
    /// * [BoardError::CellOccupied] when the cell already holds a [tile](Tile).
    pub(crate) fn place(
        &mut self,
        coordinate: Coordinate,
        tile: Tile,
    ) -> Result<(), (Tile, BoardError)> {
        let (x, y) = coordinate;
        let index = match self.index_of(x, y) {
            Ok(index) => index,
            Err(error) => return Err((tile, error)),
        };
        let cell = &mut self.cells[index];
        if cell.tile().is_some() {
            return Err((tile, BoardError::CellOccupied { x, y }));
        }

        self.placements.insert(tile.id(), coordinate);
        cell.occupy(tile);

        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        let board_size = self.board_size();
        if x >= board_size || y >= board_size {
            return Err(BoardError::IndexOutOfBounds { x, y, board_size });
        }

        Ok(y * board_size + x)
    }
}

impl Index<Coordinate> for BoardGrid {
    type Output = BoardCell;

    /// # Panics
    ///
    /// When `x` or `y` is not less than the board size.
    fn index(&self, (x, y): Coordinate) -> &BoardCell {
        match self.cell_at(x, y) {
            Ok(cell) => cell,
            Err(error) => panic!("{}", error),
        }
    }
}

impl Renderable for BoardGrid {
    /// The board background followed by every cell and the [tiles](Tile) placed on them.
    fn render_items(&self) -> SmallVec<[RenderItem; 3]> {
        let background = RenderItem {
            part: RenderPart::Board,
            position: self.geometry.center,
            scale: self.geometry.scale,
            rotation: 0.0,
            order: BOARD_ORDER,
        };

        std::iter::once(background)
            .chain(self.cells.iter().flat_map(BoardCell::render_items))
            .collect()
    }
}
