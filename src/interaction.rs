use crate::{
    BoardError, BoardGrid, CellStatus, Coordinate, EventOutcome, Hand, TileId, TileStatus,
    HAND_GEM_ORDER, PLACEMENT_ORDER_BASE,
};
use log::{debug, error};
use thiserror::Error;

/// Describes the reason why a held [tile](crate::Tile) could not be released onto the board.
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum InteractionError {
    /// More than one [board cell](crate::BoardCell) was [selected](CellStatus::Selected) when the
    /// pointer was released, so the target is ambiguous. The held [tile](crate::Tile) returns to
    /// the hand.
    #[error("{} board cells are selected at once: {cells:?}", .cells.len())]
    MultipleCellsSelected {
        /// Every selected cell in build order.
        cells: Vec<Coordinate>,
    },
    /// The snapped cell could not take the [tile](crate::Tile).
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// # Returns
///
/// The gem draw order of a [tile](crate::Tile) placed on the cell at `(x, y)`. Cells nearer
/// the bottom of the board draw their [tiles](crate::Tile) on top. The block is one order
/// below the gem.
///
/// # Examples
///
/// ```
/// assert_eq!(36, untiletled::placement_order((0, 0)));
/// assert_eq!(24, untiletled::placement_order((2, 4)));
/// ```
pub fn placement_order((x, y): Coordinate) -> i32 {
    PLACEMENT_ORDER_BASE - 2 * (x + y + 2) as i32
}

/// Checks that at most one [board cell](crate::BoardCell) is
/// [selected](CellStatus::Selected).
///
/// # Errors
///
/// * [InteractionError::MultipleCellsSelected] with every selected cell, logged as an error.
///
/// # Returns
///
/// The selected cell, if any.
pub fn check_single_selection(board: &BoardGrid) -> Result<Option<Coordinate>, InteractionError> {
    let selected = board.selected_cells();
    match selected.as_slice() {
        [] => Ok(None),
        [coordinate] => Ok(Some(*coordinate)),
        cells => {
            let error = InteractionError::MultipleCellsSelected {
                cells: cells.to_vec(),
            };
            error!("{}", error);
            Err(error)
        }
    }
}

/// The rules tying a held [tile](crate::Tile) to the board: snapping while dragged, and
/// placing or returning when released.
///
/// ```text
/// InHand -> Selected -> BeingPlaced -> PlacedOnBoard
///              ^  |          |
///              |  v          v
///             InHand <-------+
/// ```
#[derive(Debug, Default)]
pub struct TileInteraction {
    snapped: Option<Coordinate>,
}

impl TileInteraction {
    /// Nothing snapped.
    pub fn new() -> TileInteraction {
        TileInteraction::default()
    }

    /// The cell the held [tile](crate::Tile) snapped to during the last drag, if any.
    #[inline]
    pub fn snapped(&self) -> Option<Coordinate> {
        self.snapped
    }

    /// Snaps the held [tile](crate::Tile) to the first [selected](CellStatus::Selected) cell in
    /// build order: its anchor moves to the cell's bottom vertex, it takes the
    /// [placement order](placement_order) of the cell, and it becomes
    /// [being placed](TileStatus::BeingPlaced). With no selected cell, the [tile](crate::Tile)
    /// goes back to where the pointer dragged it, at hand draw order, and is
    /// [selected](TileStatus::Selected) again.
    ///
    /// Run after the hand moved the [tile](crate::Tile) and the board hit tested its cells.
    ///
    /// # Returns
    ///
    /// The cell snapped to, if any.
    pub fn on_drag(&mut self, hand: &mut Hand, board: &BoardGrid) -> Option<Coordinate> {
        let Some(free_position) = hand.held_free_position() else {
            self.snapped = None;
            return None;
        };
        let Some(tile) = hand.held_tile_mut().filter(|tile| tile.status().is_held()) else {
            self.snapped = None;
            return None;
        };

        let target = board
            .cells()
            .iter()
            .find(|cell| cell.status() == CellStatus::Selected);
        match target {
            Some(cell) => {
                let coordinate = cell.coordinate();
                let sprite = tile.sprite_mut();
                sprite.move_to(cell.bottom());
                sprite.set_draw_order(placement_order(coordinate));
                tile.set_status(TileStatus::BeingPlaced);
                if self.snapped != Some(coordinate) {
                    debug!("snapped tile {} to cell {:?}", tile.id(), coordinate);
                }
                self.snapped = Some(coordinate);
            }
            None => {
                let sprite = tile.sprite_mut();
                sprite.move_to(free_position);
                sprite.set_draw_order(HAND_GEM_ORDER);
                tile.set_status(TileStatus::Selected);
                self.snapped = None;
            }
        }

        self.snapped
    }

    /// Places the held [tile](crate::Tile) on the cell it snapped to when it is still
    /// [being placed](TileStatus::BeingPlaced): the [tile](crate::Tile) leaves the hand, becomes
    /// [placed on the board](TileStatus::PlacedOnBoard), and the cell becomes
    /// [occupied](CellStatus::Occupied). Any other held [tile](crate::Tile) returns to its slot
    /// at hand scale.
    ///
    /// Run after the hand reset its statuses on release.
    ///
    /// # Errors
    ///
    /// * [InteractionError::Board] when the cell cannot take the [tile](crate::Tile). The
    /// [tile](crate::Tile) returns to its slot.
    pub fn on_pointer_release(
        &mut self,
        hand: &mut Hand,
        board: &mut BoardGrid,
    ) -> Result<EventOutcome, InteractionError> {
        let snapped = self.snapped.take();
        let Some(status) = hand.held_tile().map(|tile| tile.status()) else {
            return Ok(EventOutcome::Unchanged);
        };

        match snapped {
            Some(coordinate) if status == TileStatus::BeingPlaced => {
                let placed = hand.place_held(|mut tile| {
                    tile.set_status(TileStatus::PlacedOnBoard);
                    board.place(coordinate, tile)
                });
                match placed {
                    Some(Ok(tile)) => {
                        debug!("placed tile {} on cell {:?}", tile, coordinate);
                        Ok(EventOutcome::Placed { tile, coordinate })
                    }
                    Some(Err(error)) => Err(error.into()),
                    None => Ok(EventOutcome::Unchanged),
                }
            }
            _ => Ok(self.cancel(hand).map_or(EventOutcome::Unchanged, |tile| {
                EventOutcome::Returned { tile }
            })),
        }
    }

    /// Forgets the snapped cell and returns the held [tile](crate::Tile) to its slot.
    ///
    /// # Returns
    ///
    /// The id of the returned [tile](crate::Tile), or [None] when nothing was held.
    pub fn cancel(&mut self, hand: &mut Hand) -> Option<TileId> {
        self.snapped = None;
        hand.return_held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BoardGeometry, FixedAssets, GameConfig, Point, Tile, TileColor, HAND_BLOCK_ORDER,
    };

    fn default_board() -> BoardGrid {
        BoardGrid::new(BoardGeometry::from_config(
            &GameConfig::default(),
            &FixedAssets::default(),
        ))
    }

    fn held_hand() -> Hand {
        let mut hand = Hand::with_tiles(&[
            (TileColor::Pink, TileColor::Blue),
            (TileColor::Pink, TileColor::Green),
        ]);
        hand.on_pointer_press(Point::new(350.0, 40.0));
        hand
    }

    /// Moves the pointer from `from` to `to` the way the session dispatches one drag event.
    fn drag(
        interaction: &mut TileInteraction,
        hand: &mut Hand,
        board: &mut BoardGrid,
        from: Point,
        to: Point,
    ) -> Option<Coordinate> {
        hand.on_drag(to.x - from.x, to.y - from.y);
        board.update_on_drag(to);
        interaction.on_drag(hand, board)
    }

    #[test]
    fn placement_orders() {
        assert_eq!(36, placement_order((0, 0)));
        assert_eq!(34, placement_order((1, 0)));
        assert_eq!(34, placement_order((0, 1)));
        assert_eq!(16, placement_order((5, 5)));
    }

    #[test]
    fn check_single_selection_counts() {
        let mut board = default_board();

        assert_eq!(Ok(None), check_single_selection(&board));

        board.update_on_drag(board[(3, 1)].center());

        assert_eq!(Ok(Some((3, 1))), check_single_selection(&board));
    }

    #[test]
    fn check_single_selection_many() {
        let mut board = default_board();
        board.select((4, 0));
        board.select((1, 2));

        assert_eq!(
            Err(InteractionError::MultipleCellsSelected {
                cells: vec![(4, 0), (1, 2)],
            }),
            check_single_selection(&board)
        );
    }

    #[test]
    fn drag_over_cell_snaps() {
        let mut board = default_board();
        let mut hand = held_hand();
        let mut interaction = TileInteraction::new();
        let target = board[(0, 0)].center();

        let snapped = drag(
            &mut interaction,
            &mut hand,
            &mut board,
            Point::new(350.0, 40.0),
            target,
        );

        assert_eq!(Some((0, 0)), snapped);
        assert_eq!(Some((0, 0)), interaction.snapped());
        let tile = hand.held_tile().expect("a tile should be held");
        assert_eq!(TileStatus::BeingPlaced, tile.status());
        assert_eq!(Point::new(400.0, 172.0), tile.sprite().position());
        assert_eq!(36, tile.sprite().gem_order());
        assert_eq!(35, tile.sprite().block_order());
        assert_eq!(2.0, tile.sprite().scale());
        assert_eq!(CellStatus::Selected, board[(0, 0)].status());
    }

    #[test]
    fn drag_off_cell_unsnaps() {
        let mut board = default_board();
        let mut hand = held_hand();
        let mut interaction = TileInteraction::new();
        let start = Point::new(350.0, 40.0);
        let target = board[(0, 0)].center();
        drag(&mut interaction, &mut hand, &mut board, start, target);

        let snapped = drag(
            &mut interaction,
            &mut hand,
            &mut board,
            target,
            Point::new(700.0, 100.0),
        );

        assert_eq!(None, snapped);
        let tile = hand.held_tile().expect("a tile should be held");
        assert_eq!(TileStatus::Selected, tile.status());
        assert_eq!(Point::new(700.0, 85.0), tile.sprite().position());
        assert_eq!(HAND_GEM_ORDER, tile.sprite().gem_order());
        assert!(board.selected_cells().is_empty());
    }

    #[test]
    fn drag_between_cells_follows_pointer() {
        let mut board = default_board();
        let mut hand = held_hand();
        let mut interaction = TileInteraction::new();
        let start = Point::new(350.0, 40.0);
        let first = board[(0, 0)].center();
        let second = board[(2, 1)].center();
        drag(&mut interaction, &mut hand, &mut board, start, first);

        let snapped = drag(&mut interaction, &mut hand, &mut board, first, second);

        assert_eq!(Some((2, 1)), snapped);
        let tile = hand.held_tile().expect("a tile should be held");
        assert_eq!(board[(2, 1)].bottom(), tile.sprite().position());
        assert_eq!(placement_order((2, 1)), tile.sprite().gem_order());
        assert_eq!(
            Some(second.translate(0.0, -15.0)),
            hand.held_free_position()
        );
    }

    #[test]
    fn drag_without_held_tile() {
        let mut board = default_board();
        let mut hand = Hand::with_tiles(&[(TileColor::Pink, TileColor::Blue)]);
        let mut interaction = TileInteraction::new();
        let target = board[(0, 0)].center();

        let snapped = drag(
            &mut interaction,
            &mut hand,
            &mut board,
            Point::new(10.0, 10.0),
            target,
        );

        assert_eq!(None, snapped);
        assert_eq!(CellStatus::Selected, board[(0, 0)].status());
        assert_eq!(vec![TileStatus::InHand], hand.statuses());
    }

    #[test]
    fn release_snapped_places() {
        let mut board = default_board();
        let mut hand = held_hand();
        let mut interaction = TileInteraction::new();
        let target = board[(0, 0)].center();
        drag(
            &mut interaction,
            &mut hand,
            &mut board,
            Point::new(350.0, 40.0),
            target,
        );
        hand.on_pointer_release();

        let outcome = interaction
            .on_pointer_release(&mut hand, &mut board)
            .expect("on_pointer_release should return Ok");

        assert_eq!(
            EventOutcome::Placed {
                tile: TileId(0),
                coordinate: (0, 0),
            },
            outcome
        );
        assert_eq!(1, hand.len());
        assert!(hand.held_tile().is_none());
        assert_eq!(None, interaction.snapped());
        let cell = &board[(0, 0)];
        assert_eq!(CellStatus::Occupied, cell.status());
        let tile: &Tile = cell.tile().expect("the cell should hold a tile");
        assert_eq!(TileStatus::PlacedOnBoard, tile.status());
        assert_eq!(cell.bottom(), tile.sprite().position());
        assert_eq!(Some((0, 0)), board.coordinate_of(TileId(0)));
    }

    #[test]
    fn release_unsnapped_returns() {
        let mut board = default_board();
        let mut hand = held_hand();
        let mut interaction = TileInteraction::new();
        drag(
            &mut interaction,
            &mut hand,
            &mut board,
            Point::new(350.0, 40.0),
            Point::new(700.0, 500.0),
        );
        hand.on_pointer_release();

        let outcome = interaction
            .on_pointer_release(&mut hand, &mut board)
            .expect("on_pointer_release should return Ok");

        assert_eq!(EventOutcome::Returned { tile: TileId(0) }, outcome);
        let tile = hand.tiles().next().expect("the hand should hold a tile");
        assert_eq!(TileStatus::InHand, tile.status());
        assert_eq!(Point::new(350.0, 25.0), tile.sprite().position());
        assert_eq!(1.0, tile.sprite().scale());
        assert_eq!(HAND_BLOCK_ORDER, tile.sprite().block_order());
        assert!(board.placements().is_empty());
    }

    #[test]
    fn release_nothing_held() {
        let mut board = default_board();
        let mut hand = Hand::with_tiles(&[(TileColor::Pink, TileColor::Blue)]);
        let mut interaction = TileInteraction::new();

        let outcome = interaction
            .on_pointer_release(&mut hand, &mut board)
            .expect("on_pointer_release should return Ok");

        assert_eq!(EventOutcome::Unchanged, outcome);
    }

    #[test]
    fn release_on_occupied_cell_returns_tile() {
        let mut board = default_board();
        let mut hand = held_hand();
        let mut interaction = TileInteraction::new();
        let target = board[(0, 0)].center();
        drag(
            &mut interaction,
            &mut hand,
            &mut board,
            Point::new(350.0, 40.0),
            target,
        );
        hand.on_pointer_release();
        board
            .place((0, 0), Tile::new(TileId(99), TileColor::Aqua, TileColor::Aqua))
            .expect("place should return Ok");

        let error = interaction
            .on_pointer_release(&mut hand, &mut board)
            .expect_err("on_pointer_release should return Err");

        assert_eq!(
            InteractionError::Board(BoardError::CellOccupied { x: 0, y: 0 }),
            error
        );
        assert_eq!(2, hand.len());
        assert_eq!(vec![TileStatus::InHand, TileStatus::InHand], hand.statuses());
        assert_eq!(Some(TileId(99)), board[(0, 0)].tile().map(Tile::id));
    }

    #[test]
    fn cancel_returns_held_tile() {
        let mut board = default_board();
        let mut hand = held_hand();
        let mut interaction = TileInteraction::new();
        let target = board[(0, 0)].center();
        drag(
            &mut interaction,
            &mut hand,
            &mut board,
            Point::new(350.0, 40.0),
            target,
        );

        assert_eq!(Some(TileId(0)), interaction.cancel(&mut hand));
        assert_eq!(None, interaction.snapped());
        assert_eq!(
            Some(Point::new(350.0, 25.0)),
            hand.tiles().next().map(|tile| tile.sprite().position())
        );
    }
}
