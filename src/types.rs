use crate::{Point, Tile, TileId, HAND_CAPACITY};
use bimap::BiBTreeMap;
use smallvec::SmallVec;

/// Column and row of a [board cell](crate::BoardCell), `(x, y)`. Cell `(0, 0)` is the
/// bottom-most diamond; x grows up and to the right, y grows up and to the left.
///
/// # See Also
///
/// * [BoardGrid::cell_at](crate::BoardGrid::cell_at)
pub type Coordinate = (usize, usize);
/// The bottom, left, top, and right vertices of a [board cell](crate::BoardCell).
///
/// # See Also
///
/// * [BoardCell::vertices](crate::BoardCell::vertices)
pub type CellVertices = [Point; 4];
/// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
///
/// # See Also
///
/// * [TilePool](crate::TilePool)
pub type Bag = Vec<Tile>;
/// The slots of a hand in layout order, where a slot is empty after its [tile](Tile)
/// was placed on the board.
///
/// # See Also
///
/// * [HAND_CAPACITY]
/// * [Hand](crate::Hand)
pub type HandSlots = SmallVec<[HandSlot; HAND_CAPACITY]>;
/// A bimap of [tiles](Tile) placed on the board to the [coordinates](Coordinate) of
/// their cells.
///
/// # See Also
///
/// * [BoardGrid::placements](crate::BoardGrid::placements)
pub type Placements = BiBTreeMap<TileId, Coordinate>;

/// A fixed position in the hand layout and the [tile](Tile) resting there, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSlot {
    /// Where a [tile](Tile) in this slot is anchored at hand scale.
    pub home: Point,
    /// The [tile](Tile) occupying this slot.
    pub tile: Option<Tile>,
}
