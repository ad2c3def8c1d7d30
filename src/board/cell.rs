use crate::{
    centroid, CellVertices, Coordinate, Point, RenderItem, RenderPart, Renderable, Tile,
    BOARD_ORDER,
};
use smallvec::{smallvec, SmallVec};

/// Whether a [board cell](BoardCell) can take a [tile](Tile).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellStatus {
    /// Empty and not under the pointer.
    Free,
    /// Empty and under the pointer during a drag. Reverts when the pointer leaves
    /// or the drag ends.
    Selected,
    /// Holds a placed [tile](Tile).
    Occupied,
}

/// One diamond-shaped slot on the isometric board.
///
/// The shape never changes after the board is laid out; only the status and the
/// occupying [tile](Tile) do.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardCell {
    coordinate: Coordinate,
    vertices: CellVertices,
    status: CellStatus,
    tile: Option<Tile>,
}

impl BoardCell {
    /// A new [free](CellStatus::Free) cell from its bottom, left, top, and right vertices.
    pub fn new(coordinate: Coordinate, vertices: CellVertices) -> BoardCell {
        BoardCell {
            coordinate,
            vertices,
            status: CellStatus::Free,
            tile: None,
        }
    }

    /// A new [free](CellStatus::Free) cell whose left and right vertices lie
    /// `width_division` to either side of `bottom` and `height_division` above it,
    /// and whose top vertex lies `2 * height_division` above `bottom`.
    pub fn from_bottom(
        coordinate: Coordinate,
        bottom: Point,
        width_division: f32,
        height_division: f32,
    ) -> BoardCell {
        let left = bottom.translate(-width_division, height_division);
        let right = bottom.translate(width_division, height_division);
        let top = bottom.translate(0.0, 2.0 * height_division);

        BoardCell::new(coordinate, [bottom, left, top, right])
    }

    /// Column and row of this cell.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Bottom, left, top, and right vertices.
    #[inline]
    pub fn vertices(&self) -> &CellVertices {
        &self.vertices
    }

    /// The vertex [tiles](Tile) snap to.
    #[inline]
    pub fn bottom(&self) -> Point {
        self.vertices[0]
    }

    /// The average of the four vertices.
    pub fn center(&self) -> Point {
        centroid(&self.vertices).unwrap_or_else(|| self.bottom())
    }

    /// The current status.
    #[inline]
    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// The [tile](Tile) placed here, if any.
    #[inline]
    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }

    pub(crate) fn occupy(&mut self, tile: Tile) {
        self.tile = Some(tile);
        self.status = CellStatus::Occupied;
    }
}

impl Renderable for BoardCell {
    fn render_items(&self) -> SmallVec<[RenderItem; 3]> {
        let mut items: SmallVec<[RenderItem; 3]> = smallvec![RenderItem {
            part: RenderPart::Cell {
                coordinate: self.coordinate,
                status: self.status,
                vertices: self.vertices,
            },
            position: self.bottom(),
            scale: 1.0,
            rotation: 0.0,
            order: BOARD_ORDER,
        }];
        if let Some(tile) = &self.tile {
            items.extend(tile.render_items());
        }

        items
    }
}
