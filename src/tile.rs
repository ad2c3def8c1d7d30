use crate::Sprite;
use itertools::iproduct;
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// The number of unique [`Tile`] color pairs. 36 tiles from 6 block colors and 6 gem colors.
pub const TILES_LEN: usize = TileColor::COLORS_LEN * TileColor::COLORS_LEN;

/// Describes the color of either the block or the gem on a [`Tile`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum TileColor {
    /// `0`.
    Pink = 0,
    /// `1`.
    Purple = 1,
    /// `2`.
    Indigo = 2,
    /// `3`.
    Blue = 3,
    /// `4`.
    Aqua = 4,
    /// `5`.
    Green = 5,
}

impl TileColor {
    /// The number of [`TileColor`] variants. 6 colors.
    pub const COLORS_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`TileColor`] variants in order.
    #[inline]
    pub fn colors() -> [TileColor; TileColor::COLORS_LEN] {
        [
            TileColor::Pink,
            TileColor::Purple,
            TileColor::Indigo,
            TileColor::Blue,
            TileColor::Aqua,
            TileColor::Green,
        ]
    }
}

impl Distribution<TileColor> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TileColor {
        let index = rng.gen_range(0..TileColor::COLORS_LEN);
        num_traits::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..TileColor::COLORS_LEN (0..{:?}).",
                index,
                TileColor::COLORS_LEN
            );
        })
    }
}

/// # Returns
///
/// An iterator of every unique `(block_color, gem_color)` pair in block then gem order.
pub fn color_pairs() -> impl Iterator<Item = (TileColor, TileColor)> {
    iproduct!(TileColor::colors(), TileColor::colors())
}

/// Where a [`Tile`] is and what the player is doing with it.
///
/// ```text
/// InBag -> InHand -> Selected -> BeingPlaced -> PlacedOnBoard
///            ^  \        |            |
///            |   PotentialSelection   |
///            +-----------+------------+
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TileStatus {
    /// Still in the [pool](crate::TilePool).
    InBag,
    /// Resting in a [hand](crate::Hand).
    InHand,
    /// Clicked and held by the pointer.
    Selected,
    /// Shares a color with the selected [tile](Tile) in the same hand.
    PotentialSelection,
    /// Dragged over a free board cell and snapped to it.
    BeingPlaced,
    /// Released onto a board cell. Terminal for the session.
    PlacedOnBoard,
}

impl TileStatus {
    /// Whether the pointer is currently holding a [tile](Tile) with this status.
    #[inline]
    pub fn is_held(self) -> bool {
        matches!(self, TileStatus::Selected | TileStatus::BeingPlaced)
    }

    /// Whether a [tile](Tile) with this status may be a member of a [hand](crate::Hand).
    #[inline]
    pub fn is_in_hand(self) -> bool {
        matches!(
            self,
            TileStatus::InHand
                | TileStatus::Selected
                | TileStatus::PotentialSelection
                | TileStatus::BeingPlaced
        )
    }
}

/// Identifies one physical [tile](Tile). Two tiles may share colors but never an id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TileId(pub usize);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One physical game piece: a colored block carrying a colored gem.
///
/// Tiles are created once by the [pool](crate::TilePool) and then moved by value between
/// the pool, a [hand](crate::Hand), and a [board cell](crate::BoardCell), so a tile is always
/// in exactly one of those places.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    id: TileId,
    block_color: TileColor,
    gem_color: TileColor,
    status: TileStatus,
    sprite: Sprite,
}

impl Tile {
    /// A new [tile](Tile) in the bag with a default sprite.
    pub fn new(id: TileId, block_color: TileColor, gem_color: TileColor) -> Tile {
        Tile {
            id,
            block_color,
            gem_color,
            status: TileStatus::InBag,
            sprite: Sprite::default(),
        }
    }

    /// The identity of this tile.
    #[inline]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// The color of the block.
    #[inline]
    pub fn block_color(&self) -> TileColor {
        self.block_color
    }

    /// The color of the gem.
    #[inline]
    pub fn gem_color(&self) -> TileColor {
        self.gem_color
    }

    /// The current status.
    #[inline]
    pub fn status(&self) -> TileStatus {
        self.status
    }

    /// The render-facing state.
    #[inline]
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Whether `other` shares the block color or the gem color with this tile.
    #[inline]
    pub fn shares_feature(&self, other: &Tile) -> bool {
        self.block_color == other.block_color || self.gem_color == other.gem_color
    }

    pub(crate) fn set_status(&mut self, status: TileStatus) {
        self.status = status;
    }

    pub(crate) fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}
