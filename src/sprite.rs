use crate::{
    CellStatus, Coordinate, Point, Size, Tile, TileColor, TileStatus, HAND_BLOCK_ORDER,
    HAND_GEM_ORDER,
};
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

/// The highlight drawn around a [tile](Tile) in hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outline {
    /// Drawn around the selected [tile](Tile).
    Bright,
    /// Drawn around [tiles](Tile) sharing a color with the selected one.
    Dim,
}

/// Describes the reason why an [outline](Outline) could not be chosen.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OutlineError {
    /// Only selected and potentially selected [tiles](Tile) are outlined.
    #[error("cannot outline a tile whose status is {status:?}")]
    MissingOutline {
        /// The status of the [tile](Tile) asked to be outlined.
        status: TileStatus,
    },
}

impl Outline {
    /// # Errors
    ///
    /// * [OutlineError::MissingOutline] when `status` is neither
    /// [TileStatus::Selected] nor [TileStatus::PotentialSelection].
    ///
    /// # Returns
    ///
    /// The outline a [tile](Tile) with `status` is drawn with.
    pub fn for_status(status: TileStatus) -> Result<Outline, OutlineError> {
        match status {
            TileStatus::Selected => Ok(Outline::Bright),
            TileStatus::PotentialSelection => Ok(Outline::Dim),
            status => Err(OutlineError::MissingOutline { status }),
        }
    }
}

/// A partial change to a [sprite](Sprite). Fields left as [None] are kept.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SpriteUpdate {
    /// New horizontal anchor position.
    pub x: Option<f32>,
    /// New vertical anchor position.
    pub y: Option<f32>,
    /// New rotation in degrees, clockwise.
    pub rotation: Option<f32>,
    /// New uniform scale.
    pub scale: Option<f32>,
}

/// What the rendering layer needs to draw one [tile](Tile): the block, the gem on top of it,
/// and an optional outline, all sharing one anchor at the bottom center of the block.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    position: Point,
    scale: f32,
    rotation: f32,
    block_order: i32,
    gem_order: i32,
    outline: Option<Outline>,
    block_size: Size,
}

impl Default for Sprite {
    fn default() -> Sprite {
        Sprite {
            position: Point::default(),
            scale: 1.0,
            rotation: 0.0,
            block_order: HAND_BLOCK_ORDER,
            gem_order: HAND_GEM_ORDER,
            outline: None,
            block_size: Size::default(),
        }
    }
}

impl Sprite {
    /// The anchor, at the bottom center of the block.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Uniform scale applied to block, gem, and outline.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rotation in degrees, clockwise.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Draw order of the block. Larger is drawn later.
    #[inline]
    pub fn block_order(&self) -> i32 {
        self.block_order
    }

    /// Draw order of the gem, always one above the block.
    #[inline]
    pub fn gem_order(&self) -> i32 {
        self.gem_order
    }

    /// Draw order of the outline, one above the gem.
    #[inline]
    pub fn outline_order(&self) -> i32 {
        self.gem_order + 1
    }

    /// The outline currently shown, if any.
    #[inline]
    pub fn outline(&self) -> Option<Outline> {
        self.outline
    }

    /// Size of the block image before scaling.
    #[inline]
    pub fn block_size(&self) -> Size {
        self.block_size
    }

    /// Size of the block image as drawn.
    #[inline]
    pub fn scaled_block_size(&self) -> Size {
        self.block_size.scaled(self.scale)
    }

    /// The outline is centered halfway up the block.
    #[inline]
    pub fn outline_position(&self) -> Point {
        self.position
            .translate(0.0, self.scaled_block_size().height / 2.0)
    }

    /// Applies every field set in `update`, keeping block, gem and outline together.
    pub fn update(&mut self, update: SpriteUpdate) {
        let SpriteUpdate {
            x,
            y,
            rotation,
            scale,
        } = update;
        if let Some(x) = x {
            self.position.x = x;
        }
        if let Some(y) = y {
            self.position.y = y;
        }
        if let Some(rotation) = rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = scale {
            self.scale = scale;
        }
    }

    pub(crate) fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    pub(crate) fn set_block_size(&mut self, block_size: Size) {
        self.block_size = block_size;
    }

    pub(crate) fn set_draw_order(&mut self, gem_order: i32) {
        self.block_order = gem_order - 1;
        self.gem_order = gem_order;
    }

    pub(crate) fn set_outline(&mut self, outline: Option<Outline>) {
        self.outline = outline;
    }
}

/// Names what a [render item](RenderItem) shows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderPart {
    /// The board background image, anchored at its center.
    Board,
    /// An invisible diamond-shaped board cell, useful for debug overlays.
    Cell {
        /// Column and row of the cell.
        coordinate: Coordinate,
        /// Whether the cell is free, hovered, or occupied.
        status: CellStatus,
        /// Bottom, left, top, and right vertices.
        vertices: [Point; 4],
    },
    /// The block image of a [tile](Tile) in the given color.
    Block(TileColor),
    /// The gem image of a [tile](Tile) in the given color.
    Gem(TileColor),
    /// An outline image.
    Outline(Outline),
}

/// One image the rendering layer should draw this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderItem {
    /// What to draw.
    pub part: RenderPart,
    /// Where its anchor goes.
    pub position: Point,
    /// Uniform scale.
    pub scale: f32,
    /// Rotation in degrees, clockwise.
    pub rotation: f32,
    /// Larger orders are drawn on top.
    pub order: i32,
}

/// Exposes read-only drawing state to the rendering layer. The core never draws.
pub trait Renderable {
    /// Every image making up this object, in no particular order.
    fn render_items(&self) -> SmallVec<[RenderItem; 3]>;
}

impl Renderable for Tile {
    fn render_items(&self) -> SmallVec<[RenderItem; 3]> {
        let sprite = self.sprite();
        let item = |part, position, order| RenderItem {
            part,
            position,
            scale: sprite.scale(),
            rotation: sprite.rotation(),
            order,
        };

        let mut items: SmallVec<[RenderItem; 3]> = smallvec![
            item(
                RenderPart::Block(self.block_color()),
                sprite.position(),
                sprite.block_order(),
            ),
            item(
                RenderPart::Gem(self.gem_color()),
                sprite.position(),
                sprite.gem_order(),
            ),
        ];
        if let Some(outline) = sprite.outline() {
            items.push(item(
                RenderPart::Outline(outline),
                sprite.outline_position(),
                sprite.outline_order(),
            ));
        }

        items
    }
}
