use crate::{Outline, Size, TileColor};
use serde::{Deserialize, Serialize};

/// Supplies the dimensions of every image the game draws. Loading, file paths, and textures
/// stay with the implementor; the core only reads sizes, keyed by what the image shows.
///
/// Passed to [GameSession::new](crate::GameSession::new) and read while laying out the board
/// and the hand.
pub trait AssetProvider {
    /// The block image for `color`.
    fn block(&self, color: TileColor) -> Size;

    /// The gem image for `color`. Gems share the block's anchor, so only renderers read
    /// this.
    fn gem(&self, color: TileColor) -> Size;

    /// The outline image for `outline`. Outlines are centered halfway up the block, so only
    /// renderers read this.
    fn outline(&self, outline: Outline) -> Size;

    /// The unscaled board background image.
    fn board(&self) -> Size;
}

/// An [AssetProvider] where every block, gem, and outline share one size each.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedAssets {
    /// Width of every block image.
    pub block_width: f32,
    /// Height of every block image.
    pub block_height: f32,
    /// Width of every gem image.
    pub gem_width: f32,
    /// Height of every gem image.
    pub gem_height: f32,
    /// Width of both outline images.
    pub outline_width: f32,
    /// Height of both outline images.
    pub outline_height: f32,
    /// Width of the board background.
    pub board_width: f32,
    /// Height of the board background.
    pub board_height: f32,
}

impl Default for FixedAssets {
    fn default() -> FixedAssets {
        FixedAssets {
            block_width: 32.0,
            block_height: 48.0,
            gem_width: 16.0,
            gem_height: 16.0,
            outline_width: 36.0,
            outline_height: 52.0,
            board_width: 256.0,
            board_height: 128.0,
        }
    }
}

impl AssetProvider for FixedAssets {
    fn block(&self, _color: TileColor) -> Size {
        Size::new(self.block_width, self.block_height)
    }

    fn gem(&self, _color: TileColor) -> Size {
        Size::new(self.gem_width, self.gem_height)
    }

    fn outline(&self, _outline: Outline) -> Size {
        Size::new(self.outline_width, self.outline_height)
    }

    fn board(&self) -> Size {
        Size::new(self.board_width, self.board_height)
    }
}
