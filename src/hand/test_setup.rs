use crate::{
    slot_position, AssetProvider, FixedAssets, GameConfig, Hand, HandSlot, Tile, TileColor,
    TileId, TileStatus,
};

impl Hand {
    /// Generates a [Hand] laid out for the default [config](GameConfig) with one
    /// [tile](Tile) per `(block_color, gem_color)` pair, in order.
    ///
    /// # Returns
    ///
    /// A [Hand] struct with the properties set to the following:
    /// * `slots`: One slot per pair, each holding a [tile](Tile) [in hand](TileStatus::InHand)
    /// with [ids](TileId) counting up from `0`, sized by the default [FixedAssets].
    /// * `hand_scale`: `1.0`.
    /// * `board_scale`: `2.0`.
    /// * `held`: Nothing.
    pub fn with_tiles(colors: &[(TileColor, TileColor)]) -> Hand {
        let config = GameConfig::default();
        let assets = FixedAssets::default();
        let drawn = colors
            .iter()
            .enumerate()
            .map(|(index, &(block_color, gem_color))| {
                let mut tile = Tile::new(TileId(index), block_color, gem_color);
                tile.set_status(TileStatus::InHand);
                tile.sprite_mut().set_block_size(assets.block(block_color));
                tile
            })
            .collect();

        let mut hand = Hand {
            slots: (0..colors.len())
                .map(|index| HandSlot {
                    home: slot_position(index, config.window_width, config.hand_scale),
                    tile: None,
                })
                .collect(),
            hand_scale: config.hand_scale,
            board_scale: config.board_scale,
            held: None,
        };
        hand.fill(drawn, &assets);

        hand
    }

    /// Removes the held [tile](Tile) from its slot, leaving the slot empty.
    pub fn take_held(&mut self) -> Option<Tile> {
        let mut taken = None;
        self.place_held(|tile| {
            taken = Some(tile);
            Ok::<(), (Tile, ())>(())
        });

        taken
    }

    /// The status of every [tile](Tile) in layout order.
    pub fn statuses(&self) -> Vec<TileStatus> {
        self.tiles().map(Tile::status).collect()
    }
}
