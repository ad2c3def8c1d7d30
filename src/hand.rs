use crate::{
    tile_hit_test, AssetProvider, GameConfig, HandSlot, HandSlots, Outline, Point, PoolError,
    RenderItem, Renderable, SpriteUpdate, Tile, TileId, TilePool, TileStatus, HAND_COLUMNS,
    HAND_GEM_ORDER, HAND_ORIGIN_Y, HAND_ROWS, HAND_SPACER,
};
use log::{debug, trace};
use rand::Rng;
use smallvec::SmallVec;

#[cfg(test)]
mod test_setup;

/// # Returns
///
/// Where the [tile](Tile) in slot `index` rests: column `index % 3` and row `index % 2`,
/// [spaced](HAND_SPACER) by `50 * hand_scale` pixels, with the first column one spacer left of
/// the middle of the window and the first row [near the bottom](HAND_ORIGIN_Y).
pub fn slot_position(index: usize, window_width: f32, hand_scale: f32) -> Point {
    let spacer = HAND_SPACER * hand_scale;
    let column = (index % HAND_COLUMNS) as f32;
    let row = (index % HAND_ROWS) as f32;

    Point::new(
        column * spacer + (window_width / 2.0 - spacer),
        row * spacer + HAND_ORIGIN_Y,
    )
}

/// The [tile](Tile) held by the pointer and where it would be without snapping.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Held {
    slot: usize,
    free_position: Point,
}

/// The [tiles](Tile) available to the player for placement, laid out in fixed slots.
///
/// A slot keeps its home position for the whole session. It is empty after its [tile](Tile)
/// was placed on the board until the hand is [refilled](Hand::refill).
#[derive(Debug)]
pub struct Hand {
    slots: HandSlots,
    hand_scale: f32,
    board_scale: f32,
    held: Option<Held>,
}

impl Hand {
    /// Draws `config.hand_size` [tiles](Tile) from `pool` with the thread-local generator.
    ///
    /// # Errors
    ///
    /// * [PoolError::InsufficientTiles] when the pool holds fewer [tiles](Tile) than the hand
    /// needs. Nothing is drawn.
    ///
    /// # See Also
    ///
    /// * [Hand::new_with]
    pub fn new(
        config: &GameConfig,
        pool: &mut TilePool,
        assets: &impl AssetProvider,
    ) -> Result<Hand, PoolError> {
        Hand::new_with(&mut rand::thread_rng(), config, pool, assets)
    }

    /// Draws `config.hand_size` [tiles](Tile) from `pool` and rests each one
    /// [in hand](TileStatus::InHand) at its [slot position](slot_position), at hand scale.
    ///
    /// # Arguments
    ///
    /// * `rng`: The source of randomness for the draw.
    /// * `config`: The hand size, the window width, and both scales.
    /// * `pool`: The [tiles](Tile) to draw from.
    /// * `assets`: The block sizes used for hit testing.
    ///
    /// # Errors
    ///
    /// * [PoolError::InsufficientTiles] when the pool holds fewer [tiles](Tile) than the hand
    /// needs. Nothing is drawn.
    pub fn new_with<R: Rng + ?Sized>(
        rng: &mut R,
        config: &GameConfig,
        pool: &mut TilePool,
        assets: &impl AssetProvider,
    ) -> Result<Hand, PoolError> {
        let mut hand = Hand {
            slots: (0..config.hand_size)
                .map(|index| HandSlot {
                    home: slot_position(index, config.window_width, config.hand_scale),
                    tile: None,
                })
                .collect(),
            hand_scale: config.hand_scale,
            board_scale: config.board_scale,
            held: None,
        };
        let drawn = pool.draw_with(rng, config.hand_size, TileStatus::InHand)?;
        hand.fill(drawn, assets);

        Ok(hand)
    }

    /// The number of slots, which is the most [tiles](Tile) the hand can hold.
    #[inline]
    pub fn hand_size(&self) -> usize {
        self.slots.len()
    }

    /// The number of [tiles](Tile) in the hand.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.tile.is_some()).count()
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of empty slots.
    pub fn vacant_count(&self) -> usize {
        self.hand_size() - self.len()
    }

    /// Every slot in layout order.
    #[inline]
    pub fn slots(&self) -> &[HandSlot] {
        &self.slots
    }

    /// Every [tile](Tile) in the hand in layout order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter().filter_map(|slot| slot.tile.as_ref())
    }

    /// The [tile](Tile) the pointer is holding, if any.
    pub fn held_tile(&self) -> Option<&Tile> {
        let held = self.held?;
        self.slots[held.slot].tile.as_ref()
    }

    /// Draws one [tile](Tile) into every empty slot with the thread-local generator, or as many
    /// as remain in `pool` when there are fewer.
    ///
    /// # See Also
    ///
    /// * [Hand::refill_with]
    pub fn refill(
        &mut self,
        pool: &mut TilePool,
        assets: &impl AssetProvider,
    ) -> Result<usize, PoolError> {
        self.refill_with(&mut rand::thread_rng(), pool, assets)
    }

    /// Draws one [tile](Tile) into every empty slot, or as many as remain in `pool` when there
    /// are fewer. Slots are filled in layout order.
    ///
    /// # Errors
    ///
    /// * [PoolError] is passed on unchanged. The count is clamped to the pool's
    /// [remaining count](TilePool::remaining_count), so [PoolError::InsufficientTiles] cannot
    /// happen.
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) drawn.
    pub fn refill_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pool: &mut TilePool,
        assets: &impl AssetProvider,
    ) -> Result<usize, PoolError> {
        let count = self.vacant_count().min(pool.remaining_count());
        let drawn = pool.draw_with(rng, count, TileStatus::InHand)?;
        self.fill(drawn, assets);

        Ok(count)
    }

    /// Rests `drawn` in the empty slots in layout order.
    fn fill(&mut self, drawn: Vec<Tile>, assets: &impl AssetProvider) {
        let count = drawn.len();
        let hand_scale = self.hand_scale;
        let vacant = self.slots.iter_mut().filter(|slot| slot.tile.is_none());
        for (slot, mut tile) in vacant.zip(drawn) {
            let block_size = assets.block(tile.block_color());
            tile.sprite_mut().set_block_size(block_size);
            rest(&mut tile, slot.home, hand_scale);
            slot.tile = Some(tile);
        }
        debug!("drew {} tiles into the hand", count);
    }

    /// Returns a [tile](Tile) still held from an earlier press to its slot, clears every outline
    /// and resets every [tile](Tile) [in hand](TileStatus::InHand), then
    /// [selects](TileStatus::Selected) the first [tile](Tile) whose block contains `pointer`.
    /// Every other [tile](Tile) [sharing a color](Tile::shares_feature) with it becomes a
    /// [potential selection](TileStatus::PotentialSelection).
    ///
    /// # Returns
    ///
    /// The id of the selected [tile](Tile), or [None] when `pointer` missed every one.
    pub fn on_pointer_press(&mut self, pointer: Point) -> Option<TileId> {
        self.return_held();
        for tile in self.tiles_mut() {
            tile.set_status(TileStatus::InHand);
            tile.sprite_mut().set_outline(None);
        }

        let hit = self.slots.iter().enumerate().find_map(|(index, slot)| {
            slot.tile
                .as_ref()
                .filter(|tile| tile_hit_test(pointer, tile))
                .map(|tile| (index, tile.clone()))
        });
        let Some((slot, selected)) = hit else {
            self.held = None;
            return None;
        };

        for (index, tile) in self.indexed_tiles_mut() {
            if index == slot {
                tile.set_status(TileStatus::Selected);
            } else if tile.shares_feature(&selected) {
                tile.set_status(TileStatus::PotentialSelection);
            }
        }
        self.held = Some(Held {
            slot,
            free_position: selected.sprite().position(),
        });
        debug!(
            "selected tile {} ({:?} block, {:?} gem)",
            selected.id(),
            selected.block_color(),
            selected.gem_color()
        );

        Some(selected.id())
    }

    /// Moves the held [tile](Tile) by `dx` and `dy` from where the pointer last left it and
    /// shows it at board scale. Does nothing unless a [tile](Tile) is
    /// [held](TileStatus::is_held).
    ///
    /// # Returns
    ///
    /// Whether a [tile](Tile) moved.
    pub fn on_drag(&mut self, dx: f32, dy: f32) -> bool {
        let board_scale = self.board_scale;
        let Some(held) = self.held.as_mut() else {
            return false;
        };
        let Some(tile) = self.slots[held.slot].tile.as_mut() else {
            return false;
        };
        if !tile.status().is_held() {
            return false;
        }

        held.free_position = held.free_position.translate(dx, dy);
        tile.sprite_mut().move_to(held.free_position);
        tile.sprite_mut().update(SpriteUpdate {
            scale: Some(board_scale),
            ..SpriteUpdate::default()
        });

        true
    }

    /// Outlines the [selected](TileStatus::Selected) [tile](Tile) brightly and every
    /// [potential selection](TileStatus::PotentialSelection) dimly, clears every other outline,
    /// then resets every [tile](Tile) [in hand](TileStatus::InHand) except one
    /// [being placed](TileStatus::BeingPlaced).
    ///
    /// The held [tile](Tile) stays held until it is placed or returned to its slot.
    pub fn on_pointer_release(&mut self) {
        for tile in self.tiles_mut() {
            let outline = match Outline::for_status(tile.status()) {
                Ok(outline) => Some(outline),
                Err(error) => {
                    trace!("cleared outline of tile {}: {}", tile.id(), error);
                    None
                }
            };
            tile.sprite_mut().set_outline(outline);

            if tile.status() != TileStatus::BeingPlaced {
                tile.set_status(TileStatus::InHand);
            }
        }
    }

    /// Where the held [tile](Tile) would be if it had not snapped to a cell.
    pub(crate) fn held_free_position(&self) -> Option<Point> {
        self.held.map(|held| held.free_position)
    }

    pub(crate) fn held_tile_mut(&mut self) -> Option<&mut Tile> {
        let held = self.held?;
        self.slots[held.slot].tile.as_mut()
    }

    /// Hands the held [tile](Tile) to `place`, leaving its slot empty. When `place` gives the
    /// [tile](Tile) back with an error, it rests in its slot again instead.
    ///
    /// # Returns
    ///
    /// [None] when nothing was held, otherwise the id of the placed [tile](Tile) or the error.
    pub(crate) fn place_held<E>(
        &mut self,
        place: impl FnOnce(Tile) -> Result<(), (Tile, E)>,
    ) -> Option<Result<TileId, E>> {
        let held = self.held.take()?;
        let hand_scale = self.hand_scale;
        let slot = &mut self.slots[held.slot];
        let tile = slot.tile.take()?;
        let id = tile.id();

        match place(tile) {
            Ok(()) => Some(Ok(id)),
            Err((mut tile, error)) => {
                rest(&mut tile, slot.home, hand_scale);
                slot.tile = Some(tile);
                Some(Err(error))
            }
        }
    }

    /// Rests the held [tile](Tile) back at its slot at hand scale and hand draw order.
    ///
    /// # Returns
    ///
    /// The id of the returned [tile](Tile), or [None] when nothing was held.
    pub(crate) fn return_held(&mut self) -> Option<TileId> {
        let held = self.held.take()?;
        let hand_scale = self.hand_scale;
        let slot = &mut self.slots[held.slot];
        let tile = slot.tile.as_mut()?;
        rest(tile, slot.home, hand_scale);
        debug!("returned tile {} to the hand", tile.id());

        Some(tile.id())
    }

    fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.slots.iter_mut().filter_map(|slot| slot.tile.as_mut())
    }

    fn indexed_tiles_mut(&mut self) -> impl Iterator<Item = (usize, &mut Tile)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.tile.as_mut().map(|tile| (index, tile)))
    }
}

/// Puts `tile` [in hand](TileStatus::InHand) at `home`, at `hand_scale`, and at hand draw order.
fn rest(tile: &mut Tile, home: Point, hand_scale: f32) {
    tile.set_status(TileStatus::InHand);
    let sprite = tile.sprite_mut();
    sprite.move_to(home);
    sprite.update(SpriteUpdate {
        scale: Some(hand_scale),
        ..SpriteUpdate::default()
    });
    sprite.set_draw_order(HAND_GEM_ORDER);
}

impl Renderable for Hand {
    fn render_items(&self) -> SmallVec<[RenderItem; 3]> {
        self.tiles().flat_map(Tile::render_items).collect()
    }
}
