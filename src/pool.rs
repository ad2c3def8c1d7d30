use crate::{color_pairs, Bag, Tile, TileId, TileStatus};
use log::debug;
use rand::seq::index;
use rand::Rng;
use thiserror::Error;

/// Describes the reason why [tiles](Tile) could not be [drawn](TilePool::draw).
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PoolError {
    /// Attempting to draw more [tiles](Tile) than remain in the pool.
    #[error("cannot draw {requested} tiles from a pool of {remaining}")]
    InsufficientTiles {
        /// The number of [tiles](Tile) requested.
        requested: usize,
        /// The number of [tiles](Tile) left in the pool.
        remaining: usize,
    },
}

/// Owns every [tile](Tile) that has not been drawn yet.
#[derive(Debug)]
pub struct TilePool {
    /// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
    bag: Bag,
    /// The number of copies of every unique [tile](Tile).
    no_sets: usize,
}

impl TilePool {
    /// Creates one [tile](Tile) for every `(block_color, gem_color)` pair, `no_sets` times,
    /// all [in the bag](TileStatus::InBag). [Tile ids](TileId) count up from `0`.
    pub fn new(no_sets: usize) -> TilePool {
        let bag: Bag = (0..no_sets)
            .flat_map(|_| color_pairs())
            .enumerate()
            .map(|(index, (block_color, gem_color))| {
                Tile::new(TileId(index), block_color, gem_color)
            })
            .collect();
        debug!("created a pool of {} tiles from {} sets", bag.len(), no_sets);

        TilePool { bag, no_sets }
    }

    /// The number of copies of every unique [tile](Tile) the pool started with.
    #[inline]
    pub fn no_sets(&self) -> usize {
        self.no_sets
    }

    /// The number of [tiles](Tile) left to draw.
    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.bag.len()
    }

    /// The [tiles](Tile) left to draw, in no particular order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.bag
    }

    /// Draws `count` distinct [tiles](Tile) uniformly at random with the thread-local
    /// generator.
    ///
    /// # Errors
    ///
    /// * [PoolError::InsufficientTiles] Attempting to draw more [tiles](Tile) than remain.
    /// The pool is left untouched.
    ///
    /// # See Also
    ///
    /// * [TilePool::draw_with]
    pub fn draw(&mut self, count: usize, new_status: TileStatus) -> Result<Vec<Tile>, PoolError> {
        self.draw_with(&mut rand::thread_rng(), count, new_status)
    }

    /// Selects `count` distinct [tiles](Tile) uniformly at random without replacement,
    /// removes them from the pool, and sets each to `new_status`. Either every requested
    /// [tile](Tile) is drawn or none is.
    ///
    /// # Arguments
    ///
    /// * `rng`: The source of randomness.
    /// * `count`: The number of [tiles](Tile) to draw.
    /// * `new_status`: The status every drawn [tile](Tile) is given.
    ///
    /// # Errors
    ///
    /// * [PoolError::InsufficientTiles] Attempting to draw more [tiles](Tile) than remain.
    /// The pool is left untouched.
    ///
    /// # Returns
    ///
    /// The drawn [tiles](Tile) in no particular order.
    pub fn draw_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        new_status: TileStatus,
    ) -> Result<Vec<Tile>, PoolError> {
        let remaining = self.bag.len();
        if count > remaining {
            return Err(PoolError::InsufficientTiles {
                requested: count,
                remaining,
            });
        }

        let mut indexes = index::sample(rng, remaining, count).into_vec();
        // removing from the back keeps smaller indexes valid across swap_remove
        indexes.sort_unstable_by(|a, b| b.cmp(a));
        let drawn: Vec<Tile> = indexes
            .into_iter()
            .map(|index| {
                let mut tile = self.bag.swap_remove(index);
                tile.set_status(new_status);
                tile
            })
            .collect();
        debug!(
            "drew {} tiles as {:?}, {} remain",
            drawn.len(),
            new_status,
            self.bag.len()
        );

        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TileColor, TILES_LEN};
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_pool_len() {
        for no_sets in 0..5 {
            let pool = TilePool::new(no_sets);

            assert_eq!(TILES_LEN * no_sets, pool.remaining_count());
            assert_eq!(no_sets, pool.no_sets());
        }
    }

    #[test]
    fn new_pool_every_pair_no_sets_times() {
        let no_sets = 3;
        let pool = TilePool::new(no_sets);

        let counts = pool
            .tiles()
            .iter()
            .map(|tile| (tile.block_color(), tile.gem_color()))
            .counts();

        assert_eq!(TILES_LEN, counts.len());
        for count in counts.values() {
            assert_eq!(no_sets, *count);
        }
        assert_eq!(0, pool.tiles().iter().map(Tile::id).duplicates().count());
        for tile in pool.tiles() {
            assert_eq!(TileStatus::InBag, tile.status());
        }
    }

    #[test]
    fn draw_removes_tiles() {
        let mut pool = TilePool::new(3);
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(1..=TILES_LEN);

        let drawn = pool
            .draw(count, TileStatus::InHand)
            .expect("draw should return Ok");

        assert_eq!(count, drawn.len());
        assert_eq!(TILES_LEN * 3 - count, pool.remaining_count());
        assert_eq!(0, drawn.iter().map(Tile::id).duplicates().count());
        for tile in &drawn {
            assert_eq!(TileStatus::InHand, tile.status());
            assert!(pool.tiles().iter().all(|other| other.id() != tile.id()));
        }
    }

    #[test]
    fn draw_every_tile() {
        let mut pool = TilePool::new(1);

        let drawn = pool
            .draw(TILES_LEN, TileStatus::InHand)
            .expect("draw should return Ok");

        assert_eq!(0, pool.remaining_count());
        assert_eq!(
            (0..TILES_LEN).map(TileId).collect_vec(),
            drawn.iter().map(Tile::id).sorted().collect_vec()
        );
    }

    #[test]
    fn draw_zero() {
        let mut pool = TilePool::new(1);

        let drawn = pool
            .draw(0, TileStatus::InHand)
            .expect("draw should return Ok");

        assert!(drawn.is_empty());
        assert_eq!(TILES_LEN, pool.remaining_count());
    }

    #[test]
    fn draw_insufficient_tiles_leaves_pool_unchanged() {
        let mut pool = TilePool::new(1);
        pool.draw(30, TileStatus::InHand)
            .expect("draw should return Ok");
        let before = pool.tiles().to_vec();

        let error = pool
            .draw(7, TileStatus::InHand)
            .expect_err("draw should return Err");

        assert_eq!(
            PoolError::InsufficientTiles {
                requested: 7,
                remaining: 6,
            },
            error
        );
        assert_eq!(before, pool.tiles());
    }

    #[test]
    fn draw_with_same_seed_same_tiles() {
        let mut first = TilePool::new(2);
        let mut second = TilePool::new(2);

        let first_drawn = first
            .draw_with(&mut StdRng::seed_from_u64(42), 6, TileStatus::InHand)
            .expect("draw_with should return Ok");
        let second_drawn = second
            .draw_with(&mut StdRng::seed_from_u64(42), 6, TileStatus::InHand)
            .expect("draw_with should return Ok");

        assert_eq!(first_drawn, second_drawn);
        assert_eq!(first.tiles(), second.tiles());
    }

    #[test]
    fn draw_colors_come_from_pool() {
        let mut pool = TilePool::new(1);

        let drawn = pool
            .draw(TILES_LEN - 1, TileStatus::InHand)
            .expect("draw should return Ok");

        let last = &pool.tiles()[0];
        let pair = (last.block_color(), last.gem_color());
        assert!(drawn
            .iter()
            .all(|tile| (tile.block_color(), tile.gem_color()) != pair));
        assert!(TileColor::colors().contains(&pair.0));
    }
}
